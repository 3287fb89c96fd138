use anyhow::Result;
use std::fs;
use std::path::Path;

/// Read the file at `path` into `strbuf`, replacing its contents.
pub fn read_to_buf<T: AsRef<Path>>(path: T, strbuf: &mut String) -> Result<()> {
    use std::io::Read;
    let path = path.as_ref();
    strbuf.clear();
    let cap = fs::metadata(path)?.len() as usize;
    if cap > strbuf.capacity() {
        strbuf.reserve(cap);
    }
    let mut f = fs::File::open(path)?;
    f.read_to_string(strbuf)?;
    Ok(())
}
