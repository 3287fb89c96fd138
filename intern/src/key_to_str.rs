use anyhow::Result;
use std::marker::PhantomData;

use super::{Error, GetStr, InternStr};

/// Internals used by all of our interners.
/// All strings live in one buffer; `key_to_str[k]` is the start offset of string `k`.
#[derive(Debug)]
pub struct KeyToStr<Key = u32, Idx = usize> {
    key_to_str: Vec<Idx>,
    strings: String,
    _phantom: PhantomData<Key>,
}

impl<Key, Idx> KeyToStr<Key, Idx> {
    pub fn with_capacity_and_avg_len(cap: usize, avg_len: usize) -> Self {
        Self {
            key_to_str: Vec::with_capacity(cap),
            strings: String::with_capacity(cap * avg_len),
            _phantom: PhantomData,
        }
    }
}

// GetStr ////////////////////
impl<Key, Idx> GetStr for KeyToStr<Key, Idx>
where
    Key: TryInto<usize> + Copy,
    Idx: Into<usize> + Copy,
{
    type Key = Key;

    fn get(&self, k: Key) -> Result<&str> {
        let k: usize = k.try_into().map_err(|_| Error::MissingKey(usize::MAX))?;
        if k >= self.key_to_str.len() {
            return Err(Error::MissingKey(k).into());
        }
        let (start, end) = self.get_start_and_end(k);
        Ok(&self.strings[start..end])
    }

    fn len(&self) -> usize {
        self.key_to_str.len()
    }

    fn str_len(&self) -> usize {
        self.strings.len()
    }
}

// InternStr ///////////////////
impl<Key, Idx> InternStr for KeyToStr<Key, Idx>
where
    Key: TryFrom<usize>,
    Idx: TryFrom<usize>,
{
    type Key = Key;

    fn intern<T: AsRef<str>>(&mut self, s: T) -> Result<Key> {
        let start = self.strings.len();
        let next = self.key_to_str.len();
        let k = Key::try_from(next).map_err(|_| Error::KeyOverflow(next))?;
        let idx = Idx::try_from(start).map_err(|_| Error::IdxOverflow(start))?;

        self.key_to_str.push(idx);
        self.strings.push_str(s.as_ref());

        Ok(k)
    }
}

impl<Key, Idx> KeyToStr<Key, Idx>
where
    Idx: Into<usize> + Copy,
{
    fn get_start_and_end(&self, k: usize) -> (usize, usize) {
        let start = self.key_to_str[k].into();
        let end = match self.key_to_str.get(k + 1) {
            Some(next) => (*next).into(),
            None => self.strings.len(),
        };
        (start, end)
    }
}
