/// Traits shared by all interners.
mod traits;
pub use traits::{GetStr, InternStr, LookupStr};

/// Interner that checks for duplicates and only stores each unique string once.
mod packed;
pub use packed::PackedInterner;

/// Internals for mapping keys to interned strings.
mod key_to_str;
use key_to_str::KeyToStr;

/// Wrapper around interners that uses typed keys.
mod typed;
pub use typed::TypedInterner;

/// Internals for mapping interned strings to keys.
mod str_to_key;
use str_to_key::StrToKey;

type Hasher = std::hash::BuildHasherDefault<rustc_hash::FxHasher>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Interner is full: key {0} does not fit in the key type")]
    KeyOverflow(usize),
    #[error("Interner is full: string offset {0} does not fit in the index type")]
    IdxOverflow(usize),
    #[error("No string interned under key {0}")]
    MissingKey(usize),
}
