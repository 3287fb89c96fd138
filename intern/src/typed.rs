use anyhow::Result;
use std::marker::PhantomData;

use super::{GetStr, InternStr, LookupStr};

/// Wraps an interner so its keys are a typed id (e.g. `RoomId`)
/// instead of the interner's raw integer key.
#[derive(Debug)]
pub struct TypedInterner<OuterKey, T> {
    interner: T,
    _phantom: PhantomData<OuterKey>,
}

impl<K, T> TypedInterner<K, T> {
    pub fn new(interner: T) -> Self {
        Self {
            interner,
            _phantom: PhantomData,
        }
    }
}

// GetStr ///////////////////
impl<OuterKey, T> GetStr for TypedInterner<OuterKey, T>
where
    T: GetStr,
    OuterKey: Into<T::Key>,
{
    type Key = OuterKey;

    fn get(&self, k: OuterKey) -> Result<&str> {
        self.interner.get(k.into())
    }

    fn len(&self) -> usize {
        self.interner.len()
    }

    fn str_len(&self) -> usize {
        self.interner.str_len()
    }
}

// InternStr ///////////////
impl<OuterKey, T> InternStr for TypedInterner<OuterKey, T>
where
    T: InternStr,
    T::Key: Into<OuterKey>,
{
    type Key = OuterKey;

    fn intern<U: AsRef<str>>(&mut self, s: U) -> Result<OuterKey> {
        Ok(self.interner.intern(s)?.into())
    }
}

// LookupStr ///////////////
impl<OuterKey, T> LookupStr for TypedInterner<OuterKey, T>
where
    T: LookupStr,
    T::Key: Into<OuterKey>,
{
    type Key = OuterKey;

    fn lookup<U: AsRef<str>>(&self, s: U) -> Option<OuterKey> {
        self.interner.lookup(s).map(Into::into)
    }
}
