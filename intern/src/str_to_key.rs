use anyhow::Result;
use hashbrown::hash_map::{HashMap, RawEntryMut};
use std::hash::BuildHasher;

use super::{GetStr, InternStr};

/// Internals used for keeping track of interned string ids.
/// Uses a HashMap with no value (w/ `()` as the value parameter) internally.
/// This acts as a mapping from string hash -> Key, w/o double-storing the
/// actual contents of the string.
#[derive(Debug)]
pub struct StrToKey<Key = u32, H = crate::Hasher> {
    map: HashMap<Key, (), ()>,
    hasher: H,
}

impl<Key, H: Default> StrToKey<Key, H> {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            map: HashMap::with_capacity_and_hasher(cap, ()),
            hasher: H::default(),
        }
    }
}

impl<Key: Copy, H: BuildHasher> StrToKey<Key, H> {
    /// Find the key for `s`, if it has been interned into `key_to_str`.
    pub fn lookup<T>(&self, s: &str, key_to_str: &T) -> Option<Key>
    where
        T: GetStr<Key = Key>,
    {
        let hash = self.hasher.hash_one(s);
        self.map
            .raw_entry()
            .from_hash(hash, |candidate| matches(key_to_str, *candidate, s))
            .map(|(k, _)| *k)
    }

    pub fn intern<T>(&mut self, s: &str, key_to_str: &mut T) -> Result<Key>
    where
        T: GetStr<Key = Key> + InternStr<Key = Key>,
    {
        let hash = self.hasher.hash_one(s);
        // the value of the matching entry (if any) is the key into `key_to_str`:
        let entry = self
            .map
            .raw_entry_mut()
            .from_hash(hash, |candidate| matches(key_to_str, *candidate, s));

        match entry {
            RawEntryMut::Occupied(entry) => Ok(*entry.into_key()),
            RawEntryMut::Vacant(entry) => {
                let new_k = key_to_str.intern(s)?;
                let hasher = &self.hasher;
                let key_to_str = &*key_to_str;
                entry.insert_with_hasher(hash, new_k, (), |colliding_key| {
                    key_to_str
                        .get(*colliding_key)
                        .map(|interned| hasher.hash_one(interned))
                        .unwrap_or_default()
                });
                Ok(new_k)
            }
        }
    }
}

fn matches<T: GetStr>(key_to_str: &T, k: T::Key, s: &str) -> bool {
    key_to_str.get(k).map_or(false, |interned| interned == s)
}
