use std::marker::PhantomData;

/// Vec wrapper indexed by a typed id instead of a bare `usize`.
#[derive(Debug, Hash, PartialEq, Eq, Clone)]
pub struct IdVec<K, V> {
    vec: Vec<V>,
    _phantom: PhantomData<K>,
}

impl<K, V> Default for IdVec<K, V> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<K, V> IdVec<K, V> {
    fn new(vec: Vec<V>) -> Self {
        Self {
            vec,
            _phantom: PhantomData,
        }
    }

    /// Create a new `IdVec` with the given capacity.
    pub fn with_capacity(cap: usize) -> Self {
        Self::new(Vec::with_capacity(cap))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vec.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.vec.iter()
    }
}

impl<K: From<usize>, V> IdVec<K, V> {
    /// Push `v` and return the id that can be used to retrieve it later.
    #[inline]
    pub fn push(&mut self, v: V) -> K {
        let id = self.vec.len().into();
        self.vec.push(v);
        id
    }
}

impl<K: Into<usize>, V> IdVec<K, V> {
    /// Get the value with id `k`. Panics if `k` was not produced by this `IdVec`.
    #[inline]
    pub fn get(&self, k: K) -> &V {
        &self.vec[k.into()]
    }

    #[inline]
    pub fn get_mut(&mut self, k: K) -> &mut V {
        &mut self.vec[k.into()]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Key(u8);

    impl From<usize> for Key {
        fn from(val: usize) -> Self {
            Self(val as u8)
        }
    }

    impl From<Key> for usize {
        fn from(key: Key) -> usize {
            key.0 as usize
        }
    }

    #[test]
    fn test_push_and_get() {
        let mut ids: IdVec<Key, &str> = IdVec::with_capacity(4);
        let a = ids.push("a");
        let b = ids.push("b");
        assert_eq!(Key(0), a);
        assert_eq!(Key(1), b);
        assert_eq!(&"b", ids.get(b));

        *ids.get_mut(a) = "z";
        let values: Vec<_> = ids.iter().collect();
        assert_eq!(vec![&"z", &"b"], values);
        assert_eq!(2, ids.len());
    }
}
