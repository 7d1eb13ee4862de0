use std::hash::{DefaultHasher, Hash, Hasher};

pub const DEFAULT_BUCKETS: usize = 100;

/// A separate-chaining hash table with a fixed bucket count.
///
/// Collisions land in the same bucket and are resolved by a linear walk of
/// the chain; the table never rehashes or grows.
#[derive(Debug)]
pub struct HashTable<K, V> {
    buckets: Vec<Vec<(K, V)>>,
    len: usize,
}

impl<K: Hash + Eq, V> HashTable<K, V> {
    pub fn new(bucket_count: usize) -> Self {
        assert!(bucket_count > 0, "HashTable: bucket count must be > 0");
        let mut buckets = Vec::with_capacity(bucket_count);
        for _ in 0..bucket_count {
            buckets.push(Vec::new());
        }
        Self { buckets, len: 0 }
    }

    fn bucket_index(&self, key: &K) -> usize {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        (hasher.finish() % self.buckets.len() as u64) as usize
    }

    /// Insert a key-value pair, returning the previous value for the key if
    /// one existed.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let index = self.bucket_index(&key);
        let bucket = &mut self.buckets[index];

        for entry in bucket.iter_mut() {
            if entry.0 == key {
                let old = std::mem::replace(&mut entry.1, value);
                return Some(old);
            }
        }

        bucket.push((key, value));
        self.len += 1;
        None
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Remove a key, returning its value if it was present.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.bucket_index(key);
        let bucket = &mut self.buckets[index];

        let position = bucket.iter().position(|(k, _)| k == key)?;
        let (_, value) = bucket.remove(position);
        self.len -= 1;
        Some(value)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<K: Hash + Eq, V> Default for HashTable<K, V> {
    fn default() -> Self {
        Self::new(DEFAULT_BUCKETS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut table = HashTable::new(10);
        table.insert("apple", 10);
        table.insert("banana", 20);

        assert_eq!(table.get(&"apple"), Some(&10));
        assert_eq!(table.get(&"banana"), Some(&20));
        assert_eq!(table.get(&"cherry"), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_insert_replaces_existing_key() {
        let mut table = HashTable::new(10);
        assert_eq!(table.insert("apple", 10), None);
        assert_eq!(table.insert("apple", 99), Some(10));
        assert_eq!(table.get(&"apple"), Some(&99));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut table = HashTable::new(10);
        table.insert("apple", 10);

        assert_eq!(table.remove(&"apple"), Some(10));
        assert_eq!(table.get(&"apple"), None);
        assert_eq!(table.remove(&"apple"), None);
        assert!(table.is_empty());
    }

    #[test]
    fn test_chaining_in_single_bucket() {
        // One bucket forces every key into the same chain.
        let mut table = HashTable::new(1);
        for i in 0..32 {
            table.insert(i, i * 2);
        }
        assert_eq!(table.len(), 32);
        for i in 0..32 {
            assert_eq!(table.get(&i), Some(&(i * 2)));
        }
        assert_eq!(table.remove(&17), Some(34));
        assert_eq!(table.get(&17), None);
        assert_eq!(table.len(), 31);
    }

    #[test]
    #[should_panic(expected = "bucket count must be > 0")]
    fn test_zero_buckets_panics() {
        let _ = HashTable::<u32, u32>::new(0);
    }
}
