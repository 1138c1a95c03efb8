use std::collections::HashMap;
use std::sync::Mutex;

/// Memoization seam for computed scores. Injected so the engine stays pure
/// and tests can observe or disable caching.
pub trait ScoreCache<V: Clone>: Send + Sync {
    fn get(&self, key: &str) -> Option<V>;
    fn insert(&self, key: String, value: V);
}

/// Unbounded in-process cache. The key universe is small (suburbs times
/// strategies), so no eviction is needed.
#[derive(Debug, Default)]
pub struct MemoryScoreCache<V> {
    entries: Mutex<HashMap<String, V>>,
}

impl<V> MemoryScoreCache<V> {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V: Clone + Send> ScoreCache<V> for MemoryScoreCache<V> {
    fn get(&self, key: &str) -> Option<V> {
        self.entries
            .lock()
            .ok()
            .and_then(|map| map.get(key).cloned())
    }

    fn insert(&self, key: String, value: V) {
        if let Ok(mut map) = self.entries.lock() {
            map.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_after_insert_and_miss_before() {
        let cache = MemoryScoreCache::new();
        assert_eq!(cache.get("ascore-hawthorn-balanced"), None::<f64>);
        cache.insert("ascore-hawthorn-balanced".to_string(), 87.5);
        assert_eq!(cache.get("ascore-hawthorn-balanced"), Some(87.5));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn insert_overwrites() {
        let cache = MemoryScoreCache::new();
        cache.insert("k".to_string(), 1.0);
        cache.insert("k".to_string(), 2.0);
        assert_eq!(cache.get("k"), Some(2.0));
        assert_eq!(cache.len(), 1);
    }
}
