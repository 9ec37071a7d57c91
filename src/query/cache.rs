use std::collections::HashMap;

/// Entries older than this (or than the stale time, if longer) are dropped on insert.
pub(crate) const GC_TIME_MS: i64 = 5 * 60 * 1000;

/// Cache key: entity scope plus the (search, page) pair that produced the data.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct QueryKey {
    pub scope: &'static str,
    pub search: String,
    pub page: u32,
}

impl QueryKey {
    pub fn new(scope: &'static str, search: impl Into<String>, page: u32) -> Self {
        Self {
            scope,
            search: search.into(),
            page,
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct CacheEntry<T> {
    pub data: T,
    pub fetched_ms: i64,
    /// Invalidation generation of the scope when this entry was fetched.
    pub generation: u64,
}

/// What the hook should do for a key right now.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum CachePlan<T> {
    /// Serve from cache, no request.
    Fresh(T),
    /// Serve from cache and refetch in the background.
    Revalidate(T),
    /// Nothing cached for this key.
    Fetch,
}

#[derive(Clone, Debug)]
pub(crate) struct QueryCache<T> {
    stale_time_ms: i64,
    entries: HashMap<QueryKey, CacheEntry<T>>,
}

impl<T: Clone> QueryCache<T> {
    pub fn new(stale_time_ms: i64) -> Self {
        Self {
            stale_time_ms,
            entries: HashMap::new(),
        }
    }

    pub fn plan(&self, key: &QueryKey, generation: u64, now_ms: i64) -> CachePlan<T> {
        let Some(entry) = self.entries.get(key) else {
            return CachePlan::Fetch;
        };

        let age = now_ms.saturating_sub(entry.fetched_ms);
        if entry.generation == generation && age < self.stale_time_ms {
            CachePlan::Fresh(entry.data.clone())
        } else {
            CachePlan::Revalidate(entry.data.clone())
        }
    }

    pub fn insert(&mut self, key: QueryKey, data: T, generation: u64, now_ms: i64) {
        let keep_ms = self.stale_time_ms.max(GC_TIME_MS);
        self.entries
            .retain(|_, e| now_ms.saturating_sub(e.fetched_ms) <= keep_ms);
        self.entries.insert(
            key,
            CacheEntry {
                data,
                fetched_ms: now_ms,
                generation,
            },
        );
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Per-scope invalidation counters. Bumping a scope marks every entry in it stale.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Generations(HashMap<&'static str, u64>);

impl Generations {
    pub fn get(&self, scope: &str) -> u64 {
        self.0.get(scope).copied().unwrap_or(0)
    }

    pub fn bump(&mut self, scope: &'static str) -> u64 {
        let g = self.0.entry(scope).or_insert(0);
        *g = g.saturating_add(1);
        *g
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINUTE: i64 = 60_000;

    fn key(search: &str, page: u32) -> QueryKey {
        QueryKey::new("movies", search, page)
    }

    #[test]
    fn test_missing_entry_fetches() {
        let cache: QueryCache<Vec<u32>> = QueryCache::new(5 * MINUTE);
        assert_eq!(cache.plan(&key("batman", 1), 0, 0), CachePlan::Fetch);
    }

    #[test]
    fn test_entry_within_stale_time_is_fresh() {
        let mut cache = QueryCache::new(5 * MINUTE);
        cache.insert(key("batman", 1), vec![1, 2], 0, 1_000);
        assert_eq!(
            cache.plan(&key("batman", 1), 0, 1_000 + 4 * MINUTE),
            CachePlan::Fresh(vec![1, 2])
        );
    }

    #[test]
    fn test_old_entry_revalidates() {
        let mut cache = QueryCache::new(5 * MINUTE);
        cache.insert(key("batman", 1), vec![1], 0, 0);
        assert_eq!(
            cache.plan(&key("batman", 1), 0, 5 * MINUTE),
            CachePlan::Revalidate(vec![1])
        );
    }

    #[test]
    fn test_zero_stale_time_always_revalidates() {
        let mut cache = QueryCache::new(0);
        cache.insert(key("", 1), vec![7], 0, 10);
        assert_eq!(cache.plan(&key("", 1), 0, 10), CachePlan::Revalidate(vec![7]));
    }

    #[test]
    fn test_invalidation_forces_revalidate() {
        let mut gens = Generations::default();
        let mut cache = QueryCache::new(5 * MINUTE);
        cache.insert(key("", 1), vec![42], gens.get("movies"), 0);

        gens.bump("movies");
        assert_eq!(
            cache.plan(&key("", 1), gens.get("movies"), 1),
            CachePlan::Revalidate(vec![42])
        );
    }

    #[test]
    fn test_keys_differ_by_page_and_search() {
        let mut cache = QueryCache::new(5 * MINUTE);
        cache.insert(key("batman", 1), vec![1], 0, 0);
        cache.insert(key("batman", 2), vec![2], 0, 0);
        cache.insert(key("alien", 1), vec![3], 0, 0);
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.plan(&key("batman", 2), 0, 0), CachePlan::Fresh(vec![2]));
    }

    #[test]
    fn test_insert_drops_entries_past_gc_time() {
        let mut cache = QueryCache::new(0);
        cache.insert(key("old", 1), vec![1], 0, 0);
        cache.insert(key("recent", 1), vec![2], 0, GC_TIME_MS - 1);
        assert_eq!(cache.len(), 2);

        cache.insert(key("new", 1), vec![3], 0, GC_TIME_MS + 1);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.plan(&key("old", 1), 0, GC_TIME_MS + 1), CachePlan::Fetch);
        assert_eq!(
            cache.plan(&key("recent", 1), 0, GC_TIME_MS + 1),
            CachePlan::Revalidate(vec![2])
        );
    }

    #[test]
    fn test_gc_window_never_shorter_than_stale_time() {
        let mut cache = QueryCache::new(10 * MINUTE);
        cache.insert(key("a", 1), vec![1], 0, 0);
        cache.insert(key("b", 1), vec![2], 0, 9 * MINUTE);
        assert_eq!(cache.plan(&key("a", 1), 0, 9 * MINUTE), CachePlan::Fresh(vec![1]));
    }

    #[test]
    fn test_generations_are_per_scope() {
        let mut gens = Generations::default();
        assert_eq!(gens.bump("notes"), 1);
        assert_eq!(gens.bump("notes"), 2);
        assert_eq!(gens.get("notes"), 2);
        assert_eq!(gens.get("movies"), 0);
    }
}
