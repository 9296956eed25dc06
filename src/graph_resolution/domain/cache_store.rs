use super::{PackageName, ResolutionMode};
use std::collections::BTreeMap;

/// In-memory dependency cache for one run
///
/// Maps a package name to the direct dependency names it resolved to the last
/// time it was looked up. Only one level is stored per entry; the transitive
/// tree is rebuilt from the entries on every run.
///
/// Reads and writes are gated by the run's [`ResolutionMode`]:
/// - `Default`: `get` answers from the entries, `put` records
/// - `Refresh`: `get` always misses, `put` records (replacing stale entries)
/// - `NoCache`: `get` always misses, `put` is a no-op
///
/// Every recorded `put` marks the store dirty; only a dirty store in a
/// persisting mode needs to be written back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheStore {
    entries: BTreeMap<String, Vec<String>>,
    mode: ResolutionMode,
    dirty: bool,
}

impl CacheStore {
    /// Creates an empty store
    pub fn new(mode: ResolutionMode) -> Self {
        Self::from_entries(BTreeMap::new(), mode)
    }

    /// Creates a store from previously persisted entries
    ///
    /// Keys are normalized the way [`PackageName`] normalizes them, so a
    /// hand-edited `Flask_Login` key answers lookups for `flask-login`. When two
    /// keys normalize to the same name, the one already in normalized form
    /// wins. Keys that are not valid package names are kept verbatim. Any
    /// rewritten key marks the store dirty.
    pub fn from_entries(entries: BTreeMap<String, Vec<String>>, mode: ResolutionMode) -> Self {
        let mut normalized: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut dirty = false;

        for (key, dependencies) in entries {
            let Ok(name) = PackageName::new(&key) else {
                normalized.insert(key, dependencies);
                continue;
            };

            if name.as_str() == key {
                normalized.insert(key, dependencies);
            } else {
                dirty = true;
                normalized
                    .entry(name.as_str().to_string())
                    .or_insert(dependencies);
            }
        }

        Self {
            entries: normalized,
            mode,
            dirty,
        }
    }

    /// Cached direct dependencies of `package`, if the mode allows reading them
    pub fn get(&self, package: &PackageName) -> Option<&[String]> {
        if !self.mode.reads_cache() {
            return None;
        }
        self.entries.get(package.as_str()).map(|deps| deps.as_slice())
    }

    /// Records the direct dependencies of `package`, replacing any old entry
    pub fn put(&mut self, package: &PackageName, dependencies: Vec<String>) {
        if !self.mode.writes_cache() {
            return;
        }
        self.entries.insert(package.as_str().to_string(), dependencies);
        self.dirty = true;
    }

    /// Drops the entry of `package`, if the mode allows writing
    ///
    /// Used when a fresh lookup failed, so the stale entry is not saved again.
    pub fn invalidate(&mut self, package: &PackageName) {
        if !self.mode.writes_cache() {
            return;
        }
        if self.entries.remove(package.as_str()).is_some() {
            self.dirty = true;
        }
    }

    /// Raw entry lookup, ignoring the mode
    pub fn entry(&self, package: &str) -> Option<&[String]> {
        self.entries.get(package).map(|deps| deps.as_slice())
    }

    pub fn entries(&self) -> &BTreeMap<String, Vec<String>> {
        &self.entries
    }

    pub fn mode(&self) -> ResolutionMode {
        self.mode
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// True when the store has changes that the mode allows persisting
    pub fn needs_save(&self) -> bool {
        self.dirty && self.mode.writes_cache()
    }

    /// Clears the dirty flag after a successful save
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> PackageName {
        PackageName::new(s).unwrap()
    }

    fn seeded(mode: ResolutionMode) -> CacheStore {
        let mut entries = BTreeMap::new();
        entries.insert("requests".to_string(), vec!["urllib3".to_string()]);
        CacheStore::from_entries(entries, mode)
    }

    #[test]
    fn test_default_mode_reads_and_writes() {
        let mut store = seeded(ResolutionMode::Default);
        assert_eq!(
            store.get(&name("requests")),
            Some(&["urllib3".to_string()][..])
        );
        assert!(store.get(&name("flask")).is_none());
        assert!(!store.is_dirty());

        store.put(&name("flask"), vec!["click".to_string()]);
        assert!(store.is_dirty());
        assert!(store.needs_save());
        assert_eq!(store.get(&name("flask")), Some(&["click".to_string()][..]));
    }

    #[test]
    fn test_lookup_uses_normalized_name() {
        let store = seeded(ResolutionMode::Default);
        assert!(store.get(&name("Requests")).is_some());
    }

    #[test]
    fn test_refresh_mode_misses_but_records() {
        let mut store = seeded(ResolutionMode::Refresh);
        assert!(store.get(&name("requests")).is_none());

        store.put(&name("requests"), vec!["idna".to_string()]);
        assert!(store.needs_save());
        assert_eq!(store.entry("requests"), Some(&["idna".to_string()][..]));
    }

    #[test]
    fn test_no_cache_mode_is_inert() {
        let mut store = seeded(ResolutionMode::NoCache);
        assert!(store.get(&name("requests")).is_none());

        store.put(&name("flask"), vec!["click".to_string()]);
        assert!(!store.is_dirty());
        assert!(!store.needs_save());
        assert!(store.entry("flask").is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_put_overwrites_existing_entry() {
        let mut store = seeded(ResolutionMode::Default);
        store.put(&name("requests"), vec![]);
        assert_eq!(store.get(&name("requests")), Some(&[][..]));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_invalidate_removes_entry_and_marks_dirty() {
        let mut store = seeded(ResolutionMode::Refresh);
        store.invalidate(&name("requests"));

        assert!(store.entry("requests").is_none());
        assert!(store.needs_save());
    }

    #[test]
    fn test_invalidate_missing_entry_keeps_store_clean() {
        let mut store = seeded(ResolutionMode::Default);
        store.invalidate(&name("flask"));

        assert_eq!(store.len(), 1);
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_invalidate_is_ignored_without_cache_writes() {
        let mut store = seeded(ResolutionMode::NoCache);
        store.invalidate(&name("requests"));

        assert!(store.entry("requests").is_some());
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_from_entries_normalizes_keys() {
        let mut entries = BTreeMap::new();
        entries.insert("Flask_Login".to_string(), vec!["flask".to_string()]);
        let store = CacheStore::from_entries(entries, ResolutionMode::Default);

        assert_eq!(
            store.get(&name("flask-login")),
            Some(&["flask".to_string()][..])
        );
        assert!(store.entry("Flask_Login").is_none());
        assert!(store.needs_save());
    }

    #[test]
    fn test_from_entries_prefers_normalized_spelling() {
        let mut entries = BTreeMap::new();
        entries.insert("Flask_Login".to_string(), vec!["old".to_string()]);
        entries.insert("flask-login".to_string(), vec!["flask".to_string()]);
        entries.insert("not a name".to_string(), vec![]);
        let store = CacheStore::from_entries(entries, ResolutionMode::Default);

        assert_eq!(store.len(), 2);
        assert_eq!(store.entry("flask-login"), Some(&["flask".to_string()][..]));
        assert!(store.entry("not a name").is_some());
    }

    #[test]
    fn test_from_entries_already_normalized_is_clean() {
        let store = seeded(ResolutionMode::Default);
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_mark_clean() {
        let mut store = CacheStore::new(ResolutionMode::Default);
        assert!(store.is_empty());
        store.put(&name("a"), vec![]);
        store.mark_clean();
        assert!(!store.is_dirty());
        assert!(!store.needs_save());
    }
}
