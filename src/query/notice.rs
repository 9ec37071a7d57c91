/// Decides when a "nothing found" notification is due.
///
/// Fed with the query's delivery token, which changes whenever a different key
/// starts being shown (network response or cache hit). A notification is due at
/// most once per token, and only when the delivered data was empty. Re-renders
/// and refreshes of the key already on screen keep the token, so they stay quiet.
#[derive(Clone, Debug, Default)]
pub(crate) struct EmptyResultNotice {
    last_seen: Option<u64>,
}

impl EmptyResultNotice {
    pub fn observe(&mut self, delivery: Option<u64>, is_empty: bool) -> bool {
        let Some(id) = delivery else {
            return false;
        };
        if self.last_seen == Some(id) {
            return false;
        }
        self.last_seen = Some(id);
        is_empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_response_notifies_exactly_once() {
        let mut n = EmptyResultNotice::default();
        assert!(n.observe(Some(1), true));
        // Same response observed again (effect re-run, re-render).
        assert!(!n.observe(Some(1), true));
        assert!(!n.observe(Some(1), true));
    }

    #[test]
    fn test_non_empty_response_never_notifies() {
        let mut n = EmptyResultNotice::default();
        assert!(!n.observe(Some(3), false));
        assert!(!n.observe(Some(3), false));
    }

    #[test]
    fn test_returning_to_an_empty_search_notifies_again() {
        // "a" (empty), "b" (results), then "a" again served from cache: three deliveries.
        let mut n = EmptyResultNotice::default();
        assert!(n.observe(Some(1), true));
        assert!(!n.observe(Some(2), false));
        assert!(n.observe(Some(3), true));
    }

    #[test]
    fn test_nothing_fetched_yet() {
        let mut n = EmptyResultNotice::default();
        assert!(!n.observe(None, true));
    }
}
