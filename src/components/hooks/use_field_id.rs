use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Unique id prefix for one form instance, so `<label for>` pairs stay distinct
/// when several forms are mounted.
pub fn use_field_id(form: &str) -> String {
    format!("{form}_{:x}", generate_hash())
}

/// Id of a single field inside a form created with [`use_field_id`].
pub fn field_id(form_id: &str, field: &str) -> String {
    format!("{form_id}-{field}")
}

static COUNTER: AtomicUsize = AtomicUsize::new(1);

fn generate_hash() -> u64 {
    let mut hasher = DefaultHasher::new();
    let counter = COUNTER.fetch_add(1, Ordering::SeqCst);
    counter.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_per_call() {
        let a = use_field_id("note");
        let b = use_field_id("note");
        assert_ne!(a, b);
        assert!(a.starts_with("note_"));
        assert_eq!(field_id(&a, "title"), format!("{a}-title"));
    }
}
