use serde::{Deserialize, Serialize};

/// How [`contains_keys`] matches keys against values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchMode {
    /// One matching key is enough (otherwise every key must match).
    pub any: bool,
    /// A key may match as a substring of a value (otherwise exact equality).
    pub partial: bool,
}

impl Default for SearchMode {
    fn default() -> Self {
        Self {
            any: false,
            partial: true,
        }
    }
}

impl SearchMode {
    /// Every key must equal some value.
    pub fn literal() -> Self {
        Self {
            any: false,
            partial: false,
        }
    }

    /// Require only one key to match.
    pub fn any(mut self) -> Self {
        self.any = true;
        self
    }

    /// Require keys to match values exactly.
    pub fn exact(mut self) -> Self {
        self.partial = false;
        self
    }
}

/// Whether at least one needle occurs in the haystack.
pub fn contains_any<T: PartialEq>(needles: &[T], haystack: &[T]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Check a list of keys against a list of values.
///
/// With `mode.any` one matching key suffices, otherwise all must match.
/// With `mode.partial` a key matches when it is contained in some value,
/// otherwise it must equal a value. An empty key list matches in "all" mode
/// and fails in "any" mode.
pub fn contains_keys<K, V>(keys: &[K], values: &[V], mode: SearchMode) -> bool
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let keys: Vec<&str> = keys.iter().map(AsRef::as_ref).collect();
    let values: Vec<&str> = values.iter().map(AsRef::as_ref).collect();

    let is_match = |key: &str| {
        if mode.partial {
            values.iter().any(|v| v.contains(key))
        } else {
            values.iter().any(|v| *v == key)
        }
    };

    tracing::debug!(
        ?keys,
        ?values,
        any = mode.any,
        partial = mode.partial,
        "checking keys against values"
    );

    let found = if mode.any {
        keys.iter().any(|k| is_match(k))
    } else {
        keys.iter().all(|k| is_match(k))
    };

    tracing::debug!(found, "key check finished");
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALUES: [&str; 3] = ["rechnung-2024", "gutschrift", "storno"];

    #[test]
    fn any_needle() {
        assert!(contains_any(&[1, 5], &[5, 6, 7]));
        assert!(!contains_any(&[1, 2], &[5, 6, 7]));
        assert!(!contains_any::<i32>(&[], &[5]));
    }

    #[test]
    fn all_literal() {
        assert!(contains_keys(&["storno", "gutschrift"], &VALUES, SearchMode::literal()));
        assert!(!contains_keys(&["storno", "rechnung"], &VALUES, SearchMode::literal()));
    }

    #[test]
    fn all_partial() {
        let mode = SearchMode::default();
        assert!(contains_keys(&["rechnung", "storno"], &VALUES, mode));
        assert!(!contains_keys(&["rechnung", "mahnung"], &VALUES, mode));
    }

    #[test]
    fn any_literal() {
        let mode = SearchMode::literal().any();
        assert!(contains_keys(&["mahnung", "storno"], &VALUES, mode));
        assert!(!contains_keys(&["mahnung", "rechnung"], &VALUES, mode));
    }

    #[test]
    fn any_partial() {
        let mode = SearchMode::default().any();
        assert!(contains_keys(&["mahnung", "2024"], &VALUES, mode));
        assert!(!contains_keys(&["mahnung", "2023"], &VALUES, mode));
    }

    #[test]
    fn empty_keys() {
        let none: [&str; 0] = [];
        assert!(contains_keys(&none, &VALUES, SearchMode::default()));
        assert!(contains_keys(&none, &VALUES, SearchMode::literal()));
        assert!(!contains_keys(&none, &VALUES, SearchMode::default().any()));
    }

    #[test]
    fn owned_strings() {
        let keys = vec![String::from("storno")];
        let values = vec![String::from("storno")];
        assert!(contains_keys(&keys, &values, SearchMode::literal()));
    }
}
