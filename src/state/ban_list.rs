//! Ban list of distance labels
//!
//! Distances the user no longer wants to see. Kept in insertion order
//! so the UI lists them in the order they were banned.

/// Ordered, duplicate-free set of distance labels
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BanList {
    entries: Vec<String>,
}

impl BanList {
    /// Create an empty ban list
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a label if it is not already present.
    /// Returns `true` when the list changed.
    pub fn ban(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();
        if self.contains(&label) {
            return false;
        }
        self.entries.push(label);
        true
    }

    /// Remove every entry equal to `label`
    pub fn unban(&mut self, label: &str) {
        self.entries.retain(|entry| entry != label);
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.iter().any(|entry| entry == label)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Labels in the order they were banned
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ban_preserves_order() {
        let mut bans = BanList::new();
        assert!(bans.ban("300"));
        assert!(bans.ban("100"));
        assert!(bans.ban("200"));

        let labels: Vec<&str> = bans.iter().collect();
        assert_eq!(labels, vec!["300", "100", "200"]);
    }

    #[test]
    fn test_ban_is_idempotent() {
        let mut bans = BanList::new();
        bans.ban("621");
        let before = bans.clone();

        assert!(!bans.ban("621"));

        assert_eq!(bans, before);
        assert_eq!(bans.len(), 1);
    }

    #[test]
    fn test_ban_then_unban_restores() {
        let mut bans = BanList::new();
        bans.ban("100");
        bans.ban("200");
        let before = bans.clone();

        bans.ban("300");
        assert!(bans.contains("300"));
        bans.unban("300");

        assert_eq!(bans, before);
    }

    #[test]
    fn test_unban_keeps_remaining_order() {
        let mut bans = BanList::new();
        bans.ban("1");
        bans.ban("2");
        bans.ban("3");

        bans.unban("2");

        let labels: Vec<&str> = bans.iter().collect();
        assert_eq!(labels, vec!["1", "3"]);
    }

    #[test]
    fn test_unban_missing_is_noop() {
        let mut bans = BanList::new();
        bans.ban("1");
        bans.unban("42");
        assert_eq!(bans.len(), 1);

        let mut empty = BanList::new();
        empty.unban("1");
        assert!(empty.is_empty());
    }
}
