use std::collections::HashSet;

/// The set of ingredients currently chosen for a search. Lives for one page
/// session, starts empty, membership only (no ordering guarantee).
#[derive(Debug, Clone, Default)]
pub struct Selection {
    chosen: HashSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `name` if absent, remove it if present.
    pub fn toggle(&mut self, name: &str) {
        if !self.chosen.remove(name) {
            self.chosen.insert(name.to_string());
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.chosen.contains(name)
    }

    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.chosen.iter().map(String::as_str)
    }

    /// Comma-joined names for the search query string.
    pub fn join_for_query(&self) -> String {
        self.chosen.iter().map(String::as_str).collect::<Vec<_>>().join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_its_own_inverse() {
        let mut selection = Selection::new();
        selection.toggle("Garlic");

        selection.toggle("Tofu");
        selection.toggle("Tofu");

        assert!(selection.contains("Garlic"));
        assert!(!selection.contains("Tofu"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn starts_empty() {
        assert!(Selection::new().is_empty());
    }

    #[test]
    fn joins_members_with_commas() {
        let mut selection = Selection::new();
        selection.toggle("Rice");
        assert_eq!(selection.join_for_query(), "Rice");

        selection.toggle("Peas");
        let joined = selection.join_for_query();
        assert_eq!(joined.matches(',').count(), 1);
        assert!(joined.contains("Rice") && joined.contains("Peas"));
    }
}
