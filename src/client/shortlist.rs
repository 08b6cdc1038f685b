//! Names the user saved during this session

use crate::types::GeneratedName;

/// In-memory shortlist, unique by name and kept in save order
#[derive(Debug, Clone, Default)]
pub struct Shortlist {
    saved: Vec<GeneratedName>,
}

impl Shortlist {
    /// Save a name; returns `false` if it was already saved
    pub fn save(&mut self, name: GeneratedName) -> bool {
        if self.contains(&name.name) {
            return false;
        }
        self.saved.push(name);
        true
    }

    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.saved.len();
        self.saved.retain(|n| n.name != name);
        self.saved.len() != before
    }

    pub fn contains(&self, name: &str) -> bool {
        self.saved.iter().any(|n| n.name == name)
    }

    pub fn list(&self) -> &[GeneratedName] {
        &self.saved
    }

    pub fn len(&self) -> usize {
        self.saved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.saved.is_empty()
    }

    pub fn clear(&mut self) {
        self.saved.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_is_unique_by_name() {
        let mut shortlist = Shortlist::default();
        assert!(shortlist.save(GeneratedName::new("Brightly")));
        assert!(!shortlist.save(GeneratedName::new("Brightly")));
        assert!(shortlist.save(GeneratedName::new("Zenify")));

        assert_eq!(shortlist.len(), 2);
        assert_eq!(shortlist.list()[1].name, "Zenify");
    }

    #[test]
    fn test_remove() {
        let mut shortlist = Shortlist::default();
        shortlist.save(GeneratedName::new("Biscuit"));

        assert!(shortlist.remove("Biscuit"));
        assert!(!shortlist.remove("Biscuit"));
        assert!(!shortlist.contains("Biscuit"));
        assert!(shortlist.is_empty());
    }
}
