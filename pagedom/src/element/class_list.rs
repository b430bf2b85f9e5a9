use std::fmt;

/// Ordered set of class names attached to an element.
///
/// Insertion order is preserved so that rendering the list back to a
/// `class` attribute is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a whitespace separated class attribute. Duplicates are dropped.
    pub fn parse(value: &str) -> Self {
        let mut list = Self::new();
        for class in value.split_whitespace() {
            list.add(class);
        }
        list
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class. Returns true if it was not already present.
    pub fn add(&mut self, class: impl Into<String>) -> bool {
        let class = class.into();
        if class.is_empty() || self.contains(&class) {
            return false;
        }
        self.classes.push(class);
        true
    }

    /// Remove a class. Returns true if it was present.
    pub fn remove(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        self.classes.len() != before
    }

    /// Flip a class. Returns whether the class is present afterwards.
    pub fn toggle(&mut self, class: &str) -> bool {
        if self.remove(class) {
            false
        } else {
            self.add(class)
        }
    }

    /// Force a class on or off. Returns true if the list changed.
    pub fn set(&mut self, class: &str, present: bool) -> bool {
        if present {
            self.add(class)
        } else {
            self.remove(class)
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.classes.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dedups_and_keeps_order() {
        let list = ClassList::parse("  nav  account-link nav ");
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["nav", "account-link"]);
        assert_eq!(list.to_string(), "nav account-link");
    }

    #[test]
    fn test_toggle_reports_presence() {
        let mut list = ClassList::new();
        assert!(list.toggle("active"));
        assert!(list.contains("active"));
        assert!(!list.toggle("active"));
        assert!(list.is_empty());
    }

    #[test]
    fn test_empty_class_is_ignored() {
        let mut list = ClassList::new();
        assert!(!list.add(""));
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut list = ClassList::parse("menu");
        assert!(!list.set("active", false));
        assert!(list.set("active", true));
        assert!(!list.set("active", true));
        assert!(list.set("active", false));
        assert_eq!(list.to_string(), "menu");
    }
}
