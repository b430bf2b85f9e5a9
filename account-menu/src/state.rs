use pagedom::Element;
use pagedom::element::find_element_mut;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Open,
    Closed,
}

impl From<bool> for Visibility {
    fn from(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }
}

/// Open/closed flag plus what is needed to mirror it onto the page.
///
/// `open` is the only source of truth. [`DropdownState::project`] writes it
/// to the panel's marker class and never reads the class back.
#[derive(Debug, Clone)]
pub struct DropdownState {
    open: bool,
    panel: String,
    marker: String,
}

impl DropdownState {
    pub fn new(panel: impl Into<String>, marker: impl Into<String>, open: bool) -> Self {
        Self {
            open,
            panel: panel.into(),
            marker: marker.into(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn visibility(&self) -> Visibility {
        self.open.into()
    }

    /// Flip the flag. Returns the new visibility.
    pub fn toggle(&mut self) -> Visibility {
        self.open = !self.open;
        self.visibility()
    }

    /// Force the flag. Returns true if it changed.
    pub fn set_open(&mut self, open: bool) -> bool {
        let changed = self.open != open;
        self.open = open;
        changed
    }

    /// Mirror the flag onto the panel's marker class.
    pub fn project(&self, root: &mut Element) {
        match find_element_mut(root, &self.panel) {
            Some(panel) => {
                panel.classes.set(&self.marker, self.open);
            }
            None => log::warn!("[dropdown] panel '{}' is no longer in the document", self.panel),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_alternates() {
        let mut state = DropdownState::new("menu", "active", false);
        assert_eq!(state.toggle(), Visibility::Open);
        assert_eq!(state.toggle(), Visibility::Closed);
    }

    #[test]
    fn test_set_open_reports_change() {
        let mut state = DropdownState::new("menu", "active", true);
        assert!(!state.set_open(true));
        assert!(state.set_open(false));
        assert!(!state.set_open(false));
    }

    #[test]
    fn test_project_overwrites_stale_marker() {
        let mut root = Element::div().id("root").child(Element::div().id("menu").class("dropdown active"));
        let state = DropdownState::new("menu", "active", false);

        state.project(&mut root);

        let panel = pagedom::element::find_element(&root, "menu").unwrap();
        assert!(!panel.has_class("active"));
        assert!(panel.has_class("dropdown"));
    }

    #[test]
    fn test_project_without_panel_is_harmless() {
        let mut root = Element::div().id("root");
        DropdownState::new("gone", "active", true).project(&mut root);
        assert!(root.classes.is_empty());
    }
}
