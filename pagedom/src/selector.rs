//! Compound selectors: `tag`, `#id`, `.class` and `*`, combined without
//! whitespace (`a.account-link`, `div#menu.open`).

use std::fmt;
use std::str::FromStr;

use crate::element::Element;

/// Error type for selector parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    /// The selector was empty or whitespace.
    #[error("selector is empty")]
    Empty,

    /// A `.` or `#` was not followed by a name.
    #[error("expected a name after '{0}'")]
    EmptyComponent(char),

    /// Combinators, attribute selectors and pseudo classes are not supported.
    #[error("unsupported character '{0}' in selector")]
    Unsupported(char),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SelectorError::Empty);
        }

        let mut selector = Selector::default();
        let mut chars = input.chars().peekable();

        if chars.peek() == Some(&'*') {
            chars.next();
        } else {
            let tag = take_name(&mut chars);
            if !tag.is_empty() {
                selector.tag = Some(tag.to_ascii_lowercase());
            }
        }

        while let Some(c) = chars.next() {
            match c {
                '.' | '#' => {
                    let name = take_name(&mut chars);
                    if name.is_empty() {
                        return Err(SelectorError::EmptyComponent(c));
                    }
                    if c == '.' {
                        selector.classes.push(name);
                    } else {
                        selector.id = Some(name);
                    }
                }
                other => return Err(SelectorError::Unsupported(other)),
            }
        }

        Ok(selector)
    }

    pub fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if !element.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if element.id != *id {
                return false;
            }
        }
        self.classes.iter().all(|class| element.has_class(class))
    }
}

fn take_name(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut name = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_alphanumeric() || c == '-' || c == '_' {
            name.push(c);
            chars.next();
        } else {
            break;
        }
    }
    name
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(tag) => write!(f, "{tag}")?,
            None if self.id.is_none() && self.classes.is_empty() => write!(f, "*")?,
            None => {}
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        Ok(())
    }
}

/// IDs of every element matching `selector`, in document order.
pub fn query_selector_all(root: &Element, selector: &Selector) -> Vec<String> {
    let mut result = Vec::new();
    collect_matches(root, selector, &mut result);
    result
}

/// ID of the first element matching `selector`, in document order.
pub fn query_selector(root: &Element, selector: &Selector) -> Option<String> {
    if selector.matches(root) {
        return Some(root.id.clone());
    }
    root.content
        .children()
        .iter()
        .find_map(|child| query_selector(child, selector))
}

fn collect_matches(element: &Element, selector: &Selector, result: &mut Vec<String>) {
    if selector.matches(element) {
        result.push(element.id.clone());
    }
    for child in element.content.children() {
        collect_matches(child, selector, result);
    }
}
