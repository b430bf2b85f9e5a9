use std::collections::HashMap;

mod rect;

pub use rect::Rect;

/// Screen rectangles keyed by element ID, as produced by whatever renders
/// the page.
pub type LayoutResult = HashMap<String, Rect>;
