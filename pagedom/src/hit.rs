use crate::element::Element;
use crate::layout::LayoutResult;

/// Find the deepest element at the given coordinates.
///
/// Elements without a layout entry are skipped along with their subtree.
/// Returns None if nothing contains the point.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    let rect = layout.get(&root.id)?;

    if !rect.contains(x, y) {
        return None;
    }

    // Check children in reverse order (last rendered = on top)
    for child in root.content.children().iter().rev() {
        if let Some(id) = hit_test(layout, child, x, y) {
            return Some(id);
        }
    }

    Some(root.id.clone())
}
