mod class_list;
mod content;
mod node;

pub use class_list::ClassList;
pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.content.children() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Number of elements in the tree carrying `id`.
pub fn count_id(root: &Element, id: &str) -> usize {
    let own = usize::from(root.id == id);
    own + root
        .content
        .children()
        .iter()
        .map(|child| count_id(child, id))
        .sum::<usize>()
}

/// IDs from `root` down to the element with `id`, both ends included.
/// Empty if `id` is not in the tree.
pub fn path_to(root: &Element, id: &str) -> Vec<String> {
    let mut path = Vec::new();
    if collect_path(root, id, &mut path) {
        path.reverse();
    }
    path
}

fn collect_path(element: &Element, id: &str, path: &mut Vec<String>) -> bool {
    if element.id == id {
        path.push(element.id.clone());
        return true;
    }

    for child in element.content.children() {
        if collect_path(child, id, path) {
            path.push(element.id.clone());
            return true;
        }
    }

    false
}

/// Whether `descendant` is `ancestor` or lives somewhere beneath it.
/// False when either ID is missing from the tree.
pub fn contains(root: &Element, ancestor: &str, descendant: &str) -> bool {
    find_element(root, ancestor)
        .map(|el| find_element(el, descendant).is_some())
        .unwrap_or(false)
}

/// Nearest element on the path from `id` up to `root` that carries `attribute`.
pub fn closest_with_attribute<'a>(root: &'a Element, id: &str, attribute: &str) -> Option<&'a Element> {
    path_to(root, id)
        .iter()
        .rev()
        .filter_map(|step| find_element(root, step))
        .find(|el| el.attributes.contains_key(attribute))
}
