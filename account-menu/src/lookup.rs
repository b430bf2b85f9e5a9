use pagedom::Document;

use crate::config::MatchPolicy;
use crate::error::{DropdownError, ElementRole};

/// Resolve `selector` to a single element ID under `policy`.
pub fn locate(
    doc: &Document,
    role: ElementRole,
    selector: &str,
    policy: MatchPolicy,
) -> Result<String, DropdownError> {
    let mut matches = doc.query_selector_all(selector)?;

    let id = match (matches.len(), policy) {
        (0, _) => return Err(DropdownError::not_found(role, selector)),
        (1, _) => matches.remove(0),
        (count, MatchPolicy::Unique) => return Err(DropdownError::ambiguous(role, selector, count)),
        (count, MatchPolicy::First) => {
            log::warn!("[dropdown] {count} elements match {role} selector '{selector}', using the first");
            matches.remove(0)
        }
    };

    // Listeners and projection address the element by ID from here on.
    match doc.id_count(&id) {
        1 => Ok(id),
        count => Err(DropdownError::DuplicateId { role, id, count }),
    }
}
