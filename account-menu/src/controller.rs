use std::cell::RefCell;
use std::rc::Rc;

use pagedom::element::contains;
use pagedom::{ClickEvent, Document, Element, ListenerTarget, Subscription};

use crate::config::DropdownConfig;
use crate::error::{DropdownError, ElementRole};
use crate::lookup::locate;
use crate::state::{DropdownState, Visibility};

/// Owns the click wiring for one account dropdown.
///
/// Both listeners are tied to the controller's lifetime: dropping it (or
/// calling [`DropdownController::detach`]) unregisters them. The marker
/// class is left as it was at that point.
#[derive(Debug)]
pub struct DropdownController {
    trigger: String,
    panel: String,
    state: Rc<RefCell<DropdownState>>,
    subscriptions: Vec<Subscription>,
}

impl DropdownController {
    /// Locate the trigger and panel, register both listeners and project the
    /// initial state onto the panel.
    ///
    /// Fails if the document is still loading, if a selector is invalid, or
    /// if a lookup does not satisfy the configured [`MatchPolicy`](crate::MatchPolicy).
    pub fn attach(doc: &mut Document, config: &DropdownConfig) -> Result<Self, DropdownError> {
        if !doc.is_ready() {
            return Err(DropdownError::NotReady);
        }

        let trigger = locate(doc, ElementRole::Trigger, &config.trigger_selector, config.match_policy)?;
        let panel = locate(doc, ElementRole::Panel, &config.panel_selector, config.match_policy)?;

        let state = Rc::new(RefCell::new(DropdownState::new(
            panel.clone(),
            config.marker_class.clone(),
            config.initially_open,
        )));
        state.borrow().project(doc.root_mut());

        let on_trigger = {
            let state = Rc::clone(&state);
            move |event: &mut ClickEvent, root: &mut Element| {
                event.prevent_default();
                let mut state = state.borrow_mut();
                let visibility = state.toggle();
                state.project(root);
                log::debug!("[dropdown] trigger click -> {visibility:?}");
            }
        };

        let on_document = {
            let state = Rc::clone(&state);
            let trigger = trigger.clone();
            let panel = panel.clone();
            move |event: &mut ClickEvent, root: &mut Element| {
                if !is_outside(root, event.target(), &trigger, &panel) {
                    return;
                }
                let mut state = state.borrow_mut();
                if state.set_open(false) {
                    log::debug!("[dropdown] outside click on {:?} -> Closed", event.target());
                }
                state.project(root);
            }
        };

        let subscriptions = vec![
            doc.add_listener(ListenerTarget::Element(trigger.clone()), on_trigger),
            doc.add_listener(ListenerTarget::Document, on_document),
        ];

        log::debug!(
            "[dropdown] attached trigger='{trigger}' panel='{panel}' marker='{}' open={}",
            config.marker_class,
            config.initially_open
        );

        Ok(Self {
            trigger,
            panel,
            state,
            subscriptions,
        })
    }

    /// Attach once `doc` finishes loading, or right away if it already has.
    pub fn attach_on_load(doc: &mut Document, config: DropdownConfig) -> PendingController {
        let pending = PendingController::default();
        let slot = Rc::clone(&pending.slot);

        doc.on_content_loaded(move |doc| {
            let result = Self::attach(doc, &config);
            if let Err(err) = &result {
                log::error!("[dropdown] failed to attach: {err}");
            }
            *slot.borrow_mut() = Some(result);
        });

        pending
    }

    pub fn trigger_id(&self) -> &str {
        &self.trigger
    }

    pub fn panel_id(&self) -> &str {
        &self.panel
    }

    pub fn is_open(&self) -> bool {
        self.state.borrow().is_open()
    }

    pub fn visibility(&self) -> Visibility {
        self.state.borrow().visibility()
    }

    /// Whether both listeners are still registered with a live document.
    pub fn is_attached(&self) -> bool {
        self.subscriptions.iter().all(Subscription::is_active)
    }

    pub fn open(&self, doc: &mut Document) {
        self.set_open(doc, true);
    }

    pub fn close(&self, doc: &mut Document) {
        self.set_open(doc, false);
    }

    /// Flip the panel as a trigger click would, without an event.
    pub fn toggle(&self, doc: &mut Document) -> Visibility {
        let mut state = self.state.borrow_mut();
        let visibility = state.toggle();
        state.project(doc.root_mut());
        visibility
    }

    fn set_open(&self, doc: &mut Document, open: bool) {
        let mut state = self.state.borrow_mut();
        state.set_open(open);
        state.project(doc.root_mut());
    }

    /// Unregister both listeners.
    pub fn detach(self) {
        log::debug!("[dropdown] detached from '{}'", self.trigger);
    }
}

/// A click is outside when its target is in neither the trigger nor the
/// panel. Clicks that hit no element are outside.
fn is_outside(root: &Element, target: Option<&str>, trigger: &str, panel: &str) -> bool {
    match target {
        Some(target) => !contains(root, panel, target) && !contains(root, trigger, target),
        None => true,
    }
}

/// Result slot for [`DropdownController::attach_on_load`].
#[derive(Debug, Default)]
pub struct PendingController {
    slot: Rc<RefCell<Option<Result<DropdownController, DropdownError>>>>,
}

impl PendingController {
    /// Whether the attach attempt has run.
    pub fn is_resolved(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Take the attach result. None until the document finishes loading,
    /// and after the result has been taken once.
    pub fn take(&self) -> Option<Result<DropdownController, DropdownError>> {
        self.slot.borrow_mut().take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_outside() {
        let root = Element::body()
            .id("body")
            .child(Element::link("#").id("link").child(Element::text("me").id("label")))
            .child(Element::div().id("menu").child(Element::text("x").id("item")))
            .child(Element::div().id("main"));

        assert!(!is_outside(&root, Some("label"), "link", "menu"));
        assert!(!is_outside(&root, Some("link"), "link", "menu"));
        assert!(!is_outside(&root, Some("item"), "link", "menu"));
        assert!(is_outside(&root, Some("main"), "link", "menu"));
        assert!(is_outside(&root, Some("body"), "link", "menu"));
        assert!(is_outside(&root, None, "link", "menu"));
    }
}
