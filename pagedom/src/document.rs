use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crossterm::event::{Event as CrosstermEvent, MouseEventKind};

use crate::element::{closest_with_attribute, count_id, find_element, find_element_mut, path_to, ClassList, Element};
use crate::event::{ClickEvent, MouseButton};
use crate::hit::hit_test;
use crate::layout::LayoutResult;
use crate::listener::{ListenerTarget, Registry, Subscription};
use crate::selector::{query_selector_all, Selector, SelectorError};

/// Loading phase of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadyState {
    /// Structure is still being assembled; content-loaded callbacks are queued.
    #[default]
    Loading,
    /// Structure is final; content-loaded callbacks have run.
    Complete,
}

/// What happened while dispatching a click.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Number of listeners that ran.
    pub listeners_invoked: usize,
    pub default_prevented: bool,
    /// Link the default action followed, if any.
    pub navigated_to: Option<String>,
}

type ReadyCallback = Box<dyn FnOnce(&mut Document)>;

/// A page: an element tree plus the listeners wired to it.
pub struct Document {
    root: Element,
    layout: LayoutResult,
    registry: Rc<RefCell<Registry>>,
    ready_state: ReadyState,
    pending_ready: Vec<ReadyCallback>,
    location: Option<String>,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            layout: LayoutResult::new(),
            registry: Rc::new(RefCell::new(Registry::default())),
            ready_state: ReadyState::Loading,
            pending_ready: Vec::new(),
            location: None,
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    pub fn class_list(&self, id: &str) -> Option<&ClassList> {
        self.get(id).map(|el| &el.classes)
    }

    pub fn class_list_mut(&mut self, id: &str) -> Option<&mut ClassList> {
        self.get_mut(id).map(|el| &mut el.classes)
    }

    /// Whether `descendant` is `ancestor` or one of its descendants.
    pub fn contains(&self, ancestor: &str, descendant: &str) -> bool {
        crate::element::contains(&self.root, ancestor, descendant)
    }

    /// How many elements carry `id`. Anything other than 1 means lookups by
    /// that ID are unreliable.
    pub fn id_count(&self, id: &str) -> usize {
        count_id(&self.root, id)
    }

    /// IDs of every element matching `selector`, in document order.
    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<String>, SelectorError> {
        let selector = Selector::parse(selector)?;
        Ok(query_selector_all(&self.root, &selector))
    }

    /// Last URL a link click navigated to.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    // ---------------------------------------------------------------------
    // Loading
    // ---------------------------------------------------------------------

    pub fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    pub fn is_ready(&self) -> bool {
        self.ready_state == ReadyState::Complete
    }

    /// Run `callback` once the structure has finished loading.
    /// Runs immediately if that already happened.
    pub fn on_content_loaded(&mut self, callback: impl FnOnce(&mut Document) + 'static) {
        if self.is_ready() {
            callback(self);
        } else {
            self.pending_ready.push(Box::new(callback));
        }
    }

    /// Mark the structure final and run queued content-loaded callbacks in
    /// registration order. Later calls do nothing.
    pub fn finish_loading(&mut self) {
        if self.is_ready() {
            return;
        }
        self.ready_state = ReadyState::Complete;

        let callbacks = std::mem::take(&mut self.pending_ready);
        log::debug!("[document] content loaded, running {} callbacks", callbacks.len());
        for callback in callbacks {
            callback(self);
        }
    }

    // ---------------------------------------------------------------------
    // Listeners
    // ---------------------------------------------------------------------

    /// Register a click listener. It stays registered for as long as the
    /// returned subscription lives.
    pub fn add_listener(
        &mut self,
        target: ListenerTarget,
        handler: impl Fn(&mut ClickEvent, &mut Element) + 'static,
    ) -> Subscription {
        let id = self.registry.borrow_mut().insert(target.clone(), Rc::new(handler));
        log::trace!("[document] registered {:?} on {:?}", id, target);
        Subscription::new(&self.registry, id)
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().len()
    }

    // ---------------------------------------------------------------------
    // Dispatch
    // ---------------------------------------------------------------------

    /// Deliver a click to its listeners, then run the default action unless
    /// a listener prevented it.
    ///
    /// Element listeners run from the target up through its ancestors, then
    /// document listeners run. Within one target they run in registration
    /// order.
    ///
    /// Only the primary button clicks. Other buttons reach no listener and
    /// have no default action.
    pub fn dispatch_click(&mut self, mut event: ClickEvent) -> DispatchOutcome {
        if event.button != MouseButton::Left {
            log::trace!("[document] ignoring {:?} button press on {:?}", event.button, event.target);
            return DispatchOutcome::default();
        }

        let path = event
            .target
            .as_deref()
            .map(|target| path_to(&self.root, target))
            .unwrap_or_default();

        // Snapshot handlers so listeners can add or drop subscriptions freely.
        let handlers = {
            let registry = self.registry.borrow();
            let mut handlers = Vec::new();
            for id in path.iter().rev() {
                let target = ListenerTarget::Element(id.clone());
                for (listener, handler) in registry.handlers_for(&target) {
                    handlers.push((Some(id.clone()), listener, handler));
                }
            }
            for (listener, handler) in registry.handlers_for(&ListenerTarget::Document) {
                handlers.push((None, listener, handler));
            }
            handlers
        };

        log::trace!(
            "[document] click target={:?} at ({}, {}), {} candidate listeners",
            event.target,
            event.x,
            event.y,
            handlers.len()
        );

        let mut outcome = DispatchOutcome::default();
        let mut current: Option<Option<String>> = None;

        for (current_target, listener, handler) in handlers {
            // stopPropagation lets the remaining listeners on the current
            // target run but nothing further up.
            if event.propagation_stopped() && current.as_ref() != Some(&current_target) {
                break;
            }
            if !self.registry.borrow().contains(listener) {
                continue;
            }
            current = Some(current_target.clone());
            event.current_target = current_target;
            handler(&mut event, &mut self.root);
            outcome.listeners_invoked += 1;
        }
        event.current_target = None;

        outcome.default_prevented = event.default_prevented();
        if !outcome.default_prevented {
            outcome.navigated_to = self.run_default_action(&event);
        }
        outcome
    }

    fn run_default_action(&mut self, event: &ClickEvent) -> Option<String> {
        let target = event.target()?;
        let href = closest_with_attribute(&self.root, target, "href")?
            .get_attr("href")?
            .to_string();
        log::debug!("[document] navigating to {href}");
        self.location = Some(href.clone());
        Some(href)
    }

    /// Left click on the element with `id`.
    pub fn click(&mut self, id: &str) -> DispatchOutcome {
        self.dispatch_click(ClickEvent::on(id))
    }

    // ---------------------------------------------------------------------
    // Pointer input
    // ---------------------------------------------------------------------

    /// Replace the screen rectangles used for hit testing.
    pub fn set_layout(&mut self, layout: LayoutResult) {
        self.layout = layout;
    }

    /// Deepest element at the given coordinates.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<String> {
        hit_test(&self.layout, &self.root, x, y)
    }

    /// Left click at screen coordinates.
    pub fn click_at(&mut self, x: u16, y: u16) -> DispatchOutcome {
        let target = self.hit_test(x, y);
        self.dispatch_click(ClickEvent::new(target, x, y, MouseButton::Left))
    }

    /// Turn a raw terminal event into a click. Only mouse button presses
    /// produce one.
    pub fn translate(&self, raw: &CrosstermEvent) -> Option<ClickEvent> {
        let CrosstermEvent::Mouse(mouse_event) = raw else {
            return None;
        };
        let MouseEventKind::Down(button) = mouse_event.kind else {
            return None;
        };
        let (x, y) = (mouse_event.column, mouse_event.row);
        Some(ClickEvent::new(self.hit_test(x, y), x, y, button.into()))
    }

    /// Translate and dispatch a batch of raw terminal events.
    pub fn process_events(&mut self, raw: &[CrosstermEvent]) -> Vec<DispatchOutcome> {
        raw.iter()
            .filter_map(|event| self.translate(event))
            .collect::<Vec<_>>()
            .into_iter()
            .map(|click| self.dispatch_click(click))
            .collect()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("root", &self.root.id)
            .field("ready_state", &self.ready_state)
            .field("listeners", &self.listener_count())
            .field("location", &self.location)
            .finish()
    }
}
