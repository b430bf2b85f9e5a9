use std::cell::RefCell;
use std::rc::Rc;

use pagedom::{ClickEvent, Document, Element, ListenerTarget, MouseButton, ReadyState};

fn page() -> Element {
    Element::body()
        .id("body")
        .child(
            Element::div()
                .id("nav")
                .class("nav")
                .child(Element::link("/accounts/profile/").id("link").child(Element::text("Account").id("label"))),
        )
        .child(Element::div().id("main").child(Element::text("Budgets").id("content")))
}

fn recorder() -> Rc<RefCell<Vec<String>>> {
    Rc::new(RefCell::new(Vec::new()))
}

fn tag(name: &'static str, log: &Rc<RefCell<Vec<String>>>) -> impl Fn(&mut ClickEvent, &mut Element) + 'static {
    let log = Rc::clone(log);
    move |event, _| {
        log.borrow_mut()
            .push(format!("{name}:{}", event.current_target.as_deref().unwrap_or("document")));
    }
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_content_loaded_callbacks_are_queued_until_finish() {
    let mut doc = Document::new(page());
    let log = recorder();

    let first = Rc::clone(&log);
    doc.on_content_loaded(move |_| first.borrow_mut().push("first".into()));
    let second = Rc::clone(&log);
    doc.on_content_loaded(move |_| second.borrow_mut().push("second".into()));

    assert_eq!(doc.ready_state(), ReadyState::Loading);
    assert!(log.borrow().is_empty());

    doc.finish_loading();
    assert_eq!(doc.ready_state(), ReadyState::Complete);
    assert_eq!(*log.borrow(), vec!["first", "second"]);

    // Finishing again does not replay callbacks
    doc.finish_loading();
    assert_eq!(log.borrow().len(), 2);
}

#[test]
fn test_content_loaded_runs_immediately_when_ready() {
    let mut doc = Document::new(page());
    doc.finish_loading();

    let log = recorder();
    let inner = Rc::clone(&log);
    doc.on_content_loaded(move |doc| inner.borrow_mut().push(doc.root().id.clone()));

    assert_eq!(*log.borrow(), vec!["body"]);
}

// ============================================================================
// Dispatch order
// ============================================================================

#[test]
fn test_bubbles_from_target_to_document() {
    let mut doc = Document::new(page());
    let log = recorder();

    let _d = doc.add_listener(ListenerTarget::Document, tag("doc", &log));
    let _n = doc.add_listener(ListenerTarget::Element("nav".into()), tag("nav", &log));
    let _l = doc.add_listener(ListenerTarget::Element("link".into()), tag("link", &log));
    let _m = doc.add_listener(ListenerTarget::Element("main".into()), tag("main", &log));

    let outcome = doc.click("label");

    assert_eq!(
        *log.borrow(),
        vec!["link:link", "nav:nav", "doc:document"],
        "main is not an ancestor of the label"
    );
    assert_eq!(outcome.listeners_invoked, 3);
}

#[test]
fn test_click_without_target_reaches_only_document_listeners() {
    let mut doc = Document::new(page());
    let log = recorder();

    let inner = Rc::clone(&log);
    let _d = doc.add_listener(ListenerTarget::Document, move |_, _| inner.borrow_mut().push("doc".into()));
    let inner = Rc::clone(&log);
    let _b = doc.add_listener(ListenerTarget::Element("body".into()), move |_, _| {
        inner.borrow_mut().push("body".into())
    });

    doc.dispatch_click(ClickEvent::nowhere());
    assert_eq!(*log.borrow(), vec!["doc"]);
}

#[test]
fn test_stop_propagation_finishes_current_target_only() {
    let mut doc = Document::new(page());
    let log = recorder();

    let inner = Rc::clone(&log);
    let _a = doc.add_listener(ListenerTarget::Element("link".into()), move |event, _| {
        event.stop_propagation();
        inner.borrow_mut().push("a".into());
    });
    let inner = Rc::clone(&log);
    let _b = doc.add_listener(ListenerTarget::Element("link".into()), move |_, _| {
        inner.borrow_mut().push("b".into())
    });
    let inner = Rc::clone(&log);
    let _d = doc.add_listener(ListenerTarget::Document, move |_, _| inner.borrow_mut().push("doc".into()));

    doc.click("link");
    assert_eq!(*log.borrow(), vec!["a", "b"]);
}

#[test]
fn test_secondary_buttons_reach_no_listeners() {
    let mut doc = Document::new(page());
    let log = recorder();

    let _d = doc.add_listener(ListenerTarget::Document, tag("doc", &log));
    let _l = doc.add_listener(ListenerTarget::Element("link".into()), tag("link", &log));

    for button in [MouseButton::Right, MouseButton::Middle] {
        let outcome = doc.dispatch_click(ClickEvent::new(Some("label".into()), 0, 0, button));
        assert_eq!(outcome, pagedom::DispatchOutcome::default(), "{button:?}");
    }

    assert!(log.borrow().is_empty());
    assert_eq!(doc.location(), None);
}

// ============================================================================
// Default action
// ============================================================================

#[test]
fn test_link_click_navigates() {
    let mut doc = Document::new(page());

    let outcome = doc.click("label");

    assert!(!outcome.default_prevented);
    assert_eq!(outcome.navigated_to.as_deref(), Some("/accounts/profile/"));
    assert_eq!(doc.location(), Some("/accounts/profile/"));
}

#[test]
fn test_prevent_default_blocks_navigation() {
    let mut doc = Document::new(page());
    let _s = doc.add_listener(ListenerTarget::Element("link".into()), |event, _| event.prevent_default());

    let outcome = doc.click("link");

    assert!(outcome.default_prevented);
    assert_eq!(outcome.navigated_to, None);
    assert_eq!(doc.location(), None);
}

#[test]
fn test_click_outside_links_does_not_navigate() {
    let mut doc = Document::new(page());
    let outcome = doc.click("content");
    assert_eq!(outcome.navigated_to, None);
}

#[test]
fn test_listener_can_mutate_tree() {
    let mut doc = Document::new(page());
    let _s = doc.add_listener(ListenerTarget::Element("link".into()), |_, root| {
        if let Some(main) = pagedom::element::find_element_mut(root, "main") {
            main.classes.toggle("dimmed");
        }
    });

    doc.click("link");
    assert!(doc.class_list("main").is_some_and(|c| c.contains("dimmed")));
    doc.click("link");
    assert!(doc.class_list("main").is_some_and(|c| !c.contains("dimmed")));
}

// ============================================================================
// Subscriptions
// ============================================================================

#[test]
fn test_dropping_subscription_removes_listener() {
    let mut doc = Document::new(page());
    let count = Rc::new(RefCell::new(0));

    let inner = Rc::clone(&count);
    let sub = doc.add_listener(ListenerTarget::Document, move |_, _| *inner.borrow_mut() += 1);
    assert!(sub.is_active());
    assert_eq!(doc.listener_count(), 1);

    doc.click("content");
    assert_eq!(*count.borrow(), 1);

    sub.cancel();
    assert_eq!(doc.listener_count(), 0);

    doc.click("content");
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn test_subscription_ids_are_distinct() {
    let mut doc = Document::new(page());
    let first = doc.add_listener(ListenerTarget::Document, |_, _| {});
    let second = doc.add_listener(ListenerTarget::Document, |_, _| {});
    assert_ne!(first.id(), second.id());

    let kept = second.id();
    drop(first);
    let third = doc.add_listener(ListenerTarget::Document, |_, _| {});
    assert_ne!(third.id(), kept, "ids are not reused");
    assert_eq!(second.id(), kept);
}

#[test]
fn test_subscription_outlives_document() {
    let mut doc = Document::new(page());
    let sub = doc.add_listener(ListenerTarget::Document, |_, _| {});
    drop(doc);
    assert!(!sub.is_active());
    drop(sub);
}

#[test]
fn test_listener_removed_mid_dispatch_does_not_fire() {
    let mut doc = Document::new(page());
    let log = recorder();
    let slot: Rc<RefCell<Option<pagedom::Subscription>>> = Rc::new(RefCell::new(None));

    let remover = Rc::clone(&slot);
    let _first = doc.add_listener(ListenerTarget::Element("link".into()), move |_, _| {
        drop(remover.borrow_mut().take());
    });
    let inner = Rc::clone(&log);
    let second = doc.add_listener(ListenerTarget::Document, move |_, _| inner.borrow_mut().push("late".into()));
    *slot.borrow_mut() = Some(second);

    let outcome = doc.click("link");

    assert!(log.borrow().is_empty());
    assert_eq!(outcome.listeners_invoked, 1);
    assert_eq!(doc.listener_count(), 1);
}
