pub mod document;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod listener;
pub mod selector;

pub use document::{DispatchOutcome, Document, ReadyState};
pub use element::{ClassList, Content, Element};
pub use event::{ClickEvent, MouseButton};
pub use hit::hit_test;
pub use layout::{LayoutResult, Rect};
pub use listener::{ClickHandler, ListenerId, ListenerTarget, Subscription};
pub use selector::{query_selector, query_selector_all, Selector, SelectorError};
