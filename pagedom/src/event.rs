/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// A click travelling through the document.
///
/// Listeners see the same event in turn and may cancel the default action
/// or stop it from reaching further listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    /// Deepest element the click landed on. None when it hit no element.
    pub target: Option<String>,
    pub x: u16,
    pub y: u16,
    pub button: MouseButton,
    /// Element whose listener is currently running. None while document
    /// listeners run.
    pub current_target: Option<String>,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl ClickEvent {
    pub fn new(target: Option<String>, x: u16, y: u16, button: MouseButton) -> Self {
        Self {
            target,
            x,
            y,
            button,
            current_target: None,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// Left click on an element, without coordinates.
    pub fn on(target: impl Into<String>) -> Self {
        Self::new(Some(target.into()), 0, 0, MouseButton::Left)
    }

    /// Left click that hit no element.
    pub fn nowhere() -> Self {
        Self::new(None, 0, 0, MouseButton::Left)
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Cancel the default action (link navigation).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Keep the event from reaching listeners further up the tree.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

// Conversion from crossterm types
impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
