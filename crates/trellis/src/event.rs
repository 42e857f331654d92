//! Message types and key-event normalization.
//!
//! Components receive input as type-erased [`Msg`] values and downcast to
//! the concrete messages they understand. Keyboard input arrives as a
//! [`KeyMsg`], which normalizes a crossterm key event into a canonical
//! string form ("up", "enter", "ctrl+u", plain characters as themselves)
//! suitable for matching against key bindings.

use std::any::Any;
use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A type-erased message container.
///
/// Messages can be any type that is `Send + 'static`. Use [`Msg::new`] to
/// create a message and [`Msg::downcast_ref`] to inspect it.
///
/// # Example
///
/// ```rust
/// use trellis::event::Msg;
///
/// struct Refresh;
///
/// let msg = Msg::new(Refresh);
/// assert!(msg.is::<Refresh>());
/// ```
pub struct Msg(Box<dyn Any + Send>);

impl Msg {
    /// Creates a new message from any sendable type.
    pub fn new<M: Any + Send + 'static>(msg: M) -> Self {
        Self(Box::new(msg))
    }

    /// Consumes the message, returning the inner value if it has type `M`.
    #[must_use]
    pub fn downcast<M: Any + Send + 'static>(self) -> Option<M> {
        self.0.downcast::<M>().ok().map(|b| *b)
    }

    /// Returns a reference to the inner value if it has type `M`.
    #[must_use]
    pub fn downcast_ref<M: Any + Send + 'static>(&self) -> Option<&M> {
        self.0.downcast_ref::<M>()
    }

    /// Returns whether the message has type `M`.
    #[must_use]
    pub fn is<M: Any + Send + 'static>(&self) -> bool {
        self.0.is::<M>()
    }
}

impl fmt::Debug for Msg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Msg").finish_non_exhaustive()
    }
}

impl From<KeyMsg> for Msg {
    fn from(key: KeyMsg) -> Self {
        Self::new(key)
    }
}

/// A normalized keyboard event.
///
/// The [`fmt::Display`] form is the canonical binding string used by
/// [`crate::key::matches`]: special keys render as lowercase names
/// ("up", "enter", "pgdown"), characters render as themselves, and
/// modifiers prefix the name ("ctrl+u", "alt+x").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMsg {
    /// The key code as reported by the terminal.
    pub code: KeyCode,
    /// Modifier keys held during the event.
    pub modifiers: KeyModifiers,
}

impl KeyMsg {
    /// Creates a key message from a code and modifiers.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key message for a plain character.
    #[must_use]
    pub const fn char(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::NONE)
    }
}

impl From<KeyEvent> for KeyMsg {
    fn from(ev: KeyEvent) -> Self {
        Self::new(ev.code, ev.modifiers)
    }
}

impl fmt::Display for KeyMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            write!(f, "ctrl+")?;
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            write!(f, "alt+")?;
        }
        match self.code {
            KeyCode::Char(' ') => write!(f, " "),
            KeyCode::Char(c) => write!(f, "{c}"),
            KeyCode::Enter => write!(f, "enter"),
            KeyCode::Up => write!(f, "up"),
            KeyCode::Down => write!(f, "down"),
            KeyCode::Left => write!(f, "left"),
            KeyCode::Right => write!(f, "right"),
            KeyCode::Home => write!(f, "home"),
            KeyCode::End => write!(f, "end"),
            KeyCode::PageUp => write!(f, "pgup"),
            KeyCode::PageDown => write!(f, "pgdown"),
            KeyCode::Tab => write!(f, "tab"),
            KeyCode::BackTab => write!(f, "shift+tab"),
            KeyCode::Backspace => write!(f, "backspace"),
            KeyCode::Delete => write!(f, "delete"),
            KeyCode::Insert => write!(f, "insert"),
            KeyCode::Esc => write!(f, "esc"),
            KeyCode::F(n) => write!(f, "f{n}"),
            _ => write!(f, "unknown"),
        }
    }
}
