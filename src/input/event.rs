//! Raw input events fed to the interaction engine.
//!
//! All positions are screen coordinates relative to the canvas container's
//! top-left corner. The host translates its windowing events into these.

use crate::types::Point;

/// Keyboard modifiers held during an event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub control: bool,
    /// Command on macOS
    pub platform: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        control: false,
        platform: false,
        shift: false,
    };

    pub const CONTROL: Modifiers = Modifiers {
        control: true,
        platform: false,
        shift: false,
    };

    /// Returns true if the zoom modifier (Control, or Command) is held
    pub fn zoom_held(&self) -> bool {
        self.control || self.platform
    }
}

/// Keys the engine reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
    Delete,
    Backspace,
    /// Any other key (only meaningful as a text keystroke)
    Other,
}

#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    PointerDown { position: Point },
    PointerMove { position: Point },
    PointerUp { position: Point },
    DoubleClick { position: Point },
    Wheel {
        position: Point,
        /// Positive scrolls down (zooms out)
        delta_y: f64,
        modifiers: Modifiers,
    },
    KeyDown { key: Key },
    /// Full text of the node being edited after a keystroke
    TextInput { text: String },
    /// The inline editor lost focus
    Blur,
}
