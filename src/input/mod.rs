//! Pointer, wheel and keyboard handling for the canvas.
//!
//! This module implements the interaction engine: a single stream of raw
//! input events is resolved against the diagram and viewport into exactly
//! one active mode (`InteractionState`), producing model mutations or
//! viewport updates.
//!
//! ## Modules
//!
//! - `state` - Interaction state machine enum and helper methods
//! - `event` - Raw input event types
//! - `mouse_down` - Pointer down (hit resolution, mode entry)
//! - `drag` - Pointer move (node drag, pan, connection preview)
//! - `mouse_up` - Pointer up (connection finalization, mode exit)
//! - `keyboard` - Keys, double click, inline text editing
//! - `transform` - Wheel zoom
//!
//! Handlers run to completion one event at a time; there is no deferred work.

mod drag;
mod event;
mod keyboard;
mod mouse_down;
mod mouse_up;
mod state;
mod transform;

pub use event::{InputEvent, Key, Modifiers};
pub use state::InteractionState;

use crate::app::Layerboard;
use tracing::trace;

impl Layerboard {
    /// Process one input event. Returns true if the host should redraw.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        let changed = match event {
            InputEvent::PointerDown { position } => self.handle_pointer_down(position),
            InputEvent::PointerMove { position } => self.handle_pointer_move(position),
            InputEvent::PointerUp { position } => self.handle_pointer_up(position),
            InputEvent::DoubleClick { position } => self.handle_double_click(position),
            InputEvent::Wheel {
                position,
                delta_y,
                modifiers,
            } => self.handle_wheel(position, delta_y, modifiers),
            InputEvent::KeyDown { key } => self.handle_key(key),
            InputEvent::TextInput { text } => self.handle_text_input(text),
            InputEvent::Blur => self.handle_blur(),
        };
        trace!(state = ?self.canvas.input_state, changed, "Event handled");
        changed
    }
}
