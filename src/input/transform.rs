//! Canvas transformations - wheel zoom.

use crate::app::Layerboard;
use crate::input::Modifiers;
use crate::types::Point;

impl Layerboard {
    /// Zoom one notch around the cursor when Control (or Command) is held.
    ///
    /// Scrolling down zooms out. Plain wheel input is left to the host.
    pub(crate) fn handle_wheel(&mut self, position: Point, delta_y: f64, modifiers: Modifiers) -> bool {
        if !modifiers.zoom_held() || delta_y == 0.0 {
            return false;
        }
        let step = self.settings.zoom_step;
        let delta = if delta_y > 0.0 { -step } else { step };
        let zoomed = self.canvas.viewport.zoom_at(delta, Some(position));
        let changed = zoomed != self.canvas.viewport;
        self.canvas.viewport = zoomed;
        changed
    }
}
