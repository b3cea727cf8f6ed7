//! Built-in layer presets.
//!
//! A preset is a named layer-set template. Applying one replaces every layer
//! and clears all nodes and connections.

use crate::types::Layer;
use once_cell::sync::Lazy;

/// A named layer-set template
#[derive(Debug, Clone)]
pub struct Preset {
    /// Key used by the toolbar intent, e.g. `blueprint`
    pub key: &'static str,
    /// Human readable label
    pub label: &'static str,
    layers: &'static [(&'static str, &'static str, &'static str)],
}

impl Preset {
    /// Fresh layer list for this preset
    pub fn layers(&self) -> Vec<Layer> {
        self.layers
            .iter()
            .map(|(id, name, color)| Layer::new(*id, *name, *color))
            .collect()
    }
}

pub const BLUEPRINT: &str = "blueprint";
pub const JOURNEY: &str = "journey";

static PRESETS: Lazy<Vec<Preset>> = Lazy::new(|| {
    vec![
        Preset {
            key: BLUEPRINT,
            label: "Service Blueprint (3 layers)",
            layers: &[
                ("customer", "Customer actions", "#f59e0b"),
                ("frontstage", "Frontstage (product / UI)", "#3b82f6"),
                ("backstage", "Backstage / internal actions", "#10b981"),
            ],
        },
        Preset {
            key: JOURNEY,
            label: "Journey map (2 layers)",
            layers: &[
                ("touchpoints", "Customer touchpoints", "#6366f1"),
                ("emotions", "Emotions / pain points", "#ec4899"),
            ],
        },
    ]
});

/// All built-in presets in menu order
pub fn all() -> &'static [Preset] {
    &PRESETS
}

/// Look up a preset by key
pub fn find(key: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.key == key)
}

/// Layer set a fresh document starts with (the blueprint preset)
pub fn default_layers() -> Vec<Layer> {
    find(BLUEPRINT).map(Preset::layers).unwrap_or_else(|| {
        vec![Layer::new("default", "Layer 1", crate::constants::LAYER_COLOR_PALETTE[2])]
    })
}
