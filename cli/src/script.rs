//! Replay scripts: a JSON array of decoded input events.
//!
//! Each entry is an object tagged by `event`:
//!
//! ```json
//! [
//!   { "event": "viewport", "width": 800, "height": 600 },
//!   { "event": "tool", "tool": "add_node" },
//!   { "event": "click", "x": 100, "y": 100 },
//!   { "event": "pointer_down", "x": 10, "y": 10, "button": "middle" },
//!   { "event": "wheel", "x": 400, "y": 300, "dy": -100 },
//!   { "event": "key", "key": "Delete" }
//! ]
//! ```
//!
//! Coordinates are screen-space CSS pixels, exactly as a host would forward them.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use nodegraph::camera::Point;
use nodegraph::engine::{Action, EngineCore};
use nodegraph::input::{Button, Key, Modifiers, Tool, WheelDelta};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptEvent {
    Viewport {
        width: f64,
        height: f64,
    },
    Tool {
        tool: Tool,
    },
    PointerDown {
        x: f64,
        y: f64,
        #[serde(default = "default_button")]
        button: Button,
        #[serde(default)]
        modifiers: Modifiers,
    },
    PointerMove {
        x: f64,
        y: f64,
        #[serde(default)]
        modifiers: Modifiers,
    },
    PointerUp {
        x: f64,
        y: f64,
        #[serde(default = "default_button")]
        button: Button,
        #[serde(default)]
        modifiers: Modifiers,
    },
    /// Primary press and release at the same point.
    Click {
        x: f64,
        y: f64,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Wheel {
        x: f64,
        y: f64,
        #[serde(default)]
        dx: f64,
        dy: f64,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Key {
        key: String,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Properties {
        label: String,
        color: String,
    },
    Fit,
    Clear,
    Import {
        snapshot: serde_json::Value,
    },
}

fn default_button() -> Button {
    Button::Primary
}

/// Parse a script document.
///
/// # Errors
///
/// Returns the `serde_json` error for malformed JSON or unknown events.
pub fn parse_script(json: &str) -> Result<Vec<ScriptEvent>, serde_json::Error> {
    serde_json::from_str(json)
}

impl ScriptEvent {
    /// Feed this event to the engine and return what it asked the host to do.
    pub fn apply(self, core: &mut EngineCore) -> Vec<Action> {
        match self {
            Self::Viewport { width, height } => {
                core.set_viewport(width, height);
                Vec::new()
            }
            Self::Tool { tool } => core.set_tool(tool),
            Self::PointerDown { x, y, button, modifiers } => core.on_pointer_down(Point::new(x, y), button, modifiers),
            Self::PointerMove { x, y, modifiers } => core.on_pointer_move(Point::new(x, y), modifiers),
            Self::PointerUp { x, y, button, modifiers } => core.on_pointer_up(Point::new(x, y), button, modifiers),
            Self::Click { x, y, modifiers } => {
                let at = Point::new(x, y);
                let mut actions = core.on_pointer_down(at, Button::Primary, modifiers);
                actions.extend(core.on_pointer_up(at, Button::Primary, modifiers));
                actions
            }
            Self::Wheel { x, y, dx, dy, modifiers } => {
                core.on_wheel(Point::new(x, y), WheelDelta { dx, dy }, modifiers)
            }
            Self::Key { key, modifiers } => core.on_key_down(Key(key), modifiers),
            Self::Properties { label, color } => core.apply_properties(&label, &color),
            Self::Fit => core.zoom_to_fit(),
            Self::Clear => core.clear_scene(),
            Self::Import { snapshot } => core.import_snapshot_value(snapshot),
        }
    }
}
