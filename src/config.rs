use std::collections::HashMap;

use crate::{Command, Direction, ElementRef, Error, Result};

/// Input code for the enter/activate key in the default keymap.
pub const CODE_ENTER: u32 = 13;
/// Input code for the left arrow in the default keymap.
pub const CODE_LEFT: u32 = 37;
/// Input code for the up arrow in the default keymap.
pub const CODE_UP: u32 = 38;
/// Input code for the right arrow in the default keymap.
pub const CODE_RIGHT: u32 = 39;
/// Input code for the down arrow in the default keymap.
pub const CODE_DOWN: u32 = 40;

/// The root the full scan walks. `Document` is the whole-document sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Container {
    #[default]
    Document,
    Selector(String),
    Handle(crate::ElementId),
}

/// Engine configuration. Constructed from defaults, with caller-supplied
/// values overlaid via [`Options`].
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Input code to logical command mapping.
    pub keymap: HashMap<u32, Command>,
    /// Attribute marking an element as navigable.
    pub navigable_attribute: String,
    /// Attribute holding the per-element direction overrides.
    pub override_attribute: String,
    /// Attribute causing an element to capture focus when registered.
    pub capture_focus_attribute: String,
    /// Attribute marking an element's position as dynamic.
    pub dynamic_position_attribute: String,
    /// Element to focus when nothing holds focus, before falling back to the
    /// first registered element.
    pub default_focused_element: Option<ElementRef>,
    /// Root of the full scan.
    pub container: Container,
    /// Visual marker class applied to the focused element.
    pub focused_class: String,
    /// Whether automatic registry synchronization is active.
    pub watch_changes: bool,
}

/// The default keymap: arrow keys for movement, enter for activation.
pub fn default_keymap() -> HashMap<u32, Command> {
    HashMap::from([
        (CODE_UP, Command::Move(Direction::Up)),
        (CODE_DOWN, Command::Move(Direction::Down)),
        (CODE_LEFT, Command::Move(Direction::Left)),
        (CODE_RIGHT, Command::Move(Direction::Right)),
        (CODE_ENTER, Command::Enter),
    ])
}

impl Default for Config {
    fn default() -> Self {
        Config {
            keymap: default_keymap(),
            navigable_attribute: "focusable".into(),
            override_attribute: "focus-overrides".into(),
            capture_focus_attribute: "capture-focus".into(),
            dynamic_position_attribute: "dynamic-position".into(),
            default_focused_element: None,
            container: Container::Document,
            focused_class: "focused".into(),
            watch_changes: true,
        }
    }
}

impl Config {
    /// Overlay caller options onto this configuration. All options are
    /// optional; supplied values replace the corresponding field wholesale.
    pub fn overlay(mut self, options: Options) -> Result<Config> {
        if let Some(keymap) = options.keymap {
            self.keymap = keymap;
        }
        if let Some(v) = options.navigable_attribute {
            self.navigable_attribute = Self::attribute("navigable attribute", v)?;
        }
        if let Some(v) = options.override_attribute {
            self.override_attribute = Self::attribute("override attribute", v)?;
        }
        if let Some(v) = options.capture_focus_attribute {
            self.capture_focus_attribute = Self::attribute("capture-focus attribute", v)?;
        }
        if let Some(v) = options.dynamic_position_attribute {
            self.dynamic_position_attribute = Self::attribute("dynamic-position attribute", v)?;
        }
        if let Some(v) = options.default_focused_element {
            self.default_focused_element = Some(v);
        }
        if let Some(v) = options.container {
            self.container = v;
        }
        if let Some(v) = options.focused_class {
            self.focused_class = Self::attribute("focused class", v)?;
        }
        if let Some(v) = options.watch_changes {
            self.watch_changes = v;
        }
        Ok(self)
    }

    fn attribute(what: &str, v: String) -> Result<String> {
        if v.trim().is_empty() {
            Err(Error::Config(format!("{} may not be empty", what)))
        } else {
            Ok(v)
        }
    }
}

/// A partial configuration overlay. Every field is optional; unset fields
/// keep their default.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub keymap: Option<HashMap<u32, Command>>,
    pub navigable_attribute: Option<String>,
    pub override_attribute: Option<String>,
    pub capture_focus_attribute: Option<String>,
    pub dynamic_position_attribute: Option<String>,
    pub default_focused_element: Option<ElementRef>,
    pub container: Option<Container>,
    pub focused_class: Option<String>,
    pub watch_changes: Option<bool>,
}
