//! Spatial keyboard/remote navigation over a set of on-screen interactive
//! elements. Given a focused element and a directional command, the engine
//! finds the geometrically closest eligible element and performs the focus
//! transition with lifecycle notifications. Aimed at TV/remote and kiosk
//! interfaces where layout is two-dimensional and tab order is not enough.
//!
//! The embedding environment is abstracted behind the [`Host`] trait; the
//! engine itself is a plain value with no global state.

mod config;
mod direction;
mod element;
mod focus;
mod navigator;
mod overrides;
mod registry;
mod search;
mod tutils;

pub mod error;
pub mod geom;
pub mod host;
pub mod input;

pub use config::{default_keymap, Config, Container, Options};
pub use config::{CODE_DOWN, CODE_ENTER, CODE_LEFT, CODE_RIGHT, CODE_UP};
pub use direction::{Command, Direction};
pub use element::{Element, ElementId, ElementRef};
pub use error::{Error, Result};
pub use focus::{FocusEvent, FocusListener, FocusPhase, FocusState};
pub use host::{ChangeKind, ChangeObserver, Host, NodeKind, TreeChange};
pub use navigator::Navigator;
pub use overrides::{Override, Overrides};
pub use registry::Registry;
pub use search::search;
