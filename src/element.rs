use std::fmt;

use crate::{
    geom::{Anchors, Rect},
    Overrides,
};

/// An opaque handle to a host element. Handles compare by identity; the host
/// guarantees one handle per live element.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    pub fn new(id: u64) -> Self {
        ElementId(id)
    }
}

impl From<u64> for ElementId {
    fn from(id: u64) -> Self {
        ElementId(id)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A way of naming an element: either a live handle, or a selector-like
/// reference resolved through the host when the reference is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementRef {
    Handle(ElementId),
    Selector(String),
}

impl From<ElementId> for ElementRef {
    fn from(id: ElementId) -> Self {
        ElementRef::Handle(id)
    }
}

impl From<&str> for ElementRef {
    fn from(s: &str) -> Self {
        ElementRef::Selector(s.to_string())
    }
}

impl From<String> for ElementRef {
    fn from(s: String) -> Self {
        ElementRef::Selector(s)
    }
}

/// A registry entry: a navigable element together with its derived anchor
/// geometry and parsed overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: ElementId,
    pub anchors: Anchors,
    pub overrides: Overrides,
    /// Dynamically positioned elements have their anchors re-derived before
    /// every navigation command rather than cached from registration time.
    pub dynamic: bool,
}

impl Element {
    pub fn new(id: ElementId, rect: Rect, overrides: Overrides, dynamic: bool) -> Self {
        Element {
            id,
            anchors: Anchors::from_rect(rect),
            overrides,
            dynamic,
        }
    }
}
