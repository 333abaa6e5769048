use std::fmt;

use crate::ElementId;

/// The focus state of the engine. `FocusedOn` always refers to an element
/// currently present in the registry; the synchronizer restores this
/// invariant before returning whenever the focused element is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    #[default]
    NoFocus,
    FocusedOn(ElementId),
}

impl FocusState {
    /// The focused element, if any.
    pub fn element(&self) -> Option<ElementId> {
        match self {
            FocusState::NoFocus => None,
            FocusState::FocusedOn(id) => Some(*id),
        }
    }
}

/// The four lifecycle notification phases, fired synchronously and in this
/// order on every focus transition. A re-entrant transition (new element ==
/// old element) re-fires all four.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPhase {
    /// The old element is about to lose focus.
    LosingFocus,
    /// The old element has lost focus.
    FocusLost,
    /// The new element is about to gain focus.
    GainingFocus,
    /// The new element has gained focus.
    FocusGained,
}

impl fmt::Display for FocusPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FocusPhase::LosingFocus => "losing-focus",
            FocusPhase::FocusLost => "focus-lost",
            FocusPhase::GainingFocus => "gaining-focus",
            FocusPhase::FocusGained => "focus-gained",
        };
        write!(f, "{}", s)
    }
}

/// A lifecycle notification delivered to listeners registered on the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusEvent {
    pub phase: FocusPhase,
    pub element: ElementId,
}

/// A listener for focus lifecycle notifications.
pub type FocusListener = Box<dyn FnMut(&FocusEvent)>;
