use crate::{geom::Rect, Container, ElementId};

/// The kind of a tree node reported in a change notification. Only element
/// nodes are ever relevant to the registry; comment nodes are always
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Element,
    Comment,
    Other,
}

/// Whether a node was added to or removed from the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Removed,
}

/// A single add/remove notification. Both observer styles reduce to this
/// shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeChange {
    pub kind: ChangeKind,
    pub node: ElementId,
    pub node_kind: NodeKind,
}

/// The tree-change observation capability. Two interchangeable providers
/// exist: a structural mutation observer and a legacy discrete per-node
/// event pair. The engine depends only on this interface, prefers the
/// structural provider, and keeps working without either via manual
/// refreshes.
pub trait ChangeObserver {
    /// Begin collecting change notifications.
    fn start(&mut self);
    /// Stop collecting and detach from the underlying mechanism.
    fn stop(&mut self);
    /// Take all notifications collected since the last drain, in arrival
    /// order.
    fn drain(&mut self) -> Vec<TreeChange>;
}

/// The capabilities the engine consumes from its embedding environment: the
/// layout provider, the element-tree query surface, selector resolution,
/// focus and visual-marker plumbing, and the activation signal. All
/// operations are synchronous, and lookups on stale handles resolve to
/// no-ops or `None` rather than failures.
pub trait Host {
    /// The element's current screen rectangle, or None if it has no layout.
    fn rect(&self, id: ElementId) -> Option<Rect>;

    /// All descendants of the container carrying the given attribute, in
    /// document order.
    fn query(&self, container: &Container, attribute: &str) -> Vec<ElementId>;

    /// Does the element carry the named attribute?
    fn has_attribute(&self, id: ElementId, name: &str) -> bool;

    /// The value of the named attribute, if present.
    fn attribute(&self, id: ElementId, name: &str) -> Option<String>;

    /// Is the element hidden from layout (display:none or hidden
    /// visibility)? Hidden elements are never registered.
    fn is_hidden(&self, id: ElementId) -> bool;

    /// Resolve a selector-like reference to a live element.
    fn resolve(&self, selector: &str) -> Option<ElementId>;

    /// Apply the focused visual marker class.
    fn add_class(&mut self, id: ElementId, class: &str);

    /// Remove the focused visual marker class.
    fn remove_class(&mut self, id: ElementId, class: &str);

    /// Give the element input focus.
    fn focus(&mut self, id: ElementId);

    /// Remove input focus from the element.
    fn blur(&mut self, id: ElementId);

    /// Deliver a synthetic activation signal (a click-equivalent) to the
    /// element.
    fn activate(&mut self, id: ElementId);

    /// The structural tree-mutation observer, if the environment provides
    /// one. The default implementation reports no observer.
    fn structural_observer(&mut self) -> Option<Box<dyn ChangeObserver>> {
        None
    }

    /// The legacy discrete-event observer, used when no structural observer
    /// exists. The default implementation reports no observer.
    fn event_observer(&mut self) -> Option<Box<dyn ChangeObserver>> {
        None
    }
}
