use crate::{
    geom::{Anchors, Rect},
    Element, ElementId,
};

/// The authoritative, insertion-ordered set of currently navigable elements.
/// Order records discovery order during a scan; the directional search is
/// distance-based and ignores it, but the default-focus fallback uses the
/// first entry. The registry never holds two entries with the same identity.
#[derive(Debug, Default)]
pub struct Registry {
    entries: Vec<Element>,
}

impl Registry {
    pub fn new() -> Self {
        Registry {
            entries: Vec::new(),
        }
    }

    /// Add an entry. Registration is idempotent on identity: re-registering
    /// an element replaces the stale entry in place, keeping its position.
    pub fn register(&mut self, element: Element) {
        if let Some(existing) = self.entries.iter_mut().find(|e| e.id == element.id) {
            *existing = element;
        } else {
            self.entries.push(element);
        }
    }

    /// Remove all entries with the given identity. No-op if absent.
    pub fn unregister(&mut self, id: ElementId) {
        self.entries.retain(|e| e.id != id);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// The first entry in registration order, used as the default-focus
    /// fallback.
    pub fn first(&self) -> Option<&Element> {
        self.entries.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.entries.iter()
    }

    pub fn ids(&self) -> Vec<ElementId> {
        self.entries.iter().map(|e| e.id).collect()
    }

    /// Re-derive anchors for every entry flagged as dynamically positioned.
    /// Entries whose rectangle can no longer be produced keep their cached
    /// anchors.
    pub fn recalculate_dynamic(&mut self, mut rect_of: impl FnMut(ElementId) -> Option<Rect>) {
        for e in self.entries.iter_mut().filter(|e| e.dynamic) {
            if let Some(r) = rect_of(e.id) {
                e.anchors = Anchors::from_rect(r);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Overrides;

    fn el(id: u64, rect: Rect) -> Element {
        Element::new(ElementId::new(id), rect, Overrides::default(), false)
    }

    #[test]
    fn register_is_idempotent() {
        let mut r = Registry::new();
        r.register(el(1, Rect::new(0.0, 0.0, 10.0, 10.0)));
        r.register(el(2, Rect::new(0.0, 20.0, 10.0, 10.0)));
        r.register(el(1, Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert_eq!(r.len(), 2);
        // The replacement keeps its original slot and picks up new geometry.
        assert_eq!(r.first().unwrap().id, ElementId::new(1));
        assert_eq!(r.first().unwrap().anchors.origin.x, 5.0);
    }

    #[test]
    fn unregister() {
        let mut r = Registry::new();
        r.register(el(1, Rect::new(0.0, 0.0, 10.0, 10.0)));
        r.unregister(ElementId::new(1));
        assert!(r.is_empty());
        // No-op on an absent identity.
        r.unregister(ElementId::new(1));
        assert!(r.is_empty());
    }

    #[test]
    fn recalculate_dynamic_only_touches_flagged_entries() {
        let mut r = Registry::new();
        let mut fixed = el(1, Rect::new(0.0, 0.0, 10.0, 10.0));
        fixed.dynamic = false;
        let mut moving = el(2, Rect::new(0.0, 0.0, 10.0, 10.0));
        moving.dynamic = true;
        r.register(fixed);
        r.register(moving);

        r.recalculate_dynamic(|_| Some(Rect::new(100.0, 100.0, 10.0, 10.0)));

        assert_eq!(r.get(ElementId::new(1)).unwrap().anchors.origin.x, 0.0);
        assert_eq!(r.get(ElementId::new(2)).unwrap().anchors.origin.x, 100.0);
    }

    #[test]
    fn recalculate_dynamic_keeps_anchors_without_a_rect() {
        let mut r = Registry::new();
        let mut moving = el(1, Rect::new(3.0, 4.0, 10.0, 10.0));
        moving.dynamic = true;
        r.register(moving);
        r.recalculate_dynamic(|_| None);
        assert_eq!(r.get(ElementId::new(1)).unwrap().anchors.origin.x, 3.0);
    }
}
