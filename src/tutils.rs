#[cfg(test)]
pub mod utils {
    use std::cell::{Cell, RefCell};
    use std::collections::{HashMap, VecDeque};
    use std::rc::Rc;

    use crate::host::{ChangeKind, ChangeObserver, NodeKind, TreeChange};
    use crate::{geom::Rect, Container, ElementId, FocusPhase, Host, Navigator};

    #[derive(Debug, Clone)]
    struct TestElement {
        id: ElementId,
        selector: String,
        rect: Rect,
        attrs: HashMap<String, String>,
        hidden: bool,
        parent: Option<ElementId>,
    }

    /// A change queue shared between a test and the observer the host hands
    /// to the engine. Tests push tree changes; the engine drains them via
    /// `pump`.
    #[derive(Clone, Default)]
    pub struct ChangeQueue {
        queue: Rc<RefCell<VecDeque<TreeChange>>>,
        started: Rc<Cell<bool>>,
    }

    impl ChangeQueue {
        pub fn push(&self, kind: ChangeKind, node: ElementId, node_kind: NodeKind) {
            self.queue.borrow_mut().push_back(TreeChange {
                kind,
                node,
                node_kind,
            });
        }

        pub fn added(&self, node: ElementId) {
            self.push(ChangeKind::Added, node, NodeKind::Element);
        }

        pub fn removed(&self, node: ElementId) {
            self.push(ChangeKind::Removed, node, NodeKind::Element);
        }

        pub fn is_started(&self) -> bool {
            self.started.get()
        }
    }

    struct QueueObserver(ChangeQueue);

    impl ChangeObserver for QueueObserver {
        fn start(&mut self) {
            self.0.started.set(true);
        }

        fn stop(&mut self) {
            self.0.started.set(false);
        }

        fn drain(&mut self) -> Vec<TreeChange> {
            if !self.0.started.get() {
                return Vec::new();
            }
            self.0.queue.borrow_mut().drain(..).collect()
        }
    }

    /// An in-memory host: a flat document of elements with rectangles and
    /// attributes, selector resolution by name, and a log of the calls the
    /// engine makes against it.
    #[derive(Default)]
    pub struct TestHost {
        elements: Vec<TestElement>,
        next_id: u64,
        structural: Option<ChangeQueue>,
        events: Option<ChangeQueue>,
        /// Host calls in arrival order, e.g. `focus a`, `class+ a focused`.
        pub log: Vec<String>,
    }

    impl TestHost {
        pub fn new() -> Self {
            TestHost::default()
        }

        /// Add a navigable element (the `focusable` attribute is set).
        pub fn add(&mut self, selector: &str, rect: Rect) -> ElementId {
            self.add_with(selector, rect, &[("focusable", "")])
        }

        /// Add an element with the given attributes.
        pub fn add_with(
            &mut self,
            selector: &str,
            rect: Rect,
            attrs: &[(&str, &str)],
        ) -> ElementId {
            self.next_id += 1;
            let id = ElementId::new(self.next_id);
            self.elements.push(TestElement {
                id,
                selector: selector.to_string(),
                rect,
                attrs: attrs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                hidden: false,
                parent: None,
            });
            id
        }

        pub fn set_attr(&mut self, id: ElementId, name: &str, value: &str) {
            if let Some(e) = self.element_mut(id) {
                e.attrs.insert(name.to_string(), value.to_string());
            }
        }

        pub fn set_hidden(&mut self, id: ElementId, hidden: bool) {
            if let Some(e) = self.element_mut(id) {
                e.hidden = hidden;
            }
        }

        pub fn set_rect(&mut self, id: ElementId, rect: Rect) {
            if let Some(e) = self.element_mut(id) {
                e.rect = rect;
            }
        }

        pub fn set_parent(&mut self, child: ElementId, parent: ElementId) {
            if let Some(e) = self.element_mut(child) {
                e.parent = Some(parent);
            }
        }

        /// Detach an element from the document. Selector resolution and
        /// attribute queries for it fail afterwards.
        pub fn remove(&mut self, id: ElementId) {
            self.elements.retain(|e| e.id != id);
        }

        /// Make a structural observer available to the engine.
        pub fn enable_structural_observer(&mut self) -> ChangeQueue {
            let q = ChangeQueue::default();
            self.structural = Some(q.clone());
            q
        }

        /// Make a discrete-event observer available to the engine.
        pub fn enable_event_observer(&mut self) -> ChangeQueue {
            let q = ChangeQueue::default();
            self.events = Some(q.clone());
            q
        }

        pub fn selector_of(&self, id: ElementId) -> String {
            self.element(id)
                .map(|e| e.selector.clone())
                .unwrap_or_else(|| format!("{}", id))
        }

        fn element(&self, id: ElementId) -> Option<&TestElement> {
            self.elements.iter().find(|e| e.id == id)
        }

        fn element_mut(&mut self, id: ElementId) -> Option<&mut TestElement> {
            self.elements.iter_mut().find(|e| e.id == id)
        }

        fn in_container<'a>(&'a self, mut el: &'a TestElement, root: ElementId) -> bool {
            while let Some(parent) = el.parent {
                if parent == root {
                    return true;
                }
                match self.element(parent) {
                    Some(p) => el = p,
                    None => return false,
                }
            }
            false
        }

        fn log_call(&mut self, op: &str, id: ElementId, rest: &str) {
            let sel = self.selector_of(id);
            if rest.is_empty() {
                self.log.push(format!("{} {}", op, sel));
            } else {
                self.log.push(format!("{} {} {}", op, sel, rest));
            }
        }
    }

    impl Host for TestHost {
        fn rect(&self, id: ElementId) -> Option<Rect> {
            self.element(id).map(|e| e.rect)
        }

        fn query(&self, container: &Container, attribute: &str) -> Vec<ElementId> {
            let root = match container {
                Container::Document => None,
                Container::Selector(s) => match self.resolve(s) {
                    Some(id) => Some(id),
                    None => return Vec::new(),
                },
                Container::Handle(id) => Some(*id),
            };
            self.elements
                .iter()
                .filter(|e| e.attrs.contains_key(attribute))
                .filter(|e| match root {
                    None => true,
                    Some(root) => self.in_container(e, root),
                })
                .map(|e| e.id)
                .collect()
        }

        fn has_attribute(&self, id: ElementId, name: &str) -> bool {
            self.element(id)
                .map(|e| e.attrs.contains_key(name))
                .unwrap_or(false)
        }

        fn attribute(&self, id: ElementId, name: &str) -> Option<String> {
            self.element(id).and_then(|e| e.attrs.get(name).cloned())
        }

        fn is_hidden(&self, id: ElementId) -> bool {
            self.element(id).map(|e| e.hidden).unwrap_or(false)
        }

        fn resolve(&self, selector: &str) -> Option<ElementId> {
            self.elements
                .iter()
                .find(|e| e.selector == selector)
                .map(|e| e.id)
        }

        fn add_class(&mut self, id: ElementId, class: &str) {
            self.log_call("class+", id, class);
        }

        fn remove_class(&mut self, id: ElementId, class: &str) {
            self.log_call("class-", id, class);
        }

        fn focus(&mut self, id: ElementId) {
            self.log_call("focus", id, "");
        }

        fn blur(&mut self, id: ElementId) {
            self.log_call("blur", id, "");
        }

        fn activate(&mut self, id: ElementId) {
            self.log_call("activate", id, "");
        }

        fn structural_observer(&mut self) -> Option<Box<dyn ChangeObserver>> {
            self.structural
                .clone()
                .map(|q| Box::new(QueueObserver(q)) as Box<dyn ChangeObserver>)
        }

        fn event_observer(&mut self) -> Option<Box<dyn ChangeObserver>> {
            self.events
                .clone()
                .map(|q| Box::new(QueueObserver(q)) as Box<dyn ChangeObserver>)
        }
    }

    /// Attach a recording listener and return the shared record of phases.
    pub fn record_events(nav: &mut Navigator) -> Rc<RefCell<Vec<(FocusPhase, ElementId)>>> {
        let record = Rc::new(RefCell::new(Vec::new()));
        let sink = record.clone();
        nav.on_focus_event(move |e| sink.borrow_mut().push((e.phase, e.element)));
        record
    }
}
