use tracing::{debug, trace, warn};

use crate::{
    host::{ChangeKind, ChangeObserver, NodeKind, TreeChange},
    search::search,
    Command, Config, Direction, Element, ElementId, ElementRef, FocusEvent, FocusListener,
    FocusPhase, FocusState, Host, Options, Override, Overrides, Registry, Result,
};

/// The navigation engine. Owns the element registry, the focus state and the
/// configuration; all mutation goes through its operations. The engine is a
/// plain value with no global state, so callers may run several independent
/// instances.
///
/// The engine is single-threaded and event-driven: every command and every
/// change notification is processed synchronously to completion, in arrival
/// order.
pub struct Navigator {
    config: Config,
    configured: bool,
    can_move: bool,
    registry: Registry,
    state: FocusState,
    listeners: Vec<FocusListener>,
    observer: Option<Box<dyn ChangeObserver>>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Navigator {
            config: Config::default(),
            configured: false,
            can_move: true,
            registry: Registry::new(),
            state: FocusState::NoFocus,
            listeners: Vec::new(),
            observer: None,
        }
    }

    /// Overlay caller options onto the default configuration. May be called
    /// before or after `start`; an invalid overlay leaves the previous
    /// configuration in place.
    pub fn configure(&mut self, options: Options) -> Result<()> {
        self.config = Config::default().overlay(options)?;
        self.configured = true;
        Ok(())
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Register a listener for the four focus lifecycle notifications.
    /// Listeners are called synchronously, in registration order, for every
    /// phase of every transition.
    pub fn on_focus_event(&mut self, listener: impl FnMut(&FocusEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Start the engine: run the initial scan, apply the configured default
    /// focus if the scan didn't capture one, and attach a change observer
    /// when automatic synchronization is enabled. Without a prior
    /// `configure` call the defaults apply.
    pub fn start(&mut self, host: &mut dyn Host) {
        if !self.configured {
            self.config = Config::default();
        }
        self.refresh(host);
        if self.state.element().is_none() {
            if let Some(target) = self.config.default_focused_element.clone() {
                self.set_current(host, target);
            }
        }
        if self.config.watch_changes {
            // Prefer the structural observer, fall back to the discrete
            // per-node event style. With neither, synchronization is
            // unavailable and manual refreshes still work.
            self.observer = host
                .structural_observer()
                .or_else(|| host.event_observer());
            if let Some(o) = &mut self.observer {
                o.start();
            } else {
                debug!("no change observer available; registry sync disabled");
            }
        }
    }

    /// Move focus to the referenced element, firing the full transition
    /// protocol. The reference must resolve to a currently registered
    /// element; otherwise the transition is abandoned and state is
    /// unchanged.
    pub fn set_current(&mut self, host: &mut dyn Host, target: impl Into<ElementRef>) {
        let target = target.into();
        let Some(id) = self.resolve(host, &target) else {
            trace!("set_current: unresolvable reference {:?}", target);
            return;
        };
        if !self.registry.contains(id) {
            trace!("set_current: {} is not registered", id);
            return;
        }
        self.transition(host, id);
    }

    /// The currently focused element, if any.
    pub fn current(&self) -> Option<ElementId> {
        self.state.element()
    }

    /// The focus state.
    pub fn state(&self) -> FocusState {
        self.state
    }

    /// The identities of all registered elements, in registration order.
    pub fn known_elements(&self) -> Vec<ElementId> {
        self.registry.ids()
    }

    /// The element registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Full rescan: clear the registry and walk the configured container for
    /// navigable elements. Hidden elements are excluded; an element carrying
    /// the capture-focus attribute becomes the focused element as it is
    /// registered, so with several markers the last in document order wins.
    pub fn refresh(&mut self, host: &mut dyn Host) {
        self.registry.clear();
        let found = host.query(&self.config.container, &self.config.navigable_attribute);
        for id in found {
            self.register_element(host, id);
        }
        debug!("refresh: {} elements registered", self.registry.len());
        // A rescan that no longer finds the focused element must not leave
        // focus dangling on an unregistered id.
        if let Some(current) = self.state.element() {
            if !self.registry.contains(current) {
                self.state = FocusState::NoFocus;
                self.set_default_focus(host);
            }
        }
    }

    /// Full teardown: clear the registry and focus state, drop all
    /// listeners, detach the observer, and restore the default
    /// configuration.
    pub fn destroy(&mut self) {
        if let Some(mut o) = self.observer.take() {
            o.stop();
        }
        self.registry.clear();
        self.state = FocusState::NoFocus;
        self.listeners.clear();
        self.config = Config::default();
        self.configured = false;
        self.can_move = true;
    }

    /// Process one input event. When navigation is suspended the event is
    /// ignored entirely; otherwise dynamic positions are recalculated, an
    /// unfocused engine takes the default-focus path, and a mapped command
    /// is dispatched. Unmapped codes are ignored.
    pub fn handle_key(&mut self, host: &mut dyn Host, code: u32) {
        if !self.preflight(host) {
            return;
        }
        let Some(cmd) = self.config.keymap.get(&code).copied() else {
            trace!("unmapped input code {}", code);
            return;
        };
        self.dispatch(host, cmd);
    }

    /// Programmatic equivalent of an up key command.
    pub fn move_up(&mut self, host: &mut dyn Host) {
        self.command(host, Command::Move(Direction::Up));
    }

    /// Programmatic equivalent of a down key command.
    pub fn move_down(&mut self, host: &mut dyn Host) {
        self.command(host, Command::Move(Direction::Down));
    }

    /// Programmatic equivalent of a left key command.
    pub fn move_left(&mut self, host: &mut dyn Host) {
        self.command(host, Command::Move(Direction::Left));
    }

    /// Programmatic equivalent of a right key command.
    pub fn move_right(&mut self, host: &mut dyn Host) {
        self.command(host, Command::Move(Direction::Right));
    }

    /// Programmatic equivalent of the activation key command.
    pub fn move_enter(&mut self, host: &mut dyn Host) {
        self.command(host, Command::Enter);
    }

    /// Suspend or resume all navigation processing. The registry and focus
    /// state are kept intact while suspended.
    pub fn set_can_move(&mut self, can_move: bool) {
        self.can_move = can_move;
    }

    /// Is navigation processing active?
    pub fn can_move(&self) -> bool {
        self.can_move
    }

    /// Apply all pending change notifications from the attached observer, in
    /// arrival order. No-op when no observer is attached.
    pub fn pump(&mut self, host: &mut dyn Host) {
        let changes = match &mut self.observer {
            Some(o) => o.drain(),
            None => return,
        };
        for change in changes {
            self.apply_change(host, change);
        }
    }

    fn command(&mut self, host: &mut dyn Host, cmd: Command) {
        if !self.preflight(host) {
            return;
        }
        self.dispatch(host, cmd);
    }

    /// The shared front half of every command: the suspend gate, the dynamic
    /// position recalculation, and the default-focus path when nothing is
    /// focused. Returns true if the command itself should proceed.
    fn preflight(&mut self, host: &mut dyn Host) -> bool {
        if !self.can_move {
            return false;
        }
        self.registry.recalculate_dynamic(|id| host.rect(id));
        if self.state.element().is_none() {
            self.set_default_focus(host);
            return false;
        }
        true
    }

    fn dispatch(&mut self, host: &mut dyn Host, cmd: Command) {
        let Some(current) = self.state.element() else {
            return;
        };
        match cmd {
            Command::Move(direction) => {
                let Some(entry) = self.registry.get(current) else {
                    return;
                };
                let position = entry.anchors;
                match entry.overrides.get(direction).cloned() {
                    Some(Override::Skip) => {
                        trace!("movement {} suppressed by override", direction);
                    }
                    Some(Override::Target(selector)) => {
                        self.set_current(host, ElementRef::Selector(selector));
                    }
                    None => {
                        if let Some(next) = search(&self.registry, current, &position, direction) {
                            self.transition(host, next);
                        } else {
                            trace!("no candidate {} of {}", direction, current);
                        }
                    }
                }
            }
            Command::Enter => host.activate(current),
        }
    }

    /// The default-focus rule: the configured default if it resolves to a
    /// registered element, else the first registered element, else stay
    /// unfocused.
    fn set_default_focus(&mut self, host: &mut dyn Host) {
        if let Some(target) = self.config.default_focused_element.clone() {
            if let Some(id) = self.resolve(host, &target) {
                if self.registry.contains(id) {
                    self.transition(host, id);
                    return;
                }
            }
        }
        if let Some(first) = self.registry.first() {
            let id = first.id;
            self.transition(host, id);
        }
    }

    /// The transition protocol. Fires losing-focus / focus-lost on the old
    /// element (clearing its marker and input focus in between), then
    /// gaining-focus / focus-gained on the new one. All four notifications
    /// fire even when the new element is the old one.
    fn transition(&mut self, host: &mut dyn Host, to: ElementId) {
        if let FocusState::FocusedOn(from) = self.state {
            self.emit(FocusPhase::LosingFocus, from);
            host.remove_class(from, &self.config.focused_class);
            host.blur(from);
            self.emit(FocusPhase::FocusLost, from);
        }
        self.emit(FocusPhase::GainingFocus, to);
        host.add_class(to, &self.config.focused_class);
        host.focus(to);
        self.emit(FocusPhase::FocusGained, to);
        self.state = FocusState::FocusedOn(to);
    }

    fn emit(&mut self, phase: FocusPhase, element: ElementId) {
        let event = FocusEvent { phase, element };
        for l in &mut self.listeners {
            l(&event);
        }
    }

    fn resolve(&self, host: &dyn Host, r: &ElementRef) -> Option<ElementId> {
        match r {
            ElementRef::Handle(id) => Some(*id),
            ElementRef::Selector(s) => host.resolve(s),
        }
    }

    /// Per-element registration, shared by the full scan and incremental
    /// adds. Hidden elements and elements without layout are excluded. A
    /// malformed override attribute is absorbed: the element registers with
    /// no overrides. The capture-focus attribute transitions focus to the
    /// element as soon as it is registered.
    fn register_element(&mut self, host: &mut dyn Host, id: ElementId) {
        if host.is_hidden(id) {
            trace!("skipping hidden element {}", id);
            return;
        }
        let Some(rect) = host.rect(id) else {
            trace!("skipping element {} without layout", id);
            return;
        };
        let overrides = match host.attribute(id, &self.config.override_attribute) {
            Some(attr) => match Overrides::parse(&attr) {
                Ok(o) => o,
                Err(e) => {
                    warn!("ignoring overrides on {}: {}", id, e);
                    Overrides::default()
                }
            },
            None => Overrides::default(),
        };
        let dynamic = host.has_attribute(id, &self.config.dynamic_position_attribute);
        self.registry
            .register(Element::new(id, rect, overrides, dynamic));
        if host.has_attribute(id, &self.config.capture_focus_attribute) {
            self.transition(host, id);
        }
    }

    fn apply_change(&mut self, host: &mut dyn Host, change: TreeChange) {
        if change.node_kind != NodeKind::Element {
            return;
        }
        match change.kind {
            ChangeKind::Added => {
                if host.has_attribute(change.node, &self.config.navigable_attribute) {
                    debug!("sync: registering added element {}", change.node);
                    self.register_element(host, change.node);
                }
            }
            ChangeKind::Removed => {
                // Unregister is a no-op for identities we never knew about,
                // which also covers removed nodes whose attributes can no
                // longer be queried.
                self.registry.unregister(change.node);
                if self.state.element() == Some(change.node) {
                    debug!("sync: focused element {} removed", change.node);
                    // The element is detached, so no lifecycle notifications
                    // fire for it; focus falls back immediately.
                    self.state = FocusState::NoFocus;
                    self.set_default_focus(host);
                }
            }
        }
    }
}
