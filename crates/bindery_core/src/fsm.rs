//! State machines for widget interaction states
//!
//! A flat machine of numbered states driven by [`EventType`]s, with guarded
//! transitions and entry actions. Builders use it for popover menus
//! (closed / open) where a click and a menu close must agree on the state.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::events::EventType;

/// Identifier for a state within a state machine
pub type StateId = u32;

/// A guard function that determines if a transition should occur
pub type Guard = Box<dyn Fn() -> bool + Send>;

/// An action executed when a state is entered
pub type Action = Box<dyn FnMut() + Send>;

/// A transition in the state machine
pub struct Transition {
    pub from_state: StateId,
    pub event: EventType,
    pub to_state: StateId,
    pub guard: Option<Guard>,
}

impl Transition {
    pub fn new(from: StateId, event: EventType, to: StateId) -> Self {
        Self {
            from_state: from,
            event,
            to_state: to,
            guard: None,
        }
    }

    /// Only take this transition while `guard` holds
    pub fn with_guard<F: Fn() -> bool + Send + 'static>(mut self, guard: F) -> Self {
        self.guard = Some(Box::new(guard));
        self
    }

    fn allows(&self, from: StateId, event: EventType) -> bool {
        self.from_state == from && self.event == event && self.guard.as_ref().map_or(true, |g| g())
    }
}

/// A state machine instance
pub struct StateMachine {
    current_state: StateId,
    transitions: Vec<Transition>,
    entry_actions: FxHashMap<StateId, SmallVec<[Action; 1]>>,
    history: Vec<(StateId, EventType, StateId)>,
    history_limit: Option<usize>,
}

impl StateMachine {
    pub fn new(initial_state: StateId) -> Self {
        Self {
            current_state: initial_state,
            transitions: Vec::new(),
            entry_actions: FxHashMap::default(),
            history: Vec::new(),
            history_limit: None,
        }
    }

    /// Keep only the last `limit` transitions; 0 disables the history
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Add a transition
    pub fn transition(mut self, transition: Transition) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add a simple transition (from, event, to)
    pub fn on(self, from: StateId, event: EventType, to: StateId) -> Self {
        self.transition(Transition::new(from, event, to))
    }

    /// Run `action` every time `state` is entered
    pub fn on_enter<F: FnMut() + Send + 'static>(mut self, state: StateId, action: F) -> Self {
        self.entry_actions
            .entry(state)
            .or_default()
            .push(Box::new(action));
        self
    }

    pub fn current_state(&self) -> StateId {
        self.current_state
    }

    pub fn is_in(&self, state: StateId) -> bool {
        self.current_state == state
    }

    /// Transitions taken so far
    pub fn history(&self) -> &[(StateId, EventType, StateId)] {
        &self.history
    }

    /// Clear transition history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Check if an event can trigger a transition from the current state
    pub fn can_send(&self, event: EventType) -> bool {
        self.transitions
            .iter()
            .any(|t| t.allows(self.current_state, event))
    }

    /// Send an event, returning the (possibly unchanged) current state
    pub fn send(&mut self, event: EventType) -> StateId {
        let from = self.current_state;
        let Some(to) = self
            .transitions
            .iter()
            .find(|t| t.allows(from, event))
            .map(|t| t.to_state)
        else {
            return from;
        };

        self.current_state = to;
        self.record(from, event, to);
        tracing::trace!(from, to, event, "state transition");

        if let Some(actions) = self.entry_actions.get_mut(&to) {
            for action in actions.iter_mut() {
                action();
            }
        }
        to
    }

    fn record(&mut self, from: StateId, event: EventType, to: StateId) {
        match self.history_limit {
            Some(0) => {}
            Some(limit) => {
                if self.history.len() >= limit {
                    let excess = self.history.len() + 1 - limit;
                    self.history.drain(..excess);
                }
                self.history.push((from, event, to));
            }
            None => self.history.push((from, event, to)),
        }
    }
}
