//! State Machine Runtime
//!
//! Flat state machines for widget interaction states. States and events are
//! plain integers so widgets can declare them as constants next to their
//! logic. Guards live in the widget: it decides whether to `send` at all.

use rustc_hash::FxHashMap;
use std::collections::VecDeque;

/// Identifier for a state within a state machine
pub type StateId = u32;

/// Identifier for an event type
pub type EventId = u32;

/// Number of transitions kept for debugging
const HISTORY_LIMIT: usize = 32;

/// A transition in the state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from_state: StateId,
    pub event: EventId,
    pub to_state: StateId,
}

impl Transition {
    pub fn new(from: StateId, event: EventId, to: StateId) -> Self {
        Self {
            from_state: from,
            event,
            to_state: to,
        }
    }
}

/// Builder for creating state machines
pub struct StateMachineBuilder {
    initial_state: StateId,
    transitions: Vec<Transition>,
}

impl StateMachineBuilder {
    pub fn new(initial_state: StateId) -> Self {
        Self {
            initial_state,
            transitions: Vec::new(),
        }
    }

    /// Add a simple transition (from, event, to)
    pub fn on(mut self, from: StateId, event: EventId, to: StateId) -> Self {
        self.transitions.push(Transition::new(from, event, to));
        self
    }

    /// Build the state machine. A later transition for the same
    /// (state, event) pair replaces an earlier one.
    pub fn build(self) -> StateMachine {
        StateMachine::new(self.initial_state, self.transitions)
    }
}

/// A state machine instance
#[derive(Clone, Debug)]
pub struct StateMachine {
    initial_state: StateId,
    current_state: StateId,
    transitions: FxHashMap<(StateId, EventId), StateId>,
    /// Most recent transitions (for debugging)
    history: VecDeque<(StateId, EventId, StateId)>,
}

impl StateMachine {
    /// Create a new state machine with an initial state and transitions
    pub fn new(initial_state: StateId, transitions: Vec<Transition>) -> Self {
        Self {
            initial_state,
            current_state: initial_state,
            transitions: transitions
                .into_iter()
                .map(|t| ((t.from_state, t.event), t.to_state))
                .collect(),
            history: VecDeque::new(),
        }
    }

    /// Create a builder for a state machine
    pub fn builder(initial_state: StateId) -> StateMachineBuilder {
        StateMachineBuilder::new(initial_state)
    }

    pub fn current_state(&self) -> StateId {
        self.current_state
    }

    pub fn is_in(&self, state: StateId) -> bool {
        self.current_state == state
    }

    /// Recent transitions, oldest first
    pub fn history(&self) -> impl Iterator<Item = &(StateId, EventId, StateId)> {
        self.history.iter()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Check if an event can trigger a transition from current state
    pub fn can_send(&self, event: EventId) -> bool {
        self.transitions
            .contains_key(&(self.current_state, event))
    }

    /// Send an event, returning the (possibly unchanged) current state
    pub fn send(&mut self, event: EventId) -> StateId {
        let current = self.current_state;
        let Some(&to_state) = self.transitions.get(&(current, event)) else {
            return current;
        };

        tracing::trace!(from = current, event, to = to_state, "fsm transition");
        self.current_state = to_state;

        if self.history.len() == HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back((current, event, to_state));

        to_state
    }

    /// Return to the initial state without recording a transition
    pub fn reset(&mut self) {
        self.current_state = self.initial_state;
    }
}
