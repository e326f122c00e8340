//! # Finite State Machine
//!
//! A small state machine for game objects. Each state may register `enter`,
//! `update` and `exit` handlers that receive a caller-supplied context. An
//! `update` handler requests a transition by returning the next state.
//!
//! ## Example
//!
//! ```
//! use voxel_world::game::fsm::{FiniteStateMachine, StateHandlers};
//!
//! #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
//! enum Mood { Idle, Alert }
//!
//! struct Npc { player_distance: f32, animation: &'static str }
//!
//! let mut fsm = FiniteStateMachine::new(Mood::Idle)
//!     .with_state(
//!         Mood::Idle,
//!         StateHandlers::new()
//!             .on_enter(|npc: &mut Npc| npc.animation = "Idle")
//!             .on_update(|npc: &mut Npc| (npc.player_distance < 2.0).then_some(Mood::Alert)),
//!     )
//!     .with_state(
//!         Mood::Alert,
//!         StateHandlers::new().on_enter(|npc: &mut Npc| npc.animation = "Jump"),
//!     );
//!
//! let mut npc = Npc { player_distance: 10.0, animation: "" };
//! fsm.start(&mut npc);
//! npc.player_distance = 1.0;
//! fsm.update(&mut npc);
//! assert_eq!(fsm.state(), Mood::Alert);
//! assert_eq!(npc.animation, "Jump");
//! ```

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use log::debug;

type ContextFn<C> = Box<dyn FnMut(&mut C)>;
type UpdateFn<S, C> = Box<dyn FnMut(&mut C) -> Option<S>>;

/// The handlers attached to one state. All of them are optional.
pub struct StateHandlers<S, C> {
    enter: Option<ContextFn<C>>,
    update: Option<UpdateFn<S, C>>,
    exit: Option<ContextFn<C>>,
}

impl<S, C> Default for StateHandlers<S, C> {
    fn default() -> Self {
        StateHandlers {
            enter: None,
            update: None,
            exit: None,
        }
    }
}

impl<S, C> StateHandlers<S, C> {
    /// A state with no handlers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs when the machine enters this state.
    pub fn on_enter(mut self, handler: impl FnMut(&mut C) + 'static) -> Self {
        self.enter = Some(Box::new(handler));
        self
    }

    /// Runs on every update while in this state. Returning `Some(next)` transitions to `next`.
    pub fn on_update(mut self, handler: impl FnMut(&mut C) -> Option<S> + 'static) -> Self {
        self.update = Some(Box::new(handler));
        self
    }

    /// Runs when the machine leaves this state.
    pub fn on_exit(mut self, handler: impl FnMut(&mut C) + 'static) -> Self {
        self.exit = Some(Box::new(handler));
        self
    }
}

/// A finite state machine keyed by `S` and driving a context `C`.
pub struct FiniteStateMachine<S, C> {
    states: HashMap<S, StateHandlers<S, C>>,
    current: S,
    started: bool,
}

impl<S, C> FiniteStateMachine<S, C>
where
    S: Copy + Eq + Hash + Debug,
{
    /// Creates a machine that will start in `initial`.
    ///
    /// The initial state's `enter` handler runs on [`start`](Self::start) or on
    /// the first [`update`](Self::update), whichever comes first.
    pub fn new(initial: S) -> Self {
        FiniteStateMachine {
            states: HashMap::new(),
            current: initial,
            started: false,
        }
    }

    /// Registers the handlers of `state`, replacing any previous ones.
    pub fn with_state(mut self, state: S, handlers: StateHandlers<S, C>) -> Self {
        self.states.insert(state, handlers);
        self
    }

    /// The current state.
    pub fn state(&self) -> S {
        self.current
    }

    /// Returns `true` once the initial state has been entered.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Enters the initial state. Does nothing if the machine is already running.
    pub fn start(&mut self, context: &mut C) {
        if self.started {
            return;
        }
        self.started = true;
        self.run_enter(context);
    }

    /// Leaves the current state and enters `next`.
    ///
    /// Transitioning to the current state runs its `exit` and `enter` handlers again.
    pub fn transition(&mut self, next: S, context: &mut C) {
        if self.started {
            if let Some(exit) = self
                .states
                .get_mut(&self.current)
                .and_then(|handlers| handlers.exit.as_mut())
            {
                exit(context);
            }
        }

        debug!("State transition {:?} -> {:?}", self.current, next);
        self.current = next;
        self.started = true;
        self.run_enter(context);
    }

    /// Runs the current state's `update` handler and follows the transition it requests.
    pub fn update(&mut self, context: &mut C) {
        self.start(context);

        let next = self
            .states
            .get_mut(&self.current)
            .and_then(|handlers| handlers.update.as_mut())
            .and_then(|update| update(context));

        if let Some(next) = next {
            self.transition(next, context);
        }
    }

    fn run_enter(&mut self, context: &mut C) {
        if let Some(enter) = self
            .states
            .get_mut(&self.current)
            .and_then(|handlers| handlers.enter.as_mut())
        {
            enter(context);
        }
    }
}
