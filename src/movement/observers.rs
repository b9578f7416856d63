//! Movement domain: synchronous change listeners registered on a controller.

use super::state::{Facing, LocomotionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    StateChanged(LocomotionState),
    DirectionChanged(Facing),
    GroundedChanged(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type StateCallback = Box<dyn FnMut(LocomotionState) + Send + Sync>;
type DirectionCallback = Box<dyn FnMut(Facing) + Send + Sync>;
type GroundedCallback = Box<dyn FnMut(bool) + Send + Sync>;

enum Listener {
    State(StateCallback),
    Direction(DirectionCallback),
    Grounded(GroundedCallback),
}

/// Registered listeners, called in subscription order.
#[derive(Default)]
pub struct Observers {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Observers {
    fn register(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub fn on_state_changed(
        &mut self,
        callback: impl FnMut(LocomotionState) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.register(Listener::State(Box::new(callback)))
    }

    pub fn on_direction_changed(
        &mut self,
        callback: impl FnMut(Facing) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.register(Listener::Direction(Box::new(callback)))
    }

    pub fn on_grounded_changed(
        &mut self,
        callback: impl FnMut(bool) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.register(Listener::Grounded(Box::new(callback)))
    }

    /// Returns `false` if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn notify(&mut self, notification: Notification) {
        for (_, listener) in &mut self.listeners {
            match (listener, notification) {
                (Listener::State(callback), Notification::StateChanged(state)) => callback(state),
                (Listener::Direction(callback), Notification::DirectionChanged(facing)) => {
                    callback(facing)
                }
                (Listener::Grounded(callback), Notification::GroundedChanged(grounded)) => {
                    callback(grounded)
                }
                _ => {}
            }
        }
    }
}
