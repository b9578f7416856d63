//! Movement domain: locomotion state and facing derivation.

use bevy::prelude::*;

use super::state::{Facing, LocomotionState};

/// Highest priority first: dash, airborne, running, idle.
pub fn classify_state(dash_velocity: Vec2, grounded: bool, velocity: Vec2) -> LocomotionState {
    if dash_velocity != Vec2::ZERO {
        LocomotionState::Dashing
    } else if !grounded {
        if velocity.y > 0.0 {
            LocomotionState::AirRaising
        } else {
            LocomotionState::AirFalling
        }
    } else if velocity.length() > 0.0 {
        LocomotionState::Running
    } else {
        LocomotionState::Idle
    }
}

/// Facing follows the sign of the horizontal input; a neutral stick keeps it.
pub fn resolve_facing(current: Facing, horizontal_input: f32) -> Facing {
    if horizontal_input > 0.0 {
        Facing::Right
    } else if horizontal_input < 0.0 {
        Facing::Left
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        let dash = Vec2::new(35.0, 0.0);
        assert_eq!(
            classify_state(dash, false, Vec2::new(0.0, 5.0)),
            LocomotionState::Dashing
        );
        assert_eq!(
            classify_state(Vec2::ZERO, false, Vec2::new(3.0, 5.0)),
            LocomotionState::AirRaising
        );
        assert_eq!(
            classify_state(Vec2::ZERO, false, Vec2::new(0.0, -5.0)),
            LocomotionState::AirFalling
        );
        assert_eq!(
            classify_state(Vec2::ZERO, false, Vec2::ZERO),
            LocomotionState::AirFalling
        );
        assert_eq!(
            classify_state(Vec2::ZERO, true, Vec2::new(-2.0, 0.0)),
            LocomotionState::Running
        );
        assert_eq!(
            classify_state(Vec2::ZERO, true, Vec2::ZERO),
            LocomotionState::Idle
        );
    }

    #[test]
    fn test_facing_holds_on_neutral_input() {
        assert_eq!(resolve_facing(Facing::Left, 0.0), Facing::Left);
        assert_eq!(resolve_facing(Facing::Left, 0.2), Facing::Right);
        assert_eq!(resolve_facing(Facing::Right, -1.0), Facing::Left);
    }
}
