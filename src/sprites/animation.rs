//! Locomotion-driven animation clip selection.
//!
//! Listens for locomotion state changes and picks the clip to play. Frame
//! playback is left to whatever renders the clip.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{LocomotionState, LocomotionStateChanged};

/// Named clips, one per locomotion state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LocomotionClip {
    #[default]
    Idle,
    Running,
    Jumping,
    Falling,
    Dashing,
}

impl LocomotionClip {
    pub fn name(self) -> &'static str {
        match self {
            LocomotionClip::Idle => "Idle",
            LocomotionClip::Running => "Running",
            LocomotionClip::Jumping => "Jumping",
            LocomotionClip::Falling => "Falling",
            LocomotionClip::Dashing => "Dashing",
        }
    }
}

impl From<LocomotionState> for LocomotionClip {
    // No wildcard arm: a new state must pick its clip here.
    fn from(state: LocomotionState) -> Self {
        match state {
            LocomotionState::Idle => LocomotionClip::Idle,
            LocomotionState::Running => LocomotionClip::Running,
            LocomotionState::AirRaising => LocomotionClip::Jumping,
            LocomotionState::AirFalling => LocomotionClip::Falling,
            LocomotionState::Dashing => LocomotionClip::Dashing,
        }
    }
}

/// Component for clip selection on a locomotion-driven sprite.
#[derive(Component, Debug, Default)]
pub struct LocomotionAnimator {
    /// Clip currently playing.
    pub clip: LocomotionClip,
    /// Number of clip switches, for debugging.
    pub switches: u32,
}

impl LocomotionAnimator {
    /// Switch clips. Returns `false` if the clip was already playing.
    pub fn play(&mut self, clip: LocomotionClip) -> bool {
        if self.clip == clip {
            return false;
        }
        self.clip = clip;
        self.switches += 1;
        true
    }
}

/// System that switches clips on locomotion state changes.
pub fn apply_locomotion_clips(
    mut changes: MessageReader<LocomotionStateChanged>,
    mut query: Query<&mut LocomotionAnimator>,
) {
    for change in changes.read() {
        let Ok(mut animator) = query.get_mut(change.entity) else {
            continue;
        };
        let clip = LocomotionClip::from(change.state);
        if animator.play(clip) {
            debug!("Animation: {:?} -> clip {}", change.entity, clip.name());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_states_map_to_clips() {
        assert_eq!(
            LocomotionClip::from(LocomotionState::AirRaising).name(),
            "Jumping"
        );
        assert_eq!(
            LocomotionClip::from(LocomotionState::AirFalling).name(),
            "Falling"
        );
        assert_eq!(LocomotionClip::from(LocomotionState::Idle).name(), "Idle");
    }

    #[test]
    fn test_replaying_current_clip_is_skipped() {
        let mut animator = LocomotionAnimator::default();
        assert!(!animator.play(LocomotionClip::Idle));
        assert!(animator.play(LocomotionClip::Running));
        assert!(!animator.play(LocomotionClip::Running));
        assert_eq!(animator.switches, 1);
    }
}
