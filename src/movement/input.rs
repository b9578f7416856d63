//! Movement domain: per-tick input samples and the buffer between the
//! frame-rate input reader and the fixed-rate controller.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSample {
    pub horizontal: f32,
    pub vertical: f32,
    pub jump_pressed: bool,
    pub jump_released: bool,
    pub dash_pressed: bool,
}

impl InputSample {
    pub fn new(
        horizontal: f32,
        vertical: f32,
        jump_pressed: bool,
        jump_released: bool,
        dash_pressed: bool,
    ) -> Self {
        Self {
            horizontal: horizontal.clamp(-1.0, 1.0),
            vertical: vertical.clamp(-1.0, 1.0),
            jump_pressed,
            jump_released,
            dash_pressed,
        }
    }

    pub fn axis(&self) -> Vec2 {
        Vec2::new(self.horizontal, self.vertical)
    }

    /// Fold a newer sample into this one. Edges accumulate, axes take the
    /// latest value.
    pub fn merge(&mut self, newer: InputSample) {
        self.horizontal = newer.horizontal;
        self.vertical = newer.vertical;
        self.jump_pressed |= newer.jump_pressed;
        self.jump_released |= newer.jump_released;
        self.dash_pressed |= newer.dash_pressed;
    }

    pub fn has_edges(&self) -> bool {
        self.jump_pressed || self.jump_released || self.dash_pressed
    }
}

/// Input gathered every frame and drained once per fixed tick.
#[derive(Component, Debug, Default)]
pub struct InputBuffer {
    pending: InputSample,
}

impl InputBuffer {
    pub fn push(&mut self, sample: InputSample) {
        self.pending.merge(sample);
    }

    /// Hand the pending sample to the tick and clear its edges. Axes are kept
    /// so a tick with no fresh frame still sees the held direction.
    pub fn take(&mut self) -> InputSample {
        let sample = self.pending;
        self.pending.jump_pressed = false;
        self.pending.jump_released = false;
        self.pending.dash_pressed = false;
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_accumulate_between_ticks() {
        let mut buffer = InputBuffer::default();
        buffer.push(InputSample::new(1.0, 0.0, true, false, false));
        buffer.push(InputSample::new(-1.0, 0.5, false, true, false));

        let sample = buffer.take();
        assert_eq!(sample.horizontal, -1.0);
        assert_eq!(sample.vertical, 0.5);
        assert!(sample.jump_pressed);
        assert!(sample.jump_released);
        assert!(!sample.dash_pressed);

        let next = buffer.take();
        assert!(!next.has_edges());
        assert_eq!(next.horizontal, -1.0);
    }

    #[test]
    fn test_axes_are_clamped() {
        let sample = InputSample::new(3.0, -2.0, false, false, false);
        assert_eq!(sample.axis(), Vec2::new(1.0, -1.0));
    }
}
