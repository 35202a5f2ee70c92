// src/animation/tween.rs
//
// Retargetable position tween. A scroll event that arrives while a
// tween is in flight rebases it from the current sampled position and
// replaces the target. Last write wins, nothing is queued.

use nannou::prelude::*;

#[derive(Debug, Clone, Copy)]
pub enum EasingType {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl EasingType {
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            EasingType::Linear => t,
            EasingType::EaseIn => ease_in(t),
            EasingType::EaseOut => ease_out(t),
            EasingType::EaseInOut => ease_in_out(t),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PositionTween {
    from: Point2,
    to: Point2,
    start_time: f32,
    duration: f32,
    easing: EasingType,
}

impl PositionTween {
    /// A tween already settled at `position`.
    pub fn settled(position: Point2) -> Self {
        Self {
            from: position,
            to: position,
            start_time: 0.0,
            duration: 0.0,
            easing: EasingType::EaseOut,
        }
    }

    /// Replace the target, rebasing from wherever the tween currently is.
    pub fn retarget(&mut self, target: Point2, duration: f32, easing: EasingType, now: f32) {
        self.from = self.sample(now);
        self.to = target;
        self.start_time = now;
        self.duration = duration;
        self.easing = easing;
    }

    /// Interpolated position at time `now`.
    pub fn sample(&self, now: f32) -> Point2 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = ((now - self.start_time) / self.duration).clamp(0.0, 1.0);
        let eased = self.easing.apply(t);
        self.from + (self.to - self.from) * eased
    }

    pub fn target(&self) -> Point2 {
        self.to
    }

    pub fn is_complete(&self, now: f32) -> bool {
        now - self.start_time >= self.duration
    }
}

fn ease_in(t: f32) -> f32 {
    t * t
}

fn ease_out(t: f32) -> f32 {
    t * (2.0 - t)
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}
