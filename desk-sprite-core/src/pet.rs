//! Pet domain types.
//!
//! This module provides the `Pet` struct together with the `PetState`
//! enumeration, the 2D `Point` type used for screen coordinates, and the
//! `PetView` snapshot handed to the presentation layer every frame.

use serde::{Deserialize, Serialize};

/// A 2D screen coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position in screen units.
    pub x: f64,
    /// Vertical position in screen units.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: Point) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }

    /// Move toward `target` by at most `max_delta`, never overshooting.
    ///
    /// Returns `target` itself once the remaining distance is within
    /// `max_delta`.
    pub fn move_toward(&self, target: Point, max_delta: f64) -> Point {
        let dist = self.distance(target);
        if dist <= max_delta || dist == 0.0 {
            return target;
        }
        let t = max_delta / dist;
        Point::new(self.x + (target.x - self.x) * t, self.y + (target.y - self.y) * t)
    }

    /// Linear interpolation toward `target` with `t` clamped to `[0, 1]`.
    pub fn lerp(&self, target: Point, t: f64) -> Point {
        let t = t.clamp(0.0, 1.0);
        Point::new(self.x + (target.x - self.x) * t, self.y + (target.y - self.y) * t)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// The behavioral states of the pet. Exactly one is active at any instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PetState {
    /// Stationary, waiting for a timer or event to decide the next action.
    Idle,
    /// Walking toward `target` at constant speed.
    Moving,
    /// Perched on a desktop icon. Reserved: no transition currently enters it.
    OnIcon,
    /// Showing the speech bubble.
    Talking,
    /// Pinned to the pointer; position is driven externally by drag moves.
    Dragging,
    /// Continuously tracking the pointer with smoothed interpolation.
    Following,
    /// Asleep. Reserved: no transition currently enters it.
    Sleeping,
}

impl std::fmt::Display for PetState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PetState::Idle => "idle",
            PetState::Moving => "moving",
            PetState::OnIcon => "on-icon",
            PetState::Talking => "talking",
            PetState::Dragging => "dragging",
            PetState::Following => "following",
            PetState::Sleeping => "sleeping",
        };
        write!(f, "{}", name)
    }
}

/// The transient speech line shown while the pet is talking.
#[derive(Debug, Clone, Default)]
pub struct Speech {
    /// Whether the bubble is currently shown.
    pub visible: bool,
    /// The line of text in the bubble.
    pub text: String,
}

/// The pet itself: position, active state, and per-state bookkeeping.
///
/// Created once at startup, mutated every frame and on every interaction
/// event. There is no persistence across sessions.
#[derive(Debug, Clone)]
pub struct Pet {
    /// Current on-screen position.
    pub position: Point,
    /// The active behavioral state.
    pub state: PetState,
    /// Destination; meaningful only while Moving or Following.
    pub target: Point,
    /// Seconds spent in the current state. Reset on every real transition.
    pub state_timer: f64,
    /// Threshold for the time-based exit from Idle and Talking.
    pub next_behavior_duration: f64,
    /// The speech bubble contents.
    pub speech: Speech,
}

impl Pet {
    /// Create a pet at the given position, starting out Idle.
    pub fn new(position: Point) -> Self {
        Self {
            position,
            state: PetState::Idle,
            target: position,
            state_timer: 0.0,
            next_behavior_duration: 0.0,
            speech: Speech::default(),
        }
    }

    /// Snapshot the fields the presentation layer renders.
    pub fn view(&self) -> PetView {
        PetView {
            position: self.position,
            state: self.state,
            speech_visible: self.speech.visible,
            speech_text: self.speech.text.clone(),
        }
    }
}

/// Per-frame snapshot emitted to the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct PetView {
    /// Current position, for placement.
    pub position: Point,
    /// Current state, for animation selection.
    pub state: PetState,
    /// Whether the speech bubble should be drawn.
    pub speech_visible: bool,
    /// The speech bubble text.
    pub speech_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < f64::EPSILON);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn test_move_toward_advances() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        let step = a.move_toward(b, 4.0);
        assert!((step.x - 4.0).abs() < 1e-9);
        assert_eq!(step.y, 0.0);
    }

    #[test]
    fn test_move_toward_never_overshoots() {
        let a = Point::new(9.5, 0.0);
        let b = Point::new(10.0, 0.0);
        let step = a.move_toward(b, 4.0);
        assert_eq!(step, b);

        // Zero distance stays put.
        assert_eq!(b.move_toward(b, 4.0), b);
    }

    #[test]
    fn test_lerp_clamps() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 20.0);
        let half = a.lerp(b, 0.5);
        assert!((half.x - 5.0).abs() < 1e-9);
        assert!((half.y - 10.0).abs() < 1e-9);

        // Factors beyond 1 clamp at the target instead of overshooting.
        assert_eq!(a.lerp(b, 3.0), b);
        assert_eq!(a.lerp(b, -1.0), a);
    }

    #[test]
    fn test_pet_new_starts_idle() {
        let pet = Pet::new(Point::new(100.0, 50.0));
        assert_eq!(pet.state, PetState::Idle);
        assert_eq!(pet.position, Point::new(100.0, 50.0));
        assert_eq!(pet.target, pet.position);
        assert_eq!(pet.state_timer, 0.0);
        assert!(!pet.speech.visible);
    }

    #[test]
    fn test_pet_view_snapshot() {
        let mut pet = Pet::new(Point::new(1.0, 2.0));
        pet.speech.visible = true;
        pet.speech.text = "hello".to_string();

        let view = pet.view();
        assert_eq!(view.position, Point::new(1.0, 2.0));
        assert_eq!(view.state, PetState::Idle);
        assert!(view.speech_visible);
        assert_eq!(view.speech_text, "hello");
    }

    #[test]
    fn test_state_display() {
        assert_eq!(PetState::Idle.to_string(), "idle");
        assert_eq!(PetState::Following.to_string(), "following");
        assert_eq!(PetState::OnIcon.to_string(), "on-icon");
    }
}
