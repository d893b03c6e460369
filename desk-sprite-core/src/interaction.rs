//! Interaction event source.
//!
//! Translates raw pointer activity into the discrete [`InteractionEvent`]s
//! the behavior engine consumes, and tracks the pointer location while a
//! drag is in progress. No state machine logic lives here: every input is
//! forwarded unconditionally, and filtering by state is the engine's job.

use crate::event::{InputMessage, InputSender, InteractionEvent};
use crate::pet::Point;
use tracing::debug;

/// The input surface of the pet.
///
/// Clones of the underlying sender are cheap, so a host can hand separate
/// sources to, say, the pet sprite's click handler and the desktop
/// background's guide handler.
#[derive(Debug, Clone)]
pub struct InteractionSource {
    input: InputSender,
    pointer: Point,
}

impl InteractionSource {
    /// Create a source feeding the given engine input sender.
    pub fn new(input: InputSender) -> Self {
        Self {
            input,
            pointer: Point::new(0.0, 0.0),
        }
    }

    /// The pet was clicked with the primary button.
    pub fn on_primary_click(&self) {
        self.send(InputMessage::Interaction(InteractionEvent::LeftClicked));
    }

    /// The pet was clicked with the secondary button.
    pub fn on_secondary_click(&self) {
        self.send(InputMessage::Interaction(InteractionEvent::RightClicked));
    }

    /// A drag of the pet started.
    pub fn on_drag_start(&self) {
        self.send(InputMessage::Interaction(InteractionEvent::BeginDrag));
    }

    /// The pointer moved mid-drag.
    ///
    /// Besides updating the tracked pointer, this pins the pet's displayed
    /// position to `point` directly, outside the state machine.
    pub fn on_drag_move(&mut self, point: Point) {
        self.pointer = point;
        self.send(InputMessage::DragMoved(point));
    }

    /// The drag ended.
    pub fn on_drag_end(&self) {
        self.send(InputMessage::Interaction(InteractionEvent::EndDrag));
    }

    /// The pointer moved outside of a drag.
    ///
    /// Keeps the engine's pointer snapshot current so the Following state
    /// has something to track.
    pub fn on_pointer_move(&mut self, point: Point) {
        self.pointer = point;
        self.send(InputMessage::PointerMoved(point));
    }

    /// Ask the pet to walk to `point`.
    ///
    /// Usable by any external caller, e.g. a click on the desktop
    /// background summoning the pet.
    pub fn request_guide(&self, point: Point) {
        self.send(InputMessage::Interaction(InteractionEvent::GuideRequest(
            point,
        )));
    }

    /// The last pointer position this source saw.
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    fn send(&self, message: InputMessage) {
        // The engine going away mid-shutdown is not an input error.
        if let Err(e) = self.input.try_send(message) {
            debug!(error = %e, "dropping interaction input");
        }
    }
}
