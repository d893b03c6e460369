//! Event types and channels for the pet behavior engine.
//!
//! Two channel-based flows meet in the engine: interaction input (pointer
//! clicks, drags, and guide requests translated into discrete events) goes
//! in, and engine events (state changes and per-frame views) come out to
//! the presentation consumer (CLI, overlay renderer).

use crate::pet::{PetState, PetView, Point};
use tokio::sync::mpsc;

/// Default channel buffer size.
const DEFAULT_CHANNEL_SIZE: usize = 100;

/// A discrete behavioral event produced by the interaction source.
///
/// Stateless and fire-and-forget; the behavior engine is the sole
/// subscriber and does all filtering by state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionEvent {
    /// The pet was clicked with the primary button.
    LeftClicked,
    /// The pet was clicked with the secondary button.
    RightClicked,
    /// A drag of the pet started.
    BeginDrag,
    /// The drag ended.
    EndDrag,
    /// An external caller asked the pet to walk to a point.
    GuideRequest(Point),
}

/// A message on the engine's input channel.
///
/// Interaction events go through the transition table; pointer and drag
/// position samples do not, they only update tracked positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMessage {
    /// A discrete interaction event for the transition table.
    Interaction(InteractionEvent),
    /// The pointer moved; keeps the engine's pointer snapshot current
    /// for the Following state.
    PointerMoved(Point),
    /// The pointer moved mid-drag. Pins the pet's displayed position to
    /// the pointer directly, bypassing the state machine.
    DragMoved(Point),
}

/// Events emitted by the engine during execution.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    /// The engine run loop has started.
    Started,

    /// The pet switched states.
    StateChanged {
        /// The state being left.
        from: PetState,
        /// The state being entered.
        to: PetState,
    },

    /// A per-frame snapshot for the presentation layer.
    Frame(PetView),

    /// The engine run loop has stopped.
    Stopped,
}

/// Sender for interaction input messages.
pub type InputSender = mpsc::Sender<InputMessage>;

/// Receiver for interaction input messages.
pub type InputReceiver = mpsc::Receiver<InputMessage>;

/// Sender for engine events.
pub type EngineEventSender = mpsc::Sender<EngineEvent>;

/// Receiver for engine events.
pub type EngineEventReceiver = mpsc::Receiver<EngineEvent>;

/// Create a new input channel with the default buffer size.
pub fn input_channel() -> (InputSender, InputReceiver) {
    mpsc::channel(DEFAULT_CHANNEL_SIZE)
}

/// Create a new engine event channel with the default buffer size.
pub fn event_channel() -> (EngineEventSender, EngineEventReceiver) {
    mpsc::channel(DEFAULT_CHANNEL_SIZE)
}
