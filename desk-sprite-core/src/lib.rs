//! desk-sprite core library
//!
//! This crate provides the core functionality for the desk-sprite desktop
//! companion: the pet behavior state machine and its engine, the
//! interaction event source that feeds it, the reminder scheduler, the
//! desktop environment provider, and host window integration glue.

pub mod config;
pub mod desktop;
pub mod engine;
pub mod error;
pub mod event;
pub mod interaction;
pub mod pet;
pub mod window;

pub use config::Config;
pub use desktop::{Bounds, DesktopEnvironment, DesktopLayout, IconSlot, StaticDesktop};
pub use engine::{Engine, EngineHandle};
pub use error::{Error, Result};
pub use event::{
    EngineEvent, EngineEventReceiver, EngineEventSender, InputMessage, InputReceiver, InputSender,
    InteractionEvent,
};
pub use interaction::InteractionSource;
pub use pet::{Pet, PetState, PetView, Point, Speech};
pub use window::{setup_overlay, HostWindow, LoggingWindow, OverlayOptions};
