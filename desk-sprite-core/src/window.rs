//! Host window integration.
//!
//! One-time startup glue: the host window is asked to go borderless,
//! topmost, transparent, and click-through so the pet floats over the
//! desktop. The request is fire-and-forget; a refusal is logged and the
//! engine runs regardless. Actual platform windowing calls live behind
//! the [`HostWindow`] trait and are out of scope for this crate.

use crate::error::Result;
use tracing::{info, warn};

/// The overlay mode requested from the host window at startup.
#[derive(Debug, Clone, Copy)]
pub struct OverlayOptions {
    /// Remove the window frame.
    pub borderless: bool,
    /// Keep the window above all others.
    pub topmost: bool,
    /// Make the window background transparent.
    pub transparent: bool,
    /// Let pointer input pass through transparent pixels.
    pub click_through: bool,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            borderless: true,
            topmost: true,
            transparent: true,
            click_through: true,
        }
    }
}

/// A host window that can be switched into overlay mode.
pub trait HostWindow {
    /// Apply the requested overlay mode.
    ///
    /// # Errors
    ///
    /// Returns `Error::Window` if the host refuses the request.
    fn apply(&self, options: &OverlayOptions) -> Result<()>;
}

/// A [`HostWindow`] that only records the request.
///
/// Stands in wherever no real windowing backend is wired up, e.g. the CLI
/// demo and tests.
#[derive(Debug, Default)]
pub struct LoggingWindow;

impl HostWindow for LoggingWindow {
    fn apply(&self, options: &OverlayOptions) -> Result<()> {
        info!(
            borderless = options.borderless,
            topmost = options.topmost,
            transparent = options.transparent,
            click_through = options.click_through,
            "overlay mode requested"
        );
        Ok(())
    }
}

/// Request overlay mode once at startup.
///
/// Failures are logged and swallowed; nothing downstream of this call
/// depends on the outcome.
pub fn setup_overlay(window: &dyn HostWindow, options: &OverlayOptions) {
    if let Err(e) = window.apply(options) {
        warn!(error = %e, "overlay setup failed, continuing without it");
    }
}
