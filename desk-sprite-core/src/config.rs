//! Configuration for the pet behavior engine.
//!
//! This module provides the `Config` struct with a builder pattern
//! for tuning movement speeds, idle timing, speech durations, the
//! reminder schedule, and the frame rate of the run loop.

use crate::error::{Error, Result};
use crate::pet::Point;
use std::time::Duration;

/// Default walking speed in screen units per second.
const DEFAULT_MOVE_SPEED: f64 = 2.0;

/// Default lower bound for the random idle duration in seconds.
const DEFAULT_IDLE_TIME_MIN: f64 = 3.0;

/// Default upper bound for the random idle duration in seconds.
const DEFAULT_IDLE_TIME_MAX: f64 = 8.0;

/// Default speech duration after a click, in seconds.
const DEFAULT_TALKING_DURATION: f64 = 4.0;

/// Default smoothing rate while following the pointer.
const DEFAULT_FOLLOW_SPEED: f64 = 8.0;

/// Distance below which a move counts as arrived.
const DEFAULT_ARRIVAL_EPSILON: f64 = 0.1;

/// Margin kept from the screen edges when rolling random destinations.
const DEFAULT_SCREEN_MARGIN: f64 = 50.0;

/// Probability that an idle timeout walks to an icon rather than a
/// random point.
const DEFAULT_ICON_BIAS: f64 = 0.7;

/// Seconds between reminder firings.
const DEFAULT_REMINDER_INTERVAL_SECS: u64 = 60;

/// Seconds the reminder speech stays up.
const DEFAULT_REMINDER_DURATION: f64 = 5.0;

/// Default reminder line.
const DEFAULT_REMINDER_TEXT: &str = "A minute has gone by. Time to stretch a little?";

/// Default line spoken when the pet is clicked.
const DEFAULT_CLICK_TEXT: &str = "What did you poke me for?";

/// Default frames per second for the run loop.
const DEFAULT_FRAME_RATE: f64 = 60.0;

/// Configuration for the pet behavior engine.
#[derive(Debug, Clone)]
pub struct Config {
    /// Walking speed while Moving, in screen units per second.
    pub move_speed: f64,

    /// Lower bound for the random idle duration in seconds.
    pub idle_time_min: f64,

    /// Upper bound for the random idle duration in seconds.
    pub idle_time_max: f64,

    /// How long click-triggered speech stays up, in seconds.
    pub talking_duration: f64,

    /// Smoothing rate while Following the pointer.
    pub follow_speed: f64,

    /// Distance below which a move counts as arrived.
    pub arrival_epsilon: f64,

    /// Margin kept from the screen edges for random destinations.
    pub screen_margin: f64,

    /// Probability in `[0, 1]` that an idle timeout picks an icon
    /// destination rather than a random in-bounds point.
    pub icon_bias: f64,

    /// Period of the reminder scheduler.
    pub reminder_interval: Duration,

    /// How long reminder speech stays up, in seconds.
    pub reminder_duration: f64,

    /// The reminder line.
    pub reminder_text: String,

    /// The line spoken when the pet is clicked.
    pub click_text: String,

    /// Frames per second for the run loop.
    pub frame_rate: f64,

    /// Seed for the engine's random number generator. `None` seeds
    /// from entropy; set it for deterministic behavior in tests.
    pub rng_seed: Option<u64>,

    /// Where the pet appears at startup.
    pub start_position: Point,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            move_speed: DEFAULT_MOVE_SPEED,
            idle_time_min: DEFAULT_IDLE_TIME_MIN,
            idle_time_max: DEFAULT_IDLE_TIME_MAX,
            talking_duration: DEFAULT_TALKING_DURATION,
            follow_speed: DEFAULT_FOLLOW_SPEED,
            arrival_epsilon: DEFAULT_ARRIVAL_EPSILON,
            screen_margin: DEFAULT_SCREEN_MARGIN,
            icon_bias: DEFAULT_ICON_BIAS,
            reminder_interval: Duration::from_secs(DEFAULT_REMINDER_INTERVAL_SECS),
            reminder_duration: DEFAULT_REMINDER_DURATION,
            reminder_text: DEFAULT_REMINDER_TEXT.to_string(),
            click_text: DEFAULT_CLICK_TEXT.to_string(),
            frame_rate: DEFAULT_FRAME_RATE,
            rng_seed: None,
            start_position: Point::new(0.0, 0.0),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the walking speed in screen units per second.
    pub fn move_speed(mut self, speed: f64) -> Self {
        self.move_speed = speed;
        self
    }

    /// Set the idle duration range in seconds.
    pub fn idle_time_range(mut self, min: f64, max: f64) -> Self {
        self.idle_time_min = min;
        self.idle_time_max = max;
        self
    }

    /// Set the click speech duration in seconds.
    pub fn talking_duration(mut self, secs: f64) -> Self {
        self.talking_duration = secs;
        self
    }

    /// Set the pointer-following smoothing rate.
    pub fn follow_speed(mut self, speed: f64) -> Self {
        self.follow_speed = speed;
        self
    }

    /// Set the arrival epsilon.
    pub fn arrival_epsilon(mut self, epsilon: f64) -> Self {
        self.arrival_epsilon = epsilon;
        self
    }

    /// Set the screen-edge margin for random destinations.
    pub fn screen_margin(mut self, margin: f64) -> Self {
        self.screen_margin = margin;
        self
    }

    /// Set the icon bias probability.
    pub fn icon_bias(mut self, bias: f64) -> Self {
        self.icon_bias = bias;
        self
    }

    /// Set the reminder period.
    pub fn reminder_interval(mut self, interval: Duration) -> Self {
        self.reminder_interval = interval;
        self
    }

    /// Set the reminder speech duration in seconds.
    pub fn reminder_duration(mut self, secs: f64) -> Self {
        self.reminder_duration = secs;
        self
    }

    /// Set the reminder line.
    pub fn reminder_text(mut self, text: impl Into<String>) -> Self {
        self.reminder_text = text.into();
        self
    }

    /// Set the line spoken when the pet is clicked.
    pub fn click_text(mut self, text: impl Into<String>) -> Self {
        self.click_text = text.into();
        self
    }

    /// Set the run loop frame rate in frames per second.
    pub fn frame_rate(mut self, fps: f64) -> Self {
        self.frame_rate = fps;
        self
    }

    /// Set the random number generator seed.
    pub fn rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Set the startup position.
    pub fn start_position(mut self, position: Point) -> Self {
        self.start_position = position;
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` when a numeric parameter is out of its
    /// valid range.
    pub fn validate(&self) -> Result<()> {
        if self.idle_time_min < 0.0 || self.idle_time_max < self.idle_time_min {
            return Err(Error::config_error(format!(
                "idle time range [{}, {}] is invalid",
                self.idle_time_min, self.idle_time_max
            )));
        }
        if self.move_speed <= 0.0 {
            return Err(Error::config_error("move_speed must be positive"));
        }
        if self.follow_speed <= 0.0 {
            return Err(Error::config_error("follow_speed must be positive"));
        }
        if !(0.0..=1.0).contains(&self.icon_bias) {
            return Err(Error::config_error(format!(
                "icon_bias {} is outside [0, 1]",
                self.icon_bias
            )));
        }
        if self.arrival_epsilon <= 0.0 {
            return Err(Error::config_error("arrival_epsilon must be positive"));
        }
        if self.talking_duration <= 0.0 || self.reminder_duration <= 0.0 {
            return Err(Error::config_error("speech durations must be positive"));
        }
        if self.reminder_interval.is_zero() {
            return Err(Error::config_error("reminder_interval must be non-zero"));
        }
        if self.frame_rate <= 0.0 {
            return Err(Error::config_error("frame_rate must be positive"));
        }
        Ok(())
    }
}
