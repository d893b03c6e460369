//! The pet behavior engine.
//!
//! A finite-state machine driven once per frame by elapsed time and
//! asynchronously by interaction events. The engine owns the pet's
//! position, current state, and speech display; the desktop environment
//! provider is injected at construction and queried when the pet decides
//! where to wander next.
//!
//! Two halves live here. The sync half ([`Engine::handle_event`],
//! [`Engine::tick`], [`Engine::on_reminder`]) is the whole state machine
//! and is directly testable without a runtime. The async half
//! ([`Engine::run`]) drives the sync half from a frame interval, the
//! reminder interval, and the input channel on a single task.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::time::{interval, interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::desktop::DesktopEnvironment;
use crate::error::Result;
use crate::event::{
    event_channel, input_channel, EngineEvent, EngineEventReceiver, EngineEventSender,
    InputMessage, InputReceiver, InputSender, InteractionEvent,
};
use crate::interaction::InteractionSource;
use crate::pet::{Pet, PetState, PetView, Point};

/// Handle for controlling a running engine.
///
/// The handle can be cloned and used to stop the run loop from another
/// task or thread.
#[derive(Debug, Clone)]
pub struct EngineHandle {
    cancel_flag: Arc<AtomicBool>,
}

impl EngineHandle {
    /// Signal the engine to stop at the next frame boundary.
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::SeqCst);
    }

    /// Check if cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag.load(Ordering::SeqCst)
    }
}

/// The pet behavior engine.
pub struct Engine {
    config: Config,
    pet: Pet,
    desktop: Box<dyn DesktopEnvironment>,
    rng: StdRng,
    input: InputReceiver,
    input_tx: InputSender,
    events: EngineEventSender,
    cancel_flag: Arc<AtomicBool>,
    /// Last known pointer position, tracked for the Following state.
    pointer: Point,
    warned_no_icons: bool,
}

impl Engine {
    /// Create a new engine with the given configuration and desktop
    /// environment provider.
    ///
    /// Returns a tuple of (Engine, EngineEventReceiver, EngineHandle).
    /// - The `Engine` runs the behavior loop.
    /// - The `EngineEventReceiver` delivers state changes and per-frame
    ///   views to the presentation layer.
    /// - The `EngineHandle` can stop the loop.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` if the configuration is invalid.
    pub fn new(
        config: Config,
        desktop: Box<dyn DesktopEnvironment>,
    ) -> Result<(Self, EngineEventReceiver, EngineHandle)> {
        config.validate()?;

        let (events, events_rx) = event_channel();
        let (input_tx, input) = input_channel();
        let cancel_flag = Arc::new(AtomicBool::new(false));

        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let pet = Pet::new(config.start_position);

        let mut engine = Self {
            config,
            pet,
            desktop,
            rng,
            input,
            input_tx,
            events,
            cancel_flag: cancel_flag.clone(),
            pointer: Point::new(0.0, 0.0),
            warned_no_icons: false,
        };

        // The pet starts out Idle, so run Idle's entry logic once.
        engine.pet.next_behavior_duration = engine
            .rng
            .gen_range(engine.config.idle_time_min..=engine.config.idle_time_max);

        let handle = EngineHandle { cancel_flag };

        Ok((engine, events_rx, handle))
    }

    /// Create an interaction source feeding this engine.
    pub fn source(&self) -> InteractionSource {
        InteractionSource::new(self.input_tx.clone())
    }

    /// The pet's current state and bookkeeping.
    pub fn pet(&self) -> &Pet {
        &self.pet
    }

    /// Snapshot of what the presentation layer renders.
    pub fn view(&self) -> PetView {
        self.pet.view()
    }

    /// The last pointer position the engine saw.
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Apply one input message.
    ///
    /// Interaction events go through the transition table. Pointer and
    /// drag samples bypass it: a drag sample pins the pet's displayed
    /// position to the pointer regardless of state machine logic.
    pub fn apply(&mut self, message: InputMessage) {
        match message {
            InputMessage::Interaction(event) => self.handle_event(event),
            InputMessage::PointerMoved(point) => self.pointer = point,
            InputMessage::DragMoved(point) => {
                self.pointer = point;
                self.pet.position = point;
            }
        }
    }

    /// Run one interaction event through the transition table.
    ///
    /// Events with no entry for the current state are absorbed as no-ops.
    /// `BeginDrag` pre-empts every state; while Dragging nothing but
    /// `EndDrag` changes state.
    pub fn handle_event(&mut self, event: InteractionEvent) {
        let dragging = self.pet.state == PetState::Dragging;
        match event {
            InteractionEvent::BeginDrag => self.switch_state(PetState::Dragging),
            InteractionEvent::EndDrag if dragging => self.switch_state(PetState::Idle),
            InteractionEvent::EndDrag => {}
            _ if dragging => {}
            InteractionEvent::LeftClicked => {
                let text = self.config.click_text.clone();
                let duration = self.config.talking_duration;
                self.show_speech(&text, duration);
            }
            InteractionEvent::RightClicked => {
                if self.pet.state == PetState::Following {
                    self.switch_state(PetState::Idle);
                } else {
                    self.switch_state(PetState::Following);
                }
            }
            InteractionEvent::GuideRequest(point) => {
                debug!(target_pos = %point, "guide request");
                // Retargets even when already Moving: the state switch is
                // a no-op but the destination updates.
                self.pet.target = point;
                self.switch_state(PetState::Moving);
            }
        }
    }

    /// Advance the state machine by `dt` seconds of frame time.
    pub fn tick(&mut self, dt: f64) {
        match self.pet.state {
            PetState::Idle => {
                self.pet.state_timer += dt;
                if self.pet.state_timer >= self.pet.next_behavior_duration {
                    self.pet.target = self.roll_destination();
                    self.switch_state(PetState::Moving);
                }
            }
            PetState::Moving => {
                self.pet.position = self
                    .pet
                    .position
                    .move_toward(self.pet.target, self.config.move_speed * dt);
                if self.pet.position.distance(self.pet.target) < self.config.arrival_epsilon {
                    self.switch_state(PetState::Idle);
                }
            }
            PetState::Talking => {
                self.pet.state_timer += dt;
                if self.pet.state_timer >= self.pet.next_behavior_duration {
                    self.pet.speech.visible = false;
                    self.switch_state(PetState::Idle);
                }
            }
            PetState::Dragging => {
                // Position is driven externally by drag samples.
            }
            PetState::Following => {
                self.pet.target = self.pointer;
                let t = self.config.follow_speed * dt;
                self.pet.position = self.pet.position.lerp(self.pet.target, t);
            }
            PetState::OnIcon | PetState::Sleeping => {
                // Reserved states, no tick behavior defined.
            }
        }
    }

    /// One firing of the reminder scheduler.
    ///
    /// The reminder speaks up if and only if the pet is Idle at firing
    /// time; otherwise the firing is silently dropped. The schedule
    /// itself is never paused or reset by state transitions.
    pub fn on_reminder(&mut self) {
        if self.pet.state == PetState::Idle {
            let text = self.config.reminder_text.clone();
            let duration = self.config.reminder_duration;
            self.show_speech(&text, duration);
        }
    }

    /// Show a speech line and enter Talking for `duration` seconds.
    ///
    /// Already Talking counts as a self-transition: the text updates but
    /// the running timer and duration are left alone.
    fn show_speech(&mut self, text: &str, duration: f64) {
        self.pet.speech.text = text.to_string();
        self.pet.speech.visible = true;
        let entering = self.pet.state != PetState::Talking;
        self.switch_state(PetState::Talking);
        if entering {
            self.pet.next_behavior_duration = duration;
        }
    }

    /// Switch to `next`, running its entry logic.
    ///
    /// Switching to the already-active state does nothing, including not
    /// resetting the state timer.
    fn switch_state(&mut self, next: PetState) {
        if self.pet.state == next {
            return;
        }
        let from = self.pet.state;
        self.pet.state = next;
        self.pet.state_timer = 0.0;

        // Speech only survives into Talking.
        if next != PetState::Talking {
            self.pet.speech.visible = false;
        }

        if next == PetState::Idle {
            self.pet.next_behavior_duration = self
                .rng
                .gen_range(self.config.idle_time_min..=self.config.idle_time_max);
        }

        debug!(from = %from, to = %next, "state change");
        let _ = self.events.try_send(EngineEvent::StateChanged { from, to: next });
    }

    /// Roll the destination for the next wander.
    ///
    /// Biased toward icons; degrades to a random in-bounds point when the
    /// provider has none.
    fn roll_destination(&mut self) -> Point {
        if self.rng.gen_bool(self.config.icon_bias) {
            if let Some(point) = self.desktop.random_icon_position() {
                return point;
            }
            if !self.warned_no_icons {
                warn!("desktop has no icon positions, falling back to random destinations");
                self.warned_no_icons = true;
            }
        }
        self.random_in_bounds()
    }

    /// A uniformly random point inside the screen with the configured
    /// margin.
    fn random_in_bounds(&mut self) -> Point {
        let bounds = self.desktop.screen_bounds();
        let margin = self.config.screen_margin;
        if bounds.width <= 2.0 * margin || bounds.height <= 2.0 * margin {
            // Screen too small for the margin; aim for the center.
            return Point::new(bounds.width / 2.0, bounds.height / 2.0);
        }
        Point::new(
            self.rng.gen_range(margin..bounds.width - margin),
            self.rng.gen_range(margin..bounds.height - margin),
        )
    }

    /// Run the behavior loop until cancelled.
    ///
    /// Each frame drains pending input first, so an event arriving
    /// mid-frame takes effect starting with the next tick, then advances
    /// the state machine by the elapsed time and emits a
    /// [`EngineEvent::Frame`]. An independent interval fires the reminder
    /// scheduler. Everything runs on one task; nothing here blocks.
    pub async fn run(mut self) -> Result<()> {
        let _ = self.events.send(EngineEvent::Started).await;
        info!(
            fps = self.config.frame_rate,
            reminder_secs = self.config.reminder_interval.as_secs(),
            "engine started"
        );

        let frame_period = Duration::from_secs_f64(1.0 / self.config.frame_rate);
        let mut frames = interval(frame_period);
        frames.set_missed_tick_behavior(MissedTickBehavior::Delay);

        // First reminder fires one full period in, not immediately.
        let mut reminders = interval_at(
            Instant::now() + self.config.reminder_interval,
            self.config.reminder_interval,
        );
        reminders.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut last_frame = Instant::now();

        loop {
            if self.cancel_flag.load(Ordering::SeqCst) {
                let _ = self.events.send(EngineEvent::Stopped).await;
                info!("engine stopped");
                return Ok(());
            }

            tokio::select! {
                _ = frames.tick() => {
                    // Queued events apply before the tick body of the
                    // resulting state runs.
                    while let Ok(message) = self.input.try_recv() {
                        self.apply(message);
                    }

                    let now = Instant::now();
                    let dt = (now - last_frame).as_secs_f64();
                    last_frame = now;

                    self.tick(dt);

                    // Frames are droppable if the consumer falls behind.
                    let _ = self.events.try_send(EngineEvent::Frame(self.pet.view()));
                }
                _ = reminders.tick() => {
                    self.on_reminder();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::desktop::{Bounds, DesktopLayout, StaticDesktop};

    const ICON: Point = Point { x: 700.0, y: 700.0 };

    fn test_desktop() -> Box<dyn DesktopEnvironment> {
        let layout = DesktopLayout::new(Bounds::new(1920.0, 1080.0)).icon("only", ICON.x, ICON.y);
        Box::new(StaticDesktop::with_seed(layout, 1))
    }

    fn bare_desktop() -> Box<dyn DesktopEnvironment> {
        Box::new(StaticDesktop::with_seed(
            DesktopLayout::new(Bounds::new(1920.0, 1080.0)),
            1,
        ))
    }

    fn test_engine(config: Config) -> Engine {
        let (engine, _events, _handle) =
            Engine::new(config.rng_seed(99), test_desktop()).expect("valid config");
        engine
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = Engine::new(Config::new().move_speed(0.0), test_desktop());
        assert!(result.is_err());
    }

    #[test]
    fn test_starts_idle_at_start_position() {
        let engine = test_engine(Config::new().start_position(Point::new(5.0, 6.0)));
        assert_eq!(engine.pet().state, PetState::Idle);
        assert_eq!(engine.pet().position, Point::new(5.0, 6.0));
    }

    #[test]
    fn test_idle_times_out_into_moving() {
        let mut engine = test_engine(Config::new().idle_time_range(0.5, 0.5));
        engine.tick(0.3);
        assert_eq!(engine.pet().state, PetState::Idle);
        engine.tick(0.3);
        assert_eq!(engine.pet().state, PetState::Moving);
    }

    #[test]
    fn test_moving_arrives_and_reenters_idle_with_fresh_duration() {
        let mut engine = test_engine(Config::new().move_speed(100.0).idle_time_range(3.0, 8.0));
        engine.handle_event(InteractionEvent::GuideRequest(Point::new(10.0, 0.0)));
        assert_eq!(engine.pet().state, PetState::Moving);

        let mut ticks = 0;
        while engine.pet().state == PetState::Moving {
            engine.tick(0.016);
            ticks += 1;
            assert!(ticks < 1000, "moving should terminate in finite ticks");
        }
        assert_eq!(engine.pet().state, PetState::Idle);
        assert!(engine.pet().position.distance(Point::new(10.0, 0.0)) < 0.1);
        let d = engine.pet().next_behavior_duration;
        assert!((3.0..=8.0).contains(&d), "idle duration {} out of range", d);
    }

    #[test]
    fn test_moving_never_overshoots_target() {
        let mut engine = test_engine(Config::new().move_speed(50.0));
        engine.handle_event(InteractionEvent::GuideRequest(Point::new(1.0, 0.0)));
        // One big tick would travel 5 units; the move clamps at the target.
        engine.tick(0.1);
        assert_eq!(engine.pet().state, PetState::Idle);
        assert_eq!(engine.pet().position, Point::new(1.0, 0.0));
    }

    #[test]
    fn test_left_click_starts_talking_with_speech() {
        let mut engine = test_engine(Config::new().click_text("hi there").talking_duration(4.0));
        engine.handle_event(InteractionEvent::LeftClicked);

        assert_eq!(engine.pet().state, PetState::Talking);
        assert!(engine.pet().speech.visible);
        assert_eq!(engine.pet().speech.text, "hi there");
        assert_eq!(engine.pet().next_behavior_duration, 4.0);
    }

    #[test]
    fn test_talking_times_out_hiding_speech() {
        let mut engine = test_engine(Config::new().talking_duration(1.0));
        engine.handle_event(InteractionEvent::LeftClicked);
        engine.tick(0.5);
        assert_eq!(engine.pet().state, PetState::Talking);
        engine.tick(0.6);
        assert_eq!(engine.pet().state, PetState::Idle);
        assert!(!engine.pet().speech.visible);
    }

    #[test]
    fn test_click_while_talking_is_self_transition() {
        let mut engine = test_engine(Config::new().talking_duration(2.0));
        engine.handle_event(InteractionEvent::LeftClicked);
        engine.tick(1.5);
        // Second click does not reset the running timer.
        engine.handle_event(InteractionEvent::LeftClicked);
        assert_eq!(engine.pet().state_timer, 1.5);
        engine.tick(0.6);
        assert_eq!(engine.pet().state, PetState::Idle);
    }

    #[test]
    fn test_right_click_toggles_following() {
        let mut engine = test_engine(Config::new());
        engine.handle_event(InteractionEvent::RightClicked);
        assert_eq!(engine.pet().state, PetState::Following);
        engine.handle_event(InteractionEvent::RightClicked);
        assert_eq!(engine.pet().state, PetState::Idle);
    }

    #[test]
    fn test_following_smooths_toward_pointer() {
        let mut engine = test_engine(Config::new().follow_speed(8.0));
        engine.handle_event(InteractionEvent::RightClicked);
        engine.apply(InputMessage::PointerMoved(Point::new(100.0, 100.0)));

        engine.tick(0.05);
        let pos = engine.pet().position;
        // position += (target - position) * follow_speed * dt = 40% of the way
        assert!((pos.x - 40.0).abs() < 1e-9);
        assert!((pos.y - 40.0).abs() < 1e-9);
        assert_eq!(engine.pet().target, Point::new(100.0, 100.0));
    }

    #[test]
    fn test_begin_drag_preempts_any_state() {
        let mut engine = test_engine(Config::new());
        engine.handle_event(InteractionEvent::GuideRequest(Point::new(500.0, 300.0)));
        assert_eq!(engine.pet().state, PetState::Moving);

        engine.handle_event(InteractionEvent::BeginDrag);
        assert_eq!(engine.pet().state, PetState::Dragging);

        // No autonomous movement while dragging.
        let before = engine.pet().position;
        engine.tick(1.0);
        assert_eq!(engine.pet().position, before);
    }

    #[test]
    fn test_drag_absorbs_everything_but_end_drag() {
        let mut engine = test_engine(Config::new());
        engine.handle_event(InteractionEvent::BeginDrag);

        engine.handle_event(InteractionEvent::LeftClicked);
        assert_eq!(engine.pet().state, PetState::Dragging);
        engine.handle_event(InteractionEvent::RightClicked);
        assert_eq!(engine.pet().state, PetState::Dragging);
        engine.handle_event(InteractionEvent::GuideRequest(Point::new(1.0, 1.0)));
        assert_eq!(engine.pet().state, PetState::Dragging);

        engine.handle_event(InteractionEvent::EndDrag);
        assert_eq!(engine.pet().state, PetState::Idle);
    }

    #[test]
    fn test_end_drag_lands_in_idle_never_predrag_state() {
        let mut engine = test_engine(Config::new());
        engine.handle_event(InteractionEvent::RightClicked);
        assert_eq!(engine.pet().state, PetState::Following);

        engine.handle_event(InteractionEvent::BeginDrag);
        engine.handle_event(InteractionEvent::EndDrag);
        assert_eq!(engine.pet().state, PetState::Idle);
    }

    #[test]
    fn test_end_drag_outside_drag_is_noop() {
        let mut engine = test_engine(Config::new());
        engine.handle_event(InteractionEvent::RightClicked);
        engine.handle_event(InteractionEvent::EndDrag);
        assert_eq!(engine.pet().state, PetState::Following);
    }

    #[test]
    fn test_drag_sample_pins_position() {
        let mut engine = test_engine(Config::new());
        engine.handle_event(InteractionEvent::BeginDrag);
        engine.apply(InputMessage::DragMoved(Point::new(333.0, 444.0)));
        assert_eq!(engine.pet().position, Point::new(333.0, 444.0));
    }

    #[test]
    fn test_guide_request_scenario() {
        let mut engine = test_engine(Config::new().move_speed(200.0));
        engine.handle_event(InteractionEvent::GuideRequest(Point::new(500.0, 300.0)));
        assert_eq!(engine.pet().state, PetState::Moving);
        assert_eq!(engine.pet().target, Point::new(500.0, 300.0));

        while engine.pet().state == PetState::Moving {
            engine.tick(0.016);
        }
        assert_eq!(engine.pet().state, PetState::Idle);
        assert!(engine.pet().position.distance(Point::new(500.0, 300.0)) < 0.1);
        assert!(engine.pet().next_behavior_duration >= 3.0);
    }

    #[test]
    fn test_guide_request_retargets_while_moving() {
        let mut engine = test_engine(Config::new());
        engine.handle_event(InteractionEvent::GuideRequest(Point::new(100.0, 0.0)));
        engine.tick(0.016);
        engine.handle_event(InteractionEvent::GuideRequest(Point::new(0.0, 100.0)));
        assert_eq!(engine.pet().state, PetState::Moving);
        assert_eq!(engine.pet().target, Point::new(0.0, 100.0));
    }

    #[test]
    fn test_reminder_only_fires_while_idle() {
        let mut engine = test_engine(Config::new().reminder_text("stretch!"));

        engine.handle_event(InteractionEvent::RightClicked);
        engine.on_reminder();
        assert_eq!(engine.pet().state, PetState::Following);
        assert!(!engine.pet().speech.visible);

        engine.handle_event(InteractionEvent::RightClicked);
        assert_eq!(engine.pet().state, PetState::Idle);
        engine.on_reminder();
        assert_eq!(engine.pet().state, PetState::Talking);
        assert!(engine.pet().speech.visible);
        assert_eq!(engine.pet().speech.text, "stretch!");
        assert_eq!(engine.pet().next_behavior_duration, 5.0);
    }

    #[test]
    fn test_reminder_speech_ends_back_in_idle() {
        let mut engine = test_engine(Config::new().reminder_duration(5.0));
        engine.on_reminder();
        assert_eq!(engine.pet().state, PetState::Talking);
        engine.tick(5.1);
        assert_eq!(engine.pet().state, PetState::Idle);
        assert!(!engine.pet().speech.visible);
    }

    #[test]
    fn test_destination_roll_is_icon_biased() {
        let mut engine = test_engine(Config::new().idle_time_range(0.0, 0.0));

        let mut icon_hits = 0u32;
        let total = 400u32;
        for _ in 0..total {
            engine.tick(0.016);
            assert_eq!(engine.pet().state, PetState::Moving);
            if engine.pet().target == ICON {
                icon_hits += 1;
            }
            // Drag in and out to force a fresh Idle without walking there.
            engine.handle_event(InteractionEvent::BeginDrag);
            engine.handle_event(InteractionEvent::EndDrag);
        }

        let ratio = f64::from(icon_hits) / f64::from(total);
        assert!(
            (0.6..0.8).contains(&ratio),
            "icon ratio {} outside expected band",
            ratio
        );
    }

    #[test]
    fn test_random_destination_respects_margin() {
        let (mut engine, _events, _handle) = Engine::new(
            Config::new()
                .rng_seed(5)
                .idle_time_range(0.0, 0.0)
                .icon_bias(0.0),
            bare_desktop(),
        )
        .expect("valid config");

        for _ in 0..50 {
            engine.tick(0.016);
            let target = engine.pet().target;
            assert!((50.0..=1870.0).contains(&target.x));
            assert!((50.0..=1030.0).contains(&target.y));
            engine.handle_event(InteractionEvent::BeginDrag);
            engine.handle_event(InteractionEvent::EndDrag);
        }
    }

    #[test]
    fn test_no_icons_falls_back_to_random() {
        let (mut engine, _events, _handle) = Engine::new(
            Config::new().rng_seed(11).idle_time_range(0.0, 0.0),
            bare_desktop(),
        )
        .expect("valid config");

        engine.tick(0.016);
        assert_eq!(engine.pet().state, PetState::Moving);
        let target = engine.pet().target;
        assert!(target.x >= 50.0 && target.x <= 1870.0);
    }

    #[test]
    fn test_state_changes_are_emitted() {
        let (mut engine, mut events, _handle) =
            Engine::new(Config::new().rng_seed(3), test_desktop()).expect("valid config");

        engine.handle_event(InteractionEvent::BeginDrag);
        engine.handle_event(InteractionEvent::EndDrag);

        assert!(matches!(
            events.try_recv(),
            Ok(EngineEvent::StateChanged {
                from: PetState::Idle,
                to: PetState::Dragging,
            })
        ));
        assert!(matches!(
            events.try_recv(),
            Ok(EngineEvent::StateChanged {
                from: PetState::Dragging,
                to: PetState::Idle,
            })
        ));
    }

    #[tokio::test]
    async fn test_run_emits_frames_and_stops_on_cancel() {
        let (engine, mut events, handle) = Engine::new(
            Config::new().rng_seed(8).frame_rate(200.0),
            test_desktop(),
        )
        .expect("valid config");

        let task = tokio::spawn(engine.run());

        let mut saw_started = false;
        let mut saw_frame = false;
        while let Some(event) = events.recv().await {
            match event {
                EngineEvent::Started => saw_started = true,
                EngineEvent::Frame(_) => {
                    saw_frame = true;
                    handle.cancel();
                }
                EngineEvent::Stopped => break,
                _ => {}
            }
        }

        assert!(saw_started, "should have received Started");
        assert!(saw_frame, "should have received at least one Frame");
        task.await.expect("task join").expect("run result");
    }
}
