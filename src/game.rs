//! Game session
//!
//! Cooperative single-threaded loop: input events are handled between
//! steps, and each [`Game::advance`] runs the physics with the real elapsed
//! time since the previous call. Nothing here ever runs concurrently with
//! itself, so the simulation needs no locking.

use glam::DVec2;

use crate::platform::{Clock, InputEvent, SpawnTimer, screen_to_world};
use crate::renderer::Frame;
use crate::settings::Settings;
use crate::sim::{GameState, Hit, Rnd, hit_test, spawn, step};

/// A running game bound to a clock
pub struct Game<C: Clock> {
    state: GameState,
    clock: C,
    /// Teleport trigger driven by `advance`; `None` when the windowing layer
    /// delivers `InputEvent::SpawnTimer` itself
    spawn_timer: Option<SpawnTimer>,
    /// Last pointer position, screen space
    cursor: DVec2,
    last_ms: Option<u64>,
    frame: Frame,
    quit: bool,
}

impl<C: Clock> Game<C> {
    /// Session whose teleport timer runs off the clock inside [`Game::advance`].
    /// `InputEvent::SpawnTimer` is ignored.
    pub fn new(settings: Settings, rnd: Rnd, clock: C) -> Self {
        let spawn_timer = SpawnTimer::new(settings.spawn_interval_ms);
        Self::build(settings, rnd, clock, Some(spawn_timer))
    }

    /// Session whose teleports come only from `InputEvent::SpawnTimer`
    /// (e.g. a window-system timer)
    pub fn with_external_timer(settings: Settings, rnd: Rnd, clock: C) -> Self {
        Self::build(settings, rnd, clock, None)
    }

    fn build(settings: Settings, rnd: Rnd, clock: C, spawn_timer: Option<SpawnTimer>) -> Self {
        let frame = Frame::with_capacity(settings.maximum_attack);
        Self {
            state: GameState::new(settings, rnd),
            clock,
            spawn_timer,
            cursor: DVec2::ZERO,
            last_ms: None,
            frame,
            quit: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn cursor(&self) -> DVec2 {
        self.cursor
    }

    pub fn is_quit(&self) -> bool {
        self.quit
    }

    /// Most recently produced frame
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Handle one input event. Returns the hit, if a click struck a ship.
    pub fn handle(&mut self, event: InputEvent) -> Option<Hit> {
        match event {
            InputEvent::PointerMoved { x, y } => {
                self.cursor = DVec2::new(x, y);
                None
            }
            InputEvent::PointerDown => {
                let point = screen_to_world(
                    self.cursor.x,
                    self.cursor.y,
                    self.state.settings.viewport_height,
                );
                hit_test(&mut self.state, point)
            }
            InputEvent::PointerUp => None,
            InputEvent::SpawnTimer => {
                if self.spawn_timer.is_none() {
                    self.teleport();
                } else {
                    log::trace!("External spawn timer ignored, session drives its own");
                }
                None
            }
            InputEvent::KeyDown | InputEvent::Close => {
                if !self.quit {
                    log::info!("Quit requested, final score {}", self.state.score);
                }
                self.quit = true;
                None
            }
        }
    }

    /// Add a new ship if there is a free slot
    fn teleport(&mut self) {
        if self.state.attack() < self.state.fleet.capacity() {
            spawn(&mut self.state);
        }
    }

    /// Run one loop iteration: step the physics by the time since the
    /// previous call, fire the teleport timer if due, and refresh the frame.
    /// The first call steps by zero.
    pub fn advance(&mut self) -> &Frame {
        let now = self.clock.now_ms();
        let elapsed = self.last_ms.map_or(0, |last| now.saturating_sub(last));
        self.last_ms = Some(now);

        step(&mut self.state, elapsed);
        let due = self
            .spawn_timer
            .as_mut()
            .is_some_and(|timer| timer.advance(elapsed));
        if due {
            self.teleport();
        }

        self.frame.update(&self.state, self.cursor);
        &self.frame
    }
}
