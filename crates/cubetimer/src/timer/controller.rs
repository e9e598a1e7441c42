use cubetimer_engine::coords::Vec2;
use cubetimer_engine::scene::Anchor;

use crate::clock::Clock;
use crate::config::TimerConfig;
use crate::format::{format_best, format_time};
use crate::input::InputSource;
use crate::store::{BestTimeStore, StoreError};
use crate::surface::{Surface, TextStyle};

use super::state::TimerState;

/// Drives the Stopped → Primed → Running → Stopped cycle from a single
/// trigger key and keeps the best completed time.
///
/// The trigger is sampled as a level once per [`update`](Self::update):
///
/// | state   | trigger | result                                              |
/// |---------|---------|-----------------------------------------------------|
/// | Stopped | up      | stays Stopped, releases the latch                   |
/// | Stopped | down    | Primed (elapsed reset) unless the latch is set      |
/// | Primed  | up      | Running, start recorded                             |
/// | Primed  | down    | stays Primed                                        |
/// | Running | any     | elapsed = now - start                               |
/// | Running | down    | Stopped, latch set, best time updated if beaten     |
///
/// The latch keeps the key press that stopped a run from immediately
/// priming the next one.
pub struct TimerController<C, S> {
    config: TimerConfig,
    clock: C,
    store: S,

    state: TimerState,
    start: f64,
    elapsed: f64,
    best: Option<f64>,
    trigger_held_since_stop: bool,
}

impl<C, S> TimerController<C, S>
where
    C: Clock,
    S: BestTimeStore,
{
    /// Creates a stopped controller, reading the best time from `store`.
    ///
    /// A store that cannot be read or holds garbage is logged and treated as
    /// having no record.
    pub fn new(config: TimerConfig, clock: C, store: S) -> Self {
        let best = match store.load() {
            Ok(best) => best,
            Err(err @ StoreError::Parse { .. }) => {
                log::warn!("ignoring stored best time: {err}");
                None
            }
            Err(err) => {
                log::error!("could not read stored best time: {err}");
                None
            }
        };

        match best {
            Some(best) => log::info!("best time on record: {}", format_time(best)),
            None => log::info!("no best time on record"),
        }

        Self {
            config,
            clock,
            store,
            state: TimerState::Stopped,
            start: 0.0,
            elapsed: 0.0,
            best,
            trigger_held_since_stop: false,
        }
    }

    #[inline]
    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Duration of the current run, or of the last one once stopped.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    #[inline]
    pub fn best_time(&self) -> Option<f64> {
        self.best
    }

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    /// Advances the state machine by one tick.
    pub fn update(&mut self, input: &impl InputSource) {
        let down = input.is_key_down(self.config.trigger);

        match self.state {
            TimerState::Stopped => {
                if !down {
                    self.trigger_held_since_stop = false;
                } else if !self.trigger_held_since_stop {
                    self.elapsed = 0.0;
                    self.transition(TimerState::Primed);
                }
            }

            TimerState::Primed => {
                if !down {
                    self.start = self.clock.now();
                    self.elapsed = 0.0;
                    self.transition(TimerState::Running);
                }
            }

            TimerState::Running => {
                // Clamp guards against a clock that steps backwards.
                self.elapsed = (self.clock.now() - self.start).max(0.0);
                if down {
                    self.stop();
                }
            }
        }
    }

    fn transition(&mut self, next: TimerState) {
        log::debug!("timer {} -> {}", self.state, next);
        self.state = next;
    }

    fn stop(&mut self) {
        self.trigger_held_since_stop = true;
        self.transition(TimerState::Stopped);

        let elapsed = self.elapsed;
        if self.best.is_some_and(|best| elapsed >= best) {
            log::debug!("run finished in {}", format_time(elapsed));
            return;
        }

        log::info!("new best time: {}", format_time(elapsed));
        self.best = Some(elapsed);
        if let Err(err) = self.store.save(elapsed) {
            log::error!("could not save best time: {err}");
        }
    }

    /// Clears the surface and draws the timer, the state name and the best
    /// time.
    pub fn render(&self, surface: &mut impl Surface) {
        let style = &self.config.display;
        surface.clear(style.background);

        let viewport = surface.viewport();
        let centre = Vec2::new(viewport.width * 0.5, viewport.height * 0.5);
        surface.draw_text(
            &format_time(self.elapsed),
            centre,
            TextStyle {
                size: style.timer_size,
                color: style.text_color,
                anchor: Anchor::Center,
            },
        );

        let status = TextStyle {
            size: style.status_size,
            color: style.text_color,
            anchor: Anchor::TopLeft,
        };
        surface.draw_text(self.state.label(), style.status_origin, status);
        surface.draw_text(
            &format!("Best Time: {}", format_best(self.best)),
            style.status_origin + Vec2::new(0.0, style.status_line_spacing),
            status,
        );
    }
}
