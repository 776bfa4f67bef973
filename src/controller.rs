//! Page controller state machine
//!
//! [`PageController`] owns the active page, the quiz state, the
//! configuration, the asset bundle and the background sparkle field. The
//! embedding frame pump calls [`PageController::tick`] once per rendered
//! frame with the wall time, the elapsed delta and the drained input
//! events; everything inside a tick is synchronous and single-threaded.
//!
//! A tick has three phases: input dispatch, the page update step, and
//! rendering. The first navigation signal raised anywhere aborts the
//! remaining phases for the old page: a signal out of the input phase
//! skips even the background fill for that frame, and a signal out of
//! the update step guarantees the expired page issues no further draw
//! call. Signals are edge-triggered requests consumed exactly once, not
//! polled state.

use web_time::{Duration, Instant};

use crate::config::Config;
use crate::pages::{
    ActivePage, AudienceRevealPage, FiftyRevealPage, Frame, PhoneRevealPage, QuestionPage,
    ResultPage, StartupPage, VictoryPage,
};
use crate::question::Deck;
use crate::quiz::{QuizState, SessionOptions};
use crate::render::{Assets, Canvas, Rect};
use crate::sparkles::SparkleField;
use crate::{InputEvent, Key, NavigationSignal, anim};

/// What the frame pump should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Keep pumping frames
    Continue,
    /// The player asked to quit; shut down cleanly
    Shutdown,
}

/// The game's state machine, one instance per process
pub struct PageController {
    quiz: QuizState,
    page: ActivePage,
    config: Config,
    assets: Assets,
    sparkles: SparkleField,
    cursor: crate::render::Point,
    started_at: Instant,
}

impl PageController {
    /// Creates the controller in its initial startup state
    ///
    /// The session is built immediately from the deck so the first
    /// question is ready the moment the startup handoff completes.
    pub fn new(deck: Deck, config: Config, assets: Assets, now: Instant) -> Self {
        let quiz = QuizState::new(deck, SessionOptions::from(&config));
        let sparkles = SparkleField::new(
            assets.sparkles.clone(),
            config.sparkle_count,
            config.width,
            config.height,
            false,
        );
        Self {
            quiz,
            page: ActivePage::Startup(StartupPage::new(now)),
            config,
            assets,
            sparkles,
            cursor: crate::render::Point::default(),
            started_at: now,
        }
    }

    /// The currently active page
    pub fn page(&self) -> &ActivePage {
        &self.page
    }

    /// The quiz session state
    pub fn quiz(&self) -> &QuizState {
        &self.quiz
    }

    /// Advances the game by one frame
    ///
    /// Drains `events` into the active page, runs its update step, and
    /// renders. Returns [`TickOutcome::Shutdown`] on the quit event or
    /// the escape key; otherwise the attract loop runs forever.
    pub fn tick<C: Canvas>(
        &mut self,
        canvas: &mut C,
        now: Instant,
        dt: Duration,
        events: &[InputEvent],
    ) -> TickOutcome {
        for event in events {
            match event {
                InputEvent::Quit | InputEvent::KeyDown(Key::Escape) => {
                    log::info!("shutdown requested");
                    return TickOutcome::Shutdown;
                }
                InputEvent::MouseMove(position) => {
                    self.cursor = *position;
                }
                _ => {}
            }

            let frame = Frame {
                now,
                dt,
                cursor: self.cursor,
                config: &self.config,
                assets: &self.assets,
            };
            if let Some(signal) = self.page.handle_event(event, &mut self.quiz, &frame) {
                // Remaining events and the whole render belong to a page
                // that no longer exists; drop them with it.
                self.apply(signal, now);
                return TickOutcome::Continue;
            }
        }

        self.draw_background(canvas, now);

        let frame = Frame {
            now,
            dt,
            cursor: self.cursor,
            config: &self.config,
            assets: &self.assets,
        };
        if let Some(signal) = self.page.update(&frame) {
            // The expired page must not issue any draw call this frame.
            self.apply(signal, now);
            return TickOutcome::Continue;
        }

        let frame = Frame {
            now,
            dt,
            cursor: self.cursor,
            config: &self.config,
            assets: &self.assets,
        };
        self.page.render(canvas, &self.quiz, &frame);
        TickOutcome::Continue
    }

    /// Consumes a navigation signal by constructing the next page
    fn apply(&mut self, signal: NavigationSignal, now: Instant) {
        self.page = match signal {
            NavigationSignal::GoStartup => {
                self.quiz.reset();
                ActivePage::Startup(StartupPage::new(now))
            }
            NavigationSignal::GoQuestion => {
                // Reading past the last question is the victory condition
                if self.quiz.current().is_err() {
                    return self.apply(NavigationSignal::GoVictory, now);
                }
                ActivePage::Question(QuestionPage::new())
            }
            NavigationSignal::GoVictory => {
                ActivePage::Victory(VictoryPage::new(&self.config, &self.assets, now))
            }
            NavigationSignal::GoCorrectAnswer { question, answer } => {
                ActivePage::CorrectAnswer(ResultPage::correct(question, answer, now))
            }
            NavigationSignal::GoWrongAnswer { question, answer } => {
                ActivePage::WrongAnswer(ResultPage::wrong(question, answer, now))
            }
            NavigationSignal::GoFiftyReveal { question } => {
                ActivePage::FiftyReveal(FiftyRevealPage::new(&question, &self.config, now))
            }
            NavigationSignal::GoPhoneReveal { question } => {
                ActivePage::PhoneReveal(PhoneRevealPage::new(&question, &self.config, now))
            }
            NavigationSignal::GoAudienceReveal { question } => {
                ActivePage::AudienceReveal(AudienceRevealPage::new(question, &self.config, now))
            }
        };
    }

    /// Fills the backdrop: oscillating gradient and sparkles, or flat
    fn draw_background<C: Canvas>(&mut self, canvas: &mut C, now: Instant) {
        let palette = &self.config.palette;
        let full = Rect::new(0, 0, self.config.width as i32, self.config.height as i32);

        if self.config.dynamic_background {
            let t = now.duration_since(self.started_at).as_secs_f32();
            let black = crate::render::Color::new(0, 0, 0);
            let corners = [
                anim::interp_color(
                    palette.background,
                    palette.background_alt,
                    (1.0 + (t / 2.0).sin()) / 2.0,
                ),
                anim::interp_color(black, palette.background_alt, (1.0 + (t / 3.0).cos()) / 2.0),
                anim::interp_color(palette.background, black, (1.0 + (t / 7.0).cos()) / 2.0),
                anim::interp_color(
                    palette.background,
                    palette.background_alt,
                    1.0 - (1.0 + (t / 2.5).sin()) / 2.0,
                ),
            ];
            canvas.gradient(full, corners);
            self.sparkles.advance();
            self.sparkles.draw(canvas);
        } else {
            canvas.fill(palette.background);
        }
    }
}
