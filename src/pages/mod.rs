//! Page variants and their shared drawing helpers
//!
//! Every screen of the game is a page: a struct owning nothing but its
//! own animation clocks and question snapshot, polymorphic over exactly
//! four capabilities (handle an input event, run the per-frame update
//! step, render, report expiry). The controller dispatches over the
//! [`ActivePage`] enum; shared helpers like the title drop-in and the
//! centered text stack are free functions used by composition, not a
//! base page.
//!
//! Timing contracts are part of the core: a page's update step returns
//! the navigation signal that ends its display window, and the
//! controller guarantees no further draw calls happen for that page in
//! the same tick.

pub mod lifeline;
pub mod question;
pub mod results;
pub mod startup;
pub mod victory;

use web_time::{Duration, Instant};

use crate::config::Config;
use crate::quiz::QuizState;
use crate::render::{Assets, Canvas, Color, FontSize, Point, TextAnchor};
use crate::{InputEvent, NavigationSignal, anim};

pub use lifeline::{AudienceRevealPage, FiftyRevealPage, PhoneRevealPage};
pub use question::QuestionPage;
pub use results::ResultPage;
pub use startup::StartupPage;
pub use victory::VictoryPage;

/// Per-tick context lent to the active page
///
/// Bundles the frame pump's clock with the immutable collaborators a
/// page may read while handling events or rendering.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Wall time of this tick
    pub now: Instant,
    /// Time elapsed since the previous tick
    pub dt: Duration,
    /// Last known pointer position, for hover highlights
    pub cursor: Point,
    /// Game configuration
    pub config: &'a Config,
    /// Texture bundle built at startup
    pub assets: &'a Assets,
}

/// Animation progress through a window of the given duration, in 0 to 1
pub(crate) fn progress(start: Instant, now: Instant, duration: Duration) -> f32 {
    anim::clamp(
        now.duration_since(start).as_secs_f32() / duration.as_secs_f32(),
        0.0,
        1.0,
    )
}

/// Draws a big line of text easing down from above the screen
///
/// Shared by the startup welcome and both result screens: the line
/// starts off-screen and settles at the upper quarter.
pub(crate) fn drop_in_title<C: Canvas>(
    canvas: &mut C,
    frame: &Frame,
    text: &str,
    color: Color,
    start: Instant,
) {
    let height = canvas.line_height(FontSize::Big);
    let src_y = -2 * height;
    let target_y = (frame.config.height as i32 / 2 - height) / 2;
    let factor = progress(start, frame.now, crate::constants::pages::TITLE_DROP);
    let y = anim::ease_out(src_y as f32, target_y as f32, factor) as i32;
    canvas.text(
        text,
        FontSize::Big,
        color,
        TextAnchor::TopCenter {
            x: frame.config.width as i32 / 2,
            y,
        },
    );
}

/// Draws lines of text stacked vertically, centered horizontally
///
/// Returns the y coordinate below the last line, so callers can keep
/// stacking other content underneath.
pub(crate) fn stack_center<C: Canvas>(
    canvas: &mut C,
    frame: &Frame,
    mut y: i32,
    gap: i32,
    lines: &[(String, Color)],
) -> i32 {
    let height = canvas.line_height(FontSize::Big);
    for (text, color) in lines {
        canvas.text(
            text,
            FontSize::Big,
            *color,
            TextAnchor::TopCenter {
                x: frame.config.width as i32 / 2,
                y,
            },
        );
        y += height + gap;
    }
    y
}

/// Letter shown next to an answer choice (A to D)
pub(crate) fn choice_letter(index: usize) -> char {
    char::from(b'A' + index as u8)
}

/// The currently displayed screen
///
/// Construction happens exclusively in the controller, as the reaction
/// to a consumed [`NavigationSignal`].
pub enum ActivePage {
    /// Attract screen waiting for a player
    Startup(StartupPage),
    /// A question with its answers and lifeline buttons
    Question(QuestionPage),
    /// Correct-answer acknowledgement
    CorrectAnswer(ResultPage),
    /// Wrong-answer acknowledgement with the punitive restart
    WrongAnswer(ResultPage),
    /// Fifty-fifty reveal
    FiftyReveal(FiftyRevealPage),
    /// Phone-a-friend reveal
    PhoneReveal(PhoneRevealPage),
    /// Ask-the-audience reveal
    AudienceReveal(AudienceRevealPage),
    /// End-of-session celebration
    Victory(VictoryPage),
}

impl ActivePage {
    /// Dispatches an input event to the page
    ///
    /// Returns a navigation signal if the event ends this page's display;
    /// the controller must stop dispatching further events to it.
    pub fn handle_event(
        &mut self,
        event: &InputEvent,
        quiz: &mut QuizState,
        frame: &Frame,
    ) -> Option<NavigationSignal> {
        match self {
            Self::Startup(page) => page.handle_event(event, frame),
            Self::Question(page) => page.handle_event(event, quiz, frame),
            Self::CorrectAnswer(page) | Self::WrongAnswer(page) => page.handle_event(event),
            Self::FiftyReveal(_) | Self::PhoneReveal(_) | Self::AudienceReveal(_) | Self::Victory(_) => {
                None
            }
        }
    }

    /// Runs the page's per-frame update step
    ///
    /// This is where timed auto-transitions fire. A returned signal
    /// aborts the remaining work of the tick: the controller issues no
    /// draw call for this page afterwards.
    pub fn update(&mut self, frame: &Frame) -> Option<NavigationSignal> {
        match self {
            Self::Startup(page) => page.update(frame),
            Self::Question(_) => None,
            Self::CorrectAnswer(page) | Self::WrongAnswer(page) => page.update(frame),
            Self::FiftyReveal(page) => page.update(frame),
            Self::PhoneReveal(page) => page.update(frame),
            Self::AudienceReveal(page) => page.update(frame),
            Self::Victory(page) => page.update(frame),
        }
    }

    /// Draws the page
    pub fn render<C: Canvas>(&mut self, canvas: &mut C, quiz: &QuizState, frame: &Frame) {
        match self {
            Self::Startup(page) => page.render(canvas, frame),
            Self::Question(page) => page.render(canvas, quiz, frame),
            Self::CorrectAnswer(page) | Self::WrongAnswer(page) => page.render(canvas, frame),
            Self::FiftyReveal(page) => page.render(canvas, frame),
            Self::PhoneReveal(page) => page.render(canvas, frame),
            Self::AudienceReveal(page) => page.render(canvas, frame),
            Self::Victory(page) => page.render(canvas, frame),
        }
    }

    /// Whether the page has outlived its display budget
    ///
    /// Pages that wait indefinitely for input (the question screen, the
    /// startup screen before its handoff is armed) never expire.
    pub fn is_expired(&self, now: Instant) -> bool {
        match self {
            Self::Startup(page) => page.is_expired(now),
            Self::Question(_) => false,
            Self::CorrectAnswer(page) | Self::WrongAnswer(page) => page.is_expired(now),
            Self::FiftyReveal(page) => page.is_expired(now),
            Self::PhoneReveal(page) => page.is_expired(now),
            Self::AudienceReveal(page) => page.is_expired(now),
            Self::Victory(page) => page.is_expired(now),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_progress_clamps_to_unit_interval() {
        let start = Instant::now();
        assert_eq!(progress(start, start, Duration::from_secs(2)), 0.0);
        assert_eq!(
            progress(start, start + Duration::from_secs(1), Duration::from_secs(2)),
            0.5
        );
        assert_eq!(
            progress(start, start + Duration::from_secs(5), Duration::from_secs(2)),
            1.0
        );
    }

    #[test]
    fn test_choice_letters() {
        assert_eq!(choice_letter(0), 'A');
        assert_eq!(choice_letter(3), 'D');
    }
}
