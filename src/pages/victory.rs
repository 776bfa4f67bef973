//! Victory screen
//!
//! Celebration shown once the cursor moves past the last question:
//! falling confetti and a congratulation stack, held for ten seconds
//! before the attract loop starts over. The confetti field is owned by
//! the page so every victory replays the identical shower.

use web_time::Instant;

use crate::NavigationSignal;
use crate::config::Config;
use crate::constants::display::CONFETTI_COUNT;
use crate::constants::pages::VICTORY;
use crate::pages::{Frame, stack_center};
use crate::render::{Assets, Canvas, Color};
use crate::sparkles::SparkleField;

/// The end-of-session celebration screen
pub struct VictoryPage {
    entered_at: Instant,
    confetti: SparkleField,
    lines: Vec<(String, Color)>,
}

impl VictoryPage {
    /// Creates the victory screen with its confetti shower
    pub fn new(config: &Config, assets: &Assets, now: Instant) -> Self {
        let palette = &config.palette;
        let lines = vec![
            (
                "Congratulations! You won!".to_owned(),
                palette.good_text,
            ),
            (
                "You answered every question".to_owned(),
                palette.default_text,
            ),
            ("on the board correctly.".to_owned(), palette.default_text),
            (String::new(), palette.default_text),
            (
                "A new game starts shortly.".to_owned(),
                palette.answer_selection,
            ),
        ];
        Self {
            entered_at: now,
            confetti: SparkleField::new(
                assets.confetti.clone(),
                CONFETTI_COUNT,
                config.width,
                config.height,
                true,
            ),
            lines,
        }
    }

    /// Loops back to the startup screen once the budget has elapsed
    pub fn update(&mut self, frame: &Frame) -> Option<NavigationSignal> {
        self.is_expired(frame.now)
            .then_some(NavigationSignal::GoStartup)
    }

    /// Whether the display budget has elapsed
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.entered_at) > VICTORY
    }

    /// Advances the confetti and draws the congratulation stack
    pub fn render<C: Canvas>(&mut self, canvas: &mut C, frame: &Frame) {
        self.confetti.advance();
        self.confetti.draw(canvas);
        stack_center(
            canvas,
            frame,
            frame.config.height as i32 / 4,
            10,
            &self.lines,
        );
    }
}
