//! Correct-answer and wrong-answer screens
//!
//! Both acknowledgement screens share one page type differing in title,
//! budget and exit signal: a correct answer returns to the next
//! question after four seconds, a wrong one restarts the whole session
//! after eight. Space or a right click skips the wait. The wrong-answer
//! screen holds the reveal back for two seconds before striking the
//! pick and showing what the correct answer was.

use web_time::{Duration, Instant};

use crate::constants::pages::{CORRECT_ANSWER, WRONG_ANSWER, WRONG_ANSWER_REVEAL_DELAY};
use crate::pages::{Frame, drop_in_title};
use crate::question::Question;
use crate::render::{Canvas, FontSize, Point, Rect, TextAnchor};
use crate::{InputEvent, Key, MouseButton, NavigationSignal};

/// Which way the answer went
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    Correct,
    Wrong,
}

/// Acknowledgement screen for a validated answer
pub struct ResultPage {
    verdict: Verdict,
    question: Question,
    answer: usize,
    entered_at: Instant,
    budget: Duration,
}

impl ResultPage {
    /// Creates the screen celebrating a correct answer
    pub fn correct(question: Question, answer: usize, now: Instant) -> Self {
        Self {
            verdict: Verdict::Correct,
            question,
            answer,
            entered_at: now,
            budget: CORRECT_ANSWER,
        }
    }

    /// Creates the screen announcing a wrong answer and the restart
    pub fn wrong(question: Question, answer: usize, now: Instant) -> Self {
        Self {
            verdict: Verdict::Wrong,
            question,
            answer,
            entered_at: now,
            budget: WRONG_ANSWER,
        }
    }

    /// The transition this screen ends with, skipped or not
    fn exit_signal(&self) -> NavigationSignal {
        match self.verdict {
            Verdict::Correct => NavigationSignal::GoQuestion,
            Verdict::Wrong => NavigationSignal::GoStartup,
        }
    }

    /// Space or a right click skips the remaining display time
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<NavigationSignal> {
        let skip = matches!(event, InputEvent::KeyDown(Key::Space))
            || matches!(
                event,
                InputEvent::MouseButtonDown {
                    button: MouseButton::Right,
                    ..
                }
            );
        skip.then(|| self.exit_signal())
    }

    /// Fires the exit transition once the display budget has elapsed
    pub fn update(&mut self, frame: &Frame) -> Option<NavigationSignal> {
        self.is_expired(frame.now).then(|| self.exit_signal())
    }

    /// Whether the display budget has elapsed
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.entered_at) > self.budget
    }

    /// Draws the verdict title, the question, the pick and extras
    pub fn render<C: Canvas>(&self, canvas: &mut C, frame: &Frame) {
        let palette = &frame.config.palette;
        let width = frame.config.width as i32;
        let height = frame.config.height as i32;

        let (title, title_color) = match self.verdict {
            Verdict::Correct => ("Correct answer!", palette.good_text),
            Verdict::Wrong => ("Wrong answer!", palette.bad_text),
        };
        drop_in_title(canvas, frame, title, title_color, self.entered_at);

        canvas.text(
            self.question.text(),
            FontSize::Normal,
            palette.question_text,
            TextAnchor::TopCenter {
                x: width / 2,
                y: (height as f32 * 0.4) as i32,
            },
        );

        let picked = self.question.choices()[self.answer].label();
        canvas.text(
            picked,
            FontSize::Normal,
            palette.answer_line,
            TextAnchor::TopCenter {
                x: width / 2,
                y: height / 2,
            },
        );

        match self.verdict {
            Verdict::Correct => self.draw_rewards(canvas, frame),
            Verdict::Wrong => {
                let since_entry = frame.now.duration_since(self.entered_at);
                if since_entry > WRONG_ANSWER_REVEAL_DELAY {
                    self.draw_correction(canvas, frame, picked);
                }
            }
        }
    }

    /// Strikes the picked label and shows the correct answer below it
    fn draw_correction<C: Canvas>(&self, canvas: &mut C, frame: &Frame, picked: &str) {
        let palette = &frame.config.palette;
        let width = frame.config.width as i32;
        let height = frame.config.height as i32;
        let picked_width = canvas.text_width(picked, FontSize::Normal);
        let line_height = canvas.line_height(FontSize::Normal);

        canvas.line(
            Point::new((width - picked_width) / 2, height / 2 + line_height),
            Point::new((width + picked_width) / 2, height / 2),
            8,
            palette.bad_text,
        );

        let correct = self.question.choices()[self.question.correct_index()].label();
        canvas.text(
            correct,
            FontSize::Normal,
            palette.good_text,
            TextAnchor::TopCenter {
                x: width / 2,
                y: height / 2 + line_height * 3 / 2,
            },
        );
    }

    /// Draws the reward ladder with the reached tier outlined
    fn draw_rewards<C: Canvas>(&self, canvas: &mut C, frame: &Frame) {
        let palette = &frame.config.palette;
        let line_height = canvas.line_height(FontSize::Small);
        let mut y = (frame.config.height as f32 * 0.9) as i32;

        for (tier_index, tier) in frame.config.rewards.iter().enumerate() {
            let color = if tier.milestone {
                palette.answer_selection
            } else {
                palette.default_text
            };
            canvas.text(
                &tier.label,
                FontSize::Small,
                color,
                TextAnchor::TopLeft(Point::new(10, y)),
            );
            if tier_index == self.question.index() {
                let label_width = canvas.text_width(&tier.label, FontSize::Small);
                canvas.stroke_rounded_rect(
                    Rect::new(0, y - 2, label_width + 20, line_height + 4),
                    0,
                    2,
                    color,
                );
            }
            y -= line_height + 10;
        }
    }
}
