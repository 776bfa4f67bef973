//! Lifeline reveal screens
//!
//! Each lifeline gets a dedicated screen shown right after it is used,
//! displaying its outcome before returning to the question. All three
//! are purely timed: they take no input and expire on their own budget.
//! Their constructors take the mutated question snapshot carried by the
//! reveal signal; constructing one before the lifeline state exists is
//! a programming error, not a recoverable condition.

use web_time::{Duration, Instant};

use crate::anim;
use crate::config::Config;
use crate::constants::deck;
use crate::constants::pages::{AUDIENCE_BARS, AUDIENCE_REVEAL, FIFTY_REVEAL, PHONE_REVEAL};
use crate::lifeline::FriendHint;
use crate::pages::{Frame, choice_letter, stack_center};
use crate::question::Question;
use crate::render::{Canvas, Color, FontSize, Rect, TextAnchor};
use crate::NavigationSignal;

/// Expires a purely timed reveal page into the question screen
fn timed_update(entered_at: Instant, budget: Duration, now: Instant) -> Option<NavigationSignal> {
    (now.duration_since(entered_at) > budget).then_some(NavigationSignal::GoQuestion)
}

/// Screen shown after the fifty-fifty lifeline
pub struct FiftyRevealPage {
    entered_at: Instant,
    lines: Vec<(String, Color)>,
}

impl FiftyRevealPage {
    /// Creates the reveal for a question with its eliminations applied
    pub fn new(question: &Question, config: &Config, now: Instant) -> Self {
        let palette = &config.palette;
        let mut lines = vec![
            ("You used the 50:50".to_owned(), palette.answer_selection),
            ("You now have the choice".to_owned(), palette.default_text),
            (
                "between these two answers".to_owned(),
                palette.default_text,
            ),
        ];
        for index in question.fifty_pair() {
            lines.push((
                format!(
                    "{} : {}",
                    choice_letter(index),
                    question.choices()[index].label()
                ),
                palette.default_text,
            ));
        }
        Self {
            entered_at: now,
            lines,
        }
    }

    /// Returns to the question once the budget has elapsed
    pub fn update(&mut self, frame: &Frame) -> Option<NavigationSignal> {
        timed_update(self.entered_at, FIFTY_REVEAL, frame.now)
    }

    /// Whether the display budget has elapsed
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.entered_at) > FIFTY_REVEAL
    }

    /// Draws the announcement stack
    pub fn render<C: Canvas>(&self, canvas: &mut C, frame: &Frame) {
        stack_center(
            canvas,
            frame,
            frame.config.height as i32 / 4,
            20,
            &self.lines,
        );
    }
}

/// Screen shown after the phone-a-friend lifeline
pub struct PhoneRevealPage {
    entered_at: Instant,
    lines: Vec<(String, Color)>,
}

impl PhoneRevealPage {
    /// Creates the reveal for a question carrying the friend's hint
    ///
    /// # Panics
    ///
    /// Panics if the question has no stored suggestion; the page is only
    /// ever built from a phone reveal signal.
    pub fn new(question: &Question, config: &Config, now: Instant) -> Self {
        let palette = &config.palette;
        let FriendHint { index, confidence } = question
            .friend_hint()
            .expect("phone reveal requires the friend's suggestion");

        let opinion = if question.is_right_answer(index) {
            "I think the answer is:"
        } else {
            "I am not sure, but maybe:"
        };
        let lines = vec![
            ("You used the phone call".to_owned(), palette.answer_selection),
            ("Your friend tells you:".to_owned(), palette.default_text),
            (opinion.to_owned(), palette.default_text),
            (
                format!("{} at {confidence}%", choice_letter(index)),
                palette.default_text,
            ),
        ];
        Self {
            entered_at: now,
            lines,
        }
    }

    /// Returns to the question once the budget has elapsed
    pub fn update(&mut self, frame: &Frame) -> Option<NavigationSignal> {
        timed_update(self.entered_at, PHONE_REVEAL, frame.now)
    }

    /// Whether the display budget has elapsed
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.entered_at) > PHONE_REVEAL
    }

    /// Draws the announcement stack
    pub fn render<C: Canvas>(&self, canvas: &mut C, frame: &Frame) {
        stack_center(
            canvas,
            frame,
            frame.config.height as i32 / 4,
            20,
            &self.lines,
        );
    }
}

/// Screen shown after the ask-the-audience lifeline
pub struct AudienceRevealPage {
    entered_at: Instant,
    question: Question,
    shares: [u8; deck::CHOICE_COUNT],
    lines: Vec<(String, Color)>,
}

impl AudienceRevealPage {
    /// Creates the reveal for a question carrying the vote distribution
    ///
    /// # Panics
    ///
    /// Panics if the question has no stored distribution; the page is
    /// only ever built from an audience reveal signal.
    pub fn new(question: Question, config: &Config, now: Instant) -> Self {
        let palette = &config.palette;
        let shares = question
            .audience_shares()
            .expect("audience reveal requires the vote distribution");
        let lines = vec![
            (
                "You used the audience vote.".to_owned(),
                palette.answer_selection,
            ),
            ("Here are the results:".to_owned(), palette.default_text),
        ];
        Self {
            entered_at: now,
            question,
            shares,
            lines,
        }
    }

    /// Returns to the question once the budget has elapsed
    pub fn update(&mut self, frame: &Frame) -> Option<NavigationSignal> {
        timed_update(self.entered_at, AUDIENCE_REVEAL, frame.now)
    }

    /// Whether the display budget has elapsed
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.entered_at) > AUDIENCE_REVEAL
    }

    /// Draws the headline and one animated bar per choice
    ///
    /// Bars grow with an ease-out over three seconds, staggered a
    /// quarter of that per row, to the width proportional to the share.
    pub fn render<C: Canvas>(&self, canvas: &mut C, frame: &Frame) {
        let palette = &frame.config.palette;
        let width = frame.config.width as i32;
        let row_height = canvas.line_height(FontSize::Big);
        let elapsed = frame.now.duration_since(self.entered_at).as_secs_f32();

        let mut y = stack_center(
            canvas,
            frame,
            frame.config.height as i32 / 4,
            10,
            &self.lines,
        );
        y += 20;

        for (index, choice) in self.question.choices().iter().enumerate() {
            canvas.text(
                &format!("{} : {}", choice_letter(index), choice.label()),
                FontSize::Big,
                palette.default_text,
                TextAnchor::TopRight { x: width / 2, y },
            );

            let full = f32::from(self.shares[index]) / 100.0 * (width as f32) / 2.0;
            let factor = anim::clamp(
                elapsed / AUDIENCE_BARS.as_secs_f32() - index as f32 / 4.0,
                0.0,
                1.0,
            );
            let bar = anim::ease_out(0.0, full, factor) as i32;
            if bar > 0 {
                canvas.fill_rounded_rect(
                    Rect::new(width / 2 + 10, y, bar, row_height),
                    0,
                    palette.default_text,
                );
            }
            y += row_height + 20;
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    use crate::question::tests::sample_question;

    fn mutated_question() -> Question {
        let mut rng = fastrand::Rng::with_seed(5);
        let mut question = sample_question(0);
        question.apply_fifty();
        question.apply_phone(&mut rng);
        question.apply_audience(&mut rng);
        question
    }

    fn frame<'a>(
        config: &'a Config,
        assets: &'a crate::render::Assets,
        now: Instant,
    ) -> Frame<'a> {
        Frame {
            now,
            dt: Duration::from_millis(16),
            cursor: crate::render::Point::new(0, 0),
            config,
            assets,
        }
    }

    fn assets() -> crate::render::Assets {
        crate::render::Assets {
            logo: crate::render::Sprite {
                id: crate::render::TextureId(1),
                width: 200,
                height: 100,
            },
            sparkles: vec![],
            confetti: vec![],
        }
    }

    #[test]
    fn test_fifty_reveal_lists_the_surviving_pair() {
        let config = Config::default();
        let question = mutated_question();
        let page = FiftyRevealPage::new(&question, &config, Instant::now());

        assert_eq!(page.lines.len(), 5);
        for index in question.fifty_pair() {
            let label = question.choices()[index].label();
            assert!(page.lines.iter().any(|(line, _)| line.contains(label)));
        }
    }

    #[test]
    fn test_phone_reveal_quotes_the_hint() {
        let config = Config::default();
        let question = mutated_question();
        let hint = question.friend_hint().expect("hint");
        let page = PhoneRevealPage::new(&question, &config, Instant::now());

        let quoted = format!("{} at {}%", choice_letter(hint.index), hint.confidence);
        assert!(page.lines.iter().any(|(line, _)| line == &quoted));
    }

    #[test]
    fn test_reveals_expire_on_their_own_budgets() {
        let config = Config::default();
        let assets = assets();
        let question = mutated_question();
        let t0 = Instant::now();

        let mut fifty = FiftyRevealPage::new(&question, &config, t0);
        let mut phone = PhoneRevealPage::new(&question, &config, t0);
        let mut audience = AudienceRevealPage::new(question, &config, t0);

        let at = |secs: u64| t0 + Duration::from_millis(secs * 1000 + 1);
        assert_eq!(
            fifty.update(&frame(&config, &assets, at(4))),
            Some(NavigationSignal::GoQuestion)
        );
        assert_eq!(phone.update(&frame(&config, &assets, at(4))), None);
        assert_eq!(
            phone.update(&frame(&config, &assets, at(5))),
            Some(NavigationSignal::GoQuestion)
        );
        assert_eq!(audience.update(&frame(&config, &assets, at(5))), None);
        assert_eq!(
            audience.update(&frame(&config, &assets, at(8))),
            Some(NavigationSignal::GoQuestion)
        );
    }

    #[test]
    #[should_panic(expected = "friend's suggestion")]
    fn test_phone_reveal_without_hint_is_a_programming_error() {
        let config = Config::default();
        let question = sample_question(0);
        let _ = PhoneRevealPage::new(&question, &config, Instant::now());
    }
}
