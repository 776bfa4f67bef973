//! Quiz session state
//!
//! [`QuizState`] owns the questions of one session, the cursor through
//! them, and the three one-shot lifeline flags. It is mutated only by
//! [`QuizState::validate_answer`] (cursor advance or full restart) and
//! the lifeline operations (flag set plus delegation to the question's
//! display mutation); everything else reads. Pages never hold borrows
//! into it, since outcomes carry owned question snapshots.

use enum_map::EnumMap;
use thiserror::Error;

use crate::NavigationSignal;
use crate::config::Config;
use crate::constants::deck::CHOICE_COUNT;
use crate::lifeline::Lifeline;
use crate::question::{Deck, Question};

/// Session build options
///
/// Carried separately from [`Config`] so the quiz model stays decoupled
/// from display concerns.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Number of questions drawn per session (`None` plays the deck)
    pub question_count: Option<usize>,
    /// Whether each question's choice order is shuffled
    pub shuffle_choices: bool,
}

impl From<&Config> for SessionOptions {
    fn from(config: &Config) -> Self {
        Self {
            question_count: config.question_count,
            shuffle_choices: config.shuffle_choices,
        }
    }
}

/// Typed control-flow outcome of reading past the last question
///
/// This is expected and frequent (it is what drives the victory
/// transition) and must not be confused with a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("all questions have been answered")]
pub struct SessionComplete;

/// Outcome of validating a picked answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerVerdict {
    /// The pick was correct; the cursor has advanced
    Correct {
        /// Snapshot of the answered question
        question: Question,
        /// Index of the picked choice
        answer: usize,
    },
    /// The pick was wrong; the cursor has reset to the first question
    Wrong {
        /// Snapshot of the answered question
        question: Question,
        /// Index of the picked choice
        answer: usize,
    },
}

impl From<AnswerVerdict> for NavigationSignal {
    fn from(verdict: AnswerVerdict) -> Self {
        match verdict {
            AnswerVerdict::Correct { question, answer } => {
                Self::GoCorrectAnswer { question, answer }
            }
            AnswerVerdict::Wrong { question, answer } => Self::GoWrongAnswer { question, answer },
        }
    }
}

/// State of one quiz session
pub struct QuizState {
    deck: Deck,
    options: SessionOptions,
    questions: Vec<Question>,
    current_index: usize,
    used: EnumMap<Lifeline, bool>,
    rng: fastrand::Rng,
}

impl QuizState {
    /// Builds a session from a validated deck
    ///
    /// Lifeline randomness comes from an unseeded source; tests that
    /// need reproducibility use [`QuizState::with_rng`].
    pub fn new(deck: Deck, options: SessionOptions) -> Self {
        Self::with_rng(deck, options, fastrand::Rng::new())
    }

    /// Builds a session with an explicit random source
    pub fn with_rng(deck: Deck, options: SessionOptions, rng: fastrand::Rng) -> Self {
        let mut state = Self {
            deck,
            options,
            questions: Vec::new(),
            current_index: 0,
            used: EnumMap::default(),
            rng,
        };
        state.rebuild();
        state
    }

    /// Rebuilds the question list from the retained deck
    fn rebuild(&mut self) {
        let mut picked: Vec<usize> = (0..self.deck.len()).collect();
        if let Some(count) = self.options.question_count {
            let count = count.min(self.deck.len());
            self.rng.shuffle(&mut picked);
            picked.truncate(count);
            picked.sort_unstable();
        }

        self.questions = picked
            .into_iter()
            .enumerate()
            .map(|(session_index, deck_index)| {
                let mut record = self.deck.records()[deck_index].clone();
                if self.options.shuffle_choices {
                    self.rng.shuffle(&mut record.choices);
                }
                Question::from_record(&record, session_index, &mut self.rng)
            })
            .collect();
        log::info!("session built with {} questions", self.questions.len());
    }

    /// Number of questions in this session
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the session holds no questions
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Cursor position, counting answered questions
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The question at the cursor
    ///
    /// # Errors
    ///
    /// Returns [`SessionComplete`] once the cursor has moved past the
    /// last question; callers map this onto the victory transition.
    pub fn current(&self) -> Result<&Question, SessionComplete> {
        self.questions.get(self.current_index).ok_or(SessionComplete)
    }

    /// Validates a picked answer against the current question
    ///
    /// Eliminated and out-of-range picks are silently ignored. A correct
    /// pick advances the cursor by one; a wrong pick resets it to the
    /// first question. The game is deliberately all-or-nothing.
    pub fn validate_answer(&mut self, answer: usize) -> Option<AnswerVerdict> {
        let question = self.current().ok()?;
        if answer >= CHOICE_COUNT || question.is_eliminated(answer) {
            return None;
        }
        let question = question.clone();
        if question.is_right_answer(answer) {
            self.current_index += 1;
            log::debug!("correct answer on question {}", question.index());
            Some(AnswerVerdict::Correct { question, answer })
        } else {
            self.current_index = 0;
            log::debug!("wrong answer on question {}, restarting", question.index());
            Some(AnswerVerdict::Wrong { question, answer })
        }
    }

    /// Whether the given lifeline has been consumed this session
    pub fn lifeline_used(&self, lifeline: Lifeline) -> bool {
        self.used[lifeline]
    }

    /// Consumes a lifeline against the current question
    ///
    /// The first invocation sets the flag, applies the effect to the
    /// current question, and returns the reveal request. Any further
    /// invocation is a pure no-op: no state change and no second reveal.
    pub fn use_lifeline(&mut self, lifeline: Lifeline) -> Option<NavigationSignal> {
        if self.used[lifeline] || self.current_index >= self.questions.len() {
            return None;
        }
        self.used[lifeline] = true;

        let question = &mut self.questions[self.current_index];
        match lifeline {
            Lifeline::Fifty => question.apply_fifty(),
            Lifeline::Phone => question.apply_phone(&mut self.rng),
            Lifeline::Audience => question.apply_audience(&mut self.rng),
        }
        log::debug!("lifeline {lifeline} used on question {}", question.index());

        let question = question.clone();
        Some(match lifeline {
            Lifeline::Fifty => NavigationSignal::GoFiftyReveal { question },
            Lifeline::Phone => NavigationSignal::GoPhoneReveal { question },
            Lifeline::Audience => NavigationSignal::GoAudienceReveal { question },
        })
    }

    /// Eliminates two wrong choices on the current question
    pub fn use_fifty(&mut self) -> Option<NavigationSignal> {
        self.use_lifeline(Lifeline::Fifty)
    }

    /// Consults the simulated friend about the current question
    pub fn use_phone(&mut self) -> Option<NavigationSignal> {
        self.use_lifeline(Lifeline::Phone)
    }

    /// Consults the simulated audience about the current question
    pub fn use_audience(&mut self) -> Option<NavigationSignal> {
        self.use_lifeline(Lifeline::Audience)
    }

    /// Starts the session over
    ///
    /// Rebuilds the question list from the retained deck with the same
    /// sampling and shuffling options, and clears the cursor and all
    /// lifeline flags. With shuffling disabled the identical question
    /// sequence is re-traversed.
    pub fn reset(&mut self) {
        log::info!("session reset");
        self.current_index = 0;
        self.used = EnumMap::default();
        self.rebuild();
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::question::tests::sample_deck;

    fn state() -> QuizState {
        QuizState::with_rng(
            sample_deck(),
            SessionOptions::default(),
            fastrand::Rng::with_seed(42),
        )
    }

    // Correct answers of the sample deck, in order
    const ANSWERS: [usize; 3] = [0, 1, 2];

    #[test]
    fn test_correct_answers_advance_cursor_by_one() {
        let mut quiz = state();
        for (step, answer) in ANSWERS.into_iter().enumerate() {
            assert_eq!(quiz.current_index(), step);
            let verdict = quiz.validate_answer(answer).expect("a verdict");
            assert!(matches!(verdict, AnswerVerdict::Correct { .. }));
            assert_eq!(quiz.current_index(), step + 1);
        }
    }

    #[test]
    fn test_happy_path_yields_three_corrects_then_completion() {
        let mut quiz = state();
        let mut corrects = 0;
        for answer in ANSWERS {
            match quiz.validate_answer(answer) {
                Some(AnswerVerdict::Correct { .. }) => corrects += 1,
                other => panic!("unexpected verdict: {other:?}"),
            }
        }
        assert_eq!(corrects, 3);
        assert_eq!(quiz.current(), Err(SessionComplete));
    }

    #[test]
    fn test_wrong_answer_resets_cursor_to_start() {
        let mut quiz = state();
        quiz.validate_answer(0).expect("correct on first question");
        assert_eq!(quiz.current_index(), 1);

        let verdict = quiz.validate_answer(0).expect("wrong on second question");
        assert!(matches!(verdict, AnswerVerdict::Wrong { .. }));
        assert_eq!(quiz.current_index(), 0);

        // Without shuffling, the same sequence is re-traversed from the top
        assert_eq!(
            quiz.current().expect("first question again").text(),
            "What does a kilowatt-hour measure?"
        );
        quiz.validate_answer(0).expect("correct on first question");
        assert_eq!(quiz.current().expect("second question").index(), 1);
    }

    #[test]
    fn test_eliminated_pick_is_ignored_entirely() {
        let mut quiz = state();
        quiz.use_fifty().expect("first use yields a reveal");
        let eliminated: Vec<usize> = (0..4)
            .filter(|&i| quiz.current().expect("question").is_eliminated(i))
            .collect();
        assert_eq!(eliminated.len(), 2);

        for i in eliminated {
            assert_eq!(quiz.validate_answer(i), None);
            assert_eq!(quiz.current_index(), 0);
        }
    }

    #[test]
    fn test_out_of_range_pick_is_ignored() {
        let mut quiz = state();
        assert_eq!(quiz.validate_answer(4), None);
        assert_eq!(quiz.validate_answer(usize::MAX), None);
        assert_eq!(quiz.current_index(), 0);
    }

    #[test]
    fn test_lifelines_are_one_shot() {
        let mut quiz = state();
        assert!(quiz.use_fifty().is_some());
        let after_first = quiz.current().expect("question").clone();

        // Second invocation: no signal, no state change
        assert_eq!(quiz.use_fifty(), None);
        assert_eq!(quiz.current().expect("question"), &after_first);
        assert!(quiz.lifeline_used(Lifeline::Fifty));

        assert!(quiz.use_phone().is_some());
        assert_eq!(quiz.use_phone(), None);
        assert!(quiz.use_audience().is_some());
        assert_eq!(quiz.use_audience(), None);
    }

    #[test]
    fn test_lifeline_flags_survive_question_changes() {
        let mut quiz = state();
        quiz.use_fifty();
        quiz.validate_answer(0);
        // Still consumed on the next question
        assert!(quiz.lifeline_used(Lifeline::Fifty));
        assert_eq!(quiz.use_fifty(), None);
    }

    #[test]
    fn test_reveal_signals_carry_the_mutated_question() {
        let mut quiz = state();
        match quiz.use_fifty() {
            Some(NavigationSignal::GoFiftyReveal { question }) => {
                let standing = (0..4).filter(|&i| !question.is_eliminated(i)).count();
                assert_eq!(standing, 2);
            }
            other => panic!("unexpected signal: {other:?}"),
        }
        match quiz.use_audience() {
            Some(NavigationSignal::GoAudienceReveal { question }) => {
                assert!(question.audience_shares().is_some());
            }
            other => panic!("unexpected signal: {other:?}"),
        }
    }

    #[test]
    fn test_reset_restores_cursor_flags_and_labels() {
        let mut quiz = state();
        quiz.use_fifty();
        quiz.validate_answer(0);
        quiz.reset();

        assert_eq!(quiz.current_index(), 0);
        assert!(!quiz.lifeline_used(Lifeline::Fifty));
        let question = quiz.current().expect("first question");
        assert!((0..4).all(|i| !question.is_eliminated(i)));
    }

    #[test]
    fn test_question_count_limits_session_length() {
        let options = SessionOptions {
            question_count: Some(2),
            shuffle_choices: false,
        };
        let quiz = QuizState::with_rng(sample_deck(), options, fastrand::Rng::with_seed(3));
        assert_eq!(quiz.len(), 2);
        // Session indices are renumbered from zero
        assert_eq!(quiz.current().expect("question").index(), 0);
    }

    #[test]
    fn test_shuffled_choices_keep_exactly_one_correct() {
        let options = SessionOptions {
            question_count: None,
            shuffle_choices: true,
        };
        let quiz = QuizState::with_rng(sample_deck(), options, fastrand::Rng::with_seed(9));
        let question = quiz.current().expect("question");
        let corrects = question.choices().iter().filter(|c| c.is_correct()).count();
        assert_eq!(corrects, 1);
        assert!(question.is_right_answer(question.correct_index()));
    }

    #[test]
    fn test_validate_after_completion_is_ignored() {
        let mut quiz = state();
        for answer in ANSWERS {
            quiz.validate_answer(answer);
        }
        assert_eq!(quiz.validate_answer(0), None);
        assert_eq!(quiz.use_fifty(), None);
    }
}
