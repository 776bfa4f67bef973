//! Question model and deck loading
//!
//! The on-disk deck is a YAML list of question records; records are
//! validated once at load time and kept for the lifetime of the process
//! so a session reset never re-reads the disk. A [`Question`] is the
//! runtime shape of one record: structurally immutable (four choices,
//! one correct) but mutable in display state as lifelines mark
//! eliminations and append annotations to labels.

use garde::Validate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{deck, lifelines};
use crate::lifeline::{self, FriendHint};

/// On-disk record of a single answer choice
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChoiceRecord {
    /// Display label of the choice
    #[garde(length(min = 1, max = deck::MAX_CHOICE_LENGTH))]
    pub txt: String,
    /// Whether this choice is the correct one (defaults to false)
    #[serde(default)]
    #[garde(skip)]
    pub correct: bool,
}

/// On-disk record of a single question
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuestionRecord {
    /// The question text
    #[garde(length(min = 1, max = deck::MAX_QUESTION_LENGTH))]
    pub question: String,
    /// The answer choices, exactly four of them
    #[garde(dive)]
    pub choices: Vec<ChoiceRecord>,
}

/// Faults raised while loading a question deck
///
/// All of these abort session setup: the deck is trusted afterwards and
/// no operation during normal play is expected to fault.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The document is not valid YAML for the deck shape
    #[error("failed to parse question deck: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// The deck contains no questions at all
    #[error("question deck is empty")]
    Empty,
    /// A question does not carry exactly four choices
    #[error("question {index} has {found} choices, expected exactly 4")]
    ChoiceCount {
        /// Index of the offending record
        index: usize,
        /// Number of choices it carries
        found: usize,
    },
    /// A question marks no choice as correct
    #[error("question {index} marks no choice as correct")]
    MissingCorrect {
        /// Index of the offending record
        index: usize,
    },
    /// A question marks more than one choice as correct
    #[error("question {index} marks more than one choice as correct")]
    AmbiguousCorrect {
        /// Index of the offending record
        index: usize,
    },
    /// A record violates a length bound
    #[error("invalid question deck: {0}")]
    Invalid(#[from] garde::Report),
}

/// A validated, immutable list of question records
///
/// The deck is the trusted source a session is built from. Validation is
/// all-up-front: wrong choice counts and zero or multiple correct marks
/// are load-time faults rather than silently defaulting to the first
/// choice.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(transparent)]
pub struct Deck {
    #[garde(length(min = 1, max = deck::MAX_QUESTIONS), dive)]
    records: Vec<QuestionRecord>,
}

impl Deck {
    /// Parses and validates a YAML deck document
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] when the document cannot be parsed, when it
    /// is empty, when a record's choice count is not exactly four, or
    /// when a record marks zero or several choices as correct.
    pub fn from_yaml(source: &str) -> Result<Self, LoadError> {
        let deck: Self = serde_yaml::from_str(source)?;
        if deck.records.is_empty() {
            return Err(LoadError::Empty);
        }
        for (index, record) in deck.records.iter().enumerate() {
            if record.choices.len() != deck::CHOICE_COUNT {
                return Err(LoadError::ChoiceCount {
                    index,
                    found: record.choices.len(),
                });
            }
            match record.choices.iter().filter(|c| c.correct).count() {
                0 => return Err(LoadError::MissingCorrect { index }),
                1 => {}
                _ => return Err(LoadError::AmbiguousCorrect { index }),
            }
        }
        deck.validate()?;
        Ok(deck)
    }

    /// The validated records, in document order
    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    /// Number of questions in the deck
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the deck holds no questions
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A single answer choice at runtime
///
/// The label is display state and mutates as lifelines annotate or
/// eliminate it; correctness is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    label: String,
    correct: bool,
}

impl Choice {
    /// Current display label, including any lifeline annotations
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether this choice is the correct one
    pub fn is_correct(&self) -> bool {
        self.correct
    }
}

/// A question as presented during a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Position of this question within the session
    index: usize,
    text: String,
    choices: [Choice; deck::CHOICE_COUNT],
    correct_index: usize,
    /// The two indices fifty-fifty leaves standing, correct one included
    fifty_pair: [usize; 2],
    friend_hint: Option<FriendHint>,
    audience_shares: Option<[u8; deck::CHOICE_COUNT]>,
}

impl Question {
    /// Builds the runtime question from a validated record
    ///
    /// The fifty-fifty survivor pair is drawn here, at construction
    /// time, so using the lifeline later involves no further choice.
    ///
    /// # Panics
    ///
    /// Panics if the record was not validated by [`Deck::from_yaml`]
    /// (wrong choice count or no correct mark).
    pub fn from_record(record: &QuestionRecord, index: usize, rng: &mut fastrand::Rng) -> Self {
        let choices: [Choice; deck::CHOICE_COUNT] = record
            .choices
            .iter()
            .map(|c| Choice {
                label: c.txt.clone(),
                correct: c.correct,
            })
            .collect_vec()
            .try_into()
            .expect("validated records carry exactly four choices");
        let correct_index = choices
            .iter()
            .position(Choice::is_correct)
            .expect("validated records mark one choice as correct");
        Self {
            index,
            text: record.question.clone(),
            choices,
            correct_index,
            fifty_pair: lifeline::fifty_pair(correct_index, rng),
            friend_hint: None,
            audience_shares: None,
        }
    }

    /// Position of this question within the session
    pub fn index(&self) -> usize {
        self.index
    }

    /// The question text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The answer choices in presentation order
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Index of the correct choice
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// The two indices that survive fifty-fifty, in ascending order
    pub fn fifty_pair(&self) -> [usize; 2] {
        self.fifty_pair
    }

    /// The friend's suggestion, if the phone lifeline has been used
    pub fn friend_hint(&self) -> Option<FriendHint> {
        self.friend_hint
    }

    /// The audience distribution, if the audience lifeline has been used
    pub fn audience_shares(&self) -> Option<[u8; deck::CHOICE_COUNT]> {
        self.audience_shares
    }

    /// Whether the given choice picks the correct answer
    pub fn is_right_answer(&self, answer: usize) -> bool {
        answer == self.correct_index
    }

    /// Whether the given choice has been eliminated by fifty-fifty
    pub fn is_eliminated(&self, answer: usize) -> bool {
        self.choices
            .get(answer)
            .is_some_and(|c| c.label == lifelines::ELIMINATED_MARKER)
    }

    fn eliminated_mask(&self) -> [bool; deck::CHOICE_COUNT] {
        core::array::from_fn(|i| self.is_eliminated(i))
    }

    /// Marks the two choices outside the fifty-fifty pair as eliminated
    ///
    /// Calling this again after the marks are in place changes nothing.
    pub fn apply_fifty(&mut self) {
        for (i, choice) in self.choices.iter_mut().enumerate() {
            if !self.fifty_pair.contains(&i) {
                choice.label = lifelines::ELIMINATED_MARKER.to_owned();
            }
        }
    }

    /// Draws and stores the friend's suggestion, annotating its label
    ///
    /// A second call is a no-op: the suggestion is set at most once.
    pub fn apply_phone(&mut self, rng: &mut fastrand::Rng) {
        if self.friend_hint.is_some() {
            return;
        }
        let hint = lifeline::friend_hint(self.correct_index, self.eliminated_mask(), rng);
        self.choices[hint.index].label += &format!(" \u{2706}:{}%", hint.confidence);
        self.friend_hint = Some(hint);
    }

    /// Draws and stores the audience vote, annotating surviving labels
    ///
    /// A second call is a no-op: the distribution is set at most once.
    pub fn apply_audience(&mut self, rng: &mut fastrand::Rng) {
        if self.audience_shares.is_some() {
            return;
        }
        let shares = lifeline::audience_shares(self.correct_index, self.eliminated_mask(), rng);
        for (i, choice) in self.choices.iter_mut().enumerate() {
            if choice.label != lifelines::ELIMINATED_MARKER {
                choice.label += &format!(" {}%", shares[i]);
            }
        }
        self.audience_shares = Some(shares);
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
pub(crate) mod tests {
    use super::*;

    pub(crate) const DECK_YAML: &str = "\
- question: \"What does a kilowatt-hour measure?\"
  choices:
    - txt: \"Energy\"
      correct: true
    - txt: \"Power\"
    - txt: \"Voltage\"
    - txt: \"Current\"
- question: \"Which unit measures electrical resistance?\"
  choices:
    - txt: \"Volt\"
    - txt: \"Ohm\"
      correct: true
    - txt: \"Ampere\"
    - txt: \"Farad\"
- question: \"What carries charge through a copper wire?\"
  choices:
    - txt: \"Protons\"
    - txt: \"Neutrons\"
    - txt: \"Electrons\"
      correct: true
    - txt: \"Photons\"
";

    pub(crate) fn sample_deck() -> Deck {
        Deck::from_yaml(DECK_YAML).expect("sample deck is valid")
    }

    pub(crate) fn sample_question(index: usize) -> Question {
        let deck = sample_deck();
        let mut rng = fastrand::Rng::with_seed(7);
        Question::from_record(&deck.records()[index], index, &mut rng)
    }

    #[test]
    fn test_deck_loads_and_derives_correct_index() {
        let deck = sample_deck();
        assert_eq!(deck.len(), 3);

        let question = sample_question(1);
        assert_eq!(question.correct_index(), 1);
        assert_eq!(question.text(), "Which unit measures electrical resistance?");
        assert!(question.is_right_answer(1));
        assert!(!question.is_right_answer(0));
    }

    #[test]
    fn test_deck_rejects_wrong_choice_count() {
        let source = "\
- question: \"Too few?\"
  choices:
    - txt: \"Yes\"
      correct: true
    - txt: \"No\"
";
        assert!(matches!(
            Deck::from_yaml(source),
            Err(LoadError::ChoiceCount { index: 0, found: 2 })
        ));
    }

    #[test]
    fn test_deck_rejects_missing_correct_mark() {
        let source = "\
- question: \"Which?\"
  choices:
    - txt: \"A\"
    - txt: \"B\"
    - txt: \"C\"
    - txt: \"D\"
";
        assert!(matches!(
            Deck::from_yaml(source),
            Err(LoadError::MissingCorrect { index: 0 })
        ));
    }

    #[test]
    fn test_deck_rejects_ambiguous_correct_marks() {
        let source = "\
- question: \"Which?\"
  choices:
    - txt: \"A\"
      correct: true
    - txt: \"B\"
      correct: true
    - txt: \"C\"
    - txt: \"D\"
";
        assert!(matches!(
            Deck::from_yaml(source),
            Err(LoadError::AmbiguousCorrect { index: 0 })
        ));
    }

    #[test]
    fn test_deck_rejects_empty_document() {
        assert!(matches!(Deck::from_yaml("[]"), Err(LoadError::Empty)));
    }

    #[test]
    fn test_fifty_marks_exactly_two_and_spares_correct() {
        let mut question = sample_question(0);
        question.apply_fifty();

        let standing: Vec<usize> = (0..4).filter(|&i| !question.is_eliminated(i)).collect();
        assert_eq!(standing.len(), 2);
        assert!(standing.contains(&question.correct_index()));
        assert_eq!(standing, question.fifty_pair().to_vec());

        // Re-applying changes nothing
        let before = question.clone();
        question.apply_fifty();
        assert_eq!(question, before);
    }

    #[test]
    fn test_phone_annotates_label_and_sets_hint_once() {
        let mut rng = fastrand::Rng::with_seed(11);
        let mut question = sample_question(0);
        question.apply_phone(&mut rng);

        let hint = question.friend_hint().expect("hint stored");
        assert!(
            question.choices()[hint.index]
                .label()
                .contains(&format!("{}%", hint.confidence))
        );

        let before = question.clone();
        question.apply_phone(&mut rng);
        assert_eq!(question, before);
    }

    #[test]
    fn test_audience_annotates_surviving_labels_only() {
        let mut rng = fastrand::Rng::with_seed(13);
        let mut question = sample_question(2);
        question.apply_fifty();
        question.apply_audience(&mut rng);

        let shares = question.audience_shares().expect("shares stored");
        for (i, choice) in question.choices().iter().enumerate() {
            if question.is_eliminated(i) {
                assert_eq!(shares[i], 0);
                assert_eq!(choice.label(), "---");
            } else {
                assert!(choice.label().ends_with(&format!(" {}%", shares[i])));
            }
        }

        let before = question.clone();
        question.apply_audience(&mut rng);
        assert_eq!(question, before);
    }
}
