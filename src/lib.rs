//! # Kilowatt Game Library
//!
//! This library provides the core logic for a quiz-show style game:
//! a sequence of multiple-choice questions presented full-screen, three
//! one-shot lifelines (eliminate two wrong answers, consult a simulated
//! friend, consult a simulated audience), and a page state machine with
//! timed and input-driven transitions between screens.
//!
//! The crate is deliberately headless: text rasterization, window setup
//! and asset decoding belong to the embedding application, which drives
//! [`controller::PageController::tick`] once per rendered frame and
//! implements the [`render::Canvas`] trait over its drawing backend.

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]

use serde::{Deserialize, Serialize};

pub mod anim;
pub mod config;
pub mod constants;
pub mod controller;
pub mod lifeline;
pub mod pages;
pub mod question;
pub mod quiz;
pub mod render;
pub mod sparkles;

use question::Question;
use render::Point;

/// Keys the game reacts to
///
/// Four answer-selection keys map onto choice indices 0 to 3, space skips
/// result screens, and escape requests a clean shutdown. Everything else
/// on the keyboard is ignored by the core and should not be forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// Selects the first answer choice
    A,
    /// Selects the second answer choice
    B,
    /// Selects the third answer choice
    C,
    /// Selects the fourth answer choice
    D,
    /// Skips a result screen that is still within its display budget
    Space,
    /// Requests a clean shutdown of the game loop
    Escape,
}

impl Key {
    /// Returns the answer choice index this key selects, if any
    pub fn answer_index(self) -> Option<usize> {
        match self {
            Self::A => Some(0),
            Self::B => Some(1),
            Self::C => Some(2),
            Self::D => Some(3),
            Self::Space | Self::Escape => None,
        }
    }
}

/// Mouse buttons recognized by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    /// Primary button, used to pick answers and lifelines
    Left,
    /// Secondary button, used to skip result screens
    Right,
}

/// A discrete input event handed to the controller by the frame pump
///
/// Events are drained and dispatched synchronously to the active page at
/// the start of every tick, before the per-frame update and render steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// The window manager asked the application to close
    Quit,
    /// A recognized key was pressed
    KeyDown(Key),
    /// The pointer moved to a new position
    MouseMove(Point),
    /// A mouse button was pressed
    MouseButtonDown {
        /// Pointer position at the time of the press
        position: Point,
        /// Which button was pressed
        button: MouseButton,
    },
}

/// A request to switch the active page
///
/// Pages return a signal from their event or update handlers instead of
/// performing the transition themselves; the controller consumes each
/// signal exactly once and constructs the next page from its payload.
/// Payloads carry owned question snapshots so pages never hold borrows
/// into the quiz state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationSignal {
    /// Reset the session and show the startup screen
    GoStartup,
    /// Show the current question (or victory, if the session is complete)
    GoQuestion,
    /// Show the victory screen
    GoVictory,
    /// The picked answer was correct
    GoCorrectAnswer {
        /// The question that was answered
        question: Question,
        /// Index of the picked choice
        answer: usize,
    },
    /// The picked answer was wrong
    GoWrongAnswer {
        /// The question that was answered
        question: Question,
        /// Index of the picked choice
        answer: usize,
    },
    /// The fifty-fifty lifeline was just used
    GoFiftyReveal {
        /// The question with two choices now eliminated
        question: Question,
    },
    /// The phone-a-friend lifeline was just used
    GoPhoneReveal {
        /// The question carrying the friend's suggestion
        question: Question,
    },
    /// The ask-the-audience lifeline was just used
    GoAudienceReveal {
        /// The question carrying the audience distribution
        question: Question,
    },
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_answer_keys_map_to_choice_indices() {
        assert_eq!(Key::A.answer_index(), Some(0));
        assert_eq!(Key::B.answer_index(), Some(1));
        assert_eq!(Key::C.answer_index(), Some(2));
        assert_eq!(Key::D.answer_index(), Some(3));
    }

    #[test]
    fn test_control_keys_select_no_answer() {
        assert_eq!(Key::Space.answer_index(), None);
        assert_eq!(Key::Escape.answer_index(), None);
    }
}
