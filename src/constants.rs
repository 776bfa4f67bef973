//! Configuration constants for the kilowatt game system
//!
//! This module contains the limits, markers and timing budgets used
//! throughout the game core: deck validation bounds, lifeline bias
//! ranges, and the fixed display budget of every page variant.

/// Question deck configuration constants
pub mod deck {
    /// Number of answer choices every question must carry
    pub const CHOICE_COUNT: usize = 4;
    /// Maximum number of questions allowed in a deck
    pub const MAX_QUESTIONS: usize = 100;
    /// Maximum length of a question text in characters
    pub const MAX_QUESTION_LENGTH: usize = 200;
    /// Maximum length of a choice label in characters
    pub const MAX_CHOICE_LENGTH: usize = 100;
}

/// Lifeline bias ranges and display markers
pub mod lifelines {
    /// Label an eliminated choice is replaced with
    pub const ELIMINATED_MARKER: &str = "---";
    /// Lowest confidence the friend reports for a correct suggestion
    pub const FRIEND_CONFIDENT_MIN: u8 = 40;
    /// Highest confidence the friend reports for a correct suggestion
    pub const FRIEND_CONFIDENT_MAX: u8 = 100;
    /// Lowest confidence the friend reports for a wrong suggestion
    pub const FRIEND_UNSURE_MIN: u8 = 0;
    /// Highest confidence the friend reports for a wrong suggestion
    pub const FRIEND_UNSURE_MAX: u8 = 70;
    /// Lowest audience share awarded to the correct choice
    pub const AUDIENCE_CORRECT_MIN: u8 = 40;
    /// Highest audience share awarded to the correct choice
    pub const AUDIENCE_CORRECT_MAX: u8 = 90;
}

/// Per-page display budgets and animation timings
pub mod pages {
    use web_time::Duration;

    /// How long the startup screen animates before handing off to the
    /// first question once the player has pressed something
    pub const STARTUP_HANDOFF: Duration = Duration::from_millis(2500);
    /// Display budget of the correct-answer screen
    pub const CORRECT_ANSWER: Duration = Duration::from_secs(4);
    /// Display budget of the wrong-answer screen
    pub const WRONG_ANSWER: Duration = Duration::from_secs(8);
    /// Delay before the wrong-answer screen strikes the picked choice
    /// and reveals the correct one
    pub const WRONG_ANSWER_REVEAL_DELAY: Duration = Duration::from_secs(2);
    /// Display budget of the fifty-fifty reveal screen
    pub const FIFTY_REVEAL: Duration = Duration::from_secs(4);
    /// Display budget of the phone-a-friend reveal screen
    pub const PHONE_REVEAL: Duration = Duration::from_secs(5);
    /// Display budget of the ask-the-audience reveal screen
    pub const AUDIENCE_REVEAL: Duration = Duration::from_secs(8);
    /// Display budget of the victory screen
    pub const VICTORY: Duration = Duration::from_secs(10);
    /// Duration of the title drop-in animation shared by several pages
    pub const TITLE_DROP: Duration = Duration::from_secs(2);
    /// Duration of the staggered audience bar growth animation
    pub const AUDIENCE_BARS: Duration = Duration::from_secs(3);
}

/// Display configuration bounds
pub mod display {
    /// Minimum window dimension in pixels
    pub const MIN_WINDOW_DIMENSION: u32 = 320;
    /// Maximum window dimension in pixels
    pub const MAX_WINDOW_DIMENSION: u32 = 7680;
    /// Maximum number of background sparkles
    pub const MAX_SPARKLE_COUNT: usize = 1000;
    /// Number of confetti particles on the victory screen
    pub const CONFETTI_COUNT: usize = 300;
    /// Maximum number of reward ladder tiers
    pub const MAX_REWARD_TIERS: usize = 20;
    /// Maximum length of a reward tier label in characters
    pub const MAX_REWARD_LABEL_LENGTH: usize = 40;
}
