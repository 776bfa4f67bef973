//! Game configuration
//!
//! Everything the embedder may tune lives here: window dimensions, the
//! color palette, section layout spans, the sparkle count, the cosmetic
//! reward ladder, and the session options (questions per session, choice
//! shuffling). Configuration is plain serde data validated with `garde`
//! against the bounds in [`crate::constants`]; page timing budgets are
//! deliberately not configurable.

use garde::Validate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{deck, display};
use crate::render::Color;

/// Colors used by every page
///
/// Names follow the roles in the layout rather than hues, so a palette
/// swap retheme does not touch any page code.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Palette {
    /// First background gradient color
    pub background: Color,
    /// Second background gradient color
    pub background_alt: Color,
    /// Default text color
    pub default_text: Color,
    /// Question text color
    pub question_text: Color,
    /// Text color for correct answers and congratulation lines
    pub good_text: Color,
    /// Text color for wrong answers and strike-outs
    pub bad_text: Color,
    /// Cartouche outline color
    pub answer_line: Color,
    /// Cartouche fill color when hovered or highlighted
    pub answer_selection: Color,
    /// Cartouche fill color at rest
    pub answer_background: Color,
    /// Text color of a hovered answer label
    pub hover_text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::new(30, 32, 64),
            background_alt: Color::new(64, 32, 40),
            default_text: Color::new(255, 255, 255),
            question_text: Color::new(255, 255, 0),
            good_text: Color::new(100, 150, 10),
            bad_text: Color::new(200, 30, 30),
            answer_line: Color::new(200, 200, 200),
            answer_selection: Color::new(255, 165, 0),
            answer_background: Color::new(20, 22, 48),
            hover_text: Color::new(0, 0, 255),
        }
    }
}

/// Section heights and spans of the question screen layout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct Layout {
    /// Height of the question cartouche
    #[garde(range(min = 40, max = 400))]
    pub question_height: i32,
    /// Horizontal inset of the question cartouche
    #[garde(range(min = 0, max = 200))]
    pub question_span: i32,
    /// Vertical space reserved above each answer row
    #[garde(range(min = 40, max = 400))]
    pub answer_height: i32,
    /// Horizontal inset of each answer cartouche
    #[garde(range(min = 0, max = 200))]
    pub answer_span: i32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            question_height: 100,
            question_span: 50,
            answer_height: 100,
            answer_span: 40,
        }
    }
}

/// One rung of the cosmetic reward ladder
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RewardTier {
    /// Label shown on the ladder
    #[garde(length(max = display::MAX_REWARD_LABEL_LENGTH))]
    pub label: String,
    /// Whether this tier is a highlighted milestone
    #[garde(skip)]
    pub milestone: bool,
}

impl RewardTier {
    fn new(label: &str, milestone: bool) -> Self {
        Self {
            label: label.to_owned(),
            milestone,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Config {
    /// Window width in pixels
    #[garde(range(min = display::MIN_WINDOW_DIMENSION, max = display::MAX_WINDOW_DIMENSION))]
    pub width: u32,
    /// Window height in pixels
    #[garde(range(min = display::MIN_WINDOW_DIMENSION, max = display::MAX_WINDOW_DIMENSION))]
    pub height: u32,
    /// Number of background sparkles
    #[garde(range(max = display::MAX_SPARKLE_COUNT))]
    pub sparkle_count: usize,
    /// Whether the background gradient oscillates with wall time
    #[garde(skip)]
    pub dynamic_background: bool,
    /// Number of questions drawn per session (`None` plays the whole deck)
    #[garde(inner(range(min = 1, max = deck::MAX_QUESTIONS)))]
    pub question_count: Option<usize>,
    /// Whether each question's choice order is shuffled per session
    #[garde(skip)]
    pub shuffle_choices: bool,
    /// Colors used by every page
    #[garde(skip)]
    pub palette: Palette,
    /// Section layout of the question screen
    #[garde(dive)]
    pub layout: Layout,
    /// Reward ladder tiers, lowest first
    #[garde(length(max = display::MAX_REWARD_TIERS), dive)]
    pub rewards: Vec<RewardTier>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 1365,
            height: 768,
            sparkle_count: 30,
            dynamic_background: true,
            question_count: None,
            shuffle_choices: false,
            palette: Palette::default(),
            layout: Layout::default(),
            rewards: vec![
                RewardTier::new("500 Wh", false),
                RewardTier::new("1500 Wh", true),
                RewardTier::new("3 kWh", false),
                RewardTier::new("6 kWh", false),
                RewardTier::new("12 kWh", false),
                RewardTier::new("24 kWh", false),
                RewardTier::new("48 kWh", true),
                RewardTier::new("72 kWh", false),
                RewardTier::new("100 kWh", false),
                RewardTier::new("150 kWh", false),
                RewardTier::new("300 kWh", false),
                RewardTier::new("1 MWh", true),
            ],
        }
    }
}

/// Faults raised while reading a configuration document
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid YAML for the config shape
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// The document parsed but violates a bound
    #[error("invalid config: {0}")]
    Invalid(#[from] garde::Report),
}

impl Config {
    /// Parses and validates a YAML configuration document
    ///
    /// Missing fields fall back to their defaults; bound violations are
    /// load-time faults, never silently clamped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the document cannot be parsed or if a
    /// value falls outside the bounds in [`crate::constants`].
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }
}
