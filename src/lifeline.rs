//! Lifeline effect computations
//!
//! Each lifeline's effect on a question is a pure function of the
//! question's shape and a random source: which pair survives fifty-fifty,
//! what the simulated friend suggests and with what confidence, and how
//! the simulated audience vote splits. Nothing here mutates a question or
//! raises a navigation request; [`crate::quiz::QuizState`] is the thin
//! caller that applies an effect and translates it into a reveal.
//!
//! The friend and the audience are deliberately noisy oracles: the
//! confidence and share ranges are asymmetric so a correct hint is more
//! likely but never certain.

use enum_map::Enum;
use serde::{Deserialize, Serialize};

use crate::constants::{deck::CHOICE_COUNT, lifelines};

/// The three one-shot help mechanics
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Enum, Serialize, Deserialize, derive_more::Display,
)]
pub enum Lifeline {
    /// Eliminate two wrong choices
    #[display("50:50")]
    Fifty,
    /// Consult a simulated friend
    #[display("phone-a-friend")]
    Phone,
    /// Consult a simulated audience
    #[display("ask-the-audience")]
    Audience,
}

/// The simulated friend's suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendHint {
    /// Choice index the friend points at
    pub index: usize,
    /// Self-reported confidence percentage
    pub confidence: u8,
}

/// Picks the two choice indices that survive fifty-fifty
///
/// The correct index always survives; its companion is drawn uniformly
/// among the three incorrect indices.
///
/// # Panics
///
/// Panics if `correct` is not a valid choice index.
pub fn fifty_pair(correct: usize, rng: &mut fastrand::Rng) -> [usize; 2] {
    assert!(correct < CHOICE_COUNT, "correct index out of range");
    let companion = (0..CHOICE_COUNT)
        .filter(|&i| i != correct)
        .nth(rng.usize(0..CHOICE_COUNT - 1))
        .expect("three incorrect indices to draw from");
    let mut pair = [correct, companion];
    pair.sort_unstable();
    pair
}

/// Computes the friend's suggestion for a question
///
/// The friend picks uniformly among the non-eliminated choices and
/// reports a confidence drawn from a higher range when the pick happens
/// to be correct (40 to 100) than when it is wrong (0 to 70).
///
/// # Panics
///
/// Panics if every choice is eliminated, which no lifeline sequence can
/// produce.
pub fn friend_hint(
    correct: usize,
    eliminated: [bool; CHOICE_COUNT],
    rng: &mut fastrand::Rng,
) -> FriendHint {
    let candidates: Vec<usize> = (0..CHOICE_COUNT).filter(|&i| !eliminated[i]).collect();
    let index = *rng.choice(&candidates).expect("a non-eliminated choice");
    let confidence = if index == correct {
        rng.u8(lifelines::FRIEND_CONFIDENT_MIN..=lifelines::FRIEND_CONFIDENT_MAX)
    } else {
        rng.u8(lifelines::FRIEND_UNSURE_MIN..=lifelines::FRIEND_UNSURE_MAX)
    };
    FriendHint { index, confidence }
}

/// Computes the audience vote distribution for a question
///
/// The correct choice receives a share between 40% and 90%; the
/// remainder is split as evenly as possible across the surviving
/// incorrect choices, so after an elimination the vote concentrates on
/// the surviving pair. Eliminated choices always read 0%. The four
/// shares sum to exactly 100.
pub fn audience_shares(
    correct: usize,
    eliminated: [bool; CHOICE_COUNT],
    rng: &mut fastrand::Rng,
) -> [u8; CHOICE_COUNT] {
    let mut shares = [0u8; CHOICE_COUNT];
    let correct_share = rng.u8(lifelines::AUDIENCE_CORRECT_MIN..=lifelines::AUDIENCE_CORRECT_MAX);

    let survivors: Vec<usize> = (0..CHOICE_COUNT)
        .filter(|&i| i != correct && !eliminated[i])
        .collect();
    let remainder = 100 - correct_share;

    if survivors.is_empty() {
        shares[correct] = 100;
        return shares;
    }

    shares[correct] = correct_share;
    let count = survivors.len() as u8;
    let base = remainder / count;
    let slack = remainder % count;
    for (rank, &i) in survivors.iter().enumerate() {
        shares[i] = base + u8::from((rank as u8) < slack);
    }
    shares
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> fastrand::Rng {
        fastrand::Rng::with_seed(seed)
    }

    #[test]
    fn test_fifty_pair_keeps_correct_and_one_wrong() {
        for seed in 0..64 {
            for correct in 0..CHOICE_COUNT {
                let pair = fifty_pair(correct, &mut seeded(seed));
                assert!(pair.contains(&correct));
                assert_ne!(pair[0], pair[1]);
                assert!(pair.iter().all(|&i| i < CHOICE_COUNT));
            }
        }
    }

    #[test]
    fn test_fifty_pair_companion_varies() {
        let companions: std::collections::HashSet<usize> = (0..64)
            .map(|seed| {
                let pair = fifty_pair(0, &mut seeded(seed));
                if pair[0] == 0 { pair[1] } else { pair[0] }
            })
            .collect();
        // All three incorrect indices should show up across seeds
        assert_eq!(companions.len(), 3);
    }

    #[test]
    fn test_friend_hint_never_points_at_eliminated() {
        let eliminated = [false, true, false, true];
        for seed in 0..64 {
            let hint = friend_hint(0, eliminated, &mut seeded(seed));
            assert!(!eliminated[hint.index]);
        }
    }

    #[test]
    fn test_friend_confidence_ranges_follow_correctness() {
        for seed in 0..64 {
            let hint = friend_hint(2, [false; CHOICE_COUNT], &mut seeded(seed));
            if hint.index == 2 {
                assert!(hint.confidence >= lifelines::FRIEND_CONFIDENT_MIN);
                assert!(hint.confidence <= lifelines::FRIEND_CONFIDENT_MAX);
            } else {
                assert!(hint.confidence <= lifelines::FRIEND_UNSURE_MAX);
            }
        }
    }

    #[test]
    fn test_audience_shares_sum_to_one_hundred() {
        for seed in 0..64 {
            let shares = audience_shares(1, [false; CHOICE_COUNT], &mut seeded(seed));
            assert_eq!(shares.iter().map(|&s| u32::from(s)).sum::<u32>(), 100);
        }
    }

    #[test]
    fn test_audience_favors_correct_without_elimination() {
        for seed in 0..64 {
            let shares = audience_shares(3, [false; CHOICE_COUNT], &mut seeded(seed));
            for i in 0..CHOICE_COUNT {
                if i != 3 {
                    assert!(shares[3] >= shares[i]);
                }
            }
        }
    }

    #[test]
    fn test_audience_concentrates_on_surviving_pair() {
        // Fifty-fifty already removed choices 1 and 3
        let eliminated = [false, true, false, true];
        for seed in 0..64 {
            let shares = audience_shares(0, eliminated, &mut seeded(seed));
            assert_eq!(shares[1], 0);
            assert_eq!(shares[3], 0);
            assert_eq!(u32::from(shares[0]) + u32::from(shares[2]), 100);
            assert!(shares[0] >= lifelines::AUDIENCE_CORRECT_MIN);
        }
    }
}
