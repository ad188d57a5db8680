//! Submission legality: a pure decision over the top group, the proposed
//! submission, the active modes and the room's house rules.

use serde::Serialize;

use super::cards_types::{Card, JOKER_VALUE};
use super::modes::{HouseRule, Mode, ModeSet, RuleSet};
use crate::errors::domain::{DomainError, Feature, RejectKind};

/// Why a submission was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Acceptance {
    /// Nothing on the table to beat.
    OpeningPlay,
    HigherValue,
    /// 3 of Spades played onto a single Joker.
    SpadeThreeOverride,
}

/// Shared comparison value of a submission, ignoring Jokers.
///
/// Returns `JOKER_VALUE` for an all-Joker submission and `None` when the
/// non-Joker cards disagree.
pub fn common_strength(cards: &[Card], inverted: bool) -> Option<i16> {
    let mut standard = cards.iter().filter(|c| !c.is_joker());
    let Some(first) = standard.next() else {
        return Some(JOKER_VALUE);
    };
    let value = first.strength(inverted);
    standard
        .all(|c| c.strength(inverted) == value)
        .then_some(value)
}

/// Decide whether `submission` may be played onto `top_group`.
///
/// Under revolution the non-Joker values are compared negated, so Jokers
/// stay on top. An active straight mode is reported as `Unimplemented`.
pub fn check_submission(
    top_group: &[Card],
    submission: &[Card],
    modes: ModeSet,
    rules: RuleSet,
) -> Result<Acceptance, DomainError> {
    if submission.is_empty() {
        return Err(DomainError::rejected(
            RejectKind::EmptySubmission,
            "Select at least one card",
        ));
    }

    let inverted = modes.contains(Mode::Revolution);
    let submit_value = common_strength(submission, inverted).ok_or_else(|| {
        DomainError::rejected(
            RejectKind::MixedRanks,
            "All non-Joker cards must share one rank",
        )
    })?;

    if top_group.is_empty() {
        return Ok(Acceptance::OpeningPlay);
    }

    if submission.len() != top_group.len() {
        return Err(DomainError::rejected(
            RejectKind::CountMismatch,
            format!(
                "Must play {} card(s), got {}",
                top_group.len(),
                submission.len()
            ),
        ));
    }

    if modes.contains(Mode::StraightMode) {
        return Err(DomainError::unimplemented(
            Feature::StraightMode,
            "Straight submissions are not supported",
        ));
    }

    if rules.contains(HouseRule::Spade3OverJoker)
        && top_group.len() == 1
        && top_group[0].is_joker()
        && submission[0].is_spade_three()
    {
        return Ok(Acceptance::SpadeThreeOverride);
    }

    let top_value = top_group
        .iter()
        .map(|c| c.strength(inverted))
        .min()
        .unwrap_or(JOKER_VALUE);

    if submit_value > top_value {
        Ok(Acceptance::HigherValue)
    } else {
        Err(DomainError::rejected(
            RejectKind::NoLegalBeat,
            "Submission does not beat the cards on the table",
        ))
    }
}
