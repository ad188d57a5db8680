use crate::domain::legality::{check_submission, Acceptance};
use crate::domain::modes::{HouseRule, Mode, ModeSet, RuleSet};
use crate::domain::test_state_helpers::cards;
use crate::errors::domain::{DomainError, RejectKind};
use crate::errors::ErrorCode;

fn check(top: &[&str], submit: &[&str], modes: ModeSet) -> Result<Acceptance, DomainError> {
    check_submission(&cards(top), &cards(submit), modes, RuleSet::all())
}

fn revolution() -> ModeSet {
    [Mode::Revolution].into_iter().collect()
}

fn rejected(result: Result<Acceptance, DomainError>) -> Option<RejectKind> {
    result.err().and_then(|e| e.reject_kind())
}

#[test]
fn opening_play_on_empty_table() {
    assert_eq!(check(&[], &["4D"], ModeSet::empty()), Ok(Acceptance::OpeningPlay));
    assert_eq!(
        check(&[], &["9C", "9H", "JOKER"], ModeSet::empty()),
        Ok(Acceptance::OpeningPlay)
    );
}

#[test]
fn empty_submission_is_rejected_first() {
    assert_eq!(
        rejected(check(&["4D"], &[], ModeSet::empty())),
        Some(RejectKind::EmptySubmission)
    );
    assert_eq!(
        rejected(check(&[], &[], ModeSet::empty())),
        Some(RejectKind::EmptySubmission)
    );
}

#[test]
fn higher_single_beats_lower() {
    assert_eq!(check(&["3S"], &["4D"], ModeSet::empty()), Ok(Acceptance::HigherValue));
    assert_eq!(
        rejected(check(&["4S"], &["4D"], ModeSet::empty())),
        Some(RejectKind::NoLegalBeat)
    );
    assert_eq!(
        rejected(check(&["2S"], &["3D"], ModeSet::empty())),
        Some(RejectKind::NoLegalBeat)
    );
    assert_eq!(check(&["13S"], &["1D"], ModeSet::empty()), Ok(Acceptance::HigherValue));
    assert_eq!(check(&["1S"], &["2D"], ModeSet::empty()), Ok(Acceptance::HigherValue));
}

#[test]
fn revolution_inverts_standard_cards() {
    assert_eq!(
        rejected(check(&["3S"], &["4D"], revolution())),
        Some(RejectKind::NoLegalBeat)
    );
    assert_eq!(check(&["4S"], &["3D"], revolution()), Ok(Acceptance::HigherValue));
    assert_eq!(check(&["2S"], &["3D"], revolution()), Ok(Acceptance::HigherValue));
    assert_eq!(
        rejected(check(&["3S"], &["2D"], revolution())),
        Some(RejectKind::NoLegalBeat)
    );
}

#[test]
fn joker_stays_on_top_under_revolution() {
    assert_eq!(check(&["2S"], &["JOKER"], ModeSet::empty()), Ok(Acceptance::HigherValue));
    assert_eq!(check(&["2S"], &["JOKER"], revolution()), Ok(Acceptance::HigherValue));
    assert_eq!(
        rejected(check(&["JOKER"], &["4S"], revolution())),
        Some(RejectKind::NoLegalBeat)
    );
}

#[test]
fn pairs_compare_by_shared_value() {
    assert_eq!(
        check(&["3S", "3D"], &["4D", "4H"], ModeSet::empty()),
        Ok(Acceptance::HigherValue)
    );
    assert_eq!(
        rejected(check(&["3S", "3D"], &["4D", "5H"], ModeSet::empty())),
        Some(RejectKind::MixedRanks)
    );
    assert_eq!(
        check(&["2S", "2D"], &["JOKER", "JOKER"], ModeSet::empty()),
        Ok(Acceptance::HigherValue)
    );
}

#[test]
fn joker_is_wild_inside_a_group() {
    assert_eq!(
        check(&["3S", "3D"], &["4D", "JOKER"], ModeSet::empty()),
        Ok(Acceptance::HigherValue)
    );
    // Top value is the minimum of the group, so a Joker does not lift a pair.
    assert_eq!(
        check(&["5S", "JOKER"], &["6D", "6H"], ModeSet::empty()),
        Ok(Acceptance::HigherValue)
    );
}

#[test]
fn count_must_match_top_group() {
    assert_eq!(
        rejected(check(&["3S"], &["4D", "4H"], ModeSet::empty())),
        Some(RejectKind::CountMismatch)
    );
    assert_eq!(
        rejected(check(&["3S", "3H"], &["1D"], ModeSet::empty())),
        Some(RejectKind::CountMismatch)
    );
}

#[test]
fn mixed_ranks_checked_before_count() {
    assert_eq!(
        rejected(check(&["3S"], &["4D", "5H"], ModeSet::empty())),
        Some(RejectKind::MixedRanks)
    );
}

#[test]
fn spade_three_overrides_single_joker() {
    assert_eq!(
        check(&["JOKER"], &["3S"], ModeSet::empty()),
        Ok(Acceptance::SpadeThreeOverride)
    );
    assert_eq!(
        check(&["JOKER"], &["3S"], revolution()),
        Ok(Acceptance::SpadeThreeOverride)
    );
    // Only the 3 of Spades.
    assert_eq!(
        rejected(check(&["JOKER"], &["3H"], ModeSet::empty())),
        Some(RejectKind::NoLegalBeat)
    );
}

#[test]
fn spade_three_override_needs_the_rule() {
    let rules: RuleSet = [HouseRule::EightClear].into_iter().collect();
    let result = check_submission(&cards(&["JOKER"]), &cards(&["3S"]), ModeSet::empty(), rules);
    assert_eq!(rejected(result), Some(RejectKind::NoLegalBeat));
}

#[test]
fn straight_mode_is_unimplemented() {
    let modes: ModeSet = [Mode::StraightMode].into_iter().collect();
    let err = check(&["3S"], &["4S"], modes).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Unimplemented);
    assert_eq!(err.reject_kind(), None);

    // Opening plays are still decided before the straight check.
    assert_eq!(check(&[], &["4S"], modes), Ok(Acceptance::OpeningPlay));
}
