// Unit tests for DomainError -> AppError mapping, no HTTP server involved.
use crate::errors::domain::{DomainError, Feature, NotFoundKind, OperationKind, RejectKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_rejections_to_422() {
    let de = DomainError::rejected(RejectKind::NoLegalBeat, "5 does not beat 9");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::NoLegalBeat);
    assert_eq!(app.status().as_u16(), 422);
}

#[test]
fn phase_mismatch_is_a_conflict() {
    let app: AppError = DomainError::rejected(RejectKind::PhaseMismatch, "no round").into();
    assert_eq!(app.code(), ErrorCode::PhaseMismatch);
    assert_eq!(app.status().as_u16(), 409);
}

#[test]
fn maps_roster_conflicts() {
    let dup: AppError = DomainError::operation(OperationKind::DuplicateName, "alice").into();
    assert_eq!(dup.code().as_str(), "DUPLICATE_NAME");
    assert_eq!(dup.status().as_u16(), 409);

    let busy: AppError = DomainError::operation(OperationKind::RoundInProgress, "busy").into();
    assert_eq!(busy.status().as_u16(), 409);

    let few: AppError = DomainError::operation(OperationKind::NotEnoughPlayers, "1").into();
    assert_eq!(few.code(), ErrorCode::NotEnoughPlayers);
    assert_eq!(few.status().as_u16(), 422);
}

#[test]
fn maps_not_found() {
    let app: AppError = DomainError::not_found(NotFoundKind::Room, "lobby").into();
    assert_eq!(app.code().as_str(), "ROOM_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);

    let app: AppError = DomainError::not_found(NotFoundKind::Player, "bob").into();
    assert_eq!(app.code().as_str(), "PLAYER_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);
}

#[test]
fn parse_errors_are_bad_requests() {
    let app: AppError = DomainError::parse_card("14Z").into();
    assert_eq!(app.code(), ErrorCode::ParseCard);
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn unimplemented_is_internal() {
    let app: AppError = DomainError::unimplemented(Feature::StraightMode, "straights").into();
    assert_eq!(app.code(), ErrorCode::Unimplemented);
    assert_eq!(app.status().as_u16(), 500);
    assert!(matches!(app, AppError::Internal { .. }));
}
