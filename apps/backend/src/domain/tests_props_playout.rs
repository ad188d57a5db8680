/// Property-based tests driving whole rounds with random legal play
use std::collections::HashSet;

use proptest::prelude::*;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::legality::Acceptance;
use crate::domain::modes::{Mode, RuleSet};
use crate::domain::rounds::start_round;
use crate::domain::rules::{role_for_rank, DECK_SIZE};
use crate::domain::state::{add_player, Game, GamePhase};
use crate::domain::tricks::{pass, try_submit};
use crate::domain::{test_gens, test_prelude, Card};

const MAX_ACTIONS: usize = 5_000;

/// Same-value groups the current player could put down, sized to the top
/// group (or any size on an empty table).
fn candidate_groups(hand: &[Card], needed: Option<usize>) -> Vec<Vec<Card>> {
    let mut values: Vec<i16> = hand.iter().map(Card::value).collect();
    values.sort_unstable();
    values.dedup();

    let mut groups = Vec::new();
    for value in values {
        let same: Vec<Card> = hand.iter().copied().filter(|c| c.value() == value).collect();
        match needed {
            Some(k) if same.len() >= k => groups.push(same[..k].to_vec()),
            Some(_) => {}
            None => {
                for k in 1..=same.len() {
                    groups.push(same[..k].to_vec());
                }
            }
        }
    }
    groups
}

fn assert_invariants(game: &Game) -> Result<(), TestCaseError> {
    if game.phase != GamePhase::PlayingCards {
        return Ok(());
    }
    prop_assert_eq!(game.cards_in_play(), DECK_SIZE);
    prop_assert!(game.last_submitted_count <= game.table.len());
    let holder = &game.players[game.turn].name;
    prop_assert!(!game.is_finished(holder), "turn on finished player {}", holder);
    let unique: HashSet<&String> = game.finished_order.iter().collect();
    prop_assert_eq!(unique.len(), game.finished_order.len());
    prop_assert!(game.finished_order.len() < game.players.len() - 1);
    Ok(())
}

/// Play one round to completion; returns the number of actions taken.
fn play_round(game: &mut Game, rng: &mut ChaCha8Rng) -> Result<usize, TestCaseError> {
    for step in 0..MAX_ACTIONS {
        if game.phase != GamePhase::PlayingCards {
            return Ok(step);
        }
        let seat = game.turn;
        let name = game.players[seat].name.clone();
        let top_len = game.top_group().len();
        let needed = (top_len > 0).then_some(top_len);

        let mut groups = candidate_groups(&game.players[seat].hand, needed);
        groups.shuffle(rng);

        let wants_pass = needed.is_some() && rng.random_bool(0.3);
        let mut played = false;
        if !wants_pass {
            for group in groups {
                let revolution_before = game.active_modes.contains(Mode::Revolution);
                match try_submit(game, &name, &group) {
                    Ok(result) => {
                        if result.acceptance != Acceptance::OpeningPlay {
                            prop_assert_eq!(group.len(), top_len);
                        }
                        let flipped =
                            revolution_before != game.active_modes.contains(Mode::Revolution);
                        prop_assert_eq!(flipped, group.len() >= 4);
                        prop_assert_eq!(result.revolution_toggled, group.len() >= 4);
                        played = true;
                        break;
                    }
                    Err(e) => {
                        prop_assert!(e.reject_kind().is_some(), "unexpected {:?}", e);
                    }
                }
            }
        }
        if !played {
            prop_assert!(needed.is_some(), "opening player had nothing to play");
            pass(game, &name).map_err(|e| TestCaseError::fail(format!("{e:?}")))?;
        }
        assert_invariants(game)?;
    }
    Err(TestCaseError::fail("round did not finish"))
}

fn seated_game(players: usize, seed: u64) -> Game {
    let mut game = Game::with_seed(RuleSet::all(), seed);
    for i in 0..players {
        add_player(&mut game, &format!("p{i}")).expect("valid name");
    }
    game
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: a random legal playout conserves cards, never hands the turn
    /// to a finished player and ends with every player ranked once.
    #[test]
    fn prop_round_playout_invariants(players in test_gens::player_count(), seed in any::<u64>()) {
        let mut game = seated_game(players, seed);
        let mut rng = ChaCha8Rng::seed_from_u64(seed ^ 0x5eed);

        start_round(&mut game).map_err(|e| TestCaseError::fail(format!("{e:?}")))?;
        assert_invariants(&game)?;
        play_round(&mut game, &mut rng)?;

        prop_assert_eq!(game.phase, GamePhase::RoundEnded);
        prop_assert_eq!(game.finished_order.len(), players);
        let ranked: HashSet<&String> = game.finished_order.iter().collect();
        prop_assert_eq!(ranked.len(), players);
        prop_assert_eq!(&game.history[0].finish_order, &game.finished_order);

        // The one player left holding cards is ranked last.
        let last = game.finished_order.last().cloned().unwrap_or_default();
        let holding: Vec<&str> = game
            .players
            .iter()
            .filter(|p| !p.hand.is_empty())
            .map(|p| p.name.as_str())
            .collect();
        prop_assert!(holding.len() <= 1);
        if let Some(name) = holding.first() {
            prop_assert_eq!(*name, last.as_str());
        }
    }

    /// Property: the second round assigns roles from the first round's ranks.
    #[test]
    fn prop_second_round_roles(players in test_gens::player_count(), seed in any::<u64>()) {
        let mut game = seated_game(players, seed);
        let mut rng = ChaCha8Rng::seed_from_u64(seed.rotate_left(17));

        start_round(&mut game).map_err(|e| TestCaseError::fail(format!("{e:?}")))?;
        play_round(&mut game, &mut rng)?;
        let first = game.finished_order.clone();

        start_round(&mut game).map_err(|e| TestCaseError::fail(format!("{e:?}")))?;
        for (i, name) in first.iter().enumerate() {
            let role = game.player(name).and_then(|p| p.role);
            prop_assert_eq!(role, Some(role_for_rank(i + 1, players)));
        }
        play_round(&mut game, &mut rng)?;
        prop_assert_eq!(game.history.len(), 2);
        prop_assert_eq!(game.history[1].round_no, 2);
    }
}
