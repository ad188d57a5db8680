use serde::{Deserialize, Serialize};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 6;
pub const DECK_SIZE: usize = 54;

/// Submissions of at least this many cards toggle revolution.
pub const REVOLUTION_MIN_CARDS: usize = 4;
/// Comparison value that triggers an eight-clear.
pub const EIGHT_CLEAR_VALUE: i16 = 8;
pub const MAX_NAME_LEN: usize = 32;

/// Title carried into a round from the previous round's finishing rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    GreatWinner,
    Winner,
    Commoner,
    Loser,
    GreatLoser,
}

/// Role for a 1-based finishing `rank` at a table of `players`.
///
/// Player counts outside 2..=6 and out-of-range ranks resolve to Commoner.
pub fn role_for_rank(rank: usize, players: usize) -> Role {
    use Role::*;
    let table: &[Role] = match players {
        2 => &[GreatWinner, GreatLoser],
        3 => &[GreatWinner, Commoner, GreatLoser],
        4 => &[GreatWinner, Winner, Loser, GreatLoser],
        5 => &[GreatWinner, Winner, Commoner, Loser, GreatLoser],
        6 => &[GreatWinner, Winner, Commoner, Commoner, Loser, GreatLoser],
        _ => &[],
    };
    rank.checked_sub(1)
        .and_then(|i| table.get(i))
        .copied()
        .unwrap_or(Commoner)
}
