//! Domain layer: pure game logic types and helpers.

pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod legality;
pub mod modes;
pub mod player;
pub mod rounds;
pub mod rules;
pub mod snapshot;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_legality;
#[cfg(test)]
mod tests_props_playout;

// Re-exports for ergonomics
pub use cards_parsing::{format_cards, try_parse_cards};
pub use cards_types::{Card, JokerSlot, Rank, Suit, JOKER_VALUE};
pub use legality::{check_submission, Acceptance};
pub use modes::{HouseRule, Mode, ModeSet, RuleSet};
pub use player::Player;
pub use rounds::{end_round, start_round};
pub use rules::Role;
pub use snapshot::{snapshot, viewer_state, GameSnapshot, ViewerState};
pub use state::{add_player, remove_player, Game, GamePhase, RoundResult};
pub use tricks::{pass, try_submit, ClearReason, PassResult, SubmitResult};
