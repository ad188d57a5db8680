use super::cards_types::Card;
use super::rules::Role;

/// A seated participant. Identity is the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    /// None until the first round is dealt.
    pub role: Option<Role>,
    pub hand: Vec<Card>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: None,
            hand: Vec::new(),
        }
    }

    /// Multiset membership: every submitted card needs its own matching card
    /// in hand. Jokers match either Joker slot.
    pub fn holds_all(&self, cards: &[Card]) -> bool {
        let mut used = vec![false; self.hand.len()];
        cards.iter().all(|wanted| {
            let slot = self
                .hand
                .iter()
                .enumerate()
                .position(|(i, held)| !used[i] && held.same_face(wanted));
            match slot {
                Some(i) => {
                    used[i] = true;
                    true
                }
                None => false,
            }
        })
    }

    /// Remove one matching card per submitted card. Callers check
    /// [`Player::holds_all`] first; missing cards are skipped.
    pub fn remove_cards(&mut self, cards: &[Card]) {
        for wanted in cards {
            if let Some(i) = self.hand.iter().position(|held| held.same_face(wanted)) {
                self.hand.remove(i);
            }
        }
    }

    pub fn sorted_hand(&self) -> Vec<Card> {
        let mut hand = self.hand.clone();
        hand.sort();
        hand
    }
}
