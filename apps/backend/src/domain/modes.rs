//! Round modifiers and house rules, stored as small bit sets.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A member of a [`FlagSet`]. `ALL` lists every variant in bit order.
pub trait Flag: Copy + Eq + fmt::Debug + 'static {
    const ALL: &'static [Self];

    fn bit(self) -> u8;
}

/// Modifiers toggled during a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mode {
    ShibariLock,
    Revolution,
    StraightMode,
}

impl Flag for Mode {
    const ALL: &'static [Self] = &[Mode::ShibariLock, Mode::Revolution, Mode::StraightMode];

    fn bit(self) -> u8 {
        match self {
            Mode::ShibariLock => 1 << 0,
            Mode::Revolution => 1 << 1,
            Mode::StraightMode => 1 << 2,
        }
    }
}

/// House rules configured once per room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HouseRule {
    EightClear,
    RevolutionRule,
    ShibariRule,
    Spade3OverJoker,
}

impl Flag for HouseRule {
    const ALL: &'static [Self] = &[
        HouseRule::EightClear,
        HouseRule::RevolutionRule,
        HouseRule::ShibariRule,
        HouseRule::Spade3OverJoker,
    ];

    fn bit(self) -> u8 {
        match self {
            HouseRule::EightClear => 1 << 0,
            HouseRule::RevolutionRule => 1 << 1,
            HouseRule::ShibariRule => 1 << 2,
            HouseRule::Spade3OverJoker => 1 << 3,
        }
    }
}

impl HouseRule {
    pub fn as_str(self) -> &'static str {
        match self {
            HouseRule::EightClear => "EIGHT_CLEAR",
            HouseRule::RevolutionRule => "REVOLUTION_RULE",
            HouseRule::ShibariRule => "SHIBARI_RULE",
            HouseRule::Spade3OverJoker => "SPADE3_OVER_JOKER",
        }
    }

    /// Accepts the wire name in any case, with `-` or `_` separators.
    pub fn parse_name(name: &str) -> Option<HouseRule> {
        let normalized = name.trim().to_ascii_uppercase().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|rule| rule.as_str() == normalized)
    }
}

/// Set of [`Flag`]s backed by a single byte.
pub struct FlagSet<F> {
    bits: u8,
    marker: PhantomData<F>,
}

pub type ModeSet = FlagSet<Mode>;
pub type RuleSet = FlagSet<HouseRule>;

impl<F: Flag> FlagSet<F> {
    pub const fn empty() -> Self {
        Self {
            bits: 0,
            marker: PhantomData,
        }
    }

    pub fn all() -> Self {
        F::ALL.iter().copied().collect()
    }

    pub fn contains(&self, flag: F) -> bool {
        self.bits & flag.bit() != 0
    }

    pub fn insert(&mut self, flag: F) {
        self.bits |= flag.bit();
    }

    pub fn remove(&mut self, flag: F) {
        self.bits &= !flag.bit();
    }

    /// Flip `flag`; returns whether it is now set.
    pub fn toggle(&mut self, flag: F) -> bool {
        self.bits ^= flag.bit();
        self.contains(flag)
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = F> + '_ {
        F::ALL.iter().copied().filter(move |f| self.contains(*f))
    }
}

impl<F: Flag> FromIterator<F> for FlagSet<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        let mut set = Self::empty();
        for flag in iter {
            set.insert(flag);
        }
        set
    }
}

impl<F> Clone for FlagSet<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for FlagSet<F> {}

impl<F> PartialEq for FlagSet<F> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<F> Eq for FlagSet<F> {}

impl<F: Flag> Default for FlagSet<F> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<F: Flag> fmt::Debug for FlagSet<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<F: Flag + Serialize> Serialize for FlagSet<F> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, F: Flag + DeserializeOwned> Deserialize<'de> for FlagSet<F> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let flags = Vec::<F>::deserialize(deserializer)?;
        Ok(flags.into_iter().collect())
    }
}
