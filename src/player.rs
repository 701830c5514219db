//! Players and their wild-face steal strategies

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a player picks a steal target when a wild face comes up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayStyle {
    /// Steal from the richest opponent still holding chips.
    #[serde(rename = "Steal From Highest")]
    StealFromHighest,
    /// Steal from the poorest opponent still holding chips.
    #[serde(rename = "Steal From Lowest")]
    StealFromLowest,
    /// Steal from the seat across the table, or nobody if they are broke.
    #[serde(rename = "Steal From Opposite")]
    StealFromOpposite,
    /// Steal from the seat across the table, falling back to the richest
    /// opponent when the opposite seat is broke.
    #[serde(rename = "Steal Opposite Conditional")]
    StealOppositeConditional,
}

impl PlayStyle {
    /// All strategies, in menu order.
    pub const ALL: [PlayStyle; 4] = [
        PlayStyle::StealFromHighest,
        PlayStyle::StealFromLowest,
        PlayStyle::StealFromOpposite,
        PlayStyle::StealOppositeConditional,
    ];

    /// Human-readable label, also the JSON representation.
    pub fn label(&self) -> &'static str {
        match self {
            PlayStyle::StealFromHighest => "Steal From Highest",
            PlayStyle::StealFromLowest => "Steal From Lowest",
            PlayStyle::StealFromOpposite => "Steal From Opposite",
            PlayStyle::StealOppositeConditional => "Steal Opposite Conditional",
        }
    }

    /// Parse a CLI argument. Accepts the full label or a short alias.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "highest" | "steal from highest" => Some(PlayStyle::StealFromHighest),
            "lowest" | "steal from lowest" => Some(PlayStyle::StealFromLowest),
            "opposite" | "steal from opposite" => Some(PlayStyle::StealFromOpposite),
            "conditional" | "opposite-conditional" | "steal opposite conditional" => {
                Some(PlayStyle::StealOppositeConditional)
            }
            _ => None,
        }
    }
}

impl fmt::Display for PlayStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One seat at the table.
#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    /// Seat index, fixed for the whole game.
    pub seat: usize,
    pub chips: u32,
    pub strategy: PlayStyle,
}

impl Player {
    pub fn new(name: impl Into<String>, chips: u32, seat: usize, strategy: PlayStyle) -> Self {
        Self {
            name: name.into(),
            seat,
            chips,
            strategy,
        }
    }

    pub fn in_play(&self) -> bool {
        self.chips > 0
    }
}

/// Pick the seat to steal one chip from, given the current chip counts.
///
/// Only opponents with chips are eligible. Returns `None` when nobody can be
/// stolen from (or the opposite seat is broke, for the unconditional
/// opposite strategy).
pub fn choose_steal_target(chips: &[u32], seat: usize, strategy: PlayStyle) -> Option<usize> {
    let n = chips.len();
    let candidates: Vec<usize> = (0..n).filter(|&i| i != seat && chips[i] > 0).collect();
    if candidates.is_empty() {
        return None;
    }

    let opposite = (seat + n / 2) % n;
    match strategy {
        PlayStyle::StealFromHighest => candidates.iter().copied().max_by_key(|&i| chips[i]),
        PlayStyle::StealFromLowest => candidates.iter().copied().min_by_key(|&i| chips[i]),
        PlayStyle::StealFromOpposite => (opposite != seat && chips[opposite] > 0).then_some(opposite),
        PlayStyle::StealOppositeConditional => {
            if opposite != seat && chips[opposite] > 0 {
                Some(opposite)
            } else {
                candidates.iter().copied().max_by_key(|&i| chips[i])
            }
        }
    }
}
