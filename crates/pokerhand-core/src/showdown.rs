//! Two-hand showdowns with a reason attached.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::poker::{self, Decider, PokerHand};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Hand1,
    Hand2,
    Tie,
}

impl From<Ordering> for Winner {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Winner::Hand1,
            Ordering::Less => Winner::Hand2,
            Ordering::Equal => Winner::Tie,
        }
    }
}

/// Outcome of a showdown. `decider` is `None` exactly when the hands tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub winner: Winner,
    pub decider: Option<Decider>,
}

impl Verdict {
    /// Kata-style sentence, e.g. `White wins - high card: Ace`.
    pub fn describe(&self, first: &str, second: &str) -> String {
        let name = match self.winner {
            Winner::Hand1 => first,
            Winner::Hand2 => second,
            Winner::Tie => return "Tie".to_string(),
        };
        match self.decider {
            Some(decider) => format!("{name} wins - {decider}"),
            None => format!("{name} wins"),
        }
    }
}

/// Judge `first` against `second`. Always agrees with [`poker::compare`].
pub fn showdown(first: &PokerHand, second: &PokerHand) -> Verdict {
    let (ordering, decider) = poker::resolve(first, second);
    Verdict {
        winner: Winner::from(ordering),
        decider,
    }
}
