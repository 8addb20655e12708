//! Errors raised while building cards, hands and matchups.
//!
//! Every variant is an invalid-argument failure: construction either fully
//! succeeds or returns one of these. Classification and comparison of an
//! already-built [`PokerHand`](crate::poker::PokerHand) never fail.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    /// Notation outside the rank `2-10 J Q K A` / suit `C D H S` alphabets.
    #[error("invalid card: '{0}'")]
    InvalidCard(String),

    /// A poker hand must contain exactly five cards.
    #[error("a poker hand must contain 5 cards, got {0}")]
    CardCount(usize),

    /// A game line not of the form `Black: <hand>  White: <hand>`.
    #[error("invalid matchup: '{0}'")]
    InvalidMatchup(String),

    /// Asked a deck for more cards than it still holds.
    #[error("deck exhausted: requested {requested}, {remaining} remaining")]
    DeckExhausted { requested: usize, remaining: usize },
}
