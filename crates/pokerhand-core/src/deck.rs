//! A standard 52-card deck for dealing random hands.

use rand::seq::SliceRandom;

use crate::card::Card;
use crate::error::HandError;
use crate::hand::Hand;
use crate::poker::{HAND_SIZE, PokerHand};

/// Cards left to deal. Dealing takes from the top (the end of the vector).
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 52 cards in suit-major order
    pub fn new() -> Self {
        Self {
            cards: Card::all().collect(),
        }
    }

    pub fn shuffled<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.cards.shuffle(rng);
        deck
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Take `count` cards off the top. Fails without dealing anything if
    /// the deck runs short.
    pub fn deal(&mut self, count: usize) -> Result<Hand, HandError> {
        let remaining = self.remaining();
        if count > remaining {
            return Err(HandError::DeckExhausted {
                requested: count,
                remaining,
            });
        }
        Ok(Hand::new(self.cards.split_off(remaining - count)))
    }

    pub fn deal_poker_hand(&mut self) -> Result<PokerHand, HandError> {
        PokerHand::try_from(self.deal(HAND_SIZE)?)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
