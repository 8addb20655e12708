//! Generic card sequences and the best-card-first comparator.
//!
//! Nothing here knows about poker: pairs, triads and flushes are invisible to
//! [`Hand::compare`]. [`crate::poker`] uses [`compare_high_cards`] as its
//! final tie-break.

use std::cmp::{Ordering, Reverse};
use std::fmt;
use std::str::FromStr;

use crate::card::Card;
use crate::error::HandError;

/// Compare two card sequences highest card first.
///
/// Both slices must already be sorted descending by rank. The first
/// position where the ranks differ decides; if the shorter sequence runs
/// out first, the longer one is greater.
pub fn compare_high_cards(ours: &[Card], theirs: &[Card]) -> Ordering {
    match first_difference(ours, theirs) {
        Some((a, b)) => a.compare(Some(b)),
        None => ours.len().cmp(&theirs.len()),
    }
}

/// The first pair of same-position cards whose ranks differ.
pub fn first_difference<'a>(ours: &'a [Card], theirs: &'a [Card]) -> Option<(&'a Card, &'a Card)> {
    ours.iter()
        .zip(theirs)
        .find(|(a, b)| a.compare(Some(*b)).is_ne())
}

/// Sort cards highest rank first. Stable, so equal ranks keep input order.
pub(crate) fn sort_descending(cards: &mut [Card]) {
    cards.sort_by_key(|c| Reverse(c.rank()));
}

/// Any number of cards, kept sorted highest rank first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(mut cards: Vec<Card>) -> Self {
        sort_descending(&mut cards);
        Self { cards }
    }

    /// Cards sorted highest first
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Which hand holds the highest card, or the highest second card, etc.
    /// A missing hand always loses.
    pub fn compare(&self, other: Option<&Hand>) -> Ordering {
        match other {
            Some(other) => compare_high_cards(&self.cards, &other.cards),
            None => Ordering::Greater,
        }
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self::new(cards)
    }
}

/// Whitespace-separated cards, e.g. `"2H 3D 5S 9C KD"`.
impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .map(str::parse::<Card>)
            .collect::<Result<Vec<_>, _>>()
            .map(Hand::new)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_cards(f, &self.cards)
    }
}

pub(crate) fn write_cards(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{card}")?;
    }
    Ok(())
}
