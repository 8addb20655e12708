//! Playing cards.
//!
//! A [`Card`] is a (suit, rank) pair. Cards are ordered by rank alone: a King
//! of Hearts and a King of Spades compare equal, so `Card` exposes
//! [`Card::compare`] instead of implementing `Ord` (which would have to agree
//! with the structural `Eq`).
//!
//! # Examples
//!
//! ```
//! use pokerhand_core::card::{Card, Rank, Suit};
//!
//! let card: Card = "10S".parse().unwrap();
//! assert_eq!(card, Card::new(Suit::Spades, Rank::Ten));
//! assert_eq!(card.to_string(), "10S");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HandError;

/// Represents a card suit. Only used for flush detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in notation order
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Returns the suit's notation letter
    pub fn letter(&self) -> &'static str {
        match self {
            Suit::Clubs => "C",
            Suit::Diamonds => "D",
            Suit::Hearts => "H",
            Suit::Spades => "S",
        }
    }

    /// Returns the suit as a display symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Suit::Clubs => "♣",
            Suit::Diamonds => "♦",
            Suit::Hearts => "♥",
            Suit::Spades => "♠",
        }
    }
}

impl FromStr for Suit {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" => Ok(Suit::Clubs),
            "D" => Ok(Suit::Diamonds),
            "H" => Ok(Suit::Hearts),
            "S" => Ok(Suit::Spades),
            _ => Err(HandError::InvalidCard(s.to_string())),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// Represents a card rank, Two lowest and Ace highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    /// All ranks, lowest first
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Returns the rank's notation symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    /// Spoken name, used in verdicts ("high card: Ace")
    pub fn name(&self) -> &'static str {
        match self {
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
            _ => self.symbol(),
        }
    }
}

impl FromStr for Rank {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::ALL
            .into_iter()
            .find(|rank| rank.symbol() == s)
            .ok_or_else(|| HandError::InvalidCard(s.to_string()))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Rank-only comparison. Suits never break ties, and a missing card
    /// ranks below any present one.
    pub fn compare(&self, other: Option<&Card>) -> Ordering {
        match other {
            Some(other) => self.rank.cmp(&other.rank),
            None => Ordering::Greater,
        }
    }

    /// The full 52-card set, suit-major
    pub fn all() -> impl Iterator<Item = Card> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(suit, rank)))
    }

    /// Rank and suit as display symbols (e.g. `K♦`)
    pub fn pretty(&self) -> String {
        format!("{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

/// Reads `<rank><suit>`: the suit is the last character, the rank is
/// everything before it (`"KD"`, `"10S"`).
impl FromStr for Card {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || HandError::InvalidCard(s.to_string());
        let split = s.char_indices().last().map(|(i, _)| i).ok_or_else(invalid)?;
        let (rank, suit) = s.split_at(split);
        let rank = rank.parse::<Rank>().map_err(|_| invalid())?;
        let suit = suit.parse::<Suit>().map_err(|_| invalid())?;
        Ok(Card::new(suit, rank))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
