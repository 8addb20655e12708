//! Five-card poker hand ranking.
//!
//! The rule set is deliberately small: five categories, no straights. A
//! four-of-a-kind holds a rank that appears three or more times and so ranks
//! as [`HandCategory::ThreeOfKind`]; a full house lands there too.
//!
//! # Examples
//!
//! ```
//! use std::cmp::Ordering;
//! use pokerhand_core::poker::{classify, compare, HandCategory, PokerHand};
//!
//! let black: PokerHand = "2C 2S AS JC 4C".parse().unwrap();
//! let white: PokerHand = "AH AD 2H 3S 6S".parse().unwrap();
//!
//! assert_eq!(classify(&black), HandCategory::Pair);
//! assert_eq!(compare(&black, &white), Ordering::Less);
//! ```

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::card::{Card, Rank};
use crate::error::HandError;
use crate::hand::{self, Hand};

pub const HAND_SIZE: usize = 5;

/// Hand categories, from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// Nothing better than the highest card.
    HighCard,
    /// One rank appears exactly twice.
    Pair,
    /// Two ranks each appear exactly twice.
    TwoPairs,
    /// One rank appears three or more times.
    ThreeOfKind,
    /// All five cards share a suit.
    Flush,
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandCategory::HighCard => write!(f, "High Card"),
            HandCategory::Pair => write!(f, "Pair"),
            HandCategory::TwoPairs => write!(f, "Two Pairs"),
            HandCategory::ThreeOfKind => write!(f, "Three of a Kind"),
            HandCategory::Flush => write!(f, "Flush"),
        }
    }
}

/// The comparison stage that separated two hands, carrying the winner's
/// deciding value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", content = "value", rename_all = "snake_case")]
pub enum Decider {
    /// Different categories; holds the winning category.
    Category(HandCategory),
    /// Both three of a kind, different triad ranks.
    Triad(Rank),
    /// Both pair or both two pairs, a pair rank differed.
    Pairs(Rank),
    /// Everything else tied until this card.
    HighCard(Rank),
}

impl fmt::Display for Decider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decider::Category(category) => write!(f, "{}", category.to_string().to_lowercase()),
            Decider::Triad(rank) => write!(f, "three of a kind: {}", rank.name()),
            Decider::Pairs(rank) => write!(f, "pair: {}", rank.name()),
            Decider::HighCard(rank) => write!(f, "high card: {}", rank.name()),
        }
    }
}

/// Exactly five cards, sorted highest rank first.
///
/// Duplicate cards are accepted; nothing checks that two `KD`s cannot
/// come from one deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PokerHand {
    cards: [Card; HAND_SIZE],
}

impl PokerHand {
    pub fn new(mut cards: [Card; HAND_SIZE]) -> Self {
        hand::sort_descending(&mut cards);
        Self { cards }
    }

    /// Cards sorted highest first
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    pub fn category(&self) -> HandCategory {
        classify(self)
    }

    /// Poker comparison. A missing hand always loses.
    pub fn compare(&self, other: Option<&PokerHand>) -> Ordering {
        match other {
            Some(other) => compare(self, other),
            None => Ordering::Greater,
        }
    }

    /// Card count per rank
    fn groups(&self) -> BTreeMap<Rank, usize> {
        let mut groups = BTreeMap::new();
        for card in &self.cards {
            *groups.entry(card.rank()).or_insert(0) += 1;
        }
        groups
    }

    /// Rank of the group with three or more cards, if exactly one exists
    fn triad(&self) -> Option<Rank> {
        let mut triads = self
            .groups()
            .into_iter()
            .filter(|&(_, count)| count >= 3)
            .map(|(rank, _)| rank);
        match (triads.next(), triads.next()) {
            (Some(rank), None) => Some(rank),
            _ => None,
        }
    }

    /// Ranks of the groups with exactly two cards, highest first
    fn pairs(&self) -> Vec<Rank> {
        self.groups()
            .into_iter()
            .rev()
            .filter(|&(_, count)| count == 2)
            .map(|(rank, _)| rank)
            .collect()
    }

    fn is_flush(&self) -> bool {
        let suit = self.cards[0].suit();
        self.cards.iter().all(|c| c.suit() == suit)
    }
}

/// Classify a hand. First match wins: flush, three of a kind, two pairs,
/// pair, high card.
pub fn classify(hand: &PokerHand) -> HandCategory {
    if hand.is_flush() {
        return HandCategory::Flush;
    }
    if hand.triad().is_some() {
        return HandCategory::ThreeOfKind;
    }
    match hand.pairs().len() {
        2 => HandCategory::TwoPairs,
        1 => HandCategory::Pair,
        _ => HandCategory::HighCard,
    }
}

/// Total poker ordering over two hands.
pub fn compare(ours: &PokerHand, theirs: &PokerHand) -> Ordering {
    resolve(ours, theirs).0
}

/// Compare two hands and report which stage separated them. `None` only
/// when the hands tie.
pub(crate) fn resolve(ours: &PokerHand, theirs: &PokerHand) -> (Ordering, Option<Decider>) {
    let category = classify(ours);
    let other = classify(theirs);
    if category != other {
        return (category.cmp(&other), Some(Decider::Category(category.max(other))));
    }

    match category {
        HandCategory::ThreeOfKind => {
            if let (Some(a), Some(b)) = (ours.triad(), theirs.triad())
                && a != b
            {
                return (a.cmp(&b), Some(Decider::Triad(a.max(b))));
            }
        }
        HandCategory::TwoPairs | HandCategory::Pair => {
            let split = ours
                .pairs()
                .into_iter()
                .zip(theirs.pairs())
                .find(|(a, b)| a != b);
            if let Some((a, b)) = split {
                return (a.cmp(&b), Some(Decider::Pairs(a.max(b))));
            }
        }
        HandCategory::HighCard | HandCategory::Flush => {}
    }

    // kickers: walk all five cards highest first
    let ordering = hand::compare_high_cards(&ours.cards, &theirs.cards);
    let decider = hand::first_difference(&ours.cards, &theirs.cards)
        .map(|(a, b)| Decider::HighCard(a.rank().max(b.rank())));
    (ordering, decider)
}

impl TryFrom<Vec<Card>> for PokerHand {
    type Error = HandError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        let count = cards.len();
        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| HandError::CardCount(count))?;
        Ok(Self::new(cards))
    }
}

impl TryFrom<Hand> for PokerHand {
    type Error = HandError;

    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        Self::try_from(hand.into_cards())
    }
}

impl From<PokerHand> for Hand {
    fn from(hand: PokerHand) -> Self {
        Hand::new(hand.cards.to_vec())
    }
}

/// Five whitespace-separated cards, e.g. `"2H 3D 5S 9C KD"`.
impl FromStr for PokerHand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.parse::<Hand>()?)
    }
}

impl fmt::Display for PokerHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        hand::write_cards(f, &self.cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;
    use crate::deck::Deck;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn h(s: &str) -> PokerHand {
        s.parse().unwrap()
    }

    fn c(rank: Rank, suit: Suit) -> Card {
        Card::new(suit, rank)
    }

    #[test]
    fn test_wrong_card_counts() {
        for s in ["", "2H", "2H 3D 5S 9C", "2H 3D 5S 9C KD AS"] {
            let count = s.split_whitespace().count();
            assert_eq!(s.parse::<PokerHand>(), Err(HandError::CardCount(count)));
        }
    }

    #[test]
    fn test_bad_card_reported_before_count() {
        assert_eq!(
            "2H ZZ".parse::<PokerHand>(),
            Err(HandError::InvalidCard("ZZ".to_string()))
        );
    }

    #[test]
    fn test_duplicate_cards_accepted() {
        let hand = h("KD KD 2C 3C 4C");
        assert_eq!(hand.category(), HandCategory::Pair);
    }

    #[test]
    fn test_sorted_on_construction() {
        let hand = h("2H 4S 4C 3D 4H");
        assert_eq!(hand.to_string(), "4S 4C 4H 3D 2H");
        let hand = PokerHand::new([
            c(Rank::Two, Suit::Clubs),
            c(Rank::Ace, Suit::Clubs),
            c(Rank::Nine, Suit::Hearts),
            c(Rank::King, Suit::Spades),
            c(Rank::Ten, Suit::Diamonds),
        ]);
        assert_eq!(hand.to_string(), "AC KS 10D 9H 2C");
    }

    #[test]
    fn test_flush() {
        assert_eq!(classify(&h("2S 8S AS QS 3S")), HandCategory::Flush);
        // a flush with a pair is still a flush
        assert_eq!(classify(&h("2S 2S AS QS 3S")), HandCategory::Flush);
    }

    #[test]
    fn test_three_of_a_kind() {
        assert_eq!(classify(&h("2H 4S 4C 3D 4H")), HandCategory::ThreeOfKind);
    }

    #[test]
    fn test_four_of_a_kind_is_three_of_a_kind() {
        assert_eq!(classify(&h("7C 7D 7H 7S KD")), HandCategory::ThreeOfKind);
    }

    #[test]
    fn test_full_house_is_three_of_a_kind() {
        assert_eq!(classify(&h("QS QH QD JC JS")), HandCategory::ThreeOfKind);
    }

    #[test]
    fn test_two_pairs() {
        assert_eq!(classify(&h("AS AH KD KC 2S")), HandCategory::TwoPairs);
    }

    #[test]
    fn test_pair() {
        assert_eq!(classify(&h("2C 2S AS JC 4C")), HandCategory::Pair);
    }

    #[test]
    fn test_high_card() {
        assert_eq!(classify(&h("2H 3D 5S 9C KD")), HandCategory::HighCard);
        // a straight is not a category here
        assert_eq!(classify(&h("9S 8H 7C 6D 5S")), HandCategory::HighCard);
    }

    #[test]
    fn test_category_ordering() {
        assert!(HandCategory::Flush > HandCategory::ThreeOfKind);
        assert!(HandCategory::ThreeOfKind > HandCategory::TwoPairs);
        assert!(HandCategory::TwoPairs > HandCategory::Pair);
        assert!(HandCategory::Pair > HandCategory::HighCard);
    }

    #[test]
    fn test_high_card_ace_beats_king() {
        let black = h("2H 3D 5S 9C KD");
        let white = h("2C 3H 4S 8C AH");
        assert_eq!(compare(&white, &black), Ordering::Greater);
        assert_eq!(compare(&black, &white), Ordering::Less);
    }

    #[test]
    fn test_higher_pair_wins() {
        let black = h("2C 2S AS JC 4C");
        let white = h("AH AD 2H 3S 6S");
        assert_eq!(compare(&white, &black), Ordering::Greater);
    }

    #[test]
    fn test_flush_beats_three_of_a_kind() {
        let black = h("2H 4S 4C 3D 4H");
        let white = h("2S 8S AS QS 3S");
        assert_eq!(compare(&white, &black), Ordering::Greater);
    }

    #[test]
    fn test_higher_flush_wins() {
        let black = h("3C 7C 6C JC 4C");
        let white = h("2S 8S 4S QS 3S");
        assert_eq!(compare(&white, &black), Ordering::Greater);
    }

    #[test]
    fn test_second_card_breaks_high_card_tie() {
        let black = h("2H 3D 5S 9C KD");
        let white = h("2C 3H 4S 8C KH");
        assert_eq!(compare(&black, &white), Ordering::Greater);
    }

    #[test]
    fn test_identical_ranks_tie() {
        let black = h("2H 3D 5S 9C KD");
        let white = h("2D 3H 5C 9S KH");
        assert_eq!(compare(&black, &white), Ordering::Equal);
        assert_eq!(compare(&white, &black), Ordering::Equal);
    }

    #[test]
    fn test_triad_rank_beats_kickers() {
        let low = h("5C 5S 5D AC KC");
        let high = h("6C 6S 6D 2C 3H");
        assert_eq!(compare(&high, &low), Ordering::Greater);
    }

    #[test]
    fn test_triad_tie_goes_to_kicker() {
        let high_kicker = h("AC 5C 5S 5D 2C");
        let low_kicker = h("3C 5C 5S 5D 2C");
        assert_eq!(compare(&high_kicker, &low_kicker), Ordering::Greater);
    }

    #[test]
    fn test_two_pairs_higher_pair_first() {
        let aces_up = h("AS AH 3D 3C 2S");
        let kings_up = h("KS KH QD QC JS");
        assert_eq!(compare(&aces_up, &kings_up), Ordering::Greater);
    }

    #[test]
    fn test_two_pairs_lower_pair_second() {
        let queens = h("AS AH QD QC 2S");
        let jacks = h("AD AC JD JC KS");
        assert_eq!(compare(&queens, &jacks), Ordering::Greater);
    }

    #[test]
    fn test_two_pairs_kicker() {
        let king = h("AS AH QD QC KS");
        let two = h("AD AC QS QH 2S");
        assert_eq!(compare(&king, &two), Ordering::Greater);
    }

    #[test]
    fn test_pair_kicker() {
        let king = h("AS AH KD 9C 7S");
        let queen = h("AD AC QD 9S 7H");
        assert_eq!(compare(&king, &queen), Ordering::Greater);
    }

    #[test]
    fn test_poker_rules_override_high_cards() {
        let low_flush = h("6C 5C 4C 3C 2C");
        let four_of_suit = h("7D 6H 5H 4H 3H");
        assert_eq!(compare(&low_flush, &four_of_suit), Ordering::Greater);
        assert_eq!(
            Hand::from(low_flush).compare(Some(&Hand::from(four_of_suit))),
            Ordering::Less
        );
    }

    #[test]
    fn test_royal_flush_beats_four_of_suit() {
        let royal = h("AC KC QC JC 10C");
        let four_of_suit = h("7D 6H 5H 4H 3H");
        assert_eq!(compare(&royal, &four_of_suit), Ordering::Greater);
    }

    #[test]
    fn test_missing_hand_loses() {
        assert_eq!(h("2H 3D 5S 9C 7D").compare(None), Ordering::Greater);
    }

    #[test]
    fn test_deciders() {
        assert_eq!(
            resolve(&h("2S 8S AS QS 3S"), &h("2H 4S 4C 3D 4H")).1,
            Some(Decider::Category(HandCategory::Flush))
        );
        assert_eq!(
            resolve(&h("5C 5S 5D AC KC"), &h("6C 6S 6D 2C 3H")).1,
            Some(Decider::Triad(Rank::Six))
        );
        assert_eq!(
            resolve(&h("2C 2S AS JC 4C"), &h("AH AD 2H 3S 6S")).1,
            Some(Decider::Pairs(Rank::Ace))
        );
        assert_eq!(
            resolve(&h("2H 3D 5S 9C KD"), &h("2C 3H 4S 8C KH")).1,
            Some(Decider::HighCard(Rank::Nine))
        );
        assert_eq!(resolve(&h("2H 3D 5S 9C KD"), &h("2D 3H 5C 9S KH")).1, None);
    }

    #[test]
    fn test_decider_display() {
        assert_eq!(Decider::Category(HandCategory::Flush).to_string(), "flush");
        assert_eq!(Decider::Triad(Rank::Four).to_string(), "three of a kind: 4");
        assert_eq!(Decider::Pairs(Rank::Ace).to_string(), "pair: Ace");
        assert_eq!(Decider::HighCard(Rank::Ten).to_string(), "high card: 10");
    }

    #[test]
    fn test_ordering_properties_on_random_deals() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2000 {
            let mut deck = Deck::shuffled(&mut rng);
            let a = deck.deal_poker_hand().unwrap();
            let b = deck.deal_poker_hand().unwrap();

            assert_eq!(compare(&a, &a), Ordering::Equal, "{a}");
            assert_eq!(compare(&a, &b), compare(&b, &a).reverse(), "{a} vs {b}");
            if classify(&a) != classify(&b) {
                assert_eq!(compare(&a, &b), classify(&a).cmp(&classify(&b)), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_suits_never_matter_outside_flush() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let hand = Deck::shuffled(&mut rng).deal_poker_hand().unwrap();
            if hand.category() == HandCategory::Flush {
                continue;
            }
            // rotate every suit; a non-flush stays a non-flush of the same shape
            let cards = *hand.cards();
            let rotated = cards.map(|card| {
                let suit = match card.suit() {
                    Suit::Clubs => Suit::Diamonds,
                    Suit::Diamonds => Suit::Hearts,
                    Suit::Hearts => Suit::Spades,
                    Suit::Spades => Suit::Clubs,
                };
                Card::new(suit, card.rank())
            });
            assert_eq!(compare(&hand, &PokerHand::new(rotated)), Ordering::Equal);
        }
    }

    #[test]
    fn test_category_serde() {
        let json = serde_json::to_string(&HandCategory::TwoPairs).unwrap();
        assert_eq!(json, r#""TwoPairs""#);
        let decider = Decider::Pairs(Rank::Ace);
        let json = serde_json::to_string(&decider).unwrap();
        assert_eq!(json, r#"{"rule":"pairs","value":"Ace"}"#);
        assert_eq!(serde_json::from_str::<Decider>(&json).unwrap(), decider);
    }
}
