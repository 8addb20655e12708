pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod matchup;
pub mod poker;
pub mod showdown;

pub use card::{Card, Rank, Suit};
pub use error::HandError;
pub use hand::Hand;
pub use poker::{HandCategory, PokerHand, classify, compare};
