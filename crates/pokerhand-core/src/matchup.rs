//! Game lines of the form `Black: 2H 3D 5S 9C KD  White: 2C 3H 4S 8C AH`.

use std::fmt;
use std::str::FromStr;

use crate::error::HandError;
use crate::poker::PokerHand;
use crate::showdown::{self, Verdict};

const BLACK: &str = "Black:";
const WHITE: &str = "White:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matchup {
    pub black: PokerHand,
    pub white: PokerHand,
}

impl Matchup {
    /// Black plays first: `Winner::Hand1` means Black won.
    pub fn judge(&self) -> Verdict {
        showdown::showdown(&self.black, &self.white)
    }
}

impl FromStr for Matchup {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let invalid = || HandError::InvalidMatchup(line.to_string());
        let rest = line.strip_prefix(BLACK).ok_or_else(invalid)?;
        let (black, white) = rest.split_once(WHITE).ok_or_else(invalid)?;
        Ok(Self {
            black: black.parse()?,
            white: white.parse()?,
        })
    }
}

impl fmt::Display for Matchup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{BLACK} {}  {WHITE} {}", self.black, self.white)
    }
}
