//! Subcommand runners. Each prints to stdout and returns the first hard
//! error; `judge` keeps going past bad lines and fails at the end.

use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;

use pokerhand_core::deck::Deck;
use pokerhand_core::matchup::Matchup;
use pokerhand_core::poker::PokerHand;

use crate::Config;
use crate::render::{self, HandReport, ShowdownReport};

/// Environment fallback for `deal --seed`.
pub const SEED_VAR: &str = "POKERHAND_SEED";

type CommandResult = Result<(), Box<dyn Error>>;

pub fn compare(config: &Config, first: &str, second: &str) -> CommandResult {
    let first: PokerHand = first.parse()?;
    let second: PokerHand = second.parse()?;
    tracing::debug!(first = %first, second = %second, "Parsed hands");
    print_showdown(config, &first, &second)
}

pub fn classify(config: &Config, hand: &str) -> CommandResult {
    let hand: PokerHand = hand.parse()?;
    let report = HandReport::new(&config.black, &hand);
    tracing::info!(hand = %hand, category = %report.category, "Classified hand");
    println!("{}", render::category(config.format, &report)?);
    Ok(())
}

pub fn judge(config: &Config, input: Option<&Path>) -> CommandResult {
    let reader: Box<dyn BufRead> = match input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin().lock())),
    };
    let tally = judge_lines(config, reader, io::stdout().lock(), io::stderr().lock())?;

    tracing::info!(judged = tally.judged, failed = tally.failed, "Finished judging");
    if tally.failed > 0 {
        return Err(format!(
            "{} of {} lines could not be judged",
            tally.failed,
            tally.judged + tally.failed
        )
        .into());
    }
    Ok(())
}

/// Lines judged and lines rejected by one `judge` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    pub judged: usize,
    pub failed: usize,
}

/// Judge every non-blank line of `input`, writing verdicts to `out` and
/// `line N: <error>` to `errors`. Lines are numbered from 1. Bytes that are
/// not UTF-8 are replaced, so such a line fails to parse instead of ending
/// the run.
pub fn judge_lines<R, W, E>(config: &Config, input: R, mut out: W, mut errors: E) -> Result<Tally, Box<dyn Error>>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut tally = Tally::default();
    for (index, bytes) in input.split(b'\n').enumerate() {
        let bytes = bytes?;
        let line = String::from_utf8_lossy(&bytes);
        if line.trim().is_empty() {
            continue;
        }
        let number = index + 1;
        match line.parse::<Matchup>() {
            Ok(matchup) => {
                let report = ShowdownReport::new(
                    (config.black.as_str(), &matchup.black),
                    (config.white.as_str(), &matchup.white),
                );
                writeln!(out, "{}", render::judged(config.format, &report)?)?;
                tally.judged += 1;
            }
            Err(e) => {
                tracing::debug!(line = number, error = %e, "Skipping game line");
                writeln!(errors, "line {number}: {e}")?;
                tally.failed += 1;
            }
        }
    }
    Ok(tally)
}

/// `--seed` wins; otherwise [`SEED_VAR`] if set; otherwise `None` (OS
/// randomness). A set but unparsable variable is an error, not a silent
/// fallback.
pub fn resolve_seed(flag: Option<u64>, env: Option<String>) -> Result<Option<u64>, Box<dyn Error>> {
    if flag.is_some() {
        return Ok(flag);
    }
    match env {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| format!("invalid {SEED_VAR} '{raw}': {e}").into()),
        None => Ok(None),
    }
}

pub fn deal(config: &Config, seed: Option<u64>) -> CommandResult {
    let mut deck = match seed {
        Some(seed) => Deck::shuffled(&mut StdRng::seed_from_u64(seed)),
        None => Deck::shuffled(&mut rand::rng()),
    };
    let first = deck.deal_poker_hand()?;
    let second = deck.deal_poker_hand()?;
    tracing::debug!(?seed, first = %first, second = %second, "Dealt hands");
    print_showdown(config, &first, &second)
}

fn print_showdown(config: &Config, first: &PokerHand, second: &PokerHand) -> CommandResult {
    let report = ShowdownReport::new(
        (config.black.as_str(), first),
        (config.white.as_str(), second),
    );
    tracing::info!(summary = %report.summary, "Showdown");
    println!("{}", render::showdown(config.format, &report)?);
    Ok(())
}
