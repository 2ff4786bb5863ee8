//! Card text corpora supplied at startup.
//!
//! The two corpora (black prompts, white answers) are immutable ordered
//! lists of strings. Deck cards take their ids from corpus positions, so
//! corpus order is part of the persisted session's meaning: changing a
//! corpus file invalidates any stored session.
//!
//! Sources, in order of precedence:
//! 1. `BACKEND_BLACK_DECK` / `BACKEND_WHITE_DECK` env vars pointing at
//!    newline-delimited text files (blank lines and `#` comments skipped),
//! 2. the compiled-in starter pack.

use std::env;
use std::fs;

use tracing::info;

use crate::domain::cards::CardId;
use crate::error::AppError;

pub const BLACK_DECK_ENV: &str = "BACKEND_BLACK_DECK";
pub const WHITE_DECK_ENV: &str = "BACKEND_WHITE_DECK";

const STARTER_BLACK: &[&str] = &[
    "My secret talent is ____.",
    "The next big reality show: celebrities competing at ____.",
    "I could not finish the marathon because of ____.",
    "The museum's newest exhibit: a history of ____.",
    "Grandma's famous recipe calls for two cups of ____.",
    "The weather forecast for tomorrow is sunny with a chance of ____.",
    "My autobiography will be titled \"A Life of ____\".",
    "Scientists have finally discovered the source of ____.",
    "Nothing ruins a road trip faster than ____.",
    "The office holiday party was cancelled due to ____.",
    "This year's hottest new fragrance smells like ____.",
    "The real reason the dinosaurs went extinct: ____.",
    "My New Year's resolution is to give up ____.",
    "The school talent show ended abruptly when someone brought out ____.",
    "Behind every great leader stands ____.",
    "The latest fitness craze combines yoga with ____.",
];

const STARTER_WHITE: &[&str] = &[
    "a suspiciously confident pigeon",
    "interpretive dance",
    "an expired coupon",
    "the world's smallest violin",
    "aggressive gardening",
    "a lifetime supply of bubble wrap",
    "my neighbor's lawn gnomes",
    "an all-accordion marching band",
    "a very long staring contest",
    "soup that is mostly croutons",
    "a motivational poster of a cat",
    "the last slice of pizza",
    "an unsolicited slideshow of vacation photos",
    "synchronized napping",
    "a glitter explosion",
    "left-handed scissors",
    "a robot that only tells dad jokes",
    "competitive cheese rolling",
    "an umbrella that attracts rain",
    "the lost sock dimension",
    "a parrot with strong opinions",
    "twelve consecutive alarm snoozes",
    "an extremely detailed diorama",
    "the office printer's grudge",
    "a trampoline in the living room",
    "decaf coffee served at dawn",
    "an encyclopedia of doorknobs",
    "the fourth wall",
    "a kazoo solo",
    "mismatched chopsticks",
    "a surprisingly heavy feather",
    "the committee for naming committees",
    "weaponized politeness",
    "a map drawn from memory",
    "one thousand origami cranes",
    "the mute button, pressed too late",
    "a hamster-powered generator",
    "seasonal pumpkin everything",
    "the escalator temporarily being stairs",
    "a dramatic slow clap",
];

/// Immutable card-text corpora for one process lifetime.
#[derive(Debug, Clone)]
pub struct CardCorpus {
    black: Vec<String>,
    white: Vec<String>,
}

impl CardCorpus {
    /// Build a corpus pair, rejecting empty lists: a session cannot be
    /// reset without at least one prompt and one answer.
    pub fn new(black: Vec<String>, white: Vec<String>) -> Result<Self, AppError> {
        if black.is_empty() {
            return Err(AppError::config("black card corpus is empty"));
        }
        if white.is_empty() {
            return Err(AppError::config("white card corpus is empty"));
        }
        Ok(Self { black, white })
    }

    /// The compiled-in starter pack.
    pub fn starter() -> Self {
        Self {
            black: STARTER_BLACK.iter().map(|s| s.to_string()).collect(),
            white: STARTER_WHITE.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Load corpora from the deck-file env vars, falling back to the
    /// starter pack when neither is set.
    pub fn from_env() -> Result<Self, AppError> {
        let black = read_deck_file(BLACK_DECK_ENV)?;
        let white = read_deck_file(WHITE_DECK_ENV)?;

        let corpus = match (black, white) {
            (None, None) => {
                info!("no deck files configured, using starter corpora");
                Self::starter()
            }
            (black, white) => {
                let starter = Self::starter();
                Self::new(
                    black.unwrap_or(starter.black),
                    white.unwrap_or(starter.white),
                )?
            }
        };

        info!(
            black_cards = corpus.black.len(),
            white_cards = corpus.white.len(),
            "card corpora loaded"
        );
        Ok(corpus)
    }

    pub fn black(&self) -> &[String] {
        &self.black
    }

    pub fn white(&self) -> &[String] {
        &self.white
    }

    /// Text of a white card by id (corpus index).
    pub fn white_text(&self, id: CardId) -> Option<&str> {
        usize::try_from(id)
            .ok()
            .and_then(|i| self.white.get(i))
            .map(String::as_str)
    }
}

fn read_deck_file(env_var: &str) -> Result<Option<Vec<String>>, AppError> {
    let path = match env::var(env_var) {
        Ok(path) => path,
        Err(env::VarError::NotPresent) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let raw = fs::read_to_string(&path)
        .map_err(|e| AppError::config(format!("failed to read {env_var}={path}: {e}")))?;

    let cards: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();

    Ok(Some(cards))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_corpora_are_nonempty() {
        let corpus = CardCorpus::starter();
        assert!(!corpus.black().is_empty());
        assert!(corpus.white().len() >= 40);
    }

    #[test]
    fn empty_corpus_is_rejected() {
        assert!(CardCorpus::new(vec![], vec!["a".into()]).is_err());
        assert!(CardCorpus::new(vec!["b".into()], vec![]).is_err());
    }

    #[test]
    fn white_text_looks_up_by_corpus_index() {
        let corpus = CardCorpus::new(
            vec!["prompt".into()],
            vec!["zero".into(), "one".into()],
        )
        .unwrap();
        assert_eq!(corpus.white_text(1), Some("one"));
        assert_eq!(corpus.white_text(2), None);
        assert_eq!(corpus.white_text(-1), None);
    }
}
