use crate::logger;
use crate::models::{Difficulty, Domain, Question};
use rand::seq::SliceRandom;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum BankError {
    /// The bank file could not be read or parsed, or contained an invalid
    /// question entry. Fatal to starting a session.
    Unavailable(String),
    /// No question in the bank matches the requested difficulty. Fatal; the
    /// caller returns to difficulty selection.
    NoQuestions,
}

impl fmt::Display for BankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BankError::Unavailable(reason) => {
                write!(f, "Failed to load questions: {}", reason)
            }
            BankError::NoQuestions => {
                write!(f, "No questions available for this selection.")
            }
        }
    }
}

impl std::error::Error for BankError {}

#[derive(Debug, Deserialize)]
struct BankFile {
    questions: Vec<Question>,
}

#[derive(Debug)]
pub struct LoadedBank {
    pub questions: Vec<Question>,
    /// Fewer questions matched than were requested. Non-fatal; the session
    /// proceeds with the reduced set and the user is told.
    pub reduced: bool,
}

pub fn bank_path(dir: &Path, domain: Domain) -> PathBuf {
    dir.join(format!("{}.json", domain.file_stem()))
}

/// Loads the bank for `domain`, keeps only questions at exactly `difficulty`,
/// shuffles them uniformly and returns at most `count`.
pub fn load_bank(
    dir: &Path,
    domain: Domain,
    difficulty: Difficulty,
    count: usize,
) -> Result<LoadedBank, BankError> {
    let path = bank_path(dir, domain);
    let content = fs::read_to_string(&path)
        .map_err(|e| BankError::Unavailable(format!("{}: {}", path.display(), e)))?;
    let bank: BankFile = serde_json::from_str(&content)
        .map_err(|e| BankError::Unavailable(format!("{}: {}", path.display(), e)))?;

    for q in &bank.questions {
        if q.options.len() < 2 || q.correct_index >= q.options.len() {
            return Err(BankError::Unavailable(format!(
                "invalid question entry: {}",
                q.question
            )));
        }
    }

    let mut matches: Vec<Question> = bank
        .questions
        .into_iter()
        .filter(|q| q.difficulty == difficulty)
        .collect();

    if matches.is_empty() {
        return Err(BankError::NoQuestions);
    }

    matches.shuffle(&mut rand::thread_rng());
    let reduced = matches.len() < count;
    matches.truncate(count);

    logger::log(&format!(
        "loaded bank {} ({}): {} question(s){}",
        domain.file_stem(),
        difficulty.label(),
        matches.len(),
        if reduced { ", reduced set" } else { "" }
    ));

    Ok(LoadedBank {
        questions: matches,
        reduced,
    })
}
