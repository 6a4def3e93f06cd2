use crate::clock::SessionClock;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Topical question category. Each domain maps to one bank file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Sports,
    History,
    Geography,
    Geopolitics,
    ScienceTech,
    LiteratureEntertainment,
}

impl Domain {
    pub const ALL: [Domain; 6] = [
        Domain::Sports,
        Domain::History,
        Domain::Geography,
        Domain::Geopolitics,
        Domain::ScienceTech,
        Domain::LiteratureEntertainment,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Domain::Sports => "Sports",
            Domain::History => "History",
            Domain::Geography => "Geography",
            Domain::Geopolitics => "Geopolitics",
            Domain::ScienceTech => "Science & Tech",
            Domain::LiteratureEntertainment => "Literature & Entertainment",
        }
    }

    /// File stem of the bank inside the data directory (`<stem>.json`).
    pub fn file_stem(&self) -> &'static str {
        match self {
            Domain::Sports => "sports",
            Domain::History => "history",
            Domain::Geography => "geography",
            Domain::Geopolitics => "geopolitics",
            Domain::ScienceTech => "sciencetech",
            Domain::LiteratureEntertainment => "literatureentertainment",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }

    /// How many questions a session at this difficulty asks for.
    pub fn default_count(&self) -> usize {
        match self {
            Difficulty::Beginner => 5,
            Difficulty::Intermediate => 10,
            Difficulty::Advanced => 15,
        }
    }
}

/// One multiple-choice question as stored in the bank files.
///
/// Invariant (checked by the loader): `options.len() >= 2` and
/// `correct_index < options.len()`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// The scored outcome for one question. Created exactly once, either on a
/// user selection or on timeout/skip, and never overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    /// `None` means the question expired or was skipped without a pick.
    pub chosen_index: Option<usize>,
    pub correct_index: usize,
    pub is_correct: bool,
    pub time_taken_seconds: u64,
}

#[derive(Debug, Clone, Copy)]
pub struct QuizConfig {
    pub domain: Domain,
    pub difficulty: Difficulty,
    pub timer_enabled: bool,
}

impl QuizConfig {
    pub fn new(domain: Domain, difficulty: Difficulty) -> Self {
        Self {
            domain,
            difficulty,
            timer_enabled: true,
        }
    }

    pub fn question_count(&self) -> usize {
        self.difficulty.default_count()
    }
}

/// One attempt at a sequence of questions, from setup through finish.
/// Owned by the app loop and discarded on restart or go-home.
#[derive(Debug)]
pub struct QuizSession {
    pub domain: Domain,
    pub difficulty: Difficulty,
    pub questions: Vec<Question>,
    pub current_index: usize,
    pub answers: Vec<Option<AnswerRecord>>,
    pub clock: SessionClock,
    /// Option the selection cursor sits on while the question is open.
    pub highlighted_option: usize,
    /// Set when the bank had fewer matches than requested.
    pub reduced_set: bool,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    DomainSelect,
    DifficultySelect,
    Quiz,
    SkipConfirm,
    QuitConfirm,
    Results,
    Review,
}

/// Discrete input events consumed by the session state machine. Key handlers
/// translate raw input into these; the transition logic never sees keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Choose(usize),
    Timeout,
    SkipConfirmed,
    Advance,
    GoBack,
    Restart,
    GoHome,
    EnterReview,
}
