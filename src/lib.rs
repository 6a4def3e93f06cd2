pub mod bank;
pub mod clock;
pub mod logger;
pub mod models;
pub mod review;
pub mod score;
pub mod session;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use bank::{bank_path, load_bank, BankError, LoadedBank};
pub use clock::{SessionClock, QUESTION_SECONDS};
pub use models::{
    AnswerRecord, AppState, Difficulty, Domain, Question, QuizConfig, QuizSession, SessionEvent,
};
pub use review::{assemble_review, ReviewEntry};
pub use score::{summarize, Summary, Tier};
pub use session::{apply_session_event, handle_quiz_input, route_event};
pub use ui::{
    draw_difficulty_select, draw_domain_select, draw_quiz, draw_results, draw_review,
    draw_skip_confirmation,
};
pub use utils::truncate_string;
