pub mod layout;
mod menu;
mod quiz;
mod results;
mod review;

pub use layout::{calculate_quiz_chunks, calculate_results_chunks};
pub use menu::{draw_difficulty_select, draw_domain_select};
pub use quiz::{draw_quit_confirmation, draw_quiz, draw_skip_confirmation};
pub use results::draw_results;
pub use review::draw_review;
