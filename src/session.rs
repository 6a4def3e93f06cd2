use crate::bank::LoadedBank;
use crate::clock::SessionClock;
use crate::logger;
use crate::models::{AnswerRecord, AppState, QuizConfig, QuizSession, SessionEvent};
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent};

impl QuizSession {
    /// Setup -> Active(0). The loader guarantees a non-empty question list.
    pub fn begin(config: &QuizConfig, bank: LoadedBank) -> QuizSession {
        let total = bank.questions.len();
        let mut clock = SessionClock::new(config.timer_enabled);
        clock.start();
        logger::log(&format!(
            "session started: {} / {} ({} questions)",
            config.domain.label(),
            config.difficulty.label(),
            total
        ));
        QuizSession {
            domain: config.domain,
            difficulty: config.difficulty,
            questions: bank.questions,
            current_index: 0,
            answers: vec![None; total],
            clock,
            highlighted_option: 0,
            reduced_set: bank.reduced,
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished_at.is_some()
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    pub fn current_question(&self) -> &crate::models::Question {
        &self.questions[self.current_index]
    }

    pub fn current_answer(&self) -> Option<&AnswerRecord> {
        self.answers[self.current_index].as_ref()
    }

    /// True once at least one question has a record. The start-up notice
    /// about a reduced question set is shown only while this is false.
    pub fn has_any_answer(&self) -> bool {
        self.answers.iter().any(|a| a.is_some())
    }

    /// Fraction of questions passed, for the progress bar.
    pub fn progress_percent(&self) -> u16 {
        (self.current_index * 100 / self.questions.len()) as u16
    }

    /// Records the answer for the current question. The first answer is
    /// final: returns false without touching the record when one exists
    /// already, or when the session is finished.
    fn record_answer(&mut self, chosen_index: Option<usize>) -> bool {
        if self.is_finished() || self.answers[self.current_index].is_some() {
            return false;
        }
        let question = &self.questions[self.current_index];
        // An out-of-range pick is stored as-is and scored incorrect; bounds
        // are the UI's concern, not the state machine's.
        let is_correct = chosen_index == Some(question.correct_index);
        self.answers[self.current_index] = Some(AnswerRecord {
            chosen_index,
            correct_index: question.correct_index,
            is_correct,
            time_taken_seconds: self.clock.time_taken_seconds(),
        });
        self.clock.stop();
        true
    }

    pub fn choose(&mut self, index: usize) -> bool {
        self.record_answer(Some(index))
    }

    /// The clock expired with no answer recorded. Identical to an explicit
    /// "no answer" selection.
    pub fn timeout(&mut self) -> bool {
        self.record_answer(None)
    }

    /// User-confirmed skip; the confirmation itself happens at the UI
    /// boundary before this is invoked.
    pub fn skip(&mut self) -> bool {
        self.record_answer(None)
    }

    /// Active(i) -> Active(i+1), or Finished when on the last question.
    pub fn advance(&mut self) {
        if self.is_finished() {
            return;
        }
        self.clock.stop();
        if self.is_last_question() {
            self.finished_at = Some(Utc::now());
            logger::log("session finished");
        } else {
            self.current_index += 1;
            self.highlighted_option = 0;
            if self.current_answer().is_none() {
                self.clock.start();
            }
        }
    }

    /// Active(i) -> Active(i-1). Never clears or re-scores an answer; an
    /// already-answered question renders locked.
    pub fn go_back(&mut self) {
        if self.is_finished() || self.current_index == 0 {
            return;
        }
        self.clock.stop();
        self.current_index -= 1;
        self.highlighted_option = 0;
        if self.current_answer().is_none() {
            self.clock.start();
        }
    }
}

/// Applies a core transition event to an active session.
pub fn apply_session_event(session: &mut QuizSession, event: SessionEvent, app_state: &mut AppState) {
    match event {
        SessionEvent::Choose(index) => {
            session.choose(index);
        }
        SessionEvent::Timeout => {
            // Only an unanswered question advances on expiry; a tick landing
            // on an answered question is ignored.
            if session.timeout() {
                session.advance();
                if session.is_finished() {
                    *app_state = AppState::Results;
                }
            }
        }
        SessionEvent::SkipConfirmed => {
            session.skip();
            session.advance();
            *app_state = if session.is_finished() {
                AppState::Results
            } else {
                AppState::Quiz
            };
        }
        SessionEvent::Advance => {
            if session.current_answer().is_none() {
                // Advancing past an unanswered question needs confirmation.
                *app_state = AppState::SkipConfirm;
            } else {
                session.advance();
                if session.is_finished() {
                    *app_state = AppState::Results;
                }
            }
        }
        SessionEvent::GoBack => session.go_back(),
        SessionEvent::Restart | SessionEvent::GoHome | SessionEvent::EnterReview => {}
    }
}

/// Single handler for the whole event union. Session-lifecycle events
/// (restart, go home) discard the owned session; the rest are forwarded to
/// the state machine.
pub fn route_event(
    session_slot: &mut Option<QuizSession>,
    event: SessionEvent,
    app_state: &mut AppState,
) {
    match event {
        SessionEvent::GoHome if *app_state == AppState::Quiz && session_slot.is_some() => {
            // Abandoning a live session is confirmed first, like a skip.
            *app_state = AppState::QuitConfirm;
        }
        SessionEvent::Restart | SessionEvent::GoHome => {
            *session_slot = None;
            *app_state = AppState::DomainSelect;
        }
        SessionEvent::EnterReview => {
            if session_slot.as_ref().is_some_and(|s| s.is_finished()) {
                *app_state = AppState::Review;
            }
        }
        other => {
            if let Some(session) = session_slot.as_mut() {
                apply_session_event(session, other, app_state);
            }
        }
    }
}

/// Maps a key press in the quiz view to a session event. Moving the option
/// cursor is pure presentation and is handled inline.
pub fn handle_quiz_input(session: &mut QuizSession, key: KeyEvent) -> Option<SessionEvent> {
    let answered = session.current_answer().is_some();
    if !answered {
        match key.code {
            KeyCode::Up => {
                if session.highlighted_option > 0 {
                    session.highlighted_option -= 1;
                }
                None
            }
            KeyCode::Down => {
                if session.highlighted_option + 1 < session.current_question().options.len() {
                    session.highlighted_option += 1;
                }
                None
            }
            KeyCode::Enter => Some(SessionEvent::Choose(session.highlighted_option)),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if index < session.current_question().options.len() {
                    Some(SessionEvent::Choose(index))
                } else {
                    None
                }
            }
            KeyCode::Right | KeyCode::Char('n') => Some(SessionEvent::Advance),
            KeyCode::Left | KeyCode::Char('p') => Some(SessionEvent::GoBack),
            KeyCode::Esc => Some(SessionEvent::GoHome),
            _ => None,
        }
    } else {
        match key.code {
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('n') => Some(SessionEvent::Advance),
            KeyCode::Left | KeyCode::Char('p') => Some(SessionEvent::GoBack),
            KeyCode::Esc => Some(SessionEvent::GoHome),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, Domain, Question};
    use crossterm::event::KeyModifiers;

    fn make_questions(n: usize) -> Vec<Question> {
        (0..n)
            .map(|i| Question {
                question: format!("Question {}?", i),
                options: vec![
                    "Option A".to_string(),
                    "Option B".to_string(),
                    "Option C".to_string(),
                    "Option D".to_string(),
                ],
                correct_index: i % 4,
                difficulty: Difficulty::Beginner,
                explanation: None,
            })
            .collect()
    }

    fn make_session(n: usize) -> QuizSession {
        let config = QuizConfig::new(Domain::Sports, Difficulty::Beginner);
        QuizSession::begin(
            &config,
            LoadedBank {
                questions: make_questions(n),
                reduced: false,
            },
        )
    }

    fn finish_all_correct(session: &mut QuizSession) {
        while !session.is_finished() {
            let correct = session.current_question().correct_index;
            session.choose(correct);
            session.advance();
        }
    }

    #[test]
    fn test_begin_is_active_at_zero() {
        let session = make_session(3);
        assert_eq!(session.current_index, 0);
        assert_eq!(session.answers.len(), 3);
        assert!(session.answers.iter().all(|a| a.is_none()));
        assert!(!session.is_finished());
        assert!(session.clock.is_running());
    }

    #[test]
    fn test_choose_correct_records_answer() {
        let mut session = make_session(3);
        let correct = session.current_question().correct_index;
        assert!(session.choose(correct));
        let record = session.current_answer().unwrap();
        assert_eq!(record.chosen_index, Some(correct));
        assert!(record.is_correct);
        assert!(!session.clock.is_running());
    }

    #[test]
    fn test_choose_incorrect_records_answer() {
        let mut session = make_session(3);
        let correct = session.current_question().correct_index;
        let wrong = (correct + 1) % 4;
        assert!(session.choose(wrong));
        let record = session.current_answer().unwrap();
        assert_eq!(record.chosen_index, Some(wrong));
        assert!(!record.is_correct);
    }

    #[test]
    fn test_first_answer_is_final() {
        let mut session = make_session(3);
        let correct = session.current_question().correct_index;
        assert!(session.choose(correct));
        let first = session.current_answer().unwrap().clone();
        assert!(!session.choose((correct + 1) % 4));
        assert_eq!(session.current_answer().unwrap(), &first);
    }

    #[test]
    fn test_out_of_range_choice_is_recorded_incorrect() {
        let mut session = make_session(3);
        assert!(session.choose(99));
        let record = session.current_answer().unwrap();
        assert_eq!(record.chosen_index, Some(99));
        assert!(!record.is_correct);
    }

    #[test]
    fn test_timeout_records_no_answer() {
        let mut session = make_session(3);
        assert!(session.timeout());
        let record = session.current_answer().unwrap();
        assert_eq!(record.chosen_index, None);
        assert!(!record.is_correct);
        // A second expiry changes nothing.
        assert!(!session.timeout());
    }

    #[test]
    fn test_has_any_answer_flips_on_first_record() {
        let mut session = make_session(3);
        assert!(!session.has_any_answer());
        session.choose(0);
        assert!(session.has_any_answer());
        session.advance();
        assert!(session.has_any_answer());
    }

    #[test]
    fn test_advance_through_all_questions_finishes() {
        let mut session = make_session(3);
        finish_all_correct(&mut session);
        assert!(session.is_finished());
        assert!(session.finished_at.is_some());
    }

    #[test]
    fn test_single_question_session_finishes_immediately() {
        let mut session = make_session(1);
        session.choose(0);
        session.advance();
        assert!(session.is_finished());
    }

    #[test]
    fn test_prev_then_next_preserves_record() {
        let mut session = make_session(3);
        session.choose(1);
        let recorded = session.current_answer().unwrap().clone();
        session.advance();
        session.go_back();
        assert_eq!(session.current_index, 0);
        assert_eq!(session.current_answer().unwrap(), &recorded);
        session.advance();
        session.go_back();
        assert_eq!(session.current_answer().unwrap(), &recorded);
    }

    #[test]
    fn test_go_back_at_first_question_is_noop() {
        let mut session = make_session(3);
        session.go_back();
        assert_eq!(session.current_index, 0);
    }

    #[test]
    fn test_finished_session_rejects_mutation() {
        let mut session = make_session(2);
        finish_all_correct(&mut session);
        let index = session.current_index;
        assert!(!session.choose(0));
        assert!(!session.timeout());
        session.advance();
        session.go_back();
        assert_eq!(session.current_index, index);
    }

    #[test]
    fn test_advance_unanswered_asks_for_skip_confirm() {
        let mut session = make_session(3);
        let mut app_state = AppState::Quiz;
        apply_session_event(&mut session, SessionEvent::Advance, &mut app_state);
        assert_eq!(app_state, AppState::SkipConfirm);
        assert_eq!(session.current_index, 0);
        assert!(session.current_answer().is_none());
    }

    #[test]
    fn test_skip_confirmed_records_and_advances() {
        let mut session = make_session(3);
        let mut app_state = AppState::SkipConfirm;
        apply_session_event(&mut session, SessionEvent::SkipConfirmed, &mut app_state);
        assert_eq!(app_state, AppState::Quiz);
        assert_eq!(session.current_index, 1);
        assert_eq!(session.answers[0].as_ref().unwrap().chosen_index, None);
    }

    #[test]
    fn test_timeout_event_advances_and_finishes() {
        let mut session = make_session(1);
        let mut app_state = AppState::Quiz;
        apply_session_event(&mut session, SessionEvent::Timeout, &mut app_state);
        assert!(session.is_finished());
        assert_eq!(app_state, AppState::Results);
    }

    #[test]
    fn test_timeout_event_on_answered_question_is_ignored() {
        let mut session = make_session(2);
        session.choose(0);
        let mut app_state = AppState::Quiz;
        apply_session_event(&mut session, SessionEvent::Timeout, &mut app_state);
        assert_eq!(session.current_index, 0);
        assert_eq!(app_state, AppState::Quiz);
    }

    #[test]
    fn test_route_go_home_mid_quiz_asks_for_confirmation() {
        let mut slot = Some(make_session(2));
        let mut app_state = AppState::Quiz;
        route_event(&mut slot, SessionEvent::GoHome, &mut app_state);
        assert_eq!(app_state, AppState::QuitConfirm);
        assert!(slot.is_some());
    }

    #[test]
    fn test_route_go_home_confirmed_discards_session() {
        let mut slot = Some(make_session(2));
        let mut app_state = AppState::QuitConfirm;
        route_event(&mut slot, SessionEvent::GoHome, &mut app_state);
        assert!(slot.is_none());
        assert_eq!(app_state, AppState::DomainSelect);
    }

    #[test]
    fn test_route_go_home_from_results_needs_no_confirmation() {
        let mut slot = Some(make_session(2));
        finish_all_correct(slot.as_mut().unwrap());
        let mut app_state = AppState::Results;
        route_event(&mut slot, SessionEvent::GoHome, &mut app_state);
        assert!(slot.is_none());
        assert_eq!(app_state, AppState::DomainSelect);
    }

    #[test]
    fn test_route_restart_discards_session() {
        let mut slot = Some(make_session(2));
        let mut app_state = AppState::Results;
        route_event(&mut slot, SessionEvent::Restart, &mut app_state);
        assert!(slot.is_none());
        assert_eq!(app_state, AppState::DomainSelect);
    }

    #[test]
    fn test_route_review_requires_finished_session() {
        let mut slot = Some(make_session(2));
        let mut app_state = AppState::Results;
        route_event(&mut slot, SessionEvent::EnterReview, &mut app_state);
        assert_eq!(app_state, AppState::Results);

        finish_all_correct(slot.as_mut().unwrap());
        route_event(&mut slot, SessionEvent::EnterReview, &mut app_state);
        assert_eq!(app_state, AppState::Review);
    }

    #[test]
    fn test_four_correct_one_timeout_scores_great() {
        use crate::score::{summarize, Tier};

        let mut session = make_session(5);
        for _ in 0..4 {
            let correct = session.current_question().correct_index;
            session.choose(correct);
            session.advance();
        }
        session.timeout();
        session.advance();
        assert!(session.is_finished());

        let summary = summarize(&session);
        assert_eq!(summary.correct_count, 4);
        assert_eq!(summary.total, 5);
        assert_eq!(summary.accuracy_percent, 80);
        assert_eq!(summary.tier, Tier::Great);
    }

    #[test]
    fn test_key_enter_chooses_highlighted_option() {
        let mut session = make_session(3);
        session.highlighted_option = 2;
        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::empty());
        assert_eq!(
            handle_quiz_input(&mut session, key),
            Some(SessionEvent::Choose(2))
        );
    }

    #[test]
    fn test_key_digit_chooses_directly() {
        let mut session = make_session(3);
        let key = KeyEvent::new(KeyCode::Char('3'), KeyModifiers::empty());
        assert_eq!(
            handle_quiz_input(&mut session, key),
            Some(SessionEvent::Choose(2))
        );
    }

    #[test]
    fn test_key_digit_beyond_option_count_is_ignored() {
        let mut session = make_session(3);
        let key = KeyEvent::new(KeyCode::Char('7'), KeyModifiers::empty());
        assert_eq!(handle_quiz_input(&mut session, key), None);
        assert!(session.current_answer().is_none());

        // The last valid digit still picks its option.
        let key = KeyEvent::new(KeyCode::Char('4'), KeyModifiers::empty());
        assert_eq!(
            handle_quiz_input(&mut session, key),
            Some(SessionEvent::Choose(3))
        );
    }

    #[test]
    fn test_key_arrows_move_highlight_within_bounds() {
        let mut session = make_session(3);
        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::empty());
        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::empty());

        assert_eq!(handle_quiz_input(&mut session, up), None);
        assert_eq!(session.highlighted_option, 0);

        for _ in 0..10 {
            handle_quiz_input(&mut session, down);
        }
        assert_eq!(session.highlighted_option, 3);
    }

    #[test]
    fn test_key_enter_after_answer_advances() {
        let mut session = make_session(3);
        session.choose(0);
        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::empty());
        assert_eq!(
            handle_quiz_input(&mut session, key),
            Some(SessionEvent::Advance)
        );
    }

    #[test]
    fn test_key_esc_goes_home() {
        let mut session = make_session(3);
        let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::empty());
        assert_eq!(
            handle_quiz_input(&mut session, key),
            Some(SessionEvent::GoHome)
        );
    }
}
