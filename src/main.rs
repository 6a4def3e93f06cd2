use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use trivia_tui::{
    assemble_review, bank, handle_quiz_input, logger, route_event, summarize, ui, AppState,
    Difficulty, Domain, QuizConfig, QuizSession, SessionEvent,
};

const TICK_MILLIS: u64 = 250;

fn main() -> io::Result<()> {
    logger::init();
    let bank_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app_state = AppState::DomainSelect;
    let mut domain_index: usize = 0;
    let mut difficulty_index: usize = 0;
    let mut quiz_session: Option<QuizSession> = None;
    let mut status_line: Option<String> = None;
    let mut review_scroll: u16 = 0;

    loop {
        // The countdown is wall-clock based; observe it every pass so an
        // expired question records its "no answer" even between key events.
        if app_state == AppState::Quiz {
            let expired = quiz_session
                .as_mut()
                .map(|s| s.clock.poll_timeout())
                .unwrap_or(false);
            if expired {
                route_event(&mut quiz_session, SessionEvent::Timeout, &mut app_state);
            }
            // The reduced-set notice only matters before anything is answered.
            if status_line.is_some() && quiz_session.as_ref().is_some_and(|s| s.has_any_answer()) {
                status_line = None;
            }
        }

        terminal.draw(|f| match app_state {
            AppState::DomainSelect => {
                ui::draw_domain_select(f, domain_index, status_line.as_deref())
            }
            AppState::DifficultySelect => ui::draw_difficulty_select(
                f,
                Domain::ALL[domain_index],
                difficulty_index,
                status_line.as_deref(),
            ),
            AppState::Quiz | AppState::SkipConfirm | AppState::QuitConfirm => {
                if let Some(session) = &quiz_session {
                    ui::draw_quiz(f, session, status_line.as_deref());
                }
                if app_state == AppState::SkipConfirm {
                    ui::draw_skip_confirmation(f);
                } else if app_state == AppState::QuitConfirm {
                    ui::draw_quit_confirmation(f);
                }
            }
            AppState::Results => {
                if let Some(session) = &quiz_session {
                    ui::draw_results(f, &summarize(session));
                }
            }
            AppState::Review => {
                if let Some(session) = &quiz_session {
                    ui::draw_review(f, &assemble_review(session), review_scroll);
                }
            }
        })?;

        if !event::poll(Duration::from_millis(TICK_MILLIS))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            match app_state {
                AppState::DomainSelect => match key.code {
                    KeyCode::Up => domain_index = domain_index.saturating_sub(1),
                    KeyCode::Down => {
                        if domain_index < Domain::ALL.len() - 1 {
                            domain_index += 1;
                        }
                    }
                    KeyCode::Enter => {
                        status_line = None;
                        app_state = AppState::DifficultySelect;
                    }
                    KeyCode::Char('q') => break,
                    _ => {}
                },
                AppState::DifficultySelect => match key.code {
                    KeyCode::Up => difficulty_index = difficulty_index.saturating_sub(1),
                    KeyCode::Down => {
                        if difficulty_index < Difficulty::ALL.len() - 1 {
                            difficulty_index += 1;
                        }
                    }
                    KeyCode::Enter => {
                        let config = QuizConfig::new(
                            Domain::ALL[domain_index],
                            Difficulty::ALL[difficulty_index],
                        );
                        match bank::load_bank(
                            &bank_dir,
                            config.domain,
                            config.difficulty,
                            config.question_count(),
                        ) {
                            Ok(loaded) => {
                                status_line = loaded.reduced.then(|| {
                                    format!(
                                        "Only {} questions available. Starting with those.",
                                        loaded.questions.len()
                                    )
                                });
                                quiz_session = Some(QuizSession::begin(&config, loaded));
                                app_state = AppState::Quiz;
                            }
                            Err(err) => {
                                // Fatal to starting; no session is created and
                                // the user stays on difficulty selection.
                                logger::log(&format!("bank load failed: {}", err));
                                status_line = Some(err.to_string());
                            }
                        }
                    }
                    KeyCode::Esc => {
                        status_line = None;
                        app_state = AppState::DomainSelect;
                    }
                    KeyCode::Char('q') => break,
                    _ => {}
                },
                AppState::Quiz => {
                    let session_event = quiz_session
                        .as_mut()
                        .and_then(|session| handle_quiz_input(session, key));
                    if let Some(session_event) = session_event {
                        route_event(&mut quiz_session, session_event, &mut app_state);
                    }
                }
                AppState::SkipConfirm => match key.code {
                    KeyCode::Char('y') | KeyCode::Enter => {
                        route_event(
                            &mut quiz_session,
                            SessionEvent::SkipConfirmed,
                            &mut app_state,
                        );
                    }
                    KeyCode::Char('n') | KeyCode::Esc => app_state = AppState::Quiz,
                    _ => {}
                },
                AppState::QuitConfirm => match key.code {
                    KeyCode::Char('y') | KeyCode::Enter => {
                        route_event(&mut quiz_session, SessionEvent::GoHome, &mut app_state);
                    }
                    KeyCode::Char('n') | KeyCode::Esc => app_state = AppState::Quiz,
                    _ => {}
                },
                AppState::Results => match key.code {
                    KeyCode::Char('v') | KeyCode::Enter => {
                        review_scroll = 0;
                        route_event(&mut quiz_session, SessionEvent::EnterReview, &mut app_state);
                    }
                    KeyCode::Char('r') => {
                        route_event(&mut quiz_session, SessionEvent::Restart, &mut app_state);
                    }
                    KeyCode::Char('m') | KeyCode::Esc => {
                        route_event(&mut quiz_session, SessionEvent::GoHome, &mut app_state);
                    }
                    KeyCode::Char('q') => break,
                    _ => {}
                },
                AppState::Review => match key.code {
                    KeyCode::Up => review_scroll = review_scroll.saturating_sub(1),
                    KeyCode::Down => review_scroll = review_scroll.saturating_add(1),
                    KeyCode::Char('m') | KeyCode::Esc => {
                        route_event(&mut quiz_session, SessionEvent::GoHome, &mut app_state);
                    }
                    KeyCode::Char('q') => break,
                    _ => {}
                },
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
