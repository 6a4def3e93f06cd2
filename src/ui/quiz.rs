use crate::models::QuizSession;
use crate::ui::layout::calculate_quiz_chunks;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw_quiz(f: &mut Frame, session: &QuizSession, notice: Option<&str>) {
    let layout = calculate_quiz_chunks(f.area());

    let progress = format!(
        "Question {} / {} - {} · {}",
        session.current_index + 1,
        session.questions.len(),
        session.domain.label(),
        session.difficulty.label()
    );
    let header = Paragraph::new(progress)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{}%", session.progress_percent())),
        );
    f.render_widget(header, layout.header_area);

    let answered = session.current_answer().is_some();
    let timer_text = if !session.clock.enabled() {
        "off".to_string()
    } else if answered {
        "done".to_string()
    } else {
        format!("{}s", session.clock.remaining_seconds())
    };
    let timer_style = if session.clock.enabled() && !answered && session.clock.remaining_seconds() <= 5
    {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };
    let timer = Paragraph::new(timer_text)
        .style(timer_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Timer"));
    f.render_widget(timer, layout.timer_area);

    let question = Paragraph::new(session.current_question().question.as_str())
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(question, layout.question_area);

    let record = session.current_answer();
    let items: Vec<ListItem> = session
        .current_question()
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let text = format!("{}. {}", i + 1, option);
            let style = match record {
                // Locked rendering once answered: correct option green,
                // an incorrect pick red, the rest dimmed.
                Some(r) => {
                    if i == r.correct_index {
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD)
                    } else if r.chosen_index == Some(i) {
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::DarkGray)
                    }
                }
                None => {
                    if i == session.highlighted_option {
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    }
                }
            };
            ListItem::new(text).style(style)
        })
        .collect();
    let options = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Options"))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_widget(options, layout.options_area);

    let feedback_line = match record {
        Some(r) if r.chosen_index.is_none() => Line::from(Span::styled(
            "No answer recorded",
            Style::default().fg(Color::Red),
        )),
        Some(r) if r.is_correct => Line::from(Span::styled(
            "Correct!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Some(_) => Line::from(Span::styled(
            "Incorrect",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        None => match notice {
            Some(message) => Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(Color::Yellow),
            )),
            None => Line::from(""),
        },
    };
    let feedback = Paragraph::new(vec![feedback_line])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(feedback, layout.feedback_area);

    let mut help_spans = Vec::new();
    if !answered {
        help_spans.extend([
            Span::styled(
                "↑/↓",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Select  "),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Answer  "),
            Span::styled(
                "1-9",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Quick pick  "),
        ]);
    } else {
        help_spans.extend([
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(if session.is_last_question() {
                " Finish  "
            } else {
                " Next  "
            }),
        ]);
    }
    help_spans.extend([
        Span::styled(
            "←/→",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Prev/Next  "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Home"),
    ]);
    let help = Paragraph::new(vec![Line::from(help_spans)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

pub fn draw_skip_confirmation(f: &mut Frame) {
    draw_confirmation(
        f,
        "Skip Question",
        "No answer selected. Skip this question?",
        " Yes (Skip)  ",
        " No (Keep Answering)",
    );
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    draw_confirmation(
        f,
        "Leave Quiz",
        "Quit this quiz? Your progress will be lost.",
        " Yes (Quit)  ",
        " No (Keep Playing)",
    );
}

fn draw_confirmation(f: &mut Frame, title: &str, message: &str, yes_label: &str, no_label: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new(title.to_string())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(yes_label.to_string()),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(no_label.to_string()),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
