use crate::review::ReviewEntry;
use crate::utils::truncate_string;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_review(f: &mut Frame, entries: &[ReviewEntry], scroll: u16) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Review")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let mut body = Text::default();
    for (i, entry) in entries.iter().enumerate() {
        body.push_line(Line::from(Span::styled(
            format!("Q{}. {}", i + 1, truncate_string(&entry.question_text, 80)),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        let (chosen, chosen_style) = match &entry.chosen_answer {
            Some(answer) => (answer.as_str(), Style::default().fg(Color::Yellow)),
            None => ("No answer", Style::default().fg(Color::DarkGray)),
        };
        body.push_line(Line::from(vec![
            Span::from("   Your answer: "),
            Span::styled(chosen.to_string(), chosen_style),
        ]));
        body.push_line(Line::from(vec![
            Span::from("   Correct answer: "),
            Span::styled(
                entry.correct_answer.clone(),
                Style::default().fg(Color::Green),
            ),
        ]));
        if let Some(explanation) = &entry.explanation {
            body.push_line(Line::from(format!("   Explanation: {}", explanation)));
        }
        body.push_line(Line::from(""));
    }
    let list = Paragraph::new(body)
        .wrap(Wrap { trim: true })
        .scroll((scroll, 0))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(list, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "↑/↓",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Scroll  "),
        Span::styled(
            "m",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Home  "),
        Span::styled(
            "q",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
