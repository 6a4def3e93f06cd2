use crate::models::{Difficulty, Domain};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

fn menu_chunks(f: &Frame) -> std::rc::Rc<[ratatui::layout::Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area())
}

fn selection_list<'a>(labels: &[&'a str], selected: usize, title: &'a str) -> List<'a> {
    let items: Vec<ListItem> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let style = if i == selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(*label).style(style)
        })
        .collect();

    List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
}

fn status_paragraph(status: Option<&str>, fallback: &'static str) -> Paragraph<'static> {
    let (text, style) = match status {
        Some(message) => (
            message.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        None => (fallback.to_string(), Style::default().fg(Color::DarkGray)),
    };
    Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
}

fn help_paragraph<'a>(entries: &[(&'a str, &'a str)]) -> Paragraph<'a> {
    let mut spans = Vec::new();
    for (key, action) in entries {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::from(format!(" {}  ", action)));
    }
    Paragraph::new(vec![Line::from(spans)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
}

pub fn draw_domain_select(f: &mut Frame, selected: usize, status: Option<&str>) {
    let chunks = menu_chunks(f);

    let title = Paragraph::new("Trivia TUI")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let labels: Vec<&str> = Domain::ALL.iter().map(|d| d.label()).collect();
    f.render_widget(selection_list(&labels, selected, "Pick a Domain"), chunks[1]);

    f.render_widget(
        status_paragraph(status, "Pick a topic, then a difficulty."),
        chunks[2],
    );
    f.render_widget(
        help_paragraph(&[("↑/↓", "Navigate"), ("Enter", "Select"), ("q", "Quit")]),
        chunks[3],
    );
}

pub fn draw_difficulty_select(f: &mut Frame, domain: Domain, selected: usize, status: Option<&str>) {
    let chunks = menu_chunks(f);

    let title = Paragraph::new(format!("Trivia TUI - {}", domain.label()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let labels: Vec<String> = Difficulty::ALL
        .iter()
        .map(|d| format!("{} ({} questions)", d.label(), d.default_count()))
        .collect();
    let label_refs: Vec<&str> = labels.iter().map(|s| s.as_str()).collect();
    f.render_widget(
        selection_list(&label_refs, selected, "Pick a Difficulty"),
        chunks[1],
    );

    f.render_widget(
        status_paragraph(status, "Each question is timed at 15 seconds."),
        chunks[2],
    );
    f.render_widget(
        help_paragraph(&[
            ("↑/↓", "Navigate"),
            ("Enter", "Start"),
            ("Esc", "Back"),
            ("q", "Quit"),
        ]),
        chunks[3],
    );
}
