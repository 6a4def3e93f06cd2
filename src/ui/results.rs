use crate::score::{Summary, Tier};
use crate::ui::layout::calculate_results_chunks;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::Perfect => Color::Magenta,
        Tier::Great => Color::Green,
        Tier::Good => Color::Yellow,
        Tier::Try => Color::Red,
    }
}

pub fn draw_results(f: &mut Frame, summary: &Summary) {
    let layout = calculate_results_chunks(f.area());

    let title = Paragraph::new("Results")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let mut stats = Text::default();
    stats.push_line(Line::from(""));
    stats.push_line(Line::from(format!(
        "Score:    {} / {}",
        summary.correct_count, summary.total
    )));
    stats.push_line(Line::from(""));
    stats.push_line(Line::from(format!(
        "Accuracy: {}%",
        summary.accuracy_percent
    )));
    stats.push_line(Line::from(""));
    stats.push_line(Line::from(format!(
        "Time:     {}s",
        summary.duration_seconds
    )));
    let stats = Paragraph::new(stats)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(stats, layout.stats_area);

    let quote = Paragraph::new(summary.tier.quote())
        .style(
            Style::default()
                .fg(tier_color(summary.tier))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(quote, layout.quote_area);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "v",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Review  "),
        Span::styled(
            "r",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Restart  "),
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
    f.render_widget(help, layout.help_area);
}
