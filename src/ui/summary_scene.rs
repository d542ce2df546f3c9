//! Game-over summary screen.

use crate::session::SessionState;
use crate::stats::LifetimeStats;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the terminal-session summary: how the run ended, the final
/// numbers, and lifetime statistics.
pub fn render_summary(
    frame: &mut Frame,
    area: Rect,
    session: &SessionState,
    stats: &LifetimeStats,
) {
    frame.render_widget(Clear, area);

    let busted = session.balance == 0;
    let (title, title_color) = if busted {
        (" \u{1F494} Game Over \u{1F494} ", Color::Red)
    } else {
        (" \u{1F3C6} Cashed Out \u{1F3C6} ", Color::Green)
    };

    let block = Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(title_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let headline = if busted {
        "You've run out of coins."
    } else {
        "You walked away from the machine."
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            headline,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Final balance:    {} \u{1FA99}", session.balance)),
        Line::from(format!(
            "Best balance:     {} \u{1FA99}",
            session.high_water_mark
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Lifetime",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(format!("Rounds played:    {}", stats.rounds_played)),
        Line::from(format!("Coins wagered:    {}", stats.coins_wagered)),
        Line::from(format!("Jackpots:         {}", stats.jackpots)),
        Line::from(format!("Partial matches:  {}", stats.partial_matches)),
        Line::from(format!("Biggest win:      {}", stats.biggest_win)),
        Line::from(""),
        Line::from(Span::styled(
            "[N] New Game    [Q] Quit",
            Style::default().fg(Color::Yellow),
        )),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}
