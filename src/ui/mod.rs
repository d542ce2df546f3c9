//! Terminal rendering: the machine scene, the bet widget, and the summary.

pub mod bet_input;
pub mod reel_animation;
pub mod reel_scene;
pub mod summary_scene;

use bet_input::BetInput;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Everything the playing screen needs for one frame.
pub struct GameView<'a> {
    pub balance: u64,
    pub faces: [&'static str; 3],
    pub spinning: bool,
    pub message: &'a str,
    pub message_color: Color,
    pub bet: &'a BetInput,
}

/// Main drawing function for the playing screen.
pub fn draw_game(frame: &mut Frame, view: &GameView) {
    let size = frame.size();

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + balance
            Constraint::Min(7),    // Reels
            Constraint::Length(3), // Result message
            Constraint::Length(3), // Bet input
            Constraint::Length(1), // Footer hints
        ])
        .split(size);

    draw_header(frame, v_chunks[0], view.balance);
    reel_scene::render_reels(frame, v_chunks[1], view.faces, view.spinning);
    draw_message(frame, v_chunks[2], view);

    // Bet widget sits centered under the reels
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(24),
            Constraint::Min(0),
        ])
        .split(v_chunks[3]);
    view.bet.draw(frame, h_chunks[1]);

    draw_footer(frame, v_chunks[4]);
}

fn draw_header(frame: &mut Frame, area: ratatui::layout::Rect, balance: u64) {
    let block = Block::default()
        .title(" \u{1F3B0} Slot Machine \u{1F3B0} ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let balance_line = Line::from(vec![
        Span::raw("Your Balance: "),
        Span::styled(
            format!("{} \u{1FA99}", balance),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(balance_line).alignment(Alignment::Center),
        inner,
    );
}

fn draw_message(frame: &mut Frame, area: ratatui::layout::Rect, view: &GameView) {
    let line = Line::from(Span::styled(
        view.message,
        Style::default().fg(view.message_color),
    ));
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_footer(frame: &mut Frame, area: ratatui::layout::Rect) {
    let hints = Line::from(Span::styled(
        "[Enter] Spin  [\u{2191}\u{2193}] Bet \u{00B1}1  [PgUp/PgDn] \u{00B1}10  [0-9] Type  [S] Stop  [Q] Quit",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(hints).alignment(Alignment::Center), area);
}
