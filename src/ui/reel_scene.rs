//! Reel window rendering.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const REEL_WIDTH: u16 = 9;
const REEL_HEIGHT: u16 = 5;

/// Render the three reel cells, centered in `area`.
pub fn render_reels(frame: &mut Frame, area: Rect, faces: [&str; 3], spinning: bool) {
    let total_width = REEL_WIDTH * 3 + 2;
    let x = area.x + area.width.saturating_sub(total_width) / 2;
    let y = area.y + area.height.saturating_sub(REEL_HEIGHT) / 2;
    let strip = Rect::new(
        x,
        y,
        total_width.min(area.width),
        REEL_HEIGHT.min(area.height),
    );

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(REEL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(REEL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(REEL_WIDTH),
        ])
        .split(strip);

    let border_color = if spinning { Color::Yellow } else { Color::DarkGray };

    for (i, &face) in faces.iter().enumerate() {
        let cell = cells[i * 2];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(cell);
        frame.render_widget(block, cell);

        // Vertically center the face inside the cell
        let face_y = inner.y + inner.height.saturating_sub(1) / 2;
        let face_area = Rect::new(inner.x, face_y, inner.width, 1);
        let paragraph = Paragraph::new(Line::from(face)).alignment(Alignment::Center);
        frame.render_widget(paragraph, face_area);
    }
}
