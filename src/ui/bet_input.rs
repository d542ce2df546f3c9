//! Bet entry widget: typed digits plus arrow-key stepping.
//!
//! The widget keeps the bet inside [1, balance] for a pleasant UI, but the
//! round resolver revalidates independently and never trusts it.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Longest bet the widget will accept while typing. Keeps the parse far away
/// from u64 overflow.
const MAX_DIGITS: usize = 6;

#[derive(Debug, Clone)]
pub struct BetInput {
    digits: String,
    pub validation_error: Option<String>,
}

impl BetInput {
    pub fn new(initial: u64) -> Self {
        Self {
            digits: initial.to_string(),
            validation_error: None,
        }
    }

    /// Current bet value; an empty field reads as 0.
    pub fn value(&self) -> u64 {
        self.digits.parse().unwrap_or(0)
    }

    pub fn set_value(&mut self, value: u64) {
        self.digits = value.to_string();
        self.validation_error = None;
    }

    pub fn handle_char_input(&mut self, c: char) {
        self.validation_error = None;
        if c.is_ascii_digit() && self.digits.len() < MAX_DIGITS {
            // No leading zeros
            if c == '0' && self.digits.is_empty() {
                return;
            }
            self.digits.push(c);
        }
    }

    pub fn handle_backspace(&mut self) {
        self.validation_error = None;
        self.digits.pop();
    }

    pub fn increment(&mut self, step: u64, balance: u64) {
        let value = self.value().saturating_add(step).min(balance);
        self.set_value(value);
    }

    pub fn decrement(&mut self, step: u64) {
        let value = self.value().saturating_sub(step).max(1);
        self.set_value(value);
    }

    /// Pull an out-of-range bet back into [1, balance] after a round moves
    /// the balance underneath it.
    pub fn clamp_to(&mut self, balance: u64) {
        if balance == 0 {
            return;
        }
        let value = self.value().clamp(1, balance);
        if value != self.value() {
            self.set_value(value);
        }
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Your Bet ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let display = if self.digits.is_empty() {
            Span::styled("_", Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(
                format!("{} \u{1FA99}", self.digits),
                Style::default().fg(Color::White),
            )
        };

        let paragraph = Paragraph::new(Line::from(display))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
    }
}
