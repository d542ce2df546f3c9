mod build_info;
mod constants;
mod machine;
mod save_manager;
mod session;
mod stats;
mod ui;
mod utils;

use chrono::Utc;
use constants::POLL_INTERVAL_MS;
use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use machine::{RoundKind, RoundResult, SpinOutcome};
use ratatui::style::Color;
use ratatui::{backend::CrosstermBackend, Terminal};
use save_manager::SaveManager;
use stats::LifetimeStats;
use std::io;
use std::time::Duration;
use ui::bet_input::BetInput;
use ui::reel_animation::{current_millis, SpinAnimation};
use ui::GameView;

enum Screen {
    Playing,
    GameOver,
}

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "reels {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Reels - Terminal Slot Machine\n");
                println!("Usage: reels [command]\n");
                println!("Commands:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'reels --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Load persistent state before touching the terminal
    let save_manager = SaveManager::new()?;
    let mut session = save_manager.load_or_default(Utc::now().timestamp());
    let mut lifetime_stats = LifetimeStats::load();

    let mut current_screen = if session.is_terminal() {
        Screen::GameOver
    } else {
        Screen::Playing
    };

    // Playing-screen state
    let mut rng = rand::thread_rng();
    let mut bet_input = BetInput::new(1);
    bet_input.clamp_to(session.balance);
    let mut faces = SpinOutcome::unknown().glyphs();
    let mut message = "Place your bet to start!".to_string();
    let mut message_color = Color::White;
    let mut animation: Option<SpinAnimation> = None;
    let mut pending_round: Option<RoundResult> = None;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    loop {
        match current_screen {
            Screen::Playing => {
                let now = current_millis();

                // Reveal a finished spin: fold the already-resolved round
                // into the visible state and persist.
                let finished = animation
                    .as_ref()
                    .map(|a| a.is_finished(now))
                    .unwrap_or(false);
                if finished {
                    animation = None;
                    if let Some(result) = pending_round.take() {
                        faces = result.outcome.glyphs();
                        message_color = match result.kind {
                            RoundKind::Jackpot { .. } => Color::Green,
                            RoundKind::TwoOfAKind { .. } => Color::Cyan,
                            _ => Color::Gray,
                        };
                        message = result.message;

                        lifetime_stats.record_round(result.bet, &result.kind);
                        if session.balance == 0 {
                            lifetime_stats.record_bust();
                        }
                        if let Err(e) = lifetime_stats.save() {
                            eprintln!("Warning: could not save stats: {}", e);
                        }

                        session.last_save_time = Utc::now().timestamp();
                        save_manager.save(&session)?;

                        if session.is_terminal() {
                            current_screen = Screen::GameOver;
                            continue;
                        }
                        bet_input.clamp_to(session.balance);
                    }
                }

                // Draw playing screen
                let spinning = animation.is_some();
                let view_faces = match &animation {
                    Some(anim) => anim.faces(now),
                    None => faces,
                };
                let (view_message, view_color) = if spinning {
                    ("The reels are spinning...", Color::DarkGray)
                } else {
                    (message.as_str(), message_color)
                };
                terminal.draw(|f| {
                    ui::draw_game(
                        f,
                        &GameView {
                            balance: session.balance,
                            faces: view_faces,
                            spinning,
                            message: view_message,
                            message_color: view_color,
                            bet: &bet_input,
                        },
                    );
                })?;

                // Handle input (ignored while the reels spin)
                if event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
                    if let Event::Key(key_event) = event::read()? {
                        if spinning {
                            continue;
                        }
                        match key_event.code {
                            KeyCode::Char(c @ '0'..='9') => {
                                bet_input.handle_char_input(c);
                            }
                            KeyCode::Backspace => {
                                bet_input.handle_backspace();
                            }
                            KeyCode::Up => {
                                bet_input.increment(1, session.balance);
                            }
                            KeyCode::Down => {
                                bet_input.decrement(1);
                            }
                            KeyCode::PageUp => {
                                bet_input.increment(10, session.balance);
                            }
                            KeyCode::PageDown => {
                                bet_input.decrement(10);
                            }
                            KeyCode::Enter | KeyCode::Char(' ') => {
                                let bet = bet_input.value();
                                if let Some(result) = session.apply_round(bet, &mut rng) {
                                    if result.kind.is_rejected() {
                                        // No draw happened; show the refusal
                                        message = result.message;
                                        message_color = Color::Red;
                                    } else {
                                        animation =
                                            Some(SpinAnimation::new(result.outcome, now));
                                        pending_round = Some(result);
                                    }
                                }
                            }
                            KeyCode::Char('s') | KeyCode::Char('S') => {
                                session.stop();
                                session.last_save_time = Utc::now().timestamp();
                                save_manager.save(&session)?;
                                current_screen = Screen::GameOver;
                            }
                            KeyCode::Char('q') | KeyCode::Char('Q') => {
                                session.last_save_time = Utc::now().timestamp();
                                save_manager.save(&session)?;
                                break;
                            }
                            _ => {}
                        }
                    }
                }
            }

            Screen::GameOver => {
                terminal.draw(|f| {
                    let area = f.size();
                    ui::summary_scene::render_summary(f, area, &session, &lifetime_stats);
                })?;

                if event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
                    if let Event::Key(key_event) = event::read()? {
                        match key_event.code {
                            KeyCode::Char('n') | KeyCode::Char('N') => {
                                // Reset: discard the persisted record and start over
                                save_manager.delete()?;
                                session.reset(Utc::now().timestamp());
                                save_manager.save(&session)?;

                                bet_input = BetInput::new(1);
                                faces = SpinOutcome::unknown().glyphs();
                                message = "Place your bet to start!".to_string();
                                message_color = Color::White;
                                animation = None;
                                pending_round = None;
                                current_screen = Screen::Playing;
                            }
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                                break;
                            }
                            _ => {}
                        }
                    }
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    Ok(())
}
