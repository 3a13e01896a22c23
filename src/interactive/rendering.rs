//! TUI rendering with ratatui
//!
//! Board, keyboard and assistant panel for the game interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Color as Mark;
use crate::keyboard::KeyColor;
use crate::output::formatters::KEYBOARD_ROWS;
use crate::session::GameState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Candidates listed by name in the assistant panel
const LISTED_CANDIDATES: usize = 8;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_game_panel(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE ENGINE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_game_panel(f: &mut Frame, app: &App, area: Rect) {
    let rows = u16::try_from(app.session.max_guesses()).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(rows.saturating_add(2)), // Board
            Constraint::Length(5),                      // Keyboard
            Constraint::Length(3),                      // Attempts
            Constraint::Min(0),
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
    render_attempts(f, app, chunks[2]);
}

fn tile_style(mark: Mark) -> Style {
    let bg = match mark {
        Mark::Green => Color::Green,
        Mark::Yellow => Color::Yellow,
        Mark::Red => Color::DarkGray,
    };
    let fg = if mark == Mark::Red {
        Color::White
    } else {
        Color::Black
    };
    Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let config = app.session.config();
    let history = app.session.history();

    let lines: Vec<Line> = (0..config.max_guesses)
        .map(|row| {
            if let Some(feedback) = history.get(row) {
                let spans = feedback
                    .tiles()
                    .iter()
                    .map(|&(letter, mark)| {
                        Span::styled(format!(" {} ", char::from(letter)), tile_style(mark))
                    })
                    .collect::<Vec<_>>();
                Line::from(spans)
            } else if row == history.len() && app.input_mode == InputMode::Guessing {
                let typed = app.input_buffer.chars().map(Some);
                let blanks = std::iter::repeat_n(None, config.word_length);
                let spans = typed
                    .chain(blanks)
                    .take(config.word_length)
                    .map(|letter| match letter {
                        Some(c) => Span::styled(
                            format!(" {c} "),
                            Style::default()
                                .fg(Color::White)
                                .add_modifier(Modifier::BOLD),
                        ),
                        None => Span::styled(" _ ", Style::default().fg(Color::Gray)),
                    })
                    .collect::<Vec<_>>();
                Line::from(spans)
            } else {
                Line::styled(
                    " · ".repeat(config.word_length),
                    Style::default().fg(Color::DarkGray),
                )
            }
        })
        .collect();

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn key_style(color: KeyColor, hinted: bool) -> Style {
    let style = match color {
        KeyColor::Green => Style::default().fg(Color::Black).bg(Color::Green),
        KeyColor::Yellow => Style::default().fg(Color::Black).bg(Color::Yellow),
        KeyColor::Red => Style::default().fg(Color::DarkGray),
        KeyColor::Unset => Style::default().fg(Color::White),
    };
    if hinted {
        style.add_modifier(Modifier::UNDERLINED)
    } else {
        style
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.session.keyboard();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans = row
                .bytes()
                .map(|letter| {
                    let style = key_style(keyboard.get(letter), app.session.is_hinted(letter));
                    Span::styled(format!(" {} ", char::from(letter)), style)
                })
                .collect::<Vec<_>>();
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(widget, area);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.session.attempts_remaining();
    let max = app.session.max_guesses();
    let color = match app.session.state() {
        GameState::Won => Color::Green,
        GameState::Lost => Color::Red,
        GameState::InProgress if remaining <= 1 => Color::Yellow,
        GameState::InProgress => Color::Cyan,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(remaining as f64 / max.max(1) as f64)
        .label(format!("{remaining}/{max} left | {}", app.session.state()));

    f.render_widget(gauge, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    if !app.show_assistant {
        render_messages(f, app, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_assistant(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_assistant(f: &mut Frame, app: &App, area: Rect) {
    let count = app.candidates.len();
    let mut lines = vec![Line::from(format!("{count} candidates remaining"))];

    if let Some(ref guess) = app.suggestion {
        // Scaled to 6 bits max
        let bar_len = (guess.entropy * 3.0).min(18.0) as usize;
        let bar = "█".repeat(bar_len) + &"░".repeat(18_usize.saturating_sub(bar_len));

        lines.push(Line::from(vec![
            Span::raw("Suggested: "),
            Span::styled(
                guess.word.text().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(format!("Entropy:   [{bar}] {:.3} bits", guess.entropy)));
        lines.push(Line::from(format!(
            "Expected:  {:.1} candidates remain",
            guess.expected_remaining
        )));
        lines.push(Line::from(format!("Worst:     {} candidates", guess.max_partition)));
    } else {
        lines.push(Line::styled(
            "No word fits the feedback so far",
            Style::default().fg(Color::Red),
        ));
    }

    if count > 0 && count <= LISTED_CANDIDATES {
        lines.push(Line::from(""));
        for candidate in &app.candidates {
            lines.push(Line::styled(
                format!("  • {candidate}"),
                Style::default().fg(Color::Green),
            ));
        }
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Assistant ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Your guess | Enter to submit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let candidates_text = format!("Candidates: {}", app.candidates.len());
    let candidates = Paragraph::new(candidates_text).alignment(Alignment::Center);
    f.render_widget(candidates, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        InputMode::Guessing => "Esc quit | ? hint | Tab panel | ^N new",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use crate::dictionary::Dictionary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn renders_board_keyboard_and_assistant() {
        let dictionary = Dictionary::from_strs(5, &["robot", "rotor", "flood"]).unwrap();
        let mut app = App::new(
            &dictionary,
            SessionConfig::default(),
            StdRng::seed_from_u64(2),
        )
        .unwrap();
        app.input_buffer = "FLO".to_string();

        let text = screen(&app);
        assert!(text.contains("Keyboard"));
        assert!(text.contains("Assistant"));
        assert!(text.contains("3 candidates remaining"));
        assert!(text.contains(" F  L  O  _  _ "));
    }

    #[test]
    fn hides_assistant_when_toggled() {
        let dictionary = Dictionary::from_strs(5, &["crane"]).unwrap();
        let mut app = App::new(
            &dictionary,
            SessionConfig::default(),
            StdRng::seed_from_u64(2),
        )
        .unwrap();
        app.show_assistant = false;

        let text = screen(&app);
        assert!(!text.contains("candidates remaining"));
        assert!(text.contains("Messages"));
    }
}
