//! TUI application state and logic

use crate::config::SessionConfig;
use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::session::{GameState, GuessSession};
use crate::solver::{CandidateFilter, best_guess, calculate_metrics};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub session: GuessSession<'a, StdRng>,
    pub filter: CandidateFilter,
    pub candidates: Vec<&'a Word>,
    pub suggestion: Option<GuessInfo>,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub show_assistant: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct GuessInfo {
    pub word: Word,
    pub entropy: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Won games indexed by number of guesses
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    /// # Errors
    ///
    /// Returns an error if the configuration does not fit the dictionary.
    pub fn new(dictionary: &'a Dictionary, config: SessionConfig, rng: StdRng) -> Result<Self> {
        let session = GuessSession::new(config, dictionary, rng)?;
        let filter = CandidateFilter::new(config.word_length);
        let candidates = filter.candidates(dictionary);

        let mut app = Self {
            session,
            filter,
            candidates,
            suggestion: None,
            input_mode: InputMode::Guessing,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics {
                guess_distribution: vec![0; config.max_guesses + 1],
                ..Statistics::default()
            },
            show_assistant: true,
            should_quit: false,
        };
        app.add_message(
            &format!(
                "Guess the {}-letter word in {} tries.",
                config.word_length, config.max_guesses
            ),
            MessageStyle::Info,
        );
        app.add_message(
            "Enter: submit | ?: hint | Tab: assistant | Ctrl-N: new game",
            MessageStyle::Info,
        );
        app.compute_suggestion();
        Ok(app)
    }

    pub fn compute_suggestion(&mut self) {
        self.suggestion = best_guess(&self.candidates).map(|(word, entropy)| {
            let metrics = calculate_metrics(word, &self.candidates);
            GuessInfo {
                word: word.clone(),
                entropy,
                expected_remaining: metrics.expected_remaining,
                max_partition: metrics.max_partition,
            }
        });
    }

    /// Dispatch one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n' | 'N') | KeyCode::Enter => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_game();
                }
                KeyCode::Char('?') => self.reveal_hint(),
                KeyCode::Tab => self.show_assistant = !self.show_assistant,
                KeyCode::Char(c) => self.push_letter(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit(),
                _ => {}
            },
        }
    }

    pub fn push_letter(&mut self, c: char) {
        if c.is_ascii_alphabetic() && self.input_buffer.len() < self.session.word_length() {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    /// Submit the typed word as a guess
    pub fn submit(&mut self) {
        let guess = std::mem::take(&mut self.input_buffer);

        let feedback = match self.session.submit_guess(&guess) {
            Ok(feedback) => feedback.clone(),
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                self.input_buffer = guess;
                return;
            }
        };

        if let Err(err) = self.filter.record(feedback.guess(), feedback) {
            self.add_message(&err.to_string(), MessageStyle::Error);
        }
        self.candidates = self.filter.narrow(&self.candidates);

        match self.session.state() {
            GameState::Won => {
                let guesses = self.session.history().len();
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                if let Some(slot) = self.stats.guess_distribution.get_mut(guesses) {
                    *slot += 1;
                }
                self.input_mode = InputMode::GameOver;

                let celebration = match guesses {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟".to_string(),
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥".to_string(),
                    3 => "✨ SPLENDID! Three guesses! ✨".to_string(),
                    4 => "👏 GREAT JOB! Four guesses! 👏".to_string(),
                    n => format!("🎉 SOLVED in {n} guesses! 🎉"),
                };
                self.add_message(&celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            GameState::Lost => {
                self.stats.total_games += 1;
                self.input_mode = InputMode::GameOver;
                let secret = self.session.secret().to_string();
                self.add_message(
                    &format!("Out of guesses! The word was {secret}."),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            GameState::InProgress => {
                self.compute_suggestion();
                self.add_message(
                    &format!("{} candidates remaining", self.candidates.len()),
                    MessageStyle::Info,
                );
            }
        }
    }

    pub fn reveal_hint(&mut self) {
        match self.session.reveal_hint() {
            Some(letter) => self.add_message(
                &format!("Hint: the word contains {}", char::from(letter)),
                MessageStyle::Success,
            ),
            None => self.add_message("No letters left to reveal!", MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        self.session.reset();
        self.filter.reset();
        self.candidates = self.filter.candidates(self.session.dictionary());
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started!", MessageStyle::Info);
        self.compute_suggestion();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
    }

    Ok(())
}
