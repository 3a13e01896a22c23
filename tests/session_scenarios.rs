//! End-to-end games driven through the public session API.

use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_engine::config::SessionConfig;
use wordle_engine::core::{Color, Word};
use wordle_engine::dictionary::Dictionary;
use wordle_engine::keyboard::KeyColor;
use wordle_engine::session::{GameState, GuessSession, SessionError};
use wordle_engine::solver::CandidateFilter;

fn dictionary() -> Dictionary {
    Dictionary::embedded().unwrap()
}

fn crane_session(dictionary: &Dictionary, config: SessionConfig) -> GuessSession<'_, StdRng> {
    GuessSession::with_secret(
        config,
        dictionary,
        StdRng::seed_from_u64(11),
        Word::new("CRANE").unwrap(),
    )
    .unwrap()
}

#[test]
fn crane_is_won_on_third_guess() {
    let dictionary = dictionary();
    let mut session = crane_session(&dictionary, SessionConfig::default());

    let mut attempts_before = Vec::new();
    let mut states = Vec::new();
    for guess in ["SLATE", "CRAMP", "CRANE"] {
        attempts_before.push(session.attempts_remaining());
        session.submit_guess(guess).unwrap();
        states.push(session.state());
    }

    assert_eq!(attempts_before, [6, 5, 4]);
    assert_eq!(session.attempts_remaining(), 3);
    assert_eq!(
        states,
        [GameState::InProgress, GameState::InProgress, GameState::Won]
    );
    assert!(session.history()[2].is_perfect());

    let keyboard = session.keyboard();
    assert_eq!(keyboard.get(b'C'), KeyColor::Green);
    assert_eq!(keyboard.get(b'S'), KeyColor::Red);
    assert_eq!(keyboard.get(b'M'), KeyColor::Red);
}

#[test]
fn single_miss_loses() {
    let dictionary = dictionary();
    let mut session = crane_session(&dictionary, SessionConfig::default().with_max_guesses(1));

    session.submit_guess("SLATE").unwrap();
    assert_eq!(session.state(), GameState::Lost);
    assert_eq!(session.attempts_remaining(), 0);

    let err = session.submit_guess("CRANE").unwrap_err();
    assert_eq!(err, SessionError::SessionTerminalViolation(GameState::Lost));
    assert_eq!(session.history().len(), 1);
}

#[test]
fn rejected_guesses_change_nothing() {
    let dictionary = dictionary();
    let config = SessionConfig::default().restrict_to_dictionary(true);
    let mut session = crane_session(&dictionary, config);

    assert!(matches!(
        session.submit_guess("CRAN"),
        Err(SessionError::InvalidGuessLength {
            expected: 5,
            actual: 4
        })
    ));
    assert!(matches!(
        session.submit_guess("CR4NE"),
        Err(SessionError::InvalidGuessCharacters(_))
    ));
    assert!(matches!(
        session.submit_guess("ZZZZZ"),
        Err(SessionError::GuessNotInDictionary(_))
    ));

    assert_eq!(session.attempts_remaining(), 6);
    assert!(session.history().is_empty());
    assert_eq!(session.keyboard().get(b'Z'), KeyColor::Unset);
}

#[test]
fn assistant_tracks_the_session() {
    let dictionary = dictionary();
    let mut session = crane_session(&dictionary, SessionConfig::default());
    let mut filter = CandidateFilter::new(5);

    for guess in ["SLATE", "CRAMP"] {
        let feedback = session.submit_guess(guess).unwrap().clone();
        filter.record(feedback.guess(), feedback).unwrap();
    }

    let candidates = filter.candidates(&dictionary);
    let secret = Word::new("CRANE").unwrap();
    assert!(candidates.contains(&&secret));
    assert!(candidates.iter().all(|word| word.text().starts_with("CRA")));
}

#[test]
fn hint_survives_later_guesses() {
    let dictionary = dictionary();
    let mut session = crane_session(&dictionary, SessionConfig::default());

    session.apply_hint(b'E');
    session.submit_guess("SLATE").unwrap();
    session.submit_guess("DOING").unwrap();

    assert_eq!(session.keyboard().get(b'E'), KeyColor::Green);
    assert!(session.is_hinted(b'E'));
}

#[test]
fn seeded_sessions_pick_the_same_secret() {
    let dictionary = dictionary();
    let config = SessionConfig::default();

    let first = GuessSession::new(config, &dictionary, StdRng::seed_from_u64(99)).unwrap();
    let second = GuessSession::new(config, &dictionary, StdRng::seed_from_u64(99)).unwrap();

    assert_eq!(first.secret(), second.secret());
    assert!(dictionary.contains(first.secret()));
}

#[test]
fn reset_starts_a_fresh_game() {
    let dictionary = dictionary();
    let mut session = crane_session(&dictionary, SessionConfig::default().with_max_guesses(1));
    session.submit_guess("SLATE").unwrap();
    assert_eq!(session.state(), GameState::Lost);

    session.reset();
    assert_eq!(session.state(), GameState::InProgress);
    assert_eq!(session.attempts_remaining(), 1);
    assert!(session.history().is_empty());
    assert_eq!(session.keyboard().get(b'S'), KeyColor::Unset);

    let secret = session.secret().clone();
    let feedback = session.submit_guess(secret.text()).unwrap();
    assert_eq!(feedback.count(Color::Green), 5);
    assert_eq!(session.state(), GameState::Won);
}
