//! Key routing from terminal events to game actions.

use crate::types::{is_input_char, Difficulty, GameAction, Phase};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to the action it means in `phase`.
pub fn route_key(phase: Phase, key: KeyEvent) -> Option<GameAction> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match phase {
        Phase::Intro => match key.code {
            KeyCode::Char('h') | KeyCode::Char('H') => {
                Some(GameAction::SelectDifficulty(Difficulty::Hard))
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                Some(GameAction::SelectDifficulty(Difficulty::Normal))
            }
            _ => None,
        },
        Phase::Capture => match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => Some(GameAction::Replay),
            KeyCode::Char(c) => input_char(c).map(GameAction::Letter),
            _ => None,
        },
        // Nothing to type while audio is playing.
        Phase::Transition | Phase::WordAudio => None,
    }
}

/// Fold a typed character into the input alphabet, if it belongs there.
fn input_char(c: char) -> Option<char> {
    let c = c.to_ascii_lowercase();
    is_input_char(c).then_some(c)
}

/// Check if key should quit the game.
///
/// Letters are game input, so only Esc and Ctrl-C quit.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(c: char) -> KeyEvent {
        KeyEvent::from(KeyCode::Char(c))
    }

    #[test]
    fn test_intro_keys_pick_difficulty() {
        assert_eq!(
            route_key(Phase::Intro, key('h')),
            Some(GameAction::SelectDifficulty(Difficulty::Hard))
        );
        assert_eq!(
            route_key(Phase::Intro, key('N')),
            Some(GameAction::SelectDifficulty(Difficulty::Normal))
        );
        assert_eq!(route_key(Phase::Intro, key('k')), None);
        assert_eq!(route_key(Phase::Intro, KeyEvent::from(KeyCode::Enter)), None);
    }

    #[test]
    fn test_capture_keys_are_letters() {
        assert_eq!(
            route_key(Phase::Capture, key('h')),
            Some(GameAction::Letter('h'))
        );
        assert_eq!(
            route_key(Phase::Capture, key('7')),
            Some(GameAction::Letter('7'))
        );
        assert_eq!(
            route_key(Phase::Capture, key('Q')),
            Some(GameAction::Letter('q'))
        );
        assert_eq!(route_key(Phase::Capture, key('-')), None);
        assert_eq!(route_key(Phase::Capture, KeyEvent::from(KeyCode::Left)), None);
    }

    #[test]
    fn test_replay_keys() {
        assert_eq!(
            route_key(Phase::Capture, key(' ')),
            Some(GameAction::Replay)
        );
        assert_eq!(
            route_key(Phase::Capture, KeyEvent::from(KeyCode::Enter)),
            Some(GameAction::Replay)
        );
    }

    #[test]
    fn test_audio_phases_swallow_keys() {
        for phase in [Phase::Transition, Phase::WordAudio] {
            assert_eq!(route_key(phase, key('a')), None);
            assert_eq!(route_key(phase, key(' ')), None);
        }
    }

    #[test]
    fn test_modified_keys_are_ignored() {
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(route_key(Phase::Capture, ctrl_a), None);
        let shift_a = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(
            route_key(Phase::Capture, shift_a),
            Some(GameAction::Letter('a'))
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(key('q')));
        assert!(!should_quit(key('c')));
    }
}
