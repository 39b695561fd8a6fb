//! Normal mode key bindings

use crate::actions::AppAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a normal-mode key asks for
#[derive(Debug, Clone, PartialEq)]
pub enum NormalCommand {
    Action(AppAction),
    Quit,
    Reload,
    Yank,
    ChangeSource,
}

/// Map a normal-mode key to a command
pub fn normal_command(key: KeyEvent) -> Option<NormalCommand> {
    use NormalCommand::*;

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('l') => Some(Action(AppAction::ClearFilter)),
            KeyCode::Char('r') => Some(Reload),
            KeyCode::Char('d') => Some(Action(AppAction::ScrollDetailsDown)),
            KeyCode::Char('u') => Some(Action(AppAction::ScrollDetailsUp)),
            KeyCode::Char('c') => Some(Quit),
            _ => None,
        };
    }

    let command = match key.code {
        KeyCode::Char('q') => Quit,
        KeyCode::Char('j') | KeyCode::Down => Action(AppAction::NavigateDown),
        KeyCode::Char('k') | KeyCode::Up => Action(AppAction::NavigateUp),
        KeyCode::Char('g') | KeyCode::Home => Action(AppAction::NavigateTop),
        KeyCode::Char('G') | KeyCode::End => Action(AppAction::NavigateBottom),
        KeyCode::Char(' ') | KeyCode::Enter => Action(AppAction::ActivateSelected),
        KeyCode::Char('/') => Action(AppAction::EnterFilterMode),
        KeyCode::Char('i') => Action(AppAction::ToggleInfo),
        KeyCode::Char('v') => Action(AppAction::OpenVisibilityMenu),
        KeyCode::Char('y') => Yank,
        KeyCode::Char(',') => ChangeSource,
        _ => return None,
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(
            normal_command(key(KeyCode::Char('j'))),
            Some(NormalCommand::Action(AppAction::NavigateDown))
        );
        assert_eq!(
            normal_command(key(KeyCode::Up)),
            Some(NormalCommand::Action(AppAction::NavigateUp))
        );
        assert_eq!(
            normal_command(key(KeyCode::Enter)),
            Some(NormalCommand::Action(AppAction::ActivateSelected))
        );
        assert_eq!(
            normal_command(key(KeyCode::Char(' '))),
            Some(NormalCommand::Action(AppAction::ActivateSelected))
        );
    }

    #[test]
    fn test_control_keys_take_precedence() {
        assert_eq!(
            normal_command(ctrl('l')),
            Some(NormalCommand::Action(AppAction::ClearFilter))
        );
        assert_eq!(normal_command(ctrl('r')), Some(NormalCommand::Reload));
        assert_eq!(normal_command(key(KeyCode::Char('r'))), None);
    }

    #[test]
    fn test_commands() {
        assert_eq!(normal_command(key(KeyCode::Char('q'))), Some(NormalCommand::Quit));
        assert_eq!(normal_command(key(KeyCode::Char('y'))), Some(NormalCommand::Yank));
        assert_eq!(
            normal_command(key(KeyCode::Char(','))),
            Some(NormalCommand::ChangeSource)
        );
        assert_eq!(
            normal_command(key(KeyCode::Char('v'))),
            Some(NormalCommand::Action(AppAction::OpenVisibilityMenu))
        );
        assert_eq!(normal_command(key(KeyCode::Char('x'))), None);
    }
}
