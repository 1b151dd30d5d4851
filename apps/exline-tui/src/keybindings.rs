//! Keybinding definitions
//!
//! The key-event resolver: each raw crossterm key event maps to at most one
//! normal-mode action or one logical edit operation. Unrecognized input maps
//! to nothing and is dropped.

use crossterm::event::{KeyCode, KeyModifiers};
use exline_core::EditOp;

/// Normal-mode action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Enter command mode
    EnterCommandMode,
    /// Toggle help
    ToggleHelp,
}

/// Get the action for a key in normal mode
pub fn normal_mode_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char(':') => Some(Action::EnterCommandMode),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        _ => None,
    }
}

/// Resolve a command-mode key press into one logical edit operation.
pub fn command_mode_op(code: KeyCode, modifiers: KeyModifiers) -> Option<EditOp> {
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    match code {
        KeyCode::Char('w') if ctrl => Some(EditOp::DeleteWordAfter),
        KeyCode::Char('b') if ctrl => Some(EditOp::DeleteWordBefore),
        KeyCode::Char(c) if !ctrl => Some(EditOp::InsertChar(c)),
        KeyCode::Backspace => Some(EditOp::DeleteBefore),
        KeyCode::Delete if ctrl => Some(EditOp::DeleteWordAfter),
        KeyCode::Delete => Some(EditOp::DeleteAfter),
        KeyCode::Left if ctrl => Some(EditOp::MoveWordLeft),
        KeyCode::Left => Some(EditOp::MoveLeft),
        KeyCode::Right if ctrl => Some(EditOp::MoveWordRight),
        KeyCode::Right => Some(EditOp::MoveRight),
        KeyCode::Up => Some(EditOp::HistoryPrev),
        KeyCode::Down => Some(EditOp::HistoryNext),
        KeyCode::Enter => Some(EditOp::Accept),
        KeyCode::Esc => Some(EditOp::Cancel),
        _ => None,
    }
}
