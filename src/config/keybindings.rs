//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings alongside arrow and paging keys.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    /// Keys bound to `action`, for the help overlay.
    pub fn keys_for(&self, action: KeyAction) -> Vec<KeyEvent> {
        let mut keys: Vec<KeyEvent> = self
            .bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(k, _)| *k)
            .collect();
        keys.sort_by_key(|k| format!("{:?}", k.code));
        keys
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let none = KeyModifiers::NONE;
        let table: &[(KeyCode, KeyModifiers, KeyAction)] = &[
            // Row selection
            (KeyCode::Char('k'), none, KeyAction::SelectUp),
            (KeyCode::Up, none, KeyAction::SelectUp),
            (KeyCode::Char('j'), none, KeyAction::SelectDown),
            (KeyCode::Down, none, KeyAction::SelectDown),
            // Page navigation
            (KeyCode::Char('h'), none, KeyAction::PrevPage),
            (KeyCode::Left, none, KeyAction::PrevPage),
            (KeyCode::PageUp, none, KeyAction::PrevPage),
            (KeyCode::Char('l'), none, KeyAction::NextPage),
            (KeyCode::Right, none, KeyAction::NextPage),
            (KeyCode::PageDown, none, KeyAction::NextPage),
            (KeyCode::Char('g'), none, KeyAction::FirstPage),
            (KeyCode::Home, none, KeyAction::FirstPage),
            (KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::LastPage),
            (KeyCode::End, none, KeyAction::LastPage),
            (KeyCode::Char('p'), none, KeyAction::CyclePageSize),
            // Tabs
            (KeyCode::Tab, none, KeyAction::SwitchTab),
            (KeyCode::BackTab, KeyModifiers::SHIFT, KeyAction::SwitchTab),
            // Search
            (KeyCode::Char('/'), none, KeyAction::StartSearch),
            (KeyCode::Char('f'), KeyModifiers::CONTROL, KeyAction::StartSearch),
            (KeyCode::Esc, none, KeyAction::ClearSearch),
            // Lifecycle
            (KeyCode::Char('c'), none, KeyAction::CompleteSelected),
            (KeyCode::Enter, none, KeyAction::CompleteSelected),
            (KeyCode::Char('b'), none, KeyAction::BulkComplete),
            // Application
            (KeyCode::Char('r'), none, KeyAction::Refresh),
            (KeyCode::F(5), none, KeyAction::Refresh),
            (KeyCode::Char('?'), none, KeyAction::Help),
            (KeyCode::Char('q'), none, KeyAction::Quit),
            (KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit),
        ];

        let bindings = table
            .iter()
            .map(|&(code, modifiers, action)| (KeyEvent::new(code, modifiers), action))
            .collect();

        Self { bindings }
    }
}
