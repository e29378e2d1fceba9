//! Keyboard shortcuts for the selection and editing stages

use crate::config::ShapeTool;
use crate::selection::SelectionKey;

/// Host-neutral key, translated from whatever toolkit delivers input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Return,
    /// Keypad enter
    Enter,
    Escape,
    Character(char),
    Other,
}

/// Commands available while annotating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    SetTool(ShapeTool),
    CycleTool,
    Finish,
    Cancel,
}

/// Map a key press during selection
pub fn map_key(key: Key) -> Option<SelectionKey> {
    match key {
        Key::Return | Key::Enter => Some(SelectionKey::Confirm),
        Key::Escape => Some(SelectionKey::Cancel),
        Key::Character(_) | Key::Other => None,
    }
}

/// Map a key press during annotation
pub fn map_editor_key(key: Key) -> Option<EditorCommand> {
    match key {
        Key::Return | Key::Enter => Some(EditorCommand::Finish),
        Key::Escape => Some(EditorCommand::Cancel),
        Key::Character('a') => Some(EditorCommand::SetTool(ShapeTool::Arrow)),
        Key::Character('r') => Some(EditorCommand::SetTool(ShapeTool::Rectangle)),
        // Shift+A: cycle shape tool
        Key::Character('A') => Some(EditorCommand::CycleTool),
        Key::Character(_) | Key::Other => None,
    }
}
