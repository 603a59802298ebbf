//! Terminal-agnostic key representation.
//!
//! Keeps this crate free of crossterm; the TUI layer converts real
//! terminal events into `InputKey` before they reach the handlers.

/// A normalized keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Char(char),
    CharCtrl(char),
    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}
