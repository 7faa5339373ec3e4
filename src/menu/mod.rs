//! # Menu Module
//!
//! Everything the user picks goes through a launcher-style selection menu.
//! This module holds the menu model ([`Selection`], [`Key`], [`KeyBinding`]),
//! the [`SelectionUi`] trait the rest of the crate talks to, the rofi backed
//! implementation in [`rofi`], and the mapping from menu results to
//! [`Command`]s in [`dispatch`].
//!
//! ## Keys
//!
//! Besides Enter every menu offers the same three secondary keys, so playback
//! can be controlled from whichever screen is open:
//!
//! | key | command |
//! |---|---|
//! | `Alt+Return` | toggle play/pause |
//! | `Alt+Left` | previous track |
//! | `Alt+Right` | next track |

pub mod dispatch;
pub mod rofi;

pub use dispatch::{Command, KeyBindings, MenuDepth, TrackChoice, TrackMenu};
pub use rofi::Rofi;

use crate::Res;

/// How the user left the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Cancel,
    /// A custom key binding, by slot number.
    Custom(u8),
}

/// The result of one menu invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Zero-based index of the highlighted entry, if any.
    pub index: Option<usize>,
    pub key: Key,
}

/// A secondary key the menu listens for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    /// Custom key slot in the menu program (rofi's `-kb-custom-N`).
    pub slot: u8,
    /// Key combination, e.g. `Alt+Return`.
    pub combo: String,
    /// Short description shown in the menu.
    pub label: String,
    pub command: Command,
}

/// The selection menu the launcher drives.
pub trait SelectionUi {
    /// Shows `options` and waits for the user.
    fn select(
        &mut self,
        title: &str,
        options: &[String],
        message: Option<&str>,
        bindings: &[KeyBinding],
    ) -> Res<Selection>;

    /// Shows a non-blocking status message until [`SelectionUi::close`].
    fn status(&mut self, message: &str) -> Res<()>;

    fn close(&mut self);

    /// Shows an error and waits until it is dismissed.
    fn error(&mut self, message: &str) -> Res<()>;
}

/// Escapes `text` for Pango markup.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&apos;"),
            '"' => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }
    escaped
}
