use std::str::FromStr;

use clap::ValueEnum;

use crate::{
    menu::{Key, KeyBinding, Selection, escape},
    types::{Device, Playlist, PlaylistTrack, Track},
};

/// Label of the synthetic first entry on the song screen.
pub const SHUFFLE_ENTRY: &str = "Shuffle";

/// What the user asked for in a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    EnterSelection(usize),
    TogglePlayPause,
    Previous,
    Next,
    Cancel,
}

/// How many screens the browse flow shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum MenuDepth {
    /// Playlists only, Enter plays the playlist.
    Flat,
    /// Playlists, then the songs of the chosen playlist.
    #[default]
    Drilldown,
}

impl FromStr for MenuDepth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat" | "single" => Ok(MenuDepth::Flat),
            "drilldown" | "two-level" => Ok(MenuDepth::Drilldown),
            other => Err(format!("unknown menu depth: {}", other)),
        }
    }
}

/// Maps the menu's custom keys to commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings(Vec<KeyBinding>);

impl Default for KeyBindings {
    fn default() -> Self {
        let binding = |slot, combo: &str, label: &str, command| KeyBinding {
            slot,
            combo: combo.to_string(),
            label: label.to_string(),
            command,
        };

        KeyBindings(vec![
            binding(5, "Alt+Return", "Play/Pause", Command::TogglePlayPause),
            binding(6, "Alt+Left", "Previous", Command::Previous),
            binding(7, "Alt+Right", "Next", Command::Next),
        ])
    }
}

impl KeyBindings {
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        KeyBindings(bindings)
    }

    pub fn as_slice(&self) -> &[KeyBinding] {
        &self.0
    }

    /// Turns a menu result into a command.
    ///
    /// Enter without a highlighted entry and unbound custom keys count as
    /// cancelling.
    pub fn interpret(&self, selection: &Selection) -> Command {
        match selection.key {
            Key::Enter => match selection.index {
                Some(index) => Command::EnterSelection(index),
                None => Command::Cancel,
            },
            Key::Custom(slot) => self
                .0
                .iter()
                .find(|b| b.slot == slot)
                .map(|b| b.command)
                .unwrap_or(Command::Cancel),
            Key::Cancel => Command::Cancel,
        }
    }
}

/// What an Enter on the song screen plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackChoice {
    /// The whole playlist, shuffled.
    Shuffle,
    /// The playlist from this zero-based playlist position.
    Offset(usize),
}

/// The entries of the song screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackMenu {
    pub options: Vec<String>,
    positions: Vec<usize>,
    shuffle_entry: bool,
}

impl TrackMenu {
    pub fn new(tracks: &[PlaylistTrack], shuffle_entry: bool) -> Self {
        let mut options = Vec::with_capacity(tracks.len() + 1);
        if shuffle_entry {
            options.push(SHUFFLE_ENTRY.to_string());
        }
        options.extend(tracks.iter().map(|t| track_label(&t.track)));

        TrackMenu {
            options,
            positions: tracks.iter().map(|t| t.position).collect(),
            shuffle_entry,
        }
    }

    /// Maps a menu index back to what it plays. Out-of-range indexes give `None`.
    ///
    /// Song entries resolve to their position in the playlist, not to their
    /// index in the menu.
    pub fn choice(&self, index: usize) -> Option<TrackChoice> {
        let entry = match (self.shuffle_entry, index) {
            (true, 0) => return Some(TrackChoice::Shuffle),
            (true, i) => i - 1,
            (false, i) => i,
        };

        self.positions.get(entry).copied().map(TrackChoice::Offset)
    }
}

/// `Title - Artist`, the label of a song entry.
pub fn track_label(track: &Track) -> String {
    single_line(&format!("{} - {}", track.name, track.artist_name()))
}

pub fn playlist_options(playlists: &[Playlist]) -> Vec<String> {
    playlists.iter().map(|p| single_line(&p.name)).collect()
}

pub fn device_options(devices: &[Device]) -> Vec<String> {
    devices.iter().map(|d| single_line(&d.name)).collect()
}

/// The message above the playlist and song screens.
///
/// Shows `Artist - Title` of the current track with both names escaped for
/// the menu's markup.
pub fn now_playing_header(current: Option<&Track>) -> String {
    let mut message = String::from("<b>Currently Playing:</b> ");
    if let Some(track) = current {
        message.push_str(&escape(&format!(
            "{} - {}",
            track.artist_name(),
            track.name
        )));
    }
    message
}

// Menu entries are newline separated on the menu's stdin.
fn single_line(text: &str) -> String {
    text.replace(['\n', '\r'], " ")
}
