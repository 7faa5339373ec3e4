#![allow(dead_code)]

use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    time::Duration,
};

use rofi_spotify::{
    Res,
    error::AppError,
    menu::{Key, KeyBinding, MenuDepth, Selection, SelectionUi},
    notify::Notifier,
    player::PlayerOptions,
    spotify::Gateway,
    types::{
        Artist, ClientConfig, Credentials, Device, Playlist, PlaylistTrack, RepeatState, Track,
    },
};

// Helper function to create a test device
pub fn device(id: &str, name: &str) -> Device {
    Device {
        id: Some(id.to_string()),
        name: name.to_string(),
        is_active: false,
        kind: "Computer".to_string(),
    }
}

// Helper function to create a test playlist
pub fn playlist(id: &str, name: &str) -> Playlist {
    Playlist {
        id: id.to_string(),
        name: name.to_string(),
        uri: format!("spotify:playlist:{}", id),
    }
}

// Helper function to create a test track
pub fn track(name: &str, artist: &str) -> Track {
    Track {
        name: name.to_string(),
        uri: Some(format!("spotify:track:{}", name.to_lowercase().replace(' ', "-"))),
        artists: vec![Artist {
            name: artist.to_string(),
        }],
    }
}

// Helper function to list tracks at consecutive playlist positions
pub fn positioned(tracks: Vec<Track>) -> Vec<PlaylistTrack> {
    tracks
        .into_iter()
        .enumerate()
        .map(|(position, track)| PlaylistTrack { position, track })
        .collect()
}

pub fn client_config() -> ClientConfig {
    ClientConfig {
        client_id: "test-client-id".to_string(),
        client_secret: "test-client-secret".to_string(),
        redirect_uri: "http://localhost:8080/callback".to_string(),
    }
}

pub fn credentials(expires_at: i64) -> Credentials {
    Credentials {
        client: client_config(),
        access_token: "old-access-token".to_string(),
        refresh_token: "stored-refresh-token".to_string(),
        expires_at,
        default_device: None,
    }
}

pub fn options(depth: MenuDepth) -> PlayerOptions {
    PlayerOptions {
        notify: true,
        shuffle: true,
        depth,
        notify_delay: Duration::ZERO,
    }
}

pub fn enter(index: usize) -> Selection {
    Selection {
        index: Some(index),
        key: Key::Enter,
    }
}

pub fn custom(slot: u8) -> Selection {
    Selection {
        index: Some(0),
        key: Key::Custom(slot),
    }
}

pub fn cancel() -> Selection {
    Selection {
        index: None,
        key: Key::Cancel,
    }
}

/// Player commands the fake gateway received, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Play {
        playlist: String,
        device: String,
        offset: Option<usize>,
    },
    Pause,
    Resume,
    Next {
        device: Option<String>,
    },
    Previous,
    Shuffle {
        state: bool,
        device: String,
    },
    Repeat {
        state: RepeatState,
        device: String,
    },
}

#[derive(Default)]
pub struct RecordingGateway {
    pub devices: Vec<Device>,
    pub playlists: Vec<Playlist>,
    pub tracks: Vec<PlaylistTrack>,
    pub current: Option<Track>,
    pub playing: bool,
    pub calls: RefCell<Vec<Call>>,
    pub now_playing_lookups: Cell<usize>,
}

impl RecordingGateway {
    pub fn with_devices(devices: Vec<Device>) -> Self {
        RecordingGateway {
            devices,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) -> Res<()> {
        self.calls.borrow_mut().push(call);
        Ok(())
    }
}

impl Gateway for RecordingGateway {
    async fn list_devices(&self) -> Res<Vec<Device>> {
        Ok(self.devices.clone())
    }

    async fn list_playlists(&self) -> Res<Vec<Playlist>> {
        Ok(self.playlists.clone())
    }

    async fn list_tracks(&self, _playlist: &Playlist) -> Res<Vec<PlaylistTrack>> {
        Ok(self.tracks.clone())
    }

    async fn currently_playing(&self) -> Res<Option<Track>> {
        self.now_playing_lookups.set(self.now_playing_lookups.get() + 1);
        Ok(self.current.clone())
    }

    async fn is_playing(&self) -> Res<bool> {
        Ok(self.playing)
    }

    async fn play(&self, context: &Playlist, device: &Device, offset: Option<usize>) -> Res<()> {
        self.record(Call::Play {
            playlist: context.id.clone(),
            device: device.name.clone(),
            offset,
        })
    }

    async fn pause(&self) -> Res<()> {
        self.record(Call::Pause)
    }

    async fn resume(&self) -> Res<()> {
        self.record(Call::Resume)
    }

    async fn next(&self, device: Option<&Device>) -> Res<()> {
        self.record(Call::Next {
            device: device.map(|d| d.name.clone()),
        })
    }

    async fn previous(&self) -> Res<()> {
        self.record(Call::Previous)
    }

    async fn shuffle(&self, state: bool, device: &Device) -> Res<()> {
        self.record(Call::Shuffle {
            state,
            device: device.name.clone(),
        })
    }

    async fn set_repeat(&self, state: RepeatState, device: &Device) -> Res<()> {
        self.record(Call::Repeat {
            state,
            device: device.name.clone(),
        })
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub shown: RefCell<Vec<(String, String)>>,
    pub fail: bool,
}

impl RecordingNotifier {
    pub fn count(&self) -> usize {
        self.shown.borrow().len()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, body: &str, title: &str) -> Res<()> {
        if self.fail {
            return Err(AppError::Notify("no notification daemon".to_string()));
        }
        self.shown
            .borrow_mut()
            .push((body.to_string(), title.to_string()));
        Ok(())
    }
}

/// A menu that answers with pre-recorded selections.
#[derive(Default)]
pub struct ScriptedUi {
    pub answers: VecDeque<Selection>,
    pub menus: Vec<(String, Vec<String>, Option<String>)>,
    pub statuses: Vec<String>,
    pub errors: Vec<String>,
    pub open_status: bool,
}

impl ScriptedUi {
    pub fn answering(answers: Vec<Selection>) -> Self {
        ScriptedUi {
            answers: answers.into(),
            ..Default::default()
        }
    }
}

impl SelectionUi for ScriptedUi {
    fn select(
        &mut self,
        title: &str,
        options: &[String],
        message: Option<&str>,
        _bindings: &[KeyBinding],
    ) -> Res<Selection> {
        self.menus.push((
            title.to_string(),
            options.to_vec(),
            message.map(str::to_string),
        ));
        Ok(self.answers.pop_front().unwrap_or(Selection {
            index: None,
            key: Key::Cancel,
        }))
    }

    fn status(&mut self, message: &str) -> Res<()> {
        self.statuses.push(message.to_string());
        self.open_status = true;
        Ok(())
    }

    fn close(&mut self) {
        self.open_status = false;
    }

    fn error(&mut self, message: &str) -> Res<()> {
        self.errors.push(message.to_string());
        Ok(())
    }
}
