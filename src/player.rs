//! Command execution against the active Spotify device.
//!
//! The [`Executor`] turns a [`Command`] from the menu into Spotify calls in the
//! right order and announces the resulting track with a desktop notification.

use std::time::Duration;

use crate::{
    Res,
    error::AppError,
    menu::{Command, MenuDepth, TrackChoice},
    notify::Notifier,
    spotify::Gateway,
    types::{Device, Playlist, RepeatState},
};

/// Behaviour switches for one run.
#[derive(Debug, Clone)]
pub struct PlayerOptions {
    /// Announce the playing track after transport commands.
    pub notify: bool,
    /// Shuffle when a playlist starts (flat menu) or offer the "Shuffle" entry (drilldown).
    pub shuffle: bool,
    pub depth: MenuDepth,
    /// Wait before looking up the track to announce.
    pub notify_delay: Duration,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        PlayerOptions {
            notify: true,
            shuffle: true,
            depth: MenuDepth::default(),
            notify_delay: Duration::from_millis(crate::config::DEFAULT_NOTIFY_DELAY_MS),
        }
    }
}

/// Picks the device to play on.
///
/// The stored default wins when it is still available, otherwise the first
/// device Spotify lists is used.
///
/// # Errors
///
/// [`AppError::NoDevice`] when `devices` is empty.
pub fn resolve_device(devices: &[Device], default_device: Option<&str>) -> Res<Device> {
    let first = devices.first().ok_or(AppError::NoDevice)?;

    let device = default_device
        .and_then(|name| devices.iter().find(|d| d.matches(name)))
        .unwrap_or(first);

    Ok(device.clone())
}

/// Issues playback commands and the notification that follows them.
pub struct Executor<'a, G, N> {
    gateway: &'a G,
    notifier: &'a N,
    options: &'a PlayerOptions,
}

impl<'a, G: Gateway, N: Notifier> Executor<'a, G, N> {
    pub fn new(gateway: &'a G, notifier: &'a N, options: &'a PlayerOptions) -> Self {
        Executor {
            gateway,
            notifier,
            options,
        }
    }

    /// Enter on a playlist in the flat menu.
    ///
    /// Plays the playlist. Unless shuffling is switched off, shuffle is then
    /// enabled and one track skipped so the first song is random. Repeat is
    /// left alone.
    pub async fn start_playlist(&self, playlist: &Playlist, device: &Device) -> Res<()> {
        self.gateway.play(playlist, device, None).await?;
        if self.options.shuffle {
            self.gateway.shuffle(true, device).await?;
            self.gateway.next(Some(device)).await?;
        }
        self.announce().await;
        Ok(())
    }

    /// Enter on the song screen of the drilldown menu.
    pub async fn play_track_choice(
        &self,
        playlist: &Playlist,
        choice: TrackChoice,
        device: &Device,
    ) -> Res<()> {
        match choice {
            TrackChoice::Shuffle => {
                self.gateway.play(playlist, device, None).await?;
                self.gateway.shuffle(true, device).await?;
                self.gateway
                    .set_repeat(RepeatState::Context, device)
                    .await?;
                self.gateway.next(Some(device)).await?;
            }
            TrackChoice::Offset(offset) => {
                self.gateway.play(playlist, device, Some(offset)).await?;
            }
        }
        self.announce().await;
        Ok(())
    }

    /// Runs one of the secondary-key commands.
    ///
    /// `EnterSelection` and `Cancel` depend on the screen they came from and
    /// are no-ops here.
    pub async fn control(&self, command: Command) -> Res<()> {
        match command {
            Command::TogglePlayPause => {
                if self.gateway.is_playing().await? {
                    self.gateway.pause().await?;
                } else {
                    self.gateway.resume().await?;
                    self.announce().await;
                }
            }
            Command::Previous => {
                // The first call only restarts the current track.
                self.gateway.previous().await?;
                self.gateway.previous().await?;
                self.announce().await;
            }
            Command::Next => {
                self.gateway.next(None).await?;
                self.announce().await;
            }
            Command::EnterSelection(_) | Command::Cancel => {}
        }
        Ok(())
    }

    /// Shows the current track. Failures are dropped.
    async fn announce(&self) {
        if !self.options.notify {
            return;
        }
        let _ = self.notify_current().await;
    }

    async fn notify_current(&self) -> Res<()> {
        tokio::time::sleep(self.options.notify_delay).await;

        let track = self
            .gateway
            .currently_playing()
            .await?
            .ok_or(AppError::NothingPlaying)?;
        self.notifier.notify(track.artist_name(), &track.name)
    }
}
