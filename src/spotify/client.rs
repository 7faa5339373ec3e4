use reqwest::{Client, Method, RequestBuilder, StatusCode, header::CONTENT_LENGTH};
use serde::de::DeserializeOwned;

use crate::{
    Res, config,
    spotify::Gateway,
    types::{
        CurrentlyPlaying, Device, DevicesResponse, Page, PlayOffset, PlayRequest, PlaybackState,
        Playlist, PlaylistItem, PlaylistTrack, RepeatState, Track,
    },
};

const PLAYLIST_PAGE_LIMIT: u32 = 50;
const TRACK_PAGE_LIMIT: u32 = 100;

/// Spotify Web API client bound to one access token.
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    access_token: String,
}

impl SpotifyClient {
    pub fn new(api_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        SpotifyClient {
            http: Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        }
    }

    /// Creates a client for the configured API URL.
    pub fn from_env(access_token: impl Into<String>) -> Self {
        Self::new(config::spotify_apiurl(), access_token)
    }

    fn url(&self, path: &str) -> String {
        format!("{uri}{path}", uri = self.api_url, path = path)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.http
            .request(method, url)
            .bearer_auth(&self.access_token)
    }

    /// GETs `url` and decodes the body. `204 No Content` yields `None`.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Res<Option<T>> {
        let response = self
            .request(Method::GET, url)
            .send()
            .await?
            .error_for_status()?;

        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        Ok(Some(response.json::<T>().await?))
    }

    /// Follows `next` links from `first` and collects every item.
    async fn get_all_pages<T: DeserializeOwned>(&self, first: String) -> Res<Vec<T>> {
        let mut items = Vec::new();
        let mut next = Some(first);

        while let Some(url) = next {
            match self.get_json::<Page<T>>(&url).await? {
                Some(page) => {
                    items.extend(page.items);
                    next = page.next;
                }
                None => next = None,
            }
        }

        Ok(items)
    }

    /// Sends a player command and discards the (empty) answer.
    async fn send_command(
        &self,
        method: Method,
        url: &str,
        body: Option<&PlayRequest>,
    ) -> Res<()> {
        let request = self.request(method, url);
        let request = match body {
            Some(body) => request.json(body),
            None => request.header(CONTENT_LENGTH, 0),
        };

        request.send().await?.error_for_status()?;
        Ok(())
    }

    fn device_query(device: Option<&Device>) -> String {
        match device.and_then(|d| d.id.as_deref()) {
            Some(id) => format!("device_id={}", id),
            None => String::new(),
        }
    }
}

impl Gateway for SpotifyClient {
    async fn list_devices(&self) -> Res<Vec<Device>> {
        let url = self.url("/me/player/devices");
        let res = self.get_json::<DevicesResponse>(&url).await?;
        Ok(res.map(|r| r.devices).unwrap_or_default())
    }

    async fn list_playlists(&self) -> Res<Vec<Playlist>> {
        let url = self.url(&format!("/me/playlists?limit={}", PLAYLIST_PAGE_LIMIT));
        self.get_all_pages(url).await
    }

    async fn list_tracks(&self, playlist: &Playlist) -> Res<Vec<PlaylistTrack>> {
        let url = self.url(&format!(
            "/playlists/{id}/tracks?limit={limit}",
            id = playlist.id,
            limit = TRACK_PAGE_LIMIT
        ));
        let items: Vec<PlaylistItem> = self.get_all_pages(url).await?;
        Ok(items
            .into_iter()
            .enumerate()
            .filter_map(|(position, item)| {
                item.track.map(|track| PlaylistTrack { position, track })
            })
            .collect())
    }

    async fn currently_playing(&self) -> Res<Option<Track>> {
        let url = self.url("/me/player/currently-playing");
        let res = self.get_json::<CurrentlyPlaying>(&url).await?;
        Ok(res.and_then(|r| r.item))
    }

    async fn is_playing(&self) -> Res<bool> {
        let url = self.url("/me/player");
        let res = self.get_json::<PlaybackState>(&url).await?;
        Ok(res.map(|s| s.is_playing).unwrap_or(false))
    }

    async fn play(&self, context: &Playlist, device: &Device, offset: Option<usize>) -> Res<()> {
        let url = self.url(&format!(
            "/me/player/play?{}",
            Self::device_query(Some(device))
        ));
        let body = PlayRequest {
            context_uri: context.uri.clone(),
            offset: offset.map(|position| PlayOffset { position }),
        };
        self.send_command(Method::PUT, &url, Some(&body)).await
    }

    async fn pause(&self) -> Res<()> {
        let url = self.url("/me/player/pause");
        self.send_command(Method::PUT, &url, None).await
    }

    async fn resume(&self) -> Res<()> {
        let url = self.url("/me/player/play");
        self.send_command(Method::PUT, &url, None).await
    }

    async fn next(&self, device: Option<&Device>) -> Res<()> {
        let url = self.url(&format!("/me/player/next?{}", Self::device_query(device)));
        self.send_command(Method::POST, &url, None).await
    }

    async fn previous(&self) -> Res<()> {
        let url = self.url("/me/player/previous");
        self.send_command(Method::POST, &url, None).await
    }

    async fn shuffle(&self, state: bool, device: &Device) -> Res<()> {
        let url = self.url(&format!(
            "/me/player/shuffle?state={state}&{device}",
            state = state,
            device = Self::device_query(Some(device))
        ));
        self.send_command(Method::PUT, &url, None).await
    }

    async fn set_repeat(&self, state: RepeatState, device: &Device) -> Res<()> {
        let url = self.url(&format!(
            "/me/player/repeat?state={state}&{device}",
            state = state.as_str(),
            device = Self::device_query(Some(device))
        ));
        self.send_command(Method::PUT, &url, None).await
    }
}
