use crate::{
    Res,
    menu::{Command, KeyBindings, MenuDepth, SelectionUi, TrackMenu, dispatch},
    notify::Notifier,
    player::{self, Executor, PlayerOptions},
    spotify::Gateway,
};

/// The normal flow: choose a playlist (and a song) and play it.
///
/// # Flow
///
/// 1. **Device**: resolves the target device, failing when there is none
/// 2. **Playlists**: loads all playlists behind a status message
/// 3. **Playlist Screen**: shows them with the current track as header
/// 4. **Song Screen** (drilldown only): shows "Shuffle" plus the songs
/// 5. **Execution**: Enter plays, the secondary keys control the player on
///    either screen
///
/// Closing a menu ends the run without any call.
pub async fn browse<G, U, N>(
    gateway: &G,
    ui: &mut U,
    notifier: &N,
    options: &PlayerOptions,
    default_device: Option<&str>,
) -> Res<()>
where
    G: Gateway,
    U: SelectionUi,
    N: Notifier,
{
    let devices = gateway.list_devices().await?;
    let device = player::resolve_device(&devices, default_device)?;

    ui.status("Loading playlists...")?;
    let playlists = gateway.list_playlists().await;
    ui.close();
    let playlists = playlists?;

    let current = gateway.currently_playing().await.ok().flatten();
    let header = dispatch::now_playing_header(current.as_ref());
    let bindings = KeyBindings::default();
    let executor = Executor::new(gateway, notifier, options);

    let selection = ui.select(
        "Playlist",
        &dispatch::playlist_options(&playlists),
        Some(&header),
        bindings.as_slice(),
    )?;
    let command = bindings.interpret(&selection);
    let Command::EnterSelection(index) = command else {
        return executor.control(command).await;
    };
    let Some(playlist) = playlists.get(index) else {
        return Ok(());
    };

    match options.depth {
        MenuDepth::Flat => executor.start_playlist(playlist, &device).await,
        MenuDepth::Drilldown => {
            ui.status("Loading songs...")?;
            let tracks = gateway.list_tracks(playlist).await;
            ui.close();
            let menu = TrackMenu::new(&tracks?, options.shuffle);

            let selection = ui.select(
                "Song",
                &menu.options,
                Some(&header),
                bindings.as_slice(),
            )?;
            match bindings.interpret(&selection) {
                Command::EnterSelection(index) => match menu.choice(index) {
                    Some(choice) => executor.play_track_choice(playlist, choice, &device).await,
                    None => Ok(()),
                },
                command => executor.control(command).await,
            }
        }
    }
}
