use crate::{
    Res,
    error::AppError,
    management::CredentialStore,
    menu::{Command, KeyBindings, SelectionUi, dispatch},
    notify::Notifier,
    player::{Executor, PlayerOptions},
    spotify::Gateway,
    types::Credentials,
};

/// Lets the user pick the device playback should prefer and stores its name.
///
/// The secondary keys control the player here as on the playlist screen and
/// leave the stored device unchanged. Leaving the menu without Enter changes
/// nothing.
///
/// # Errors
///
/// [`AppError::NoDevice`] when the account has no device to pick.
pub async fn set_default_device<G, U, N>(
    gateway: &G,
    ui: &mut U,
    notifier: &N,
    options: &PlayerOptions,
    store: &CredentialStore,
    mut credentials: Credentials,
) -> Res<()>
where
    G: Gateway,
    U: SelectionUi,
    N: Notifier,
{
    let devices = gateway.list_devices().await?;
    if devices.is_empty() {
        return Err(AppError::NoDevice);
    }

    let bindings = KeyBindings::default();
    let selection = ui.select(
        "Spotify Device",
        &dispatch::device_options(&devices),
        None,
        bindings.as_slice(),
    )?;

    let index = match bindings.interpret(&selection) {
        Command::EnterSelection(index) => index,
        command => {
            return Executor::new(gateway, notifier, options)
                .control(command)
                .await;
        }
    };
    let Some(device) = devices.get(index) else {
        return Ok(());
    };

    credentials.default_device = Some(device.name.clone());
    store.save(&credentials).await
}
