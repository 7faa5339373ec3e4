use std::{
    io::{self, BufRead},
    sync::Arc,
    time::Duration,
};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Res,
    api::RedirectSlot,
    info,
    management::CredentialStore,
    server,
    spotify::{Authorizer, auth},
    success,
    types::ClientConfig,
    utils,
};

/// Runs the interactive first-time authorization on the terminal.
///
/// # Authentication Flow
///
/// 1. **Client Settings**: Asks for client id, client secret and callback URL
/// 2. **Browser Launch**: Opens the Spotify authorization page
/// 3. **Redirect**: Either reads the pasted redirect URL from the terminal, or
///    with `listen` captures it with a local listener on the callback URL
/// 4. **Token Exchange**: Trades the authorization code for tokens
/// 5. **Persistence**: Writes the credential file
///
/// A default device stored by an earlier setup is kept.
pub async fn setup(store: &CredentialStore, authorizer: &Authorizer, listen: bool) -> Res<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    setup_from(&mut input, store, authorizer, listen, utils::open_browser).await
}

/// [`setup`] reading answers from `input` and opening URLs with `open`.
pub async fn setup_from<B, F>(
    input: &mut B,
    store: &CredentialStore,
    authorizer: &Authorizer,
    listen: bool,
    open: F,
) -> Res<()>
where
    B: BufRead,
    F: Fn(&str),
{
    let client = ClientConfig {
        client_id: utils::prompt(input, "Client ID: ")?,
        client_secret: utils::prompt(input, "Client Secret: ")?,
        redirect_uri: utils::prompt(input, "Callback URL (e.g. http://localhost:8080/callback): ")?,
    };
    let auth_url = authorizer.authorization_url(&client)?;

    let code = if listen {
        let slot = RedirectSlot::default();
        let addr = server::start_redirect_listener(&client.redirect_uri, Arc::clone(&slot)).await?;
        info!("Waiting for the Spotify redirect on {}", addr);
        open(&auth_url);
        auth::wait_for_code(slot).await?
    } else {
        open(&auth_url);
        let redirected = utils::prompt(input, "Paste the URL you were redirected to: ")?;
        auth::extract_code(&redirected)?
    };

    let default_device = store
        .load()
        .await
        .ok()
        .flatten()
        .and_then(|c| c.default_device);

    let pb = spinner("Exchanging authorization code...");
    let result = authorizer
        .authorize_with_code(client, &code, default_device, utils::now())
        .await;
    pb.finish_and_clear();
    let credentials = result?;

    store.save(&credentials).await?;
    success!(
        "Authentication successful! Credentials stored at {}",
        store.path().display()
    );
    Ok(())
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
