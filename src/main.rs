use clap::{
    CommandFactory, Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use rofi_spotify::{
    Res, cli, config, error,
    management::CredentialStore,
    menu::{MenuDepth, Rofi, SelectionUi},
    notify::DesktopNotifier,
    player::PlayerOptions,
    spotify::{Authorizer, SpotifyClient},
    warning,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Setup your config file (interactive, run from a terminal)
    #[clap(long)]
    setup: bool,

    /// Capture the authorization redirect with a local listener instead of pasting it
    #[clap(long, requires = "setup")]
    listen: bool,

    /// Select your default device
    #[clap(long, visible_alias = "default-device", conflicts_with = "setup")]
    set_default_device: bool,

    /// Disable the notifications when starting songs
    #[clap(long)]
    no_notify: bool,

    /// Do not shuffle when a playlist starts
    #[clap(long)]
    no_shuffle: bool,

    /// Menu depth, overrides ROFI_SPOTIFY_MENU_DEPTH
    #[clap(long, value_enum)]
    menu: Option<MenuDepth>,

    /// Print shell completions and exit
    #[clap(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = config::load_env() {
        warning!("Cannot load environment. Err: {}", e);
    }

    let args = Cli::parse();

    if let Some(shell) = args.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let mut ui = Rofi::new(config::rofi_bin());
    if let Err(e) = run(&args, &mut ui).await {
        let message = e.to_string();
        if let Err(ui_err) = ui.error(&message) {
            error!("{} ({})", message, ui_err);
        }
    }
}

async fn run(args: &Cli, ui: &mut Rofi) -> Res<()> {
    let store = CredentialStore::from_env();
    let authorizer = Authorizer::from_env();

    if args.setup {
        return cli::setup(&store, &authorizer, args.listen).await;
    }

    let credentials = cli::session(&store, &authorizer).await?;
    let gateway = SpotifyClient::from_env(credentials.access_token.clone());

    let options = PlayerOptions {
        notify: !args.no_notify,
        shuffle: !args.no_shuffle,
        depth: args.menu.unwrap_or_else(config::menu_depth),
        notify_delay: config::notify_delay(),
    };
    let notifier = DesktopNotifier::default();

    if args.set_default_device {
        return cli::set_default_device(&gateway, ui, &notifier, &options, &store, credentials)
            .await;
    }

    cli::browse(
        &gateway,
        ui,
        &notifier,
        &options,
        credentials.default_device.as_deref(),
    )
    .await
}
