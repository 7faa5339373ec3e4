mod common;

use common::*;
use rofi_spotify::{
    menu::{
        Command, Key, KeyBindings, MenuDepth, Selection, TrackChoice, TrackMenu, dispatch, escape,
        rofi::{compose_message, key_from_exit},
    },
    types::PlaylistTrack,
};

#[test]
fn test_interpret_enter() {
    let bindings = KeyBindings::default();

    assert_eq!(bindings.interpret(&enter(3)), Command::EnterSelection(3));
    assert_eq!(
        bindings.interpret(&Selection {
            index: None,
            key: Key::Enter,
        }),
        Command::Cancel
    );
}

#[test]
fn test_interpret_secondary_keys() {
    let bindings = KeyBindings::default();

    assert_eq!(bindings.interpret(&custom(5)), Command::TogglePlayPause);
    assert_eq!(bindings.interpret(&custom(6)), Command::Previous);
    assert_eq!(bindings.interpret(&custom(7)), Command::Next);
    // Unbound slots and closing the menu cancel
    assert_eq!(bindings.interpret(&custom(1)), Command::Cancel);
    assert_eq!(bindings.interpret(&cancel()), Command::Cancel);
}

#[test]
fn test_default_bindings() {
    let bindings = KeyBindings::default();
    let combos: Vec<&str> = bindings
        .as_slice()
        .iter()
        .map(|b| b.combo.as_str())
        .collect();

    assert_eq!(combos, vec!["Alt+Return", "Alt+Left", "Alt+Right"]);
}

#[test]
fn test_track_menu_with_shuffle_entry() {
    let tracks = positioned(vec![track("One", "A"), track("Two", "B")]);
    let menu = TrackMenu::new(&tracks, true);

    assert_eq!(menu.options, vec!["Shuffle", "One - A", "Two - B"]);
    assert_eq!(menu.choice(0), Some(TrackChoice::Shuffle));
    assert_eq!(menu.choice(1), Some(TrackChoice::Offset(0)));
    assert_eq!(menu.choice(2), Some(TrackChoice::Offset(1)));
    assert_eq!(menu.choice(3), None);
}

#[test]
fn test_track_menu_without_shuffle_entry() {
    let tracks = positioned(vec![track("One", "A"), track("Two", "B")]);
    let menu = TrackMenu::new(&tracks, false);

    assert_eq!(menu.options, vec!["One - A", "Two - B"]);
    assert_eq!(menu.choice(0), Some(TrackChoice::Offset(0)));
    assert_eq!(menu.choice(2), None);
}

#[test]
fn test_track_menu_keeps_playlist_positions() {
    let tracks = vec![
        PlaylistTrack {
            position: 0,
            track: track("A", "X"),
        },
        PlaylistTrack {
            position: 2,
            track: track("C", "X"),
        },
    ];

    let menu = TrackMenu::new(&tracks, true);
    assert_eq!(menu.options, vec!["Shuffle", "A - X", "C - X"]);
    assert_eq!(menu.choice(1), Some(TrackChoice::Offset(0)));
    assert_eq!(menu.choice(2), Some(TrackChoice::Offset(2)));
    assert_eq!(menu.choice(3), None);

    let menu = TrackMenu::new(&tracks, false);
    assert_eq!(menu.choice(1), Some(TrackChoice::Offset(2)));
}

#[test]
fn test_now_playing_header() {
    assert_eq!(
        dispatch::now_playing_header(None),
        "<b>Currently Playing:</b> "
    );
    assert_eq!(
        dispatch::now_playing_header(Some(&track("Rock & Roll", "Led <Zep>"))),
        "<b>Currently Playing:</b> Led &lt;Zep&gt; - Rock &amp; Roll"
    );
}

#[test]
fn test_options_are_single_line() {
    let playlists = vec![playlist("p1", "Two\nLines")];
    assert_eq!(dispatch::playlist_options(&playlists), vec!["Two Lines"]);

    let devices = vec![device("d1", "Kitchen")];
    assert_eq!(dispatch::device_options(&devices), vec!["Kitchen"]);
}

#[test]
fn test_escape() {
    assert_eq!(escape("plain"), "plain");
    assert_eq!(
        escape(r#"<a href="x">'Tom & Jerry'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;&apos;Tom &amp; Jerry&apos;&lt;/a&gt;"
    );
}

#[test]
fn test_menu_depth_parsing() {
    assert_eq!("flat".parse::<MenuDepth>(), Ok(MenuDepth::Flat));
    assert_eq!(" Drilldown ".parse::<MenuDepth>(), Ok(MenuDepth::Drilldown));
    assert!("three".parse::<MenuDepth>().is_err());
    assert_eq!(MenuDepth::default(), MenuDepth::Drilldown);
}

#[test]
fn test_key_from_exit() {
    assert_eq!(key_from_exit(Some(0)), Key::Enter);
    assert_eq!(key_from_exit(Some(1)), Key::Cancel);
    assert_eq!(key_from_exit(Some(14)), Key::Custom(5));
    assert_eq!(key_from_exit(Some(16)), Key::Custom(7));
    assert_eq!(key_from_exit(Some(65)), Key::Cancel);
    assert_eq!(key_from_exit(None), Key::Cancel);
}

#[test]
fn test_compose_message() {
    let bindings = KeyBindings::default();

    let message = compose_message(Some("Header"), bindings.as_slice()).unwrap();
    assert!(message.starts_with("Header\n"));
    assert!(message.contains("<b>Alt+Return</b>: Play/Pause"));
    assert!(message.contains("<b>Alt+Right</b>: Next"));

    assert_eq!(compose_message(Some("Header"), &[]), Some("Header".to_string()));
    assert_eq!(compose_message(None, &[]), None);
}
