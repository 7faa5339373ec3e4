use std::io::{self, BufRead, Write};

use chrono::Utc;

use crate::{Res, warning};

/// Current unix time in seconds.
pub fn now() -> i64 {
    Utc::now().timestamp()
}

/// Prints `label` and reads one trimmed line from `input`.
pub fn prompt(input: &mut impl BufRead, label: &str) -> Res<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", label)?;
    stdout.flush()?;

    read_answer(input)
}

/// Reads one line from `input` without the line ending.
///
/// # Errors
///
/// An `UnexpectedEof` I/O error when `input` is exhausted.
pub fn read_answer(input: &mut impl BufRead) -> Res<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no input").into());
    }
    Ok(line.trim().to_string())
}

/// Opens `url` in the default browser, printing it when that fails.
pub fn open_browser(url: &str) {
    if webbrowser::open(url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            url
        )
    }
}
