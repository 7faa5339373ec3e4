use std::{
    io::Write,
    process::{Child, Command, Stdio},
};

use crate::{
    Res,
    error::AppError,
    menu::{Key, KeyBinding, Selection, SelectionUi},
};

/// rofi reports custom key N with exit code 9 + N.
const CUSTOM_KEY_EXIT_BASE: i32 = 9;
const CUSTOM_KEY_SLOTS: std::ops::RangeInclusive<i32> = 1..=19;

/// Maps a rofi exit code to the key that closed the menu.
pub fn key_from_exit(code: Option<i32>) -> Key {
    match code {
        Some(0) => Key::Enter,
        Some(code) if CUSTOM_KEY_SLOTS.contains(&(code - CUSTOM_KEY_EXIT_BASE)) => {
            Key::Custom((code - CUSTOM_KEY_EXIT_BASE) as u8)
        }
        _ => Key::Cancel,
    }
}

/// Joins the menu message with a legend of the custom keys.
pub fn compose_message(message: Option<&str>, bindings: &[KeyBinding]) -> Option<String> {
    let legend = bindings
        .iter()
        .map(|b| format!("<b>{}</b>: {}", b.combo, b.label))
        .collect::<Vec<_>>()
        .join(" | ");

    match (message, legend.is_empty()) {
        (Some(message), true) => Some(message.to_string()),
        (Some(message), false) => Some(format!("{}\n{}", message, legend)),
        (None, false) => Some(legend),
        (None, true) => None,
    }
}

/// Selection menu backed by the `rofi` binary in dmenu mode.
pub struct Rofi {
    bin: String,
    status: Option<Child>,
}

impl Rofi {
    pub fn new(bin: impl Into<String>) -> Self {
        Rofi {
            bin: bin.into(),
            status: None,
        }
    }

    fn spawn_error(&self, e: std::io::Error) -> AppError {
        AppError::Menu(format!("cannot run {}: {}", self.bin, e))
    }
}

impl SelectionUi for Rofi {
    fn select(
        &mut self,
        title: &str,
        options: &[String],
        message: Option<&str>,
        bindings: &[KeyBinding],
    ) -> Res<Selection> {
        self.close();

        let mut cmd = Command::new(&self.bin);
        cmd.args(["-dmenu", "-i", "-format", "i", "-p", title]);
        if let Some(mesg) = compose_message(message, bindings) {
            cmd.arg("-mesg").arg(mesg);
        }
        for binding in bindings {
            cmd.arg(format!("-kb-custom-{}", binding.slot))
                .arg(&binding.combo);
        }

        let mut child = cmd
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(options.join("\n").as_bytes())?;
        }

        let output = child.wait_with_output()?;
        let index = String::from_utf8_lossy(&output.stdout)
            .trim()
            .parse::<usize>()
            .ok();

        Ok(Selection {
            index,
            key: key_from_exit(output.status.code()),
        })
    }

    fn status(&mut self, message: &str) -> Res<()> {
        self.close();

        let child = Command::new(&self.bin)
            .arg("-e")
            .arg(message)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .spawn()
            .map_err(|e| self.spawn_error(e))?;
        self.status = Some(child);
        Ok(())
    }

    fn close(&mut self) {
        if let Some(mut child) = self.status.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }

    fn error(&mut self, message: &str) -> Res<()> {
        self.close();

        let status = Command::new(&self.bin)
            .arg("-e")
            .arg(message)
            .status()
            .map_err(|e| self.spawn_error(e))?;

        if !status.success() {
            return Err(AppError::Menu(format!("{} exited with {}", self.bin, status)));
        }
        Ok(())
    }
}

impl Drop for Rofi {
    fn drop(&mut self) {
        self.close();
    }
}
