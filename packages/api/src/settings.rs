//! # App settings — the key/value environment file
//!
//! The dashboard exposes two settings, a bot token and a channel link, stored
//! in a dotenv-style file next to the process ([`SETTINGS_FILE`]). The file is
//! read with `dotenvy` and rewritten in place on save; keys other than the two
//! the app owns are preserved.
//!
//! [`AppSettings`] is the client-safe projection crossing the server/client
//! boundary: `None` means a setting has not been provided yet and the
//! dashboard renders an editable field for it.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Filename of the settings file, resolved relative to the working directory.
pub const SETTINGS_FILE: &str = "postdesk.env";

/// Key for the bot token.
pub const TOKEN_BOT: &str = "TOKEN_BOT";

/// Key for the channel link.
pub const CHANNEL_LINK: &str = "CHANNEL_LINK";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Read(#[source] io::Error),
    #[error("failed to write settings file: {0}")]
    Write(#[source] io::Error),
    #[error("malformed settings file: {0}")]
    Parse(#[from] dotenvy::Error),
}

/// The two app settings, as shown on the dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    pub token_bot: Option<String>,
    pub channel_link: Option<String>,
}

/// A dotenv-style key/value file.
#[derive(Debug, Clone)]
pub struct EnvFile {
    path: PathBuf,
}

impl EnvFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The settings file at its well-known location.
    pub fn open_default() -> Self {
        Self::new(SETTINGS_FILE)
    }

    /// Read one key. A missing file reads as a missing key.
    pub fn get(&self, key: &str) -> Result<Option<String>, SettingsError> {
        let iter = match dotenvy::from_path_iter(&self.path) {
            Ok(iter) => iter,
            Err(dotenvy::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SettingsError::Parse(e)),
        };
        for item in iter {
            let (k, v) = item?;
            if k == key {
                return Ok(Some(v));
            }
        }
        Ok(None)
    }

    /// Write one key, replacing an existing assignment or appending a new one.
    /// Other lines are left untouched.
    pub fn set(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(SettingsError::Read(e)),
        };

        let mut lines: Vec<String> = Vec::new();
        let mut replaced = false;
        for line in contents.lines() {
            if !replaced && is_assignment_of(line, key) {
                lines.push(format!("{key}={}", quote(value)));
                replaced = true;
            } else {
                lines.push(line.to_string());
            }
        }
        if !replaced {
            lines.push(format!("{key}={}", quote(value)));
        }

        let mut out = lines.join("\n");
        out.push('\n');
        fs::write(&self.path, out).map_err(SettingsError::Write)
    }

    /// Read both app settings.
    pub fn load(&self) -> Result<AppSettings, SettingsError> {
        Ok(AppSettings {
            token_bot: self.get(TOKEN_BOT)?,
            channel_link: self.get(CHANNEL_LINK)?,
        })
    }
}

fn is_assignment_of(line: &str, key: &str) -> bool {
    line.trim_start()
        .strip_prefix(key)
        .is_some_and(|rest| rest.trim_start().starts_with('='))
}

/// Double-quote a value so it survives spaces and `#` under dotenv parsing.
fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_in(dir: &tempfile::TempDir) -> EnvFile {
        EnvFile::new(dir.path().join(SETTINGS_FILE))
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let env = env_in(&dir);
        assert_eq!(env.get(TOKEN_BOT).unwrap(), None);
        assert_eq!(env.load().unwrap(), AppSettings::default());
    }

    #[test]
    fn test_set_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let env = env_in(&dir);

        env.set(TOKEN_BOT, "123456:abcdef").unwrap();
        env.set(CHANNEL_LINK, "https://t.me/example").unwrap();

        let settings = env.load().unwrap();
        assert_eq!(settings.token_bot.as_deref(), Some("123456:abcdef"));
        assert_eq!(settings.channel_link.as_deref(), Some("https://t.me/example"));
    }

    #[test]
    fn test_set_replaces_in_place_and_preserves_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let env = env_in(&dir);
        fs::write(
            dir.path().join(SETTINGS_FILE),
            "# app settings\nOTHER=keep-me\nTOKEN_BOT=old\n",
        )
        .unwrap();

        env.set(TOKEN_BOT, "new").unwrap();

        assert_eq!(env.get(TOKEN_BOT).unwrap().as_deref(), Some("new"));
        assert_eq!(env.get("OTHER").unwrap().as_deref(), Some("keep-me"));

        // Still a single assignment for the key.
        let contents = fs::read_to_string(dir.path().join(SETTINGS_FILE)).unwrap();
        assert_eq!(contents.matches("TOKEN_BOT=").count(), 1);
    }

    #[test]
    fn test_values_with_spaces_survive() {
        let dir = tempfile::tempdir().unwrap();
        let env = env_in(&dir);

        env.set(CHANNEL_LINK, "my channel # 1").unwrap();
        assert_eq!(env.get(CHANNEL_LINK).unwrap().as_deref(), Some("my channel # 1"));
    }

    #[test]
    fn test_prefix_keys_do_not_collide() {
        let dir = tempfile::tempdir().unwrap();
        let env = env_in(&dir);

        env.set("TOKEN", "short").unwrap();
        env.set(TOKEN_BOT, "long").unwrap();

        assert_eq!(env.get("TOKEN").unwrap().as_deref(), Some("short"));
        assert_eq!(env.get(TOKEN_BOT).unwrap().as_deref(), Some("long"));
    }
}
