use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    Res, config,
    types::{ClientConfig, Credentials},
};

#[derive(Debug, Default, Serialize, Deserialize)]
struct CredentialFile {
    #[serde(default)]
    global: GlobalSection,
    #[serde(skip_serializing_if = "Option::is_none")]
    auth: Option<AuthSection>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct GlobalSection {
    client_id: Option<String>,
    #[serde(rename = "secret")]
    client_secret: Option<String>,
    redirect_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_device: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct AuthSection {
    access_token: Option<String>,
    refresh_token: Option<String>,
    expires_at: Option<i64>,
}

impl CredentialFile {
    fn into_credentials(self) -> Option<Credentials> {
        let global = self.global;
        let auth = self.auth?;
        Some(Credentials {
            client: ClientConfig {
                client_id: global.client_id?,
                client_secret: global.client_secret?,
                redirect_uri: global.redirect_uri?,
            },
            access_token: auth.access_token?,
            refresh_token: auth.refresh_token?,
            expires_at: auth.expires_at?,
            default_device: global.default_device,
        })
    }
}

impl From<&Credentials> for CredentialFile {
    fn from(credentials: &Credentials) -> Self {
        CredentialFile {
            global: GlobalSection {
                client_id: Some(credentials.client.client_id.clone()),
                client_secret: Some(credentials.client.client_secret.clone()),
                redirect_uri: Some(credentials.client.redirect_uri.clone()),
                default_device: credentials.default_device.clone(),
            },
            auth: Some(AuthSection {
                access_token: Some(credentials.access_token.clone()),
                refresh_token: Some(credentials.refresh_token.clone()),
                expires_at: Some(credentials.expires_at),
            }),
        }
    }
}

/// Reads and writes the credential file.
///
/// The file has a `[global]` section (client id, secret, redirect URI and the
/// optional default device) and an `[auth]` section (access token, refresh
/// token, expiry).
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: PathBuf) -> Self {
        CredentialStore { path }
    }

    pub fn from_env() -> Self {
        Self::new(config::credentials_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored credentials.
    ///
    /// A missing file, a file that does not parse, or one lacking any required
    /// field all yield `Ok(None)`: setup has to run first.
    pub async fn load(&self) -> Res<Option<Credentials>> {
        let content = match async_fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let file: CredentialFile = match toml::from_str(&content) {
            Ok(file) => file,
            Err(_) => return Ok(None),
        };

        Ok(file.into_credentials())
    }

    /// Writes `credentials`, replacing the whole file.
    ///
    /// The content goes to a sibling temp file first and is renamed over the
    /// target, so a crash never leaves a truncated credential file behind.
    pub async fn save(&self, credentials: &Credentials) -> Res<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                async_fs::create_dir_all(parent).await?;
            }
        }

        let content = toml::to_string_pretty(&CredentialFile::from(credentials))?;
        let tmp_path = self.path.with_extension("tmp");
        async_fs::write(&tmp_path, content).await?;
        async_fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}
