use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::model::{Command, NavItem, Profile};
use crate::domain::primitive::PromptIdentity;
use crate::interface_adapter::port::ProfilePort;
use crate::shared::error::AppError;

// On-disk shape of a profile. Kept separate from the domain type so the
// domain stays free of serde.

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProfileFile {
    title: String,
    prompt: PromptFile,
    #[serde(default)]
    boot_lines: Vec<String>,
    commands: Vec<CommandFile>,
    #[serde(default)]
    nav: Vec<NavFile>,
    #[serde(default)]
    card: CardFile,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct PromptFile {
    user: String,
    host: String,
    symbol: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct CommandFile {
    name: String,
    body: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct NavFile {
    label: String,
    command: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct CardFile {
    #[serde(default)]
    front: Vec<String>,
    #[serde(default)]
    back: Vec<String>,
}

impl From<ProfileFile> for Profile {
    fn from(file: ProfileFile) -> Self {
        Self {
            title: file.title,
            prompt: PromptIdentity::new(file.prompt.user, file.prompt.host, file.prompt.symbol),
            boot_lines: file.boot_lines,
            commands: file
                .commands
                .into_iter()
                .map(|c| Command {
                    name: c.name,
                    body: c.body,
                })
                .collect(),
            nav: file
                .nav
                .into_iter()
                .map(|n| NavItem::new(n.label, n.command))
                .collect(),
            card_front: file.card.front,
            card_back: file.card.back,
        }
    }
}

impl From<&Profile> for ProfileFile {
    fn from(profile: &Profile) -> Self {
        Self {
            title: profile.title.clone(),
            prompt: PromptFile {
                user: profile.prompt.user.clone(),
                host: profile.prompt.host.clone(),
                symbol: profile.prompt.symbol.clone(),
            },
            boot_lines: profile.boot_lines.clone(),
            commands: profile
                .commands
                .iter()
                .map(|c| CommandFile {
                    name: c.name.clone(),
                    body: c.body.clone(),
                })
                .collect(),
            nav: profile
                .nav
                .iter()
                .map(|n| NavFile {
                    label: n.label.clone(),
                    command: n.command.clone(),
                })
                .collect(),
            card: CardFile {
                front: profile.card_front.clone(),
                back: profile.card_back.clone(),
            },
        }
    }
}

/// Render a profile in the format `JsonProfileAdapter` reads.
pub fn to_pretty_json(profile: &Profile) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ProfileFile::from(profile))
}

/// Reads a profile from a JSON file.
pub struct JsonProfileAdapter {
    path: PathBuf,
}

impl JsonProfileAdapter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProfilePort for JsonProfileAdapter {
    fn load(&self) -> Result<Profile, AppError> {
        debug!(path = %self.path.display(), "reading profile file");
        let raw = std::fs::read_to_string(&self.path).map_err(|source| AppError::ProfileRead {
            path: self.path.clone(),
            source,
        })?;
        let file: ProfileFile =
            serde_json::from_str(&raw).map_err(|source| AppError::ProfileParse {
                path: self.path.clone(),
                source,
            })?;
        Ok(file.into())
    }
}
