//! Generation service client.
//!
//! Serializes the block collection into the generator wire format, POSTs it
//! to the configured endpoint, and writes the returned zip archive into the
//! download directory. The request runs on a worker thread that owns its
//! payload snapshot and reports back over a channel, so canvas interaction
//! is never blocked while a submission is in flight.

use crate::constants::GENERATE_TIMEOUT_SECS;
use crate::types::{Block, BlockSettings, BotProfile, ResponseContent};
use serde::Serialize;
use std::io::{Read, Write as _};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;
use thiserror::Error;

/// Errors in the request/download pipeline. Never surfaced to the user
/// directly; logged and reported as a generic failure toast.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("request failed: {0}")]
    Http(#[from] Box<ureq::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Request body for the generation endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct GeneratePayload {
    pub bot_name: String,
    pub bot_token: String,
    pub blocks: Vec<BlockPayload>,
}

/// One serialized block.
#[derive(Clone, Debug, Serialize)]
pub struct BlockPayload {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub x: f32,
    pub y: f32,
    pub settings: SettingsPayload,
}

/// Per-kind settings in the wire shape: type-specific fields are optional
/// and omitted when absent; the response is always present.
#[derive(Clone, Debug, Serialize)]
pub struct SettingsPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triggers: Option<Vec<String>>,
    pub response: ResponseContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_function: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<ConditionsPayload>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ConditionsPayload {
    pub only_if_admin: bool,
}

impl GeneratePayload {
    /// Build the request body from a read-only snapshot of the collection.
    pub fn new(profile: &BotProfile, blocks: &[Block]) -> Self {
        Self {
            bot_name: profile.name.clone(),
            bot_token: profile.token.clone(),
            blocks: blocks.iter().map(BlockPayload::from).collect(),
        }
    }
}

impl From<&Block> for BlockPayload {
    fn from(block: &Block) -> Self {
        let settings = match &block.settings {
            BlockSettings::Command {
                command,
                only_if_admin,
                response,
            } => SettingsPayload {
                command: Some(command.clone()),
                triggers: None,
                response: response.clone(),
                custom_function: None,
                conditions: only_if_admin.then_some(ConditionsPayload {
                    only_if_admin: true,
                }),
            },
            BlockSettings::AutoReply { triggers, response } => SettingsPayload {
                command: None,
                triggers: Some(triggers.clone()),
                response: response.clone(),
                custom_function: None,
                conditions: None,
            },
            BlockSettings::Custom { function, response } => SettingsPayload {
                command: None,
                triggers: None,
                response: response.clone(),
                custom_function: Some(function.clone()),
                conditions: None,
            },
        };

        Self {
            id: block.id.to_string(),
            kind: block.kind().wire_name(),
            x: block.position.0,
            y: block.position.1,
            settings,
        }
    }
}

/// Result of one generation attempt, delivered over the worker channel.
#[derive(Debug)]
pub enum GenerateOutcome {
    Saved(PathBuf),
    Failed(String),
}

/// Submit the payload on a worker thread. The returned receiver yields
/// exactly one outcome; the UI polls it and surfaces a toast.
pub fn spawn_generate(
    payload: GeneratePayload,
    url: String,
    download_dir: PathBuf,
) -> Receiver<GenerateOutcome> {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let bot_name = payload.bot_name.clone();
        let outcome = match request_archive(&url, &payload)
            .and_then(|bytes| save_archive(&download_dir, &bot_name, &bytes))
        {
            Ok(path) => {
                tracing::info!(path = %path.display(), "bot archive saved");
                let _ = open::that(&download_dir);
                GenerateOutcome::Saved(path)
            }
            Err(e) => {
                tracing::error!("bot generation failed: {e}");
                GenerateOutcome::Failed("Bot generation failed".to_string())
            }
        };
        let _ = tx.send(outcome);
    });
    rx
}

fn request_archive(url: &str, payload: &GeneratePayload) -> Result<Vec<u8>, GenerateError> {
    let agent = ureq::AgentBuilder::new()
        .timeout(Duration::from_secs(GENERATE_TIMEOUT_SECS))
        .build();
    let response = agent.post(url).send_json(payload).map_err(Box::new)?;
    let mut bytes = Vec::new();
    response.into_reader().read_to_end(&mut bytes)?;
    Ok(bytes)
}

/// Write the archive atomically: into a temp file in the target directory,
/// then persisted as `<bot_name>.zip`.
fn save_archive(dir: &Path, bot_name: &str, bytes: &[u8]) -> Result<PathBuf, GenerateError> {
    let stem = bot_name.trim();
    let stem = if stem.is_empty() { "bot" } else { stem };
    let path = dir.join(format!("{stem}.zip"));

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.persist(&path).map_err(|e| GenerateError::Io(e.error))?;
    Ok(path)
}
