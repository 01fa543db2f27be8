//! Core types for the Botboard canvas system.
//!
//! A board is an ordered collection of [`Block`]s. Each block is a positioned
//! unit of bot behavior whose settings are a sum type: the variant *is* the
//! block's kind, so settings can never disagree with the kind they belong to.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable unique identifier for a block. Assigned at creation, never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(Uuid);

impl BlockId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The three kinds of behavior block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockKind {
    /// Slash-command handler (`/start`, `/help`, ...)
    Command,
    /// Keyword-triggered auto reply
    AutoReply,
    /// Named custom handler function
    Custom,
}

impl BlockKind {
    pub fn all() -> &'static [BlockKind] {
        &[BlockKind::Command, BlockKind::AutoReply, BlockKind::Custom]
    }

    /// Human-readable label for docks, cards, and the edit form.
    pub fn label(&self) -> &'static str {
        match self {
            BlockKind::Command => "Command",
            BlockKind::AutoReply => "Auto reply",
            BlockKind::Custom => "Custom",
        }
    }

    /// Discriminant string used by the generation service.
    pub fn wire_name(&self) -> &'static str {
        match self {
            BlockKind::Command => "command",
            BlockKind::AutoReply => "autoReply",
            BlockKind::Custom => "custom",
        }
    }

    /// Label of the kind-specific field in the edit form.
    pub fn field_label(&self) -> &'static str {
        match self {
            BlockKind::Command => "Command",
            BlockKind::AutoReply => "Triggers (comma separated)",
            BlockKind::Custom => "Custom function",
        }
    }

    pub fn field_placeholder(&self) -> &'static str {
        match self {
            BlockKind::Command => "start",
            BlockKind::AutoReply => "hello, hi, hey",
            BlockKind::Custom => "handle_order",
        }
    }
}

/// One inline keyboard button. Both fields are always present (possibly
/// empty) once the row exists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseButton {
    pub text: String,
    pub callback: String,
}

/// The reply a block sends when it fires. Shared by every block kind.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseContent {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub buttons: Vec<ResponseButton>,
}

/// Per-kind block settings. The variant doubles as the block's kind, so a
/// kind/settings mismatch is unrepresentable.
#[derive(Clone, Debug, PartialEq)]
pub enum BlockSettings {
    Command {
        command: String,
        only_if_admin: bool,
        response: ResponseContent,
    },
    AutoReply {
        triggers: Vec<String>,
        response: ResponseContent,
    },
    Custom {
        function: String,
        response: ResponseContent,
    },
}

impl BlockSettings {
    /// Blank settings for a freshly added block: every field present, empty.
    pub fn default_for(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Command => BlockSettings::Command {
                command: String::new(),
                only_if_admin: false,
                response: ResponseContent::default(),
            },
            BlockKind::AutoReply => BlockSettings::AutoReply {
                triggers: Vec::new(),
                response: ResponseContent::default(),
            },
            BlockKind::Custom => BlockSettings::Custom {
                function: String::new(),
                response: ResponseContent::default(),
            },
        }
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            BlockSettings::Command { .. } => BlockKind::Command,
            BlockSettings::AutoReply { .. } => BlockKind::AutoReply,
            BlockSettings::Custom { .. } => BlockKind::Custom,
        }
    }

    /// Re-shape these settings for a different kind. The shared response
    /// carries over; fields of the old kind are discarded and the new
    /// kind's fields start empty.
    pub fn retargeted(self, kind: BlockKind) -> Self {
        if self.kind() == kind {
            return self;
        }
        let response = self.into_response();
        match kind {
            BlockKind::Command => BlockSettings::Command {
                command: String::new(),
                only_if_admin: false,
                response,
            },
            BlockKind::AutoReply => BlockSettings::AutoReply {
                triggers: Vec::new(),
                response,
            },
            BlockKind::Custom => BlockSettings::Custom {
                function: String::new(),
                response,
            },
        }
    }

    pub fn response(&self) -> &ResponseContent {
        match self {
            BlockSettings::Command { response, .. }
            | BlockSettings::AutoReply { response, .. }
            | BlockSettings::Custom { response, .. } => response,
        }
    }

    pub fn into_response(self) -> ResponseContent {
        match self {
            BlockSettings::Command { response, .. }
            | BlockSettings::AutoReply { response, .. }
            | BlockSettings::Custom { response, .. } => response,
        }
    }

    /// One-line summary shown on the block card under its title.
    pub fn summary(&self) -> String {
        match self {
            BlockSettings::Command { command, .. } if command.is_empty() => {
                "No command set".to_string()
            }
            BlockSettings::Command { command, .. } => format!("/{}", command.trim_start_matches('/')),
            BlockSettings::AutoReply { triggers, .. } if triggers.is_empty() => {
                "No triggers set".to_string()
            }
            BlockSettings::AutoReply { triggers, .. } => triggers.join(", "),
            BlockSettings::Custom { function, .. } if function.is_empty() => {
                "No function set".to_string()
            }
            BlockSettings::Custom { function, .. } => function.clone(),
        }
    }
}

/// A positioned, typed unit of bot behavior.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub id: BlockId,
    /// Canvas-local pixel coordinates of the card's top-left corner.
    /// Signed and unbounded; the canvas itself scrolls.
    pub position: (f32, f32),
    pub settings: BlockSettings,
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        self.settings.kind()
    }
}

/// Bot identity captured by the setup wizard; consumed only when the
/// collection is submitted for generation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BotProfile {
    pub name: String,
    pub token: String,
}

/// Parse a comma-separated trigger list as typed into the edit form.
/// Whitespace is trimmed and empty entries dropped, so malformed input
/// degrades to an empty list rather than an error.
pub fn parse_triggers(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
