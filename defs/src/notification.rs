use serde::{Deserialize, Serialize};

/// Slack Block Kit payload posted to the webhook.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct NotificationMessage {
    pub blocks: Vec<Block>,
}

impl NotificationMessage {
    pub fn new(blocks: Vec<Block>) -> Self {
        NotificationMessage { blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Section { text: TextObject },
    Divider,
}

impl Block {
    /// Stack level line, e.g. ":warning: Drift detected at ..."
    pub fn header(text: impl Into<String>) -> Self {
        Block::Section {
            text: TextObject::mrkdwn(text),
        }
    }

    pub fn resource_line(text: impl Into<String>) -> Self {
        Block::Section {
            text: TextObject::mrkdwn(text),
        }
    }

    pub fn divider() -> Self {
        Block::Divider
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Block::Section { text } => Some(text.text.as_str()),
            Block::Divider => None,
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct TextObject {
    #[serde(rename = "type")]
    pub kind: TextKind,
    pub text: String,
}

impl TextObject {
    pub fn mrkdwn(text: impl Into<String>) -> Self {
        TextObject {
            kind: TextKind::Mrkdwn,
            text: text.into(),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TextKind {
    Mrkdwn,
}
