use serde::Serialize;

use crate::event::CallbackEvent;

/// Fields shared by every callback payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    /// Recipient identifier (`ToUserName`).
    pub to: String,
    /// Sender identifier (`FromUserName`).
    pub from: String,
    /// Unix timestamp in seconds (`CreateTime`).
    pub created_at: i64,
    /// Numeric agent/application id (`AgentID`); absent on some payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<i64>,
    /// Message id (`MsgId`); present on content messages, absent on most events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

/// One decoded callback message.
///
/// Discriminated by the payload's `MsgType` tag. Event payloads
/// (`MsgType=event`) carry a [`CallbackEvent`] with its own second-level
/// discriminator. A `MsgType` value not in the catalog decodes to
/// [`CallbackMessage::Unknown`] with the raw discriminator text preserved
/// for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CallbackMessage {
    Text {
        #[serde(flatten)]
        envelope: Envelope,
        content: String,
    },
    Image {
        #[serde(flatten)]
        envelope: Envelope,
        pic_url: String,
        media_id: String,
    },
    Voice {
        #[serde(flatten)]
        envelope: Envelope,
        media_id: String,
        format: String,
    },
    Video {
        #[serde(flatten)]
        envelope: Envelope,
        media_id: String,
        thumb_media_id: String,
    },
    Location {
        #[serde(flatten)]
        envelope: Envelope,
        location_x: f64,
        location_y: f64,
        scale: i64,
        label: String,
    },
    Link {
        #[serde(flatten)]
        envelope: Envelope,
        title: String,
        description: String,
        url: String,
        pic_url: String,
    },
    Event(CallbackEvent),
    Unknown {
        #[serde(flatten)]
        envelope: Envelope,
        raw_type: String,
    },
}

impl CallbackMessage {
    /// Canonical lowercase message type, regardless of source casing.
    pub fn msg_type(&self) -> &'static str {
        match self {
            CallbackMessage::Text { .. } => "text",
            CallbackMessage::Image { .. } => "image",
            CallbackMessage::Voice { .. } => "voice",
            CallbackMessage::Video { .. } => "video",
            CallbackMessage::Location { .. } => "location",
            CallbackMessage::Link { .. } => "link",
            CallbackMessage::Event(_) => "event",
            CallbackMessage::Unknown { .. } => "unknown",
        }
    }

    /// Common envelope fields carried by every variant.
    pub fn envelope(&self) -> &Envelope {
        match self {
            CallbackMessage::Text { envelope, .. }
            | CallbackMessage::Image { envelope, .. }
            | CallbackMessage::Voice { envelope, .. }
            | CallbackMessage::Video { envelope, .. }
            | CallbackMessage::Location { envelope, .. }
            | CallbackMessage::Link { envelope, .. }
            | CallbackMessage::Unknown { envelope, .. } => envelope,
            CallbackMessage::Event(event) => event.envelope(),
        }
    }
}
