use serde::Serialize;

use crate::message::Envelope;

/// One decoded event payload (`MsgType=event`).
///
/// Discriminated by the payload's `Event` tag. An `Event` value not in the
/// catalog, or an absent `Event` tag, decodes to [`CallbackEvent::Unknown`]
/// with the raw discriminator text preserved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CallbackEvent {
    Subscribe {
        #[serde(flatten)]
        envelope: Envelope,
    },
    Unsubscribe {
        #[serde(flatten)]
        envelope: Envelope,
    },
    EnterAgent {
        #[serde(flatten)]
        envelope: Envelope,
    },
    Location {
        #[serde(flatten)]
        envelope: Envelope,
        latitude: f64,
        longitude: f64,
        precision: f64,
    },
    Click {
        #[serde(flatten)]
        envelope: Envelope,
        key: String,
    },
    /// Menu link click. The platform stores the clicked URL in `EventKey`,
    /// exposed here both as the generic `key` and as `url`.
    View {
        #[serde(flatten)]
        envelope: Envelope,
        key: String,
        url: String,
    },
    ModifyCalendar {
        #[serde(flatten)]
        envelope: Envelope,
        calendar_id: String,
    },
    DeleteCalendar {
        #[serde(flatten)]
        envelope: Envelope,
        calendar_id: String,
    },
    AddSchedule {
        #[serde(flatten)]
        envelope: Envelope,
        calendar_id: String,
        schedule_id: String,
    },
    ModifySchedule {
        #[serde(flatten)]
        envelope: Envelope,
        calendar_id: String,
        schedule_id: String,
    },
    DeleteSchedule {
        #[serde(flatten)]
        envelope: Envelope,
        calendar_id: String,
        schedule_id: String,
    },
    Unknown {
        #[serde(flatten)]
        envelope: Envelope,
        /// Raw `Event` text as received; empty when the tag was absent.
        raw_event: String,
    },
}

impl CallbackEvent {
    /// Canonical lowercase event type, regardless of source casing.
    pub fn event_type(&self) -> &'static str {
        match self {
            CallbackEvent::Subscribe { .. } => "subscribe",
            CallbackEvent::Unsubscribe { .. } => "unsubscribe",
            CallbackEvent::EnterAgent { .. } => "enter_agent",
            CallbackEvent::Location { .. } => "location",
            CallbackEvent::Click { .. } => "click",
            CallbackEvent::View { .. } => "view",
            CallbackEvent::ModifyCalendar { .. } => "modify_calendar",
            CallbackEvent::DeleteCalendar { .. } => "delete_calendar",
            CallbackEvent::AddSchedule { .. } => "add_schedule",
            CallbackEvent::ModifySchedule { .. } => "modify_schedule",
            CallbackEvent::DeleteSchedule { .. } => "delete_schedule",
            CallbackEvent::Unknown { .. } => "unknown",
        }
    }

    /// Common envelope fields carried by every variant.
    pub fn envelope(&self) -> &Envelope {
        match self {
            CallbackEvent::Subscribe { envelope }
            | CallbackEvent::Unsubscribe { envelope }
            | CallbackEvent::EnterAgent { envelope }
            | CallbackEvent::Location { envelope, .. }
            | CallbackEvent::Click { envelope, .. }
            | CallbackEvent::View { envelope, .. }
            | CallbackEvent::ModifyCalendar { envelope, .. }
            | CallbackEvent::DeleteCalendar { envelope, .. }
            | CallbackEvent::AddSchedule { envelope, .. }
            | CallbackEvent::ModifySchedule { envelope, .. }
            | CallbackEvent::DeleteSchedule { envelope, .. }
            | CallbackEvent::Unknown { envelope, .. } => envelope,
        }
    }
}
