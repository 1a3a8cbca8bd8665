//! Static variant catalogs.
//!
//! Adding a message or event shape is a pure data addition: one builder fn
//! plus one table entry. Dispatch itself never changes.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::ParseError;
use crate::event::CallbackEvent;
use crate::fields::FieldMap;
use crate::message::{CallbackMessage, Envelope};

pub(crate) type MessageBuilder = fn(Envelope, &FieldMap) -> Result<CallbackMessage, ParseError>;
type EventBuilder = fn(Envelope, &FieldMap) -> Result<CallbackEvent, ParseError>;

/// Top-level catalog, keyed by lowercase `MsgType`.
pub(crate) static MESSAGE_BUILDERS: Lazy<HashMap<&'static str, MessageBuilder>> =
    Lazy::new(|| {
        let builders: [(&'static str, MessageBuilder); 7] = [
            ("text", build_text),
            ("image", build_image),
            ("voice", build_voice),
            ("video", build_video),
            ("location", build_location),
            ("link", build_link),
            ("event", build_event),
        ];
        HashMap::from(builders)
    });

/// Second-level catalog, keyed by lowercase `Event`. Only reachable through
/// the `event` entry above.
static EVENT_BUILDERS: Lazy<HashMap<&'static str, EventBuilder>> = Lazy::new(|| {
    let builders: [(&'static str, EventBuilder); 11] = [
        ("subscribe", event_subscribe),
        ("unsubscribe", event_unsubscribe),
        ("enter_agent", event_enter_agent),
        ("location", event_location),
        ("click", event_click),
        ("view", event_view),
        ("modify_calendar", event_modify_calendar),
        ("delete_calendar", event_delete_calendar),
        ("add_schedule", event_add_schedule),
        ("modify_schedule", event_modify_schedule),
        ("delete_schedule", event_delete_schedule),
    ];
    HashMap::from(builders)
});

fn build_text(envelope: Envelope, fields: &FieldMap) -> Result<CallbackMessage, ParseError> {
    Ok(CallbackMessage::Text {
        envelope,
        content: fields.text_required("Content", "text")?,
    })
}

fn build_image(envelope: Envelope, fields: &FieldMap) -> Result<CallbackMessage, ParseError> {
    Ok(CallbackMessage::Image {
        envelope,
        pic_url: fields.text_required("PicUrl", "image")?,
        media_id: fields.text_required("MediaId", "image")?,
    })
}

fn build_voice(envelope: Envelope, fields: &FieldMap) -> Result<CallbackMessage, ParseError> {
    Ok(CallbackMessage::Voice {
        envelope,
        media_id: fields.text_required("MediaId", "voice")?,
        format: fields.text_required("Format", "voice")?,
    })
}

fn build_video(envelope: Envelope, fields: &FieldMap) -> Result<CallbackMessage, ParseError> {
    Ok(CallbackMessage::Video {
        envelope,
        media_id: fields.text_required("MediaId", "video")?,
        thumb_media_id: fields.text_required("ThumbMediaId", "video")?,
    })
}

fn build_location(envelope: Envelope, fields: &FieldMap) -> Result<CallbackMessage, ParseError> {
    Ok(CallbackMessage::Location {
        envelope,
        location_x: fields.float_required("Location_X", "location")?,
        location_y: fields.float_required("Location_Y", "location")?,
        scale: fields.int_required("Scale", "location")?,
        label: fields.text_required("Label", "location")?,
    })
}

fn build_link(envelope: Envelope, fields: &FieldMap) -> Result<CallbackMessage, ParseError> {
    Ok(CallbackMessage::Link {
        envelope,
        title: fields.text_required("Title", "link")?,
        description: fields.text_required("Description", "link")?,
        url: fields.text_required("Url", "link")?,
        pic_url: fields.text_required("PicUrl", "link")?,
    })
}

/// `MsgType=event` payloads dispatch a second time on the `Event` tag. An
/// absent tag reads as an empty discriminator and falls through to the
/// unknown-event fallback, not a structural failure.
fn build_event(envelope: Envelope, fields: &FieldMap) -> Result<CallbackMessage, ParseError> {
    let raw_event = fields.text("Event").unwrap_or_default();
    let event = match EVENT_BUILDERS.get(raw_event.to_ascii_lowercase().as_str()) {
        Some(build) => build(envelope, fields)?,
        None => {
            tracing::warn!(event = %raw_event, "unrecognized callback event");
            CallbackEvent::Unknown {
                envelope,
                raw_event,
            }
        }
    };
    Ok(CallbackMessage::Event(event))
}

fn event_subscribe(envelope: Envelope, _fields: &FieldMap) -> Result<CallbackEvent, ParseError> {
    Ok(CallbackEvent::Subscribe { envelope })
}

fn event_unsubscribe(envelope: Envelope, _fields: &FieldMap) -> Result<CallbackEvent, ParseError> {
    Ok(CallbackEvent::Unsubscribe { envelope })
}

fn event_enter_agent(envelope: Envelope, _fields: &FieldMap) -> Result<CallbackEvent, ParseError> {
    Ok(CallbackEvent::EnterAgent { envelope })
}

fn event_location(envelope: Envelope, fields: &FieldMap) -> Result<CallbackEvent, ParseError> {
    Ok(CallbackEvent::Location {
        envelope,
        latitude: fields.float_required("Latitude", "location event")?,
        longitude: fields.float_required("Longitude", "location event")?,
        precision: fields.float_required("Precision", "location event")?,
    })
}

fn event_click(envelope: Envelope, fields: &FieldMap) -> Result<CallbackEvent, ParseError> {
    Ok(CallbackEvent::Click {
        envelope,
        key: fields.text_required("EventKey", "click event")?,
    })
}

fn event_view(envelope: Envelope, fields: &FieldMap) -> Result<CallbackEvent, ParseError> {
    // The platform puts the clicked URL in EventKey.
    let key = fields.text_required("EventKey", "view event")?;
    Ok(CallbackEvent::View {
        envelope,
        url: key.clone(),
        key,
    })
}

fn event_modify_calendar(
    envelope: Envelope,
    fields: &FieldMap,
) -> Result<CallbackEvent, ParseError> {
    Ok(CallbackEvent::ModifyCalendar {
        envelope,
        calendar_id: fields.text_required("CalId", "modify_calendar event")?,
    })
}

fn event_delete_calendar(
    envelope: Envelope,
    fields: &FieldMap,
) -> Result<CallbackEvent, ParseError> {
    Ok(CallbackEvent::DeleteCalendar {
        envelope,
        calendar_id: fields.text_required("CalId", "delete_calendar event")?,
    })
}

fn event_add_schedule(envelope: Envelope, fields: &FieldMap) -> Result<CallbackEvent, ParseError> {
    Ok(CallbackEvent::AddSchedule {
        envelope,
        calendar_id: fields.text_required("CalId", "add_schedule event")?,
        schedule_id: fields.text_required("ScheduleId", "add_schedule event")?,
    })
}

fn event_modify_schedule(
    envelope: Envelope,
    fields: &FieldMap,
) -> Result<CallbackEvent, ParseError> {
    Ok(CallbackEvent::ModifySchedule {
        envelope,
        calendar_id: fields.text_required("CalId", "modify_schedule event")?,
        schedule_id: fields.text_required("ScheduleId", "modify_schedule event")?,
    })
}

fn event_delete_schedule(
    envelope: Envelope,
    fields: &FieldMap,
) -> Result<CallbackEvent, ParseError> {
    Ok(CallbackEvent::DeleteSchedule {
        envelope,
        calendar_id: fields.text_required("CalId", "delete_schedule event")?,
        schedule_id: fields.text_required("ScheduleId", "delete_schedule event")?,
    })
}
