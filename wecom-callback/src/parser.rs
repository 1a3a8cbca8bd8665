use crate::error::ParseError;
use crate::fields::FieldMap;
use crate::message::CallbackMessage;
use crate::registry::MESSAGE_BUILDERS;
use crate::xml;

/// Decode one callback payload into its typed variant.
///
/// The only unrecovered failure paths are a structurally invalid document
/// ([`ParseError::Decode`]) and a recognized variant with a missing or
/// mistyped required field. An unrecognized `MsgType` returns
/// [`CallbackMessage::Unknown`] instead of an error.
pub fn parse_message(xml: &str) -> Result<CallbackMessage, ParseError> {
    tracing::debug!(len = xml.len(), "decoding callback payload");

    let fields = FieldMap::new(xml::decode_fields(xml)?);
    let envelope = fields.envelope()?;
    let raw_type = fields.text_required("MsgType", "callback")?;

    match MESSAGE_BUILDERS.get(raw_type.to_ascii_lowercase().as_str()) {
        Some(build) => build(envelope, &fields),
        None => {
            tracing::warn!(msg_type = %raw_type, "unrecognized callback message type");
            Ok(CallbackMessage::Unknown { envelope, raw_type })
        }
    }
}
