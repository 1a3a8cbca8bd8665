use std::collections::HashMap;

use quick_xml::events::Event as XmlEvent;
use quick_xml::Reader;

use crate::error::ParseError;

/// One decoded leaf value from the callback envelope.
///
/// The wire format carries everything as element text; numeric-looking text
/// is decoded eagerly so field mapping can re-validate types without
/// re-parsing strings.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Decode a callback document into a flat tag -> value mapping.
///
/// The payload contract is a single root element whose children are flat
/// leaves, each plain text or CDATA-wrapped. Anything structurally invalid
/// (non-XML input, mismatched tags, no root element) fails with
/// [`ParseError::Decode`].
pub(crate) fn decode_fields(xml: &str) -> Result<HashMap<String, Scalar>, ParseError> {
    let mut reader = Reader::from_str(xml);
    let mut fields = HashMap::new();
    let mut depth = 0usize;
    // Tag of the root child currently being read, with its accumulated text.
    let mut current: Option<String> = None;
    let mut text = String::new();
    let mut saw_root = false;

    loop {
        match reader.read_event() {
            Ok(XmlEvent::Start(start)) => {
                depth += 1;
                match depth {
                    1 => saw_root = true,
                    2 => {
                        current =
                            Some(String::from_utf8_lossy(start.name().as_ref()).into_owned());
                        text.clear();
                    }
                    // Deeper nesting is outside the flat payload contract.
                    _ => {}
                }
            }
            Ok(XmlEvent::Empty(empty)) => {
                if depth == 0 {
                    saw_root = true;
                } else if depth == 1 {
                    let tag = String::from_utf8_lossy(empty.name().as_ref()).into_owned();
                    fields.insert(tag, Scalar::Text(String::new()));
                }
            }
            Ok(XmlEvent::End(_)) => {
                if depth == 2 {
                    if let Some(tag) = current.take() {
                        fields.insert(tag, decode_scalar(&text));
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Ok(XmlEvent::Text(t)) => {
                if current.is_some() {
                    let value = t.unescape().map_err(|e| {
                        tracing::error!("failed to unescape element text: {}", e);
                        ParseError::Decode(e.to_string())
                    })?;
                    text.push_str(&value);
                }
            }
            Ok(XmlEvent::CData(data)) => {
                if current.is_some() {
                    text.push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Ok(XmlEvent::Eof) => break,
            // Declarations, comments and processing instructions carry no fields.
            Ok(_) => {}
            Err(e) => {
                tracing::error!("malformed callback payload: {}", e);
                return Err(ParseError::Decode(e.to_string()));
            }
        }
    }

    if !saw_root {
        return Err(ParseError::Decode(String::from(
            "payload has no root element",
        )));
    }
    Ok(fields)
}

fn decode_scalar(text: &str) -> Scalar {
    let trimmed = text.trim();
    if let Ok(int) = trimmed.parse::<i64>() {
        Scalar::Int(int)
    } else if let Ok(float) = trimmed.parse::<f64>() {
        Scalar::Float(float)
    } else {
        Scalar::Text(trimmed.to_string())
    }
}
