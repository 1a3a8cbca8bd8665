use thiserror::Error;

/// Errors surfaced while decoding a callback payload.
///
/// An unrecognized `MsgType` or `Event` value is deliberately not an error:
/// those payloads degrade to the `Unknown` fallback variants so that new
/// upstream message shapes never crash a caller that pattern-matches with a
/// catch-all arm.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("failed to decode callback xml: {0}")]
    Decode(String),

    #[error("missing required field {tag} for {variant} payload")]
    MissingField {
        tag: &'static str,
        variant: &'static str,
    },

    #[error("field {tag} is not a valid {expected} value")]
    FieldType {
        tag: &'static str,
        expected: &'static str,
    },
}
