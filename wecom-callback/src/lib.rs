//! Decode WeCom (WeChat Work) callback payloads into typed messages.
//!
//! The platform posts one XML document per callback. [`parse_message`]
//! decodes it, dispatches on the `MsgType` discriminator (and `Event` for
//! event payloads) and returns a [`CallbackMessage`] the caller can match
//! on. Payloads with a discriminator we do not know about degrade to the
//! `Unknown` fallback variants instead of erroring, so new upstream message
//! shapes never break existing callers.
//!
//! Transport, signature verification and reply construction live with the
//! caller; this crate only turns an already-extracted XML body into a value.

pub mod error;
pub mod event;
pub mod fields;
pub mod message;
pub mod parser;
mod registry;
mod xml;

pub use error::ParseError;
pub use event::CallbackEvent;
pub use fields::FieldMap;
pub use message::{CallbackMessage, Envelope};
pub use parser::parse_message;
