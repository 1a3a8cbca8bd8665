use std::collections::HashMap;

use crate::error::ParseError;
use crate::message::Envelope;
use crate::xml::Scalar;

/// Flat tag -> value mapping decoded from one callback payload.
///
/// Builders read their designated source tags out of this map with the
/// typed accessors below; a required tag that is absent or of the wrong
/// shape surfaces as [`ParseError::MissingField`] or
/// [`ParseError::FieldType`] naming the tag.
#[derive(Debug)]
pub struct FieldMap {
    fields: HashMap<String, Scalar>,
}

impl FieldMap {
    pub(crate) fn new(fields: HashMap<String, Scalar>) -> Self {
        Self { fields }
    }

    /// String value of a tag, if present.
    ///
    /// Numeric scalars render back to their source digits: a string field
    /// whose payload text happened to look numeric is still a string.
    pub fn text(&self, tag: &str) -> Option<String> {
        self.fields.get(tag).map(|scalar| match scalar {
            Scalar::Int(int) => int.to_string(),
            Scalar::Float(float) => float.to_string(),
            Scalar::Text(text) => text.clone(),
        })
    }

    pub fn text_required(
        &self,
        tag: &'static str,
        variant: &'static str,
    ) -> Result<String, ParseError> {
        self.text(tag)
            .ok_or(ParseError::MissingField { tag, variant })
    }

    /// Integer value of a tag; `Ok(None)` when absent.
    pub fn int(&self, tag: &'static str) -> Result<Option<i64>, ParseError> {
        match self.fields.get(tag) {
            None => Ok(None),
            Some(Scalar::Int(int)) => Ok(Some(*int)),
            Some(_) => Err(ParseError::FieldType {
                tag,
                expected: "integer",
            }),
        }
    }

    pub fn int_required(
        &self,
        tag: &'static str,
        variant: &'static str,
    ) -> Result<i64, ParseError> {
        self.int(tag)?
            .ok_or(ParseError::MissingField { tag, variant })
    }

    /// Float value of a tag; integers promote.
    pub fn float_required(
        &self,
        tag: &'static str,
        variant: &'static str,
    ) -> Result<f64, ParseError> {
        match self.fields.get(tag) {
            None => Err(ParseError::MissingField { tag, variant }),
            Some(Scalar::Float(float)) => Ok(*float),
            Some(Scalar::Int(int)) => Ok(*int as f64),
            Some(Scalar::Text(_)) => Err(ParseError::FieldType {
                tag,
                expected: "float",
            }),
        }
    }

    /// Common envelope fields present on every callback payload.
    ///
    /// `AgentID` and `MsgId` are optional on the wire; their absence is not
    /// an error.
    pub fn envelope(&self) -> Result<Envelope, ParseError> {
        Ok(Envelope {
            to: self.text_required("ToUserName", "callback")?,
            from: self.text_required("FromUserName", "callback")?,
            created_at: self.int_required("CreateTime", "callback")?,
            agent: self.int("AgentID")?,
            id: self.int("MsgId")?,
        })
    }
}
