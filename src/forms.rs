// src/forms.rs
use std::io::Read;

use astra::Request;
use url::form_urlencoded;

use crate::errors::ServerError;

/// Upper bound on an accepted form body.
pub const MAX_FORM_BYTES: u64 = 64 * 1024;

/// Decoded `application/x-www-form-urlencoded` pairs, in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData(Vec<(String, String)>);

impl FormData {
    pub fn parse(bytes: &[u8]) -> Self {
        Self(form_urlencoded::parse(bytes).into_owned().collect())
    }

    pub fn from_query(req: &Request) -> Self {
        req.uri()
            .query()
            .map(|q| Self::parse(q.as_bytes()))
            .unwrap_or_default()
    }

    /// Bodies over [`MAX_FORM_BYTES`] are rejected whole, never parsed in part.
    pub fn from_body(req: &mut Request) -> Result<Self, ServerError> {
        let mut buf = Vec::new();
        req.body_mut()
            .reader()
            .take(MAX_FORM_BYTES + 1)
            .read_to_end(&mut buf)
            .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;

        if buf.len() as u64 > MAX_FORM_BYTES {
            return Err(ServerError::PayloadTooLarge(MAX_FORM_BYTES));
        }
        Ok(Self::parse(&buf))
    }

    /// First value for `name`, or "" when absent.
    pub fn get(&self, name: &str) -> &str {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    pub fn all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Percent-encode a single query value.
pub fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
