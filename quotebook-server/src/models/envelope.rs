//! The JSON envelope every non-listing response is wrapped in

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Health check message reported when storage answers a ping
pub const HEALTHY_MESSAGE: &str = "system is healthy";

/// `{ "err": ..., "msg": ... }`, with absent fields left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub err: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

impl Envelope {
    pub fn error(err: impl Display) -> Self {
        Self {
            err: Some(err.to_string()),
            msg: None,
        }
    }

    pub fn message(msg: impl Into<String>) -> Self {
        Self {
            err: None,
            msg: Some(msg.into()),
        }
    }

    pub fn healthy() -> Self {
        Self::message(HEALTHY_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omits_absent_fields() {
        let json = serde_json::to_string(&Envelope::healthy()).unwrap();
        assert_eq!(json, r#"{"msg":"system is healthy"}"#);

        let json = serde_json::to_string(&Envelope::error("boom")).unwrap();
        assert_eq!(json, r#"{"err":"boom"}"#);
    }
}
