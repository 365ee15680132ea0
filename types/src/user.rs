//! Identity returned by the verification endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{MiniAppError, Timestamp};

/// The `user` object of a successful verification response.
///
/// The endpoint guarantees `id` and optionally `username`, `first_name` and
/// `auth_date`, but field types are not enforced on the wire, so the object is
/// kept as-is and read through typed accessors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerifiedUser(Map<String, Value>);

impl VerifiedUser {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// The user identifier as display text. Numbers and strings are accepted.
    pub fn id(&self) -> Option<String> {
        match self.0.get("id")? {
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }

    /// Public handle, if set and non-empty.
    pub fn username(&self) -> Option<&str> {
        self.str_field("username")
    }

    /// Given name, if set and non-empty.
    pub fn first_name(&self) -> Option<&str> {
        self.str_field("first_name")
    }

    pub fn auth_date(&self) -> Option<Timestamp> {
        self.0.get("auth_date").and_then(Timestamp::from_json)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }
}

/// A verified identity: the user plus everything else the endpoint returned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerifiedIdentity {
    pub user: VerifiedUser,
    /// Session token, present when the backend issues one alongside the user.
    #[serde(default)]
    pub token: Option<String>,
    /// The full response body, kept for the diagnostic dump.
    pub raw: Value,
}

impl VerifiedIdentity {
    /// Extract the identity from a response body.
    ///
    /// Fails unless `body.user` is a JSON object.
    pub fn from_body(body: &Value) -> Result<Self, MiniAppError> {
        let user = body
            .get("user")
            .and_then(Value::as_object)
            .cloned()
            .ok_or(MiniAppError::MissingUser)?;
        let token = body
            .get("token")
            .and_then(Value::as_str)
            .map(str::to_string);
        Ok(Self {
            user: VerifiedUser::new(user),
            token,
            raw: body.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_documented_fields() {
        let body = json!({
            "ok": true,
            "user": {"id": 42, "username": "ann", "first_name": "Ann", "auth_date": 1700000000}
        });
        let identity = VerifiedIdentity::from_body(&body).unwrap();
        assert_eq!(identity.user.id().as_deref(), Some("42"));
        assert_eq!(identity.user.username(), Some("ann"));
        assert_eq!(identity.user.first_name(), Some("Ann"));
        assert_eq!(identity.user.auth_date(), Some(Timestamp::new(1_700_000_000)));
        assert_eq!(identity.token, None);
        assert_eq!(identity.raw, body);
    }

    #[test]
    fn null_and_empty_fields_read_as_absent() {
        let body = json!({"user": {"id": null, "username": "", "first_name": null}});
        let identity = VerifiedIdentity::from_body(&body).unwrap();
        assert_eq!(identity.user.id(), None);
        assert_eq!(identity.user.username(), None);
        assert_eq!(identity.user.first_name(), None);
        assert_eq!(identity.user.auth_date(), None);
    }

    #[test]
    fn keeps_session_token() {
        let body = json!({"ok": true, "user": {"id": "7"}, "token": "eyJ.x.y"});
        let identity = VerifiedIdentity::from_body(&body).unwrap();
        assert_eq!(identity.user.id().as_deref(), Some("7"));
        assert_eq!(identity.token.as_deref(), Some("eyJ.x.y"));
    }

    #[test]
    fn missing_or_non_object_user_is_an_error() {
        for body in [json!({"ok": true}), json!({"user": null}), json!({"user": "ann"})] {
            assert!(matches!(
                VerifiedIdentity::from_body(&body),
                Err(MiniAppError::MissingUser)
            ));
        }
    }
}
