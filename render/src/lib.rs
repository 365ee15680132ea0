//! Presentation of a bootstrap outcome.
//!
//! A verified identity becomes a set of named fields (greeting, display name,
//! id, auth time, raw payload). Rejections and the not-found case become a
//! single diagnostic message instead.

use chrono::{Local, TimeZone};
use miniapp_types::{BootstrapOutcome, VerificationResult, VerifiedIdentity, VerifiedUser};
use serde::Serialize;
use std::fmt;

/// Shown when no source produced init data, i.e. the page was opened outside
/// the Telegram client.
pub const NOT_FOUND_GUIDANCE: &str =
    "initData not found. Open this page from the bot's WebApp button inside Telegram.";

/// Display name used when the user has neither a username nor a first name.
pub const ANONYMOUS: &str = "anonymous";

/// Placeholder for a missing id or auth time.
pub const UNKNOWN: &str = "unknown";

const AUTH_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Text for each slot of the page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum RenderedView {
    Identity {
        greeting: String,
        display_name: String,
        user_id: String,
        auth_time: String,
        raw_json: String,
    },
    Diagnostic {
        message: String,
    },
}

impl fmt::Display for RenderedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderedView::Identity {
                greeting,
                display_name,
                user_id,
                auth_time,
                raw_json,
            } => {
                writeln!(f, "{greeting}")?;
                writeln!(f, "name:      {display_name}")?;
                writeln!(f, "id:        {user_id}")?;
                writeln!(f, "auth date: {auth_time}")?;
                write!(f, "{raw_json}")
            }
            RenderedView::Diagnostic { message } => f.write_str(message),
        }
    }
}

/// Prefer the public handle, then the given name, then [`ANONYMOUS`].
pub fn display_name(user: &VerifiedUser) -> &str {
    user.username()
        .or_else(|| user.first_name())
        .unwrap_or(ANONYMOUS)
}

/// Diagnostic text for a rejected verification, with status and body verbatim.
pub fn rejection_message(result: &VerificationResult) -> String {
    format!(
        "Verification failed (status {}): {}",
        result.status, result.body
    )
}

/// Renders outcomes, formatting auth times in a fixed time zone.
pub struct Renderer<Tz> {
    tz: Tz,
}

impl Renderer<Local> {
    /// Format times in the machine's local zone.
    pub fn local() -> Self {
        Self::new(Local)
    }
}

impl<Tz> Renderer<Tz>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn render(&self, outcome: &BootstrapOutcome) -> RenderedView {
        match outcome {
            BootstrapOutcome::Verified(identity) => self.render_identity(identity),
            BootstrapOutcome::Rejected(result) => RenderedView::Diagnostic {
                message: rejection_message(result),
            },
            BootstrapOutcome::NotFound => RenderedView::Diagnostic {
                message: NOT_FOUND_GUIDANCE.to_string(),
            },
        }
    }

    fn render_identity(&self, identity: &VerifiedIdentity) -> RenderedView {
        let name = display_name(&identity.user).to_string();
        RenderedView::Identity {
            greeting: format!("Hello, {name}!"),
            user_id: identity.user.id().unwrap_or_else(|| UNKNOWN.to_string()),
            auth_time: self.auth_time(&identity.user),
            raw_json: serde_json::to_string_pretty(&identity.raw)
                .unwrap_or_else(|_| identity.raw.to_string()),
            display_name: name,
        }
    }

    fn auth_time(&self, user: &VerifiedUser) -> String {
        user.auth_date()
            .and_then(|ts| i64::try_from(ts.as_secs()).ok())
            .and_then(|secs| self.tz.timestamp_opt(secs, 0).single())
            .map(|at| at.format(AUTH_TIME_FORMAT).to_string())
            .unwrap_or_else(|| UNKNOWN.to_string())
    }
}
