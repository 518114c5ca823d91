//! Approve/deny actions triggered from the card.
//!
//! Each click resolves to an [`ActionTarget`] read back from the button's data
//! attributes and ends in exactly one [`ActionOutcome`].

use crate::requests::ServiceCall;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Approve,
    Deny,
}

impl ActionKind {
    /// Value of the `data-action` attribute.
    pub fn as_attr(self) -> &'static str {
        match self {
            ActionKind::Approve => "approve",
            ActionKind::Deny => "deny",
        }
    }

    pub fn from_attr(raw: &str) -> Option<Self> {
        match raw {
            "approve" => Some(ActionKind::Approve),
            "deny" => Some(ActionKind::Deny),
            _ => None,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ActionKind::Approve => "mdi:check",
            ActionKind::Deny => "mdi:close",
        }
    }

    pub fn service_call(self, request_id: i64) -> ServiceCall {
        match self {
            ActionKind::Approve => ServiceCall::approve(request_id),
            ActionKind::Deny => ServiceCall::deny(request_id),
        }
    }

    pub fn success_message(self, title: &str) -> String {
        match self {
            ActionKind::Approve => format!("Approved: {title}"),
            ActionKind::Deny => format!("Denied: {title}"),
        }
    }

    pub fn failure_message(self, title: &str) -> String {
        match self {
            ActionKind::Approve => format!("Failed to approve: {title}"),
            ActionKind::Deny => format!("Failed to deny: {title}"),
        }
    }
}

/// What a single click asks for.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionTarget {
    pub kind: ActionKind,
    pub request_id: i64,
    pub title: String,
}

impl ActionTarget {
    /// Rebuilds a target from the `data-action`, `data-request-id` and
    /// `data-title` attributes written by the renderer.
    pub fn from_attributes(action: &str, request_id: &str, title: &str) -> Option<Self> {
        Some(Self {
            kind: ActionKind::from_attr(action)?,
            request_id: request_id.trim().parse().ok()?,
            title: title.to_string(),
        })
    }
}

/// Terminal state of one click.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// The confirmation prompt was dismissed; nothing was sent.
    Declined,
    /// The command channel accepted the call and a refresh was scheduled.
    Succeeded,
    /// The command channel rejected the call.
    Failed(String),
}
