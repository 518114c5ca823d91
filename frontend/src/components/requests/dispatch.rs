//! Approve/deny dispatcher.
//!
//! One call to [`dispatch`] is one click: optionally confirm, send the service
//! call, then notify and schedule a refresh (on success) or notify the failure.
//! The host side effects go through [`CardHost`] so the flow can run against a
//! recording host in tests.

use std::time::Duration;

use common::actions::{ActionOutcome, ActionTarget};
use common::model::notification::Notification;
use common::model::settings::Settings;
use common::requests::ServiceCall;

use crate::error::CardError;

/// Wait before asking the host to re-poll the sensor after a successful call,
/// so the backend has a chance to reflect the change.
pub const REFRESH_DELAY: Duration = Duration::from_millis(500);

/// Host capabilities used by the dispatcher.
#[allow(async_fn_in_trait)]
pub trait CardHost {
    /// Blocking yes/no prompt.
    fn confirm(&self, message: &str) -> bool;

    /// Sends a service call and waits for it to resolve.
    async fn call_service(&self, call: &ServiceCall) -> Result<(), CardError>;

    /// Shows a transient notification.
    fn notify(&self, notification: Notification);

    /// Fire-and-forget `update_entity` for `entity_id` after `delay`.
    fn schedule_refresh(&self, entity_id: &str, delay: Duration);
}

/// Runs one approve/deny flow to its terminal state.
///
/// Failures are contained here: they are logged, reported to the user and
/// returned as [`ActionOutcome::Failed`]. Nothing is retried.
pub async fn dispatch<H: CardHost>(
    host: &H,
    settings: &Settings,
    target: &ActionTarget,
) -> ActionOutcome {
    if settings.confirm_actions {
        let prompt = settings.confirm_message(target.kind, &target.title);
        if !host.confirm(&prompt) {
            return ActionOutcome::Declined;
        }
    }

    let call = target.kind.service_call(target.request_id);
    match host.call_service(&call).await {
        Ok(()) => {
            host.notify(Notification::new(target.kind.success_message(&target.title)));
            host.schedule_refresh(&settings.entity_id, REFRESH_DELAY);
            ActionOutcome::Succeeded
        }
        Err(err) => {
            tracing::error!(
                "{} of request {} failed: {err}",
                target.kind.as_attr(),
                target.request_id
            );
            host.notify(Notification::new(target.kind.failure_message(&target.title)));
            ActionOutcome::Failed(err.to_string())
        }
    }
}
