//! Update function for the requests card.
//!
//! Elm-style: receives the current `RequestsCard` state, the `Context`, and a
//! `Msg`, mutates the state and returns whether the view should re-render.
//! Each click spawns its own dispatch; flows never wait on each other and a
//! second click on the same request issues a second call.

use common::actions::ActionOutcome;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::dispatch::dispatch;
use super::messages::Msg;
use super::state::RequestsCard;

pub fn update(component: &mut RequestsCard, ctx: &Context<RequestsCard>, msg: Msg) -> bool {
    match msg {
        Msg::Action(target) => {
            let props = ctx.props();
            let host = props.host.clone();
            let settings = props.settings.clone();
            let link = ctx.link().clone();

            component.pending_actions += 1;
            tracing::info!(
                "{} requested for request {} ({})",
                target.kind.as_attr(),
                target.request_id,
                target.title
            );

            spawn_local(async move {
                let outcome = dispatch(&host, &settings, &target).await;
                link.send_message(Msg::Settled(target, outcome));
            });
            true
        }
        Msg::Settled(target, outcome) => {
            component.pending_actions = component.pending_actions.saturating_sub(1);
            match outcome {
                ActionOutcome::Declined => {
                    tracing::info!("{} of request {} declined", target.kind.as_attr(), target.request_id)
                }
                ActionOutcome::Succeeded => {
                    tracing::info!("{} of request {} succeeded", target.kind.as_attr(), target.request_id)
                }
                // Logged where the call failed.
                ActionOutcome::Failed(_) => {}
            }
            true
        }
    }
}
