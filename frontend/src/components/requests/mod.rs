//! Requests card: root module wiring the Yew `Component` implementation
//! with submodules for props, state, update logic, view rendering, and the
//! approve/deny dispatcher.
//!
//! Responsibilities
//! - Re-export the types the host bridge and the tests need.
//! - Provide the `Component` implementation that delegates to `update::update`
//!   and `view::view`.

use yew::prelude::*;

mod dispatch;
mod helpers;
mod messages;
mod props;
mod state;
mod styles;
mod update;
mod view;

pub use dispatch::{dispatch, CardHost, REFRESH_DELAY};
pub use helpers::escape_html;
pub use messages::Msg;
pub use props::RequestsCardProps;
pub use state::RequestsCard;
pub use view::render_card_markup;

impl Component for RequestsCard {
    type Message = Msg;
    type Properties = RequestsCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        RequestsCard::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
