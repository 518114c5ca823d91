//! View rendering for the requests card.
//!
//! The card body is produced by [`render_card_markup`], a pure function of the
//! settings and the current entity snapshot. It is rebuilt from scratch on
//! every state push and committed as raw markup under the `ha-card` root.
//!
//! Notes
//! - Every upstream string (title, requester, overview, genres, URLs) is
//!   passed through `escape_html` exactly once, here. Numeric fields are
//!   formatted directly.
//! - Action buttons carry `data-action`, `data-request-id` and `data-title`;
//!   a single delegated `onclick` on the root reads them back. The listener is
//!   only attached when actions are shown.

use common::actions::ActionKind;
use common::model::entity::EntitySnapshot;
use common::model::request::RequestRecord;
use common::model::settings::Settings;
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

use super::helpers::{action_target_from_event, escape_html};
use super::messages::Msg;
use super::state::RequestsCard;
use super::styles::card_style;

const EMPTY_ICON: &str = "mdi:party-popper";
const MISSING_ICON: &str = "mdi:alert-circle-outline";
const NO_POSTER_ICON: &str = "mdi:image-off-outline";

/// Main view function for the requests card.
pub fn view(component: &RequestsCard, ctx: &Context<RequestsCard>) -> Html {
    let props = ctx.props();
    let markup = render_card_markup(&props.settings, props.entity.as_ref());

    let onclick = props.settings.show_actions.then(|| {
        ctx.link().batch_callback(|e: MouseEvent| {
            action_target_from_event(&e)
                .map(Msg::Action)
                .into_iter()
                .collect::<Vec<_>>()
        })
    });

    html! {
        <ha-card
            class="jellyseerr-card"
            aria-busy={(component.pending_actions > 0).to_string()}
            onclick={onclick}
        >
            <style>{ card_style(&props.settings) }</style>
            { Html::from_html_unchecked(AttrValue::from(markup)) }
        </ha-card>
    }
}

/// Builds the complete card body for one state push.
///
/// `entity` is `None` when the configured entity is missing from the host's
/// state table.
pub fn render_card_markup(settings: &Settings, entity: Option<&EntitySnapshot>) -> String {
    let mut html = String::from(r#"<div class="jellyseerr-card-body">"#);

    match entity {
        None => html.push_str(&build_entity_missing(&settings.entity_id)),
        Some(snapshot) if snapshot.is_empty() => {
            html.push_str(&build_header(settings, None));
            html.push_str(&build_empty_state());
        }
        Some(snapshot) => {
            let requests = snapshot.requests();
            html.push_str(&build_header(settings, Some(requests.len())));
            html.push_str(r#"<div class="jellyseerr-card-content"><div class="request-list">"#);
            for request in requests {
                html.push_str(&build_request_item(settings, request));
            }
            html.push_str("</div></div>");
        }
    }

    html.push_str("</div>");
    html
}

/// Title bar with an optional request count badge.
fn build_header(settings: &Settings, count: Option<usize>) -> String {
    if !settings.show_title {
        return String::new();
    }
    let badge = count
        .map(|count| format!(r#"<span class="request-count">{count}</span>"#))
        .unwrap_or_default();
    format!(
        r#"<div class="card-header"><span class="card-title">{}</span>{badge}</div>"#,
        escape_html(&settings.title)
    )
}

fn build_entity_missing(entity_id: &str) -> String {
    format!(
        r#"<div class="jellyseerr-card-content"><div class="entity-missing"><ha-icon icon="{MISSING_ICON}"></ha-icon><span>Entity not found: {}</span></div></div>"#,
        escape_html(entity_id)
    )
}

fn build_empty_state() -> String {
    format!(
        r#"<div class="jellyseerr-card-content"><div class="empty-state"><ha-icon icon="{EMPTY_ICON}"></ha-icon><p>No pending requests</p><span>All caught up!</span></div></div>"#
    )
}

/// One item view: poster, header, badges, genres, overview and actions.
fn build_request_item(settings: &Settings, request: &RequestRecord) -> String {
    let title = escape_html(&request.title);

    let mut details = String::new();
    details.push_str(&build_request_header(settings, request, &title));
    details.push_str(&build_badges(settings, request));
    if settings.show_genres {
        details.push_str(&build_genres(request));
    }
    if settings.show_overview {
        if let Some(overview) = request.display_overview(settings.max_overview_length) {
            details.push_str(&format!(
                r#"<div class="request-overview">{}</div>"#,
                escape_html(&overview)
            ));
        }
    }
    if settings.show_actions {
        details.push_str(&build_actions(settings, request.id, &title));
    }

    let poster = if settings.show_poster {
        build_poster(settings, request, &title)
    } else {
        String::new()
    };

    format!(
        r#"<div class="request-item" data-request-id="{id}">{poster}<div class="request-details">{details}</div></div>"#,
        id = request.id
    )
}

fn build_request_header(settings: &Settings, request: &RequestRecord, title: &str) -> String {
    let year = request
        .release_year()
        .filter(|_| settings.show_year)
        .map(|year| format!(r#"<span class="request-year">({year})</span>"#))
        .unwrap_or_default();
    let date = request
        .requested_on()
        .map(|date| {
            format!(
                r#"<span class="request-date"><ha-icon icon="mdi:calendar"></ha-icon>{}</span>"#,
                escape_html(&date)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="request-header"><div class="request-title">{title}{year}</div><div class="request-meta-line"><span class="requested-by"><ha-icon icon="mdi:account"></ha-icon>{}</span>{date}</div></div>"#,
        escape_html(&request.requested_by)
    )
}

fn build_badges(settings: &Settings, request: &RequestRecord) -> String {
    let mut badges = format!(
        r#"<span class="media-badge"><ha-icon icon="{}"></ha-icon>{}</span><span class="request-id">#{}</span>"#,
        request.media_type.icon(),
        request.media_type.label(),
        request.id
    );
    if settings.show_rating {
        if let Some(rating) = request.rating_label() {
            badges.push_str(&format!(
                r#"<span class="rating-badge"><ha-icon icon="mdi:star"></ha-icon>{rating}</span>"#
            ));
        }
    }
    if settings.show_runtime {
        if let Some(runtime) = request.runtime_label() {
            badges.push_str(&format!(
                r#"<span class="runtime-badge"><ha-icon icon="mdi:clock-outline"></ha-icon>{runtime}</span>"#
            ));
        }
    }
    format!(r#"<div class="request-badges">{badges}</div>"#)
}

fn build_genres(request: &RequestRecord) -> String {
    let genres = request.genre_names();
    if genres.is_empty() {
        return String::new();
    }
    let chips = genres
        .iter()
        .map(|genre| format!(r#"<span class="genre-chip">{}</span>"#, escape_html(genre)))
        .collect::<String>();
    format!(r#"<div class="request-genres">{chips}</div>"#)
}

/// Poster image with a "no image" fallback.
///
/// With a poster URL the fallback starts hidden and is revealed by the
/// image's `onerror`; without one only the fallback is rendered.
fn build_poster(settings: &Settings, request: &RequestRecord, title: &str) -> String {
    match request.poster() {
        Some(url) => format!(
            r#"<div class="request-poster"><img src="{}" alt="{title}" loading="lazy" onerror="this.style.display='none';this.nextElementSibling.hidden=false;">{}</div>"#,
            escape_html(url),
            build_poster_placeholder(settings, true)
        ),
        None => format!(
            r#"<div class="request-poster">{}</div>"#,
            build_poster_placeholder(settings, false)
        ),
    }
}

fn build_poster_placeholder(settings: &Settings, hidden: bool) -> String {
    let hidden = if hidden { " hidden" } else { "" };
    let content = if settings.placeholder_image.trim().is_empty() {
        format!(r#"<ha-icon icon="{NO_POSTER_ICON}"></ha-icon><span>No image</span>"#)
    } else {
        format!(
            r#"<img src="{}" alt="No image">"#,
            escape_html(settings.placeholder_image.trim())
        )
    };
    format!(r#"<div class="poster-placeholder"{hidden}>{content}</div>"#)
}

fn build_actions(settings: &Settings, request_id: i64, title: &str) -> String {
    let buttons = [ActionKind::Approve, ActionKind::Deny]
        .into_iter()
        .map(|kind| build_action_button(settings, kind, request_id, title))
        .collect::<String>();
    format!(r#"<div class="request-actions">{buttons}</div>"#)
}

/// `title` is already escaped.
fn build_action_button(settings: &Settings, kind: ActionKind, request_id: i64, title: &str) -> String {
    let icon = if settings.show_button_icons {
        format!(r#"<ha-icon icon="{}"></ha-icon>"#, kind.icon())
    } else {
        String::new()
    };
    format!(
        r#"<button class="action-button {action}" type="button" data-action="{action}" data-request-id="{request_id}" data-title="{title}">{icon}<span>{}</span></button>"#,
        escape_html(settings.action_label(kind)),
        action = kind.as_attr()
    )
}
