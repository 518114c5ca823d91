use common::model::entity::EntitySnapshot;
use common::model::settings::{normalize, CardConfig, Settings};
use jellyseerr_card::render_card_markup;
use serde_json::{json, Value};

fn settings(config: Value) -> Settings {
    normalize(&CardConfig::from_json(config).unwrap()).unwrap()
}

fn default_settings() -> Settings {
    settings(json!({"entity": "sensor.jellyseerr_pending_requests"}))
}

fn snapshot(state: &str, requests: Value) -> EntitySnapshot {
    EntitySnapshot::from_json(json!({
        "entity_id": "sensor.jellyseerr_pending_requests",
        "state": state,
        "attributes": {"requests": requests},
    }))
}

fn item_ids(markup: &str) -> Vec<String> {
    const ITEM: &str = r#"<div class="request-item" data-request-id=""#;
    markup
        .match_indices(ITEM)
        .map(|(at, _)| {
            let rest = &markup[at + ITEM.len()..];
            rest[..rest.find('"').unwrap()].to_string()
        })
        .collect()
}

#[test]
fn dune_scenario_renders_one_placeholder_item() {
    let entity = snapshot(
        "1",
        json!([{
            "id": 42,
            "type": "movie",
            "title": "Dune",
            "requested_by": "alice",
            "overview": "A desert planet...",
            "poster_url": null,
        }]),
    );

    let markup = render_card_markup(&default_settings(), Some(&entity));

    assert_eq!(item_ids(&markup), vec!["42"]);
    assert!(markup.contains(r#"<div class="request-title">Dune</div>"#));
    assert!(markup.contains(r#"<div class="poster-placeholder">"#));
    assert!(markup.contains("No image"));
    assert!(!markup.contains("<img"));
    assert!(markup.contains("Movie</span>"));
    assert!(markup.contains("#42</span>"));
    assert!(markup.contains("alice"));
    assert!(markup.contains(r#"<div class="request-overview">A desert planet...</div>"#));
    assert!(markup.contains("<span>Accept</span>"));
    assert!(markup.contains("<span>Reject</span>"));
    assert!(markup.contains(r#"data-action="approve" data-request-id="42" data-title="Dune""#));
    assert!(markup.contains(r#"data-action="deny" data-request-id="42" data-title="Dune""#));
}

#[test]
fn upstream_text_is_escaped_exactly_once() {
    let entity = snapshot(
        "1",
        json!([{
            "id": 7,
            "type": "tv",
            "title": "<script>alert(\"x\")</script> & 'q'",
            "requested_by": "<b>bob</b>",
            "overview": "1 < 2 && 3 > 2",
            "genres": ["Sci-Fi & Fantasy"],
        }]),
    );

    let markup = render_card_markup(&default_settings(), Some(&entity));

    let title = "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; &#39;q&#39;";
    assert!(markup.contains(&format!(r#"<div class="request-title">{title}</div>"#)));
    assert!(markup.contains(&format!(r#"data-title="{title}""#)));
    assert!(markup.contains("&lt;b&gt;bob&lt;/b&gt;"));
    assert!(markup.contains("1 &lt; 2 &amp;&amp; 3 &gt; 2"));
    assert!(markup.contains("Sci-Fi &amp; Fantasy"));

    assert!(!markup.contains("<script>"));
    assert!(!markup.contains("<b>bob"));
    assert!(!markup.contains("&amp;lt;"));
    assert!(!markup.contains("&amp;amp;"));
    assert!(markup.contains("TV Show</span>"));
}

#[test]
fn empty_list_renders_empty_state_regardless_of_count() {
    for state in ["0", "5"] {
        let markup = render_card_markup(&default_settings(), Some(&snapshot(state, json!([]))));
        assert!(markup.contains(r#"class="empty-state""#), "state {state}");
        assert!(markup.contains("mdi:party-popper"));
        assert!(item_ids(&markup).is_empty());
    }
}

#[test]
fn zero_count_renders_empty_state_even_with_records() {
    let entity = snapshot("0", json!([{"id": 1, "title": "Stale"}]));
    let markup = render_card_markup(&default_settings(), Some(&entity));
    assert!(markup.contains(r#"class="empty-state""#));
    assert!(!markup.contains("Stale"));
}

#[test]
fn missing_attributes_render_empty_state() {
    let entity = EntitySnapshot::from_json(json!({"state": "unknown"}));
    let markup = render_card_markup(&default_settings(), Some(&entity));
    assert!(markup.contains(r#"class="empty-state""#));
}

#[test]
fn missing_entity_renders_placeholder_only() {
    let markup = render_card_markup(&settings(json!({"entity": "sensor.<gone>"})), None);
    assert!(markup.contains("Entity not found: sensor.&lt;gone&gt;"));
    assert!(!markup.contains("empty-state"));
    assert!(!markup.contains("card-header"));
    assert!(item_ids(&markup).is_empty());
}

#[test]
fn items_follow_input_order() {
    let entity = snapshot(
        "3",
        json!([
            {"id": 30, "title": "C"},
            {"id": 10, "title": "A"},
            {"id": 20, "title": "B"},
        ]),
    );
    let markup = render_card_markup(&default_settings(), Some(&entity));
    assert_eq!(item_ids(&markup), vec!["30", "10", "20"]);
    assert!(markup.contains(r#"<span class="request-count">3</span>"#));
}

#[test]
fn item_count_follows_list_not_state() {
    let entity = snapshot("1", json!([{"id": 1}, {"id": 2}]));
    let markup = render_card_markup(&default_settings(), Some(&entity));
    assert_eq!(item_ids(&markup).len(), 2);
}

#[test]
fn poster_url_renders_image_with_hidden_fallback() {
    let entity = snapshot(
        "1",
        json!([{"id": 1, "title": "Dune", "poster_url": "https://image.tmdb.org/t/p/w500/a.jpg?x=1&y=2"}]),
    );
    let markup = render_card_markup(&default_settings(), Some(&entity));
    assert!(markup.contains(r#"<img src="https://image.tmdb.org/t/p/w500/a.jpg?x=1&amp;y=2" alt="Dune""#));
    assert!(markup.contains("onerror="));
    assert!(markup.contains(r#"<div class="poster-placeholder" hidden>"#));
}

#[test]
fn configured_placeholder_image_replaces_icon() {
    let entity = snapshot("1", json!([{"id": 1, "title": "Dune"}]));
    let settings = settings(json!({
        "entity": "sensor.x",
        "placeholder_image": "/local/no-poster.png",
    }));
    let markup = render_card_markup(&settings, Some(&entity));
    assert!(markup.contains(r#"<img src="/local/no-poster.png" alt="No image">"#));
    assert!(!markup.contains("mdi:image-off-outline"));
}

#[test]
fn toggles_remove_their_blocks() {
    let entity = snapshot(
        "1",
        json!([{
            "id": 1,
            "title": "Dune",
            "overview": "Spice",
            "release_date": "2021-10-22",
            "rating": 7.8,
            "runtime": 155,
            "genres": ["Drama"],
        }]),
    );

    let all_on = render_card_markup(&default_settings(), Some(&entity));
    assert!(all_on.contains(r#"<span class="request-year">(2021)</span>"#));
    assert!(all_on.contains("7.8</span>"));
    assert!(all_on.contains("155 min</span>"));
    assert!(all_on.contains(r#"<span class="genre-chip">Drama</span>"#));
    assert!(all_on.contains("mdi:check"));

    let all_off = render_card_markup(
        &settings(json!({
            "entity": "sensor.x",
            "show_title": false,
            "show_overview": false,
            "show_poster": false,
            "show_year": false,
            "show_actions": false,
            "show_rating": false,
            "show_runtime": false,
            "show_genres": false,
        })),
        Some(&entity),
    );
    assert_eq!(item_ids(&all_off), vec!["1"]);
    assert!(!all_off.contains("card-header"));
    assert!(!all_off.contains("request-overview"));
    assert!(!all_off.contains("request-poster"));
    assert!(!all_off.contains("request-year"));
    assert!(!all_off.contains("<button"));
    assert!(!all_off.contains("rating-badge"));
    assert!(!all_off.contains("runtime-badge"));
    assert!(!all_off.contains("genre-chip"));
}

#[test]
fn button_icons_can_be_hidden() {
    let entity = snapshot("1", json!([{"id": 1, "title": "Dune"}]));
    let markup = render_card_markup(
        &settings(json!({
            "entity": "sensor.x",
            "show_button_icons": false,
            "approve_text": "Yes",
            "deny_text": "No",
        })),
        Some(&entity),
    );
    assert!(!markup.contains("mdi:check"));
    assert!(!markup.contains("mdi:close"));
    assert!(markup.contains("<span>Yes</span>"));
    assert!(markup.contains("<span>No</span>"));
}

#[test]
fn long_overviews_are_cut_to_the_configured_length() {
    let entity = snapshot("1", json!([{"id": 1, "overview": "abcdefghij klmnop"}]));
    let markup = render_card_markup(
        &settings(json!({"entity": "sensor.x", "max_overview_length": 10})),
        Some(&entity),
    );
    assert!(markup.contains(r#"<div class="request-overview">abcdefghij…</div>"#));
}

#[test]
fn request_date_is_shown_when_present() {
    let entity = snapshot(
        "2",
        json!([
            {"id": 1, "created_at": "2024-03-05T12:00:00Z"},
            {"id": 2},
        ]),
    );
    let markup = render_card_markup(&default_settings(), Some(&entity));
    assert_eq!(markup.matches("request-date").count(), 1);
    assert!(markup.contains("3/5/2024"));
}

#[test]
fn rendering_is_repeatable() {
    let entity = snapshot("1", json!([{"id": 1, "title": "Dune"}]));
    let settings = default_settings();
    assert_eq!(
        render_card_markup(&settings, Some(&entity)),
        render_card_markup(&settings, Some(&entity))
    );
}

#[test]
fn one_malformed_record_does_not_hide_the_others() {
    let entity = snapshot(
        "3",
        json!([
            {"id": 1, "type": "movie", "title": "Dune", "requested_by": "alice"},
            {"id": 2, "type": "tv", "title": null, "requested_by": null, "runtime": 155.0, "rating": "7.8"},
            {"id": 3, "type": "movie", "title": "Arrival", "requested_by": "carol", "overview": null},
        ]),
    );

    let markup = render_card_markup(&default_settings(), Some(&entity));

    assert_eq!(item_ids(&markup), vec!["1", "2", "3"]);
    assert!(!markup.contains("empty-state"));
    assert!(markup.contains("155 min</span>"));
    assert!(markup.contains("7.8</span>"));
    assert!(markup.contains(r#"data-action="approve" data-request-id="2" data-title="""#));
    assert!(markup.contains(r#"<div class="request-title">Arrival</div>"#));
}
