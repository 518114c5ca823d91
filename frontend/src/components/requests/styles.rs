//! Card stylesheet.
//!
//! The card renders into the light DOM of its custom element, so every rule is
//! scoped under `.jellyseerr-card`. Colors come from the host theme variables.

use common::model::settings::Settings;

/// Lines an overview is clamped to on screen.
pub const OVERVIEW_LINE_CLAMP: u32 = 6;

pub const POSTER_WIDTH_PX: u32 = 92;
pub const POSTER_HEIGHT_PX: u32 = 138;

const BASE_CSS: &str = "\
.jellyseerr-card{display:block;overflow:hidden;}\
.jellyseerr-card .card-header{display:flex;align-items:center;justify-content:space-between;padding:16px 16px 0;font-size:1.4em;font-weight:400;color:var(--ha-card-header-color,var(--primary-text-color));}\
.jellyseerr-card .request-count{min-width:24px;padding:2px 8px;border-radius:12px;background:var(--primary-color);color:var(--text-primary-color,#fff);font-size:0.6em;text-align:center;}\
.jellyseerr-card .jellyseerr-card-content{padding:16px;}\
.jellyseerr-card .entity-missing,.jellyseerr-card .empty-state{display:flex;flex-direction:column;align-items:center;justify-content:center;gap:8px;padding:24px 16px;text-align:center;color:var(--secondary-text-color);}\
.jellyseerr-card .entity-missing{color:var(--error-color,#db4437);}\
.jellyseerr-card .empty-state ha-icon{--mdc-icon-size:48px;color:var(--primary-color);}\
.jellyseerr-card .empty-state p{margin:0;font-size:1.1em;color:var(--primary-text-color);}\
.jellyseerr-card .request-list{display:flex;flex-direction:column;}\
.jellyseerr-card .request-item{display:flex;gap:12px;padding:12px;border-radius:8px;background:var(--secondary-background-color);}\
.jellyseerr-card .request-poster{flex:0 0 auto;}\
.jellyseerr-card .request-poster img{border-radius:4px;object-fit:cover;display:block;}\
.jellyseerr-card .poster-placeholder{flex-direction:column;align-items:center;justify-content:center;gap:4px;border-radius:4px;background:var(--divider-color,#e0e0e0);color:var(--secondary-text-color);font-size:0.75em;}\
.jellyseerr-card .request-details{flex:1 1 auto;min-width:0;display:flex;flex-direction:column;gap:6px;}\
.jellyseerr-card .request-title{font-size:1.1em;font-weight:500;color:var(--primary-text-color);overflow-wrap:anywhere;}\
.jellyseerr-card .request-year{margin-left:4px;font-weight:400;color:var(--secondary-text-color);}\
.jellyseerr-card .request-meta-line{display:flex;flex-wrap:wrap;gap:12px;font-size:0.85em;color:var(--secondary-text-color);}\
.jellyseerr-card .request-meta-line ha-icon,.jellyseerr-card .request-badges ha-icon{--mdc-icon-size:16px;margin-right:2px;}\
.jellyseerr-card .request-badges{display:flex;flex-wrap:wrap;gap:6px;font-size:0.8em;}\
.jellyseerr-card .request-badges span{display:inline-flex;align-items:center;padding:2px 8px;border-radius:10px;background:var(--card-background-color);color:var(--secondary-text-color);}\
.jellyseerr-card .request-genres{display:flex;flex-wrap:wrap;gap:4px;}\
.jellyseerr-card .genre-chip{padding:1px 6px;border:1px solid var(--divider-color,#e0e0e0);border-radius:8px;font-size:0.75em;color:var(--secondary-text-color);}\
.jellyseerr-card .request-actions{display:flex;gap:8px;margin-top:auto;}\
.jellyseerr-card .action-button{display:inline-flex;align-items:center;gap:4px;padding:6px 14px;border:none;border-radius:4px;cursor:pointer;font-size:0.9em;color:#fff;}\
.jellyseerr-card .action-button ha-icon{--mdc-icon-size:18px;}\
.jellyseerr-card .action-button.approve{background:var(--success-color,#43a047);}\
.jellyseerr-card .action-button.deny{background:var(--error-color,#db4437);}\
.jellyseerr-card .action-button:hover{filter:brightness(1.1);}";

/// Full stylesheet for `settings`.
pub fn card_style(settings: &Settings) -> String {
    format!(
        "{BASE_CSS}\
.jellyseerr-card .request-list{{gap:{spacing}px;}}\
.jellyseerr-card .request-poster img,.jellyseerr-card .poster-placeholder{{width:{POSTER_WIDTH_PX}px;height:{POSTER_HEIGHT_PX}px;}}\
.jellyseerr-card .poster-placeholder{{display:flex;}}\
.jellyseerr-card .poster-placeholder[hidden]{{display:none;}}\
.jellyseerr-card .request-overview{{display:-webkit-box;-webkit-box-orient:vertical;-webkit-line-clamp:{OVERVIEW_LINE_CLAMP};overflow:hidden;font-size:0.9em;line-height:1.4;color:var(--primary-text-color);}}",
        spacing = settings.card_spacing,
    )
}
