use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{AppendHeaders, Html, IntoResponse, Json, Redirect},
};
use tera::Context;
use tracing::error;

use crate::orchestrator::FetchState;
use crate::state::AppState;
use crate::theme::{self, Theme};
use crate::view;

/// Resolves the theme for a request: cookie first, then the color-scheme
/// client hint, then light.
fn resolve_theme(headers: &HeaderMap) -> Theme {
    let cookie = headers.get(header::COOKIE).and_then(|v| v.to_str().ok());
    let hint = headers
        .get(theme::COLOR_SCHEME_HINT)
        .and_then(|v| v.to_str().ok());
    theme::resolve(cookie, hint)
}

/// Asks browsers to send the color-scheme client hint on later requests, so
/// first-visit theming can follow the system preference.
fn accept_ch() -> AppendHeaders<[(&'static str, &'static str); 1]> {
    AppendHeaders([("accept-ch", "Sec-CH-Prefers-Color-Scheme")])
}

fn render_template(
    tera: &tera::Tera,
    template: &str,
    context: &Context,
) -> Result<Html<String>, (StatusCode, &'static str)> {
    tera.render(template, context).map(Html).map_err(|e| {
        error!("Template render error for '{}': {}", template, e);
        (StatusCode::INTERNAL_SERVER_ERROR, "Render error")
    })
}

/// Picks the layout for the current fetch state and fills its context.
/// Exactly one of the three layouts is ever rendered.
fn layout_for(snapshot: FetchState, context: &mut Context) -> &'static str {
    match snapshot {
        FetchState::Loading => "loading.html",
        FetchState::Failed { message } => {
            context.insert("message", &message);
            "error.html"
        }
        FetchState::Loaded { identity } => {
            context.insert("ip", &view::ip_display(identity.ip.as_deref()));
            context.insert("version", &view::version_label(identity.version.as_deref()));
            context.insert("cards", &view::info_cards(&identity));
            "dashboard.html"
        }
    }
}

/// GET / - the dashboard, in one of its three layouts.
pub async fn index(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let theme = resolve_theme(&headers);
    let snapshot = state.fetch.snapshot().await;

    let mut context = Context::new();
    context.insert("theme", theme.as_str());
    let template = layout_for(snapshot, &mut context);

    (accept_ch(), render_template(&state.tera, template, &context))
}

/// POST /refresh - start a new fetch and bounce back to the dashboard.
pub async fn refresh(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    start_fetch(&state).await;
    Redirect::to("/")
}

/// POST /theme/toggle - flip the persisted preference and reload.
pub async fn toggle_theme(headers: HeaderMap) -> impl IntoResponse {
    let next = resolve_theme(&headers).toggled();
    (
        AppendHeaders([(header::SET_COOKIE, theme::set_cookie(next))]),
        Redirect::to("/"),
    )
}

/// GET /api/identity - JSON view of the current fetch state. The loading
/// page polls this to know when to reload.
pub async fn api_identity(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.fetch.snapshot().await)
}

/// Enters `Loading` and runs the network call in the background, tagged
/// with its generation so a superseded completion is discarded.
pub async fn start_fetch(state: &Arc<AppState>) {
    let generation = state.fetch.begin().await;
    let state = Arc::clone(state);
    tokio::spawn(async move {
        let result = state.client.fetch_identity().await;
        state.fetch.complete(generation, result).await;
    });
}
