use axum::http::header;
use axum::response::IntoResponse;

/// Browser glue for header theming and the mobile menu.
pub(crate) const APP_JS: &str = include_str!("app.js");

pub(crate) async fn app_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript")],
        APP_JS,
    )
}
