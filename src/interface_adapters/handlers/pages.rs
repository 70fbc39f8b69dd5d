use crate::domain::Page;
use crate::interface_adapters::state::AppState;
use crate::interface_adapters::templates::render_page;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

// Render a static page. Render failures are logged and answered with 500.
pub fn page_response(page: Page, state: &AppState) -> Response {
    match render_page(page, &state.site_name) {
        Ok(html) => Html(html).into_response(),
        Err(error) => {
            tracing::error!(page = page.title(), %error, "failed to render page");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to render page").into_response()
        }
    }
}
