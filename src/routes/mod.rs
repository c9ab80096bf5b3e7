use axum::{
    Router,
    response::IntoResponse,
    routing::{get, post},
};

use crate::template::{NotFoundTemplate, Template};

mod about;
mod faq;
mod health;
mod index;
mod products;
mod send_email;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub enquiry_command: weagle_enquiry::Command,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.render_with_status(
        axum::http::StatusCode::NOT_FOUND,
        NotFoundTemplate {
            page: template.context(),
        },
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/", get(index::page))
        .route("/about", get(about::page))
        .route("/products", get(products::page))
        .route("/api/send-email", post(send_email::action))
        .fallback(fallback)
        .nest_service("/static", crate::assets::AssetsService::new())
        .with_state(app_state)
}
