use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::convert::Infallible;

use crate::config::SiteConfig;

/// Values every page layout needs
#[derive(Clone, Copy)]
pub struct PageContext<'a> {
    pub site: &'a SiteConfig,
    pub current_path: &'a str,
}

impl PageContext<'_> {
    pub fn is_current(&self, path: &str) -> bool {
        self.current_path == path
    }
}

pub struct Template {
    current_path: String,
    site: SiteConfig,
}

impl Template {
    pub fn context(&self) -> PageContext<'_> {
        PageContext {
            site: &self.site,
            current_path: &self.current_path,
        }
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        self.render_with_status(StatusCode::OK, template)
    }

    pub fn render_with_status<T: askama::Template>(
        &self,
        status: StatusCode,
        template: T,
    ) -> Response {
        match template.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(err) => {
                tracing::error!(
                    path = %self.current_path,
                    err = %err,
                    "failed to render template"
                );

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template. Error: {err}"),
                )
                    .into_response()
            }
        }
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Template {
            current_path: parts.uri.path().to_owned(),
            site: state.config.site.clone(),
        })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate<'a> {
    pub page: PageContext<'a>,
}
