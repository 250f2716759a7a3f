use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::convert::Infallible;

use crate::config::SiteConfig;
use crate::content::{NAV_LINKS, NavLink};

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

/// Request header sent by the page script when it only wants a fragment back.
pub const PARTIAL_HEADER: &str = "ts-request";

/// Values shared by every full page: brand, SEO blocks and navigation.
pub struct Layout<'a> {
    pub site: &'a SiteConfig,
    pub structured_data: Vec<String>,
    pub year: i32,
    pub nav: &'static [NavLink],
}

pub struct Template {
    config: crate::config::Config,
    partial: bool,
}

impl Template {
    pub fn site(&self) -> &SiteConfig {
        &self.config.site
    }

    /// Whether the caller asked for a fragment instead of a whole page.
    pub fn is_partial(&self) -> bool {
        self.partial
    }

    pub fn layout(&self) -> Layout<'_> {
        Layout {
            site: &self.config.site,
            structured_data: crate::seo::structured_data(&self.config.site),
            year: time::OffsetDateTime::now_utc().year(),
            nav: NAV_LINKS,
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
                tracing::error!(err = %err, "failed to render template");

                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
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
        let partial = parts.headers.contains_key(PARTIAL_HEADER);

        Ok(Template {
            config: state.config.clone(),
            partial,
        })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate<'a> {
    pub layout: Layout<'a>,
}
