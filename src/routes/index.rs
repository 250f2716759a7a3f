use axum::{extract::State, response::IntoResponse};

use crate::content::{self, Fact, STATS, SERVICES, Service, Stat, WHY_WORK_WITH_US};
use crate::routes::{AppState, contact::ContactSection};
use crate::template::{Layout, Template};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub layout: Layout<'a>,
    pub stats: &'static [Stat],
    pub services: &'static [Service],
    pub about: Vec<Fact>,
    pub why_work_with_us: &'static [&'static str],
    pub contact: ContactSection,
}

impl<'a> IndexTemplate<'a> {
    pub fn new(template: &'a Template, contact: ContactSection) -> Self {
        Self {
            layout: template.layout(),
            stats: STATS,
            services: SERVICES,
            about: content::about_facts(template.site()),
            why_work_with_us: WHY_WORK_WITH_US,
            contact,
        }
    }
}

pub async fn page(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    let form = app.forms.issue().await;

    template.render(IndexTemplate::new(&template, ContactSection::new(form)))
}
