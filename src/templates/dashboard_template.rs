use askama::Template;

use crate::models::{Member, Role};

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate<'a> {
    pub api_hostname: String,
    pub base_url: String,
    pub members: &'a [Member],
    pub search_query: String,
    pub modal_open: bool,
    pub is_loading: bool,
    pub notice: Option<String>,
    pub errors: Vec<String>,
    // Creation-form draft preserved across a failed validation round trip
    pub draft_name: String,
    pub draft_email: String,
    pub draft_role: String,
    pub roles: &'static [Role],
}

crate::impl_base_template!(DashboardTemplate<'_>);
