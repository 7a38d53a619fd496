use axum::extract::{Form, Path, State};
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::api;
use crate::models::{AppState, CardFields, EditSession, NewMemberDraft};

use super::helpers::dashboard_redirect;

#[derive(Deserialize)]
pub struct CreateMemberForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub q: String,
}

/// Modal submit. An incomplete draft reopens the modal with a blocking
/// notice and the typed fields intact, with no network call. A valid draft
/// is created with status defaulted to Active, then the redirect refetch
/// shows the new card and the cleared form.
pub async fn members_create(
    State(state): State<AppState>,
    Form(form): Form<CreateMemberForm>,
) -> impl IntoResponse {
    let draft = NewMemberDraft {
        name: form.name,
        email: form.email,
        role: form.role,
    };
    let new_member = match draft.validate() {
        Ok(valid) => valid,
        Err(notice) => {
            return dashboard_redirect(&[
                ("q", &form.q),
                ("add", "1"),
                ("error", notice),
                ("draft_name", &draft.name),
                ("draft_email", &draft.email),
                ("draft_role", &draft.role),
            ]);
        }
    };
    match api::create_member(&state.api, &new_member).await {
        Ok(created) => dashboard_redirect(&[
            ("q", &form.q),
            ("notice", &format!("Added {}", created.name)),
        ]),
        Err(e) => {
            tracing::error!(error = %e, "create member failed");
            dashboard_redirect(&[
                ("q", &form.q),
                ("error", &format!("Could not add member: {}", e)),
            ])
        }
    }
}

#[derive(Deserialize)]
pub struct SaveMemberForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    // Snapshot the card was rendered from, round-tripped as hidden
    // fields. Save is a no-op unless the working copy differs.
    #[serde(default)]
    pub baseline_name: String,
    #[serde(default)]
    pub baseline_email: String,
    #[serde(default)]
    pub baseline_role: String,
    // Read-only passthrough
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub q: String,
}

pub async fn member_save(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
    Form(form): Form<SaveMemberForm>,
) -> impl IntoResponse {
    let (baseline_role, working_role) =
        match (form.baseline_role.parse(), form.role.parse()) {
            (Ok(b), Ok(w)) => (b, w),
            _ => {
                return dashboard_redirect(&[("q", &form.q), ("error", "Invalid role")]);
            }
        };
    let session = EditSession::new(
        CardFields {
            name: form.baseline_name,
            email: form.baseline_email,
            role: baseline_role,
        },
        CardFields {
            name: form.name,
            email: form.email,
            role: working_role,
        },
    );
    let status = form.status.parse().unwrap_or_default();
    let avatar_url = Some(form.avatar_url.trim().to_string()).filter(|s| !s.is_empty());

    // Clean session: nothing to persist, nothing to send.
    let record = match session.saved_record(&member_id, status, avatar_url) {
        Some(record) => record,
        None => return dashboard_redirect(&[("q", &form.q)]),
    };

    match api::update_member(&state.api, &member_id, &record).await {
        Ok(updated) => dashboard_redirect(&[
            ("q", &form.q),
            ("notice", &format!("Saved {}", updated.name)),
        ]),
        Err(e) => {
            tracing::error!(%member_id, error = %e, "update member failed");
            dashboard_redirect(&[
                ("q", &form.q),
                ("error", &format!("Could not save changes: {}", e)),
            ])
        }
    }
}

#[derive(Deserialize)]
pub struct DeleteMemberForm {
    #[serde(default)]
    pub q: String,
}

/// Delete has no confirmation step. The redirect refetches either way;
/// a duplicate click racing an earlier delete just surfaces the
/// backend's not-found as a banner.
pub async fn member_delete(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
    Form(form): Form<DeleteMemberForm>,
) -> impl IntoResponse {
    match api::remove_member(&state.api, &member_id).await {
        Ok(()) => dashboard_redirect(&[("q", &form.q), ("notice", "Member removed")]),
        Err(e) => {
            tracing::error!(%member_id, error = %e, "delete member failed");
            dashboard_redirect(&[
                ("q", &form.q),
                ("error", &format!("Could not delete member: {}", e)),
            ])
        }
    }
}
