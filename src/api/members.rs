use serde_json::{json, Value};

use super::client::ApiClient;
use super::error::ApiError;
use crate::models::{Member, NewMember, Role, Status};

/// Load the full member directory. `GET` against the resource root.
pub async fn list_members(api: &ApiClient) -> Result<Vec<Member>, ApiError> {
    let resp = api.request("GET", "", None).await?;
    members_from_envelope(&resp.body)
}

/// Create a member. The backend assigns the id; status is defaulted to
/// Active on this side of the wire.
pub async fn create_member(api: &ApiClient, new: &NewMember) -> Result<Member, ApiError> {
    let resp = api.request("POST", "", Some(create_payload(new))).await?;
    member_from_envelope(&resp.body)
}

/// Full-record update: `PUT /{id}` with every field, not a patch.
pub async fn update_member(api: &ApiClient, id: &str, member: &Member) -> Result<Member, ApiError> {
    let payload = serde_json::to_value(member).map_err(|e| ApiError::Decode(e.to_string()))?;
    let resp = api
        .request("PUT", &format!("/{}", id), Some(payload))
        .await?;
    // A 2xx is the success signal; echo the updated record from `data`
    // when the backend returns one, otherwise the record we sent.
    Ok(member_from_envelope(&resp.body).unwrap_or_else(|_| member.clone()))
}

pub async fn remove_member(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.request("DELETE", &format!("/{}", id), None).await?;
    Ok(())
}

pub fn create_payload(new: &NewMember) -> Value {
    json!({
        "name": new.name,
        "email": new.email,
        "role": new.role.as_str(),
        "status": Status::Active.as_str(),
    })
}

/// Extract the member array from a list response envelope.
pub fn members_from_envelope(body: &Value) -> Result<Vec<Member>, ApiError> {
    let data = body.get("data").ok_or(ApiError::MalformedResponse("data"))?;
    let arr = data.as_array().ok_or(ApiError::MalformedResponse("data"))?;
    Ok(arr.iter().filter_map(parse_member).collect())
}

/// Extract a single record from a create/update response envelope.
pub fn member_from_envelope(body: &Value) -> Result<Member, ApiError> {
    let data = body.get("data").ok_or(ApiError::MalformedResponse("data"))?;
    parse_member(data).ok_or(ApiError::MalformedResponse("data"))
}

/// Parse one record. Ids arrive as strings or numbers depending on the
/// backend; the avatar key is seen in both camelCase and snake_case.
/// Records without an id are dropped.
pub fn parse_member(item: &Value) -> Option<Member> {
    let obj = item.as_object()?;
    let id = obj
        .get("id")
        .and_then(|v| v.as_i64())
        .map(|n| n.to_string())
        .or_else(|| {
            obj.get("id")
                .and_then(|v| v.as_str())
                .map(|s| s.to_string())
        })?;
    let name = obj
        .get("name")
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string();
    let email = obj
        .get("email")
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string();
    let role = obj
        .get("role")
        .and_then(|v| v.as_str())
        .and_then(|s| s.parse::<Role>().ok())
        .unwrap_or_default();
    let status = obj
        .get("status")
        .and_then(|v| v.as_str())
        .and_then(|s| s.parse::<Status>().ok())
        .unwrap_or_default();
    let avatar_url = obj
        .get("avatarUrl")
        .or_else(|| obj.get("avatar_url"))
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .filter(|s| !s.is_empty());

    Some(Member {
        id,
        name,
        email,
        role,
        status,
        avatar_url,
    })
}
