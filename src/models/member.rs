use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shown on cards whose record carries no avatar of its own.
pub const DEFAULT_AVATAR_URL: &str = "https://i.pravatar.cc/192?u=rosterly";

/// Blocking notice shown when the creation form is submitted incomplete.
pub const MISSING_FIELDS_NOTICE: &str = "Please fill in all fields";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Editor,
    #[default]
    Viewer,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Editor, Role::Viewer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Editor => "Editor",
            Role::Viewer => "Viewer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "editor" => Ok(Role::Editor),
            "viewer" => Ok(Role::Viewer),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Active,
    Inactive,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Inactive => "Inactive",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Status::Active)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(Status::Active),
            "inactive" => Ok(Status::Inactive),
            other => Err(format!("unknown status: {}", other)),
        }
    }
}

/// One directory record. Identity is the server-assigned `id`; every
/// other field is freely mutable through a full-record update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Member {
    pub fn avatar_or_default(&self) -> &str {
        self.avatar_url.as_deref().unwrap_or(DEFAULT_AVATAR_URL)
    }

    /// Raw avatar value for round-tripping through hidden form fields.
    pub fn avatar_field(&self) -> &str {
        self.avatar_url.as_deref().unwrap_or("")
    }
}

/// Raw creation-form input, exactly as posted. Exists only between the
/// modal submit and validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewMemberDraft {
    pub name: String,
    pub email: String,
    pub role: String,
}

/// A draft that passed presence validation, ready for the create call.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMember {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl NewMemberDraft {
    /// Presence checks only: every field must be non-blank and the role
    /// must be one of the known variants (the select's placeholder posts
    /// an empty string). Anything less blocks the submit with a notice
    /// and performs no network call.
    pub fn validate(&self) -> Result<NewMember, &'static str> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() || email.is_empty() {
            return Err(MISSING_FIELDS_NOTICE);
        }
        let role = self
            .role
            .parse::<Role>()
            .map_err(|_| MISSING_FIELDS_NOTICE)?;
        Ok(NewMember {
            name: name.to_string(),
            email: email.to_string(),
            role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str, role: &str) -> NewMemberDraft {
        NewMemberDraft {
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    #[test]
    fn complete_draft_validates() {
        let valid = draft("Jordan Smith", "j.smith@company.com", "Editor")
            .validate()
            .unwrap();
        assert_eq!(valid.name, "Jordan Smith");
        assert_eq!(valid.email, "j.smith@company.com");
        assert_eq!(valid.role, Role::Editor);
    }

    #[test]
    fn blank_fields_block_submission() {
        assert_eq!(
            draft("", "j@x.com", "Admin").validate().unwrap_err(),
            MISSING_FIELDS_NOTICE
        );
        assert_eq!(
            draft("Jordan", "", "Admin").validate().unwrap_err(),
            MISSING_FIELDS_NOTICE
        );
        assert_eq!(
            draft("Jordan", "j@x.com", "").validate().unwrap_err(),
            MISSING_FIELDS_NOTICE
        );
        assert_eq!(
            draft("   ", "j@x.com", "Admin").validate().unwrap_err(),
            MISSING_FIELDS_NOTICE
        );
    }

    #[test]
    fn unknown_role_blocks_submission() {
        assert!(draft("Jordan", "j@x.com", "Superuser").validate().is_err());
    }

    #[test]
    fn role_and_status_parse_case_insensitively() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("Editor".parse::<Role>().unwrap(), Role::Editor);
        assert_eq!("ACTIVE".parse::<Status>().unwrap(), Status::Active);
        assert!("owner".parse::<Role>().is_err());
    }
}
