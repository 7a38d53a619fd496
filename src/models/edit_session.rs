use super::member::{Member, Role, Status};

/// The three card-editable fields. `id` and `status` are read-only
/// passthrough on a card and live outside the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFields {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl CardFields {
    pub fn of(member: &Member) -> Self {
        Self {
            name: member.name.clone(),
            email: member.email.clone(),
            role: member.role,
        }
    }
}

/// One card's in-progress edit: the last-saved snapshot plus the working
/// copy. The baseline only moves when the parent re-renders with freshly
/// fetched values; saving does not advance it locally.
#[derive(Debug, Clone)]
pub struct EditSession {
    baseline: CardFields,
    working: CardFields,
}

impl EditSession {
    pub fn new(baseline: CardFields, working: CardFields) -> Self {
        Self { baseline, working }
    }

    /// A session as it starts: working copy identical to the snapshot.
    pub fn open(member: &Member) -> Self {
        let fields = CardFields::of(member);
        Self {
            baseline: fields.clone(),
            working: fields,
        }
    }

    pub fn baseline(&self) -> &CardFields {
        &self.baseline
    }

    pub fn working(&self) -> &CardFields {
        &self.working
    }

    pub fn edit(&mut self, working: CardFields) {
        self.working = working;
    }

    pub fn is_dirty(&self) -> bool {
        self.working != self.baseline
    }

    /// Cancel reverts the working copy to the snapshot exactly.
    pub fn cancel(&mut self) -> &CardFields {
        self.working = self.baseline.clone();
        &self.working
    }

    /// The full record a Save would persist, or `None` for a clean
    /// session. A clean save must not reach the network.
    pub fn saved_record(
        &self,
        id: &str,
        status: Status,
        avatar_url: Option<String>,
    ) -> Option<Member> {
        if !self.is_dirty() {
            return None;
        }
        Some(Member {
            id: id.to_string(),
            name: self.working.name.clone(),
            email: self.working.email.clone(),
            role: self.working.role,
            status,
            avatar_url,
        })
    }
}
