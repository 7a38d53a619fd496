use crate::models::Member;

/// Case-insensitive substring filter over name, email, and role (OR
/// semantics). The empty query returns everything; each record appears
/// at most once regardless of how many fields match.
pub fn filter_members(members: &[Member], query: &str) -> Vec<Member> {
    let q = query.to_lowercase();
    if q.is_empty() {
        return members.to_vec();
    }
    members
        .iter()
        .filter(|m| {
            m.name.to_lowercase().contains(&q)
                || m.email.to_lowercase().contains(&q)
                || m.role.as_str().to_lowercase().contains(&q)
        })
        .cloned()
        .collect()
}
