use rosterly::models::{Member, Role, Status};
use rosterly::search::filter_members;

fn mk_member(id: &str, name: &str, email: &str, role: Role, status: Status) -> Member {
    Member {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        status,
        avatar_url: None,
    }
}

fn directory() -> Vec<Member> {
    vec![
        mk_member(
            "1",
            "Alex Rivera",
            "alex.rivera@example.com",
            Role::Admin,
            Status::Active,
        ),
        mk_member(
            "2",
            "Sarah Chen",
            "s.chen@design.co",
            Role::Editor,
            Status::Active,
        ),
        mk_member(
            "3",
            "Marcus Wright",
            "m.wright@tech.io",
            Role::Viewer,
            Status::Inactive,
        ),
        mk_member(
            "4",
            "Elena Rodriguez",
            "elena.rod@startup.com",
            Role::Editor,
            Status::Active,
        ),
    ]
}

#[test]
fn empty_query_returns_everyone() {
    let members = directory();
    let filtered = filter_members(&members, "");
    assert_eq!(filtered, members);
}

#[test]
fn name_substring_matches_case_insensitively() {
    let members = directory();
    let filtered = filter_members(&members, "chen");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "2");

    let shouting = filter_members(&members, "CHEN");
    assert_eq!(shouting, filtered);
}

#[test]
fn email_substring_matches() {
    let members = directory();
    let filtered = filter_members(&members, "tech.io");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "Marcus Wright");
}

#[test]
fn role_substring_matches() {
    let members = directory();
    let filtered = filter_members(&members, "editor");
    let names: Vec<&str> = filtered.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Sarah Chen", "Elena Rodriguez"]);
}

#[test]
fn match_on_several_fields_yields_one_entry() {
    // "rivera" appears in both the name and the email of the same record
    let members = directory();
    let filtered = filter_members(&members, "rivera");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "1");
}

#[test]
fn unmatched_query_returns_nothing() {
    let members = directory();
    assert!(filter_members(&members, "zzz-nobody").is_empty());
}

#[test]
fn filter_does_not_reorder() {
    let members = directory();
    let filtered = filter_members(&members, "a");
    let ids: Vec<&str> = filtered.iter().map(|m| m.id.as_str()).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    // every directory entry contains an "a" somewhere, in original order
    assert_eq!(ids, vec!["1", "2", "3", "4"]);
    assert_eq!(sorted, ids);
}
