use crate::model::User;

/// Users whose name contains `term`, compared case-insensitively, in input order.
///
/// An empty term matches every user.
pub fn filter_by_name(users: &[User], term: &str) -> Vec<User> {
    let q = term.to_lowercase();
    if q.is_empty() {
        return users.to_vec();
    }
    users
        .iter()
        .filter(|u| u.name.to_lowercase().contains(&q))
        .cloned()
        .collect()
}
