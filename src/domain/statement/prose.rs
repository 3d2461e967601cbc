//! List grammar for user-facing statement prose.

/// Joins items as English prose.
///
/// 0 → `none`, 1 → `A`, 2 → `A and B`, 3+ → `A, B, and C`.
pub fn join_list<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => "none".to_string(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{}, and {}", head.join(", "), last.as_ref())
        }
    }
}
