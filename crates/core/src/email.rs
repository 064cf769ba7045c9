//! Email syntax check shared by the entities that carry an address.

use std::sync::LazyLock;

use regex::Regex;

/// Syntactic shape only: something before and after a single `@`, and a dot
/// in the domain part. Deliverability is out of scope.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex"));

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}
