use std::fmt::{Display, Formatter};

/// Length, in characters, of the tag the crawler prepends to the first field
/// of every graph line (e.g. `id_40075` refers to user `40075`).
pub const FIELD_TAG_LEN: usize = 3;

/// Identifier of a crawled user, as it appears in the pending-users list.
///
/// Always trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Derives a user id from the first field of a graph line by dropping the
    /// fixed-length tag. Returns `None` when nothing usable remains.
    ///
    /// The tag is measured in characters, not bytes, so a multi-byte tag is
    /// never split in the middle of a code point.
    /// ```
    /// use checkpoint_lib::user::UserId;
    ///
    /// assert_eq!(UserId::from_graph_field("id_40075").unwrap().to_string(), "40075");
    /// assert_eq!(UserId::from_graph_field("id_ 40075 ").unwrap().to_string(), "40075");
    /// assert!(UserId::from_graph_field("id_").is_none());
    /// assert!(UserId::from_graph_field("id").is_none());
    /// assert!(UserId::from_graph_field("id_   ").is_none());
    /// ```
    pub fn from_graph_field(field: &str) -> Option<UserId> {
        let rest = match field.char_indices().nth(FIELD_TAG_LEN) {
            Some((offset, _)) => &field[offset..],
            None => return None,
        };
        let trimmed = rest.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(UserId(trimmed.to_string()))
        }
    }

    /// Whether a raw pending-list line refers to this user. The line is
    /// trimmed before comparison, so padded entries still match.
    /// ```
    /// use checkpoint_lib::user::UserId;
    ///
    /// let user = UserId::from_graph_field("id_40075").unwrap();
    /// assert!(user.matches_line("40075"));
    /// assert!(user.matches_line("  40075\t"));
    /// assert!(!user.matches_line("400750"));
    /// assert!(!user.matches_line(""));
    /// ```
    pub fn matches_line(&self, line: &str) -> bool {
        line.trim() == self.0
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
