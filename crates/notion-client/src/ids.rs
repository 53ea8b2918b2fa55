//! Page, block and database ID normalization.

const ID_LEN: usize = 32;

/// Normalizes a user-supplied Notion ID.
///
/// Hyphens are removed, so dashed UUIDs and compact IDs are equivalent.
/// When the input is a page URL, the trailing 32 hex digits of its last
/// path segment are used. Anything else is passed through with hyphens
/// removed.
///
/// # Example
/// ```
/// use notion_client::normalize_id;
///
/// assert_eq!(
///     normalize_id("1a2b3c4d-0000-1111-2222-333344445555"),
///     "1a2b3c4d000011112222333344445555"
/// );
/// assert_eq!(
///     normalize_id("https://www.notion.so/team/Roadmap-1a2b3c4d000011112222333344445555?pvs=4"),
///     "1a2b3c4d000011112222333344445555"
/// );
/// ```
pub fn normalize_id(raw: &str) -> String {
    let raw = raw.trim();

    if raw.contains('/') {
        let path = raw.split(['?', '#']).next().unwrap_or(raw);
        let segment = path.trim_end_matches('/').rsplit('/').next().unwrap_or(path);
        let compact = segment.replace('-', "");
        if let Some(id) = trailing_id(&compact) {
            return id.to_string();
        }
    }

    raw.replace('-', "")
}

fn trailing_id(s: &str) -> Option<&str> {
    let tail = s.get(s.len().checked_sub(ID_LEN)?..)?;
    tail.chars().all(|c| c.is_ascii_hexdigit()).then_some(tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("abc-def", "abcdef")]
    #[case("", "")]
    #[case("0123456789abcdef0123456789abcdef", "0123456789abcdef0123456789abcdef")]
    #[case("01234567-89ab-cdef-0123-456789abcdef", "0123456789abcdef0123456789abcdef")]
    #[case(
        "https://www.notion.so/My-Page-0123456789abcdef0123456789abcdef",
        "0123456789abcdef0123456789abcdef"
    )]
    #[case(
        "https://www.notion.so/ws/0123456789abcdef0123456789abcdef/#section",
        "0123456789abcdef0123456789abcdef"
    )]
    #[case("https://example.com/no-id-here", "https://example.com/noidhere")]
    fn test_normalize_id(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_id(raw), expected);
    }

    #[test]
    fn test_non_ascii_segment_does_not_panic() {
        let raw = "https://www.notion.so/页面页面页面页面页面页面页面页面页面页面页面";
        assert_eq!(normalize_id(raw), raw);
    }
}
