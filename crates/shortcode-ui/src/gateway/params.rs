//! Request parameter normalization.

use serde::{Deserialize, Serialize};

use shortcode_core::PostId;
use shortcode_core::error::RequestError;

/// How hydration turns id segments into post ids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdParsing {
    /// Read leading digits as an absolute integer; anything else is 0.
    #[default]
    Permissive,
    /// Reject any segment that is not a plain non-negative integer.
    Strict,
}

/// Normalize free text the way the host's text-field sanitizer does.
///
/// Tags and percent-encoded octets are removed, runs of whitespace collapse
/// to one space, and the result is trimmed.
pub fn sanitize_text(raw: &str) -> String {
    let stripped = strip_octets(&strip_tags(raw));
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn strip_tags(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        let opens_tag = tail[1..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || matches!(c, '/' | '!' | '?'));

        match tail.find('>') {
            Some(end) if opens_tag => rest = &tail[end + 1..],
            _ => {
                out.push('<');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn strip_octets(text: &str) -> String {
    let mut current = text.to_string();

    // Removing one octet can expose another ("%%4141"), so repeat until stable.
    loop {
        let bytes = current.as_bytes();
        let found = bytes.windows(3).position(|w| {
            w[0] == b'%' && w[1].is_ascii_hexdigit() && w[2].is_ascii_hexdigit()
        });

        match found {
            Some(pos) => current.replace_range(pos..pos + 3, ""),
            None => return current,
        }
    }
}

/// Absolute value of the integer at the start of `segment`, or 0.
///
/// Leading whitespace and a sign are skipped; parsing stops at the first
/// non-digit. Values too large for a post id saturate.
pub fn absint(segment: &str) -> PostId {
    let trimmed = segment.trim_start();
    let unsigned = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('+'))
        .unwrap_or(trimmed);

    unsigned
        .chars()
        .take_while(char::is_ascii_digit)
        .fold(0u64, |acc, c| {
            acc.saturating_mul(10)
                .saturating_add(u64::from(c as u8 - b'0'))
        })
}

/// Split a comma-separated id list.
///
/// Empty segments and `"0"` are dropped, matching the host's falsy-value
/// filter; order and duplicates are kept.
pub fn parse_ids(value: &str, mode: IdParsing) -> Result<Vec<PostId>, RequestError> {
    value
        .split(',')
        .filter(|segment| !segment.is_empty() && *segment != "0")
        .map(|segment| match mode {
            IdParsing::Permissive => Ok(absint(segment)),
            IdParsing::Strict => {
                let trimmed = segment.trim();
                if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(RequestError::InvalidValue {
                        segment: segment.to_string(),
                    });
                }
                trimmed.parse().map_err(|_| RequestError::InvalidValue {
                    segment: segment.to_string(),
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_collapses_whitespace() {
        assert_eq!(sanitize_text("  hello \n\t world  "), "hello world");
    }

    #[test]
    fn sanitize_strips_tags_but_keeps_lone_brackets() {
        assert_eq!(sanitize_text("<b>bold</b> move"), "bold move");
        assert_eq!(sanitize_text("a < b"), "a < b");
        assert_eq!(sanitize_text("<script>x"), "x");
    }

    #[test]
    fn sanitize_removes_octets() {
        assert_eq!(sanitize_text("100%20off"), "100off");
        assert_eq!(sanitize_text("%%4141"), "");
        assert_eq!(sanitize_text("50% off"), "50% off");
    }

    #[test]
    fn absint_is_permissive() {
        assert_eq!(absint("42"), 42);
        assert_eq!(absint(" 7"), 7);
        assert_eq!(absint("-5"), 5);
        assert_eq!(absint("12abc"), 12);
        assert_eq!(absint("x"), 0);
        assert_eq!(absint(""), 0);
        assert_eq!(absint("99999999999999999999999"), u64::MAX);
    }

    #[test]
    fn permissive_ids_keep_order_and_duplicates() {
        // Non-numeric segments become 0: a long-standing quirk of the
        // permissive mode, not a guarantee.
        assert_eq!(
            parse_ids("3,7,,x,2", IdParsing::Permissive).unwrap(),
            vec![3, 7, 0, 0, 2]
        );
        assert_eq!(
            parse_ids("5,5,1", IdParsing::Permissive).unwrap(),
            vec![5, 5, 1]
        );
    }

    #[test]
    fn zero_segments_are_dropped() {
        assert_eq!(parse_ids("0,4,0", IdParsing::Permissive).unwrap(), vec![4]);
        assert_eq!(parse_ids("0,4", IdParsing::Strict).unwrap(), vec![4]);
    }

    #[test]
    fn strict_ids_reject_garbage() {
        assert_eq!(parse_ids("3, 7", IdParsing::Strict).unwrap(), vec![3, 7]);
        assert_eq!(
            parse_ids("3,x", IdParsing::Strict),
            Err(RequestError::InvalidValue {
                segment: "x".to_string()
            })
        );
        assert!(parse_ids("-2", IdParsing::Strict).is_err());
        assert!(parse_ids("4a", IdParsing::Strict).is_err());
    }
}
