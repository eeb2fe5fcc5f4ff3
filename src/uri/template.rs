//! Positional template substitution.
//!
//! Templates use `{0}`, `{1}`, ... placeholders; `{{` and `}}` are literal
//! braces. Arguments are rendered with `Display`, which is locale-independent
//! for every std numeric type.

use std::fmt::Display;

use url::Url;

use super::RelativeUri;
use crate::error::FormatError;

/// Base used only to confirm the result resolves as a relative reference.
const RESOLUTION_BASE: &str = "http://resolve.invalid/";

/// Substitute `args` into `template` and validate the result.
///
/// Arguments are inserted verbatim; encode caller text before passing it in.
/// Arguments beyond the highest placeholder are ignored.
///
/// # Examples
/// ```
/// use repo_routes::uri::format_uri;
/// let uri = format_uri("repositories/{0}/issues/{1}", &[&1u64, &42u64]).unwrap();
/// assert_eq!(uri.as_str(), "repositories/1/issues/42");
/// ```
pub fn format_uri(template: &str, args: &[&dyn Display]) -> Result<RelativeUri, FormatError> {
    let formatted = substitute(template, args)?;
    check_relative(&formatted)?;
    Ok(RelativeUri::from_validated(formatted))
}

fn substitute(template: &str, args: &[&dyn Display]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        let position = template.len() - tail.len();

        if let Some(after) = tail.strip_prefix("{{") {
            out.push('{');
            rest = after;
            continue;
        }
        if let Some(after) = tail.strip_prefix("}}") {
            out.push('}');
            rest = after;
            continue;
        }
        if tail.starts_with('}') {
            return Err(FormatError::UnbalancedBrace {
                template: template.to_string(),
                position,
            });
        }

        let close = tail.find('}').ok_or_else(|| FormatError::UnbalancedBrace {
            template: template.to_string(),
            position,
        })?;
        let inner = &tail[1..close];
        let index = parse_index(inner).ok_or_else(|| FormatError::InvalidPlaceholder {
            template: template.to_string(),
            placeholder: inner.to_string(),
        })?;
        let arg = args.get(index).ok_or_else(|| FormatError::MissingArgument {
            template: template.to_string(),
            index,
            given: args.len(),
        })?;

        out.push_str(&arg.to_string());
        rest = &tail[close + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Placeholder index: ASCII digits only, no sign, no format spec.
fn parse_index(inner: &str) -> Option<usize> {
    if inner.is_empty() || !inner.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    inner.parse().ok()
}

/// Check `uri` against the RFC 3986 `relative-ref` grammar.
fn check_relative(uri: &str) -> Result<(), FormatError> {
    let not_relative = |reason: &str| FormatError::NotRelative {
        uri: uri.to_string(),
        reason: reason.to_string(),
    };

    if uri.starts_with("//") {
        return Err(not_relative("network-path reference carries an authority"));
    }

    let first_segment = uri.split(['/', '?', '#']).next().unwrap_or(uri);
    if first_segment.contains(':') {
        return Err(not_relative("first path segment contains `:`"));
    }

    let bytes = uri.as_bytes();
    let mut in_fragment = false;
    for (position, ch) in uri.char_indices() {
        let allowed = match ch {
            '%' => bytes
                .get(position + 1..position + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)),
            '#' if in_fragment => false,
            '#' => {
                in_fragment = true;
                true
            }
            _ => is_uri_char(ch),
        };
        if !allowed {
            return Err(FormatError::IllegalCharacter {
                uri: uri.to_string(),
                ch,
                position,
            });
        }
    }

    match Url::parse(uri) {
        Err(url::ParseError::RelativeUrlWithoutBase) => {}
        Ok(_) => return Err(not_relative("parses as an absolute URL")),
        Err(err) => return Err(not_relative(&err.to_string())),
    }

    Url::parse(RESOLUTION_BASE)
        .and_then(|base| base.join(uri))
        .map(|_| ())
        .map_err(|err| not_relative(&err.to_string()))
}

/// Unreserved, sub-delims, and the `pchar`/query extras (`:@/?`).
#[inline]
fn is_uri_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || matches!(
            ch,
            '-' | '.' | '_' | '~'
                | '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | ';' | '='
                | ':' | '@' | '/' | '?'
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutes_in_order() {
        let uri = format_uri("repositories/{0}/issues/{1}/labels/{2}", &[&1, &42, &"bug"]).unwrap();
        assert_eq!(uri.as_str(), "repositories/1/issues/42/labels/bug");
    }

    #[test]
    fn test_repeated_and_reordered_placeholders() {
        let uri = format_uri("{1}/{0}/{1}", &[&"a", &"b"]).unwrap();
        assert_eq!(uri.as_str(), "b/a/b");
    }

    #[test]
    fn test_integers_render_plain_decimal() {
        let uri = format_uri("repositories/{0}/releases/{1}", &[&1_234_567u64, &-5i64]).unwrap();
        assert_eq!(uri.as_str(), "repositories/1234567/releases/-5");

        let max = format_uri("repositories/{0}", &[&u64::MAX]).unwrap();
        assert_eq!(max.as_str(), "repositories/18446744073709551615");
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        let uri = format_uri("repositories/{0}/git/blobs", &[&1, &""]).unwrap();
        assert_eq!(uri.as_str(), "repositories/1/git/blobs");
    }

    #[test]
    fn test_escaped_braces() {
        // Braces are not URI characters, so the escape is only reachable
        // through an error message
        let err = format_uri("a/{{0}}", &[&1]).unwrap_err();
        assert!(matches!(err, FormatError::IllegalCharacter { ch: '{', .. }));
    }

    #[test]
    fn test_missing_argument() {
        // A template with a second placeholder but a single argument
        let err = format_uri("networks/{0}/{1}/events", &[&1]).unwrap_err();
        assert_eq!(
            err,
            FormatError::MissingArgument {
                template: "networks/{0}/{1}/events".to_string(),
                index: 1,
                given: 1,
            }
        );
    }

    #[test]
    fn test_unbalanced_braces() {
        assert!(matches!(
            format_uri("repositories/{0", &[&1]),
            Err(FormatError::UnbalancedBrace { position: 13, .. })
        ));
        assert!(matches!(
            format_uri("repositories/0}", &[&1]),
            Err(FormatError::UnbalancedBrace { position: 14, .. })
        ));
    }

    #[test]
    fn test_invalid_placeholders() {
        for template in ["a/{}", "a/{x}", "a/{-1}", "a/{0:D}", "a/{ 0}"] {
            assert!(
                matches!(
                    format_uri(template, &[&1]),
                    Err(FormatError::InvalidPlaceholder { .. })
                ),
                "{template} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_unencoded_characters() {
        let err = format_uri("repositories/{0}/branches/{1}", &[&1, &"my branch"]).unwrap_err();
        assert_eq!(
            err,
            FormatError::IllegalCharacter {
                uri: "repositories/1/branches/my branch".to_string(),
                ch: ' ',
                position: 26,
            }
        );

        assert!(format_uri("a/{0}", &[&"中文"]).is_err());
        assert!(format_uri("a/{0}", &[&"x\"y"]).is_err());
        assert!(format_uri("a/{0}", &[&"[0]"]).is_err());
    }

    #[test]
    fn test_percent_escapes() {
        assert!(format_uri("a/{0}", &[&"feat%2Fa"]).is_ok());
        assert!(format_uri("a/{0}", &[&"%e4%b8%ad"]).is_ok());
        assert!(format_uri("a/{0}", &[&"50%"]).is_err());
        assert!(format_uri("a/{0}", &[&"%zz"]).is_err());
        assert!(format_uri("a/{0}", &[&"%4"]).is_err());
    }

    #[test]
    fn test_rejects_absolute_references() {
        for absolute in ["https://api.github.com/repos", "mailto:someone", "urn:x"] {
            assert!(
                matches!(
                    format_uri("{0}", &[&absolute]),
                    Err(FormatError::NotRelative { .. })
                ),
                "{absolute} should be rejected"
            );
        }
        assert!(matches!(
            format_uri("//evil.example/{0}", &[&1]),
            Err(FormatError::NotRelative { .. })
        ));
    }

    #[test]
    fn test_colon_allowed_after_first_segment() {
        let uri = format_uri("repositories/{0}/compare/{1}", &[&1, &"a:b"]).unwrap();
        assert_eq!(uri.as_str(), "repositories/1/compare/a:b");
    }

    #[test]
    fn test_fragment_and_query() {
        assert!(format_uri("a?x=1#frag", &[]).is_ok());
        assert!(format_uri("a?x=/?#frag/?", &[]).is_ok());
        assert!(matches!(
            format_uri("a#one#two", &[]),
            Err(FormatError::IllegalCharacter { ch: '#', position: 5, .. })
        ));
    }

    #[test]
    fn test_empty_template() {
        assert_eq!(format_uri("", &[]).unwrap().as_str(), "");
    }
}
