//! Pattern normalization and compilation.

use regex::{Regex, RegexBuilder};

use crate::error::{Result, RouterError};
use crate::params::PathParams;

/// Name under which a `*` wildcard captures the remainder of the path.
pub const TAIL_PARAM: &str = "tail";

/// Derives a route pattern from a handler's declared name.
///
/// The literal name `index` maps to the root pattern `/`; any other name is
/// prefixed with `/` and has underscores replaced with hyphens, so
/// `hello_world` becomes `/hello-world`.
#[must_use]
pub fn pattern_from_name(name: &str) -> String {
    if name == "index" {
        "/".to_string()
    } else {
        format!("/{}", name.replace('_', "-"))
    }
}

/// Lower-cases a pattern and collapses trailing slashes.
///
/// The empty pattern and the root pattern both normalize to `/`.
fn normalize(pattern: &str) -> String {
    let lowered = pattern.to_lowercase();
    let trimmed = lowered.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

/// A compiled route pattern.
///
/// Pattern syntax:
/// - `/users` - Literal path
/// - `/users/:id` or `/users/{id}` - Path with a one-segment parameter
/// - `/files/*` - Wildcard capturing the remainder of the path as `tail`
///
/// Matching is case-insensitive and tolerates exactly one extra trailing `/`
/// on the candidate path.
///
/// # Example
///
/// ```
/// use strada_router::PathPattern;
///
/// let pattern = PathPattern::new("/posts/:id/comments/{comment_id}").unwrap();
/// let params = pattern.match_path("/posts/123/comments/456").unwrap();
/// assert_eq!(params.get("id"), Some("123"));
/// assert_eq!(params.get("comment_id"), Some("456"));
/// ```
#[derive(Debug, Clone)]
pub struct PathPattern {
    /// Normalized pattern text.
    pattern: String,
    /// Compiled matcher, anchored at both ends.
    regex: Regex,
    /// Capture names in left-to-right order.
    param_names: Vec<String>,
}

impl PathPattern {
    /// Compiles a pattern.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidPattern`] when the pattern contains more
    /// than one `*`, a malformed capture, or otherwise fails to compile, and
    /// [`RouterError::DuplicateParameter`] when a capture name is repeated.
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = normalize(pattern);
        if pattern.matches('*').count() > 1 {
            return Err(RouterError::InvalidPattern {
                pattern,
                reason: "a pattern may contain at most one `*` wildcard".to_string(),
            });
        }

        let (source, param_names) = build_regex_source(&pattern)?;
        let regex = RegexBuilder::new(&source)
            .case_insensitive(true)
            .build()
            .map_err(|err| RouterError::InvalidPattern {
                pattern: pattern.clone(),
                reason: err.to_string(),
            })?;

        Ok(Self {
            pattern,
            regex,
            param_names,
        })
    }

    /// Attempts to match a candidate path against this pattern.
    ///
    /// Returns the captured parameters on success. Parameterless patterns
    /// yield an empty `PathParams`; the caller decides how to surface that.
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<PathParams> {
        let caps = self.regex.captures(path)?;

        let mut params = PathParams::new();
        for name in &self.param_names {
            if let Some(value) = caps.name(name) {
                // The tail starts after the separator slash; slashes the
                // matcher let through ahead of it are not part of the suffix.
                let value = if name == TAIL_PARAM {
                    value.as_str().trim_start_matches('/')
                } else {
                    value.as_str()
                };
                params.insert(name.clone(), value);
            }
        }

        Some(params)
    }

    /// Returns the normalized pattern text.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the capture names in left-to-right order.
    #[must_use]
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    /// Returns true if the pattern captures anything.
    #[must_use]
    pub fn has_params(&self) -> bool {
        !self.param_names.is_empty()
    }

    /// Renders the pattern with every parameter in brace notation.
    ///
    /// `/api/cats/:cat_id` becomes `/api/cats/{cat_id}`. Used for
    /// documentation and OpenAPI output; has no effect on matching.
    #[must_use]
    pub fn display_pattern(&self) -> String {
        let mut out = String::with_capacity(self.pattern.len() + 4);
        let mut rest = self.pattern.as_str();

        while let Some(pos) = rest.find("/:") {
            out.push_str(&rest[..pos]);
            out.push('/');
            let after = &rest[pos + 2..];
            let end = after.find('/').unwrap_or(after.len());
            out.push('{');
            out.push_str(&after[..end]);
            out.push('}');
            rest = &after[end..];
        }

        out.push_str(rest);
        out
    }
}

/// Translates a normalized pattern into a regex source plus its capture names.
///
/// Routing syntax becomes named captures; the regex metacharacters `.`, `[`,
/// `]`, `(` and `)` that can appear in literal path segments are escaped. The
/// final matcher is anchored and accepts one optional trailing `/`.
fn build_regex_source(pattern: &str) -> Result<(String, Vec<String>)> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut source = String::with_capacity(pattern.len() + 16);
    let mut names: Vec<String> = Vec::new();
    source.push('^');

    let declare = |name: &str, names: &mut Vec<String>| -> Result<()> {
        if name.is_empty() {
            return Err(RouterError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: "empty parameter name".to_string(),
            });
        }
        if names.iter().any(|n| n == name) {
            return Err(RouterError::DuplicateParameter {
                pattern: pattern.to_string(),
                name: name.to_string(),
            });
        }
        names.push(name.to_string());
        Ok(())
    };

    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '/' if chars.get(i + 1) == Some(&':') => {
                let start = i + 2;
                let mut end = start;
                while end < chars.len() && chars[end] != '/' {
                    end += 1;
                }
                let name: String = chars[start..end].iter().collect();
                declare(&name, &mut names)?;
                source.push('/');
                source.push_str(&format!("(?P<{name}>[^/]+)"));
                i = end;
            }
            '/' if chars.get(i + 1) == Some(&'{') => {
                let start = i + 2;
                let mut end = start;
                while end < chars.len() && chars[end] != '}' {
                    end += 1;
                }
                if end == chars.len() {
                    return Err(RouterError::InvalidPattern {
                        pattern: pattern.to_string(),
                        reason: "unterminated `{` parameter".to_string(),
                    });
                }
                let name: String = chars[start..end].iter().collect();
                declare(&name, &mut names)?;
                source.push('/');
                source.push_str(&format!("(?P<{name}>[^/]+)"));
                i = end + 1;
            }
            '*' => {
                declare(TAIL_PARAM, &mut names)?;
                // When the star follows a slash, the slash is optional so
                // that `/a/*` also accepts `/a` with an empty tail.
                if i > 0 && chars[i - 1] == '/' {
                    source.push('?');
                }
                source.push_str(&format!("(?P<{TAIL_PARAM}>.*)"));
                i += 1;
            }
            c @ ('.' | '[' | ']' | '(' | ')') => {
                source.push('\\');
                source.push(c);
                i += 1;
            }
            c => {
                source.push(c);
                i += 1;
            }
        }
    }

    source.push_str("/?$");
    Ok((source, names))
}
