//! Route pattern compilation.
//!
//! Patterns are literal paths with `:name` placeholders:
//! ```text
//! /users/:id
//! /users/:id/posts/:post_id.json
//! /files/:name.:ext
//! ```
//!
//! A placeholder name is `[a-z0-9_]+`, case-insensitive. Each placeholder
//! becomes a named capture group holding its constraint, `[^/]+` unless the
//! route supplies one. Literal text is matched verbatim.
//!
//! Patterns without a `.` are folder patterns: a trailing slash is optional
//! on the matched path. Patterns with a `.` are file patterns and match only
//! as written.

use regex_lite::Regex;

use crate::routing::error::{Result, RoutingError};
use crate::routing::params::{ParamConstraints, ParamValues};

/// Constraint used for placeholders without an explicit one.
pub const DEFAULT_CONSTRAINT: &str = "[^/]+";

/// A piece of a tokenized pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment {
    Literal(String),
    Param(String),
}

/// A pattern compiled into an anchored matcher.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    segments: Vec<Segment>,
    is_folder: bool,
    regex: Regex,
}

impl Pattern {
    /// Compile `source` using `constraints` for its placeholders.
    pub fn compile(source: &str, constraints: &ParamConstraints) -> Result<Self> {
        let segments = tokenize(source);
        let is_folder = !source.contains('.');

        let mut seen: Vec<&str> = Vec::new();
        for name in param_names_of(&segments) {
            if name.starts_with(|c: char| c.is_ascii_digit()) {
                return Err(RoutingError::invalid_pattern(
                    source,
                    format!("parameter name \"{name}\" must not start with a digit"),
                ));
            }
            if seen.contains(&name) {
                return Err(RoutingError::invalid_pattern(
                    source,
                    format!("parameter \"{name}\" appears more than once"),
                ));
            }
            seen.push(name);
        }

        let body = if is_folder {
            source.trim_end_matches('/')
        } else {
            source
        };

        let mut expr = String::with_capacity(body.len() * 2 + 8);
        expr.push('^');
        for segment in tokenize(body) {
            match segment {
                Segment::Literal(text) => expr.push_str(&regex_lite::escape(&text)),
                Segment::Param(name) => {
                    let constraint = constraints.get(&name).unwrap_or(DEFAULT_CONSTRAINT);
                    check_constraint(source, &name, constraint)?;
                    expr.push_str(&format!("(?P<{name}>{constraint})"));
                }
            }
        }
        if is_folder {
            expr.push_str("/?");
        }
        expr.push('$');

        let regex = Regex::new(&expr)
            .map_err(|e| RoutingError::invalid_pattern(source, e.to_string()))?;

        Ok(Self {
            source: source.to_string(),
            segments,
            is_folder,
            regex,
        })
    }

    /// The raw pattern.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The compiled regular expression.
    pub fn regex(&self) -> &str {
        self.regex.as_str()
    }

    /// True for folder patterns (no `.`), which tolerate a trailing slash.
    pub fn is_folder(&self) -> bool {
        self.is_folder
    }

    /// Placeholder names in order of appearance.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        param_names_of(&self.segments)
    }

    /// Check whether `path` matches the whole pattern.
    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Match `path` and return the captured placeholder values.
    pub fn captures(&self, path: &str) -> Option<ParamValues> {
        let caps = self.regex.captures(path)?;
        let mut values = ParamValues::new();
        for name in self.param_names() {
            if let Some(m) = caps.name(name) {
                values.insert(name, m.as_str());
            }
        }
        Some(values)
    }

    pub(crate) fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.regex.as_str() == other.regex.as_str()
    }
}

impl Eq for Pattern {}

/// Scan a pattern for `:name` placeholders and return their names in order.
///
/// Repeated names are returned as often as they appear.
pub fn extract_param_names(pattern: &str) -> Vec<String> {
    tokenize(pattern)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Param(name) => Some(name),
            Segment::Literal(_) => None,
        })
        .collect()
}

fn param_names_of(segments: &[Segment]) -> impl Iterator<Item = &str> {
    segments.iter().filter_map(|segment| match segment {
        Segment::Param(name) => Some(name.as_str()),
        Segment::Literal(_) => None,
    })
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Split a pattern into literal runs and placeholders.
///
/// A `:` not followed by a name character stays literal.
pub(crate) fn tokenize(pattern: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut rest = pattern;

    while let Some(idx) = rest.find(':') {
        let after = &rest[idx + 1..];
        let len = after.find(|c: char| !is_name_char(c)).unwrap_or(after.len());

        if len == 0 {
            literal.push_str(&rest[..=idx]);
            rest = after;
            continue;
        }

        literal.push_str(&rest[..idx]);
        if !literal.is_empty() {
            segments.push(Segment::Literal(std::mem::take(&mut literal)));
        }
        segments.push(Segment::Param(after[..len].to_string()));
        rest = &after[len..];
    }

    literal.push_str(rest);
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    segments
}

fn check_constraint(pattern: &str, name: &str, constraint: &str) -> Result<()> {
    Regex::new(constraint).map(|_| ()).map_err(|e| {
        RoutingError::invalid_pattern(pattern, format!("constraint for \"{name}\": {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(pattern: &str) -> Pattern {
        Pattern::compile(pattern, &ParamConstraints::new()).unwrap()
    }

    #[test]
    fn test_extract_param_names() {
        assert_eq!(
            extract_param_names("/users/:id/posts/:postId.json"),
            vec!["id", "postId"]
        );
        assert_eq!(extract_param_names("/a/:x/b/:x"), vec!["x", "x"]);
        assert!(extract_param_names("/static/about").is_empty());
        assert!(extract_param_names("/time/12:/x").is_empty());
    }

    #[test]
    fn test_literal_pattern() {
        let pattern = compile("/about");
        assert!(pattern.is_match("/about"));
        assert!(pattern.is_match("/about/"));
        assert!(!pattern.is_match("/about/us"));
        assert!(!pattern.is_match("/abou"));
        assert_eq!(pattern.captures("/about"), Some(ParamValues::new()));
    }

    #[test]
    fn test_folder_trailing_slash() {
        let pattern = compile("/users/:id/");
        assert!(pattern.is_folder());
        assert_eq!(pattern.regex(), "^/users/(?P<id>[^/]+)/?$");

        let values = pattern.captures("/users/42").unwrap();
        assert_eq!(values.get("id"), Some("42"));
        assert!(pattern.is_match("/users/42/"));
        assert!(!pattern.is_match("/users/42/extra"));
    }

    #[test]
    fn test_file_pattern() {
        let pattern = compile("/file.:ext");
        assert!(!pattern.is_folder());
        assert_eq!(pattern.captures("/file.json").unwrap().get("ext"), Some("json"));
        assert!(!pattern.is_match("/file.json/"));
        // the dot is literal
        assert!(!pattern.is_match("/fileXjson"));
    }

    #[test]
    fn test_root_pattern() {
        let pattern = compile("/");
        assert!(pattern.is_match("/"));
        assert!(pattern.is_match(""));
        assert!(!pattern.is_match("/x"));
    }

    #[test]
    fn test_custom_constraint() {
        let constraints: ParamConstraints = [("id", "[0-9]+")].into_iter().collect();
        let pattern = Pattern::compile("/users/:id", &constraints).unwrap();
        assert!(pattern.is_match("/users/42"));
        assert!(!pattern.is_match("/users/abc"));
    }

    #[test]
    fn test_unused_constraint_is_inert() {
        let constraints: ParamConstraints = [("slug", "[a-z]+")].into_iter().collect();
        let pattern = Pattern::compile("/users/:id", &constraints).unwrap();
        assert!(pattern.is_match("/users/42"));
    }

    #[test]
    fn test_invalid_patterns() {
        let none = ParamConstraints::new();
        assert!(matches!(
            Pattern::compile("/a/:x/b/:x", &none),
            Err(RoutingError::InvalidPattern { .. })
        ));
        assert!(Pattern::compile("/a/:1st", &none).is_err());

        let bad: ParamConstraints = [("id", "[0-9")].into_iter().collect();
        assert!(Pattern::compile("/users/:id", &bad).is_err());
    }

    #[test]
    fn test_constraint_with_groups() {
        let constraints: ParamConstraints =
            [("lang", "(en|fr)"), ("page", "(?P<inner>[a-z]+)-[0-9]+")]
                .into_iter()
                .collect();
        let pattern = Pattern::compile("/docs/:lang/:page", &constraints).unwrap();

        let values = pattern.captures("/docs/fr/intro-2").unwrap();
        assert_eq!(values.keys().collect::<Vec<_>>(), vec!["lang", "page"]);
        assert_eq!(values.get("lang"), Some("fr"));
        assert_eq!(values.get("page"), Some("intro-2"));
        assert!(!pattern.is_match("/docs/de/intro-2"));
    }

    #[test]
    fn test_empty_constraint() {
        let constraints: ParamConstraints = [("x", "")].into_iter().collect();
        let pattern = Pattern::compile("/a/:x", &constraints).unwrap();
        assert_eq!(pattern.regex(), "^/a/(?P<x>)/?$");
        assert_eq!(pattern.captures("/a/").unwrap().get("x"), Some(""));
        assert!(!pattern.is_match("/a/b"));
    }

    #[test]
    fn test_adjacent_params() {
        let pattern = compile("/files/:name.:ext");
        let values = pattern.captures("/files/report.pdf").unwrap();
        assert_eq!(values.get("name"), Some("report"));
        assert_eq!(values.get("ext"), Some("pdf"));
    }
}
