use crate::resolver_set::ResolverSet;

pub const COMMENT_MARKER: char = '#';
pub const REGEX_MARKER: &str = "regexp:";
pub const EXACT_MATCH_MARKER: &str = "full:";

/// One upstream line in AdGuard Home syntax: `[/domain/]resolver1 resolver2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Directive(String);

impl Directive {
    pub fn new(domain: &str, resolvers: &ResolverSet) -> Self {
        Self(format!("[/{}/]{}", domain, resolvers.joined()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn dedup_key(&self) -> Option<DedupKey> {
        DedupKey::extract(&self.0)
    }
}

impl std::fmt::Display for Directive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The bracketed domain pattern of a directive, delimiters included.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DedupKey(String);

impl DedupKey {
    /// Returns the text between the first `[` and the first `]`, inclusive.
    /// Lines missing either bracket, or whose first `]` comes before the
    /// first `[`, yield no key.
    pub fn extract(line: &str) -> Option<Self> {
        let open = line.find('[')?;
        let close = line.find(']')?;
        if close < open {
            return None;
        }
        Some(Self(line[open..=close].to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DedupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Converts one raw rule line into a directive.
///
/// Blank lines, comments and `regexp:` rules produce nothing. A leading
/// `full:` marker is dropped and the rest is handled like a plain domain.
pub fn transform_line(raw: &str, resolvers: &ResolverSet) -> Option<Directive> {
    let line = raw.trim();

    if line.is_empty() || line.starts_with(COMMENT_MARKER) || line.starts_with(REGEX_MARKER) {
        return None;
    }

    let domain = line.strip_prefix(EXACT_MATCH_MARKER).unwrap_or(line).trim();
    if domain.is_empty() {
        return None;
    }

    Some(Directive::new(domain, resolvers))
}
