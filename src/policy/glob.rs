//! Compiles whitelist glob expressions into exact coordinate matchers.

use regex::Regex;

/// Matcher produced by [`compile`]: an anchored, whole-string matcher over
/// `group:module:version` coordinates. Stateless and reusable across
/// candidates.
#[derive(Debug)]
pub struct CompiledMatcher {
    regex: Regex,
    source: Box<str>,
}

/// Compile a whitelist glob expression into an exact matcher.
///
/// `*` matches any run of characters not containing `:`. `\*` denotes a
/// literal asterisk and `\\` a literal backslash; every other character,
/// including a backslash that starts no escape sequence, matches itself.
/// Compilation is total: any input string produces a matcher.
#[must_use]
pub fn compile(pattern: &str) -> CompiledMatcher {
    let mut expr = String::with_capacity(pattern.len() + 2);
    expr.push('^');

    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.peek() {
                Some('\\') => {
                    let _ = chars.next();
                    literal.push('\\');
                }
                Some('*') => {
                    let _ = chars.next();
                    literal.push('*');
                }
                // Only `\\` and `\*` are escape sequences; any other
                // backslash, trailing ones included, stays literal.
                _ => literal.push('\\'),
            },
            '*' => {
                expr.push_str(&regex::escape(&literal));
                literal.clear();
                expr.push_str("[^:]*");
            }
            _ => literal.push(c),
        }
    }

    expr.push_str(&regex::escape(&literal));
    expr.push('$');

    let regex = Regex::new(&expr).expect("escaped literal segments always form a valid regex");

    CompiledMatcher {
        regex,
        source: Box::from(pattern),
    }
}

impl CompiledMatcher {
    /// Returns `true` iff the whole of `coordinate` matches the pattern.
    /// Substring matches do not count.
    #[must_use]
    pub fn matches(&self, coordinate: &str) -> bool {
        self.regex.is_match(coordinate)
    }

    /// The glob expression this matcher was compiled from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}
