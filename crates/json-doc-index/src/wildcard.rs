//! Wildcard pattern compilation.
//!
//! Search patterns are plain strings where `*` matches zero or more
//! arbitrary characters and every other character matches literally,
//! case-sensitively.

use crate::IndexError;
use regex::Regex;

/// Compile a `*`-wildcard pattern into an anchored full-match regex.
///
/// Literal segments are escaped, each `*` becomes `.*`, and the result is
/// anchored at both ends, so `"test"` without a wildcard matches only the
/// exact string `"test"`. `(?s)` lets `*` cross newlines inside values.
///
/// # Examples
///
/// ```
/// use json_doc_index::compile_wildcard;
///
/// let re = compile_wildcard("test*").unwrap();
/// assert!(re.is_match("testing"));
/// assert!(!re.is_match("best"));
/// ```
pub fn compile_wildcard(pattern: &str) -> Result<Regex, IndexError> {
    let mut expr = String::with_capacity(pattern.len() + 8);
    expr.push_str("(?s)^");
    for (i, literal) in pattern.split('*').enumerate() {
        if i > 0 {
            expr.push_str(".*");
        }
        expr.push_str(&regex::escape(literal));
    }
    expr.push('$');
    Regex::new(&expr).map_err(|e| IndexError::Pattern(e.to_string()))
}
