//! Lexical simplification
//!
//! Contracts a leading "one" before an eligible magnitude word into a
//! fused token: `one thousand` becomes `a thousand`. Single
//! left-to-right pass; a fused token is never re-scanned.

use crate::language::RuleSet;

/// Fuse `units[1]` + trigger pairs into `"{simply_word} {trigger}"`.
///
/// The fused token keeps an internal space, so separator substitution
/// downstream treats it like any other word boundary. An empty trigger
/// set leaves the sequence untouched.
pub fn simplify(tokens: Vec<String>, rules: &RuleSet, triggers: &[String]) -> Vec<String> {
    let one = rules.one();
    let simply_word = rules.simply_word();

    let mut out = Vec::with_capacity(tokens.len());
    let mut iter = tokens.into_iter().peekable();
    while let Some(token) = iter.next() {
        if token == one && iter.peek().is_some_and(|next| triggers.contains(next)) {
            if let Some(magnitude) = iter.next() {
                out.push(format!("{simply_word} {magnitude}"));
                continue;
            }
        }
        out.push(token);
    }
    out
}
