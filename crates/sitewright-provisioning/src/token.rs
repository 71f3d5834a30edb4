//! Placeholder token resolution for field definitions.
//!
//! Field markup may embed placeholders of the form `{kind:value}` that
//! can only be resolved once earlier objects exist on the site. The only
//! defined kind is `listid`, which substitutes the remote identifier of a
//! list ensured earlier in the same run. Placeholders that do not resolve
//! are left in place untouched; a later run can pick them up once the
//! referenced object exists.

use crate::registry::ProvisionedListRegistry;

/// Token kind that substitutes a provisioned list's identifier.
const KIND_LIST_ID: &str = "listid";

/// Resolves `{kind:value}` placeholders against the run's registry.
pub struct TokenResolver<'a> {
    registry: &'a ProvisionedListRegistry,
}

impl<'a> TokenResolver<'a> {
    /// Create a resolver reading from the given registry.
    pub fn new(registry: &'a ProvisionedListRegistry) -> Self {
        Self { registry }
    }

    /// Substitute every resolvable placeholder in `input`.
    ///
    /// Unknown kinds, unresolvable values and malformed candidates stay
    /// literal. The scan consumes at least one character per step, so
    /// degenerate bodies like `{:}` cannot stall it.
    pub fn resolve(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut rest = input;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let candidate = &rest[open..];
            match scan_token(candidate) {
                Some(token) => {
                    match self.substitute(&token) {
                        Some(replacement) => out.push_str(&replacement),
                        None => out.push_str(&candidate[..token.len]),
                    }
                    rest = &candidate[token.len..];
                }
                None => {
                    // Not a token; keep the brace and move past it.
                    out.push('{');
                    rest = &candidate[1..];
                }
            }
        }

        out.push_str(rest);
        out
    }

    fn substitute(&self, token: &Token<'_>) -> Option<String> {
        match token.kind {
            KIND_LIST_ID => self
                .registry
                .resolve_unique(token.value)
                .map(|list| list.id.to_string()),
            _ => None,
        }
    }
}

/// A `{kind:value}` occurrence at the start of a slice.
struct Token<'a> {
    kind: &'a str,
    value: &'a str,
    /// Byte length of the whole placeholder including braces.
    len: usize,
}

/// Scan a placeholder at the start of `s` (which begins with `{`).
///
/// `kind` is ASCII lowercase letters; `value` is letters (including the
/// Scandinavian Æ/Ø/Å in either case) and spaces. Either part may be
/// empty. Returns `None` when the text after the brace is not a
/// placeholder.
fn scan_token(s: &str) -> Option<Token<'_>> {
    let mut colon = None;
    for (i, c) in s.char_indices().skip(1) {
        match colon {
            None => match c {
                ':' => colon = Some(i),
                'a'..='z' => {}
                _ => return None,
            },
            Some(colon) => match c {
                '}' => {
                    return Some(Token {
                        kind: &s[1..colon],
                        value: &s[colon + 1..i],
                        len: i + 1,
                    });
                }
                c if is_value_char(c) => {}
                _ => return None,
            },
        }
    }
    None
}

fn is_value_char(c: char) -> bool {
    c == ' ' || c.is_ascii_alphabetic() || matches!(c, 'Æ' | 'Ø' | 'Å' | 'æ' | 'ø' | 'å')
}
