//! Path-based reads and writes over a token tree.
//!
//! These are the only primitives the editor uses to touch a tree, and all of
//! them tolerate missing nodes: reading an absent path yields an empty value,
//! and writing creates intermediate groups on the way down. Partially
//! populated or externally suggested trees therefore never make an edit fail.
//!
//! ```rust
//! use dsforge_tokens::{default_tokens, get_token_value, set_token_value};
//!
//! let tree = default_tokens();
//! let edited = set_token_value(&tree, "color.text", "#fff");
//!
//! assert_eq!(get_token_value(&edited, "color.text"), "#fff");
//! assert_ne!(get_token_value(&tree, "color.text"), "#fff");
//! assert_eq!(get_token_value(&tree, "color.nope.nothing"), "");
//! ```

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::AliasError;
use crate::token::{Token, TokenType, TokenValue};
use crate::tree::{is_meta_key, TokenGroup, TokenNode, TokenTree};

/// Returns the raw value at `path`, or an empty string if there is no token there.
///
/// Aliases are returned as written (`{color.primary.500}`), not followed.
pub fn get_token_value(tree: &TokenTree, path: &str) -> String {
    tree.token(path)
        .map(|token| token.value.clone())
        .unwrap_or_default()
}

/// Returns a copy of `tree` with the value at `path` replaced.
///
/// Missing segments are created as empty groups, and a missing leaf is created
/// with a type inferred from its path. The value is not validated. Writes that
/// would have to go through an existing token or overwrite a populated group
/// leave the copy unchanged.
pub fn set_token_value(tree: &TokenTree, path: &str, value: impl Into<String>) -> TokenTree {
    let mut next = tree.clone();
    next.write_value(path, value.into());
    next
}

/// Returns the direct token children of the group at `path`, keyed by their
/// own names (`"50"`..`"950"`, `"DEFAULT"`), with raw unresolved values.
///
/// Nested groups and meta keys are skipped; a missing path yields an empty map.
pub fn enumerate_scale(tree: &TokenTree, path: &str) -> BTreeMap<String, String> {
    let Some(group) = tree.group(path) else {
        return BTreeMap::new();
    };
    group
        .iter()
        .filter(|(key, _)| !is_meta_key(key))
        .filter_map(|(key, node)| node.as_token().map(|token| (key.clone(), token.value.clone())))
        .collect()
}

/// Follows the alias chain starting at `path` to its literal value.
///
/// Unlike the flattener, which rewrites a single hop, this walks the whole
/// chain and guards against cycles explicitly.
pub fn resolve_token_value(tree: &TokenTree, path: &str) -> Result<String, AliasError> {
    let mut visited: Vec<String> = Vec::new();
    let mut current = path.to_string();

    loop {
        if visited.contains(&current) {
            visited.push(current);
            return Err(AliasError::Cycle { path: visited });
        }

        let Some(token) = tree.token(&current) else {
            return Err(match visited.last() {
                None => AliasError::Missing { path: current },
                Some(from) => AliasError::Unresolved {
                    from: from.clone(),
                    to: current,
                },
            });
        };

        match TokenValue::parse(&token.value) {
            TokenValue::Literal(literal) => return Ok(literal),
            TokenValue::Alias(target) => {
                visited.push(current);
                current = target.dotted();
            }
        }
    }
}

/// Returns the dotted path of every token in the tree, depth first.
pub fn token_paths(tree: &TokenTree) -> Vec<String> {
    tree.tokens().into_iter().map(|(path, _)| path).collect()
}

impl TokenTree {
    /// Returns the raw value at `path`; see [`get_token_value`].
    pub fn value_at(&self, path: &str) -> String {
        get_token_value(self, path)
    }

    /// Returns a copy with the value at `path` replaced; see [`set_token_value`].
    pub fn with_value(&self, path: &str, value: impl Into<String>) -> TokenTree {
        set_token_value(self, path, value)
    }

    /// Writes `value` at `path` in place. Returns false when the write was skipped.
    pub(crate) fn write_value(&mut self, path: &str, value: String) -> bool {
        let segments: Vec<&str> = path.split('.').collect();
        if segments.iter().any(|segment| segment.is_empty()) {
            debug!(path, "token path has an empty segment; value not written");
            return false;
        }

        match write_leaf(self.root_mut(), &segments, &segments, value) {
            Ok(()) => true,
            Err(reason) => {
                debug!(path, reason, "token value not written");
                false
            }
        }
    }
}

fn write_leaf(
    group: &mut TokenGroup,
    remaining: &[&str],
    full: &[&str],
    value: String,
) -> Result<(), &'static str> {
    match remaining {
        [] => Err("empty path"),
        [last] => match group.get_mut(*last) {
            Some(TokenNode::Token(token)) => {
                token.value = value;
                Ok(())
            }
            Some(TokenNode::Group(children)) if !children.is_empty() => {
                Err("path ends on a populated group")
            }
            Some(TokenNode::Meta(_)) => Err("path ends on a metadata entry"),
            _ => {
                let token = Token::new(value, TokenType::infer(full));
                group.insert((*last).to_string(), TokenNode::Token(token));
                Ok(())
            }
        },
        [head, rest @ ..] => {
            let node = group
                .entry((*head).to_string())
                .or_insert_with(TokenNode::empty_group);
            match node {
                TokenNode::Group(children) => write_leaf(children, rest, full, value),
                TokenNode::Token(_) => Err("path runs through a token"),
                TokenNode::Meta(_) => Err("path runs through a metadata entry"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree() -> TokenTree {
        TokenTree::from_value(json!({
            "color": {
                "primary": {
                    "$type": "color",
                    "50": { "value": "#eff6ff", "type": "color" },
                    "500": { "value": "#3b82f6", "type": "color" },
                    "DEFAULT": { "value": "{color.primary.500}", "type": "color" },
                    "muted": { "soft": { "value": "#dbeafe", "type": "color" } }
                },
                "text": { "value": "{color.primary.DEFAULT}", "type": "color" },
                "loopA": { "value": "{color.loopB}", "type": "color" },
                "loopB": { "value": "{color.loopA}", "type": "color" },
                "dangling": { "value": "{color.nowhere}", "type": "color" },
                "empty": {}
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_get_literal_and_alias_raw() {
        let tree = tree();
        assert_eq!(get_token_value(&tree, "color.primary.500"), "#3b82f6");
        assert_eq!(get_token_value(&tree, "color.primary.DEFAULT"), "{color.primary.500}");
    }

    #[test]
    fn test_get_missing_or_group_is_empty() {
        let tree = tree();
        assert_eq!(get_token_value(&tree, "color.primary"), "");
        assert_eq!(get_token_value(&tree, "color.secondary.500"), "");
        assert_eq!(get_token_value(&tree, "color.primary.500.value"), "");
        assert_eq!(get_token_value(&tree, ""), "");
        assert_eq!(get_token_value(&tree, "color.primary.$type"), "");
    }

    #[test]
    fn test_set_replaces_existing_value_keeps_type() {
        let tree = tree();
        let next = set_token_value(&tree, "color.primary.500", "#2563eb");
        let token = next.token("color.primary.500").unwrap();
        assert_eq!(token.value, "#2563eb");
        assert_eq!(token.token_type, TokenType::Color);
    }

    #[test]
    fn test_set_does_not_touch_input() {
        let tree = tree();
        let snapshot = tree.clone();
        let _ = set_token_value(&tree, "color.text", "#fff");
        assert_eq!(tree, snapshot);
    }

    #[test]
    fn test_set_creates_missing_segments() {
        let tree = tree();
        let next = set_token_value(&tree, "geometry.radius.md", "0.375rem");
        let token = next.token("geometry.radius.md").unwrap();
        assert_eq!(token.value, "0.375rem");
        assert_eq!(token.token_type, TokenType::Dimension);
    }

    #[test]
    fn test_set_fills_empty_group() {
        let tree = tree();
        let next = set_token_value(&tree, "color.empty", "#000");
        assert_eq!(next.token("color.empty").unwrap().value, "#000");
    }

    #[test]
    fn test_set_skips_through_token_and_onto_group() {
        let tree = tree();
        assert_eq!(set_token_value(&tree, "color.text.inner", "#000"), tree);
        assert_eq!(set_token_value(&tree, "color.primary", "#000"), tree);
        assert_eq!(set_token_value(&tree, "", "#000"), tree);
        assert_eq!(set_token_value(&tree, "color..text", "#000"), tree);
    }

    #[test]
    fn test_set_is_idempotent() {
        let tree = tree();
        let once = set_token_value(&tree, "color.text", "#fff");
        let twice = set_token_value(&once, "color.text", "#fff");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_enumerate_scale_direct_tokens_only() {
        let tree = tree();
        let scale = enumerate_scale(&tree, "color.primary");
        assert_eq!(scale.len(), 3);
        assert_eq!(scale["50"], "#eff6ff");
        assert_eq!(scale["DEFAULT"], "{color.primary.500}");
        assert!(!scale.contains_key("muted"));
        assert!(!scale.contains_key("$type"));
    }

    #[test]
    fn test_enumerate_scale_missing_or_leaf() {
        let tree = tree();
        assert!(enumerate_scale(&tree, "color.secondary").is_empty());
        assert!(enumerate_scale(&tree, "color.text").is_empty());
    }

    #[test]
    fn test_resolve_follows_chain() {
        let tree = tree();
        assert_eq!(resolve_token_value(&tree, "color.text").unwrap(), "#3b82f6");
        assert_eq!(resolve_token_value(&tree, "color.primary.50").unwrap(), "#eff6ff");
    }

    #[test]
    fn test_resolve_reports_missing_dangling_and_cycles() {
        let tree = tree();
        assert_eq!(
            resolve_token_value(&tree, "color.absent"),
            Err(AliasError::Missing {
                path: "color.absent".to_string()
            })
        );
        assert_eq!(
            resolve_token_value(&tree, "color.dangling"),
            Err(AliasError::Unresolved {
                from: "color.dangling".to_string(),
                to: "color.nowhere".to_string()
            })
        );
        assert_eq!(
            resolve_token_value(&tree, "color.loopA"),
            Err(AliasError::Cycle {
                path: vec![
                    "color.loopA".to_string(),
                    "color.loopB".to_string(),
                    "color.loopA".to_string()
                ]
            })
        );
    }

    #[test]
    fn test_tree_method_aliases() {
        let tree = tree();
        let next = tree.with_value("color.text", "#fff");
        assert_eq!(next.value_at("color.text"), "#fff");
        assert_eq!(token_paths(&next).len(), token_paths(&tree).len());
    }
}
