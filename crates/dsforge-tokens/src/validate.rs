//! Schema validation for token trees.
//!
//! Validation is advisory input hygiene: it reports problems as a list of
//! `path: message` issues and never rejects anything itself. Callers run it
//! before accepting externally sourced trees and decide what to do with the
//! result.
//!
//! This is also the one place that reports dangling and cyclic aliases. The
//! resolver and flattener stay silent about them by contract.

use std::fmt;

use tracing::warn;

use crate::defaults::{REQUIRED_SCALES, REQUIRED_SEMANTICS, SCALE_STEPS};
use crate::error::AliasError;
use crate::flatten::DEFAULT_KEY;
use crate::resolver::resolve_token_value;
use crate::token::{TokenType, TokenValue};
use crate::tree::TokenTree;

/// Groups a complete tree must contain, beyond the color scales and roles.
const REQUIRED_GROUPS: [&str; 8] = [
    "geometry.spacing",
    "geometry.border",
    "geometry.radius",
    "typography.fontFamily",
    "typography.fontSize",
    "typography.fontWeight",
    "typography.lineHeight",
    "effect.shadow",
];

/// Top-level groups whose leaves have a known expected type.
const TYPED_GROUPS: [&str; 4] = ["color", "geometry", "typography", "effect"];

/// One schema violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

impl ValidationIssue {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Validates a tree against the fixed token schema.
///
/// Returns an empty list for a conforming tree.
pub fn validate_tokens(tree: &TokenTree) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    check_structure(tree, &mut issues);
    check_leaves(tree, &mut issues);
    for issue in &issues {
        warn!(%issue, "token tree failed validation");
    }
    issues
}

fn check_structure(tree: &TokenTree, issues: &mut Vec<ValidationIssue>) {
    for scale in REQUIRED_SCALES {
        let path = format!("color.{}", scale);
        let Some(group) = tree.group(&path) else {
            issues.push(ValidationIssue::new(&path, "required color scale is missing"));
            continue;
        };
        for step in SCALE_STEPS.iter().copied().chain([DEFAULT_KEY]) {
            if group.get(step).and_then(|node| node.as_token()).is_none() {
                issues.push(ValidationIssue::new(
                    format!("{}.{}", path, step),
                    "required scale step is missing",
                ));
            }
        }
        if let Some(default) = group.get(DEFAULT_KEY).and_then(|node| node.as_token()) {
            if !default.is_alias() {
                issues.push(ValidationIssue::new(
                    format!("{}.{}", path, DEFAULT_KEY),
                    "scale DEFAULT should alias one of the scale's steps",
                ));
            }
        }
    }

    for role in REQUIRED_SEMANTICS {
        let path = format!("color.{}", role);
        if tree.token(&path).is_none() {
            issues.push(ValidationIssue::new(path, "required semantic token is missing"));
        }
    }

    for path in REQUIRED_GROUPS {
        if tree.group(path).is_none() {
            issues.push(ValidationIssue::new(path, "required group is missing"));
        }
    }
}

fn check_leaves(tree: &TokenTree, issues: &mut Vec<ValidationIssue>) {
    for (path, token) in tree.tokens() {
        let segments: Vec<&str> = path.split('.').collect();

        if segments
            .first()
            .is_some_and(|group| TYPED_GROUPS.contains(group))
        {
            let expected = TokenType::infer(&segments);
            if token.token_type != expected {
                issues.push(ValidationIssue::new(
                    &path,
                    format!("expected type '{}', found '{}'", expected, token.token_type),
                ));
            }
        }

        match token.parsed() {
            TokenValue::Literal(literal) => {
                if token.token_type == TokenType::Color && !is_valid_color_literal(&literal) {
                    issues.push(ValidationIssue::new(
                        &path,
                        format!("'{}' is not a valid hex color", literal),
                    ));
                }
            }
            TokenValue::Alias(target) => {
                if target.targets_default() {
                    issues.push(ValidationIssue::new(
                        &path,
                        format!(
                            "alias to '{}' flattens to {}, which is never emitted; alias the scale step instead",
                            target,
                            target.var_reference()
                        ),
                    ));
                }
                match resolve_token_value(tree, &path) {
                    Ok(_) => {}
                    Err(AliasError::Unresolved { to, .. }) => {
                        issues.push(ValidationIssue::new(
                            &path,
                            format!("alias chain reaches '{}', which is not a token", to),
                        ));
                    }
                    Err(err) => issues.push(ValidationIssue::new(&path, err.to_string())),
                }
            }
        }
    }
}

/// Returns true for hex colors (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`) and
/// for non-hex color syntax, which is passed through unchecked.
fn is_valid_color_literal(literal: &str) -> bool {
    let literal = literal.trim();
    if literal.is_empty() {
        return false;
    }
    match literal.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => true,
    }
}
