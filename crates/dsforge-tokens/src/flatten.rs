//! Flattening a token tree into style variables.
//!
//! The flattener walks the tree depth first and emits one `--ds-*` variable per
//! token, named after the token's path with `-` separators:
//!
//! ```text
//! color.primary.500      -> --ds-color-primary-500
//! color.primary.DEFAULT  -> --ds-color-primary        (scale collapsing)
//! geometry.radius.md     -> --ds-geometry-radius-md
//! ```
//!
//! ## Scale collapsing
//!
//! A token keyed `DEFAULT` emits under its parent's name rather than
//! `...-DEFAULT`, so a scale's representative becomes the handle for the whole
//! scale (`var(--ds-color-primary)`), alongside the per-step variables.
//!
//! ## Single-hop aliases
//!
//! Alias values are rewritten to a variable reference, never dereferenced:
//! `{color.primary.500}` becomes `var(--ds-color-primary-500)`. Resolving
//! chains is left to the styling layer consuming the variables, which must
//! support nested `var()` indirection. A dangling alias therefore yields a
//! reference that simply never resolves, and a cyclic one cannot make the
//! flattener loop.
//!
//! ```rust
//! use dsforge_tokens::{default_tokens, flatten};
//!
//! let vars = flatten(&default_tokens());
//! assert_eq!(vars["--ds-color-primary"], "var(--ds-color-primary-500)");
//! assert_eq!(vars["--ds-color-primary-500"], "#3b82f6");
//! ```

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::token::{TokenValue, VAR_PREFIX};
use crate::tree::{is_meta_key, TokenGroup, TokenNode, TokenTree};

/// Key of a scale's representative token.
pub const DEFAULT_KEY: &str = "DEFAULT";

/// Flat mapping of style-variable name to value.
pub type StyleVariables = BTreeMap<String, String>;

/// Flattens a tree into style variables. Pure and total.
pub fn flatten(tree: &TokenTree) -> StyleVariables {
    let mut vars = StyleVariables::new();
    flatten_group(tree.root(), "", &mut vars);
    vars
}

/// Converts a raw token value into its style-variable form.
///
/// `{a.b.c}` becomes `var(--ds-a-b-c)`; anything else passes through.
pub fn style_value(raw: &str) -> String {
    TokenValue::parse(raw).to_style_value()
}

/// Renders variables as a CSS rule block for `selector`, in key order.
///
/// ```rust
/// use dsforge_tokens::{to_css, StyleVariables};
///
/// let mut vars = StyleVariables::new();
/// vars.insert("--ds-color-text".into(), "#0f172a".into());
/// assert_eq!(to_css(&vars, ":root"), ":root {\n  --ds-color-text: #0f172a;\n}\n");
/// ```
pub fn to_css(vars: &StyleVariables, selector: &str) -> String {
    let mut css = String::new();
    let _ = writeln!(css, "{} {{", selector);
    for (name, value) in vars {
        let _ = writeln!(css, "  {}: {};", name, value);
    }
    css.push_str("}\n");
    css
}

/// Flattens a tree and renders it as a `:root` block.
pub fn flatten_to_css(tree: &TokenTree) -> String {
    to_css(&flatten(tree), ":root")
}

fn flatten_group(group: &TokenGroup, prefix: &str, vars: &mut StyleVariables) {
    for (key, node) in group {
        if is_meta_key(key) {
            continue;
        }
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}-{}", prefix, key)
        };

        match node {
            TokenNode::Token(token) => {
                let target = if key == DEFAULT_KEY && !prefix.is_empty() {
                    prefix
                } else {
                    path.as_str()
                };
                vars.insert(format!("{}{}", VAR_PREFIX, target), style_value(&token.value));
            }
            TokenNode::Group(children) => flatten_group(children, &path, vars),
            TokenNode::Meta(_) => {}
        }
    }
}
