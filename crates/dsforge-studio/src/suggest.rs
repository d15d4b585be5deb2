//! Theme suggestion.
//!
//! A suggester turns a free-text description ("calm fintech, deep greens")
//! into a partial token tree. How it does so is outside dsforge; this module
//! only fixes the interface and the merge policy.

use dsforge_tokens::TokenTree;

/// Produces a partial token tree from a description.
///
/// Closures implement it directly:
///
/// ```rust
/// use dsforge_studio::ThemeSuggester;
/// use dsforge_tokens::TokenTree;
///
/// let never = |_: &str| -> Option<TokenTree> { None };
/// assert!(never.suggest("anything").is_none());
/// ```
pub trait ThemeSuggester {
    /// Returns a patch, or `None` when there is nothing to suggest.
    fn suggest(&self, description: &str) -> Option<TokenTree>;
}

impl<F> ThemeSuggester for F
where
    F: Fn(&str) -> Option<TokenTree>,
{
    fn suggest(&self, description: &str) -> Option<TokenTree> {
        self(description)
    }
}

/// Merges a suggested patch into `tree`: each top-level group the patch
/// carries replaces the tree's group wholesale; other groups are kept.
pub fn merge_patch(tree: &TokenTree, patch: &TokenTree) -> TokenTree {
    tree.merge_shallow(patch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsforge_tokens::{default_tokens, get_token_value};
    use serde_json::json;

    #[test]
    fn test_patch_groups_win() {
        let patch = TokenTree::from_value(json!({
            "color": { "primary": { "500": { "value": "#16a34a", "type": "color" } } }
        }))
        .unwrap();

        let merged = merge_patch(&default_tokens(), &patch);
        assert_eq!(get_token_value(&merged, "color.primary.500"), "#16a34a");
        // The color group was replaced whole.
        assert_eq!(get_token_value(&merged, "color.primary.600"), "");
        assert_eq!(get_token_value(&merged, "color.background"), "");
        // Untouched groups survive.
        assert_eq!(
            get_token_value(&merged, "geometry.spacing.4"),
            get_token_value(&default_tokens(), "geometry.spacing.4")
        );
    }

    #[test]
    fn test_empty_patch_is_identity() {
        assert_eq!(merge_patch(&default_tokens(), &TokenTree::new()), default_tokens());
    }
}
