//! Dark-mode override pass.
//!
//! A fixed, non-generative transformation that re-points the semantic surface
//! and text roles at the dark end of the tree's own `neutral` scale, and swaps
//! the small shadows for heavier ones that stay visible on dark backgrounds.
//!
//! | Role | Neutral step |
//! |------|--------------|
//! | `color.background` | 950 |
//! | `color.surface` | 900 |
//! | `color.surfaceMuted` | 800 |
//! | `color.border` | 700 |
//! | `color.borderStrong` | 600 |
//! | `color.textMuted` | 200 |
//! | `color.text` | 50 |
//!
//! When the tree has no token at a neutral step, the role gets the slate
//! literal for that step instead. The pass only reads the neutral scale and
//! only writes the roles above and two shadows, so applying it twice gives the
//! same tree as applying it once, and brand scales (`primary`, `secondary`)
//! are never touched.

use tracing::debug;

use crate::defaults::slate;
use crate::tree::TokenTree;

/// Semantic roles and the neutral step each one follows in dark mode.
pub const DARK_SEMANTIC_STEPS: [(&str, &str); 7] = [
    ("background", "950"),
    ("surface", "900"),
    ("surfaceMuted", "800"),
    ("border", "700"),
    ("borderStrong", "600"),
    ("textMuted", "200"),
    ("text", "50"),
];

/// Small shadow used in dark mode.
pub const DARK_SHADOW_SM: &str = "0 1px 2px 0 rgb(0 0 0 / 0.4)";

/// Medium shadow used in dark mode.
pub const DARK_SHADOW_MD: &str = "0 4px 6px -1px rgb(0 0 0 / 0.5), 0 2px 4px -2px rgb(0 0 0 / 0.4)";

/// Returns a copy of `tree` with the dark-mode semantic overrides applied.
pub fn apply_dark_mode_overrides(tree: &TokenTree) -> TokenTree {
    let mut next = tree.clone();

    for (role, step) in DARK_SEMANTIC_STEPS {
        let neutral = format!("color.neutral.{}", step);
        let value = if tree.token(&neutral).is_some() {
            format!("{{{}}}", neutral)
        } else {
            debug!(step, "neutral step missing; using slate fallback");
            slate(step).unwrap_or_default().to_string()
        };
        next.write_value(&format!("color.{}", role), value);
    }

    next.write_value("effect.shadow.sm", DARK_SHADOW_SM.to_string());
    next.write_value("effect.shadow.md", DARK_SHADOW_MD.to_string());
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_tokens;
    use crate::resolver::{get_token_value, set_token_value};
    use crate::token::TokenType;
    use serde_json::json;

    #[test]
    fn test_roles_alias_neutral_steps() {
        let dark = apply_dark_mode_overrides(&default_tokens());
        for (role, step) in DARK_SEMANTIC_STEPS {
            assert_eq!(
                get_token_value(&dark, &format!("color.{}", role)),
                format!("{{color.neutral.{}}}", step)
            );
        }
        assert_eq!(get_token_value(&dark, "effect.shadow.sm"), DARK_SHADOW_SM);
        assert_eq!(get_token_value(&dark, "effect.shadow.md"), DARK_SHADOW_MD);
    }

    #[test]
    fn test_idempotent() {
        let once = apply_dark_mode_overrides(&default_tokens());
        let twice = apply_dark_mode_overrides(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_brand_scales_untouched() {
        let light = set_token_value(&default_tokens(), "color.primary.500", "#ff0000");
        let dark = apply_dark_mode_overrides(&light);
        assert_eq!(light.group("color.primary"), dark.group("color.primary"));
        assert_eq!(light.group("color.secondary"), dark.group("color.secondary"));
    }

    #[test]
    fn test_slate_fallback_when_neutral_missing() {
        let tree = TokenTree::from_value(json!({
            "color": {
                "neutral": { "950": { "value": "#000000", "type": "color" } }
            }
        }))
        .unwrap();

        let dark = apply_dark_mode_overrides(&tree);
        assert_eq!(get_token_value(&dark, "color.background"), "{color.neutral.950}");
        assert_eq!(get_token_value(&dark, "color.surface"), "#0f172a");
        assert_eq!(get_token_value(&dark, "color.text"), "#f8fafc");
        assert_eq!(dark.token("color.text").unwrap().token_type, TokenType::Color);
        assert_eq!(dark.token("effect.shadow.sm").unwrap().token_type, TokenType::Shadow);
    }

    #[test]
    fn test_empty_tree_gets_fallbacks() {
        let dark = apply_dark_mode_overrides(&TokenTree::new());
        assert_eq!(get_token_value(&dark, "color.border"), "#334155");
        assert_eq!(apply_dark_mode_overrides(&dark), dark);
    }
}
