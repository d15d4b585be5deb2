//! Built-in default token trees.
//!
//! The defaults are assembled in code rather than parsed from an embedded
//! document, so constructing them cannot fail. New brands seed their light
//! and dark themes from these.

use crate::dark::apply_dark_mode_overrides;
use crate::flatten::DEFAULT_KEY;
use crate::token::{Token, TokenType};
use crate::tree::{TokenGroup, TokenNode, TokenTree};

/// Numeric steps of a color scale, lightest first.
pub const SCALE_STEPS: [&str; 11] = [
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950",
];

/// Step a scale's `DEFAULT` aliases in the default trees.
pub const BASE_STEP: &str = "500";

/// Color scales every complete tree carries.
pub const REQUIRED_SCALES: [&str; 6] = ["primary", "secondary", "neutral", "success", "warning", "danger"];

/// Semantic color roles every complete tree carries.
pub const REQUIRED_SEMANTICS: [&str; 5] = ["background", "surface", "text", "textMuted", "border"];

/// Slate shades, used as the neutral default and as the dark-mode fallback.
pub const SLATE: [&str; 11] = [
    "#f8fafc", "#f1f5f9", "#e2e8f0", "#cbd5e1", "#94a3b8", "#64748b", "#475569", "#334155",
    "#1e293b", "#0f172a", "#020617",
];

const BLUE: [&str; 11] = [
    "#eff6ff", "#dbeafe", "#bfdbfe", "#93c5fd", "#60a5fa", "#3b82f6", "#2563eb", "#1d4ed8",
    "#1e40af", "#1e3a8a", "#172554",
];

const VIOLET: [&str; 11] = [
    "#f5f3ff", "#ede9fe", "#ddd6fe", "#c4b5fd", "#a78bfa", "#8b5cf6", "#7c3aed", "#6d28d9",
    "#5b21b6", "#4c1d95", "#2e1065",
];

const GREEN: [&str; 11] = [
    "#f0fdf4", "#dcfce7", "#bbf7d0", "#86efac", "#4ade80", "#22c55e", "#16a34a", "#15803d",
    "#166534", "#14532d", "#052e16",
];

const AMBER: [&str; 11] = [
    "#fffbeb", "#fef3c7", "#fde68a", "#fcd34d", "#fbbf24", "#f59e0b", "#d97706", "#b45309",
    "#92400e", "#78350f", "#451a03",
];

const RED: [&str; 11] = [
    "#fef2f2", "#fee2e2", "#fecaca", "#fca5a5", "#f87171", "#ef4444", "#dc2626", "#b91c1c",
    "#991b1b", "#7f1d1d", "#450a0a",
];

/// Returns the slate literal for a numeric step.
pub fn slate(step: &str) -> Option<&'static str> {
    SCALE_STEPS
        .iter()
        .position(|s| *s == step)
        .map(|index| SLATE[index])
}

/// The default light-mode token tree.
pub fn default_tokens() -> TokenTree {
    let mut root = TokenGroup::new();
    root.insert("color".into(), color());
    root.insert("geometry".into(), geometry());
    root.insert("typography".into(), typography());
    root.insert("effect".into(), effect());
    TokenTree::from_root(root)
}

/// The default dark-mode token tree: the light tree with the dark overrides applied.
pub fn default_dark_tokens() -> TokenTree {
    apply_dark_mode_overrides(&default_tokens())
}

fn leaf(value: &str, token_type: TokenType) -> TokenNode {
    TokenNode::Token(Token::new(value, token_type))
}

fn alias(path: &str, token_type: TokenType) -> TokenNode {
    leaf(&format!("{{{}}}", path), token_type)
}

fn group<'a>(entries: impl IntoIterator<Item = (&'a str, TokenNode)>) -> TokenNode {
    TokenNode::Group(
        entries
            .into_iter()
            .map(|(key, node)| (key.to_string(), node))
            .collect(),
    )
}

fn scale(name: &str, shades: [&str; 11]) -> TokenNode {
    let mut steps: TokenGroup = SCALE_STEPS
        .iter()
        .zip(shades)
        .map(|(step, shade)| (step.to_string(), leaf(shade, TokenType::Color)))
        .collect();
    steps.insert(
        DEFAULT_KEY.to_string(),
        alias(&format!("color.{}.{}", name, BASE_STEP), TokenType::Color),
    );
    TokenNode::Group(steps)
}

fn color() -> TokenNode {
    use TokenType::Color;

    group([
        ("primary", scale("primary", BLUE)),
        ("secondary", scale("secondary", VIOLET)),
        ("neutral", scale("neutral", SLATE)),
        ("success", scale("success", GREEN)),
        ("warning", scale("warning", AMBER)),
        ("danger", scale("danger", RED)),
        ("background", leaf("#ffffff", Color)),
        ("surface", alias("color.neutral.50", Color)),
        ("surfaceMuted", alias("color.neutral.100", Color)),
        ("border", alias("color.neutral.200", Color)),
        ("borderStrong", alias("color.neutral.300", Color)),
        ("textMuted", alias("color.neutral.500", Color)),
        ("text", alias("color.neutral.900", Color)),
        ("onPrimary", leaf("#ffffff", Color)),
        ("focusRing", alias("color.primary.400", Color)),
    ])
}

fn geometry() -> TokenNode {
    use TokenType::Dimension;

    let spacing = [
        ("0", "0"),
        ("1", "0.25rem"),
        ("2", "0.5rem"),
        ("3", "0.75rem"),
        ("4", "1rem"),
        ("5", "1.25rem"),
        ("6", "1.5rem"),
        ("8", "2rem"),
        ("10", "2.5rem"),
        ("12", "3rem"),
        ("16", "4rem"),
    ];

    group([
        (
            "spacing",
            group(spacing.map(|(key, value)| (key, leaf(value, Dimension)))),
        ),
        (
            "border",
            group([(
                "width",
                group([
                    ("thin", leaf("1px", Dimension)),
                    ("thick", leaf("2px", Dimension)),
                    (DEFAULT_KEY, alias("geometry.border.width.thin", Dimension)),
                ]),
            )]),
        ),
        (
            "radius",
            group([
                ("none", leaf("0", Dimension)),
                ("sm", leaf("0.125rem", Dimension)),
                ("md", leaf("0.375rem", Dimension)),
                ("lg", leaf("0.5rem", Dimension)),
                ("xl", leaf("0.75rem", Dimension)),
                ("full", leaf("9999px", Dimension)),
                (DEFAULT_KEY, alias("geometry.radius.md", Dimension)),
            ]),
        ),
    ])
}

fn typography() -> TokenNode {
    use TokenType::{Dimension, FontFamily, FontWeight, Number};

    let variant = |family: &str, size: &str, weight: &str, line_height: &str| {
        group([
            ("fontFamily", alias(&format!("typography.fontFamily.{}", family), FontFamily)),
            ("fontSize", alias(&format!("typography.fontSize.{}", size), Dimension)),
            ("fontWeight", alias(&format!("typography.fontWeight.{}", weight), FontWeight)),
            ("lineHeight", alias(&format!("typography.lineHeight.{}", line_height), Number)),
        ])
    };

    group([
        (
            "fontFamily",
            group([
                ("sans", leaf("Inter, ui-sans-serif, system-ui, sans-serif", FontFamily)),
                ("serif", leaf("Georgia, ui-serif, serif", FontFamily)),
                ("mono", leaf("'JetBrains Mono', ui-monospace, monospace", FontFamily)),
            ]),
        ),
        (
            "fontSize",
            group([
                ("xs", leaf("0.75rem", Dimension)),
                ("sm", leaf("0.875rem", Dimension)),
                ("base", leaf("1rem", Dimension)),
                ("lg", leaf("1.125rem", Dimension)),
                ("xl", leaf("1.25rem", Dimension)),
                ("2xl", leaf("1.5rem", Dimension)),
                ("3xl", leaf("1.875rem", Dimension)),
            ]),
        ),
        (
            "fontWeight",
            group([
                ("normal", leaf("400", FontWeight)),
                ("medium", leaf("500", FontWeight)),
                ("semibold", leaf("600", FontWeight)),
                ("bold", leaf("700", FontWeight)),
            ]),
        ),
        (
            "lineHeight",
            group([
                ("tight", leaf("1.25", Number)),
                ("normal", leaf("1.5", Number)),
                ("relaxed", leaf("1.75", Number)),
            ]),
        ),
        (
            "variants",
            group([
                ("heading", variant("sans", "2xl", "bold", "tight")),
                ("body", variant("sans", "base", "normal", "normal")),
                ("label", variant("sans", "sm", "medium", "normal")),
                ("caption", variant("sans", "xs", "normal", "normal")),
                ("code", variant("mono", "sm", "normal", "relaxed")),
            ]),
        ),
    ])
}

fn effect() -> TokenNode {
    use TokenType::Shadow;

    group([(
        "shadow",
        group([
            ("sm", leaf("0 1px 2px 0 rgb(0 0 0 / 0.05)", Shadow)),
            (
                "md",
                leaf("0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)", Shadow),
            ),
            (
                "lg",
                leaf("0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)", Shadow),
            ),
            (
                "xl",
                leaf("0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)", Shadow),
            ),
            (DEFAULT_KEY, alias("effect.shadow.md", Shadow)),
        ]),
    )])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{enumerate_scale, get_token_value};

    #[test]
    fn test_default_has_top_level_groups() {
        let tree = default_tokens();
        let groups: Vec<&str> = tree.groups().collect();
        assert_eq!(groups, vec!["color", "effect", "geometry", "typography"]);
    }

    #[test]
    fn test_required_scales_complete() {
        let tree = default_tokens();
        for name in REQUIRED_SCALES {
            let scale = enumerate_scale(&tree, &format!("color.{}", name));
            assert_eq!(scale.len(), 12, "scale {} incomplete", name);
            assert_eq!(scale[DEFAULT_KEY], format!("{{color.{}.500}}", name));
        }
    }

    #[test]
    fn test_primary_500_literal() {
        assert_eq!(get_token_value(&default_tokens(), "color.primary.500"), "#3b82f6");
    }

    #[test]
    fn test_slate_lookup() {
        assert_eq!(slate("950"), Some("#020617"));
        assert_eq!(slate("50"), Some("#f8fafc"));
        assert_eq!(slate("DEFAULT"), None);
    }

    #[test]
    fn test_dark_default_differs_only_in_semantics() {
        let light = default_tokens();
        let dark = default_dark_tokens();
        assert_ne!(light, dark);
        assert_eq!(light.group("color.primary"), dark.group("color.primary"));
        assert_eq!(get_token_value(&dark, "color.background"), "{color.neutral.950}");
    }
}
