//! Per-component source fragments, embedded at compile time.
//!
//! Fragments are plain text, never rendered as templates themselves: they
//! are handed to the strategy skeletons as context values. That keeps
//! Angular `{{ }}` interpolation and JSX `style={{ }}` literals intact.
//!
//! | File | Used by |
//! |------|---------|
//! | `styles.css` | all strategies |
//! | `element.html` | custom element `render()` (template literal body) |
//! | `view.jsx` | React function component body |
//! | `view.ng.html` | Angular inline template |
//! | `members.wc.ts` | extra custom element members (optional) |
//! | `members.ng.ts` | extra Angular component members (optional) |

use crate::catalog::ComponentKind;

/// The embedded sources for one component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentFragments {
    pub styles: &'static str,
    pub element: &'static str,
    pub view_jsx: &'static str,
    pub view_ng: &'static str,
    pub members_wc: Option<&'static str>,
    pub members_ng: Option<&'static str>,
}

macro_rules! component_file {
    ($id:literal, $file:literal) => {
        include_str!(concat!("../templates/components/", $id, "/", $file))
    };
}

macro_rules! fragments {
    ($id:literal) => {
        fragments!($id, None, None)
    };
    ($id:literal, $members_wc:expr, $members_ng:expr) => {
        ComponentFragments {
            styles: component_file!($id, "styles.css"),
            element: component_file!($id, "element.html"),
            view_jsx: component_file!($id, "view.jsx"),
            view_ng: component_file!($id, "view.ng.html"),
            members_wc: $members_wc,
            members_ng: $members_ng,
        }
    };
}

/// Returns the fragments of `kind`.
pub fn fragments(kind: ComponentKind) -> ComponentFragments {
    match kind {
        ComponentKind::Button => fragments!("button"),
        ComponentKind::Input => fragments!("input"),
        ComponentKind::Badge => fragments!("badge"),
        ComponentKind::Avatar => fragments!(
            "avatar",
            Some(component_file!("avatar", "members.wc.ts")),
            Some(component_file!("avatar", "members.ng.ts"))
        ),
        ComponentKind::Checkbox => fragments!("checkbox"),
        ComponentKind::Switch => fragments!("switch"),
        ComponentKind::Progress => fragments!(
            "progress",
            Some(component_file!("progress", "members.wc.ts")),
            Some(component_file!("progress", "members.ng.ts"))
        ),
        ComponentKind::Card => fragments!("card"),
        ComponentKind::Alert => fragments!(
            "alert",
            None,
            Some(component_file!("alert", "members.ng.ts"))
        ),
        ComponentKind::Select => fragments!("select"),
        ComponentKind::Tabs => fragments!(
            "tabs",
            Some(component_file!("tabs", "members.wc.ts")),
            Some(component_file!("tabs", "members.ng.ts"))
        ),
        ComponentKind::Tooltip => fragments!("tooltip"),
        ComponentKind::Toast => fragments!(
            "toast",
            None,
            Some(component_file!("toast", "members.ng.ts"))
        ),
        ComponentKind::Modal => fragments!("modal"),
        ComponentKind::Navbar => fragments!("navbar"),
        ComponentKind::Table => fragments!("table"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_component_has_fragments() {
        for kind in ComponentKind::ALL {
            let f = fragments(kind);
            assert!(!f.styles.trim().is_empty(), "{} styles", kind);
            assert!(!f.element.trim().is_empty(), "{} element", kind);
            assert!(f.view_jsx.contains("return"), "{} jsx", kind);
            assert!(!f.view_ng.trim().is_empty(), "{} ng", kind);
        }
    }

    #[test]
    fn test_styles_use_only_ds_variables() {
        for kind in ComponentKind::ALL {
            let styles = fragments(kind).styles;
            for (index, _) in styles.match_indices("var(") {
                assert!(
                    styles[index..].starts_with("var(--ds-"),
                    "{} uses a non --ds- variable",
                    kind
                );
            }
        }
    }

    #[test]
    fn test_element_markup_is_template_literal_safe() {
        for kind in ComponentKind::ALL {
            let element = fragments(kind).element;
            assert!(!element.contains('\\'), "{} element has a backslash", kind);
        }
    }
}
