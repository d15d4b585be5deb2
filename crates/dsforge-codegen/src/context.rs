//! The template context for one component.
//!
//! Everything the strategy skeletons interpolate is precomputed here as
//! plain strings, so the templates stay free of naming and typing logic.

use serde::Serialize;

use crate::catalog::{ComponentKind, EventSpec, PropKind, PropSpec};
use crate::fragments::ComponentFragments;
use crate::naming::{kebab_case, pascal_case};

const REACT_HOOKS: [&str; 4] = ["useState", "useEffect", "useMemo", "useRef"];

/// Serialized into every skeleton render.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentContext {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    /// `Button`
    pub pascal: String,
    /// `button`
    pub kebab: String,
    /// `ds-button`, the custom element and its wrapper directive.
    pub tag: String,
    /// `app-button`, the native Angular component.
    pub selector: String,
    /// `DsButton`
    pub class_name: String,
    pub display: &'static str,
    pub slot: bool,
    pub props: Vec<PropContext>,
    pub events: Vec<EventContext>,
    /// Whether any prop carries user text that must be escaped in markup.
    pub has_text: bool,
    pub react_hooks: Vec<&'static str>,
    pub angular_lifecycle: Vec<&'static str>,
    pub styles: &'static str,
    pub element: &'static str,
    pub view_jsx: &'static str,
    pub view_ng: &'static str,
    pub members_wc: Option<&'static str>,
    pub members_ng: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PropContext {
    pub name: &'static str,
    pub attr: String,
    pub kind: &'static str,
    pub ts_type: String,
    /// TypeScript literal of the default value.
    pub default: String,
    pub options: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventContext {
    pub name: &'static str,
    pub dom_event: &'static str,
    pub selector: &'static str,
    pub detail_type: &'static str,
    pub detail: &'static str,
    pub effect: Option<&'static str>,
    /// `ds-value-change`
    pub custom_event: String,
    /// `onValueChange`
    pub handler: String,
}

impl ComponentContext {
    pub fn new(kind: ComponentKind, fragments: &ComponentFragments) -> Self {
        let definition = kind.definition();
        let api = kind.api();
        let pascal = pascal_case(definition.name);

        let props: Vec<PropContext> = api.props.iter().map(PropContext::new).collect();
        let events: Vec<EventContext> = api.events.iter().map(EventContext::new).collect();

        let has_text = api
            .props
            .iter()
            .any(|prop| matches!(prop.kind, PropKind::Text | PropKind::List(_)));

        let react_hooks = REACT_HOOKS
            .into_iter()
            .filter(|hook| fragments.view_jsx.contains(&format!("{}(", hook)))
            .collect();

        let mut angular_lifecycle = Vec::new();
        if !props.is_empty() {
            angular_lifecycle.push("OnChanges");
        }
        if !events.is_empty() {
            angular_lifecycle.extend(["OnDestroy", "OnInit"]);
        }

        Self {
            id: definition.id,
            name: definition.name,
            description: definition.description,
            category: definition.category.as_str(),
            kebab: kebab_case(definition.id),
            tag: format!("ds-{}", definition.id),
            selector: format!("app-{}", definition.id),
            class_name: format!("Ds{}", pascal),
            pascal,
            display: api.display,
            slot: api.slot,
            props,
            events,
            has_text,
            react_hooks,
            angular_lifecycle,
            styles: fragments.styles,
            element: fragments.element,
            view_jsx: fragments.view_jsx,
            view_ng: fragments.view_ng,
            members_wc: fragments.members_wc,
            members_ng: fragments.members_ng,
        }
    }
}

impl PropContext {
    fn new(spec: &PropSpec) -> Self {
        let (kind, ts_type, default, options) = match spec.kind {
            PropKind::Text => ("text", "string".to_string(), "''".to_string(), Vec::new()),
            PropKind::Flag => ("flag", "boolean".to_string(), "false".to_string(), Vec::new()),
            PropKind::Number(default) => ("number", "number".to_string(), default.to_string(), Vec::new()),
            PropKind::Choice(options) => (
                "choice",
                options
                    .iter()
                    .map(|option| format!("'{}'", option))
                    .collect::<Vec<_>>()
                    .join(" | "),
                options
                    .first()
                    .map(|option| format!("'{}'", option))
                    .unwrap_or_else(|| "''".to_string()),
                options.to_vec(),
            ),
            PropKind::List(element) => ("list", format!("Array<{}>", element), "[]".to_string(), Vec::new()),
        };

        Self {
            name: spec.name,
            attr: kebab_case(spec.name),
            kind,
            ts_type,
            default,
            options,
        }
    }
}

impl EventContext {
    fn new(spec: &EventSpec) -> Self {
        Self {
            name: spec.name,
            dom_event: spec.dom_event,
            selector: spec.selector,
            detail_type: spec.detail_type,
            detail: spec.detail,
            effect: spec.effect,
            custom_event: format!("ds-{}", kebab_case(spec.name)),
            handler: format!("on{}", pascal_case(spec.name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragments::fragments;

    fn context(kind: ComponentKind) -> ComponentContext {
        ComponentContext::new(kind, &fragments(kind))
    }

    #[test]
    fn test_names() {
        let ctx = context(ComponentKind::Switch);
        assert_eq!(ctx.pascal, "Switch");
        assert_eq!(ctx.tag, "ds-switch");
        assert_eq!(ctx.selector, "app-switch");
        assert_eq!(ctx.class_name, "DsSwitch");
        assert_eq!(ctx.events[0].custom_event, "ds-checked-change");
        assert_eq!(ctx.events[0].handler, "onCheckedChange");
    }

    #[test]
    fn test_prop_types() {
        let ctx = context(ComponentKind::Button);
        let variant = &ctx.props[0];
        assert_eq!(variant.kind, "choice");
        assert_eq!(variant.default, "'primary'");
        assert!(variant.ts_type.starts_with("'primary' | 'secondary'"));

        let ctx = context(ComponentKind::Progress);
        assert_eq!(ctx.props[1].default, "100");

        let ctx = context(ComponentKind::Select);
        let options = ctx.props.iter().find(|p| p.name == "options").unwrap();
        assert_eq!(options.ts_type, "Array<{ value: string; label: string }>");
        assert_eq!(options.default, "[]");
    }

    #[test]
    fn test_react_hooks_detected_from_view() {
        assert_eq!(
            context(ComponentKind::Checkbox).react_hooks,
            vec!["useState", "useEffect"]
        );
        assert!(context(ComponentKind::Card).react_hooks.is_empty());
    }

    #[test]
    fn test_has_text() {
        assert!(!context(ComponentKind::Button).has_text);
        assert!(!context(ComponentKind::Badge).has_text);
        assert!(context(ComponentKind::Table).has_text);
    }
}
