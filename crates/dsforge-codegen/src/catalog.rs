//! The static component catalog.
//!
//! Sixteen components in three tiers. Each has a public definition (id,
//! display name, category, description) and an API description the
//! generators use to emit typed props, attributes and events consistently
//! across strategies.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CodegenError;

/// Composition tier of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Atom,
    Molecule,
    Organism,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Atom => "atom",
            Category::Molecule => "molecule",
            Category::Organism => "organism",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog entry as shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComponentDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub description: &'static str,
}

/// Every component the generators know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentKind {
    Button,
    Input,
    Badge,
    Avatar,
    Checkbox,
    Switch,
    Progress,
    Card,
    Alert,
    Select,
    Tabs,
    Tooltip,
    Toast,
    Modal,
    Navbar,
    Table,
}

/// How a prop is typed and reflected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropKind {
    /// Free text, reflected as an attribute.
    Text,
    /// Boolean, reflected as attribute presence.
    Flag,
    /// Number with the given default, reflected as its decimal text.
    Number(u32),
    /// One of a fixed set of strings; the first is the default.
    Choice(&'static [&'static str]),
    /// Array of the given TypeScript element type, reflected as JSON.
    List(&'static str),
}

/// One input of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropSpec {
    pub name: &'static str,
    pub kind: PropKind,
}

/// One output of a component.
///
/// `selector` and `dom_event` locate the source inside the rendered markup.
/// `detail` and `effect` are TypeScript expressions evaluated in the custom
/// element with the matched element bound to `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventSpec {
    pub name: &'static str,
    pub dom_event: &'static str,
    pub selector: &'static str,
    pub detail_type: &'static str,
    pub detail: &'static str,
    pub effect: Option<&'static str>,
}

/// Inputs, outputs and host layout of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentApi {
    pub props: &'static [PropSpec],
    pub events: &'static [EventSpec],
    /// Whether the component projects child content.
    pub slot: bool,
    /// CSS `display` of the host element.
    pub display: &'static str,
}

const fn prop(name: &'static str, kind: PropKind) -> PropSpec {
    PropSpec { name, kind }
}

const SIZES: &[&str] = &["md", "sm", "lg"];
const STATUS: &[&str] = &["info", "success", "warning", "danger"];

const NO_EVENTS: &[EventSpec] = &[];

const BUTTON: ComponentApi = ComponentApi {
    props: &[
        prop(
            "variant",
            PropKind::Choice(&["primary", "secondary", "outline", "ghost", "danger"]),
        ),
        prop("size", PropKind::Choice(SIZES)),
        prop("disabled", PropKind::Flag),
    ],
    events: &[EventSpec {
        name: "press",
        dom_event: "click",
        selector: "button",
        detail_type: "null",
        detail: "null",
        effect: None,
    }],
    slot: true,
    display: "inline-block",
};

const INPUT: ComponentApi = ComponentApi {
    props: &[
        prop("label", PropKind::Text),
        prop("placeholder", PropKind::Text),
        prop("value", PropKind::Text),
        prop(
            "type",
            PropKind::Choice(&["text", "email", "password", "search", "tel", "url"]),
        ),
        prop("hint", PropKind::Text),
        prop("invalid", PropKind::Flag),
        prop("disabled", PropKind::Flag),
    ],
    events: &[EventSpec {
        name: "valueChange",
        dom_event: "input",
        selector: "input",
        detail_type: "string",
        detail: "(target as HTMLInputElement).value",
        effect: None,
    }],
    slot: false,
    display: "block",
};

const BADGE: ComponentApi = ComponentApi {
    props: &[prop(
        "variant",
        PropKind::Choice(&["neutral", "primary", "success", "warning", "danger"]),
    )],
    events: NO_EVENTS,
    slot: true,
    display: "inline-flex",
};

const AVATAR: ComponentApi = ComponentApi {
    props: &[
        prop("src", PropKind::Text),
        prop("name", PropKind::Text),
        prop("size", PropKind::Choice(SIZES)),
    ],
    events: NO_EVENTS,
    slot: false,
    display: "inline-flex",
};

const CHECKBOX: ComponentApi = ComponentApi {
    props: &[
        prop("label", PropKind::Text),
        prop("checked", PropKind::Flag),
        prop("disabled", PropKind::Flag),
    ],
    events: &[EventSpec {
        name: "checkedChange",
        dom_event: "change",
        selector: "input",
        detail_type: "boolean",
        detail: "this.checked",
        effect: Some("this.checked = (target as HTMLInputElement).checked;"),
    }],
    slot: false,
    display: "inline-flex",
};

const SWITCH: ComponentApi = ComponentApi {
    props: &[
        prop("label", PropKind::Text),
        prop("checked", PropKind::Flag),
        prop("disabled", PropKind::Flag),
    ],
    events: &[EventSpec {
        name: "checkedChange",
        dom_event: "click",
        selector: "[role=\"switch\"]",
        detail_type: "boolean",
        detail: "this.checked",
        effect: Some("this.checked = !this.checked;"),
    }],
    slot: false,
    display: "inline-flex",
};

const PROGRESS: ComponentApi = ComponentApi {
    props: &[
        prop("value", PropKind::Number(0)),
        prop("max", PropKind::Number(100)),
        prop("label", PropKind::Text),
    ],
    events: NO_EVENTS,
    slot: false,
    display: "block",
};

const CARD: ComponentApi = ComponentApi {
    props: &[
        prop("heading", PropKind::Text),
        prop("subheading", PropKind::Text),
        prop("elevated", PropKind::Flag),
    ],
    events: NO_EVENTS,
    slot: true,
    display: "block",
};

const ALERT: ComponentApi = ComponentApi {
    props: &[
        prop("variant", PropKind::Choice(STATUS)),
        prop("heading", PropKind::Text),
        prop("dismissible", PropKind::Flag),
    ],
    events: &[EventSpec {
        name: "dismiss",
        dom_event: "click",
        selector: "[data-dismiss]",
        detail_type: "null",
        detail: "null",
        effect: Some("this.hidden = true;"),
    }],
    slot: true,
    display: "block",
};

const SELECT: ComponentApi = ComponentApi {
    props: &[
        prop("label", PropKind::Text),
        prop("value", PropKind::Text),
        prop("placeholder", PropKind::Text),
        prop("options", PropKind::List("{ value: string; label: string }")),
        prop("disabled", PropKind::Flag),
    ],
    events: &[EventSpec {
        name: "valueChange",
        dom_event: "change",
        selector: "select",
        detail_type: "string",
        detail: "this.value",
        effect: Some("this.value = (target as HTMLSelectElement).value;"),
    }],
    slot: false,
    display: "block",
};

const TABS: ComponentApi = ComponentApi {
    props: &[
        prop("tabs", PropKind::List("{ id: string; label: string }")),
        prop("active", PropKind::Text),
    ],
    events: &[EventSpec {
        name: "tabChange",
        dom_event: "click",
        selector: "[data-tab]",
        detail_type: "string",
        detail: "this.active",
        effect: Some("this.active = target.dataset.tab ?? '';"),
    }],
    slot: true,
    display: "block",
};

const TOOLTIP: ComponentApi = ComponentApi {
    props: &[
        prop("text", PropKind::Text),
        prop("placement", PropKind::Choice(&["top", "bottom", "left", "right"])),
    ],
    events: NO_EVENTS,
    slot: true,
    display: "inline-block",
};

const TOAST: ComponentApi = ComponentApi {
    props: &[
        prop("variant", PropKind::Choice(STATUS)),
        prop("heading", PropKind::Text),
        prop("message", PropKind::Text),
    ],
    events: &[EventSpec {
        name: "dismiss",
        dom_event: "click",
        selector: "[data-dismiss]",
        detail_type: "null",
        detail: "null",
        effect: Some("this.hidden = true;"),
    }],
    slot: false,
    display: "block",
};

const MODAL: ComponentApi = ComponentApi {
    props: &[prop("open", PropKind::Flag), prop("heading", PropKind::Text)],
    events: &[EventSpec {
        name: "dismiss",
        dom_event: "click",
        selector: "[data-dismiss]",
        detail_type: "null",
        detail: "null",
        effect: Some("this.open = false;"),
    }],
    slot: true,
    display: "contents",
};

const NAVBAR: ComponentApi = ComponentApi {
    props: &[
        prop("brand", PropKind::Text),
        prop(
            "links",
            PropKind::List("{ label: string; href: string; active?: boolean }"),
        ),
    ],
    events: &[EventSpec {
        name: "navigate",
        dom_event: "click",
        selector: "a[data-href]",
        detail_type: "string",
        detail: "target.dataset.href ?? ''",
        effect: None,
    }],
    slot: true,
    display: "block",
};

const TABLE: ComponentApi = ComponentApi {
    props: &[
        prop("columns", PropKind::List("{ key: string; label: string }")),
        prop("rows", PropKind::List("Record<string, string | number>")),
        prop("striped", PropKind::Flag),
    ],
    events: NO_EVENTS,
    slot: false,
    display: "block",
};

impl ComponentKind {
    /// All components in catalog order.
    pub const ALL: [ComponentKind; 16] = [
        ComponentKind::Button,
        ComponentKind::Input,
        ComponentKind::Badge,
        ComponentKind::Avatar,
        ComponentKind::Checkbox,
        ComponentKind::Switch,
        ComponentKind::Progress,
        ComponentKind::Card,
        ComponentKind::Alert,
        ComponentKind::Select,
        ComponentKind::Tabs,
        ComponentKind::Tooltip,
        ComponentKind::Toast,
        ComponentKind::Modal,
        ComponentKind::Navbar,
        ComponentKind::Table,
    ];

    pub fn id(&self) -> &'static str {
        self.definition().id
    }

    /// Parses a component id, `None` for anything not in the catalog.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    pub fn definition(&self) -> ComponentDefinition {
        use Category::*;

        let (id, name, category, description) = match self {
            ComponentKind::Button => ("button", "Button", Atom, "Clickable action with variants and sizes"),
            ComponentKind::Input => ("input", "Input", Atom, "Single-line text field with label and hint"),
            ComponentKind::Badge => ("badge", "Badge", Atom, "Compact status or count label"),
            ComponentKind::Avatar => ("avatar", "Avatar", Atom, "User image with initials fallback"),
            ComponentKind::Checkbox => ("checkbox", "Checkbox", Atom, "Binary choice with a label"),
            ComponentKind::Switch => ("switch", "Switch", Atom, "On/off toggle"),
            ComponentKind::Progress => ("progress", "Progress", Atom, "Determinate progress bar"),
            ComponentKind::Card => ("card", "Card", Molecule, "Surface grouping related content"),
            ComponentKind::Alert => ("alert", "Alert", Molecule, "Inline status message"),
            ComponentKind::Select => ("select", "Select", Molecule, "Dropdown choice from a list of options"),
            ComponentKind::Tabs => ("tabs", "Tabs", Molecule, "Switches between related panels"),
            ComponentKind::Tooltip => ("tooltip", "Tooltip", Molecule, "Hint shown on hover or focus"),
            ComponentKind::Toast => ("toast", "Toast", Molecule, "Transient notification"),
            ComponentKind::Modal => ("modal", "Modal", Organism, "Dialog over a backdrop"),
            ComponentKind::Navbar => ("navbar", "Navbar", Organism, "Top-level site navigation"),
            ComponentKind::Table => ("table", "Table", Organism, "Tabular data with column headers"),
        };

        ComponentDefinition {
            id,
            name,
            category,
            description,
        }
    }

    pub fn category(&self) -> Category {
        self.definition().category
    }

    pub fn api(&self) -> &'static ComponentApi {
        match self {
            ComponentKind::Button => &BUTTON,
            ComponentKind::Input => &INPUT,
            ComponentKind::Badge => &BADGE,
            ComponentKind::Avatar => &AVATAR,
            ComponentKind::Checkbox => &CHECKBOX,
            ComponentKind::Switch => &SWITCH,
            ComponentKind::Progress => &PROGRESS,
            ComponentKind::Card => &CARD,
            ComponentKind::Alert => &ALERT,
            ComponentKind::Select => &SELECT,
            ComponentKind::Tabs => &TABS,
            ComponentKind::Tooltip => &TOOLTIP,
            ComponentKind::Toast => &TOAST,
            ComponentKind::Modal => &MODAL,
            ComponentKind::Navbar => &NAVBAR,
            ComponentKind::Table => &TABLE,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ComponentKind {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| CodegenError::UnknownComponent(s.to_string()))
    }
}

/// The catalog, in catalog order.
pub fn catalog() -> Vec<ComponentDefinition> {
    ComponentKind::ALL.iter().map(ComponentKind::definition).collect()
}
