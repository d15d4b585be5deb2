//! Token leaves, alias references and type tags.
//!
//! A token is the leaf of a [`TokenTree`](crate::TokenTree): a raw `value`
//! string plus a [`TokenType`] tag. The value is either a literal (`"#3b82f6"`,
//! `"0.5rem"`) or an alias reference of the exact form `{dotted.path}` that
//! points at another token in the same tree.
//!
//! Alias strings are parsed once into a [`TokenValue`] so that resolution code
//! works on path segments instead of re-slicing strings:
//!
//! ```rust
//! use dsforge_tokens::TokenValue;
//!
//! let value = TokenValue::parse("{color.primary.500}");
//! let alias = value.as_alias().unwrap();
//! assert_eq!(alias.segments(), ["color", "primary", "500"]);
//! assert_eq!(alias.var_reference(), "var(--ds-color-primary-500)");
//!
//! assert_eq!(TokenValue::parse("#3b82f6"), TokenValue::Literal("#3b82f6".into()));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefix shared by every style variable derived from a token.
pub const VAR_PREFIX: &str = "--ds-";

/// The kind of design value a token carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenType {
    Color,
    Dimension,
    FontFamily,
    FontWeight,
    Number,
    Shadow,
}

impl TokenType {
    /// All type tags, in declaration order.
    pub const ALL: [TokenType; 6] = [
        TokenType::Color,
        TokenType::Dimension,
        TokenType::FontFamily,
        TokenType::FontWeight,
        TokenType::Number,
        TokenType::Shadow,
    ];

    /// Returns the wire name of this tag (`"fontFamily"`, `"color"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Color => "color",
            TokenType::Dimension => "dimension",
            TokenType::FontFamily => "fontFamily",
            TokenType::FontWeight => "fontWeight",
            TokenType::Number => "number",
            TokenType::Shadow => "shadow",
        }
    }

    /// Parses a wire name, returning `None` for tags outside the supported set.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }

    /// Infers the type a token at `path` is expected to have.
    ///
    /// Used when a token is created at a previously empty location and when
    /// an external tree omits the `type` field. The top-level group decides
    /// first; inside `typography` the nearest role key (`fontFamily`,
    /// `fontWeight`, `lineHeight`, `fontSize`) wins, so variant leaves such as
    /// `typography.variants.heading.fontWeight` infer from their own key.
    pub fn infer<S: AsRef<str>>(path: &[S]) -> Self {
        let first = path.first().map(|s| s.as_ref());
        match first {
            Some("color") => TokenType::Color,
            Some("effect") => TokenType::Shadow,
            Some("typography") => path
                .iter()
                .rev()
                .find_map(|segment| match segment.as_ref() {
                    "fontFamily" => Some(TokenType::FontFamily),
                    "fontWeight" => Some(TokenType::FontWeight),
                    "lineHeight" => Some(TokenType::Number),
                    "fontSize" | "letterSpacing" => Some(TokenType::Dimension),
                    _ => None,
                })
                .unwrap_or(TokenType::Dimension),
            _ => TokenType::Dimension,
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single named design value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Literal value or `{dotted.path}` alias, unresolved.
    pub value: String,
    #[serde(rename = "type")]
    pub token_type: TokenType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Token {
    /// Creates a token without a description.
    pub fn new(value: impl Into<String>, token_type: TokenType) -> Self {
        Self {
            value: value.into(),
            token_type,
            description: None,
        }
    }

    /// Sets the description, returning `self` for chaining.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Parses the raw value into a literal or alias.
    pub fn parsed(&self) -> TokenValue {
        TokenValue::parse(&self.value)
    }

    /// Returns true if the value is an alias reference.
    pub fn is_alias(&self) -> bool {
        self.parsed().is_alias()
    }
}

/// A parsed token value: either a literal or a reference to another token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenValue {
    /// A concrete value passed through untouched.
    Literal(String),
    /// A reference to another token's location in the same tree.
    Alias(AliasPath),
}

impl TokenValue {
    /// Parses a raw value string.
    ///
    /// A value is an alias iff it starts with `{`, ends with `}`, and the
    /// text between them is non-empty and contains no further braces.
    /// Everything else, including malformed brace strings, is a literal.
    pub fn parse(raw: &str) -> Self {
        let inner = raw.strip_prefix('{').and_then(|rest| rest.strip_suffix('}'));
        match inner {
            Some(path) if !path.is_empty() && !path.contains(['{', '}']) => {
                TokenValue::Alias(AliasPath::from_dotted(path))
            }
            _ => TokenValue::Literal(raw.to_string()),
        }
    }

    pub fn is_alias(&self) -> bool {
        matches!(self, TokenValue::Alias(_))
    }

    pub fn as_alias(&self) -> Option<&AliasPath> {
        match self {
            TokenValue::Alias(path) => Some(path),
            TokenValue::Literal(_) => None,
        }
    }

    /// Returns the style-variable form of this value.
    ///
    /// Aliases become a single `var(--ds-...)` indirection; literals are
    /// returned unchanged. Chains are never followed here.
    pub fn to_style_value(&self) -> String {
        match self {
            TokenValue::Literal(literal) => literal.clone(),
            TokenValue::Alias(path) => path.var_reference(),
        }
    }
}

impl From<&str> for TokenValue {
    fn from(raw: &str) -> Self {
        TokenValue::parse(raw)
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Literal(literal) => f.write_str(literal),
            TokenValue::Alias(path) => write!(f, "{{{}}}", path),
        }
    }
}

/// The target of an alias, as path segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AliasPath(Vec<String>);

impl AliasPath {
    /// Splits a dotted path into segments.
    pub fn from_dotted(path: &str) -> Self {
        Self(path.split('.').map(str::to_string).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// The dotted form, `a.b.c`.
    pub fn dotted(&self) -> String {
        self.0.join(".")
    }

    /// The style variable name this path maps to, `--ds-a-b-c`.
    pub fn var_name(&self) -> String {
        format!("{}{}", VAR_PREFIX, self.0.join("-"))
    }

    /// A CSS reference to the variable, `var(--ds-a-b-c)`.
    pub fn var_reference(&self) -> String {
        format!("var({})", self.var_name())
    }

    /// Returns true if the last segment is the scale representative key.
    pub fn targets_default(&self) -> bool {
        self.0.last().map(String::as_str) == Some(crate::DEFAULT_KEY)
    }
}

impl fmt::Display for AliasPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dotted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literal() {
        assert_eq!(
            TokenValue::parse("0.5rem"),
            TokenValue::Literal("0.5rem".to_string())
        );
    }

    #[test]
    fn test_parse_alias() {
        let value = TokenValue::parse("{color.neutral.900}");
        assert!(value.is_alias());
        assert_eq!(value.as_alias().unwrap().dotted(), "color.neutral.900");
    }

    #[test]
    fn test_parse_rejects_malformed_braces() {
        assert!(!TokenValue::parse("{}").is_alias());
        assert!(!TokenValue::parse("{color.primary").is_alias());
        assert!(!TokenValue::parse("color.primary}").is_alias());
        assert!(!TokenValue::parse("{{color.primary}}").is_alias());
        assert!(!TokenValue::parse(" {color.primary}").is_alias());
    }

    #[test]
    fn test_display_round_trips() {
        for raw in ["{effect.shadow.md}", "#fff", "", "{}"] {
            assert_eq!(TokenValue::parse(raw).to_string(), raw);
        }
    }

    #[test]
    fn test_style_value_is_single_hop() {
        assert_eq!(
            TokenValue::parse("{color.primary.DEFAULT}").to_style_value(),
            "var(--ds-color-primary-DEFAULT)"
        );
        assert_eq!(TokenValue::parse("1px").to_style_value(), "1px");
    }

    #[test]
    fn test_alias_targets_default() {
        assert!(AliasPath::from_dotted("color.primary.DEFAULT").targets_default());
        assert!(!AliasPath::from_dotted("color.primary.500").targets_default());
    }

    #[test]
    fn test_infer_by_group() {
        assert_eq!(TokenType::infer(&["color", "text"]), TokenType::Color);
        assert_eq!(TokenType::infer(&["effect", "shadow", "sm"]), TokenType::Shadow);
        assert_eq!(TokenType::infer(&["geometry", "radius", "md"]), TokenType::Dimension);
        assert_eq!(
            TokenType::infer(&["typography", "fontWeight", "bold"]),
            TokenType::FontWeight
        );
        assert_eq!(
            TokenType::infer(&["typography", "variants", "body", "lineHeight"]),
            TokenType::Number
        );
        assert_eq!(
            TokenType::infer(&["typography", "variants", "code", "fontFamily"]),
            TokenType::FontFamily
        );
        assert_eq!(TokenType::infer::<&str>(&[]), TokenType::Dimension);
    }

    #[test]
    fn test_type_names_round_trip() {
        for ty in TokenType::ALL {
            assert_eq!(TokenType::from_name(ty.as_str()), Some(ty));
        }
        assert_eq!(TokenType::from_name("borderRadius"), None);
    }

    #[test]
    fn test_token_serializes_type_field() {
        let token = Token::new("#fff", TokenType::Color);
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json, serde_json::json!({ "value": "#fff", "type": "color" }));
    }
}
