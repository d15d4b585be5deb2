//! Output strategies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CodegenError;

/// The target a component is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// A framework-agnostic custom element plus thin React and Angular wrappers.
    WebComponent,
    /// A React function component with a CSS module.
    NativeReact,
    /// An Angular standalone component with its stylesheet.
    NativeAngular,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::WebComponent,
        Strategy::NativeReact,
        Strategy::NativeAngular,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::WebComponent => "web-component",
            Strategy::NativeReact => "native-react",
            Strategy::NativeAngular => "native-angular",
        }
    }

    /// Parses a strategy name, `None` for anything unrecognized.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| CodegenError::UnknownStrategy(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.as_str().parse::<Strategy>().unwrap(), strategy);
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(Strategy::from_name("vue"), None);
        assert!(matches!(
            "Native-React".parse::<Strategy>(),
            Err(CodegenError::UnknownStrategy(_))
        ));
    }

    #[test]
    fn test_serde_name_matches_display() {
        let json = serde_json::to_string(&Strategy::NativeAngular).unwrap();
        assert_eq!(json, "\"native-angular\"");
    }
}
