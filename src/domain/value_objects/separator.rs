//! Bundle separator value object

use serde::{Deserialize, Serialize};

/// Text placed between compiled templates in the bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    /// One newline after each template
    #[default]
    Newline,
    /// Plain concatenation
    None,
}

impl Separator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Separator::Newline => "\n",
            Separator::None => "",
        }
    }
}

impl std::str::FromStr for Separator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "newline" | "nl" => Ok(Separator::Newline),
            "none" | "" => Ok(Separator::None),
            other => Err(format!("unknown separator '{other}' (expected newline or none)")),
        }
    }
}

impl std::fmt::Display for Separator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Separator::Newline => write!(f, "newline"),
            Separator::None => write!(f, "none"),
        }
    }
}
