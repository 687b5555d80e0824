// src/models/comment_style.rs
use serde::Deserialize;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Which comment grammar to match.
///
/// Selectors are lenient: `"fsharp"` picks F#, any other string picks C#.
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(from = "String")]
pub enum CommentStyle {
    /// `//` line comments and `(* ... *)` block comments.
    #[default]
    FSharp,
    /// `//` line comments and `/* ... */` block comments.
    CSharp,
}

impl CommentStyle {
    #[must_use]
    pub fn from_selector(selector: &str) -> Self {
        if selector == "fsharp" {
            Self::FSharp
        } else {
            Self::CSharp
        }
    }
}

impl FromStr for CommentStyle {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_selector(s))
    }
}

impl From<String> for CommentStyle {
    fn from(selector: String) -> Self {
        Self::from_selector(&selector)
    }
}

impl fmt::Display for CommentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FSharp => f.write_str("fsharp"),
            Self::CSharp => f.write_str("csharp"),
        }
    }
}
