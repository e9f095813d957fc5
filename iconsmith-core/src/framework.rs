//! Target UI frameworks for generated components.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Supported component frameworks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    /// Vue single-file components
    #[default]
    Vue,
    /// React function components (JSX)
    React,
}

impl Framework {
    /// Returns the framework identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::Vue => "vue",
            Framework::React => "react",
        }
    }

    /// Human-facing name, as used in summaries ("Vue", "React").
    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::Vue => "Vue",
            Framework::React => "React",
        }
    }

    /// File extension of a generated component, without the dot.
    pub fn file_extension(&self) -> &'static str {
        match self {
            Framework::Vue => "vue",
            Framework::React => "jsx",
        }
    }

    /// Extension appended to import paths in the index manifest.
    ///
    /// Vue tooling needs the `.vue` suffix spelled out; JSX modules resolve
    /// without one.
    pub fn import_extension(&self) -> Option<&'static str> {
        match self {
            Framework::Vue => Some(".vue"),
            Framework::React => None,
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Framework {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "vue" => Ok(Framework::Vue),
            "react" | "jsx" => Ok(Framework::React),
            _ => Err(format!(
                "unknown framework '{}', expected 'vue' or 'react'",
                s
            )),
        }
    }
}
