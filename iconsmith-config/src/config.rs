use std::{path::PathBuf, str::FromStr};

use iconsmith_core::{Framework, NamingConfig};
use serde::Deserialize;

use crate::{
    Error, Result,
    validate::{find_value_span, validate_affix},
};

/// Default suffix appended to every component name
pub const DEFAULT_SUFFIX: &str = "Component";

/// Root schema for iconsmith.toml
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Where icons are scanned from
    pub source: SourceSection,

    /// Component name affixes
    pub naming: NamingSection,

    /// Where and how components are generated
    pub output: OutputSection,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceSection {
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamingSection {
    pub prefix: String,
    pub suffix: String,
}

impl Default for NamingSection {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSection {
    pub dir: Option<PathBuf>,
    pub framework: Framework,
    pub preserve_structure: bool,
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "iconsmith.toml")
    }
}

impl Config {
    /// Parse an iconsmith.toml from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        config.validate(content, filename)?;
        Ok(config)
    }

    /// The naming rule described by this configuration.
    pub fn naming_config(&self) -> NamingConfig {
        NamingConfig::new(
            &self.naming.prefix,
            &self.naming.suffix,
            self.output.framework,
        )
    }

    fn validate(&self, src: &str, filename: &str) -> Result<()> {
        let affixes = [
            ("prefix", self.naming.prefix.as_str(), true),
            ("suffix", self.naming.suffix.as_str(), false),
        ];

        for (field, value, leading) in affixes {
            if let Some(reason) = validate_affix(value, leading) {
                return Err(Error::invalid_affix(
                    field,
                    value,
                    reason,
                    src,
                    filename,
                    find_value_span(src, field, value),
                ));
            }
        }
        Ok(())
    }
}
