//! Domain value objects: ProjectType, BaseStructure.
//!
//! # Design
//!
//! Both types are closed sets with an escape hatch. Configuration files are
//! not constrained to the known values, so an unrecognised string parses into
//! the `Custom` variant instead of failing. Only the interactive collector in
//! the CLI restricts input to [`ProjectType::KNOWN`] / [`BaseStructure::KNOWN`].
//!
//! Only the exact lowercase tokens map to known variants. Anything else,
//! including `"API"` or `"lib"`, is kept verbatim in `Custom` so that
//! `Display` always writes back what the configuration said.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

// ── ProjectType ──────────────────────────────────────────────────────────────

/// Advisory project type recorded in the generated metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectType {
    Api,
    Web,
    Cli,
    Library,
    Custom(String),
}

impl ProjectType {
    /// Choices offered by the interactive collector.
    pub const KNOWN: [ProjectType; 4] = [Self::Api, Self::Web, Self::Cli, Self::Library];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Api => "api",
            Self::Web => "web",
            Self::Cli => "cli",
            Self::Library => "library",
            Self::Custom(s) => s,
        }
    }

    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "api" => Self::Api,
            "web" => Self::Web,
            "cli" => Self::Cli,
            "library" => Self::Library,
            _ => Self::Custom(s.to_string()),
        })
    }
}

impl From<String> for ProjectType {
    fn from(s: String) -> Self {
        let Ok(parsed) = s.parse::<Self>();
        parsed
    }
}

impl From<ProjectType> for String {
    fn from(t: ProjectType) -> Self {
        t.as_str().to_string()
    }
}

// ── BaseStructure ────────────────────────────────────────────────────────────

/// Which directory set to materialise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BaseStructure {
    #[default]
    Standard,
    Minimal,
    Custom(String),
}

impl BaseStructure {
    /// Choices offered by the interactive collector.
    pub const KNOWN: [BaseStructure; 2] = [Self::Standard, Self::Minimal];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Standard => "standard",
            Self::Minimal => "minimal",
            Self::Custom(s) => s,
        }
    }

    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl fmt::Display for BaseStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BaseStructure {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "standard" => Self::Standard,
            "minimal" => Self::Minimal,
            _ => Self::Custom(s.to_string()),
        })
    }
}

impl From<String> for BaseStructure {
    fn from(s: String) -> Self {
        let Ok(parsed) = s.parse::<Self>();
        parsed
    }
}

impl From<BaseStructure> for String {
    fn from(b: BaseStructure) -> Self {
        b.as_str().to_string()
    }
}
