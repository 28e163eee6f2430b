//! `tools_config.json`: recognised tool-integration options.
//!
//! The shape is fixed; the scaffold writes [`ToolsConfiguration::default`]
//! once and the validator only checks the file still parses as JSON.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::{ProjectStructure, layout::TOOLS_CONFIG_FILE},
    error::DomainError,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolsConfiguration {
    pub browser_action: BrowserAction,
    pub tavily_ai: TavilyAi,
    pub mcp_tools: McpTools,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserAction {
    pub resolution: String,
    pub screenshots_enabled: bool,
    pub console_logs_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TavilyAi {
    /// Keyed by search type name; insertion order is kept on disk.
    pub search_types: IndexMap<String, SearchType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchType {
    pub depth: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_code: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_examples: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpTools {
    pub enabled: bool,
    pub auto_discovery: bool,
}

impl Default for ToolsConfiguration {
    fn default() -> Self {
        let mut search_types = IndexMap::new();
        search_types.insert(
            "technical".to_string(),
            SearchType {
                depth: "comprehensive".into(),
                include_code: Some(true),
                include_examples: None,
            },
        );
        search_types.insert(
            "implementation".to_string(),
            SearchType {
                depth: "detailed".into(),
                include_code: None,
                include_examples: Some(true),
            },
        );

        Self {
            browser_action: BrowserAction {
                resolution: "900x600".into(),
                screenshots_enabled: true,
                console_logs_enabled: true,
            },
            tavily_ai: TavilyAi { search_types },
            mcp_tools: McpTools {
                enabled: true,
                auto_discovery: true,
            },
        }
    }
}

impl ToolsConfiguration {
    pub fn to_json_pretty(&self) -> Result<String, DomainError> {
        serde_json::to_string_pretty(self).map_err(|e| DomainError::EncodingFailed {
            artifact: TOOLS_CONFIG_FILE,
            reason: e.to_string(),
        })
    }

    pub fn plan(&self, root: &Path) -> Result<ProjectStructure, DomainError> {
        Ok(ProjectStructure::new(root).with_file(TOOLS_CONFIG_FILE, self.to_json_pretty()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn default_serialises_expected_shape() {
        let json = ToolsConfiguration::default().to_json_pretty().unwrap();
        let v: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(v["browser_action"]["resolution"], "900x600");
        assert_eq!(v["mcp_tools"]["enabled"], true);
        assert_eq!(v["tavily_ai"]["search_types"]["technical"]["include_code"], true);
        assert_eq!(
            v["tavily_ai"]["search_types"]["implementation"]["include_examples"],
            true
        );
        assert!(v["tavily_ai"]["search_types"]["technical"]
            .get("include_examples")
            .is_none());
    }

    #[test]
    fn search_type_order_is_preserved() {
        let json = ToolsConfiguration::default().to_json_pretty().unwrap();
        let technical = json.find("\"technical\"").unwrap();
        let implementation = json.find("\"implementation\"").unwrap();
        assert!(technical < implementation);
    }

    #[test]
    fn uses_two_space_indent() {
        let json = ToolsConfiguration::default().to_json_pretty().unwrap();
        assert!(json.starts_with("{\n  \"browser_action\""));
    }
}
