//! Methodology documents and the ignore file.
//!
//! Every generated document is a pure function of the [`ProjectConfig`]:
//! a fixed template rendered through a [`RenderContext`]. Only the README
//! carries placeholders; the other five are static prose and render to
//! themselves.
//!
//! The set is a table ([`METHODOLOGY_DOCUMENTS`]) rather than call-site
//! formatting so the scaffold service, the dry-run planner and the tests all
//! iterate the same list.

use std::collections::HashMap;
use std::path::Path;

use crate::domain::entities::{
    ProjectConfig, ProjectStructure,
    layout::{GITIGNORE_FILE, METHODOLOGY_DIR},
};

// ── RenderContext ────────────────────────────────────────────────────────────

/// Variables available to document templates.
///
/// | Variable | Example |
/// |----------|---------|
/// | `PROJECT_NAME` | `demo` |
/// | `PROJECT_TYPE` | `api` |
/// | `TECHNOLOGIES` | `python, fastapi` |
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new(config: &ProjectConfig) -> Self {
        let mut variables = HashMap::new();
        variables.insert("PROJECT_NAME".to_string(), config.name().to_string());
        variables.insert(
            "PROJECT_TYPE".to_string(),
            config.project_type().to_string(),
        );
        variables.insert("TECHNOLOGIES".to_string(), config.technologies_display());
        Self { variables }
    }

    /// Add or override a variable.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace `{{VARIABLE}}` placeholders in a single left-to-right pass.
    ///
    /// Substituted values are never rescanned, so a project named
    /// `{{TECHNOLOGIES}}` renders literally. Unknown placeholders are left
    /// as-is.
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];

            match after_open.find("}}") {
                Some(end) => {
                    let key = &after_open[..end];
                    match self.variables.get(key) {
                        Some(value) => out.push_str(value),
                        None => {
                            out.push_str("{{");
                            out.push_str(key);
                            out.push_str("}}");
                        }
                    }
                    rest = &after_open[end + 2..];
                }
                None => {
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }

        out.push_str(rest);
        out
    }
}

// ── Document table ───────────────────────────────────────────────────────────

/// One generated methodology document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentSpec {
    /// File name under `docs/methodology`.
    pub file_name: &'static str,
    template: &'static str,
}

impl DocumentSpec {
    pub fn render(&self, config: &ProjectConfig) -> String {
        RenderContext::new(config).render(self.template)
    }

    /// Path relative to the project root.
    pub fn relative_path(&self) -> String {
        format!("{METHODOLOGY_DIR}/{}", self.file_name)
    }

    pub fn is_parameterized(&self) -> bool {
        self.template.contains("{{")
    }
}

pub const METHODOLOGY_DOCUMENTS: [DocumentSpec; 6] = [
    DocumentSpec {
        file_name: "README.md",
        template: README_TEMPLATE,
    },
    DocumentSpec {
        file_name: "llm_methodology.md",
        template: METHODOLOGY_DOC,
    },
    DocumentSpec {
        file_name: "tools_integration.md",
        template: TOOLS_DOC,
    },
    DocumentSpec {
        file_name: "tavily_integration.md",
        template: TAVILY_DOC,
    },
    DocumentSpec {
        file_name: "project_initialization.md",
        template: INITIALIZATION_DOC,
    },
    DocumentSpec {
        file_name: "resume_prompt.md",
        template: RESUME_DOC,
    },
];

/// Plan every methodology document for `config`.
pub fn plan_documents(config: &ProjectConfig) -> ProjectStructure {
    METHODOLOGY_DOCUMENTS.iter().fold(
        ProjectStructure::new(config.documentation_path()),
        |s, doc| s.with_file(doc.relative_path(), doc.render(config)),
    )
}

// ── Ignore file ──────────────────────────────────────────────────────────────

pub const GITIGNORE_PATTERNS: [&str; 8] = [
    "__pycache__/",
    "*.py[cod]",
    "*$py.class",
    ".env",
    ".venv",
    ".coverage",
    "htmlcov/",
    ".pytest_cache/",
];

pub fn render_gitignore() -> String {
    let mut out = GITIGNORE_PATTERNS.join("\n");
    out.push('\n');
    out
}

pub fn plan_gitignore(root: &Path) -> ProjectStructure {
    ProjectStructure::new(root).with_file(GITIGNORE_FILE, render_gitignore())
}

// ── Templates ────────────────────────────────────────────────────────────────

const README_TEMPLATE: &str = r#"# {{PROJECT_NAME}}

Project using Cline LLM Methodology.

## Overview

- Type: {{PROJECT_TYPE}}
- Technologies: {{TECHNOLOGIES}}

## Documentation

See the `docs/` directory for complete documentation:

- [LLM Methodology](docs/methodology/llm_methodology.md)
- [Tools Integration](docs/methodology/tools_integration.md)
- [Project Initialization](docs/methodology/project_initialization.md)

## Development

### Setup

```bash
# Install dependencies
poetry install

# Setup environment
poetry shell

# Run tests
pytest
```

### Structure

```
{{PROJECT_NAME}}/
├── docs/           # Documentation
├── src/           # Source code
├── tests/         # Tests
└── tools/         # Tools and scripts
```
"#;

const METHODOLOGY_DOC: &str = r#"# LLM Methodology

Structured approach for developing projects with LLM in VSCode using Cline.

## Core Principles

1. Structured Documentation
2. Tool Integration
3. Context Management
4. Iterative Development

## Components

1. Documentation Structure
2. Tool Configuration
3. Project Templates
4. Development Workflow

See individual component documentation for details.
"#;

const TOOLS_DOC: &str = r#"# Tools Integration

Configuration and usage of integrated tools.

## Available Tools

1. Browser Action
2. Tavily AI
3. MCP Tools

## Configuration

See `tools_config.json` for detailed configuration.
"#;

const TAVILY_DOC: &str = r#"# Tavily AI Integration

Integration with Tavily AI for technical search and research.

## Configuration

See `tools_config.json` for search type configurations.

## Usage

Examples of common search patterns and best practices.
"#;

const INITIALIZATION_DOC: &str = r#"# Project Initialization

Guide for initializing new projects using the methodology.

## Steps

1. Configuration
2. Directory Setup
3. Tool Integration
4. Documentation

## Templates

Available project templates and their usage.
"#;

const RESUME_DOC: &str = r#"# Work Resumption

Guide for resuming work on projects.

## Context Management

How to maintain and restore context when resuming work.

## Tools

Using tools effectively for work continuation.
"#;
