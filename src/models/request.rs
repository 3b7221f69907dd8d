// file: src/models/request.rs
// description: repository creation request with serde defaults for optional fields
// reference: internal data structures

use crate::error::Result;
use crate::utils::Validator;
use serde::{Deserialize, Serialize};

pub const DEFAULT_README: &str = "# Hello World";

/// Python lint workflow committed when the caller does not supply one.
pub const DEFAULT_WORKFLOW: &str = "name: CI Lint
on: [pull_request]
jobs:
  lint:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v3
      - name: Set up Python
        uses: actions/setup-python@v4
        with:
          python-version: '3.x'
      - name: Install dependencies
        run: pip install flake8
      - name: Lint with flake8
        run: flake8 .
";

fn default_readme() -> String {
    DEFAULT_README.to_string()
}

fn default_workflow() -> String {
    DEFAULT_WORKFLOW.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreationRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub private: bool,
    #[serde(default = "default_readme")]
    pub readme_content: String,
    #[serde(default = "default_workflow")]
    pub workflow_content: String,
}

impl CreationRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            private: false,
            readme_content: default_readme(),
            workflow_content: default_workflow(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }

    pub fn with_readme(mut self, content: impl Into<String>) -> Self {
        self.readme_content = content.into();
        self
    }

    pub fn with_workflow(mut self, content: impl Into<String>) -> Self {
        self.workflow_content = content.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        Validator::validate_repo_name(&self.name)
    }
}
