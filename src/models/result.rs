// file: src/models/result.rs
// description: urls returned once all provisioning steps succeed

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreationResult {
    pub repo_url: String,
    pub readme_url: String,
    pub workflow_url: String,
}
