// file: src/utils/validation.rs
// description: input and configuration validation helpers
// reference: input validation patterns

use crate::error::{ProvisionError, Result};

pub struct Validator;

impl Validator {
    pub fn validate_repo_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(ProvisionError::Validation(
                "Repository name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ProvisionError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    pub fn validate_port(port: u16) -> Result<()> {
        if port == 0 {
            return Err(ProvisionError::Validation("Port cannot be 0".to_string()));
        }
        Ok(())
    }

    /// Paths written through the contents API are relative to the repository root.
    pub fn validate_repo_path(path: &str) -> Result<()> {
        if path.trim().is_empty() {
            return Err(ProvisionError::Validation(
                "Repository file path must not be empty".to_string(),
            ));
        }

        if path.starts_with('/') || path.contains('\\') {
            return Err(ProvisionError::Validation(format!(
                "Repository file path must be relative with '/' separators: {}",
                path
            )));
        }

        if path.split('/').any(|segment| segment.is_empty() || segment == "..") {
            return Err(ProvisionError::Validation(format!(
                "Repository file path contains an empty or parent segment: {}",
                path
            )));
        }

        // The path is spliced into the contents url unencoded.
        if path.contains(['#', '?', '%']) || path.chars().any(char::is_whitespace) {
            return Err(ProvisionError::Validation(format!(
                "Repository file path contains a character reserved in urls: {}",
                path
            )));
        }

        Ok(())
    }

    pub fn truncate_text(text: &str, max_length: usize) -> String {
        if text.len() <= max_length {
            return text.to_string();
        }

        let mut end = max_length;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &text[..end])
    }
}
