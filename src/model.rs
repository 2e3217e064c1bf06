use anyhow::Result;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root check plan.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Plan {
    /// Absolute base directory; every candidate must resolve under this base.
    pub base: PathBuf,
    /// Extension allowlist applied to candidates that opt in.
    #[serde(default = "default_allowlist")]
    pub allowlist: Vec<String>,
    /// Subdirectory names to create under the base before checking.
    #[serde(default)]
    pub ensure_dirs: Vec<String>,
    /// Candidates to resolve.
    pub candidates: Vec<Candidate>,
}

fn default_allowlist() -> Vec<String> {
    crate::allowlist::DEFAULT_ALLOWED_EXTENSIONS
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

/// A single candidate path to validate.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Candidate {
    /// Ordered path segments joined onto the base.
    pub segments: Vec<String>,
    /// Also require the final segment's extension to be in the allowlist.
    #[serde(default)]
    pub check_extension: bool,
}

impl Plan {
    /// Validate the plan (basic sanity checks).
    pub fn validate(&self) -> Result<()> {
        if !self.base.is_absolute() {
            anyhow::bail!("base must be an absolute path");
        }
        Ok(())
    }
}

/// Generate JSON Schema for the Plan type.
pub fn generate_schema() -> String {
    let schema = schemars::schema_for!(Plan);
    serde_json::to_string_pretty(&schema).expect("failed to serialize schema")
}

/// Load a Plan from a JSON file.
pub fn load_plan(path: &std::path::Path) -> Result<Plan> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    let plan = serde_json::from_reader(reader)?;
    Ok(plan)
}

/// Create a Plan from a JSON string.
pub fn from_json(json: &str) -> Result<Plan> {
    let plan = serde_json::from_str(json)?;
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_validation() {
        let plan = Plan {
            base: "/absolute/path".into(),
            allowlist: default_allowlist(),
            ensure_dirs: vec![],
            candidates: vec![],
        };
        assert!(plan.validate().is_ok());
    }

    #[test]
    fn test_plan_relative_base_fails() {
        let plan = Plan {
            base: "relative/path".into(),
            allowlist: default_allowlist(),
            ensure_dirs: vec![],
            candidates: vec![],
        };
        assert!(plan.validate().is_err());
    }

    #[test]
    fn test_allowlist_defaults_on_deserialization() {
        let plan = from_json(
            r#"{ "base": "/tmp/base", "candidates": [ { "segments": ["file.txt"] } ] }"#,
        )
        .unwrap();
        assert_eq!(plan.allowlist, default_allowlist());
        assert!(!plan.candidates[0].check_extension);
    }
}
