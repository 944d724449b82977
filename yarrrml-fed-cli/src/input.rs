use crate::error::{CliError, CliResult};
use std::path::Path;
use yarrrml_fed_mapping::MappingDocument;

/// Load a YARRRML mapping file into a parsed document.
///
/// The YAML is transcoded into the generic JSON document value the core
/// crate operates on; documents with non-string keys are rejected here.
pub fn load_mapping(path: &Path) -> CliResult<MappingDocument> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CliError::Input(format!("failed to read {}: {e}", path.display())))?;
    let value: serde_json::Value = serde_yaml::from_str(&content)
        .map_err(|e| CliError::Input(format!("failed to parse {}: {e}", path.display())))?;
    Ok(MappingDocument::new(value))
}
