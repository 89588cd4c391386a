//! Schema validation for the exported catalog document.
//!
//! The schema under `schema/status_catalog.schema.json` is the contract the
//! dashboard UI codes against: record shapes, value token formats, and the
//! closed set of filter values. `catalog-export --check` and the integration
//! suite both validate through here so drift between the tables and the
//! contract surfaces before the UI sees it.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;

const EXPORT_SCHEMA: &str = include_str!("../schema/status_catalog.schema.json");

/// Parse the embedded export schema.
pub fn export_schema() -> Result<Value> {
    serde_json::from_str(EXPORT_SCHEMA).context("parsing embedded status catalog schema")
}

/// Validate a serialized catalog document against the shipped schema.
///
/// All violations are reported together so a bad table edit shows every
/// broken record in one pass.
pub fn validate_export(document: &Value) -> Result<()> {
    let schema = export_schema()?;
    let compiled = JSONSchema::compile(&schema)
        .map_err(|err| anyhow!("compiling status catalog schema: {err}"))?;

    if let Err(errors) = compiled.validate(document) {
        let details = errors
            .map(|err| err.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        bail!("catalog export failed schema validation:\n{details}");
    }
    Ok(())
}
