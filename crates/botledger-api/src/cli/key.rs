//! Key derivation commands: key, check, hash.

use anyhow::{Context, Result};
use console::style;

use botledger_core::document::Document;
use botledger_infra::crypto::hash::payload_hash;

use crate::cli::input::read_document;
use crate::state::AppState;

/// Print the primary key of a document in `collection`.
pub fn derive_key(
    state: &AppState,
    collection: &str,
    doc: Option<&str>,
    escaped: bool,
    permissive: bool,
    json: bool,
) -> Result<()> {
    let document = read_document(doc)?;
    let deriver = state.deriver(escaped, permissive);
    let key = deriver
        .primary_key(&document, collection)
        .with_context(|| format!("Cannot derive a '{collection}' key"))?;

    if json {
        let out = serde_json::json!({
            "collection": collection,
            "key": key,
            "encoding": deriver.options().encoding.to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{key}");
    }

    Ok(())
}

/// Validate a whole document against its record type and print its key.
pub fn check_document(
    state: &AppState,
    collection: &str,
    doc: Option<&str>,
    escaped: bool,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let value = read_document(doc)?;
    let document = Document::parse(collection, value)
        .with_context(|| format!("Document is not a valid '{collection}' record"))?;
    let encoding = state.deriver(escaped, false).options().encoding;
    let key = document.primary_key_with(encoding);

    if json {
        let out = serde_json::json!({
            "collection": document.collection().as_str(),
            "key": key,
            "valid": true,
            "document": document.to_record_value()?,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if !quiet {
        println!(
            "  {} Valid {} record {}",
            style("ok").green(),
            style(document.collection()).cyan(),
            style(&key).bold(),
        );
    }

    Ok(())
}

/// Print the `GitHub_Event` payload hash of a webhook payload.
pub fn hash_payload(payload: Option<&str>, json: bool) -> Result<()> {
    let payload = read_document(payload)?;
    let hash = payload_hash(&payload);

    if json {
        let out = serde_json::json!({ "payload_hash": hash });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{hash}");
    }

    Ok(())
}
