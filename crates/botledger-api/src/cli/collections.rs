//! Collection listing.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;

use botledger_core::registry::CollectionSchema;
use botledger_core::KeyRegistry;

fn describe_references(schema: &CollectionSchema) -> String {
    if schema.references.is_empty() {
        return "-".to_string();
    }
    schema
        .references
        .iter()
        .map(|fk| format!("{} -> {}", fk.field, fk.target))
        .collect::<Vec<_>>()
        .join("\n")
}

/// List every collection with its ordered key fields and references.
pub fn list_collections(json: bool) -> Result<()> {
    let registry = KeyRegistry::global();

    if json {
        let out: Vec<_> = registry
            .schemas()
            .map(|schema| {
                serde_json::json!({
                    "collection": schema.id.as_str(),
                    "key_fields": schema.key_fields,
                    "references": schema
                        .references
                        .iter()
                        .map(|fk| serde_json::json!({
                            "field": fk.field,
                            "target": fk.target.as_str(),
                        }))
                        .collect::<Vec<_>>(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Collection").fg(Color::White),
        Cell::new("Key").fg(Color::White),
        Cell::new("References").fg(Color::White),
    ]);

    for schema in registry.schemas() {
        table.add_row(vec![
            Cell::new(schema.id.as_str()).fg(Color::Cyan),
            Cell::new(schema.key_fields.join(" _ ")),
            Cell::new(describe_references(schema)).fg(Color::DarkGrey),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} collection{}",
        style(registry.len()).bold(),
        if registry.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use botledger_types::collection::CollectionId;

    #[test]
    fn test_describe_references() {
        let schema = CollectionSchema::of(CollectionId::Trigger);
        assert_eq!(
            describe_references(&schema),
            "execution_id -> Bot_Execution\ngithub_event -> GitHub_Event"
        );
        assert_eq!(describe_references(&CollectionSchema::of(CollectionId::Bot)), "-");
    }
}
