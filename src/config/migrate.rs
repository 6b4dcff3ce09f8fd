//! Add missing fields to an existing config file.
//!
//! Uses `toml_edit` so user comments, ordering and formatting survive.

use toml_edit::{DocumentMut, Item, Table};

use super::{Config, ConfigError};

/// Outcome of a migration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrateResult {
    /// Full migrated file content
    pub content: String,
    /// Added fields as `section.key`
    pub added_fields: Vec<String>,
    /// Sections that did not exist before
    pub sections_added: Vec<String>,
}

impl MigrateResult {
    pub fn has_changes(&self) -> bool {
        !self.added_fields.is_empty()
    }
}

/// Merge default values for every missing field into `content`.
///
/// Existing values are never changed, even if they differ from defaults.
pub fn migrate_config(content: &str) -> Result<MigrateResult, ConfigError> {
    let mut doc: DocumentMut = content.parse()?;
    let defaults: DocumentMut = toml::to_string_pretty(&Config::default())?.parse()?;

    let mut added_fields = Vec::new();
    let mut sections_added = Vec::new();

    for (section, default_item) in defaults.iter() {
        let Some(default_table) = default_item.as_table() else {
            continue;
        };

        if !doc.contains_key(section) {
            doc.insert(section, Item::Table(Table::new()));
            sections_added.push(section.to_string());
        }

        // A user value that isn't a table is left alone.
        let Some(table) = doc.get_mut(section).and_then(Item::as_table_mut) else {
            continue;
        };

        for (key, value) in default_table.iter() {
            if !table.contains_key(key) {
                table.insert(key, value.clone());
                added_fields.push(format!("{}.{}", section, key));
            }
        }
    }

    Ok(MigrateResult {
        content: doc.to_string(),
        added_fields,
        sections_added,
    })
}
