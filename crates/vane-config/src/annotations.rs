//! Writes struct documentation into generated TOML as `#` comments.

use std::any::type_name;

use documented::{Documented, DocumentedFields};
use toml_edit::{ArrayOfTables, Decor, Item, RawString, Table};
use tracing::warn;

use crate::error::{ConfigError, Result};

/// Appends `docs` to the decor's prefix as TOML comment lines.
pub fn append_docs_as_toml_comments(decor: &mut Decor, docs: &str) {
    let old_prefix = decor
        .prefix()
        .and_then(RawString::as_str)
        .unwrap_or_default();

    let mut comments = String::new();
    for line in docs.lines() {
        if line.is_empty() {
            comments.push_str("#\n");
        } else {
            comments.push_str("# ");
            comments.push_str(line);
            comments.push('\n');
        }
    }

    let separator = match old_prefix.lines().last() {
        None | Some("") => "",
        Some(_) => "#\n",
    };
    decor.set_prefix(format!("{old_prefix}{separator}{comments}"));
}

/// Annotates each key of `table` with the field docs of `T`. Non-root
/// tables also receive the struct-level docs above the table header.
pub fn annotate_toml_table<T>(table: &mut Table, is_root: bool) -> Result<()>
where
    T: Documented + DocumentedFields,
{
    if !is_root {
        append_docs_as_toml_comments(table.decor_mut(), T::DOCS);
    }

    for (mut key, item) in table.iter_mut() {
        let key_str = key.get();
        let Ok(docs) = T::get_field_docs(key_str) else {
            warn!(
                "Field '{}' found in TOML but not documented on '{}'",
                key_str,
                type_name::<T>()
            );
            continue;
        };

        match item {
            Item::None => return Err(ConfigError::EmptyTomlItem(key_str.into())),
            Item::Value(_) => append_docs_as_toml_comments(key.leaf_decor_mut(), docs),
            Item::Table(sub_table) => append_docs_as_toml_comments(sub_table.decor_mut(), docs),
            Item::ArrayOfTables(array) => {
                if let Some(first) = array.iter_mut().next() {
                    append_docs_as_toml_comments(first.decor_mut(), docs);
                }
            }
        }
    }

    Ok(())
}

/// Annotates the first table of an array with the field docs of `T`.
/// All tables in the array share a structure, so one annotation suffices.
pub fn annotate_toml_array_of_tables<T>(array: &mut ArrayOfTables) -> Result<()>
where
    T: Documented + DocumentedFields,
{
    if let Some(first) = array.iter_mut().next() {
        annotate_toml_table::<T>(first, false)
            .map_err(|err| ConfigError::Annotate(err.to_string()))?;
    }
    Ok(())
}
