//! Catalog command implementation

use colored::*;
use serde::Serialize;

use super::shared::print_json;
use crate::cli::args::{CatalogArgs, OutputFormat};
use crate::{Catalog, CatalogField, CatalogFieldType, Result};

#[derive(Debug, Clone, Serialize)]
pub struct CatalogRow {
    pub catalog: Catalog,
    pub table: &'static str,
    pub fields: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldRow {
    pub key: String,
    pub column: String,
    pub data_type: String,
    pub field_type: CatalogFieldType,
}

/// All catalogs with their table and number of defined fields
pub fn catalog_rows() -> Vec<CatalogRow> {
    Catalog::ALL
        .iter()
        .map(|&catalog| CatalogRow {
            catalog,
            table: catalog.table_name(),
            fields: CatalogField::fields_of_catalog(catalog)
                .map(|fields| fields.len())
                .unwrap_or(0),
        })
        .collect()
}

/// Fields of one catalog in table order
pub fn field_rows(catalog: Catalog) -> Result<Vec<FieldRow>> {
    Ok(CatalogField::fields_of_catalog(catalog)?
        .into_iter()
        .map(|field| FieldRow {
            key: field.key().key().to_string(),
            column: field.metadata().column_name().to_string(),
            data_type: field.metadata().data_type().to_string(),
            field_type: field.field_type(),
        })
        .collect())
}

/// Run the catalog command
pub fn run_catalog(args: &CatalogArgs) -> Result<()> {
    match &args.name {
        None => {
            let rows = catalog_rows();
            match args.format {
                OutputFormat::Json => print_json(&rows),
                OutputFormat::Text => {
                    println!("{}", format!("{:<18} {:<10} {:>6}", "Catalog", "Table", "Fields").bold());
                    for row in &rows {
                        println!("{:<18} {:<10} {:>6}", row.catalog.name().cyan(), row.table, row.fields);
                    }
                    Ok(())
                }
            }
        }
        Some(name) => {
            let catalog: Catalog = name.parse()?;
            let rows = field_rows(catalog)?;
            match args.format {
                OutputFormat::Json => print_json(&rows),
                OutputFormat::Text => {
                    println!("{} ({})", catalog.name().bold(), catalog.table_name());
                    for row in &rows {
                        println!(
                            "  {:<6} {:<12} {:<10} {}",
                            row.key.cyan(),
                            row.column,
                            row.data_type,
                            row.field_type
                        );
                    }
                    Ok(())
                }
            }
        }
    }
}
