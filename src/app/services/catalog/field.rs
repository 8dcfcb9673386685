//! Catalog fields and lookups

use std::collections::{BTreeSet, HashMap};

use once_cell::sync::Lazy;

use super::field_table::CATALOG_FIELDS;
use super::kind::{Catalog, CatalogFieldType};
use crate::app::models::{KKey, KKeyMetadata};
use crate::app::services::converters::converter_for;
use crate::{Error, Result};

/// Field (column) of a catalog addressed by a K4xxx K-key
#[derive(Debug, Clone)]
pub struct CatalogField {
    catalog: Catalog,
    key: KKey,
    metadata: KKeyMetadata,
    field_type: CatalogFieldType,
}

struct CatalogFieldIndex {
    fields: Vec<CatalogField>,
    by_catalog: HashMap<Catalog, Vec<usize>>,
    by_key: HashMap<KKey, usize>,
}

static FIELDS: Lazy<CatalogFieldIndex> = Lazy::new(|| {
    let fields: Vec<CatalogField> = CATALOG_FIELDS
        .iter()
        .map(|definition| CatalogField {
            catalog: definition.catalog,
            key: KKey::of(definition.key),
            metadata: KKeyMetadata::new(
                definition.column_name,
                definition.data_type,
                definition.length,
                converter_for(definition.data_type),
                true,
                false,
            ),
            field_type: definition.field_type,
        })
        .collect();

    let mut by_catalog: HashMap<Catalog, Vec<usize>> = HashMap::new();
    let mut by_key = HashMap::new();
    for (position, field) in fields.iter().enumerate() {
        by_catalog.entry(field.catalog).or_default().push(position);
        by_key.insert(field.key.clone(), position);
    }

    CatalogFieldIndex {
        fields,
        by_catalog,
        by_key,
    }
});

impl CatalogField {
    pub fn catalog(&self) -> Catalog {
        self.catalog
    }

    pub fn key(&self) -> &KKey {
        &self.key
    }

    pub fn metadata(&self) -> &KKeyMetadata {
        &self.metadata
    }

    pub fn field_type(&self) -> CatalogFieldType {
        self.field_type
    }

    /// Whether the field holds data of the catalog record (not its id or state)
    pub fn is_data_field(&self) -> bool {
        self.field_type == CatalogFieldType::Data
    }

    /// Whether the field is the surrogate key of the catalog
    pub fn is_id_field(&self) -> bool {
        self.field_type == CatalogFieldType::Id
    }

    /// Every catalog field in table order
    pub fn all() -> &'static [CatalogField] {
        &FIELDS.fields
    }

    /// Catalogs that have at least one field defined
    pub fn catalogs_with_defined_fields() -> BTreeSet<Catalog> {
        FIELDS.by_catalog.keys().copied().collect()
    }

    /// Fields of the catalog in table order
    ///
    /// Fails for catalogs without fields (EVENT, CAUSE and MEASURE).
    pub fn fields_of_catalog(catalog: Catalog) -> Result<Vec<&'static CatalogField>> {
        let positions = FIELDS
            .by_catalog
            .get(&catalog)
            .ok_or_else(|| Error::invalid_argument(format!("Unknown catalog {}", catalog)))?;

        Ok(positions
            .iter()
            .map(|&position| &FIELDS.fields[position])
            .collect())
    }

    /// The surrogate key field of the catalog
    pub fn id_field_of_catalog(catalog: Catalog) -> Result<&'static CatalogField> {
        Self::fields_of_catalog(catalog)?
            .into_iter()
            .find(|field| field.is_id_field())
            .ok_or_else(|| {
                Error::invalid_argument(format!(
                    "Catalog {} does not have ID column defined.",
                    catalog
                ))
            })
    }

    /// Sorted K-keys of the catalog
    pub fn keys_of_catalog(catalog: Catalog) -> Result<Vec<KKey>> {
        Self::keys_of_catalog_matching(catalog, |_| true)
    }

    /// Sorted K-keys of the catalog fields accepted by `predicate`
    pub fn keys_of_catalog_matching<P>(catalog: Catalog, predicate: P) -> Result<Vec<KKey>>
    where
        P: Fn(&CatalogField) -> bool,
    {
        let mut keys: Vec<KKey> = Self::fields_of_catalog(catalog)?
            .into_iter()
            .filter(|field| predicate(field))
            .map(|field| field.key.clone())
            .collect();
        keys.sort();
        Ok(keys)
    }

    pub fn for_kkey(key: &KKey) -> Option<&'static CatalogField> {
        FIELDS
            .by_key
            .get(key)
            .map(|&position| &FIELDS.fields[position])
    }

    pub fn metadata_for(key: &KKey) -> Option<&'static KKeyMetadata> {
        Self::for_kkey(key).map(|field| &field.metadata)
    }
}
