use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Phrase, Section};
use crate::error::CatalogError;

/// JSON shape for a host-supplied phrase pool.
///
/// Either a flat `phrases` array or a `sections` array; when both are
/// present the sections win and `phrases` is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogManifest {
    #[serde(default)]
    pub phrases: Vec<Phrase>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl CatalogManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn into_catalog(self) -> Result<Catalog, CatalogError> {
        if self.sections.is_empty() {
            Catalog::new(self.phrases)
        } else {
            Catalog::sectioned(self.sections)
        }
    }
}

impl Catalog {
    /// Parse and validate a catalog from a JSON manifest.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        CatalogManifest::from_json(json)?.into_catalog()
    }
}
