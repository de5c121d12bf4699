//! DTOs for decoding catalog responses.
//!
//! The catalog wraps each model in a `model` envelope. Descriptive fields may
//! be missing and decode as empty strings; the model id is required.

use serde::Deserialize;

use crate::domain::CatalogModel;

#[derive(Debug, Deserialize)]
pub(super) struct CatalogResponseDto {
    pub(super) model: CatalogModelDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct CatalogModelDto {
    pub(super) model_id: String,
    #[serde(default)]
    pub(super) name: String,
    #[serde(default)]
    pub(super) description: String,
    #[serde(default)]
    pub(super) format: String,
    #[serde(default)]
    pub(super) price: String,
    #[serde(default)]
    pub(super) created_by: String,
}

impl CatalogResponseDto {
    pub(super) fn into_domain(self) -> CatalogModel {
        let model = self.model;
        CatalogModel {
            model_id: model.model_id,
            name: model.name,
            description: model.description,
            format: model.format,
            price: model.price,
            created_by: model.created_by,
        }
    }
}
