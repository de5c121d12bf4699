//! Order records and the catalog metadata attached to them at read time.
//!
//! Both types are read models. Orders are written by another system and the
//! catalog is owned by an external service; this crate only combines the two
//! for display.

use std::fmt;

/// Lifecycle states the lookup endpoints filter on.
///
/// Stored orders may carry other state strings; those are passed through as
/// text on [`Order::state`] and never parsed into this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderState {
    /// Requested by the user and awaiting completion.
    Required,
    /// Paid for by the user.
    Paid,
}

impl OrderState {
    /// Value persisted in the `state` column.
    ///
    /// # Examples
    /// ```
    /// use order_lookup::domain::OrderState;
    ///
    /// assert_eq!(OrderState::Paid.as_str(), "paid");
    /// ```
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Paid => "paid",
        }
    }
}

impl fmt::Display for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog metadata describing the model an order refers to.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogModel {
    /// Catalog identifier; joins to [`Order::model_id`].
    pub model_id: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// File format of the model.
    pub format: String,
    /// Display price. Opaque text, never used numerically.
    pub price: String,
    /// Identifier of the model's creator.
    pub created_by: String,
}

/// A persisted custom order, optionally enriched with catalog metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// Storage-assigned identifier.
    pub id: i32,
    /// Catalog model reference. Not validated locally.
    pub model_id: String,
    /// Opaque customisation payload.
    pub custom_params: String,
    /// Owning (consuming) user.
    pub user_id: String,
    /// Creator of the order; may differ from the owning user.
    pub created_by: String,
    /// Creation timestamp as the store renders it. Never reparsed.
    pub created_at: String,
    /// Quoted cost.
    pub cost_initial: f64,
    /// Settled cost.
    pub cost_final: f64,
    /// Lifecycle state as stored.
    pub state: String,
    /// Catalog metadata, present only when enrichment succeeded.
    pub model_details: Option<CatalogModel>,
}

impl Order {
    /// Attach catalog metadata to the order.
    #[must_use]
    pub fn with_model_details(mut self, model: CatalogModel) -> Self {
        self.model_details = Some(model);
        self
    }
}
