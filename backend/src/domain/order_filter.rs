//! Equality predicate used to select orders.
//!
//! A filter names one identifier column, the value it must equal, and an
//! optional lifecycle state constraint. Persistence adapters bind the value
//! as a query parameter.

use thiserror::Error;

use super::OrderState;

/// Identifier column an [`OrderFilter`] matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterColumn {
    /// The owning (consuming) user, `user_id`.
    OwningUser,
    /// The originating creator, `created_by`.
    Creator,
}

impl FilterColumn {
    /// Field name used in logs and validation messages.
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::OwningUser => "user_id",
            Self::Creator => "created_by",
        }
    }
}

/// Validation errors raised when building a [`FilterValue`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterValueError {
    /// Value is empty once surrounding whitespace is removed.
    #[error("filter value must not be blank")]
    Blank,
}

/// Opaque identifier compared for equality. Never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterValue(String);

impl FilterValue {
    /// Validate and wrap an identifier.
    ///
    /// # Examples
    /// ```
    /// use order_lookup::domain::FilterValue;
    ///
    /// assert!(FilterValue::new("u1").is_ok());
    /// assert!(FilterValue::new("  ").is_err());
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self, FilterValueError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(FilterValueError::Blank);
        }
        Ok(Self(raw))
    }

    /// Borrow the identifier.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for FilterValue {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Predicate selecting which orders a lookup returns.
///
/// # Examples
/// ```
/// use order_lookup::domain::{FilterColumn, FilterValue, OrderFilter, OrderState};
///
/// let value = FilterValue::new("u1").expect("valid value");
/// let filter = OrderFilter::owned_by(value, OrderState::Paid);
/// assert_eq!(filter.column(), FilterColumn::OwningUser);
/// assert_eq!(filter.state(), Some(OrderState::Paid));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderFilter {
    column: FilterColumn,
    value: FilterValue,
    state: Option<OrderState>,
}

impl OrderFilter {
    /// Orders owned by `user` in the given lifecycle `state`.
    pub fn owned_by(user: FilterValue, state: OrderState) -> Self {
        Self {
            column: FilterColumn::OwningUser,
            value: user,
            state: Some(state),
        }
    }

    /// Orders created by `creator`, regardless of state.
    pub fn created_by(creator: FilterValue) -> Self {
        Self {
            column: FilterColumn::Creator,
            value: creator,
            state: None,
        }
    }

    /// Column the value is compared against.
    pub fn column(&self) -> FilterColumn {
        self.column
    }

    /// Identifier the column must equal.
    pub fn value(&self) -> &FilterValue {
        &self.value
    }

    /// Optional lifecycle state constraint.
    pub fn state(&self) -> Option<OrderState> {
        self.state
    }
}
