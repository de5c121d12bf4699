//! Diesel table definitions for the order store.
//!
//! The `customs` table is owned and migrated by the order-writing services;
//! this crate only reads it. Only the columns used in predicates or decoded
//! as-is are declared. `created_at`, `cost_initial` and `cost_final` are read
//! through casts in `models.rs`, so their storage types may be text,
//! timestamp or numeric without changing this crate.

diesel::table! {
    /// Custom orders placed against catalog models.
    customs (id) {
        /// Primary key assigned by the store.
        id -> Int4,
        /// Catalog model reference.
        model_id -> Text,
        /// Opaque customisation payload.
        custom_params -> Text,
        /// Owning (consuming) user.
        user_id -> Text,
        /// Originating creator.
        created_by -> Text,
        /// Lifecycle state, for example `required` or `paid`.
        state -> Text,
    }
}
