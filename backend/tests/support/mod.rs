//! Helpers for suites that run against embedded PostgreSQL.

mod cluster_skip;

pub use cluster_skip::handle_cluster_setup_failure;

/// Render a `postgres` error with its SQLSTATE and message.
///
/// `postgres::Error`'s `Display` often collapses to `db error`, which hides
/// why seeding failed.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    let Some(db_error) = error.as_db_error() else {
        return error.to_string();
    };

    let mut summary = format!(
        "postgres error {:?}: {}",
        db_error.code(),
        db_error.message()
    );
    if let Some(detail) = db_error.detail() {
        summary.push_str("; detail: ");
        summary.push_str(detail);
    }
    summary
}
