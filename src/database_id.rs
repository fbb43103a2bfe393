//! Database ID type definition.

/// Alias for the integer type used for mapping to database IDs.
pub type DatabaseId = i64;

/// Alias for the integer type used for mapping to transaction IDs.
pub type TransactionId = DatabaseId;
