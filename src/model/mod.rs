//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod categories;
pub mod error;
pub mod identifiers;
pub mod ingest;
pub mod key_action;
pub mod record;

// Re-export for convenience
pub use categories::{category_of, AidCategory};
pub use error::{AidError, AppError};
pub use identifiers::{AidId, BeneficiaryId, InvalidIdentifier};
pub use ingest::{ingest_records, Ingested, RejectReason, RejectedRecord};
pub use key_action::KeyAction;
pub use record::{AidRecord, AidStatus};
