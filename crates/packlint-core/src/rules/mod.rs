//! Concrete import rules.

mod denylist;
mod private_import;

pub use denylist::{DenylistError, DenylistRule};
pub use private_import::PrivateImportRule;
