//! Service layer providing the shelter registry operations on top of models.
//! - Separates business logic from data access.
//! - Reuses entity definitions in the `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod shelter_service;
#[cfg(test)]
pub mod test_support;
pub mod validation;
