//! Service layer providing business-oriented operations on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Owns the multi-step consistency rules (single active running text,
//!   category deletion reassignment, company profile singleton), each run in
//!   one database transaction.

pub mod errors;
pub mod auth;
pub mod user_service;
pub mod post_service;
pub mod category_service;
pub mod offering_service;
pub mod team_service;
pub mod company_profile_service;
pub mod running_text_service;
#[cfg(test)]
pub mod test_support;
#[cfg(test)]
mod scenarios;
