//! Service layer on top of `models`.
//! - Presenters turn stored records into wire views.
//! - Validators enforce registration rules in a fixed order.
//! - Repositories abstract the store so the rules can be tested without a database.

pub mod errors;
pub mod country;
pub mod auth;
pub mod seed;
#[cfg(test)]
pub mod test_support;
