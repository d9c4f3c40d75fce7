//! Spanish language profile for the Lengua grammar checker.
//!
//! [`Spanish`] declares the rules active for Spanish and its regional
//! variants, resolves their priorities, and rewrites straight quotes into
//! Spanish typography (« » guillemets, ‘ ’ single quotes).
//!
//! - [`profile`] -- The `Spanish` profile and its identity data
//! - [`rules`] -- Rule declarations in construction order
//! - [`priorities`] -- Rule priority table
//! - [`typography`] -- Quotation-mark normalization

pub mod priorities;
pub mod profile;
pub mod rules;
pub mod typography;

pub use profile::Spanish;
