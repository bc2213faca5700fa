//! Business logic services for the storefront.
//!
//! - [`auth`] - Customer registration and password login

pub mod auth;
