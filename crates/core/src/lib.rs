//! Dukkan Core - Shared domain types and storefront logic.
//!
//! This crate provides the types and rules used across all Dukkan components:
//! - `storefront` - Customer-facing themed store pages
//! - `admin` - Theme Builder for merchants
//! - `cli` - Command-line tools for theme documents
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP, no
//! sessions. Cart math, the checkout wizard, form validation and the Theme
//! Builder model all live here so both binaries agree on them.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices, emails and store slugs
//! - [`theme`] - The eight storefront themes and their design tokens
//! - [`catalog`] - Demo stores and products per theme
//! - [`cart`] - Cart lines, variant selection and totals
//! - [`checkout`] - Three-step checkout wizard
//! - [`account`] - Login and signup form validation
//! - [`contact`] - Contact form validation
//! - [`slider`] - Hero slider state machine
//! - [`builder`] - Theme Builder layout, settings and preview model
//! - [`i18n`] - Translation catalog
//! - [`rtl`] - Right-to-left layout helpers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod account;
pub mod builder;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod contact;
pub mod i18n;
pub mod rtl;
pub mod slider;
pub mod theme;
pub mod types;

pub use types::*;
