//! Foundation types for folio.
//!
//! This crate contains the types shared by every folio crate: the error
//! type, the terminal configuration, and the read-only profile data model
//! the built-in commands render.

pub mod config;
pub mod error;
pub mod profile;
