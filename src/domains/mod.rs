//! Domains module containing business logic organized by bounded contexts.
//!
//! - **tools**: the tool registry and the router resolving tool ids
//! - **pages**: portal page rendering and static export
//! - **compress**: the PDF compressor tool

pub mod compress;
pub mod pages;
pub mod tools;
