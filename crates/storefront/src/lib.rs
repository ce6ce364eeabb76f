//! Carved Rock Storefront data layer.
//!
//! This crate provides database access for the public storefront: a
//! read-only product catalog and a read/write cart store, both over
//! `PostgreSQL`. The HTTP layer lives elsewhere and consumes this crate.
//!
//! When no database is configured the product catalog serves a built-in
//! sample list, so templates and demos work without infrastructure. The
//! cart store has no such mode - carts are mutable state and always need a
//! real database.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod models;
