//! orderlens-table - In-memory dataset model for order analytics
//!
//! This crate provides the tabular substrate the orderlens summarizers run on:
//!
//! - **Dataset**: column-oriented, immutable-for-the-call collection of typed columns
//! - **Value**: a single cell, hashable and totally ordered so it can key a group
//! - **Grouping**: partitions rows by an ordered tuple of column values
//! - **ResultTable**: the flat, ordered output shape handed to presentation layers
//!
//! # Design
//!
//! Datasets are validated once at construction (equal column lengths, unique
//! names). Every lookup by column name afterwards either succeeds or fails with
//! `TableError::ColumnNotFound`; nothing mutates a dataset after it is built.

pub mod dataset;
pub mod error;
pub mod group;
pub mod schema;
pub mod table;
pub mod value;

pub use dataset::*;
pub use error::*;
pub use group::*;
pub use schema::*;
pub use table::*;
pub use value::*;
