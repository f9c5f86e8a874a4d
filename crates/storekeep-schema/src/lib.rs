//! GraphQL schema definitions for storekeep.
//!
//! This crate contains the generated schema types for the commerce platform's
//! admin GraphQL API. Separating these into their own crate improves compile
//! times by avoiding recompilation when unrelated code changes.

// Disable all clippy lints for this crate - it's entirely generated code
#![allow(clippy::all)]
#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]

/// Admin API GraphQL schema types.
///
/// This module is generated from the admin API schema and exports all the
/// types needed for constructing type-safe GraphQL queries.
#[cynic::schema("admin")]
pub mod admin {}
