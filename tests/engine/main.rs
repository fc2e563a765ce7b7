//! Engine Tests
//!
//! Integration tests for the stackdb engine:
//! - Store - immediate get/set/incr/delete/delete-by-value
//! - TransactionStack - MULTI/EXEC/DISCARD and nesting
//! - Executor - the command surface over the store
//! - Properties - proptest checks against a reference model

mod common;

mod executor_scenarios;
mod properties;
mod store_ops;
mod transactions;
