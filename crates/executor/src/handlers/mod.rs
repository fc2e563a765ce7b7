//! Command handlers organized by category.
//!
//! | Module | Commands |
//! |--------|----------|
//! | `kv` | Get, Set, Incr, Delete, DeleteByValue |
//! | `transaction` | Multi, Exec, Discard |
//! | `database` | Ping, Info |

pub mod database;
pub mod kv;
pub mod transaction;
