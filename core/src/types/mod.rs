//! Entities returned by the panel and the parameter structs sent to it.
//!
//! # Design
//! Entities mirror the panel's `attributes` objects field for field;
//! timestamps stay as the panel's ISO-8601 strings. Parameter structs
//! serialize only the fields that are set, so a payload carries exactly
//! what the caller supplied. Fields that may be explicitly cleared use
//! `Option<Option<T>>`: `Some(None)` sends `null`, `None` omits the key.

mod account;
mod allocation;
mod backup;
mod common;
mod database;
mod database_host;
mod egg;
mod file;
mod mount;
mod node;
mod plugin;
mod role;
mod schedule;
mod server;
mod subuser;
mod user;

pub use account::*;
pub use allocation::*;
pub use backup::*;
pub use common::*;
pub use database::*;
pub use database_host::*;
pub use egg::*;
pub use file::*;
pub use mount::*;
pub use node::*;
pub use plugin::*;
pub use role::*;
pub use schedule::*;
pub use server::*;
pub use subuser::*;
pub use user::*;
