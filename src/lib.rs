//! Termitek (workspace facade crate).
//!
//! This package keeps the `termitek::{core,input,term,types}` public API
//! stable while the implementation lives in dedicated crates under
//! `crates/`.

pub use termitek_core as core;
pub use termitek_input as input;
pub use termitek_term as term;
pub use termitek_types as types;
