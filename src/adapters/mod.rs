//! Adapters - Infrastructure implementations of ports.
//!
//! - `http` - axum REST API
//! - `storage` - session store implementations
//! - `persistence` - result sinks for completed attempts

pub mod http;
pub mod persistence;
pub mod storage;
