//! Domain types shared by every content resource.
//!
//! This module provides:
//! - `Status` / `ServiceStatus` and the boolean flag coercion used at the store boundary
//! - Server-side timestamps
//! - JSON list encoding for variable-shaped columns

pub mod document;
pub mod primitives;

pub use document::{decode_list, encode_list, FeatureCard};
pub use primitives::{
    flag_to_int, int_to_flag, timestamp_now, ServiceStatus, Status, StatusParseError,
};
