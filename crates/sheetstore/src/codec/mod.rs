//! Binary encoding of cell records.
//!
//! The format is a flat byte stream with two sentinels: [`US`] ends every
//! scalar field and [`RS`] ends a record. There is no escaping, so strings
//! containing either sentinel cannot be stored.

pub mod primitive;
pub mod record;

pub use primitive::{FALSE, RS, TRUE, US};
pub use record::{
    decode_cell, decode_data_validation, decode_style, encode_cell, encode_data_validation,
    encode_style,
};
