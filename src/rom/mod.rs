//! Serialization of the packed stimulus table for hardware simulation.
//!
//! Word `n` of the table is stored at address `n`, and each word keeps the
//! `{d, x}` layout produced by [`pack`](crate::fixed_point::pack).

mod hex;
mod verilog;

pub use hex::write_hex_image;
pub use verilog::{address_width_for, validate_module_name, write_verilog_rom, RomOptions};
