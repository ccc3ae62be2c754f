//! Codec domain - token amounts, u256 words and addresses

mod amount;
mod address;
mod number_format;

pub use amount::{
    format_integer, format_units, parse_integer, parse_units, to_low_high, AmountCodec, U256Split,
    MAX_DECIMALS,
};
pub use address::{normalize as normalize_address, to_hex, ZERO_ADDRESS};
pub use number_format::NumberFormat;
