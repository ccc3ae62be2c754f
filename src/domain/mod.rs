//! Domain layer - codecs, pools, page state and the contract boundary

pub mod codec;
pub mod contract;
pub mod pool;
pub mod view;
