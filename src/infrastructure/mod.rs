//! Infrastructure layer - external chain access

pub mod starknet;
