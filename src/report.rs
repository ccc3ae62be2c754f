// src/report.rs
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::domain::codec::{normalize_address, AmountCodec};
use crate::domain::pool::{is_complete, progress_ratio, Pool, PoolId, DEFAULT_EMOJI};
use crate::shared::types::TokenInfo;
use crate::shared::utils::shorten_address;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PoolStatus {
    Active,
    Complete,
}

impl PoolStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PoolStatus::Active => "Active",
            PoolStatus::Complete => "Complete!",
        }
    }
}

/// Display-ready view of a fetched pool
#[derive(Debug, Clone, Serialize)]
pub struct PoolReport {
    pub pool_id: u64,
    pub description: String,
    pub status: PoolStatus,
    pub token: String,
    // Human amounts, rounded for display
    pub target: String,
    pub current: String,
    // Exact base units, grouped
    pub target_base_units: String,
    pub current_base_units: String,
    pub recipient: String,
    pub progress_percent: f64,
    pub fetched_at: DateTime<Utc>,
}

impl PoolReport {
    pub fn new(pool_id: PoolId, pool: &Pool, codec: &AmountCodec, token: &TokenInfo) -> Self {
        let status = if pool.is_complete || is_complete(pool) {
            PoolStatus::Complete
        } else {
            PoolStatus::Active
        };

        Self {
            pool_id: pool_id.0,
            description: pool.description.clone(),
            status,
            token: token.symbol.clone(),
            target: codec.from_base_units(pool.target),
            current: codec.from_base_units(pool.current),
            target_base_units: codec.format_integer(pool.target),
            current_base_units: codec.format_integer(pool.current),
            recipient: normalize_address(pool.recipient.as_str())
                .unwrap_or_else(|_| pool.recipient.clone()),
            progress_percent: progress_ratio(pool),
            fetched_at: Utc::now(),
        }
    }
}

impl fmt::Display for PoolReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} #{} {}  [{}]",
            DEFAULT_EMOJI,
            self.pool_id,
            self.description,
            self.status.as_str()
        )?;
        writeln!(f, "  Target:    {} {}", self.target, self.token)?;
        writeln!(
            f,
            "  Current:   {} {} ({:.1}%)",
            self.current, self.token, self.progress_percent
        )?;
        write!(f, "  Recipient: {}", shorten_address(&self.recipient))
    }
}
