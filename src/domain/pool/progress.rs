//! Derived progress figures for a fetched pool

use super::Pool;

/// A pool is complete once contributions reach the target.
pub fn is_complete(pool: &Pool) -> bool {
    pool.current >= pool.target
}

/// Progress as a percentage in `[0, 100]`. A zero target reports 0%.
pub fn progress_ratio(pool: &Pool) -> f64 {
    if pool.target.is_zero() {
        return 0.0;
    }
    if pool.current >= pool.target {
        return 100.0;
    }
    let ratio = pool.current.to_f64_lossy() / pool.target.to_f64_lossy() * 100.0;
    ratio.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use primitive_types::U256;

    fn pool(current: u64, target: u64) -> Pool {
        Pool {
            description: "Concert tickets".to_string(),
            target: U256::from(target),
            recipient: "0x1".to_string(),
            current: U256::from(current),
            is_complete: false,
        }
    }

    #[test]
    fn test_progress_ratio() {
        assert_eq!(progress_ratio(&pool(50, 100)), 50.0);
        assert_eq!(progress_ratio(&pool(150, 100)), 100.0);
        assert_eq!(progress_ratio(&pool(0, 100)), 0.0);
    }

    #[test]
    fn test_progress_ratio_zero_target() {
        assert_eq!(progress_ratio(&pool(0, 0)), 0.0);
        assert_eq!(progress_ratio(&pool(10, 0)), 0.0);
    }

    #[test]
    fn test_progress_ratio_large_amounts() {
        let mut big = pool(0, 0);
        big.target = U256::MAX;
        big.current = U256::MAX / 4;
        let ratio = progress_ratio(&big);
        assert!((ratio - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_is_complete() {
        assert!(is_complete(&pool(100, 100)));
        assert!(is_complete(&pool(101, 100)));
        assert!(!is_complete(&pool(99, 100)));
    }
}
