//! Summary aggregates over a derived view: grouped totals for category
//! charts, scalar sums, and the storage-usage ratio shown on dashboards.

use std::collections::BTreeMap;

/// Fixed per-user storage ceiling (100 MiB).
pub const STORAGE_QUOTA_BYTES: u64 = 100 * 1024 * 1024;

/// Largest single upload accepted client-side (10 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Sum `value` per `key` group. An empty list yields an empty map.
pub fn totals_by<T, K, KF, VF>(items: &[T], key: KF, value: VF) -> BTreeMap<K, f64>
where
    K: Ord,
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> f64,
{
    let mut totals = BTreeMap::new();
    for item in items {
        *totals.entry(key(item)).or_insert(0.0) += value(item);
    }
    totals
}

/// Sum `value` over the whole list.
pub fn sum_by<T, F: Fn(&T) -> f64>(items: &[T], value: F) -> f64 {
    items.iter().map(value).sum()
}

/// Current storage consumption against the fixed quota.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StorageUsage {
    pub used_bytes: u64,
    pub quota_bytes: u64,
}

impl StorageUsage {
    /// Usage against the default quota.
    pub fn new(used_bytes: u64) -> Self {
        StorageUsage {
            used_bytes,
            quota_bytes: STORAGE_QUOTA_BYTES,
        }
    }

    /// Used fraction in `[0, ..)`. Zero quota yields zero, never a
    /// division by zero.
    pub fn ratio(&self) -> f64 {
        if self.quota_bytes == 0 {
            0.0
        } else {
            self.used_bytes as f64 / self.quota_bytes as f64
        }
    }

    /// `ratio` as a percentage, for progress-bar widths.
    pub fn percent(&self) -> f64 {
        self.ratio() * 100.0
    }

    /// Display label, e.g. `"42.00 MB / 100 MB"`.
    pub fn label(&self) -> String {
        format!(
            "{:.2} MB / {} MB",
            self.used_bytes as f64 / (1024.0 * 1024.0),
            self.quota_bytes / (1024 * 1024)
        )
    }

    /// Would adding `additional` bytes overshoot the quota?
    pub fn would_exceed(&self, additional: u64) -> bool {
        self.used_bytes + additional > self.quota_bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseRecord;

    fn expense(id: u64, amount: f64, category: &str) -> ExpenseRecord {
        ExpenseRecord {
            id,
            amount,
            category: category.to_string(),
            description: String::new(),
            date: 0,
        }
    }

    #[test]
    fn grouped_totals_sum_to_the_scalar_sum() {
        let list = vec![
            expense(1, 10.0, "Food"),
            expense(2, 5.5, "Transport"),
            expense(3, 4.5, "Food"),
        ];
        let per_category = totals_by(&list, |e| e.category.clone(), |e| e.amount);
        assert_eq!(per_category.len(), 2);
        assert_eq!(per_category["Food"], 14.5);
        assert_eq!(per_category["Transport"], 5.5);

        let grouped: f64 = per_category.values().sum();
        assert_eq!(grouped, sum_by(&list, |e| e.amount));
    }

    #[test]
    fn empty_list_aggregates_to_zero() {
        let empty: Vec<ExpenseRecord> = Vec::new();
        assert!(totals_by(&empty, |e| e.category.clone(), |e| e.amount).is_empty());
        assert_eq!(sum_by(&empty, |e| e.amount), 0.0);
    }

    #[test]
    fn usage_ratio_and_label() {
        let usage = StorageUsage::new(42 * 1024 * 1024);
        assert!((usage.ratio() - 0.42).abs() < 1e-9);
        assert_eq!(usage.label(), "42.00 MB / 100 MB");
    }

    #[test]
    fn zero_quota_never_divides_by_zero() {
        let usage = StorageUsage {
            used_bytes: 10,
            quota_bytes: 0,
        };
        assert_eq!(usage.ratio(), 0.0);
    }

    #[test]
    fn quota_overshoot_check() {
        let usage = StorageUsage::new(STORAGE_QUOTA_BYTES - 10);
        assert!(!usage.would_exceed(10));
        assert!(usage.would_exceed(11));
    }
}
