//! # Filter/sort pipeline for derived list views
//!
//! Every resource panel shows a projection of its cached list: category or
//! status filtering, an inclusive date range, and one of a small set of sort
//! orders. [`derive`] is that projection as a pure function — no side effects,
//! deterministic for identical inputs, empty in means empty out.
//!
//! Record types plug in through the [`ViewRecord`] trait, which exposes the
//! timestamps and keys the pipeline can operate on. Every accessor except
//! `created_at` has a default, so a type implements only what it has.
//!
//! ## Criteria families
//!
//! - [`CategoryFilter`] — equality on a categorical key, case-insensitive,
//!   with [`CategoryFilter::All`] as the no-filtering sentinel. A key the
//!   list never contains simply matches nothing; it is not an error.
//! - [`DateRange`] — inclusive bounds on [`ViewRecord::event_at`]. An absent
//!   bound is unbounded on that side.
//! - [`SortOrder`] — most-recent-first on `updated_at` or `created_at`, or
//!   due-date ascending. Due-date sorting puts records with a due date first
//!   (ascending); undated records follow, newest-created first.
//!
//! The sort is stable, so records that compare equal keep their relative
//! order from the input list.

use std::cmp::Ordering;

use crate::models::{ExpenseRecord, FileRecord, NoteRecord, PhotoRecord, TaskRecord};

/// Field access the pipeline needs from a record.
pub trait ViewRecord: Clone {
    /// Creation timestamp, epoch ms.
    fn created_at(&self) -> i64;

    /// Last-modified timestamp. Defaults to the creation time for
    /// immutable records.
    fn updated_at(&self) -> i64 {
        self.created_at()
    }

    /// Categorical key for equality filtering, if the record has one.
    fn category_key(&self) -> Option<&str> {
        None
    }

    /// The timestamp date-range filters apply to.
    fn event_at(&self) -> i64 {
        self.created_at()
    }

    /// Due timestamp, if the record has one.
    fn due_at(&self) -> Option<i64> {
        None
    }
}

/// Equality filter on a categorical field.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Sentinel: no filtering.
    #[default]
    All,
    /// Keep only records whose key equals this value (case-insensitive).
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, key: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(want) => {
                key.map_or(false, |k| k.eq_ignore_ascii_case(want))
            }
        }
    }
}

/// Inclusive date range; `None` means unbounded on that side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct DateRange {
    pub start: Option<i64>,
    pub end: Option<i64>,
}

impl DateRange {
    pub fn contains(&self, t: i64) -> bool {
        self.start.map_or(true, |s| t >= s) && self.end.map_or(true, |e| t <= e)
    }
}

/// Sort order for a derived view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Most recently modified first.
    #[default]
    UpdatedDesc,
    /// Most recently created first.
    CreatedDesc,
    /// Due date ascending; undated records last, newest-created first
    /// among themselves.
    DueDateAsc,
}

/// Combined filter and sort criteria.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Criteria {
    pub category: CategoryFilter,
    pub dates: DateRange,
    pub sort: SortOrder,
}

impl Criteria {
    /// Criteria with only a sort order, no filtering.
    pub fn sorted(sort: SortOrder) -> Self {
        Criteria {
            sort,
            ..Default::default()
        }
    }
}

/// Project a raw list into its derived view.
pub fn derive<T: ViewRecord>(items: &[T], criteria: &Criteria) -> Vec<T> {
    let mut out: Vec<T> = items
        .iter()
        .filter(|r| {
            criteria.category.matches(r.category_key()) && criteria.dates.contains(r.event_at())
        })
        .cloned()
        .collect();
    out.sort_by(|a, b| compare(a, b, criteria.sort));
    out
}

fn compare<T: ViewRecord>(a: &T, b: &T, order: SortOrder) -> Ordering {
    match order {
        SortOrder::UpdatedDesc => b.updated_at().cmp(&a.updated_at()),
        SortOrder::CreatedDesc => b.created_at().cmp(&a.created_at()),
        SortOrder::DueDateAsc => match (a.due_at(), b.due_at()) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => b.created_at().cmp(&a.created_at()),
        },
    }
}

impl ViewRecord for NoteRecord {
    fn created_at(&self) -> i64 {
        self.created_at
    }
    fn updated_at(&self) -> i64 {
        self.updated_at
    }
}

impl ViewRecord for FileRecord {
    fn created_at(&self) -> i64 {
        self.created_at
    }
}

impl ViewRecord for PhotoRecord {
    fn created_at(&self) -> i64 {
        self.created_at
    }
}

impl ViewRecord for TaskRecord {
    fn created_at(&self) -> i64 {
        self.created_at
    }
    fn updated_at(&self) -> i64 {
        self.updated_at
    }
    fn category_key(&self) -> Option<&str> {
        Some(self.status.as_str())
    }
    fn due_at(&self) -> Option<i64> {
        self.due_date
    }
}

impl ViewRecord for ExpenseRecord {
    fn created_at(&self) -> i64 {
        self.date
    }
    fn category_key(&self) -> Option<&str> {
        Some(&self.category)
    }
    fn event_at(&self) -> i64 {
        self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStatus;

    fn task(id: u64, status: TaskStatus, due: Option<i64>, created: i64) -> TaskRecord {
        TaskRecord {
            id,
            title: format!("task-{id}"),
            description: String::new(),
            status,
            due_date: due,
            created_at: created,
            updated_at: created,
            owner: "u1".to_string(),
        }
    }

    fn expense(id: u64, amount: f64, category: &str, date: i64) -> ExpenseRecord {
        ExpenseRecord {
            id,
            amount,
            category: category.to_string(),
            description: String::new(),
            date,
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let out = derive::<TaskRecord>(&[], &Criteria::default());
        assert!(out.is_empty());
    }

    #[test]
    fn category_filter_is_case_insensitive() {
        let list = vec![
            expense(1, 5.0, "Food", 100),
            expense(2, 7.0, "Transport", 100),
            expense(3, 2.0, "food", 100),
        ];
        let c = Criteria {
            category: CategoryFilter::Only("food".to_string()),
            ..Default::default()
        };
        let out = derive(&list, &c);
        assert_eq!(out.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn unknown_category_matches_nothing() {
        let list = vec![expense(1, 5.0, "Food", 100)];
        let c = Criteria {
            category: CategoryFilter::Only("utilities".to_string()),
            ..Default::default()
        };
        assert!(derive(&list, &c).is_empty());
    }

    #[test]
    fn date_range_bounds_are_inclusive_and_optional() {
        let list = vec![
            expense(1, 1.0, "a", 10),
            expense(2, 1.0, "a", 20),
            expense(3, 1.0, "a", 30),
        ];
        let both = Criteria {
            dates: DateRange {
                start: Some(10),
                end: Some(20),
            },
            ..Default::default()
        };
        let ids: Vec<u64> = derive(&list, &both).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 1]);

        let open_start = Criteria {
            dates: DateRange {
                start: None,
                end: Some(20),
            },
            ..Default::default()
        };
        assert_eq!(derive(&list, &open_start).len(), 2);

        let open_end = Criteria {
            dates: DateRange {
                start: Some(20),
                end: None,
            },
            ..Default::default()
        };
        assert_eq!(derive(&list, &open_end).len(), 2);
    }

    #[test]
    fn derive_is_a_subset_and_idempotent() {
        let list = vec![
            task(1, TaskStatus::Done, Some(50), 1),
            task(2, TaskStatus::Todo, None, 2),
            task(3, TaskStatus::Done, None, 3),
        ];
        let c = Criteria {
            category: CategoryFilter::Only("done".to_string()),
            sort: SortOrder::DueDateAsc,
            ..Default::default()
        };
        let once = derive(&list, &c);
        assert!(once.iter().all(|t| list.contains(t)));
        let twice = derive(&once, &c);
        assert_eq!(once, twice);
    }

    #[test]
    fn done_tasks_sort_due_first_then_undated_by_created_desc() {
        // 12 tasks: 4 done with due dates, 4 done without, 4 not done.
        let mut list = Vec::new();
        for i in 0..4u64 {
            list.push(task(i, TaskStatus::Done, Some(400 - i as i64 * 100), i as i64));
        }
        for i in 4..8u64 {
            list.push(task(i, TaskStatus::Done, None, i as i64 * 10));
        }
        for i in 8..12u64 {
            list.push(task(i, TaskStatus::Todo, Some(i as i64), i as i64));
        }
        let c = Criteria {
            category: CategoryFilter::Only("done".to_string()),
            sort: SortOrder::DueDateAsc,
            ..Default::default()
        };
        let out = derive(&list, &c);
        assert_eq!(out.len(), 8);
        assert!(out.iter().all(|t| t.status == TaskStatus::Done));
        // Dated first, ascending: due 100, 200, 300, 400.
        let due: Vec<i64> = out[..4].iter().filter_map(|t| t.due_date).collect();
        assert_eq!(due, vec![100, 200, 300, 400]);
        // Undated after, newest created first: 70, 60, 50, 40.
        assert!(out[4..].iter().all(|t| t.due_date.is_none()));
        let created: Vec<i64> = out[4..].iter().map(|t| t.created_at).collect();
        assert_eq!(created, vec![70, 60, 50, 40]);
    }

    #[test]
    fn updated_desc_orders_most_recent_first() {
        let mut a = task(1, TaskStatus::Todo, None, 5);
        a.updated_at = 50;
        let mut b = task(2, TaskStatus::Todo, None, 6);
        b.updated_at = 90;
        let out = derive(&[a, b], &Criteria::sorted(SortOrder::UpdatedDesc));
        assert_eq!(out.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2, 1]);
    }

    #[test]
    fn stable_sort_preserves_input_order_on_ties() {
        let list = vec![
            expense(1, 1.0, "a", 100),
            expense(2, 1.0, "a", 100),
            expense(3, 1.0, "a", 100),
        ];
        let out = derive(&list, &Criteria::sorted(SortOrder::CreatedDesc));
        assert_eq!(out.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
