//! Pagination over a derived view.
//!
//! Pages are 1-based. The requested index is clamped to the valid range, so
//! a deletion that shrinks the list can never leave a panel on a blank page.

/// One page of a derived view.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// The page actually shown, after clamping.
    pub page: usize,
    pub total_pages: usize,
}

/// Number of pages for a list of `len` items, minimum 1.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    let size = page_size.max(1);
    (len.div_ceil(size)).max(1)
}

/// Slice out page `page` (1-based, clamped) of `items`.
pub fn paginate<T: Clone>(items: &[T], page_size: usize, page: usize) -> Page<T> {
    let size = page_size.max(1);
    let total = total_pages(items.len(), size);
    let page = page.clamp(1, total);
    let start = (page - 1) * size;
    Page {
        items: items.iter().skip(start).take(size).cloned().collect(),
        page,
        total_pages: total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_has_one_empty_page() {
        let p = paginate::<u32>(&[], 5, 1);
        assert!(p.items.is_empty());
        assert_eq!(p.page, 1);
        assert_eq!(p.total_pages, 1);
    }

    #[test]
    fn total_pages_is_ceil_with_minimum_one() {
        assert_eq!(total_pages(0, 5), 1);
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(6, 5), 2);
        assert_eq!(total_pages(10, 5), 2);
        assert_eq!(total_pages(11, 5), 3);
    }

    #[test]
    fn pages_concatenate_to_the_full_list_exactly_once() {
        let items: Vec<u32> = (0..12).collect();
        let total = total_pages(items.len(), 5);
        let mut rebuilt = Vec::new();
        for page in 1..=total {
            rebuilt.extend(paginate(&items, 5, page).items);
        }
        assert_eq!(rebuilt, items);
    }

    #[test]
    fn out_of_range_page_clamps_to_last() {
        let items: Vec<u32> = (0..6).collect();
        let p = paginate(&items, 5, 9);
        assert_eq!(p.page, 2);
        assert_eq!(p.items, vec![5]);
    }

    #[test]
    fn deleting_the_only_item_on_the_last_page_clamps_back() {
        // Two pages of 5, then the 6th item is deleted while page 2 is shown.
        let before: Vec<u32> = (0..6).collect();
        assert_eq!(paginate(&before, 5, 2).page, 2);

        let after: Vec<u32> = (0..5).collect();
        let p = paginate(&after, 5, 2);
        assert_eq!(p.page, 1);
        assert_eq!(p.total_pages, 1);
        assert_eq!(p.items.len(), 5);
    }

    #[test]
    fn zero_page_size_is_treated_as_one() {
        let p = paginate(&[1, 2, 3], 0, 2);
        assert_eq!(p.total_pages, 3);
        assert_eq!(p.items, vec![2]);
    }
}
