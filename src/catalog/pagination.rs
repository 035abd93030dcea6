//! Pagination

/// Number of pages needed to show `total` entries at `page_size` per page.
///
/// A page size of zero yields zero pages.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }

    total.div_ceil(page_size)
}

/// The slice of `items` shown on the 1-based `page`.
///
/// Pages outside `1..=page_count` (including page 0) are empty rather than an error.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let Some(start) = page
        .checked_sub(1)
        .and_then(|index| index.checked_mul(page_size))
    else {
        return &[];
    };

    let end = start.saturating_add(page_size).min(items.len());

    items.get(start..end).unwrap_or_default()
}

/// One page of an ordered result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page<'r, T> {
    items: &'r [T],
    number: usize,
    page_count: usize,
    total: usize,
}

impl<'r, T> Page<'r, T> {
    /// Slice `items` to the 1-based `number` at `page_size`.
    pub fn new(items: &'r [T], number: usize, page_size: usize) -> Self {
        Self {
            items: paginate(items, number, page_size),
            number,
            page_count: page_count(items.len(), page_size),
            total: items.len(),
        }
    }

    /// Entries on this page.
    pub fn items(&self) -> &'r [T] {
        self.items
    }

    /// 1-based page number requested.
    pub fn number(&self) -> usize {
        self.number
    }

    /// Total number of pages in the result.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Total number of entries across every page.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Whether a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.number >= 1 && self.number < self.page_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, 3), 0);
        assert_eq!(page_count(3, 3), 1);
        assert_eq!(page_count(4, 3), 2);
        assert_eq!(page_count(6, 3), 2);
        assert_eq!(page_count(5, 0), 0);
    }

    #[test]
    fn pages_partition_the_input() {
        let items: Vec<u32> = (1..=8).collect();
        let pages = page_count(items.len(), 3);

        let rebuilt: Vec<u32> = (1..=pages)
            .flat_map(|page| paginate(&items, page, 3).iter().copied())
            .collect();

        assert_eq!(rebuilt, items);
        assert_eq!(paginate(&items, 3, 3), &[7, 8]);
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let items = [1, 2, 3, 4];

        assert!(paginate(&items, 0, 3).is_empty());
        assert!(paginate(&items, 3, 3).is_empty());
        assert!(paginate(&items, usize::MAX, 3).is_empty());
    }

    #[test]
    fn page_navigation_flags() {
        let items = [1, 2, 3, 4, 5, 6, 7];

        let first = Page::new(&items, 1, 3);
        assert!(!first.has_previous());
        assert!(first.has_next());
        assert_eq!(first.items(), &[1, 2, 3]);

        let last = Page::new(&items, 3, 3);
        assert!(last.has_previous());
        assert!(!last.has_next());
        assert_eq!(last.items(), &[7]);
        assert_eq!(last.page_count(), 3);
        assert_eq!(last.total(), 7);
    }
}
