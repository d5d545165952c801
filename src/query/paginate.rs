//! Pagination over a filtered result
//!
//! `paginate` never clamps the requested page; keeping `current_page` in
//! range is the job of the transition function.

/// One page of a filtered result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Records on this page (at most `page_size`)
    pub items: &'a [T],
    /// Requested 1-based page number
    pub current_page: usize,
    /// `ceil(len / page_size)`, 0 for an empty result
    pub total_pages: usize,
}

impl<T> Page<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Number of pages needed for `len` items
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Returns the window `[(current_page-1)*page_size, current_page*page_size)`
/// of `filtered`, clipped to its bounds.
///
/// Page 0 and pages past the end yield an empty slice.
pub fn paginate<T>(filtered: &[T], current_page: usize, page_size: usize) -> Page<'_, T> {
    let total_pages = total_pages(filtered.len(), page_size);

    let items = match current_page.checked_sub(1) {
        Some(page_index) if current_page <= total_pages => {
            let start = page_index * page_size;
            let end = (start + page_size).min(filtered.len());
            &filtered[start..end]
        }
        _ => &filtered[..0],
    };

    Page {
        items,
        current_page,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
    }

    #[test]
    fn test_first_and_last_page() {
        let data = items(25);

        let first = paginate(&data, 1, 10);
        assert_eq!(first.items, &data[0..10]);
        assert_eq!(first.total_pages, 3);

        let last = paginate(&data, 3, 10);
        assert_eq!(last.items, &data[20..25]);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let data = items(25);
        let page = paginate(&data, 4, 10);
        assert!(page.is_empty());
        assert_eq!(page.current_page, 4);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_page_zero_is_empty() {
        let data = items(5);
        assert!(paginate(&data, 0, 10).is_empty());
    }

    #[test]
    fn test_empty_input() {
        let data: Vec<usize> = Vec::new();
        let page = paginate(&data, 1, 10);
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 0);
    }
}
