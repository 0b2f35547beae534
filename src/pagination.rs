use serde::Serialize;

/// A page of items together with the controls derived from the total count.
///
/// `pages` holds one entry per page from 1 to the last page inclusive and is
/// empty when there is nothing to show. `range_start`/`range_end` are the
/// one-based bounds of the displayed slice; both are 0 when `total` is 0.
#[derive(Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<usize>,
    pub page: usize,
    pub total: usize,
    pub range_start: usize,
    pub range_end: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, per_page: usize, total: usize) -> Self {
        let page = if current_page == 0 { 1 } else { current_page };

        let total_pages = total.div_ceil(per_page);
        let pages = (1..=total_pages).collect();

        // `page` has no upper bound, so the range math must not overflow.
        let (range_start, range_end) = if total == 0 {
            (0, 0)
        } else {
            (
                per_page.saturating_mul(page - 1).saturating_add(1),
                per_page.saturating_mul(page).min(total),
            )
        };

        Self {
            items,
            pages,
            page,
            total,
            range_start,
            range_end,
        }
    }
}
