//! Pure pagination math for snippet lists.
//!
//! Pages are zero-based and `total_pages` is a count, so valid indices
//! are `0..total_pages`.

/// How many pages either side of the current one the pager shows.
pub const PAGER_RADIUS: u32 = 5;

/// A previous/next control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerLink {
    pub target: u32,
    pub disabled: bool,
}

/// The page window and controls rendered under a snippet list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    pub current_page: u32,
    pub total_pages: u32,
    pub pages: Vec<u32>,
    pub previous: PagerLink,
    pub next: PagerLink,
}

impl Pager {
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        Self::with_radius(current_page, total_pages, PAGER_RADIUS)
    }

    pub fn with_radius(current_page: u32, total_pages: u32, radius: u32) -> Self {
        Self {
            current_page,
            total_pages,
            pages: page_window(current_page, total_pages, radius),
            previous: PagerLink {
                target: current_page.saturating_sub(1),
                disabled: previous_disabled(current_page),
            },
            next: PagerLink {
                target: current_page.saturating_add(1),
                disabled: next_disabled(current_page, total_pages),
            },
        }
    }

    pub fn is_current(&self, page: u32) -> bool {
        page == self.current_page
    }
}

/// Contiguous page indices within `radius` of `current_page`, clamped to
/// `[0, total_pages - 1]`. A `total_pages` of zero counts as one page.
///
/// `current_page` is not validated; an index past the end yields an
/// empty window.
pub fn page_window(current_page: u32, total_pages: u32, radius: u32) -> Vec<u32> {
    let last = total_pages.max(1) - 1;
    let start = current_page.saturating_sub(radius);
    let end = current_page.saturating_add(radius).min(last);
    (start..=end).collect()
}

pub fn previous_disabled(current_page: u32) -> bool {
    current_page == 0
}

/// Compares against the page count, not the last index, matching the
/// site's existing pager. See DESIGN.md before changing.
pub fn next_disabled(current_page: u32, total_pages: u32) -> bool {
    current_page == total_pages
}
