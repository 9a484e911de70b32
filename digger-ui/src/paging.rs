//! Page window computation for paginated list views.
//!
//! Turns a flat (page, pages) pair into the bounded control sequence the
//! paginator renders: nothing for a single page, a direct run of numbers for
//! short lists, and a truncated window with ellipses and First/Previous/
//! Next/Last controls for long ones. Every control carries its target page
//! already clamped to [1, pages], so an out-of-range fetch cannot be issued
//! from a rendered control.

/// How many pages a list may have before the window is truncated.
const MAX_DIRECT: u32 = 7;
/// Pages shown on each side of the current page in a truncated window.
const OFFSET: u32 = 3;

/// One numbered page control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageItem {
    pub number: u32,
    pub active: bool,
}

/// A truncated window with its navigation controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub items: Vec<PageItem>,
    pub left_ellipsis: bool,
    pub right_ellipsis: bool,
    /// Target pages for First/Previous/Next/Last, pre-clamped.
    pub first: u32,
    pub previous: u32,
    pub next: u32,
    pub last: u32,
}

/// Render plan for the paginator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PagePlan {
    /// Fewer than two pages: no control at all.
    None,
    /// Every page number rendered directly.
    Direct(Vec<PageItem>),
    /// Truncated window around the current page.
    Windowed(PageWindow),
}

fn items(from: u32, to: u32, page: u32) -> Vec<PageItem> {
    (from..=to)
        .map(|number| PageItem {
            number,
            active: number == page,
        })
        .collect()
}

/// Compute the render plan for the current (page, pages) pair.
pub fn page_window(page: u32, pages: u32) -> PagePlan {
    if pages < 2 {
        return PagePlan::None;
    }
    if pages < MAX_DIRECT {
        return PagePlan::Direct(items(1, pages, page));
    }

    let start = page.saturating_sub(OFFSET).max(1);
    let end = (page + OFFSET).min(pages);
    PagePlan::Windowed(PageWindow {
        items: items(start, end, page),
        left_ellipsis: start != 1,
        right_ellipsis: end != pages,
        first: 1,
        previous: clamp_page(page.saturating_sub(1), pages),
        next: clamp_page(page + 1, pages),
        last: pages,
    })
}

/// Clamp a requested page number into [1, pages].
pub fn clamp_page(target: u32, pages: u32) -> u32 {
    target.clamp(1, pages.max(1))
}
