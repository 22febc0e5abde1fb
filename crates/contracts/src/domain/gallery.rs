//! Filtered, paginated view over the project catalog.
//!
//! Pages are 1-based. Every function here clamps instead of failing: an
//! out-of-range page resolves to the nearest boundary page.

use super::catalog::ProjectRecord;

pub const NARROW_BREAKPOINT: u32 = 640;
pub const MEDIUM_BREAKPOINT: u32 = 1024;

const NARROW_PAGE_SIZE: usize = 2;
const MEDIUM_PAGE_SIZE: usize = 2;
const WIDE_PAGE_SIZE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GalleryFilter {
    #[default]
    All,
    Tag(&'static str),
}

/// Filter buttons in display order.
pub const FILTERS: [GalleryFilter; 5] = [
    GalleryFilter::All,
    GalleryFilter::Tag("Unity"),
    GalleryFilter::Tag("Godot"),
    GalleryFilter::Tag("Web"),
    GalleryFilter::Tag("API"),
];

impl GalleryFilter {
    pub fn matches(&self, project: &ProjectRecord) -> bool {
        match self {
            GalleryFilter::All => true,
            GalleryFilter::Tag(tag) => project.has_tag(tag),
        }
    }

    /// Stable identifier, `"all"` for the sentinel.
    pub fn key(&self) -> &'static str {
        match self {
            GalleryFilter::All => "all",
            GalleryFilter::Tag(tag) => *tag,
        }
    }

    /// Tag names are shown verbatim; only the sentinel needs translating.
    pub fn translation_key(&self) -> Option<&'static str> {
        match self {
            GalleryFilter::All => Some("projects.filter.all"),
            GalleryFilter::Tag(_) => None,
        }
    }
}

pub fn filter_projects(data: &[ProjectRecord], filter: GalleryFilter) -> Vec<&ProjectRecord> {
    data.iter().filter(|p| filter.matches(p)).collect()
}

/// ceil(count / page_size), never less than 1.
pub fn total_pages(filtered_count: usize, page_size: usize) -> usize {
    filtered_count.div_ceil(page_size.max(1)).max(1)
}

pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Records of `page` after filtering, in catalog order.
pub fn page_slice(
    data: &[ProjectRecord],
    filter: GalleryFilter,
    page: usize,
    page_size: usize,
) -> Vec<&ProjectRecord> {
    let page_size = page_size.max(1);
    let filtered = filter_projects(data, filter);
    let page = clamp_page(page, total_pages(filtered.len(), page_size));
    filtered
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect()
}

/// Items per page for a viewport width in CSS pixels.
pub fn page_size_for_width(width: u32) -> usize {
    if width < NARROW_BREAKPOINT {
        NARROW_PAGE_SIZE
    } else if width < MEDIUM_BREAKPOINT {
        MEDIUM_PAGE_SIZE
    } else {
        WIDE_PAGE_SIZE
    }
}

/// 1-based inclusive range of items on `page`, `None` when nothing matches.
pub fn visible_range(page: usize, page_size: usize, count: usize) -> Option<(usize, usize)> {
    if count == 0 {
        return None;
    }
    let page_size = page_size.max(1);
    let page = clamp_page(page, total_pages(count, page_size));
    let start = (page - 1) * page_size + 1;
    let end = (page * page_size).min(count);
    Some((start, end))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryState {
    pub filter: GalleryFilter,
    pub page: usize,
    pub page_size: usize,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            filter: GalleryFilter::All,
            page: 1,
            page_size: WIDE_PAGE_SIZE,
        }
    }
}

impl GalleryState {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            ..Self::default()
        }
    }

    /// Replace the active filter and go back to the first page.
    pub fn set_filter(&mut self, filter: GalleryFilter) {
        self.filter = filter;
        self.page = 1;
    }

    /// Viewport-driven resize. Keeps the page number; rendering clamps it.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
    }

    pub fn filtered_count(&self, data: &[ProjectRecord]) -> usize {
        data.iter().filter(|p| self.filter.matches(p)).count()
    }

    pub fn total_pages(&self, data: &[ProjectRecord]) -> usize {
        total_pages(self.filtered_count(data), self.page_size)
    }

    /// Page number actually rendered.
    pub fn effective_page(&self, data: &[ProjectRecord]) -> usize {
        clamp_page(self.page, self.total_pages(data))
    }

    pub fn current_page<'a>(&self, data: &'a [ProjectRecord]) -> Vec<&'a ProjectRecord> {
        page_slice(data, self.filter, self.page, self.page_size)
    }

    pub fn show_pagination(&self, data: &[ProjectRecord]) -> bool {
        self.total_pages(data) > 1
    }

    pub fn visible_range(&self, data: &[ProjectRecord]) -> Option<(usize, usize)> {
        visible_range(self.page, self.page_size, self.filtered_count(data))
    }

    /// Move to `target` clamped to `[1, total_pages]`.
    /// Returns `false` when the page did not change.
    pub fn go_to(&mut self, target: usize, total_pages: usize) -> bool {
        let target = clamp_page(target, total_pages);
        if target == self.page {
            return false;
        }
        self.page = target;
        true
    }

    pub fn first(&mut self, total_pages: usize) -> bool {
        self.go_to(1, total_pages)
    }

    pub fn prev(&mut self, total_pages: usize) -> bool {
        let current = clamp_page(self.page, total_pages);
        self.go_to(current.saturating_sub(1), total_pages)
    }

    pub fn next(&mut self, total_pages: usize) -> bool {
        let current = clamp_page(self.page, total_pages);
        self.go_to(current + 1, total_pages)
    }

    pub fn last(&mut self, total_pages: usize) -> bool {
        self.go_to(total_pages, total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::PROJECTS;

    fn titles(page: &[&ProjectRecord]) -> Vec<&'static str> {
        page.iter().map(|p| p.title).collect()
    }

    #[test]
    fn test_godot_scenario() {
        let filter = GalleryFilter::Tag("Godot");
        assert_eq!(filter_projects(PROJECTS, filter).len(), 3);
        assert_eq!(total_pages(3, 2), 2);

        let first = page_slice(PROJECTS, filter, 1, 2);
        assert_eq!(titles(&first), vec!["FRAGMOS", "The Triangulo"]);

        let second = page_slice(PROJECTS, filter, 2, 2);
        assert_eq!(titles(&second), vec!["Collection of old projects"]);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 4), 1);
        assert_eq!(total_pages(4, 4), 1);
        assert_eq!(total_pages(5, 4), 2);
        assert_eq!(total_pages(1, 2), 1);
        assert_eq!(total_pages(7, 0), 7);
    }

    #[test]
    fn test_pages_never_exceed_page_size() {
        for filter in FILTERS {
            for page_size in 1..=5 {
                let count = filter_projects(PROJECTS, filter).len();
                let pages = total_pages(count, page_size);
                assert_eq!(pages, count.div_ceil(page_size).max(1));

                let mut seen = 0;
                for page in 1..=pages {
                    let slice = page_slice(PROJECTS, filter, page, page_size);
                    assert!(slice.len() <= page_size);
                    assert!(slice.iter().all(|p| filter.matches(p)));
                    if count > 0 {
                        assert!(!slice.is_empty());
                    }
                    seen += slice.len();
                }
                assert_eq!(seen, count);
            }
        }
    }

    #[test]
    fn test_unmatched_filter_is_empty() {
        let mut state = GalleryState::default();
        state.set_filter(GalleryFilter::Tag("Rust"));
        assert!(state.current_page(PROJECTS).is_empty());
        assert_eq!(state.total_pages(PROJECTS), 1);
        assert!(!state.show_pagination(PROJECTS));
        assert_eq!(state.visible_range(PROJECTS), None);
    }

    #[test]
    fn test_set_filter_resets_page() {
        let mut state = GalleryState::with_page_size(1);
        assert!(state.last(state.total_pages(PROJECTS)));
        assert_eq!(state.page, 4);

        state.set_filter(GalleryFilter::Tag("Unity"));
        assert_eq!(state.page, 1);

        state.next(state.total_pages(PROJECTS));
        state.set_filter(GalleryFilter::Tag("Unity"));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_navigation_clamps() {
        let mut state = GalleryState::with_page_size(2);
        let total = state.total_pages(PROJECTS);
        assert_eq!(total, 2);

        assert!(!state.prev(total));
        assert!(!state.first(total));
        assert_eq!(state.page, 1);

        assert!(state.go_to(99, total));
        assert_eq!(state.page, 2);
        assert!(!state.next(total));
        assert!(!state.last(total));

        assert!(state.go_to(0, total));
        assert_eq!(state.page, 1);
        assert!(!state.current_page(PROJECTS).is_empty());
    }

    #[test]
    fn test_resize_keeps_page_until_render_clamps() {
        let mut state = GalleryState::with_page_size(2);
        state.next(state.total_pages(PROJECTS));
        assert_eq!(state.page, 2);

        state.set_page_size(page_size_for_width(1280));
        assert_eq!(state.page_size, 4);
        assert_eq!(state.page, 2);
        assert_eq!(state.effective_page(PROJECTS), 1);
        assert_eq!(state.current_page(PROJECTS).len(), 4);

        // navigation starts from the rendered page
        assert!(state.prev(state.total_pages(PROJECTS)));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_page_size_breakpoints() {
        assert_eq!(page_size_for_width(320), 2);
        assert_eq!(page_size_for_width(639), 2);
        assert_eq!(page_size_for_width(640), 2);
        assert_eq!(page_size_for_width(1023), 2);
        assert_eq!(page_size_for_width(1024), 4);
        assert_eq!(page_size_for_width(2560), 4);
    }

    #[test]
    fn test_visible_range() {
        assert_eq!(visible_range(1, 2, 3), Some((1, 2)));
        assert_eq!(visible_range(2, 2, 3), Some((3, 3)));
        assert_eq!(visible_range(9, 2, 3), Some((3, 3)));
        assert_eq!(visible_range(1, 4, 0), None);
    }

    #[test]
    fn test_filter_keys() {
        assert_eq!(GalleryFilter::All.key(), "all");
        assert_eq!(GalleryFilter::Tag("Web").key(), "Web");
        assert_eq!(
            GalleryFilter::All.translation_key(),
            Some("projects.filter.all")
        );
        assert_eq!(GalleryFilter::Tag("API").translation_key(), None);
        assert_eq!(GalleryFilter::default(), GalleryFilter::All);
    }
}
