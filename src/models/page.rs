//! Page and slide selectors.

use serde::Serialize;

/// Top-level page picked from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Slides,
    Activity,
    Resources,
}

impl PageKind {
    pub const ALL: [PageKind; 3] = [PageKind::Slides, PageKind::Activity, PageKind::Resources];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Slides => "Lecturer Slides",
            Self::Activity => "Student Activity",
            Self::Resources => "Resources & Library",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Slides => "🎓",
            Self::Activity => "🗺️",
            Self::Resources => "📖",
        }
    }

    /// Route the sidebar links to.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Slides => "/slides/1",
            Self::Activity => "/activity",
            Self::Resources => "/resources",
        }
    }
}

/// Number of slides in the lecture.
pub const SLIDE_COUNT: u8 = 10;

/// A slide number between 1 and [`SLIDE_COUNT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SlideIndex(u8);

impl SlideIndex {
    pub const FIRST: SlideIndex = SlideIndex(1);
    pub const LAST: SlideIndex = SlideIndex(SLIDE_COUNT);

    pub fn new(n: u8) -> Option<Self> {
        (1..=SLIDE_COUNT).contains(&n).then_some(Self(n))
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// Previous slide, or `None` on the first one.
    pub fn prev(&self) -> Option<Self> {
        Self::new(self.0.saturating_sub(1))
    }

    /// Next slide, or `None` on the last one.
    pub fn next(&self) -> Option<Self> {
        Self::new(self.0.saturating_add(1))
    }

    /// Every slide in order.
    pub fn all() -> impl Iterator<Item = SlideIndex> {
        (1..=SLIDE_COUNT).map(SlideIndex)
    }
}

impl std::fmt::Display for SlideIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Slide {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_index_bounds() {
        assert!(SlideIndex::new(0).is_none());
        assert!(SlideIndex::new(11).is_none());
        assert_eq!(SlideIndex::new(1), Some(SlideIndex::FIRST));
        assert_eq!(SlideIndex::new(10), Some(SlideIndex::LAST));
    }

    #[test]
    fn test_slide_navigation_edges() {
        assert!(SlideIndex::FIRST.prev().is_none());
        assert!(SlideIndex::LAST.next().is_none());
        assert_eq!(SlideIndex::FIRST.next().map(|s| s.get()), Some(2));
        assert_eq!(SlideIndex::LAST.prev().map(|s| s.get()), Some(9));
    }

    #[test]
    fn test_all_slides() {
        assert_eq!(SlideIndex::all().count(), SLIDE_COUNT as usize);
    }

    #[test]
    fn test_page_paths_are_distinct() {
        let paths: Vec<_> = PageKind::ALL.iter().map(|p| p.path()).collect();
        assert_eq!(paths, vec!["/slides/1", "/activity", "/resources"]);
    }
}
