//! Carousel settings.
//!
//! Builds the settings object handed to the client-side carousel widget and
//! splits item lists into carousel pages.

use serde::Serialize;

/// Transition speed in milliseconds.
pub const CAROUSEL_SPEED_MS: u32 = 300;

/// `(max width in px, slides shown at or below it)`, widest first.
const BREAKPOINTS: [(u32, usize); 3] = [(1024, 3), (600, 2), (480, 1)];

// == Breakpoint Settings ==
/// Overrides applied at one responsive breakpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakpointSettings {
    pub slides_to_show: usize,
    pub slides_to_scroll: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infinite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dots: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponsiveBreakpoint {
    pub breakpoint: u32,
    pub settings: BreakpointSettings,
}

// == Carousel Settings ==
/// Settings for a looping, paginated carousel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselSettings {
    pub dots: bool,
    pub infinite: bool,
    pub speed: u32,
    pub slides_to_show: usize,
    pub slides_to_scroll: usize,
    pub responsive: Vec<ResponsiveBreakpoint>,
}

impl CarouselSettings {
    /// Settings showing and scrolling `slides_to_show` items at a time.
    ///
    /// Zero falls back to one slide.
    pub fn new(slides_to_show: usize) -> Self {
        let slides = slides_to_show.max(1);

        let responsive = BREAKPOINTS
            .iter()
            .enumerate()
            .map(|(i, &(breakpoint, count))| {
                // Only the widest breakpoint pins looping and dots.
                let widest = i == 0;
                ResponsiveBreakpoint {
                    breakpoint,
                    settings: BreakpointSettings {
                        slides_to_show: count,
                        slides_to_scroll: count,
                        infinite: widest.then_some(true),
                        dots: widest.then_some(true),
                    },
                }
            })
            .collect();

        Self {
            dots: true,
            infinite: true,
            speed: CAROUSEL_SPEED_MS,
            slides_to_show: slides,
            slides_to_scroll: slides,
            responsive,
        }
    }

    /// Number of pages needed for `item_count` items.
    pub fn page_count(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.slides_to_scroll.max(1))
    }

    /// Splits `items` into consecutive pages; the last may be short.
    pub fn pages<'a, T>(&self, items: &'a [T]) -> Vec<&'a [T]> {
        items.chunks(self.slides_to_scroll.max(1)).collect()
    }
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self::new(1)
    }
}
