use super::constants::HEADER_SCROLL_THRESHOLD;

/// Header appearance, chosen from the current scroll offset alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderStyle {
    Top,
    Scrolled,
}

impl HeaderStyle {
    pub fn background(self) -> &'static str {
        match self {
            HeaderStyle::Top => "rgba(255, 255, 255, 0.8)",
            HeaderStyle::Scrolled => "rgba(255, 255, 255, 0.9)",
        }
    }

    pub fn box_shadow(self) -> &'static str {
        match self {
            HeaderStyle::Top => "none",
            HeaderStyle::Scrolled => "var(--shadow-sm)",
        }
    }

    pub fn backdrop_filter(self) -> &'static str {
        match self {
            HeaderStyle::Top => "blur(16px)",
            HeaderStyle::Scrolled => "blur(20px)",
        }
    }

    /// (CSS property, value) pairs to apply inline.
    pub fn declarations(self) -> [(&'static str, &'static str); 3] {
        [
            ("background", self.background()),
            ("box-shadow", self.box_shadow()),
            ("backdrop-filter", self.backdrop_filter()),
        ]
    }
}

#[inline]
pub fn header_style(scroll_y: f64) -> HeaderStyle {
    if scroll_y > HEADER_SCROLL_THRESHOLD {
        HeaderStyle::Scrolled
    } else {
        HeaderStyle::Top
    }
}
