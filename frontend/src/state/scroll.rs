use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderVariant {
    Top,
    Scrolled,
}

impl HeaderVariant {
    pub fn for_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            HeaderVariant::Scrolled
        } else {
            HeaderVariant::Top
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            HeaderVariant::Top => "rgba(255, 255, 255, 0.95)",
            HeaderVariant::Scrolled => "rgba(255, 255, 255, 0.98)",
        }
    }

    pub fn box_shadow(self) -> &'static str {
        match self {
            HeaderVariant::Top => "0 4px 6px -1px rgba(0, 0, 0, 0.1)",
            HeaderVariant::Scrolled => "0 4px 20px rgba(0, 0, 0, 0.1)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub scroll_height: f64,
    pub client_height: f64,
    pub hero_height: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollFrame {
    pub header: HeaderVariant,
    pub back_to_top: bool,
    pub progress_percent: f64,
    pub parallax_shift: Option<f64>,
}

impl ScrollFrame {
    pub fn compute(metrics: &ScrollMetrics, config: &Config) -> Self {
        let offset = metrics.offset;
        Self {
            header: HeaderVariant::for_offset(offset, config.header_scrolled_after),
            back_to_top: offset > config.back_to_top_after,
            progress_percent: progress_percent(
                offset,
                metrics.scroll_height,
                metrics.client_height,
            ),
            parallax_shift: metrics
                .hero_height
                .and_then(|h| parallax_shift(offset, h, config.parallax_rate)),
        }
    }
}

pub fn progress_percent(offset: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    offset / scrollable * 100.0
}

// Past the hero the transform freezes instead of resetting
pub fn parallax_shift(offset: f64, hero_height: f64, rate: f64) -> Option<f64> {
    (offset < hero_height).then(|| offset * rate)
}
