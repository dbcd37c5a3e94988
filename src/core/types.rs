//! Core data types shared between core logic and the UI.
//!
//! Rule of thumb:
//! - These structs should be "boring bags of data"
//! - No GUI code
//! - No filesystem code

use std::path::PathBuf;
use std::time::Duration;

/// Default autoplay interval (3 seconds).
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(3000);

/// One displayable item: an image plus optional alt text and caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    /// Image location on disk.
    /// This is the only thing we always have.
    pub source: PathBuf,

    /// Alt text. `None` falls back to "Slide N".
    pub alt_text: Option<String>,

    /// Caption shown under the active slide.
    pub caption: Option<String>,
}

impl Slide {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            alt_text: None,
            caption: None,
        }
    }

    /// Alt label for the slide at `position` (0-based).
    /// Ex: no alt text at position 0 -> "Slide 1"
    pub fn alt_label(&self, position: usize) -> String {
        match self.alt_text.as_deref().map(str::trim) {
            Some(alt) if !alt.is_empty() => alt.to_string(),
            _ => format!("Slide {}", position + 1),
        }
    }

    /// Caption, if there is anything worth rendering.
    pub fn caption_text(&self) -> Option<&str> {
        self.caption
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

/// Construction-time options handed to the carousel by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselConfig {
    /// Zero means "do not autoplay".
    pub auto_advance_interval: Duration,
    pub show_controls: bool,
}

impl CarouselConfig {
    /// Interval truncated to whole milliseconds.
    /// Anything under 1ms disables autoplay instead of busy-looping.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        let ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self.auto_advance_interval = Duration::from_millis(ms);
        self
    }

    /// Interval in signed milliseconds, as a host might receive it.
    /// Non-positive values disable autoplay instead of busy-looping.
    pub fn with_interval_ms(mut self, ms: i64) -> Self {
        self.auto_advance_interval = u64::try_from(ms)
            .map(Duration::from_millis)
            .unwrap_or(Duration::ZERO);
        self
    }

    pub fn autoplay_enabled(&self) -> bool {
        !self.auto_advance_interval.is_zero()
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_advance_interval: DEFAULT_INTERVAL,
            show_controls: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide_with(alt: Option<&str>, caption: Option<&str>) -> Slide {
        Slide {
            source: PathBuf::from("a.png"),
            alt_text: alt.map(String::from),
            caption: caption.map(String::from),
        }
    }

    #[test]
    fn alt_label_falls_back_to_position() {
        let slide = Slide::new("a.png");
        assert_eq!(slide.alt_label(0), "Slide 1");
        assert_eq!(slide.alt_label(3), "Slide 4");

        let slide = slide_with(Some("Gojo"), None);
        assert_eq!(slide.alt_label(3), "Gojo");

        let slide = slide_with(Some("   "), None);
        assert_eq!(slide.alt_label(1), "Slide 2");
    }

    #[test]
    fn blank_caption_is_not_rendered() {
        assert_eq!(Slide::new("a.png").caption_text(), None);
        assert_eq!(slide_with(None, Some("")).caption_text(), None);
        assert_eq!(slide_with(None, Some("Mr.Fool")).caption_text(), Some("Mr.Fool"));
    }

    #[test]
    fn non_positive_interval_disables_autoplay() {
        let cfg = CarouselConfig::default();
        assert_eq!(cfg.auto_advance_interval, Duration::from_millis(3000));
        assert!(cfg.show_controls);
        assert!(cfg.autoplay_enabled());

        assert!(!cfg.with_interval_ms(0).autoplay_enabled());
        assert!(!cfg.with_interval_ms(-250).autoplay_enabled());
        assert!(!cfg.with_interval(Duration::from_nanos(1)).autoplay_enabled());
        assert!(!cfg.with_interval(Duration::from_micros(999)).autoplay_enabled());
        assert_eq!(
            cfg.with_interval(Duration::from_micros(2_500_700)).auto_advance_interval,
            Duration::from_millis(2500)
        );
        assert_eq!(
            cfg.with_interval_ms(2500).auto_advance_interval,
            Duration::from_millis(2500)
        );
    }
}
