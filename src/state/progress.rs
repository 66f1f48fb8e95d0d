//! One-shot reveal of skill progress bars.
//!
//! Indicators are addressed by their position in document order. The
//! revealer hands out each indicator's width at most once; after that the
//! caller stops observing the element.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use crate::util::text::css_percent;

/// Target percentage from a `data-progress` attribute, clamped to `0..=100`.
/// The fallback `default` is clamped too; a non-finite default becomes 0.
#[must_use]
pub fn target_percent(attr: Option<&str>, default: f64) -> f64 {
    attr.map(str::trim)
        .map(|raw| raw.strip_suffix('%').unwrap_or(raw))
        .and_then(|raw| raw.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .or(Some(default).filter(|value| value.is_finite()))
        .map_or(0.0, |value| value.clamp(0.0, 100.0))
}

#[derive(Clone, Debug, PartialEq)]
struct Indicator {
    target: f64,
    revealed: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProgressRevealer {
    indicators: Vec<Indicator>,
}

impl ProgressRevealer {
    /// Build from each indicator's raw `data-progress` attribute.
    pub fn new<'a>(attrs: impl IntoIterator<Item = Option<&'a str>>, default_percent: f64) -> Self {
        let indicators = attrs
            .into_iter()
            .map(|attr| Indicator { target: target_percent(attr, default_percent), revealed: false })
            .collect();
        Self { indicators }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.indicators.get(index).is_some_and(|i| i.revealed)
    }

    /// Intersection update for indicator `index`. Returns the CSS width to
    /// set the first time it becomes visible, `None` otherwise.
    pub fn intersect(&mut self, index: usize, is_intersecting: bool) -> Option<String> {
        if !is_intersecting {
            return None;
        }
        let indicator = self.indicators.get_mut(index)?;
        if indicator.revealed {
            return None;
        }
        indicator.revealed = true;
        Some(css_percent(indicator.target))
    }

    /// Fallback without viewport observation: reveal everything now.
    pub fn reveal_all(&mut self) -> Vec<(usize, String)> {
        (0..self.indicators.len())
            .filter_map(|index| self.intersect(index, true).map(|width| (index, width)))
            .collect()
    }
}
