//! # Reveal Timing
//!
//! Cards fade in one after another when a row appears. The schedule is
//! plain data: `base_delay + order * stagger`. Reduced motion collapses
//! every delay to zero so the whole grid appears at once.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Reveal schedule parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionSettings {
    /// Delay before the first card of a row appears (ms)
    pub base_delay_ms: u64,

    /// Extra delay for each following card (ms)
    pub stagger_ms: u64,

    /// Honor the user's reduced-motion preference
    pub reduced_motion: bool,
}

impl Default for MotionSettings {
    fn default() -> Self {
        MotionSettings {
            base_delay_ms: 150,
            stagger_ms: 140,
            reduced_motion: false,
        }
    }
}

impl MotionSettings {
    /// Settings with all motion disabled
    pub fn reduced() -> Self {
        MotionSettings {
            reduced_motion: true,
            ..Self::default()
        }
    }

    /// Delay before the item at `order` is revealed.
    ///
    /// ```rust
    /// use std::time::Duration;
    /// use folio_core::motion::MotionSettings;
    ///
    /// let motion = MotionSettings::default();
    /// assert_eq!(motion.reveal_delay(2), Duration::from_millis(150 + 2 * 140));
    /// assert_eq!(MotionSettings::reduced().reveal_delay(2), Duration::ZERO);
    /// ```
    pub fn reveal_delay(&self, order: usize) -> Duration {
        if self.reduced_motion {
            return Duration::ZERO;
        }
        let stagger = self.stagger_ms.saturating_mul(order as u64);
        Duration::from_millis(self.base_delay_ms.saturating_add(stagger))
    }

    /// Time until the last of `count` items is visible
    pub fn total_duration(&self, count: usize) -> Duration {
        match count {
            0 => Duration::ZERO,
            n => self.reveal_delay(n - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule() {
        let motion = MotionSettings::default();
        assert_eq!(motion.reveal_delay(0), Duration::from_millis(150));
        assert_eq!(motion.reveal_delay(1), Duration::from_millis(290));
        assert_eq!(motion.total_duration(3), Duration::from_millis(430));
        assert_eq!(motion.total_duration(0), Duration::ZERO);
    }

    #[test]
    fn test_reduced_motion_is_instant() {
        let motion = MotionSettings::reduced();
        for order in 0..5 {
            assert_eq!(motion.reveal_delay(order), Duration::ZERO);
        }
        assert_eq!(motion.total_duration(3), Duration::ZERO);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let motion: MotionSettings = toml::from_str("stagger_ms = 50").unwrap();
        assert_eq!(motion.stagger_ms, 50);
        assert_eq!(motion.base_delay_ms, 150);
        assert!(!motion.reduced_motion);
    }
}
