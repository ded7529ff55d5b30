//! Focus and break duration settings
//!
//! Each field moves in fixed steps and is clamped to its bounds; stepping
//! past a bound leaves the value where it is.

pub const FOCUS_MIN: u32 = 5;
pub const FOCUS_MAX: u32 = 60;
pub const FOCUS_STEP: u32 = 5;

pub const BREAK_MIN: u32 = 1;
pub const BREAK_MAX: u32 = 15;
pub const BREAK_STEP: u32 = 1;

pub const DEFAULT_FOCUS_MINUTES: u32 = 25;
pub const DEFAULT_BREAK_MINUTES: u32 = 5;

/// Configured length of focus and break sessions, in minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationSettings {
    focus_minutes: u32,
    break_minutes: u32,
}

impl Default for DurationSettings {
    fn default() -> Self {
        Self {
            focus_minutes: DEFAULT_FOCUS_MINUTES,
            break_minutes: DEFAULT_BREAK_MINUTES,
        }
    }
}

impl DurationSettings {
    /// Build settings from arbitrary minute values, snapping each onto its
    /// step grid and into its bounds
    pub fn clamped(focus_minutes: u32, break_minutes: u32) -> Self {
        Self {
            focus_minutes: snap(focus_minutes, FOCUS_MIN, FOCUS_MAX, FOCUS_STEP),
            break_minutes: snap(break_minutes, BREAK_MIN, BREAK_MAX, BREAK_STEP),
        }
    }

    pub fn focus_minutes(&self) -> u32 {
        self.focus_minutes
    }

    pub fn break_minutes(&self) -> u32 {
        self.break_minutes
    }

    #[must_use]
    pub fn increase_focus(self) -> Self {
        Self {
            focus_minutes: (self.focus_minutes + FOCUS_STEP).min(FOCUS_MAX),
            ..self
        }
    }

    #[must_use]
    pub fn decrease_focus(self) -> Self {
        Self {
            focus_minutes: self.focus_minutes.saturating_sub(FOCUS_STEP).max(FOCUS_MIN),
            ..self
        }
    }

    #[must_use]
    pub fn increase_break(self) -> Self {
        Self {
            break_minutes: (self.break_minutes + BREAK_STEP).min(BREAK_MAX),
            ..self
        }
    }

    #[must_use]
    pub fn decrease_break(self) -> Self {
        Self {
            break_minutes: self.break_minutes.saturating_sub(BREAK_STEP).max(BREAK_MIN),
            ..self
        }
    }

    pub fn can_increase_focus(&self) -> bool {
        self.focus_minutes < FOCUS_MAX
    }

    pub fn can_decrease_focus(&self) -> bool {
        self.focus_minutes > FOCUS_MIN
    }

    pub fn can_increase_break(&self) -> bool {
        self.break_minutes < BREAK_MAX
    }

    pub fn can_decrease_break(&self) -> bool {
        self.break_minutes > BREAK_MIN
    }
}

fn snap(value: u32, min: u32, max: u32, step: u32) -> u32 {
    let rounded = value.saturating_add(step / 2) / step * step;
    rounded.clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = DurationSettings::default();
        assert_eq!(settings.focus_minutes(), 25);
        assert_eq!(settings.break_minutes(), 5);
    }

    #[test]
    fn test_focus_steps_by_five() {
        let settings = DurationSettings::default();
        assert_eq!(settings.increase_focus().focus_minutes(), 30);
        assert_eq!(settings.decrease_focus().focus_minutes(), 20);
    }

    #[test]
    fn test_focus_clamped_to_bounds() {
        let mut settings = DurationSettings::default();
        for _ in 0..20 {
            settings = settings.increase_focus();
            assert!(settings.focus_minutes() <= FOCUS_MAX);
        }
        assert_eq!(settings.focus_minutes(), FOCUS_MAX);
        assert!(!settings.can_increase_focus());

        for _ in 0..20 {
            settings = settings.decrease_focus();
            assert!(settings.focus_minutes() >= FOCUS_MIN);
        }
        assert_eq!(settings.focus_minutes(), FOCUS_MIN);
        assert!(!settings.can_decrease_focus());
    }

    #[test]
    fn test_break_clamped_to_bounds() {
        let mut settings = DurationSettings::default();
        for _ in 0..30 {
            settings = settings.increase_break();
        }
        assert_eq!(settings.break_minutes(), BREAK_MAX);

        for _ in 0..30 {
            settings = settings.decrease_break();
        }
        assert_eq!(settings.break_minutes(), BREAK_MIN);
    }

    #[test]
    fn test_adjusting_one_field_leaves_the_other() {
        let settings = DurationSettings::default().increase_break();
        assert_eq!(settings.focus_minutes(), 25);
        let settings = settings.decrease_focus();
        assert_eq!(settings.break_minutes(), 6);
    }

    #[test]
    fn test_clamped_snaps_onto_grid() {
        let settings = DurationSettings::clamped(23, 0);
        assert_eq!(settings.focus_minutes(), 25);
        assert_eq!(settings.break_minutes(), BREAK_MIN);

        let settings = DurationSettings::clamped(500, 99);
        assert_eq!(settings.focus_minutes(), FOCUS_MAX);
        assert_eq!(settings.break_minutes(), BREAK_MAX);

        let settings = DurationSettings::clamped(1, 7);
        assert_eq!(settings.focus_minutes(), FOCUS_MIN);
        assert_eq!(settings.break_minutes(), 7);
    }

    #[test]
    fn test_clamped_handles_largest_values() {
        let settings = DurationSettings::clamped(u32::MAX, u32::MAX);
        assert_eq!(settings.focus_minutes(), FOCUS_MAX);
        assert_eq!(settings.break_minutes(), BREAK_MAX);

        let settings = DurationSettings::clamped(u32::MAX - 1, u32::MAX - 1);
        assert_eq!(settings.focus_minutes(), FOCUS_MAX);
        assert_eq!(settings.break_minutes(), BREAK_MAX);
    }
}
