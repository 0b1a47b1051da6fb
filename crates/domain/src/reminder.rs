use crate::{date::civil_diff_hours, household_event::HouseholdEvent};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The two reminder lead times tracked independently per `HouseholdEvent`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReminderTier {
    /// Roughly one day before the event
    DayBefore,
    /// Within the last hour and a half before the event
    Imminent,
}

impl Display for ReminderTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DayBefore => write!(f, "day-before"),
            Self::Imminent => write!(f, "imminent"),
        }
    }
}

/// Range of hours until the event in which a tier is due.
///
/// The upper bound is always inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierWindow {
    pub min_hours: f64,
    pub min_inclusive: bool,
    pub max_hours: f64,
}

impl TierWindow {
    pub fn contains(&self, diff_hours: f64) -> bool {
        let above_min = if self.min_inclusive {
            diff_hours >= self.min_hours
        } else {
            diff_hours > self.min_hours
        };
        above_min && diff_hours <= self.max_hours
    }
}

/// Must stay at least twice as wide as the trigger interval so that one
/// tick always lands inside it.
pub const DAY_BEFORE_WINDOW: TierWindow = TierWindow {
    min_hours: 20.0,
    min_inclusive: true,
    max_hours: 30.0,
};

pub const IMMINENT_WINDOW: TierWindow = TierWindow {
    min_hours: 0.0,
    min_inclusive: false,
    max_hours: 1.5,
};

/// The pair of windows used to evaluate both tiers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReminderWindows {
    pub day_before: TierWindow,
    pub imminent: TierWindow,
}

impl Default for ReminderWindows {
    fn default() -> Self {
        Self {
            day_before: DAY_BEFORE_WINDOW,
            imminent: IMMINENT_WINDOW,
        }
    }
}

impl ReminderWindows {
    pub fn window(&self, tier: ReminderTier) -> &TierWindow {
        match tier {
            ReminderTier::DayBefore => &self.day_before,
            ReminderTier::Imminent => &self.imminent,
        }
    }

    /// Decides which reminder tier, if any, is newly due for `event` at the
    /// civil time `now`.
    ///
    /// Both `now` and the event start are wall clock readings in the household
    /// timezone. When both windows match the day before tier wins, the imminent
    /// tier is then picked up on a later tick.
    pub fn due_tier(&self, now: &NaiveDateTime, event: &HouseholdEvent) -> Option<ReminderTier> {
        if !event.is_reminder_eligible() {
            return None;
        }

        let diff_hours = civil_diff_hours(now, &event.civil_start());
        if diff_hours <= 0.0 {
            return None;
        }

        [ReminderTier::DayBefore, ReminderTier::Imminent]
            .iter()
            .copied()
            .find(|tier| !event.tier_sent(*tier) && self.window(*tier).contains(diff_hours))
    }
}

/// `ReminderWindows::due_tier` with the default windows
pub fn due_tier(now: &NaiveDateTime, event: &HouseholdEvent) -> Option<ReminderTier> {
    ReminderWindows::default().due_tier(now, event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::household_event::Importance;
    use chrono::{Duration, NaiveDate};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 17)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap()
    }

    fn event_at(start: NaiveDateTime, importance: Importance) -> HouseholdEvent {
        HouseholdEvent::new(
            "Parents evening".into(),
            start.date(),
            start.time(),
            vec!["zsolt".into(), "andrea".into()],
            importance,
        )
    }

    #[test]
    fn normal_events_are_never_due() {
        let offsets = vec![
            Duration::minutes(-5),
            Duration::minutes(45),
            Duration::hours(20),
            Duration::hours(24),
            Duration::hours(30),
        ];
        for offset in offsets {
            let event = event_at(now() + offset, Importance::Normal);
            assert_eq!(due_tier(&now(), &event), None);
        }
    }

    #[test]
    fn day_before_window_includes_exactly_one_day() {
        let event = event_at(now() + Duration::hours(24), Importance::Important);
        assert_eq!(due_tier(&now(), &event), Some(ReminderTier::DayBefore));
    }

    #[test]
    fn day_before_window_bounds_are_inclusive() {
        let event = event_at(now() + Duration::hours(20), Importance::Important);
        assert_eq!(due_tier(&now(), &event), Some(ReminderTier::DayBefore));
        let event = event_at(now() + Duration::hours(30), Importance::Important);
        assert_eq!(due_tier(&now(), &event), Some(ReminderTier::DayBefore));

        let event = event_at(
            now() + Duration::hours(30) + Duration::minutes(1),
            Importance::Important,
        );
        assert_eq!(due_tier(&now(), &event), None);
        let event = event_at(
            now() + Duration::hours(20) - Duration::minutes(1),
            Importance::Important,
        );
        assert_eq!(due_tier(&now(), &event), None);
    }

    #[test]
    fn sent_day_before_tier_is_never_due_again() {
        let mut event = event_at(now() + Duration::hours(24), Importance::Important);
        event.mark_tier_sent(ReminderTier::DayBefore);
        for minutes in (0..=10 * 60).step_by(15) {
            let later = now() + Duration::minutes(minutes);
            assert_eq!(due_tier(&later, &event), None);
        }
    }

    #[test]
    fn imminent_tier_is_due_within_the_last_hour_and_a_half() {
        let event = event_at(now() + Duration::minutes(45), Importance::Important);
        assert_eq!(due_tier(&now(), &event), Some(ReminderTier::Imminent));

        let event = event_at(now() + Duration::minutes(90), Importance::Important);
        assert_eq!(due_tier(&now(), &event), Some(ReminderTier::Imminent));

        let event = event_at(now() + Duration::minutes(91), Importance::Important);
        assert_eq!(due_tier(&now(), &event), None);
    }

    #[test]
    fn imminent_tier_respects_its_flag() {
        let mut event = event_at(now() + Duration::minutes(45), Importance::Important);
        event.mark_tier_sent(ReminderTier::Imminent);
        assert_eq!(due_tier(&now(), &event), None);
    }

    #[test]
    fn imminent_tier_is_due_even_if_day_before_was_missed() {
        let event = event_at(now() + Duration::minutes(30), Importance::Important);
        assert!(!event.tier1_sent);
        assert_eq!(due_tier(&now(), &event), Some(ReminderTier::Imminent));
    }

    #[test]
    fn started_events_are_never_due() {
        let event = event_at(now() - Duration::minutes(5), Importance::Important);
        assert_eq!(due_tier(&now(), &event), None);

        let event = event_at(now(), Importance::Important);
        assert_eq!(due_tier(&now(), &event), None);
    }

    #[test]
    fn day_before_tier_takes_priority_when_windows_overlap() {
        let windows = ReminderWindows {
            day_before: TierWindow {
                min_hours: 0.5,
                min_inclusive: true,
                max_hours: 30.0,
            },
            ..Default::default()
        };
        let mut event = event_at(now() + Duration::hours(1), Importance::Important);
        assert_eq!(windows.due_tier(&now(), &event), Some(ReminderTier::DayBefore));

        // The next tick picks up the imminent tier
        event.mark_tier_sent(ReminderTier::DayBefore);
        assert_eq!(windows.due_tier(&now(), &event), Some(ReminderTier::Imminent));
    }

    #[test]
    fn windows_are_wide_enough_for_a_five_minute_trigger() {
        let tick_hours = 5.0 / 60.0;
        let windows = ReminderWindows::default();
        for tier in &[ReminderTier::DayBefore, ReminderTier::Imminent] {
            let window = windows.window(*tier);
            assert!(window.max_hours - window.min_hours >= 2.0 * tick_hours);
        }
    }
}
