use crate::{date::format_time, household_event::HouseholdEvent, reminder::ReminderTier};
use serde::{Deserialize, Serialize};

/// Payload delivered to a device. `url` is the deep link opened on click.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationMessage {
    pub title: String,
    pub body: String,
    pub url: String,
}

impl NotificationMessage {
    pub fn new(title: String, body: String, url: String) -> Self {
        Self { title, body, url }
    }

    /// Builds the tier specific reminder for `event`, naming everyone
    /// taking part
    pub fn reminder(event: &HouseholdEvent, tier: ReminderTier, click_target_url: &str) -> Self {
        let title = match tier {
            ReminderTier::DayBefore => "⏰ Reminder: tomorrow",
            ReminderTier::Imminent => "⏰ Reminder: starting soon",
        };

        let what = format!("{} - {}", event.title, format_time(&event.time));
        let body = if event.participants.is_empty() {
            what
        } else {
            format!("{}: {}", event.participants.join(", "), what)
        };

        Self::new(title.into(), body, click_target_url.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::household_event::Importance;
    use chrono::{NaiveDate, NaiveTime};

    fn event(participants: Vec<String>) -> HouseholdEvent {
        HouseholdEvent::new(
            "Swimming".into(),
            NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
            NaiveTime::from_hms_opt(17, 30, 0).unwrap(),
            participants,
            Importance::Important,
        )
    }

    #[test]
    fn it_words_reminders_per_tier() {
        let e = event(vec!["zsombor".into(), "adel".into()]);

        let msg = NotificationMessage::reminder(&e, ReminderTier::DayBefore, "/calendar");
        assert_eq!(msg.title, "⏰ Reminder: tomorrow");
        assert_eq!(msg.body, "zsombor, adel: Swimming - 17:30");
        assert_eq!(msg.url, "/calendar");

        let msg = NotificationMessage::reminder(&e, ReminderTier::Imminent, "/calendar");
        assert_eq!(msg.title, "⏰ Reminder: starting soon");
        assert_eq!(msg.body, "zsombor, adel: Swimming - 17:30");
    }

    #[test]
    fn it_omits_participant_prefix_when_nobody_is_listed() {
        let msg = NotificationMessage::reminder(&event(vec![]), ReminderTier::DayBefore, "/");
        assert_eq!(msg.body, "Swimming - 17:30");
    }

    #[test]
    fn it_serializes_to_the_device_payload_shape() {
        let msg = NotificationMessage::new("t".into(), "b".into(), "/u".into());
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json, serde_json::json!({ "title": "t", "body": "b", "url": "/u" }));
    }
}
