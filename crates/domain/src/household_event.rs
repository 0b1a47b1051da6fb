use crate::{reminder::ReminderTier, shared::entity::Entity, shared::entity::ID};
use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Normal,
    Important,
}

impl Default for Importance {
    fn default() -> Self {
        Self::Normal
    }
}

impl Importance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Important => "important",
        }
    }
}

impl Display for Importance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Unknown importance: {0}")]
pub struct InvalidImportanceError(String);

impl FromStr for Importance {
    type Err = InvalidImportanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "important" => Ok(Self::Important),
            other => Err(InvalidImportanceError(other.to_string())),
        }
    }
}

/// A scheduled item on the household calendar.
///
/// Created and edited elsewhere. The reminder engine only reads it and flips
/// the two tier flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdEvent {
    pub id: ID,
    pub title: String,
    /// Civil date, no timezone
    pub date: NaiveDate,
    /// Civil time of day, no timezone
    pub time: NaiveTime,
    /// Person identifiers of everyone taking part
    pub participants: Vec<String>,
    pub importance: Importance,
    /// Set once the day before reminder has been dispatched. Never reset.
    pub tier1_sent: bool,
    /// Set once the imminent reminder has been dispatched. Never reset.
    pub tier2_sent: bool,
}

impl Entity for HouseholdEvent {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl HouseholdEvent {
    pub fn new(
        title: String,
        date: NaiveDate,
        time: NaiveTime,
        participants: Vec<String>,
        importance: Importance,
    ) -> Self {
        Self {
            id: Default::default(),
            title,
            date,
            time,
            participants,
            importance,
            tier1_sent: false,
            tier2_sent: false,
        }
    }

    pub fn civil_start(&self) -> NaiveDateTime {
        NaiveDateTime::new(self.date, self.time)
    }

    pub fn is_reminder_eligible(&self) -> bool {
        self.importance == Importance::Important
    }

    pub fn tier_sent(&self, tier: ReminderTier) -> bool {
        match tier {
            ReminderTier::DayBefore => self.tier1_sent,
            ReminderTier::Imminent => self.tier2_sent,
        }
    }

    pub fn has_pending_tiers(&self) -> bool {
        !self.tier1_sent || !self.tier2_sent
    }

    pub fn mark_tier_sent(&mut self, tier: ReminderTier) {
        match tier {
            ReminderTier::DayBefore => self.tier1_sent = true,
            ReminderTier::Imminent => self.tier2_sent = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_parses_importance() {
        assert_eq!("important".parse::<Importance>(), Ok(Importance::Important));
        assert_eq!(" Normal ".parse::<Importance>(), Ok(Importance::Normal));
        assert!("urgent".parse::<Importance>().is_err());
    }

    #[test]
    fn tier_flags_are_independent() {
        let mut event = HouseholdEvent::new(
            "Dentist".into(),
            NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            vec!["andrea".into()],
            Importance::Important,
        );
        assert!(event.has_pending_tiers());

        event.mark_tier_sent(ReminderTier::DayBefore);
        assert!(event.tier_sent(ReminderTier::DayBefore));
        assert!(!event.tier_sent(ReminderTier::Imminent));
        assert!(event.has_pending_tiers());

        event.mark_tier_sent(ReminderTier::Imminent);
        assert!(!event.has_pending_tiers());
    }
}
