mod date;
mod household_event;
mod notification;
mod push_subscription;
mod recipients;
mod reminder;
mod shared;

pub use date::{civil_diff_hours, civil_now, format_time};
pub use household_event::{HouseholdEvent, Importance, InvalidImportanceError};
pub use notification::NotificationMessage;
pub use push_subscription::{
    InvalidTransportError, PushSubscription, PushTransportInfo, PushTransportKeys,
};
pub use recipients::{
    normalize_person_id, resolve_event_recipients, resolve_recipients, ResolvedRecipients,
};
pub use reminder::{
    due_tier, ReminderTier, ReminderWindows, TierWindow, DAY_BEFORE_WINDOW, IMMINENT_WINDOW,
};
pub use shared::entity::{Entity, ID};

pub use chrono_tz::Tz;
