use crate::{household_event::HouseholdEvent, push_subscription::PushSubscription};
use std::collections::HashSet;

/// Person identifiers are matched after trimming and case folding, so
/// `"Andrea "` and `"andrea"` name the same person.
pub fn normalize_person_id(person: &str) -> String {
    person.trim().to_lowercase()
}

/// Devices selected for one notification
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedRecipients {
    /// Usable subscriptions owned by a participant, ordered by id
    pub subscriptions: Vec<PushSubscription>,
    /// Participants that did not match the owner of any subscription
    pub unmatched_participants: Vec<String>,
    /// Subscriptions owned by a participant whose transport blob is malformed.
    /// They are left out of `subscriptions` and never handed to the transport.
    pub unusable: Vec<PushSubscription>,
}

impl ResolvedRecipients {
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}

/// Selects every subscription owned by one of `participants`.
///
/// An empty participant list resolves to nobody: there is no fallback that
/// notifies every registered device. Subscriptions without an owner never
/// match.
pub fn resolve_recipients(
    participants: &[String],
    subscriptions: &[PushSubscription],
) -> ResolvedRecipients {
    let wanted = participants
        .iter()
        .map(|p| normalize_person_id(p))
        .filter(|p| !p.is_empty())
        .collect::<HashSet<_>>();

    let mut matched_owners = HashSet::new();
    let mut resolved = ResolvedRecipients::default();
    for sub in subscriptions {
        let owner = match &sub.owner_id {
            Some(owner) => normalize_person_id(owner),
            None => continue,
        };
        if !wanted.contains(&owner) {
            continue;
        }
        matched_owners.insert(owner);
        if sub.transport.is_usable() {
            resolved.subscriptions.push(sub.clone());
        } else {
            resolved.unusable.push(sub.clone());
        }
    }

    let mut unmatched = wanted
        .into_iter()
        .filter(|p| !matched_owners.contains(p))
        .collect::<Vec<_>>();
    unmatched.sort();
    resolved.unmatched_participants = unmatched;
    resolved.subscriptions.sort_by(|s1, s2| s1.id.cmp(&s2.id));
    resolved.subscriptions.dedup_by(|s1, s2| s1.id == s2.id);
    resolved.unusable.sort_by(|s1, s2| s1.id.cmp(&s2.id));

    resolved
}

/// Recipients of the reminders for `event`
pub fn resolve_event_recipients(
    event: &HouseholdEvent,
    subscriptions: &[PushSubscription],
) -> ResolvedRecipients {
    resolve_recipients(&event.participants, subscriptions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{household_event::Importance, push_subscription::PushTransportInfo, ID};
    use chrono::{NaiveDate, NaiveTime};

    fn sub(owner: Option<&str>) -> PushSubscription {
        PushSubscription {
            id: ID::default(),
            owner_id: owner.map(String::from),
            transport: PushTransportInfo::new(
                format!("https://push.example/{}", ID::default()),
                "p256dh".into(),
                "auth".into(),
            ),
        }
    }

    fn event(participants: &[&str]) -> HouseholdEvent {
        HouseholdEvent::new(
            "Piano lesson".into(),
            NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
            NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
            participants.iter().map(|p| p.to_string()).collect(),
            Importance::Important,
        )
    }

    fn ids(resolved: &ResolvedRecipients) -> Vec<ID> {
        resolved.subscriptions.iter().map(|s| s.id.clone()).collect()
    }

    #[test]
    fn it_selects_every_device_of_every_participant() {
        let subs = vec![
            sub(Some("zsolt")),
            sub(Some("zsolt")),
            sub(Some("andrea")),
            sub(Some("adel")),
        ];
        let resolved = resolve_event_recipients(&event(&["zsolt", "andrea"]), &subs);
        assert_eq!(resolved.subscriptions.len(), 3);
        assert!(resolved
            .subscriptions
            .iter()
            .all(|s| s.owner_id.as_deref() != Some("adel")));
        assert!(resolved.unmatched_participants.is_empty());
    }

    #[test]
    fn empty_participants_resolve_to_nobody() {
        let subs = vec![sub(Some("zsolt")), sub(Some("andrea")), sub(None)];
        let resolved = resolve_event_recipients(&event(&[]), &subs);
        assert!(resolved.is_empty());
        assert!(resolved.unmatched_participants.is_empty());
    }

    #[test]
    fn orphaned_subscriptions_are_never_selected() {
        let subs = vec![sub(None), sub(Some("zsolt"))];
        let resolved = resolve_event_recipients(&event(&["zsolt"]), &subs);
        assert_eq!(ids(&resolved), vec![subs[1].id.clone()]);
    }

    #[test]
    fn unknown_participants_contribute_nothing() {
        let subs = vec![sub(Some("zsolt"))];
        let resolved = resolve_event_recipients(&event(&["Zsolt ", "Zsombi"]), &subs);
        assert_eq!(ids(&resolved), vec![subs[0].id.clone()]);
        assert_eq!(resolved.unmatched_participants, vec!["zsombi".to_string()]);
    }

    #[test]
    fn malformed_transports_are_set_aside() {
        let mut broken = sub(Some("andrea"));
        broken.transport.keys.auth = "".into();
        let healthy = sub(Some("andrea"));
        let subs = vec![broken.clone(), healthy.clone()];

        let resolved = resolve_event_recipients(&event(&["andrea"]), &subs);
        assert_eq!(ids(&resolved), vec![healthy.id]);
        assert_eq!(resolved.unusable, vec![broken]);
        assert!(resolved.unmatched_participants.is_empty());
    }

    #[test]
    fn resolution_is_order_independent() {
        let subs = vec![
            sub(Some("zsolt")),
            sub(Some("andrea")),
            sub(Some("adel")),
            sub(Some("andrea")),
        ];
        let mut reversed = subs.clone();
        reversed.reverse();

        let e = event(&["andrea", "zsolt"]);
        let first = resolve_event_recipients(&e, &subs);
        let second = resolve_event_recipients(&e, &subs);
        let from_reversed = resolve_event_recipients(&e, &reversed);
        assert_eq!(ids(&first), ids(&second));
        assert_eq!(ids(&first), ids(&from_reversed));
    }
}
