//! Applying parsed search filters to rides.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::parser::SearchFilters;

/// Email placeholder that stands for the signed-in user.
pub const ME_ALIAS: &str = "me";

/// The fields of a ride that search filters look at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RideSummary {
    pub location_from: String,
    pub location_to: String,
    pub created_by_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_email: Option<String>,
    pub taking_place_at: DateTime<Utc>,
    /// Participant emails.
    #[serde(default)]
    pub participants: Vec<String>,
}

/// Resolves the `me` placeholder to the signed-in user's email.
fn aliased<'a>(email: &'a str, me_email: &'a str) -> &'a str {
    if email == ME_ALIAS {
        me_email
    } else {
        email
    }
}

impl SearchFilters {
    /// Returns true if `ride` satisfies every filter that is set.
    ///
    /// Places match exactly. Owner, driver and participant emails may be
    /// written as `me`, meaning `me_email`. Date bounds are inclusive. Every
    /// listed participant must be on the ride.
    pub fn matches(&self, ride: &RideSummary, me_email: &str) -> bool {
        let same_email = |a: &str, b: &str| aliased(a, me_email) == aliased(b, me_email);

        if self.source.as_ref().is_some_and(|s| *s != ride.location_from) {
            return false;
        }
        if self.destination.as_ref().is_some_and(|d| *d != ride.location_to) {
            return false;
        }
        if let Some(owner) = &self.owner {
            if !same_email(&ride.created_by_email, owner) {
                return false;
            }
        }
        if let Some(driver) = &self.driver {
            match &ride.driver_email {
                Some(email) if same_email(email, driver) => {}
                _ => return false,
            }
        }
        if self.date_after.is_some_and(|after| ride.taking_place_at < after) {
            return false;
        }
        if self.date_before.is_some_and(|before| ride.taking_place_at > before) {
            return false;
        }
        if let Some(participants) = &self.participants {
            let all_present = participants.iter().all(|wanted| {
                ride.participants
                    .iter()
                    .any(|email| same_email(email, wanted))
            });
            if !all_present {
                return false;
            }
        }
        true
    }
}
