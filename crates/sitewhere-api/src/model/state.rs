// ── Device state requests ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::event::LocationContent;

/// Records an event as the most recent of its kind for a device state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentStateEventCreateRequest {
    pub device_state_token: String,
    pub event_id: String,
    pub event_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// A recent-state entry that also carries location content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentLocationEventCreateRequest {
    #[serde(flatten)]
    pub recent: RecentStateEventCreateRequest,
    #[serde(flatten)]
    pub location: LocationContent,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn recent_location_merges_both_groups() {
        let raw = json!({
            "deviceStateToken": "state-1",
            "eventId": "evt-9",
            "eventDate": "2024-05-02T08:15:00Z",
            "latitude": 33.75,
            "longitude": -84.39
        });

        let request: RecentLocationEventCreateRequest = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(request.recent.event_id, "evt-9");
        assert!(request.location.elevation.is_none());
        assert_eq!(serde_json::to_value(&request).unwrap(), raw);
    }
}
