//! Request and response shapes for the Maryema backend.

use serde::{Deserialize, Serialize};

/// The user-editable account record, mutated wholesale via PUT.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

/// The backend's `{"details": "..."}` acknowledgement envelope.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiMessage {
    pub details: String,
}

/// Paginated listing envelope (`count`/`next`/`previous`/`results`).
#[derive(Clone, Debug, Deserialize)]
pub struct Page<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// Customer record as seen by the admin listing.
#[derive(Clone, Debug, Deserialize)]
pub struct Customer {
    pub id: u64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn profile_roundtrips_flat_fields() {
        let profile: Profile = serde_json::from_value(json!({
            "username": "amina",
            "first_name": "Amina",
            "last_name": "Said",
            "email": "amina@example.com",
            "phone_number": "+20123456789"
        }))
        .unwrap();

        assert_eq!(profile.username, "amina");
        assert_eq!(
            serde_json::to_value(&profile).unwrap()["phone_number"],
            "+20123456789"
        );
    }

    #[test]
    fn page_envelope_parses() {
        let page: Page<Customer> = serde_json::from_value(json!({
            "count": 1,
            "next": null,
            "previous": null,
            "results": [{"id": 7, "username": "amina", "email": "amina@example.com"}]
        }))
        .unwrap();

        assert_eq!(page.count, 1);
        assert_eq!(page.results[0].id, 7);
        assert_eq!(page.results[0].first_name, "");
    }
}
