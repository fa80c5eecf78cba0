use serde::{Deserialize, Serialize};

use crate::geo::Coordinates;

/// Backend identifier for a user (`user_id` column).
pub type UserId = i64;

/// Identity record as returned by `GET /api/users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "id")]
    pub user_id: UserId,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub show_location: Option<bool>,
}

impl User {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            first_name: None,
            last_name: None,
            email: None,
            university: None,
            location: None,
            latitude: None,
            longitude: None,
            show_location: None,
        }
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::from_parts(self.latitude, self.longitude)
    }
}

/// Reference to a user embedded in another record.
///
/// The backend nests whole user objects here; only the id is read. Older
/// payloads carry it as `id` instead of `userId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    #[serde(default, alias = "id")]
    pub user_id: Option<UserId>,
}

impl UserRef {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }
}
