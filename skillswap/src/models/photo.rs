use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePhoto {
    #[serde(default)]
    pub photo_id: Option<i64>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub is_primary: Option<bool>,
    #[serde(default)]
    pub uploaded_at: Option<NaiveDateTime>,
}

/// Display avatar: the primary photo, else the first one.
pub fn pick_avatar(photos: &[ProfilePhoto]) -> Option<&str> {
    photos
        .iter()
        .find(|p| p.is_primary == Some(true))
        .or_else(|| photos.first())
        .and_then(|p| p.photo_url.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(url: &str, primary: Option<bool>) -> ProfilePhoto {
        ProfilePhoto {
            photo_id: None,
            photo_url: Some(url.to_string()),
            is_primary: primary,
            uploaded_at: None,
        }
    }

    #[test]
    fn prefers_primary_photo() {
        let photos = vec![photo("/a.jpg", Some(false)), photo("/b.jpg", Some(true))];
        assert_eq!(pick_avatar(&photos), Some("/b.jpg"));
    }

    #[test]
    fn falls_back_to_first_photo() {
        let photos = vec![photo("/a.jpg", None), photo("/b.jpg", Some(false))];
        assert_eq!(pick_avatar(&photos), Some("/a.jpg"));
    }

    #[test]
    fn no_photos_no_avatar() {
        assert_eq!(pick_avatar(&[]), None);
    }
}
