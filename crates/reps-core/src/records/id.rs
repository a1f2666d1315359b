//! Record id generation.
//!
//! Ids are `<unix-millis>-<9 random [0-9a-f]>`. That is unique enough for a
//! single device; ids from two devices are not guaranteed distinct if
//! collections are ever merged.

use chrono::{DateTime, Utc};
use uuid::Uuid;

const SUFFIX_LEN: usize = 9;

pub fn generate_id(now: DateTime<Utc>) -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!("{}-{}", now.timestamp_millis(), &random[..SUFFIX_LEN])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_id_shape() {
        let now = DateTime::parse_from_rfc3339("2024-06-10T14:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let id = generate_id(now);
        let (millis, suffix) = id.split_once('-').unwrap();
        assert_eq!(millis, "1718029800000");
        assert_eq!(suffix.len(), SUFFIX_LEN);
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_same_instant_ids_differ() {
        let now = Utc::now();
        let ids: HashSet<String> = (0..500).map(|_| generate_id(now)).collect();
        assert_eq!(ids.len(), 500);
    }
}
