//! Identifier generation for recommendations
//!
//! Uses UUID v7, which is time-based and sortable, so history ids order the
//! same way as their creation timestamps.

use uuid::Uuid;

/// Generate a unique, time-ordered recommendation id
pub fn generate_recommendation_id() -> String {
    Uuid::now_v7().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_recommendation_id() {
        let id1 = generate_recommendation_id();
        let id2 = generate_recommendation_id();

        assert_ne!(id1, id2);

        let uuid1 = Uuid::parse_str(&id1).unwrap();
        let uuid2 = Uuid::parse_str(&id2).unwrap();
        assert_eq!(uuid1.get_version(), Some(uuid::Version::SortRand));
        assert_eq!(uuid2.get_version(), Some(uuid::Version::SortRand));
    }
}
