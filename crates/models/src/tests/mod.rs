/// CRUD operations tests for the shelter/address entities
pub mod crud_tests;

/// Pure tests for the shelter type enumeration
pub mod enum_tests {
    use std::str::FromStr;

    use sea_orm::ActiveEnum;

    use crate::shelter::ShelterType;

    #[test]
    fn shelter_type_round_trips_string_values() {
        assert_eq!(ShelterType::People.to_value(), "People");
        assert_eq!(ShelterType::Pets.to_value(), "Pets");
        assert_eq!(ShelterType::Hybrid.to_value(), "Hybrid");
        assert_eq!(
            ShelterType::try_from_value(&"Hybrid".to_string()).expect("known value"),
            ShelterType::Hybrid
        );
    }

    #[test]
    fn shelter_type_rejects_unknown_values() {
        assert!(ShelterType::from_str("Cattle").is_err());
        assert!(ShelterType::from_str("").is_err());
        // matching is exact, not case-insensitive
        assert!(ShelterType::from_str("people").is_err());
    }
}
