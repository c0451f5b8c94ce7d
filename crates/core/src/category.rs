//! Property category catalog.
//!
//! Every rentable item declares one of these category codes. The catalog
//! fixes each category's rental duration type and its membership in the
//! residential and commercial sets that drive the structural rules.

use serde::{Deserialize, Serialize};

use crate::lease::{LeaseGroup, RentalDurationType};

/// Enumerated property type of a rentable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyCategory {
    // Short-term stays.
    Hotel,
    Homestay,
    Guesthouse,
    VillaResort,
    ServicedApartmentShort,
    // Medium-term rentals.
    RoomRental,
    BoardingHouse,
    ServicedApartment,
    Dormitory,
    SharedRoom,
    // Long-term leases.
    Apartment,
    PrivateHouse,
    Townhouse,
    Villa,
    Penthouse,
    Office,
    RetailSpaceSmall,
    CommercialSpace,
    Shophouse,
    LandPlot,
    Warehouse,
    Factory,
}

/// Categories that must declare bedroom and bathroom counts.
pub const RESIDENTIAL_CATEGORIES: &[PropertyCategory] = &[
    PropertyCategory::Homestay,
    PropertyCategory::Guesthouse,
    PropertyCategory::VillaResort,
    PropertyCategory::ServicedApartmentShort,
    PropertyCategory::RoomRental,
    PropertyCategory::BoardingHouse,
    PropertyCategory::ServicedApartment,
    PropertyCategory::Dormitory,
    PropertyCategory::SharedRoom,
    PropertyCategory::Apartment,
    PropertyCategory::PrivateHouse,
    PropertyCategory::Townhouse,
    PropertyCategory::Villa,
    PropertyCategory::Penthouse,
];

/// Street-facing categories that must declare their frontage.
pub const COMMERCIAL_CATEGORIES: &[PropertyCategory] = &[
    PropertyCategory::RetailSpaceSmall,
    PropertyCategory::CommercialSpace,
    PropertyCategory::Shophouse,
    PropertyCategory::LandPlot,
];

impl PropertyCategory {
    /// Every category, in catalog order.
    pub const ALL: [PropertyCategory; 22] = [
        Self::Hotel,
        Self::Homestay,
        Self::Guesthouse,
        Self::VillaResort,
        Self::ServicedApartmentShort,
        Self::RoomRental,
        Self::BoardingHouse,
        Self::ServicedApartment,
        Self::Dormitory,
        Self::SharedRoom,
        Self::Apartment,
        Self::PrivateHouse,
        Self::Townhouse,
        Self::Villa,
        Self::Penthouse,
        Self::Office,
        Self::RetailSpaceSmall,
        Self::CommercialSpace,
        Self::Shophouse,
        Self::LandPlot,
        Self::Warehouse,
        Self::Factory,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hotel => "HOTEL",
            Self::Homestay => "HOMESTAY",
            Self::Guesthouse => "GUESTHOUSE",
            Self::VillaResort => "VILLA_RESORT",
            Self::ServicedApartmentShort => "SERVICED_APARTMENT_SHORT",
            Self::RoomRental => "ROOM_RENTAL",
            Self::BoardingHouse => "BOARDING_HOUSE",
            Self::ServicedApartment => "SERVICED_APARTMENT",
            Self::Dormitory => "DORMITORY",
            Self::SharedRoom => "SHARED_ROOM",
            Self::Apartment => "APARTMENT",
            Self::PrivateHouse => "PRIVATE_HOUSE",
            Self::Townhouse => "TOWNHOUSE",
            Self::Villa => "VILLA",
            Self::Penthouse => "PENTHOUSE",
            Self::Office => "OFFICE",
            Self::RetailSpaceSmall => "RETAIL_SPACE_SMALL",
            Self::CommercialSpace => "COMMERCIAL_SPACE",
            Self::Shophouse => "SHOPHOUSE",
            Self::LandPlot => "LAND_PLOT",
            Self::Warehouse => "WAREHOUSE",
            Self::Factory => "FACTORY",
        }
    }

    /// Look up a category by its exact (case-sensitive) code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == code)
    }

    pub fn duration_type(&self) -> RentalDurationType {
        match self {
            Self::Hotel
            | Self::Homestay
            | Self::Guesthouse
            | Self::VillaResort
            | Self::ServicedApartmentShort => RentalDurationType::ShortTerm,
            Self::RoomRental
            | Self::BoardingHouse
            | Self::ServicedApartment
            | Self::Dormitory
            | Self::SharedRoom => RentalDurationType::MediumTerm,
            _ => RentalDurationType::LongTerm,
        }
    }

    pub fn lease_group(&self) -> LeaseGroup {
        self.duration_type().lease_group()
    }

    pub fn is_residential(&self) -> bool {
        RESIDENTIAL_CATEGORIES.contains(self)
    }

    pub fn is_commercial(&self) -> bool {
        COMMERCIAL_CATEGORIES.contains(self)
    }
}

impl std::fmt::Display for PropertyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_from_code() {
        for category in PropertyCategory::ALL {
            assert_eq!(PropertyCategory::from_code(category.as_str()), Some(category));
        }
    }

    #[test]
    fn unknown_and_lowercase_codes_are_rejected() {
        assert_eq!(PropertyCategory::from_code("CASTLE"), None);
        assert_eq!(PropertyCategory::from_code("hotel"), None);
        assert_eq!(PropertyCategory::from_code(""), None);
    }

    #[test]
    fn serde_uses_catalog_codes() {
        for category in PropertyCategory::ALL {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json, serde_json::json!(category.as_str()));
        }
    }

    #[test]
    fn residential_and_commercial_sets_are_disjoint() {
        assert_eq!(RESIDENTIAL_CATEGORIES.len(), 14);
        assert_eq!(COMMERCIAL_CATEGORIES.len(), 4);
        for category in COMMERCIAL_CATEGORIES {
            assert!(!category.is_residential(), "{category} is in both sets");
        }
    }

    #[test]
    fn hotel_is_short_term_but_not_residential() {
        assert_eq!(PropertyCategory::Hotel.lease_group(), LeaseGroup::Short);
        assert!(!PropertyCategory::Hotel.is_residential());
        assert!(!PropertyCategory::Hotel.is_commercial());
    }

    #[test]
    fn duration_types_follow_catalog_sections() {
        assert_eq!(PropertyCategory::Homestay.duration_type(), RentalDurationType::ShortTerm);
        assert_eq!(PropertyCategory::Dormitory.duration_type(), RentalDurationType::MediumTerm);
        assert_eq!(PropertyCategory::Apartment.duration_type(), RentalDurationType::LongTerm);
        assert_eq!(PropertyCategory::Factory.lease_group(), LeaseGroup::Long);
    }
}
