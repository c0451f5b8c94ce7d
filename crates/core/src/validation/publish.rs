//! Publish-eligibility check.
//!
//! Stricter than the metadata check: location, pricing, duration-specific
//! and legal requirements all have to hold before a listing referencing
//! the item can go public. Every stage runs; errors accumulate in stage
//! order.

use crate::item::{PriceUnit, RentableItem, UtilityBillingMode};
use crate::lease::LeaseGroup;
use crate::metadata::MetadataView;

use super::result::ValidationResult;
use super::rules::{collect_violations, rules_for_code};
use super::time::parse_clock_time;

pub const MSG_PROVINCE_REQUIRED: &str = "Province is required";
pub const MSG_DISTRICT_REQUIRED: &str = "District is required";
pub const MSG_WARD_REQUIRED: &str = "Ward is required";
pub const MSG_ADDRESS_REQUIRED: &str = "Address is required";
pub const MSG_BASE_PRICE_REQUIRED: &str = "Base price is required";
pub const MSG_BASE_PRICE_NOT_POSITIVE: &str = "Base price must be greater than 0";
pub const MSG_PRICE_UNIT_REQUIRED: &str = "Price unit is required";
pub const MSG_PRICE_UNIT_INVALID: &str = "Price unit must be one of HOUR, NIGHT, MONTH";
pub const MSG_CHECK_IN_REQUIRED: &str = "Check-in time is required for short-term rentals";
pub const MSG_CHECK_IN_FORMAT: &str = "Check-in time must be in HH:MM format";
pub const MSG_CHECK_OUT_REQUIRED: &str = "Check-out time is required for short-term rentals";
pub const MSG_CHECK_OUT_FORMAT: &str = "Check-out time must be in HH:MM format";
pub const MSG_CHECK_OUT_BEFORE_CHECK_IN: &str = "Check-out time must be after check-in time";
pub const MSG_MAX_OCCUPANCY_REQUIRED: &str = "Max occupancy is required for short-term rentals";
pub const MSG_MAX_OCCUPANCY_TOO_LOW: &str = "Max occupancy must be at least 1";
pub const MSG_DEPOSIT_REQUIRED: &str = "Deposit amount is required for mid and long-term rentals";
pub const MSG_DEPOSIT_NEGATIVE: &str = "Deposit amount cannot be negative";
pub const MSG_ELECTRICITY_BILLING_REQUIRED: &str = "Electricity billing mode is required";
pub const MSG_WATER_BILLING_REQUIRED: &str = "Water billing mode is required";
pub const MSG_ELECTRICITY_BILLING_INVALID: &str =
    "Electricity billing mode must be one of METER_PRIVATE, SHARED, OWNER_RATE, STATE_RATE";
pub const MSG_WATER_BILLING_INVALID: &str =
    "Water billing mode must be one of METER_PRIVATE, SHARED, OWNER_RATE, STATE_RATE";

/// Check whether `item` may be published.
pub fn validate_for_publish(item: &RentableItem) -> ValidationResult {
    let mut errors = Vec::new();

    check_location(item, &mut errors);
    check_pricing(item, &mut errors);

    match item.lease_group() {
        LeaseGroup::Short => check_short_term(item, &mut errors),
        LeaseGroup::Mid | LeaseGroup::Long => check_mid_long_term(item, &mut errors),
    }

    // Legal requirements only apply once metadata has been authored.
    let metadata = MetadataView::new(item.metadata.as_ref());
    if metadata.is_object() {
        let rules = rules_for_code(item.property_type.as_deref().unwrap_or_default());
        collect_violations(rules.publish, item, &metadata, &mut errors);
    }

    ValidationResult::from_errors(errors)
}

/// Text that is missing, empty or whitespace-only counts as not provided.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// Report a missing or unrecognized code.
fn check_code<T>(
    value: Option<&str>,
    parse: impl Fn(&str) -> Option<T>,
    required: &str,
    invalid: &str,
    errors: &mut Vec<String>,
) {
    match non_blank(value) {
        None => errors.push(required.to_string()),
        Some(code) if parse(code).is_none() => errors.push(invalid.to_string()),
        Some(_) => {}
    }
}

fn check_location(item: &RentableItem, errors: &mut Vec<String>) {
    let fields = [
        (item.province.as_deref(), MSG_PROVINCE_REQUIRED),
        (item.district.as_deref(), MSG_DISTRICT_REQUIRED),
        (item.ward.as_deref(), MSG_WARD_REQUIRED),
        (item.address.as_deref(), MSG_ADDRESS_REQUIRED),
    ];
    for (value, message) in fields {
        if non_blank(value).is_none() {
            errors.push(message.to_string());
        }
    }
}

fn check_pricing(item: &RentableItem, errors: &mut Vec<String>) {
    match item.base_price {
        None => errors.push(MSG_BASE_PRICE_REQUIRED.to_string()),
        Some(price) if price <= 0.0 => errors.push(MSG_BASE_PRICE_NOT_POSITIVE.to_string()),
        Some(_) => {}
    }
    check_code(
        item.price_unit.as_deref(),
        PriceUnit::from_code,
        MSG_PRICE_UNIT_REQUIRED,
        MSG_PRICE_UNIT_INVALID,
        errors,
    );
}

/// Parse one stay boundary, reporting a missing or malformed value.
fn stay_time(
    value: Option<&str>,
    required: &str,
    malformed: &str,
    errors: &mut Vec<String>,
) -> Option<u16> {
    match non_blank(value) {
        None => {
            errors.push(required.to_string());
            None
        }
        Some(raw) => {
            let minutes = parse_clock_time(raw);
            if minutes.is_none() {
                errors.push(malformed.to_string());
            }
            minutes
        }
    }
}

fn check_short_term(item: &RentableItem, errors: &mut Vec<String>) {
    let check_in = stay_time(
        item.check_in_time.as_deref(),
        MSG_CHECK_IN_REQUIRED,
        MSG_CHECK_IN_FORMAT,
        errors,
    );
    let check_out = stay_time(
        item.check_out_time.as_deref(),
        MSG_CHECK_OUT_REQUIRED,
        MSG_CHECK_OUT_FORMAT,
        errors,
    );

    // Same-day comparison only; a stay that checks out after midnight is
    // reported as out of order.
    if let (Some(check_in), Some(check_out)) = (check_in, check_out) {
        if check_out <= check_in {
            errors.push(MSG_CHECK_OUT_BEFORE_CHECK_IN.to_string());
        }
    }

    match item.max_occupancy {
        None => errors.push(MSG_MAX_OCCUPANCY_REQUIRED.to_string()),
        Some(guests) if guests < 1 => errors.push(MSG_MAX_OCCUPANCY_TOO_LOW.to_string()),
        Some(_) => {}
    }
}

fn check_mid_long_term(item: &RentableItem, errors: &mut Vec<String>) {
    match item.deposit_amount {
        None => errors.push(MSG_DEPOSIT_REQUIRED.to_string()),
        Some(deposit) if deposit < 0.0 => errors.push(MSG_DEPOSIT_NEGATIVE.to_string()),
        Some(_) => {}
    }
    check_code(
        item.electricity_billing.as_deref(),
        UtilityBillingMode::from_code,
        MSG_ELECTRICITY_BILLING_REQUIRED,
        MSG_ELECTRICITY_BILLING_INVALID,
        errors,
    );
    check_code(
        item.water_billing.as_deref(),
        UtilityBillingMode::from_code,
        MSG_WATER_BILLING_REQUIRED,
        MSG_WATER_BILLING_INVALID,
        errors,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::rules::{
        MSG_FIRE_SAFETY_REQUIRED, MSG_HOTEL_LICENSE_REQUIRED, MSG_LAND_USE_CERTIFICATE_REQUIRED,
    };
    use serde_json::json;

    fn located() -> RentableItem {
        RentableItem {
            id: Some("item-1".into()),
            province: Some("Ho Chi Minh".into()),
            district: Some("District 1".into()),
            ward: Some("Ben Nghe".into()),
            address: Some("12 Nguyen Hue".into()),
            ..Default::default()
        }
    }

    fn long_term_apartment() -> RentableItem {
        RentableItem {
            property_type: Some("APARTMENT".into()),
            rental_duration_type: Some("LONG_TERM".into()),
            base_price: Some(12_000_000.0),
            price_unit: Some("MONTH".into()),
            deposit_amount: Some(24_000_000.0),
            electricity_billing: Some("STATE_RATE".into()),
            water_billing: Some("METER_PRIVATE".into()),
            bedrooms: Some(2),
            bathrooms: Some(1),
            metadata: Some(json!({
                "version": 1,
                "property_type": "APARTMENT",
                "lease_group": "LONG",
                "details": {}
            })),
            ..located()
        }
    }

    fn short_term(category: &str) -> RentableItem {
        RentableItem {
            property_type: Some(category.into()),
            rental_duration_type: Some("SHORT_TERM".into()),
            base_price: Some(800_000.0),
            price_unit: Some("NIGHT".into()),
            check_in_time: Some("14:00".into()),
            check_out_time: Some("18:00".into()),
            max_occupancy: Some(2),
            ..located()
        }
    }

    fn with_times(check_in: &str, check_out: &str) -> RentableItem {
        RentableItem {
            check_in_time: Some(check_in.into()),
            check_out_time: Some(check_out.into()),
            ..short_term("HOMESTAY")
        }
    }

    // -- Location and pricing -------------------------------------------------

    #[test]
    fn complete_long_term_apartment_passes() {
        let result = validate_for_publish(&long_term_apartment());
        assert!(result.valid, "unexpected errors: {:?}", result.errors);
    }

    #[test]
    fn each_missing_location_field_is_reported() {
        let item = RentableItem {
            province: None,
            district: Some(String::new()),
            ward: Some("   ".into()),
            address: None,
            ..long_term_apartment()
        };
        let result = validate_for_publish(&item);
        assert_eq!(
            result.errors,
            vec![
                MSG_PROVINCE_REQUIRED,
                MSG_DISTRICT_REQUIRED,
                MSG_WARD_REQUIRED,
                MSG_ADDRESS_REQUIRED,
            ]
        );
    }

    #[test]
    fn base_price_must_be_positive() {
        let zero = RentableItem {
            base_price: Some(0.0),
            ..long_term_apartment()
        };
        assert_eq!(validate_for_publish(&zero).errors, vec![MSG_BASE_PRICE_NOT_POSITIVE]);

        let missing = RentableItem {
            base_price: None,
            price_unit: None,
            ..long_term_apartment()
        };
        assert_eq!(
            validate_for_publish(&missing).errors,
            vec![MSG_BASE_PRICE_REQUIRED, MSG_PRICE_UNIT_REQUIRED]
        );
    }

    #[test]
    fn unknown_price_unit_is_reported() {
        let item = RentableItem {
            price_unit: Some("WEEK".into()),
            ..long_term_apartment()
        };
        assert_eq!(validate_for_publish(&item).errors, vec![MSG_PRICE_UNIT_INVALID]);

        let blank = RentableItem {
            price_unit: Some(" ".into()),
            ..long_term_apartment()
        };
        assert_eq!(validate_for_publish(&blank).errors, vec![MSG_PRICE_UNIT_REQUIRED]);
    }

    // -- Short-term rules -----------------------------------------------------

    #[test]
    fn daytime_stay_passes() {
        let result = validate_for_publish(&with_times("10:00", "18:00"));
        assert!(result.valid, "unexpected errors: {:?}", result.errors);
    }

    #[test]
    fn check_out_before_check_in_is_rejected() {
        let result = validate_for_publish(&with_times("14:00", "12:00"));
        assert_eq!(result.errors, vec![MSG_CHECK_OUT_BEFORE_CHECK_IN]);
    }

    #[test]
    fn equal_check_in_and_check_out_is_rejected() {
        let result = validate_for_publish(&with_times("12:00", "12:00"));
        assert_eq!(result.errors, vec![MSG_CHECK_OUT_BEFORE_CHECK_IN]);
    }

    #[test]
    fn overnight_stay_is_reported_as_out_of_order() {
        // Known limitation: there is no wrap past midnight, so a 22:00
        // check-in with an 08:00 check-out fails the ordering rule.
        let result = validate_for_publish(&with_times("22:00", "08:00"));
        assert!(!result.valid);
        assert_eq!(result.errors, vec![MSG_CHECK_OUT_BEFORE_CHECK_IN]);
    }

    #[test]
    fn malformed_times_skip_the_ordering_rule() {
        let result = validate_for_publish(&with_times("2pm", "25:00"));
        assert_eq!(result.errors, vec![MSG_CHECK_IN_FORMAT, MSG_CHECK_OUT_FORMAT]);
    }

    #[test]
    fn missing_short_term_fields_are_reported() {
        let item = RentableItem {
            check_in_time: None,
            check_out_time: Some(String::new()),
            max_occupancy: None,
            ..short_term("HOMESTAY")
        };
        let result = validate_for_publish(&item);
        assert_eq!(
            result.errors,
            vec![
                MSG_CHECK_IN_REQUIRED,
                MSG_CHECK_OUT_REQUIRED,
                MSG_MAX_OCCUPANCY_REQUIRED,
            ]
        );
    }

    #[test]
    fn zero_occupancy_is_rejected() {
        let item = RentableItem {
            max_occupancy: Some(0),
            ..short_term("HOMESTAY")
        };
        assert_eq!(validate_for_publish(&item).errors, vec![MSG_MAX_OCCUPANCY_TOO_LOW]);
    }

    #[test]
    fn negative_occupancy_is_rejected() {
        let item = RentableItem {
            max_occupancy: Some(-1),
            ..short_term("HOMESTAY")
        };
        assert_eq!(validate_for_publish(&item).errors, vec![MSG_MAX_OCCUPANCY_TOO_LOW]);
    }

    #[test]
    fn whitespace_stay_times_count_as_missing() {
        let result = validate_for_publish(&with_times("  ", "\t"));
        assert_eq!(result.errors, vec![MSG_CHECK_IN_REQUIRED, MSG_CHECK_OUT_REQUIRED]);
    }

    #[test]
    fn short_term_does_not_require_deposit_or_billing() {
        let item = short_term("HOMESTAY");
        assert!(item.deposit_amount.is_none());
        assert!(validate_for_publish(&item).valid);
    }

    // -- Mid and long-term rules ----------------------------------------------

    #[test]
    fn zero_deposit_is_allowed_but_negative_is_not() {
        let zero = RentableItem {
            deposit_amount: Some(0.0),
            ..long_term_apartment()
        };
        assert!(validate_for_publish(&zero).valid);

        let negative = RentableItem {
            deposit_amount: Some(-1.0),
            ..long_term_apartment()
        };
        assert_eq!(validate_for_publish(&negative).errors, vec![MSG_DEPOSIT_NEGATIVE]);
    }

    #[test]
    fn billing_modes_are_required_for_long_term() {
        let item = RentableItem {
            deposit_amount: None,
            electricity_billing: None,
            water_billing: None,
            ..long_term_apartment()
        };
        assert_eq!(
            validate_for_publish(&item).errors,
            vec![
                MSG_DEPOSIT_REQUIRED,
                MSG_ELECTRICITY_BILLING_REQUIRED,
                MSG_WATER_BILLING_REQUIRED,
            ]
        );
    }

    #[test]
    fn unknown_billing_modes_are_reported() {
        let item = RentableItem {
            electricity_billing: Some("FREE".into()),
            water_billing: Some("state_rate".into()),
            ..long_term_apartment()
        };
        assert_eq!(
            validate_for_publish(&item).errors,
            vec![MSG_ELECTRICITY_BILLING_INVALID, MSG_WATER_BILLING_INVALID]
        );
    }

    #[test]
    fn unrecognized_duration_type_is_checked_as_mid_term() {
        // The lenient default applies MID rules: short-term fields are
        // ignored and the deposit becomes mandatory.
        let item = RentableItem {
            rental_duration_type: Some("NIGHTLY".into()),
            ..short_term("HOMESTAY")
        };
        let result = validate_for_publish(&item);
        assert_eq!(
            result.errors,
            vec![
                MSG_DEPOSIT_REQUIRED,
                MSG_ELECTRICITY_BILLING_REQUIRED,
                MSG_WATER_BILLING_REQUIRED,
            ]
        );
    }

    // -- Legal requirements ---------------------------------------------------

    #[test]
    fn hotel_without_legal_documents_reports_license_once() {
        let item = RentableItem {
            metadata: Some(json!({"version": 1, "details": {}})),
            ..short_term("HOTEL")
        };
        assert_eq!(validate_for_publish(&item).errors, vec![MSG_HOTEL_LICENSE_REQUIRED]);
    }

    #[test]
    fn hotel_missing_province_and_license_reports_both() {
        let item = RentableItem {
            province: None,
            metadata: Some(json!({"version": 1, "legal_documents": {}})),
            ..short_term("HOTEL")
        };
        let result = validate_for_publish(&item);
        assert!(!result.valid);
        assert_eq!(result.errors, vec![MSG_PROVINCE_REQUIRED, MSG_HOTEL_LICENSE_REQUIRED]);
    }

    #[test]
    fn hotel_with_license_passes() {
        let item = RentableItem {
            metadata: Some(json!({
                "legal_documents": {"hotel_business_license": "HBL-2024-001"}
            })),
            ..short_term("HOTEL")
        };
        assert!(validate_for_publish(&item).valid);
    }

    #[test]
    fn legal_checks_are_skipped_without_metadata() {
        let item = RentableItem {
            metadata: None,
            ..short_term("HOTEL")
        };
        assert!(validate_for_publish(&item).valid);
    }

    #[test]
    fn land_plot_requires_land_use_certificate() {
        let item = RentableItem {
            property_type: Some("LAND_PLOT".into()),
            metadata: Some(json!({"legal_documents": {"land_use_certificate": ""}})),
            ..long_term_apartment()
        };
        assert_eq!(
            validate_for_publish(&item).errors,
            vec![MSG_LAND_USE_CERTIFICATE_REQUIRED]
        );
    }

    #[test]
    fn factory_requires_truthy_fire_safety_compliance() {
        let unconfirmed = RentableItem {
            property_type: Some("FACTORY".into()),
            metadata: Some(json!({"details": {"fire_safety_compliance": false}})),
            ..long_term_apartment()
        };
        assert_eq!(
            validate_for_publish(&unconfirmed).errors,
            vec![MSG_FIRE_SAFETY_REQUIRED]
        );

        let confirmed = RentableItem {
            metadata: Some(json!({"details": {"fire_safety_compliance": true}})),
            ..unconfirmed
        };
        assert!(validate_for_publish(&confirmed).valid);
    }

    #[test]
    fn validation_is_deterministic_and_does_not_mutate() {
        let item = RentableItem {
            province: None,
            ..with_times("22:00", "08:00")
        };
        let snapshot = item.clone();
        assert_eq!(validate_for_publish(&item), validate_for_publish(&item));
        assert_eq!(item, snapshot);
    }
}
