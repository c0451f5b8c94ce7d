//! Rentable item record, the subject of the publish checks.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::category::PropertyCategory;
use crate::lease::LeaseGroup;

/// Unit the base price is quoted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceUnit {
    Hour,
    Night,
    Month,
}

impl PriceUnit {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "HOUR" => Some(Self::Hour),
            "NIGHT" => Some(Self::Night),
            "MONTH" => Some(Self::Month),
            _ => None,
        }
    }
}

/// How electricity or water consumption is billed to the tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UtilityBillingMode {
    MeterPrivate,
    Shared,
    OwnerRate,
    StateRate,
}

impl UtilityBillingMode {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "METER_PRIVATE" => Some(Self::MeterPrivate),
            "SHARED" => Some(Self::Shared),
            "OWNER_RATE" => Some(Self::OwnerRate),
            "STATE_RATE" => Some(Self::StateRate),
            _ => None,
        }
    }
}

/// A leasable unit as submitted for save or publish.
///
/// Every field is optional: items are saved incrementally and only have to
/// be complete at publish time. Unknown fields are ignored.
///
/// Deserialization never rejects a field's value. Text fields keep whatever
/// was sent (so unknown codes reach the validator), and numeric fields that
/// cannot be read as numbers become `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RentableItem {
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: Option<String>,
    /// Category code. Kept as a string so unknown codes still validate.
    #[serde(default, deserialize_with = "lenient_text")]
    pub property_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub rental_duration_type: Option<String>,

    // -- Location --
    #[serde(default, deserialize_with = "lenient_text")]
    pub province: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub district: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub ward: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub address: Option<String>,

    // -- Pricing --
    #[serde(default, deserialize_with = "lenient_number")]
    pub base_price: Option<f64>,
    /// `HOUR`, `NIGHT` or `MONTH`; see [`RentableItem::price_unit`].
    #[serde(default, deserialize_with = "lenient_text")]
    pub price_unit: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub deposit_amount: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub booking_hold_deposit: Option<f64>,

    // -- Physical --
    #[serde(default, deserialize_with = "lenient_number")]
    pub area: Option<f64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub bedrooms: Option<i64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub bathrooms: Option<i64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub frontage_m: Option<f64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub floor_number: Option<i64>,

    // -- Utilities --
    /// A [`UtilityBillingMode`] code.
    #[serde(default, deserialize_with = "lenient_text")]
    pub electricity_billing: Option<String>,
    /// A [`UtilityBillingMode`] code.
    #[serde(default, deserialize_with = "lenient_text")]
    pub water_billing: Option<String>,

    // -- Short-term stays --
    #[serde(default, deserialize_with = "lenient_text")]
    pub check_in_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub check_out_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub max_occupancy: Option<i64>,

    /// Versioned metadata document, see [`crate::metadata`].
    #[serde(default)]
    pub metadata: Option<Value>,
}

impl RentableItem {
    /// Lease group derived from `rental_duration_type` (lenient, defaults to MID).
    pub fn lease_group(&self) -> LeaseGroup {
        LeaseGroup::from_duration_type(self.rental_duration_type.as_deref())
    }

    pub fn category(&self) -> Option<PropertyCategory> {
        self.property_type.as_deref().and_then(PropertyCategory::from_code)
    }

    pub fn price_unit(&self) -> Option<PriceUnit> {
        self.price_unit.as_deref().and_then(PriceUnit::from_code)
    }

    pub fn electricity_billing(&self) -> Option<UtilityBillingMode> {
        self.electricity_billing
            .as_deref()
            .and_then(UtilityBillingMode::from_code)
    }

    pub fn water_billing(&self) -> Option<UtilityBillingMode> {
        self.water_billing
            .as_deref()
            .and_then(UtilityBillingMode::from_code)
    }
}

// ---------------------------------------------------------------------------
// Tolerant field readers
// ---------------------------------------------------------------------------

/// Strings as sent; other non-null scalars and structures in their JSON form.
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

fn number_from(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// Numbers and numeric strings; anything else reads as absent.
fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from))
}

/// Whole numbers, negative included; fractions and non-numbers read as absent.
fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(number_from)
        .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
        .map(|f| f as i64))
}
