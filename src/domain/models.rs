use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// A membership plan as served by the backend tier collection.
///
/// Read-only from the client's perspective; fetched fresh every time a
/// page that displays tiers is entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipTier {
    pub id: String,
    pub name: String,
    pub price: u32,
    pub currency: String,
    pub billing_cycle: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub is_popular: bool,
}

/// A meal plan from the NutriMeal programme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutriMealPlan {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price_per_day: u32,
    pub ingredients: Vec<String>,
    pub nutritional_info: HashMap<String, serde_json::Value>,
}

/// Payload for the contact inquiry submission.
///
/// Built from the contact form mapping at submit time and discarded once
/// the request resolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service_type: String,
    pub message: String,
}

/// Payload for the service booking submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceBookingRequest {
    pub client_name: String,
    pub client_email: String,
    pub client_phone: Option<String>,
    pub service_category: String,
    pub service_details: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub urgency: Urgency,
}

/// Booking priority. Interpreted by the backend only; the client just
/// carries the selected level on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Normal,
    Urgent,
    Asap,
}

impl Urgency {
    /// Parses a form value into an urgency level.
    ///
    /// An empty or unrecognized value resolves to `Normal`, matching the
    /// default the booking form starts from.
    pub fn parse(value: &str) -> Self {
        match value {
            "urgent" => Urgency::Urgent,
            "asap" => Urgency::Asap,
            _ => Urgency::Normal,
        }
    }

    /// The wire value for this level.
    pub fn as_str(self) -> &'static str {
        match self {
            Urgency::Normal => "normal",
            Urgency::Urgent => "urgent",
            Urgency::Asap => "asap",
        }
    }

    /// Human-readable label shown next to the select field.
    pub fn label(self) -> &'static str {
        match self {
            Urgency::Normal => "Normal",
            Urgency::Urgent => "Urgent (Same Day)",
            Urgency::Asap => "ASAP (Within 2 Hours)",
        }
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_deserializes_backend_shape() {
        let json = r#"{
            "id": "student",
            "name": "UWI Life",
            "price": 199,
            "currency": "TTD",
            "billing_cycle": "month",
            "features": ["2 errands per week", "Email support"],
            "is_popular": false
        }"#;

        let tier: MembershipTier = serde_json::from_str(json).unwrap();
        assert_eq!(tier.name, "UWI Life");
        assert_eq!(tier.price, 199);
        assert_eq!(tier.currency, "TTD");
        assert_eq!(tier.billing_cycle, "month");
        assert_eq!(tier.features.len(), 2);
        assert!(!tier.is_popular);
    }

    #[test]
    fn test_tier_is_popular_defaults_to_false() {
        let json = r#"{
            "id": "standard",
            "name": "Urban Assist",
            "price": 499,
            "currency": "TTD",
            "billing_cycle": "month",
            "features": []
        }"#;

        let tier: MembershipTier = serde_json::from_str(json).unwrap();
        assert!(!tier.is_popular);
    }

    #[test]
    fn test_tier_collection_rejects_malformed_record() {
        // A record missing its name should poison the whole collection
        let json = r#"[{"id": "x", "price": 1, "currency": "TTD",
                        "billing_cycle": "month", "features": []}]"#;

        let result: Result<Vec<MembershipTier>, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_urgency_wire_values() {
        assert_eq!(serde_json::to_string(&Urgency::Normal).unwrap(), "\"normal\"");
        assert_eq!(serde_json::to_string(&Urgency::Urgent).unwrap(), "\"urgent\"");
        assert_eq!(serde_json::to_string(&Urgency::Asap).unwrap(), "\"asap\"");
    }

    #[test]
    fn test_urgency_parse_defaults_to_normal() {
        assert_eq!(Urgency::parse(""), Urgency::Normal);
        assert_eq!(Urgency::parse("whenever"), Urgency::Normal);
        assert_eq!(Urgency::parse("asap"), Urgency::Asap);
    }

    #[test]
    fn test_booking_request_serializes_urgency_inline() {
        let request = ServiceBookingRequest {
            client_name: "Ada".to_string(),
            client_email: "ada@example.com".to_string(),
            client_phone: None,
            service_category: "errands-dropoffs".to_string(),
            service_details: "Drop off a parcel".to_string(),
            preferred_date: "2025-09-01".to_string(),
            preferred_time: "10:00".to_string(),
            urgency: Urgency::Asap,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["urgency"], "asap");
        assert_eq!(json["client_phone"], serde_json::Value::Null);
    }

    #[test]
    fn test_meal_plan_deserializes_mixed_nutritional_info() {
        let json = r#"{
            "id": "balanced",
            "name": "Balanced Wellness",
            "description": "A perfect balance.",
            "image_url": "https://example.com/meal.jpg",
            "price_per_day": 45,
            "ingredients": ["Grilled salmon", "Quinoa"],
            "nutritional_info": {"calories": 650, "protein": "35g"}
        }"#;

        let plan: NutriMealPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.price_per_day, 45);
        assert_eq!(plan.nutritional_info["calories"], 650);
        assert_eq!(plan.nutritional_info["protein"], "35g");
    }
}
