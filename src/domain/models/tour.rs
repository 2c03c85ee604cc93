use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A catalog entry. Only `id` matters to booking logic; everything else is
/// display data handed to the templates as-is.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Tour {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub images: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_fields_are_kept() {
        let raw = json!({
            "id": "t1",
            "name": "Harbour Walk",
            "price": "€25",
            "duration": "2 hours",
            "highlights": ["Lighthouse", "Fish market"]
        });

        let tour: Tour = serde_json::from_value(raw).unwrap();
        assert_eq!(tour.id, "t1");
        assert_eq!(tour.price, Some(json!("€25")));
        assert!(tour.images.is_none());
        assert_eq!(tour.extra["duration"], "2 hours");

        let back = serde_json::to_value(&tour).unwrap();
        assert_eq!(back["highlights"][1], "Fish market");
    }

    #[test]
    fn test_display_fields_accept_any_json() {
        let raw = json!({
            "id": "t2",
            "name": "Boat Trip",
            "description": { "en": "On the water" },
            "images": null,
            "price": null
        });

        let tour: Tour = serde_json::from_value(raw).unwrap();
        assert_eq!(tour.description, Some(json!({ "en": "On the water" })));
        assert!(tour.images.is_none());
        assert!(tour.price.is_none());
    }

    #[test]
    fn test_id_is_required() {
        let res: Result<Tour, _> = serde_json::from_value(json!({ "name": "No id" }));
        assert!(res.is_err());
    }
}
