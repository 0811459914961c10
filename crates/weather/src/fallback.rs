use serde::Serialize;

/// Placeholder description returned when upstream data is unavailable.
pub const UNAVAILABLE_DESCRIPTION: &str = "Weather data unavailable";

/// Minimal replica of the provider's `list[].weather[]` shape.
#[derive(Debug, Serialize)]
pub struct FallbackDocument {
    pub error: String,
    pub list: Vec<FallbackEntry>,
}

#[derive(Debug, Serialize)]
pub struct FallbackEntry {
    pub weather: Vec<FallbackCondition>,
}

#[derive(Debug, Serialize)]
pub struct FallbackCondition {
    pub description: &'static str,
}

/// Build the document returned in place of upstream weather data.
pub fn fallback_document(error: impl Into<String>) -> FallbackDocument {
    FallbackDocument {
        error: error.into(),
        list: vec![FallbackEntry {
            weather: vec![FallbackCondition {
                description: UNAVAILABLE_DESCRIPTION,
            }],
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_keeps_description_path() {
        let json = serde_json::to_value(fallback_document("boom")).unwrap();

        assert_eq!(json["error"], "boom");
        assert_eq!(json["list"].as_array().unwrap().len(), 1);
        assert_eq!(
            json["list"][0]["weather"][0]["description"],
            UNAVAILABLE_DESCRIPTION
        );
    }
}
