use std::fmt::Display;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::entities::Language;
use crate::error::{invalid_input_error, Error};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    pub interests: String,
    pub location: String,
    #[serde(deserialize_with = "number_or_string")]
    pub days: u32,
    /// Whole rupees; fractional amounts are rounded.
    #[serde(deserialize_with = "whole_rupees")]
    pub budget: u64,
    #[serde(default)]
    pub language: Language,
}

impl TripRequest {
    pub fn validated(self) -> Result<Self, Error> {
        let interests = self.interests.trim().to_string();
        let location = self.location.trim().to_string();

        if interests.is_empty() || location.is_empty() || self.days == 0 {
            return Err(invalid_input_error());
        }

        Ok(Self {
            interests,
            location,
            ..self
        })
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Itinerary {
    pub token: Uuid,
    pub content: String,
    pub language: Language,
    pub generated_at: DateTime<Utc>,
}

impl Itinerary {
    pub fn new(content: String, language: Language) -> Self {
        Self {
            token: Uuid::new_v4(),
            content,
            language,
            generated_at: Utc::now(),
        }
    }
}

// form inputs arrive as strings even when the field is numeric
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString<T> {
    Number(T),
    String(String),
}

fn number_or_string<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    match NumberOrString::<T>::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

fn whole_rupees<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let amount: f64 = number_or_string(deserializer)?;

    if !amount.is_finite() || amount < 0.0 || amount > u64::MAX as f64 {
        return Err(serde::de::Error::custom(format!(
            "budget must be a non-negative amount, got {}",
            amount
        )));
    }

    Ok(amount.round() as u64)
}

#[test]
fn numeric_fields_accept_strings() {
    let request: TripRequest = serde_json::from_str(
        r#"{"interests": "temples", "location": "Madurai", "days": "3", "budget": 15000, "language": "ta"}"#,
    )
    .unwrap();

    assert_eq!(request.days, 3);
    assert_eq!(request.budget, 15000);
    assert_eq!(request.language, Language::Ta);

    let bad = serde_json::from_str::<TripRequest>(
        r#"{"interests": "temples", "location": "Madurai", "days": "three", "budget": 1}"#,
    );
    assert!(bad.is_err());
}

#[test]
fn fractional_budgets_round_to_whole_rupees() {
    let parse = |budget: &str| {
        serde_json::from_str::<TripRequest>(&format!(
            r#"{{"interests": "beaches", "location": "Kochi", "days": 2, "budget": {}}}"#,
            budget
        ))
    };

    assert_eq!(parse(r#""1500.50""#).unwrap().budget, 1501);
    assert_eq!(parse("1500.49").unwrap().budget, 1500);
    assert_eq!(parse("2000").unwrap().budget, 2000);
    assert!(parse("-10").is_err());
    assert!(parse(r#""lots""#).is_err());
}

#[test]
fn validation_trims_and_rejects_blanks() {
    let request = TripRequest {
        interests: "  beaches ".into(),
        location: " Kanyakumari".into(),
        days: 2,
        budget: 8000,
        language: Language::En,
    };

    let valid = request.clone().validated().unwrap();
    assert_eq!(valid.interests, "beaches");
    assert_eq!(valid.location, "Kanyakumari");

    let no_days = TripRequest { days: 0, ..request.clone() };
    assert_eq!(no_days.validated().unwrap_err().code, 101);

    let blank = TripRequest {
        location: "   ".into(),
        ..request
    };
    assert_eq!(blank.validated().unwrap_err().code, 101);
}
