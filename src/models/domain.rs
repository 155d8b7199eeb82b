use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

/// Geographic point in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_point"))]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Acceptable hourly-rate range, in the same currency unit as candidate rates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_budget"))]
pub struct BudgetRange {
    pub min: f64,
    pub max: f64,
}

impl BudgetRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, rate: f64) -> bool {
        rate >= self.min && rate <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Any,
    Beginner,
    Intermediate,
    Expert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerificationLevel {
    Basic,
    Enhanced,
    BackgroundCheck,
}

/// Weekly availability windows of a professional
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    #[serde(default)]
    pub morning: bool,
    #[serde(default)]
    pub afternoon: bool,
    #[serde(default)]
    pub evening: bool,
}

impl Availability {
    #[inline]
    pub fn covers(&self, slot: TimeSlot) -> bool {
        match slot {
            TimeSlot::Morning => self.morning,
            TimeSlot::Afternoon => self.afternoon,
            TimeSlot::Evening => self.evening,
        }
    }
}

/// Requester's match preferences
///
/// Every field is optional. An absent field means the corresponding
/// criterion does not apply and contributes no points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct Criteria {
    #[serde(rename = "serviceType", default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    #[validate(nested)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
    #[validate(nested)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<BudgetRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    #[serde(rename = "preferredTimes", default, skip_serializing_if = "Option::is_none")]
    pub preferred_times: Option<Vec<TimeSlot>>,
    #[serde(rename = "experienceLevel", default, skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<ExperienceLevel>,
    #[serde(rename = "verificationRequired", default, skip_serializing_if = "Option::is_none")]
    pub verification_required: Option<bool>,
}

/// Service professional being evaluated for a request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_candidate"))]
pub struct Candidate {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(default)]
    pub services: Vec<String>,
    #[validate(nested)]
    pub location: GeoPoint,
    #[serde(rename = "hourlyRate")]
    pub hourly_rate: f64,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(rename = "reviewCount", default)]
    pub review_count: u32,
    #[serde(rename = "experienceYears", default)]
    pub experience_years: f64,
    #[serde(rename = "verificationLevel")]
    pub verification_level: VerificationLevel,
    #[serde(default)]
    pub availability: Availability,
    #[serde(rename = "responseTimeMinutes", default)]
    pub response_time_minutes: f64,
    #[serde(rename = "onTimeRate", default)]
    pub on_time_rate: f64,
}

impl Candidate {
    /// Primary service offered, if any
    pub fn primary_service(&self) -> Option<&str> {
        self.services.first().map(String::as_str)
    }

    pub fn offers(&self, service: &str) -> bool {
        self.services.iter().any(|s| s == service)
    }

    pub fn speaks(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l == language)
    }
}

/// Scored, reason-annotated candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedProfessional {
    #[serde(flatten)]
    pub professional: Candidate,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
    #[serde(rename = "matchReasons")]
    pub match_reasons: Vec<String>,
    /// Kilometers from the requester, present only when the criteria carry a location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl MatchedProfessional {
    pub fn id(&self) -> &str {
        &self.professional.id
    }
}

fn invalid(code: &'static str, message: String) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::from(message));
    err
}

fn validate_point(point: &GeoPoint) -> Result<(), ValidationError> {
    if !point.lat.is_finite() || !(-90.0..=90.0).contains(&point.lat) {
        return Err(invalid("latitude", format!("latitude {} out of range", point.lat)));
    }
    if !point.lng.is_finite() || !(-180.0..=180.0).contains(&point.lng) {
        return Err(invalid("longitude", format!("longitude {} out of range", point.lng)));
    }
    Ok(())
}

fn validate_budget(budget: &BudgetRange) -> Result<(), ValidationError> {
    if !budget.min.is_finite() || !budget.max.is_finite() || budget.min < 0.0 {
        return Err(invalid(
            "budget",
            format!("budget [{}, {}] must be finite and non-negative", budget.min, budget.max),
        ));
    }
    if budget.min > budget.max {
        return Err(invalid(
            "budget",
            format!("budget min {} exceeds max {}", budget.min, budget.max),
        ));
    }
    Ok(())
}

fn validate_candidate(candidate: &Candidate) -> Result<(), ValidationError> {
    if !candidate.hourly_rate.is_finite() || candidate.hourly_rate < 0.0 {
        return Err(invalid(
            "hourly_rate",
            format!("candidate {} has invalid hourly rate {}", candidate.id, candidate.hourly_rate),
        ));
    }
    if !(0.0..=5.0).contains(&candidate.rating) {
        return Err(invalid(
            "rating",
            format!("candidate {} has rating {} outside 0-5", candidate.id, candidate.rating),
        ));
    }
    if !(0.0..=100.0).contains(&candidate.on_time_rate) {
        return Err(invalid(
            "on_time_rate",
            format!(
                "candidate {} has on-time rate {} outside 0-100",
                candidate.id, candidate.on_time_rate
            ),
        ));
    }
    if !candidate.experience_years.is_finite() || candidate.experience_years < 0.0 {
        return Err(invalid(
            "experience_years",
            format!(
                "candidate {} has invalid experience {}",
                candidate.id, candidate.experience_years
            ),
        ));
    }
    if !candidate.response_time_minutes.is_finite() || candidate.response_time_minutes < 0.0 {
        return Err(invalid(
            "response_time_minutes",
            format!(
                "candidate {} has invalid response time {}",
                candidate.id, candidate.response_time_minutes
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_validation() {
        assert!(GeoPoint::new(40.7128, -74.0060).validate().is_ok());
        assert!(GeoPoint::new(91.0, 0.0).validate().is_err());
        assert!(GeoPoint::new(0.0, -180.5).validate().is_err());
        assert!(GeoPoint::new(f64::NAN, 0.0).validate().is_err());
    }

    #[test]
    fn test_budget_validation() {
        assert!(BudgetRange::new(15000.0, 25000.0).validate().is_ok());
        assert!(BudgetRange::new(25000.0, 15000.0).validate().is_err());
        assert!(BudgetRange::new(-1.0, 10.0).validate().is_err());
    }

    #[test]
    fn test_criteria_deserializes_camel_case() {
        let json = r#"{
            "serviceType": "cleaning",
            "location": {"lat": 35.68, "lng": 139.76},
            "preferredTimes": ["morning", "evening"],
            "experienceLevel": "expert",
            "verificationRequired": true
        }"#;

        let criteria: Criteria = serde_json::from_str(json).unwrap();

        assert_eq!(criteria.service_type.as_deref(), Some("cleaning"));
        assert_eq!(criteria.preferred_times, Some(vec![TimeSlot::Morning, TimeSlot::Evening]));
        assert_eq!(criteria.experience_level, Some(ExperienceLevel::Expert));
        assert_eq!(criteria.verification_required, Some(true));
        assert!(criteria.budget.is_none());
    }

    #[test]
    fn test_candidate_accepts_fractional_experience() {
        let json = r#"{
            "id": "pro-7",
            "services": ["cleaning"],
            "location": {"lat": 35.68, "lng": 139.76},
            "hourlyRate": 18000,
            "experienceYears": 2.5,
            "verificationLevel": "basic",
            "responseTimeMinutes": 30.5
        }"#;

        let candidate: Candidate = serde_json::from_str(json).unwrap();

        assert_eq!(candidate.experience_years, 2.5);
        assert_eq!(candidate.response_time_minutes, 30.5);
        assert!(candidate.validate().is_ok());
    }

    #[test]
    fn test_candidate_rejects_negative_or_nan_durations() {
        let json = r#"{
            "id": "pro-8",
            "location": {"lat": 0.0, "lng": 0.0},
            "hourlyRate": 0,
            "verificationLevel": "enhanced"
        }"#;
        let candidate: Candidate = serde_json::from_str(json).unwrap();
        assert!(candidate.validate().is_ok());

        let mut negative = candidate.clone();
        negative.experience_years = -1.0;
        assert!(negative.validate().is_err());

        let mut nan = candidate;
        nan.response_time_minutes = f64::NAN;
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_verification_level_wire_names() {
        let level: VerificationLevel = serde_json::from_str(r#""background-check""#).unwrap();
        assert_eq!(level, VerificationLevel::BackgroundCheck);
    }

    #[test]
    fn test_availability_covers() {
        let availability = Availability { morning: true, afternoon: false, evening: true };
        assert!(availability.covers(TimeSlot::Morning));
        assert!(!availability.covers(TimeSlot::Afternoon));
    }
}
