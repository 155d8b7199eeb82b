// Integration tests for the matching pipeline

use pro_match::core::{
    get_similar_professionals, match_professionals, score_candidate,
    scoring::{score_location, MatchContext},
};
use pro_match::models::{
    Availability, BudgetRange, Candidate, Criteria, GeoPoint, TimeSlot, VerificationLevel,
};

const ORIGIN: GeoPoint = GeoPoint { lat: 35.6812, lng: 139.7671 };

fn create_professional(id: &str, service: &str) -> Candidate {
    Candidate {
        id: id.to_string(),
        services: vec![service.to_string()],
        // ~3km north of the origin
        location: GeoPoint::new(ORIGIN.lat + 0.027, ORIGIN.lng),
        hourly_rate: 20000.0,
        languages: vec!["ja".to_string(), "en".to_string()],
        rating: 4.9,
        review_count: 30,
        experience_years: 2.0,
        verification_level: VerificationLevel::Basic,
        availability: Availability::default(),
        response_time_minutes: 120.0,
        on_time_rate: 90.0,
    }
}

fn create_criteria() -> Criteria {
    Criteria {
        service_type: Some("cleaning".to_string()),
        location: Some(ORIGIN),
        budget: Some(BudgetRange::new(15000.0, 25000.0)),
        languages: Some(vec!["ja".to_string(), "en".to_string()]),
        ..Default::default()
    }
}

#[test]
fn test_strong_match_scores_high() {
    let criteria = create_criteria();
    let p1 = create_professional("P1", "cleaning");

    let matches = match_professionals(&[p1], &criteria);

    assert_eq!(matches.len(), 1);
    let matched = &matches[0];
    assert!(matched.match_score >= 90.0, "Expected >= 90, got {}", matched.match_score);
    let expected = [
        "Exact service match",
        "Very close",
        "Within budget",
        "Speaks your languages",
        "Highly rated",
    ];
    for reason in expected {
        assert!(
            matched.match_reasons.iter().any(|r| r == reason),
            "Missing reason {:?} in {:?}",
            reason,
            matched.match_reasons
        );
    }

    let distance = matched.distance.unwrap();
    assert!((distance - 3.0).abs() < 0.1, "Expected ~3km, got {}", distance);
}

#[test]
fn test_service_mismatch_drops_thirty_points() {
    let criteria = create_criteria();
    let p1 = create_professional("P1", "cleaning");
    let p2 = create_professional("P2", "nanny");

    let p1_score = score_candidate(&p1, &criteria).match_score;
    let p2_score = score_candidate(&p2, &criteria).match_score;
    assert_eq!(p1_score - p2_score, 30.0);

    let matches = match_professionals(&[p2, p1], &criteria);
    let ids: Vec<&str> = matches.iter().map(|m| m.id()).collect();
    assert_eq!(ids, vec!["P1", "P2"]);
}

#[test]
fn test_far_over_budget_scores_nothing_for_budget() {
    let criteria = create_criteria();
    let p1 = create_professional("P1", "cleaning");
    let mut p3 = create_professional("P3", "cleaning");
    p3.hourly_rate = 50000.0;

    let p3_match = score_candidate(&p3, &criteria);

    assert_eq!(score_candidate(&p1, &criteria).match_score - p3_match.match_score, 15.0);
    assert!(!p3_match.match_reasons.iter().any(|r| r.contains("budget")));
}

#[test]
fn test_distance_tier_boundary() {
    let candidate = create_professional("P4", "cleaning");
    let criteria = create_criteria();

    let at_ten = score_location(&MatchContext {
        candidate: &candidate,
        criteria: &criteria,
        distance_km: Some(10.0),
    });
    let past_ten = score_location(&MatchContext {
        candidate: &candidate,
        criteria: &criteria,
        distance_km: Some(10.01),
    });

    assert_eq!(at_ten.points, 15.0);
    assert_eq!(past_ten.points, 10.0);
}

#[test]
fn test_equal_scores_keep_input_order() {
    let criteria = Criteria {
        service_type: Some("cleaning".to_string()),
        budget: Some(BudgetRange::new(15000.0, 25000.0)),
        languages: Some(vec!["en".to_string()]),
        preferred_times: Some(vec![TimeSlot::Morning]),
        ..Default::default()
    };

    let mut first = create_professional("first", "cleaning");
    first.languages = vec![];
    first.rating = 4.8;
    first.review_count = 20;
    first.experience_years = 0.0;
    let mut second = first.clone();
    second.id = "second".to_string();

    let mut top = first.clone();
    top.id = "top".to_string();
    top.languages = vec!["en".to_string()];
    top.experience_years = 5.0;
    top.availability.morning = true;
    top.on_time_rate = 96.0;

    let matches = match_professionals(&[first, top, second], &criteria);

    let ranked: Vec<(&str, f64)> = matches.iter().map(|m| (m.id(), m.match_score)).collect();
    assert_eq!(ranked, vec![("top", 80.0), ("first", 55.0), ("second", 55.0)]);
}

#[test]
fn test_similar_without_reference_services() {
    let mut reference = create_professional("ref", "cleaning");
    reference.services.clear();

    let pool = vec![
        create_professional("a", "cleaning"),
        reference.clone(),
        create_professional("b", "nanny"),
    ];

    let matches = get_similar_professionals(&reference, &pool, None);

    assert_eq!(matches.len(), 2);
    for m in &matches {
        assert_ne!(m.id(), "ref");
        assert!(m.match_score >= 40.0);
        assert!(!m.match_reasons.iter().any(|r| r == "Exact service match"));
    }
}

#[test]
fn test_low_relevance_pool_yields_nothing() {
    let criteria = create_criteria();
    let mut far = create_professional("far", "nanny");
    far.location = GeoPoint::new(-33.8688, 151.2093);
    far.languages = vec!["fr".to_string()];
    far.rating = 3.0;

    assert!(match_professionals(&[far], &criteria).is_empty());
    assert!(match_professionals(&[], &criteria).is_empty());
}

#[test]
fn test_repeated_calls_are_identical() {
    let criteria = create_criteria();
    let pool: Vec<Candidate> = (0..40)
        .map(|i| {
            let service = if i % 2 == 0 { "cleaning" } else { "nanny" };
            let mut p = create_professional(&format!("p{}", i), service);
            p.location.lat += i as f64 * 0.01;
            p.hourly_rate = 12000.0 + (i as f64 * 500.0);
            p
        })
        .collect();

    assert_eq!(match_professionals(&pool, &criteria), match_professionals(&pool, &criteria));
}
