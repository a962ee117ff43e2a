mod common;

use std::sync::Arc;

use common::InMemoryLeadRepository;
use viver_bem_server::{
    errors::AppError,
    models::domain::{ConsentState, Lead},
    repositories::LeadRepository,
    services::{DashboardService, LeadService},
};

fn lead(email: &str, age: i16, lgpd: &str, cookies: &str) -> Lead {
    Lead::new(
        "Maria",
        email,
        "(21) 98765-4321",
        age,
        ConsentState::from_form_fields(lgpd, cookies),
    )
}

#[tokio::test]
async fn insert_then_find_by_email() {
    let repository = InMemoryLeadRepository::new();

    let inserted = repository
        .insert(lead("maria@example.com", 67, "true", "true"))
        .await
        .expect("insert succeeds");

    let found = repository
        .find_by_email("maria@example.com")
        .await
        .expect("lookup succeeds")
        .expect("lead exists");
    assert_eq!(found, inserted);

    let missing = repository
        .find_by_email("nobody@example.com")
        .await
        .expect("lookup succeeds");
    assert!(missing.is_none());
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let repository = InMemoryLeadRepository::new();

    repository
        .insert(lead("maria@example.com", 67, "true", "true"))
        .await
        .expect("first insert succeeds");

    let err = repository
        .insert(lead("maria@example.com", 70, "true", "null"))
        .await
        .expect_err("second insert with same email fails");
    assert!(matches!(err, AppError::AlreadyExists(_)));

    assert_eq!(repository.count_all().await.expect("count succeeds"), 1);
}

#[tokio::test]
async fn counts_respect_lgpd_and_cookie_choices() {
    let repository = InMemoryLeadRepository::new();

    repository
        .insert(lead("a@example.com", 61, "true", "true"))
        .await
        .expect("insert succeeds");
    repository
        .insert(lead("b@example.com", 62, "true", "false"))
        .await
        .expect("insert succeeds");
    repository
        .insert(lead("c@example.com", 63, "true", "null"))
        .await
        .expect("insert succeeds");

    assert_eq!(repository.count_all().await.expect("count"), 3);
    assert_eq!(
        repository.count_lgpd_consented().await.expect("count"),
        3
    );
    assert_eq!(
        repository
            .count_cookie_choice(Some(true))
            .await
            .expect("count"),
        1
    );
    assert_eq!(
        repository
            .count_cookie_choice(Some(false))
            .await
            .expect("count"),
        1
    );
    assert_eq!(
        repository.count_cookie_choice(None).await.expect("count"),
        1
    );
}

#[tokio::test]
async fn age_bracket_bounds_are_inclusive() {
    let repository = InMemoryLeadRepository::new();

    for (email, age) in [
        ("a@example.com", 60),
        ("b@example.com", 70),
        ("c@example.com", 71),
        ("d@example.com", 101),
    ] {
        repository
            .insert(lead(email, age, "true", "null"))
            .await
            .expect("insert succeeds");
    }

    assert_eq!(
        repository.count_age_between(60, 70).await.expect("count"),
        2
    );
    assert_eq!(
        repository.count_age_between(71, 80).await.expect("count"),
        1
    );
    assert_eq!(
        repository.count_age_between(101, 120).await.expect("count"),
        1
    );
    assert_eq!(
        repository.count_age_between(81, 100).await.expect("count"),
        0
    );
}

#[tokio::test]
async fn registered_day_counts_match_the_denormalized_field() {
    let repository = InMemoryLeadRepository::new();

    let mut yesterday = lead("a@example.com", 65, "true", "null");
    yesterday.registered_day = "2020-01-01".to_string();
    repository.insert(yesterday).await.expect("insert succeeds");

    let today = lead("b@example.com", 66, "true", "null");
    let today_day = today.registered_day.clone();
    repository.insert(today).await.expect("insert succeeds");

    assert_eq!(
        repository
            .count_registered_on("2020-01-01")
            .await
            .expect("count"),
        1
    );
    assert_eq!(
        repository
            .count_registered_on(&today_day)
            .await
            .expect("count"),
        1
    );
    assert_eq!(
        repository
            .count_registered_on("1999-12-31")
            .await
            .expect("count"),
        0
    );
}

#[tokio::test]
async fn find_recent_returns_newest_first_and_honors_limit() {
    let repository = InMemoryLeadRepository::new();

    for index in 0..4 {
        repository
            .insert(lead(&format!("lead{index}@example.com"), 65, "true", "null"))
            .await
            .expect("insert succeeds");
    }

    let recent = repository.find_recent(3).await.expect("query succeeds");

    assert_eq!(recent.len(), 3);
    for pair in recent.windows(2) {
        assert!(pair[0].registered_at >= pair[1].registered_at);
    }
}

#[tokio::test]
async fn lead_service_round_trip_against_the_contract() {
    let repository = Arc::new(InMemoryLeadRepository::new());
    let service = LeadService::new(repository.clone());

    let form = viver_bem_server::models::dto::LeadForm {
        first_name: "José".to_string(),
        email: "jose@example.com".to_string(),
        phone: "11912345678".to_string(),
        idade: 72,
        lgpd_consent: "true".to_string(),
        cookies_accepted: "false".to_string(),
    };

    let lead = service
        .register_lead(form.clone())
        .await
        .expect("first submission is accepted");
    assert_eq!(lead.phone, "(11) 91234-5678");
    assert_eq!(lead.cookies_accepted, Some(false));

    let err = service
        .register_lead(form)
        .await
        .expect_err("second submission with same email is rejected");
    assert!(matches!(err, AppError::AlreadyExists(_)));
}

#[tokio::test]
async fn dashboard_service_aggregates_a_seeded_base() {
    let repository = Arc::new(InMemoryLeadRepository::new());

    for (email, age, cookies) in [
        ("a@example.com", 65, "true"),
        ("b@example.com", 75, "true"),
        ("c@example.com", 85, "false"),
        ("d@example.com", 95, "null"),
    ] {
        repository
            .insert(lead(email, age, "true", cookies))
            .await
            .expect("insert succeeds");
    }

    let service = DashboardService::new(repository);
    let metrics = service.metrics().await.expect("metrics are computed");

    assert_eq!(metrics.total_cadastros, 4);
    assert_eq!(metrics.taxa_lgpd, 100.0);
    // 2 of 3 deciders accepted
    assert_eq!(metrics.taxa_cookies, 66.67);
    assert_eq!(metrics.cookies_info, "De 3 que escolheram, 2 aceitaram");

    let bracket_counts: Vec<u64> = metrics
        .faixa_etaria
        .iter()
        .map(|b| b.quantidade)
        .collect();
    assert_eq!(bracket_counts, vec![1, 1, 1, 1, 0]);

    // all four leads registered today
    assert_eq!(metrics.cadastros_7_dias.len(), 1);
    assert_eq!(metrics.cadastros_7_dias[0].cadastros, 4);

    assert_eq!(metrics.leads_recentes.len(), 4);
}
