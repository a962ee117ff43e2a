mod common;

use std::sync::Arc;

use actix_web::{test, web, App};
use common::InMemoryLeadRepository;
use viver_bem_server::{app_state::AppState, config::Config, handlers};

fn test_state() -> AppState {
    AppState::with_repository(Arc::new(InMemoryLeadRepository::new()), Config::from_env())
}

fn valid_form() -> Vec<(&'static str, &'static str)> {
    vec![
        ("firstName", "Maria"),
        ("email", "maria@example.com"),
        ("phone", "21987654321"),
        ("idade", "67"),
        ("lgpd_consent", "true"),
        ("cookies_accepted", "true"),
    ]
}

#[actix_web::test]
async fn lead_submission_flow_end_to_end() {
    let state = test_state();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .service(handlers::register_lead)
            .service(handlers::dashboard_metrics),
    )
    .await;

    // first submission is accepted
    let req = test::TestRequest::post()
        .uri("/api/leads")
        .set_form(valid_form())
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert!(body["lead_id"].is_string());

    // same email again keeps HTTP 200 but reports the duplicate
    let req = test::TestRequest::post()
        .uri("/api/leads")
        .set_form(valid_form())
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "Este email já está cadastrado em nossa plataforma"
    );

    // the accepted lead shows up in the dashboard aggregates
    let req = test::TestRequest::get().uri("/api/dashboard").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["metrics"]["total_cadastros"], 1);
    assert_eq!(body["metrics"]["taxa_lgpd"], 100.0);
    assert_eq!(body["metrics"]["leads_recentes"][0]["email"], "maria@example.com");
    assert_eq!(
        body["metrics"]["leads_recentes"][0]["telefone"],
        "(21) 98765-4321"
    );
}

#[actix_web::test]
async fn submission_without_lgpd_consent_is_rejected() {
    let state = test_state();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .service(handlers::register_lead),
    )
    .await;

    let mut form = valid_form();
    form[4] = ("lgpd_consent", "false");

    let req = test::TestRequest::post()
        .uri("/api/leads")
        .set_form(form)
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "É necessário aceitar os termos da LGPD");
}

#[actix_web::test]
async fn submission_with_invalid_age_is_rejected() {
    let state = test_state();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .service(handlers::register_lead),
    )
    .await;

    let mut form = valid_form();
    form[3] = ("idade", "45");

    let req = test::TestRequest::post()
        .uri("/api/leads")
        .set_form(form)
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["success"], false);
    assert!(body["message"]
        .as_str()
        .expect("message is a string")
        .contains("Idade deve estar entre 60 e 120 anos"));
}
