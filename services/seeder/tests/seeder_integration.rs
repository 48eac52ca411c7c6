//! Integration tests for the seeding workflow
//!
//! A wiremock server stands in for the catalog API; mock expectations are
//! verified when each server is dropped.

use anyhow::Result;
use common::{ApiConfig, CatalogClient};
use seeder::{Bootstrap, SeedError, Seeder, SeederConfig};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn seeder_for(server: &MockServer, config: SeederConfig) -> Seeder {
    let api = ApiConfig::default()
        .with_overrides(Some(format!("{}/api", server.uri())), Some(5))
        .expect("Failed to build config");
    let client = CatalogClient::new(&api).expect("Failed to build client");
    Seeder::new(client, config)
}

fn small_config() -> SeederConfig {
    SeederConfig {
        target_products: 20,
        max_attempts: 60,
        progress_every: 10,
        seed: Some(7),
        ..SeederConfig::default()
    }
}

async fn mount_users(server: &MockServer, existing: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(existing))
        .mount(server)
        .await;
}

async fn mount_categories(server: &MockServer, existing: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(existing))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_creates_only_missing_users() -> Result<()> {
    let server = MockServer::start().await;
    mount_users(
        &server,
        json!({"content": [{"id": 1, "name": "Ana"}, {"id": 2, "name": "Luis"}]}),
    )
    .await;

    Mock::given(method("POST"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 99})))
        .expect(3)
        .mount(&server)
        .await;

    let mut seeder = seeder_for(&server, small_config());
    let users = seeder.ensure_users().await?;

    assert_eq!(users.counts, Bootstrap { existing: 2, created: 3 });
    assert_eq!(users.ids, vec![1, 2, 99, 99, 99]);
    Ok(())
}

#[tokio::test]
async fn test_no_user_created_when_minimum_met() -> Result<()> {
    let server = MockServer::start().await;
    mount_users(
        &server,
        json!([{"id": 1}, {"id": 2}, {"id": 3}, {"id": 4}, {"id": 5}, {"id": 6}]),
    )
    .await;

    Mock::given(method("POST"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 99})))
        .expect(0)
        .mount(&server)
        .await;

    let mut seeder = seeder_for(&server, small_config());
    let users = seeder.ensure_users().await?;
    assert_eq!(users.counts, Bootstrap { existing: 6, created: 0 });
    Ok(())
}

#[tokio::test]
async fn test_user_bootstrap_is_bounded() -> Result<()> {
    let server = MockServer::start().await;
    mount_users(&server, json!([])).await;

    Mock::given(method("POST"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(500))
        .expect(4)
        .mount(&server)
        .await;

    let config = SeederConfig {
        max_bootstrap_attempts: 4,
        ..small_config()
    };
    let mut seeder = seeder_for(&server, config);

    match seeder.ensure_users().await {
        Err(SeedError::Bootstrap {
            wanted,
            have,
            failures,
        }) => {
            assert_eq!((wanted, have, failures), (5, 0, 4));
        }
        other => panic!("expected bootstrap error, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_bootstrap_ceiling_ignores_successful_creations() -> Result<()> {
    let server = MockServer::start().await;
    mount_users(&server, json!([])).await;

    Mock::given(method("POST"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 1})))
        .expect(25)
        .mount(&server)
        .await;

    let config = SeederConfig {
        min_users: 25,
        ..small_config()
    };
    assert!(config.min_users > config.max_bootstrap_attempts);
    config.validate()?;
    let mut seeder = seeder_for(&server, config);

    let users = seeder.ensure_users().await?;
    assert_eq!(users.counts, Bootstrap { existing: 0, created: 25 });
    assert_eq!(users.ids.len(), 25);
    Ok(())
}

#[tokio::test]
async fn test_user_with_unreadable_response_is_not_recreated() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1}, {"id": 2}, {"id": 3}, {"id": 4}
        ])))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;
    mount_users(
        &server,
        json!([{"id": 1}, {"id": 2}, {"id": 3}, {"id": 4}, {"id": 5}]),
    )
    .await;

    Mock::given(method("POST"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(201).set_body_string("created"))
        .expect(1)
        .mount(&server)
        .await;

    let mut seeder = seeder_for(&server, small_config());
    let users = seeder.ensure_users().await?;

    assert_eq!(users.counts, Bootstrap { existing: 4, created: 1 });
    assert_eq!(users.ids, vec![1, 2, 3, 4, 5]);
    Ok(())
}

#[tokio::test]
async fn test_category_with_unreadable_response_is_resolved_by_listing() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;
    mount_categories(&server, json!([{"id": 3, "name": "Hogar"}])).await;

    Mock::given(method("POST"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let config = SeederConfig {
        categories: vec!["Hogar".to_string()],
        ..small_config()
    };
    let mut seeder = seeder_for(&server, config);
    let categories = seeder.ensure_categories().await?;

    assert_eq!(categories.counts, Bootstrap { existing: 0, created: 1 });
    assert_eq!(categories.counts.total(), 1);
    assert_eq!(categories.ids, vec![3]);
    Ok(())
}

#[tokio::test]
async fn test_existing_categories_are_not_recreated() -> Result<()> {
    let server = MockServer::start().await;
    mount_categories(
        &server,
        json!([
            {"id": 1, "name": "Hogar", "description": "Carga masiva"},
            {"id": 2, "name": "Ropa"}
        ]),
    )
    .await;

    for (id, name) in [(10, "Electrónica"), (11, "Deportes"), (12, "Salud")] {
        Mock::given(method("POST"))
            .and(path("/api/categories"))
            .and(body_partial_json(json!({"name": name, "description": "Carga masiva"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": id, "name": name})))
            .expect(1)
            .mount(&server)
            .await;
    }
    for name in ["Hogar", "Ropa"] {
        Mock::given(method("POST"))
            .and(path("/api/categories"))
            .and(body_partial_json(json!({"name": name})))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;
    }

    let mut seeder = seeder_for(&server, small_config());
    let categories = seeder.ensure_categories().await?;

    assert_eq!(categories.counts, Bootstrap { existing: 2, created: 3 });
    assert_eq!(categories.ids, vec![1, 2, 10, 11, 12]);
    Ok(())
}

#[tokio::test]
async fn test_duplicate_configured_names_create_once() -> Result<()> {
    let server = MockServer::start().await;
    mount_categories(&server, json!([])).await;

    Mock::given(method("POST"))
        .and(path("/api/categories"))
        .and(body_partial_json(json!({"name": "Hogar"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 4, "name": "Hogar"})))
        .expect(1)
        .mount(&server)
        .await;

    let config = SeederConfig {
        categories: vec!["Hogar".to_string(), "Hogar".to_string(), " Hogar ".to_string()],
        ..small_config()
    };
    let mut seeder = seeder_for(&server, config);
    let categories = seeder.ensure_categories().await?;
    assert_eq!(categories.ids, vec![4]);
    Ok(())
}

#[tokio::test]
async fn test_product_loop_stops_at_target() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 1})))
        .expect(20)
        .mount(&server)
        .await;

    let mut seeder = seeder_for(&server, small_config());
    let outcome = seeder.seed_products(&[1, 2], &[10, 11, 12]).await?;

    assert_eq!(outcome.created, 20);
    assert_eq!(outcome.attempts, 20);
    assert_eq!(outcome.failures(), 0);
    assert!(!outcome.exhausted);
    Ok(())
}

#[tokio::test]
async fn test_product_loop_stops_at_attempt_ceiling() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(400).set_body_string("invalid"))
        .expect(60)
        .mount(&server)
        .await;

    let mut seeder = seeder_for(&server, small_config());
    let outcome = seeder.seed_products(&[1], &[10, 11]).await?;

    assert_eq!(outcome.created, 0);
    assert_eq!(outcome.attempts, 60);
    assert_eq!(outcome.rejected.get(&400), Some(&60));
    assert!(outcome.exhausted);
    Ok(())
}

#[tokio::test]
async fn test_product_loop_requires_ids() -> Result<()> {
    let server = MockServer::start().await;
    let mut seeder = seeder_for(&server, small_config());

    assert!(matches!(
        seeder.seed_products(&[], &[1, 2]).await,
        Err(SeedError::NoUsers)
    ));
    assert!(matches!(
        seeder.seed_products(&[1], &[]).await,
        Err(SeedError::NoCategories)
    ));
    Ok(())
}

#[tokio::test]
async fn test_full_run_against_empty_server() -> Result<()> {
    let server = MockServer::start().await;
    mount_users(&server, json!({"content": []})).await;
    mount_categories(&server, json!([])).await;

    Mock::given(method("POST"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 3})))
        .expect(5)
        .mount(&server)
        .await;

    for (id, name) in [
        (1, "Electrónica"),
        (2, "Hogar"),
        (3, "Ropa"),
        (4, "Deportes"),
        (5, "Salud"),
    ] {
        Mock::given(method("POST"))
            .and(path("/api/categories"))
            .and(body_partial_json(json!({"name": name})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": id, "name": name})))
            .expect(1)
            .mount(&server)
            .await;
    }

    Mock::given(method("POST"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(201))
        .expect(20)
        .mount(&server)
        .await;

    let mut seeder = seeder_for(&server, small_config());
    let report = seeder.run().await?;

    assert_eq!(report.users, Bootstrap { existing: 0, created: 5 });
    assert_eq!(report.categories, Bootstrap { existing: 0, created: 5 });
    assert_eq!(report.products.created, 20);
    assert!(report.finished_at >= report.started_at);
    assert!(report.base_url.ends_with("/api"));
    Ok(())
}

#[tokio::test]
async fn test_listing_failure_aborts_run() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let mut seeder = seeder_for(&server, small_config());
    assert!(matches!(seeder.run().await, Err(SeedError::Client(_))));
    Ok(())
}
