use std::net::SocketAddr;

use axum::Router;
use migration::MigratorTrait;
use serde_json::{json, Value};
use server::routes;
use server::state::AppState;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    // Prefer env config over any config file
    std::env::set_var("CONFIG_PATH", "/nonexistent-config-for-tests.toml");

    // Use DATABASE_URL from environment; if not present, skip tests gracefully
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL missing; skip e2e tests. Provide .env.test or env var.");
        return Err(anyhow::anyhow!("missing DATABASE_URL"));
    }

    let db = models::db::connect().await?;
    if let Err(e) = migration::Migrator::up(&db, None).await {
        eprintln!("migrations notice: {}", e);
    }

    let state = AppState::new(db);
    let app: Router = routes::build_router(CorsLayer::very_permissive(), state);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

fn unique_tag() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock")
        .as_nanos()
}

async fn assert_envelope(res: reqwest::Response, status: u16, message: &str) {
    assert_eq!(res.status().as_u16(), status);
    let body: Value = res.json().await.expect("json envelope");
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!(status));
    assert_eq!(body["message"], json!(message));
}

#[tokio::test]
async fn e2e_categories_listing() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };

    let res = client().get(format!("{}/categories", app.base_url)).send().await?;
    assert_eq!(res.status().as_u16(), 200);
    let body: Value = res.json().await?;
    assert_eq!(body["success"], json!(true));
    // Seed migration guarantees the six defaults
    assert!(body["all_categories"].as_u64().unwrap() >= 6);
    assert_eq!(body["categories"]["1"], json!("Science"));
    Ok(())
}

#[tokio::test]
async fn e2e_question_lifecycle_create_search_delete() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let c = client();
    let tag = unique_tag();
    let text = format!("Which movie title contains tag {}?", tag);

    // Create
    let res = c
        .post(format!("{}/questions", app.base_url))
        .json(&json!({
            "question": text,
            "answer": "this one",
            "category": "1",
            "difficulty": 2
        }))
        .send()
        .await?;
    assert_eq!(res.status().as_u16(), 200);
    let body: Value = res.json().await?;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["question"], json!(text.clone()));
    assert_eq!(body["answer"], json!("this one"));
    let total = body["total_number_of_questions"].as_u64().unwrap();
    assert!(total >= 1);

    // Listing now has at least one page
    let res = c.get(format!("{}/questions?page=1", app.base_url)).send().await?;
    assert_eq!(res.status().as_u16(), 200);
    let body: Value = res.json().await?;
    assert_eq!(body["success"], json!(true));
    assert!(body["questions"].as_array().unwrap().len() <= 10);
    assert!(body["current_category"].is_null());
    assert!(body["categories"].is_object());

    // A page far past the end is a 404
    let res = c.get(format!("{}/questions?page=99999999", app.base_url)).send().await?;
    assert_envelope(res, 404, "resource not found").await;

    // Search is case-insensitive and matches our new question
    let res = c
        .post(format!("{}/questions", app.base_url))
        .json(&json!({"searchTerm": format!("TAG {}", tag)}))
        .send()
        .await?;
    assert_eq!(res.status().as_u16(), 200);
    let body: Value = res.json().await?;
    assert_eq!(body["total_search_questions"], json!(1));
    assert_eq!(body["current_category"], json!("All"));
    let found = &body["questions"][0];
    assert_eq!(found["question"], json!(text.clone()));
    let id = found["id"].as_i64().unwrap();

    // A search with zero hits is 422, not an empty list
    let res = c
        .post(format!("{}/questions", app.base_url))
        .json(&json!({"searchTerm": format!("no-such-term-{}", tag)}))
        .send()
        .await?;
    assert_envelope(res, 422, "un-processable").await;

    // Delete, then delete again: the second one is 422 by contract
    let res = c.delete(format!("{}/questions/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status().as_u16(), 200);
    let body: Value = res.json().await?;
    assert_eq!(body["deleted"], json!(id));

    let res = c.delete(format!("{}/questions/{}", app.base_url, id)).send().await?;
    assert_envelope(res, 422, "un-processable").await;
    Ok(())
}

#[tokio::test]
async fn e2e_create_validation_failures() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let c = client();

    for bad in [
        json!({"question": "", "answer": "a", "category": 1, "difficulty": 1}),
        json!({"question": "q", "answer": "", "category": 1, "difficulty": 1}),
        json!({"question": "q", "answer": "a", "category": 0, "difficulty": 1}),
        json!({"question": "q", "answer": "a", "category": 1, "difficulty": 9}),
        json!({"question": "q", "answer": "a", "category": "abc", "difficulty": 1}),
        json!({"answer": "a", "category": 1, "difficulty": 1}),
    ] {
        let res = c.post(format!("{}/questions", app.base_url)).json(&bad).send().await?;
        assert_envelope(res, 422, "un-processable").await;
    }
    Ok(())
}

#[tokio::test]
async fn e2e_category_scoped_listing() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let c = client();

    let res = c.get(format!("{}/categories/99999999/questions", app.base_url)).send().await?;
    assert_envelope(res, 404, "resource not found").await;

    // Category 1 exists via the seed; empty is still a success
    let res = c.get(format!("{}/categories/1/questions", app.base_url)).send().await?;
    assert_eq!(res.status().as_u16(), 200);
    let body: Value = res.json().await?;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["current_category"], json!(1));
    assert!(body["questions"].as_array().unwrap().len() <= 10);
    Ok(())
}

#[tokio::test]
async fn e2e_quiz_round() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let c = client();
    let tag = unique_tag();

    // Guarantee at least one question in category 2
    let res = c
        .post(format!("{}/questions", app.base_url))
        .json(&json!({
            "question": format!("Quiz fodder {}", tag),
            "answer": "yes",
            "category": 2,
            "difficulty": 1
        }))
        .send()
        .await?;
    assert_eq!(res.status().as_u16(), 200);

    let res = c
        .post(format!("{}/quizzes", app.base_url))
        .json(&json!({"quiz_category": {"id": 2, "type": "Art"}, "previous_questions": []}))
        .send()
        .await?;
    assert_eq!(res.status().as_u16(), 200);
    let body: Value = res.json().await?;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["forceEnd"], json!(false));
    let q = &body["question"];
    assert_eq!(q["category"], json!(2));
    let first_id = q["id"].as_i64().unwrap();

    // "All categories" works too, and accepts a string id
    let res = c
        .post(format!("{}/quizzes", app.base_url))
        .json(&json!({"quiz_category": {"id": "0"}, "previous_questions": []}))
        .send()
        .await?;
    assert_eq!(res.status().as_u16(), 200);

    // A category id beyond the category count is a 404
    let res = c
        .post(format!("{}/quizzes", app.base_url))
        .json(&json!({"quiz_category": {"id": 99999999}, "previous_questions": []}))
        .send()
        .await?;
    assert_envelope(res, 404, "resource not found").await;

    // The previous-questions filter is honored
    let res = c
        .post(format!("{}/quizzes", app.base_url))
        .json(&json!({"quiz_category": {"id": 2}, "previous_questions": [first_id]}))
        .send()
        .await?;
    let body: Value = res.json().await?;
    if body["forceEnd"] == json!(false) {
        assert_ne!(body["question"]["id"].as_i64().unwrap(), first_id);
    } else {
        assert!(body["question"].is_null());
    }

    // Cleanup the fodder question
    let res = c
        .post(format!("{}/questions", app.base_url))
        .json(&json!({"searchTerm": format!("Quiz fodder {}", tag)}))
        .send()
        .await?;
    let body: Value = res.json().await?;
    let id = body["questions"][0]["id"].as_i64().unwrap();
    c.delete(format!("{}/questions/{}", app.base_url, id)).send().await?;
    Ok(())
}

#[tokio::test]
async fn e2e_router_level_error_envelopes() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let c = client();

    // Unknown route
    let res = c.get(format!("{}/no-such-route", app.base_url)).send().await?;
    assert_envelope(res, 404, "resource not found").await;

    // Wrong verb on a known route
    let res = c.put(format!("{}/questions", app.base_url)).json(&json!({})).send().await?;
    assert_envelope(res, 405, "method not allowed").await;
    Ok(())
}
