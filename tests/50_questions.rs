mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use student_toolkit_api::store::{Collection, Document, DocumentStore};

#[tokio::test]
async fn list_starts_empty() -> Result<()> {
    let harness = common::test_app();

    let response = harness.app.oneshot(common::get("/allquestions")).await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(common::body_json(response).await, json!([]));

    Ok(())
}

#[tokio::test]
async fn list_returns_externally_seeded_questions() -> Result<()> {
    let harness = common::test_app();

    // The question bank is seeded outside this API; emulate that by writing
    // to the collection directly
    let doc = Document::from_value(json!({
        "question": "What is the derivative of x^2?",
        "options": ["x", "2x", "x^2"],
        "answer": "2x"
    }))?;
    harness
        .store
        .insert_document(Collection::Questions, doc)
        .await?;

    let response = harness.app.oneshot(common::get("/allquestions")).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let listed = common::body_json(response).await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["answer"], "2x");

    Ok(())
}

#[tokio::test]
async fn question_bank_has_no_write_surface() -> Result<()> {
    let harness = common::test_app();

    let response = harness
        .app
        .oneshot(common::post_json("/allquestions", &json!({ "question": "?" })))
        .await?;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    Ok(())
}
