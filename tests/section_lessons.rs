mod common;

use alblearn::lesson::{
    LessonStepType, create_empty_lesson_step, parse_lesson_content, serialize_lesson_steps,
};
use alblearn::model::SectionUpsert;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use common::{client_for, spawn_stub};

fn sections_payload() -> Value {
    json!({
        "success": true,
        "message": "",
        "data": [
            {
                "id": "s-legacy",
                "title": "Old lesson",
                "content": "Hello <b>world</b>",
                "created_at": "2023-06-01T00:00:00Z",
            },
            {
                "id": "s-envelope",
                "title": "Structured lesson",
                "content": r#"{"version":1,"steps":[{"id":"a","title":"Read","content":"<p>intro</p>","type":"instruction"},{"id":"b","title":"Try it","content":"do the thing","type":"practice"}]}"#,
                "created_at": "2024-02-01T00:00:00Z",
            },
            {
                "id": "s-dual",
                "title": "Dual representation",
                "content": "stale legacy text",
                "lesson_steps": [
                    { "id": "x", "title": "Watch", "content": "", "type": "media", "mediaUrl": "https://cdn.example/clip.mp4" },
                ],
                "created_at": "2024-03-01T00:00:00Z",
            },
        ],
    })
}

fn sections_router() -> Router {
    Router::new()
        .route(
            "/api/v1/modules/{slug}/sections",
            get(|| async { Json(sections_payload()) }).post(
                |Json(body): Json<Value>| async move {
                    // echo the payload back the way the backend would
                    let mut section = body;
                    let map = section.as_object_mut().expect("object payload");
                    map.insert("id".to_string(), json!("s-new"));
                    map.insert("created_at".to_string(), json!("2024-04-01T00:00:00Z"));
                    Json(json!({ "success": true, "message": "Created", "data": section }))
                },
            ),
        )
        .route(
            "/api/v1/modules/{slug}/sections/{id}",
            get(|| async {
                Json(json!({
                    "success": true,
                    "message": "",
                    "data": {
                        "id": "s-legacy",
                        "title": "Old lesson",
                        "content": "Hello <b>world</b>",
                        "created_at": "2023-06-01T00:00:00Z",
                    },
                }))
            }),
        )
        .route(
            "/api/v1/sections/{id}/complete",
            post(|| async { Json(json!({ "success": true, "message": "", "data": {} })) }),
        )
}

#[tokio::test]
async fn listed_sections_resolve_their_lesson_steps() {
    let server = spawn_stub(sections_router());
    let client = client_for(&server);

    let sections = client
        .sections()
        .list("intro", &Default::default())
        .await
        .unwrap()
        .data;
    assert_eq!(sections.len(), 3);

    // legacy text upgrades to a single wrapped step
    let legacy = sections[0].resolved_steps();
    assert_eq!(legacy.len(), 1);
    assert_eq!(legacy[0].title, "Lesson content");
    assert_eq!(legacy[0].content, "Hello <b>world</b>");
    assert_eq!(legacy[0].kind, LessonStepType::Instruction);

    // versioned envelope decodes in order
    let structured = sections[1].resolved_steps();
    assert_eq!(structured.len(), 2);
    assert_eq!(structured[0].id, "a");
    assert_eq!(structured[1].kind, LessonStepType::Practice);

    // structured lesson_steps beat the stale content string
    let dual = sections[2].resolved_steps();
    assert_eq!(dual.len(), 1);
    assert_eq!(dual[0].kind, LessonStepType::Media);
    assert_eq!(
        dual[0].media_url.as_deref(),
        Some("https://cdn.example/clip.mp4")
    );
}

#[tokio::test]
async fn created_sections_persist_the_versioned_envelope() {
    let server = spawn_stub(sections_router());
    let client = client_for(&server);

    let mut first = create_empty_lesson_step();
    first.title = "Read this".to_string();
    first.content = "<p>welcome</p>".to_string();
    let mut second = create_empty_lesson_step();
    second.title = "Try it".to_string();
    second.kind = LessonStepType::Practice;

    let steps = vec![first, second];
    let payload = SectionUpsert::new("Basics").with_steps(steps.clone());

    let created = client
        .sections()
        .create("intro", &payload)
        .await
        .unwrap()
        .data;

    // the write path always persists the version-1 envelope, never legacy text
    let content = created.content.as_ref().expect("content present");
    assert!(content.starts_with(r#"{"version":1"#));
    assert_eq!(parse_lesson_content(Some(content.as_str())), steps);

    // and the echoed structured steps resolve identically
    assert_eq!(created.resolved_steps(), steps);
}

#[tokio::test]
async fn fetched_section_round_trips_through_serialize() {
    let server = spawn_stub(sections_router());
    let client = client_for(&server);

    let section = client.sections().get("intro", "s-legacy").await.unwrap().data;
    let steps = section.resolved_steps();

    // saving a legacy section re-encodes it as the structured envelope
    let encoded = serialize_lesson_steps(&steps);
    let reparsed = parse_lesson_content(Some(encoded.as_str()));
    assert_eq!(reparsed, steps);

    client.sections().mark_complete("s-legacy").await.unwrap();
}
