use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt; // for Router::oneshot

use resume_api::config::Config;
use resume_api::routes::build_router;
use resume_api::state::AppState;

fn make_app() -> Router {
    build_router(AppState::new(Config::default()))
}

fn make_resume() -> Value {
    json!({
        "template": "Executive",
        "personal_info": {
            "full_name": "Maria Gonzalez",
            "title": "VP of Engineering",
            "email": "maria@example.com",
            "phone": "(555) 010-2030",
            "location": "Chicago, IL",
            "linkedin": "https://linkedin.com/in/mariag"
        },
        "summary": "Engineering leader who has scaled platform teams from five to sixty engineers across three continents.",
        "experience": [{
            "position": "VP of Engineering",
            "company": "Brightpath",
            "start_date": "Jun 2018",
            "end_date": "Present",
            "description": "Leads platform, data and infrastructure organisations."
        }],
        "education": [{
            "school": "Northwestern University",
            "degree": "MBA",
            "field": "Technology Management",
            "graduation_date": "2012"
        }],
        "skills": { "soft": "Leadership, Hiring", "tools": ["Jira", "Datadog"] }
    })
}

async fn post_json(app: Router, uri: &str, body: &Value) -> Response {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(req).await.unwrap()
}

async fn get(app: Router, uri: &str) -> Response {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(req).await.unwrap()
}

async fn json_body(resp: Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health() {
    let resp = get(make_app(), "/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_list_templates_returns_all_six() {
    let resp = get(make_app(), "/api/v1/templates").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        ["Modern", "Professional", "Minimal", "Creative", "Executive", "Tech"]
    );
}

#[tokio::test]
async fn test_get_template_by_name() {
    let resp = get(make_app(), "/api/v1/templates/tech").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["name"], "Tech");
    assert_eq!(
        body["sections"],
        json!(["summary", "experience", "projects", "skills", "education"])
    );

    let resp = get(make_app(), "/api/v1/templates/Baroque").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = json_body(resp).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_validate_reports_invalid_resume_with_ok_status() {
    let mut data = make_resume();
    data["template"] = json!("Nonexistent");
    data["personal_info"]["email"] = json!("not-an-email");

    let resp = post_json(make_app(), "/api/v1/resumes/validate", &data).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    assert_eq!(body["is_valid"], false);
    assert_eq!(body["summary"]["total_errors"], 2);
    assert_eq!(body["summary"]["sections_present"]["projects"], false);
}

#[tokio::test]
async fn test_validate_rejects_non_object_body() {
    let resp = post_json(make_app(), "/api/v1/resumes/validate", &json!([1, 2, 3])).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_render_returns_docx_attachment() {
    let resp = post_json(make_app(), "/api/v1/resumes/render", &make_resume()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[header::CONTENT_TYPE],
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    );
    assert_eq!(
        resp.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"Maria_Gonzalez_Resume.docx\""
    );
    assert_eq!(resp.headers()["x-resume-warnings"], "0");

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[tokio::test]
async fn test_render_refuses_invalid_resume() {
    let mut data = make_resume();
    let root = data.as_object_mut().unwrap();
    root.remove("experience");
    root.remove("education");

    let resp = post_json(make_app(), "/api/v1/resumes/render", &data).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = json_body(resp).await;
    assert_eq!(body["error"]["code"], "VALIDATION_FAILED");
    assert_eq!(
        body["error"]["errors"],
        json!(["At least one content section is required: Experience, Education, or Projects"])
    );
    assert_eq!(body["error"]["summary"]["total_errors"], 1);
}

#[tokio::test]
async fn test_body_limit_is_enforced() {
    let config = Config {
        max_body_bytes: 64,
        ..Config::default()
    };
    let app = build_router(AppState::new(config));
    let resp = post_json(app, "/api/v1/resumes/validate", &make_resume()).await;
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
}
