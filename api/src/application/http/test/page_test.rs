use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use base64::{Engine as _, engine::general_purpose};
use calorie_tracker_core::domain::food_analysis::{
    entities::NO_SELECTION_MESSAGE, prompt::FOOD_ANALYSIS_PROMPT,
};
use serde_json::json;

use super::{
    JPEG, MODEL_REPLY, PNG,
    mock_gemini::{MockGemini, MockReply},
    test_args, test_server,
};
use crate::application::{
    http::server::http_server::MULTIPART_OVERHEAD, session_middleware::SESSION_COOKIE,
};

const SMALL_IMAGE_LIMIT: usize = 64;

fn image_form(data: &[u8], file_name: &str, mime_type: &str) -> MultipartForm {
    MultipartForm::new().add_part(
        "image",
        Part::bytes(data.to_vec())
            .file_name(file_name)
            .mime_type(mime_type),
    )
}

#[tokio::test]
async fn test_page_without_selection_prompts_user() {
    let gemini = MockGemini::start(MockReply::Text(MODEL_REPLY.to_string())).await;
    let server = test_server(test_args(&gemini.base_url, Some("test-key")));

    let response = server.get("/").await;

    response.assert_status_ok();
    assert!(response.text().contains(NO_SELECTION_MESSAGE));
    assert!(!response.cookie(SESSION_COOKIE).value().is_empty());
    assert!(gemini.calls().is_empty());
}

#[tokio::test]
async fn test_analysis_without_selection_makes_no_call() {
    let gemini = MockGemini::start(MockReply::Text(MODEL_REPLY.to_string())).await;
    let server = test_server(test_args(&gemini.base_url, Some("test-key")));

    let response = server.post("/analysis").await;

    response.assert_status_ok();
    assert!(response.text().contains(NO_SELECTION_MESSAGE));
    assert!(gemini.calls().is_empty());
}

#[tokio::test]
async fn test_upload_renders_model_text() {
    let gemini = MockGemini::start(MockReply::Text(MODEL_REPLY.to_string())).await;
    let server = test_server(test_args(&gemini.base_url, Some("test-key")));

    let response = server
        .post("/images/upload")
        .multipart(image_form(JPEG, "plate.jpg", "image/jpeg"))
        .await;

    response.assert_status_ok();
    let page = response.text();
    assert!(page.contains(&format!(
        r#"<div class="response-text">{MODEL_REPLY}</div>"#
    )));
    assert!(page.contains("Nutritional Analysis"));

    let calls = gemini.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].path, "gemini-1.5-flash:generateContent");
    assert_eq!(calls[0].api_key.as_deref(), Some("test-key"));
    assert_eq!(
        calls[0].body,
        json!({
            "contents": [{
                "parts": [
                    {
                        "inline_data": {
                            "mime_type": "image/jpeg",
                            "data": general_purpose::STANDARD.encode(JPEG)
                        }
                    },
                    { "text": FOOD_ANALYSIS_PROMPT }
                ]
            }]
        })
    );
}

#[tokio::test]
async fn test_capture_then_upload_keeps_upload() {
    let gemini = MockGemini::start(MockReply::Text(MODEL_REPLY.to_string())).await;
    let server = test_server(test_args(&gemini.base_url, Some("test-key")));

    server
        .post("/images/capture")
        .multipart(image_form(JPEG, "capture.jpg", "image/jpeg"))
        .await
        .assert_status_ok();
    server
        .post("/images/upload")
        .multipart(image_form(PNG, "plate.png", "image/png"))
        .await
        .assert_status_ok();

    let page = server.get("/").await.text();
    assert!(page.contains(&general_purpose::STANDARD.encode(PNG)));
    assert!(!page.contains(&general_purpose::STANDARD.encode(JPEG)));
    assert!(page.contains(r#"id="tab-upload" checked"#));

    let calls = gemini.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(
        calls[1].body["contents"][0]["parts"][0]["inline_data"]["data"],
        general_purpose::STANDARD.encode(PNG)
    );
}

#[tokio::test]
async fn test_get_page_does_not_call_model_again() {
    let gemini = MockGemini::start(MockReply::Text(MODEL_REPLY.to_string())).await;
    let server = test_server(test_args(&gemini.base_url, Some("test-key")));

    server
        .post("/images/capture")
        .multipart(image_form(JPEG, "capture.jpg", "image/jpeg"))
        .await
        .assert_status_ok();

    let page = server.get("/").await.text();

    assert!(page.contains(MODEL_REPLY));
    assert_eq!(gemini.calls().len(), 1);
}

#[tokio::test]
async fn test_manual_retry_calls_model_again() {
    let gemini = MockGemini::start(MockReply::Text(MODEL_REPLY.to_string())).await;
    let server = test_server(test_args(&gemini.base_url, Some("test-key")));

    server
        .post("/images/capture")
        .multipart(image_form(JPEG, "capture.jpg", "image/jpeg"))
        .await
        .assert_status_ok();
    server.post("/analysis").await.assert_status_ok();

    assert_eq!(gemini.calls().len(), 2);
}

#[tokio::test]
async fn test_unreadable_image_shows_processing_error() {
    let gemini = MockGemini::start(MockReply::Text(MODEL_REPLY.to_string())).await;
    let server = test_server(test_args(&gemini.base_url, Some("test-key")));

    let response = server
        .post("/images/upload")
        .multipart(image_form(b"this is not a photo", "plate.jpg", "image/jpeg"))
        .await;

    response.assert_status_ok();
    let page = response.text();
    assert!(page.contains("Error: Error processing image: cannot identify image file"));
    assert!(!page.contains("response-text\">"));
    assert!(gemini.calls().is_empty());
}

#[tokio::test]
async fn test_model_failure_shows_inference_error() {
    let gemini = MockGemini::start(MockReply::Error(
        StatusCode::TOO_MANY_REQUESTS,
        json!({
            "error": {
                "code": 429,
                "message": "Resource has been exhausted",
                "status": "RESOURCE_EXHAUSTED"
            }
        }),
    ))
    .await;
    let server = test_server(test_args(&gemini.base_url, Some("test-key")));

    let response = server
        .post("/images/capture")
        .multipart(image_form(JPEG, "capture.jpg", "image/jpeg"))
        .await;

    response.assert_status_ok();
    let page = response.text();
    assert!(page.contains("Error: Error generating response:"));
    assert!(page.contains("Resource has been exhausted"));
    assert!(!page.contains("panicked"));
    assert_eq!(gemini.calls().len(), 1);
}

#[tokio::test]
async fn test_missing_api_key_reports_authentication_error() {
    let gemini = MockGemini::start(MockReply::Text(MODEL_REPLY.to_string())).await;
    let server = test_server(test_args(&gemini.base_url, None));

    let response = server
        .post("/images/capture")
        .multipart(image_form(JPEG, "capture.jpg", "image/jpeg"))
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("authentication failed"));
    assert!(gemini.calls().is_empty());
}

#[tokio::test]
async fn test_rejected_upload_keeps_current_selection() {
    let gemini = MockGemini::start(MockReply::Text(MODEL_REPLY.to_string())).await;
    let server = test_server(test_args(&gemini.base_url, Some("test-key")));

    server
        .post("/images/capture")
        .multipart(image_form(JPEG, "capture.jpg", "image/jpeg"))
        .await
        .assert_status_ok();

    let response = server
        .post("/images/upload")
        .multipart(image_form(PNG, "animation.gif", "image/gif"))
        .await;

    response.assert_status_ok();
    let page = response.text();
    assert!(page.contains("unsupported file type"));
    assert!(page.contains(&general_purpose::STANDARD.encode(JPEG)));
    assert_eq!(gemini.calls().len(), 1);
}

#[tokio::test]
async fn test_empty_capture_leaves_selection_unchanged() {
    let gemini = MockGemini::start(MockReply::Text(MODEL_REPLY.to_string())).await;
    let server = test_server(test_args(&gemini.base_url, Some("test-key")));

    let response = server
        .post("/images/capture")
        .multipart(image_form(b"", "capture.jpg", "image/jpeg"))
        .await;

    response.assert_status_ok();
    assert!(response.text().contains(NO_SELECTION_MESSAGE));
    assert!(gemini.calls().is_empty());
}

fn jpeg_of_len(len: usize) -> Vec<u8> {
    let mut data = JPEG.to_vec();
    data.resize(len, 0);
    data
}

#[tokio::test]
async fn test_image_over_size_limit_shows_processing_error() {
    let gemini = MockGemini::start(MockReply::Text(MODEL_REPLY.to_string())).await;
    let mut args = test_args(&gemini.base_url, Some("test-key"));
    args.image.max_image_bytes = SMALL_IMAGE_LIMIT;
    let server = test_server(args);

    let response = server
        .post("/images/upload")
        .multipart(image_form(
            &jpeg_of_len(SMALL_IMAGE_LIMIT + 1),
            "plate.jpg",
            "image/jpeg",
        ))
        .await;

    response.assert_status_ok();
    let page = response.text();
    assert!(page.contains("Error: Error processing image: Image too large"));
    assert!(page.contains(NO_SELECTION_MESSAGE));
    assert!(gemini.calls().is_empty());
}

#[tokio::test]
async fn test_body_over_request_limit_still_renders_page() {
    let gemini = MockGemini::start(MockReply::Text(MODEL_REPLY.to_string())).await;
    let mut args = test_args(&gemini.base_url, Some("test-key"));
    args.image.max_image_bytes = SMALL_IMAGE_LIMIT;
    let server = test_server(args);

    let response = server
        .post("/images/capture")
        .multipart(image_form(
            &jpeg_of_len(SMALL_IMAGE_LIMIT + MULTIPART_OVERHEAD + 1),
            "capture.jpg",
            "image/jpeg",
        ))
        .await;

    response.assert_status_ok();
    let page = response.text();
    assert!(page.contains("Error: Error processing image:"));
    assert!(page.contains(NO_SELECTION_MESSAGE));
    assert!(gemini.calls().is_empty());
}
