use avquote::{AiConfig, Catalog, QuoteAssistant};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn assistant(server: &MockServer) -> QuoteAssistant {
    let cfg = AiConfig {
        api_key: "k".to_string(),
        text_model: "gemini-2.5-flash".to_string(),
        image_model: "imagen-3.0-generate-002".to_string(),
        lookup_model: "gemini-2.5-flash-lite".to_string(),
        base_url: Some(server.uri()),
    };
    QuoteAssistant::new(cfg, Catalog::new(Vec::new()))
}

#[tokio::test]
async fn lookup_splits_description_and_image_url() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "candidates": [{
            "content": { "parts": [{ "text": "A great product.\nIMAGE_URL: http://x/y.jpg" }] },
            "groundingMetadata": {
                "groundingChunks": [
                    { "web": { "uri": "https://example.com/p", "title": "Product page" } },
                    { "retrievedContext": { "uri": "ignored" } }
                ]
            }
        }]
    });
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.5-flash-lite:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let details = assistant(&server)
        .fetch_product_details("example product")
        .await
        .unwrap();

    assert_eq!(details.description, "A great product.");
    assert_eq!(details.image_url, "http://x/y.jpg");
    // Chunks without a web citation are dropped.
    assert_eq!(details.sources.len(), 1);
    assert_eq!(details.sources[0].uri, "https://example.com/p");
    assert_eq!(details.sources[0].title, "Product page");
}

#[tokio::test]
async fn lookup_without_marker_yields_empty_image_url() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "candidates": [{
            "content": { "parts": [{ "text": "Only a description here." }] }
        }]
    });
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.5-flash-lite:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let details = assistant(&server)
        .fetch_product_details("example product")
        .await
        .unwrap();

    assert_eq!(details.description, "Only a description here.");
    assert_eq!(details.image_url, "");
    assert!(details.sources.is_empty());
}

#[tokio::test]
async fn lookup_request_enables_search_tool() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "candidates": [{ "content": { "parts": [{ "text": "ok" }] } }]
    });
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.5-flash-lite:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    assistant(&server)
        .fetch_product_details("Biamp Tesira")
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(body["tools"][0].get("google_search").is_some());
    assert!(body["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap()
        .contains("Biamp Tesira"));
}
