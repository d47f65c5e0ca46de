use crate::helpers::spawn_app;

#[tokio::test]
async fn some_page_returns_html() {
    let app = spawn_app().await;
    let address = format!("{}/some-page", app.address);
    let response = reqwest::get(address).await.expect("failed to send request");
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .expect("missing content type")
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("text/html"));
    let body = response.text().await.unwrap();
    assert!(body.contains("<html"));
}

#[tokio::test]
async fn count_parameter_does_not_change_the_page() {
    let app = spawn_app().await;
    let plain = reqwest::get(format!("{}/some-page", app.address))
        .await
        .expect("failed to send request")
        .text()
        .await
        .unwrap();
    let with_count = reqwest::get(format!("{}/some-page?count=5", app.address))
        .await
        .expect("failed to send request")
        .text()
        .await
        .unwrap();
    assert_eq!(plain, with_count);
}

#[tokio::test]
async fn non_integer_count_is_rejected_by_binding() {
    let app = spawn_app().await;
    let response = reqwest::get(format!("{}/some-page?count=abc", app.address))
        .await
        .expect("failed to send request");
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let body = response.text().await.unwrap();
    assert!(body.contains("Failed to deserialize query string"));
}

#[tokio::test]
async fn repeated_requests_return_the_same_page() {
    let app = spawn_app().await;
    let address = format!("{}/some-page", app.address);
    let first = reqwest::get(&address).await.unwrap().text().await.unwrap();
    let second = reqwest::get(&address).await.unwrap().text().await.unwrap();
    assert_eq!(first, second);
}
