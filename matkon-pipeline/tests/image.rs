use std::sync::Arc;

use async_trait::async_trait;
use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use matkon_core::{GenerateError, TextGenerator, PLACEHOLDER_IMAGE};
use matkon_pipeline::ImageResolver;
use matkon_spoonacular::SpoonacularClient;

struct FixedTranslation(&'static str);

#[async_trait]
impl TextGenerator for FixedTranslation {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerateError> {
        Ok(self.0.to_string())
    }

    fn model_name(&self) -> &str {
        "fixed"
    }
}

struct DownBackend;

#[async_trait]
impl TextGenerator for DownBackend {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerateError> {
        Err(GenerateError::Api {
            status: 500,
            message: "internal".to_string(),
        })
    }

    fn model_name(&self) -> &str {
        "down"
    }
}

fn search_client(server: &MockServer) -> SpoonacularClient {
    SpoonacularClient::new(SecretString::new("test-key".to_string()))
        .with_base_url(server.uri())
}

#[tokio::test]
async fn translates_title_then_searches_in_english() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes/complexSearch"))
        .and(query_param("query", "Lentil Soup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"image": "https://img.spoonacular.com/recipes/1-312x231.jpg"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    // Translation output arrives untrimmed, the resolver cleans it up.
    let resolver = ImageResolver::new(
        Arc::new(FixedTranslation("  Lentil Soup \n")),
        search_client(&server),
    );

    let url = resolver.resolve("מרק עדשים").await;
    assert_eq!(url, "https://img.spoonacular.com/recipes/1-312x231.jpg");
}

#[tokio::test]
async fn failed_translation_searches_with_the_hebrew_title() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes/complexSearch"))
        .and(query_param("query", "מרק עדשים"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"image": "https://img.spoonacular.com/recipes/2-312x231.jpg"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resolver = ImageResolver::new(Arc::new(DownBackend), search_client(&server));

    let url = resolver.resolve("מרק עדשים").await;
    assert_eq!(url, "https://img.spoonacular.com/recipes/2-312x231.jpg");
}

#[tokio::test]
async fn no_search_results_fall_back_to_placeholder() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes/complexSearch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .mount(&server)
        .await;

    let resolver = ImageResolver::new(
        Arc::new(FixedTranslation("Obscure Dish")),
        search_client(&server),
    );

    assert_eq!(resolver.resolve("מנה נדירה").await, PLACEHOLDER_IMAGE);
}

#[tokio::test]
async fn search_error_falls_back_to_placeholder() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes/complexSearch"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let resolver = ImageResolver::new(
        Arc::new(FixedTranslation("Soup")),
        search_client(&server),
    );

    assert_eq!(resolver.resolve("מרק").await, PLACEHOLDER_IMAGE);
}
