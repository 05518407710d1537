//! HTTP-level tests for the shop API client, against a wiremock server.

#![allow(clippy::unwrap_used)]

use shopgrid_api::{ShopApiClient, ShopApiError};
use shopgrid_catalog::{FilterKey, FilterSet, GatewayError, NewShop, PageSize, ShopQuery};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn query_with_shop_name(name: &str) -> ShopQuery {
    ShopQuery {
        filters: FilterSet::new().with(FilterKey::ShopName, name),
        page: 1,
        size: PageSize::Ten,
    }
}

fn success_body() -> serde_json::Value {
    serde_json::json!({
        "isSuccess": true,
        "data": {
            "shops": [
                {
                    "id": "1",
                    "name": "Toko A",
                    "products": [
                        {"name": "Avanza", "price": 250000.0, "images": ["a.jpg"]}
                    ]
                }
            ],
            "pagination": {"totalPages": 3}
        }
    })
}

#[tokio::test]
async fn fetch_sends_only_non_empty_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/shops"))
        .and(query_param("shopName", "Toko A"))
        .and(query_param("page", "1"))
        .and(query_param("size", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = ShopApiClient::new(server.uri());
    let page = client.fetch_shops(&query_with_shop_name("Toko A")).await.unwrap();

    assert_eq!(page.shops.len(), 1);
    assert_eq!(page.total_pages, 3);

    // Empty filters never appear as query parameters.
    let requests = server.received_requests().await.unwrap();
    let raw_query = requests[0].url.query().unwrap_or_default().to_string();
    assert!(!raw_query.contains("productName"));
    assert!(!raw_query.contains("stock"));
    assert!(!raw_query.contains("userName"));
}

#[tokio::test]
async fn fetch_with_no_filters_sends_paging_only() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/shops"))
        .and(query_param("page", "2"))
        .and(query_param("size", "30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
        .mount(&server)
        .await;

    let client = ShopApiClient::new(server.uri());
    let query = ShopQuery {
        filters: FilterSet::new(),
        page: 2,
        size: PageSize::Thirty,
    };
    client.fetch_shops(&query).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("page=2&size=30"));
}

#[tokio::test]
async fn unsuccessful_envelope_is_a_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/shops"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"isSuccess": false})),
        )
        .mount(&server)
        .await;

    let client = ShopApiClient::new(server.uri());
    let error = client
        .fetch_shops(&query_with_shop_name("Toko A"))
        .await
        .unwrap_err();

    assert!(matches!(error, ShopApiError::NotSuccessful));
    assert_eq!(error.to_string(), "Failed to fetch shops.");
}

#[tokio::test]
async fn error_status_carries_the_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/shops"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = ShopApiClient::new(server.uri());
    let error = client
        .fetch_shops(&query_with_shop_name("Toko A"))
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        ShopApiError::ApiError { status: 500, ref message } if message == "boom"
    ));
}

#[tokio::test]
async fn malformed_shop_payload_fails_decoding() {
    let server = MockServer::start().await;
    // Product is missing its price: strict decoding must reject it.
    let body = serde_json::json!({
        "isSuccess": true,
        "data": {
            "shops": [
                {"id": "1", "name": "Toko A", "products": [{"name": "Avanza", "images": []}]}
            ],
            "pagination": {"totalPages": 1}
        }
    });
    Mock::given(method("GET"))
        .and(path("/shops"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = ShopApiClient::new(server.uri());
    let error = client
        .fetch_shops(&query_with_shop_name("Toko A"))
        .await
        .unwrap_err();

    assert!(matches!(error, ShopApiError::ResponseParseFailed(_)));
}

#[tokio::test]
async fn create_shop_posts_camel_case_payload() {
    let server = MockServer::start().await;
    let shop = NewShop::new("Toko Baru", "admin@example.com");
    Mock::given(method("POST"))
        .and(path("/shops"))
        .and(body_json(serde_json::json!({
            "name": "Toko Baru",
            "adminEmail": "admin@example.com"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = ShopApiClient::new(server.uri());
    client.create_shop(&shop).await.unwrap();
}

#[tokio::test]
async fn create_shop_rejects_non_created_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shops"))
        .respond_with(ResponseTemplate::new(400).set_body_string("name must contain Toko"))
        .mount(&server)
        .await;

    let client = ShopApiClient::new(server.uri());
    let error = client
        .create_shop(&NewShop::new("Warung", "admin@example.com"))
        .await
        .unwrap_err();

    assert!(matches!(error, ShopApiError::ApiError { status: 400, .. }));
}

#[tokio::test]
async fn gateway_trait_maps_errors_for_the_controller() {
    use shopgrid_catalog::providers::ShopCatalogGateway;

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/shops"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"isSuccess": false})),
        )
        .mount(&server)
        .await;

    let client = ShopApiClient::new(server.uri());
    let error = ShopCatalogGateway::fetch_shops(&client, query_with_shop_name("Toko A"))
        .await
        .unwrap_err();

    assert_eq!(error, GatewayError::Rejected("Failed to fetch shops.".into()));
}
