use super::*;

#[test]
fn new_rejects_unparseable_endpoint() {
    let err = CatalogClient::new("not-a-url", "uk", 5, "storefront-test/0.1").unwrap_err();
    assert!(
        matches!(err, CatalogError::InvalidEndpoint { .. }),
        "expected InvalidEndpoint, got: {err:?}"
    );
}

#[test]
fn new_rejects_non_http_scheme() {
    let err = CatalogClient::new("ftp://shop.example.com/graphql/", "uk", 5, "storefront-test/0.1")
        .unwrap_err();
    assert!(
        matches!(err, CatalogError::InvalidEndpoint { ref reason, .. } if reason.contains("ftp")),
        "expected InvalidEndpoint, got: {err:?}"
    );
}

#[test]
fn new_keeps_trailing_slash_in_endpoint() {
    let client =
        CatalogClient::new("https://shop.example.com/graphql/", "uk", 5, "storefront-test/0.1")
            .unwrap();
    assert_eq!(client.endpoint.as_str(), "https://shop.example.com/graphql/");
    assert_eq!(client.channel(), "uk");
}

#[test]
fn with_token_sets_bearer_token() {
    let client = CatalogClient::new("https://shop.example.com/graphql/", "uk", 5, "t/0.1")
        .unwrap()
        .with_token("abc");
    assert_eq!(client.token.as_deref(), Some("abc"));
}

#[test]
fn endpoint_host_strips_scheme_and_path() {
    let url = Url::parse("https://shop.example.com/graphql/").unwrap();
    assert_eq!(endpoint::endpoint_host(&url), "shop.example.com");
}

#[test]
fn join_errors_concatenates_messages() {
    let envelope: GraphQlResponse<serde_json::Value> = serde_json::from_str(
        r#"{"data": null, "errors": [{"message": "first"}, {"message": "second"}]}"#,
    )
    .unwrap();
    assert_eq!(join_errors(&envelope).as_deref(), Some("first; second"));
}

#[test]
fn join_errors_is_none_without_errors() {
    let envelope: GraphQlResponse<serde_json::Value> =
        serde_json::from_str(r#"{"data": {"products": null}}"#).unwrap();
    assert!(join_errors(&envelope).is_none());
}
