use happy::client::{
    api::{ApiClient, NativeTransport},
    error::ClientError,
};

use super::*;

/// Expect an empty collection to yield no markers
#[tokio::test]
async fn returns_empty_list() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let endpoint = test.orphanages().create_list_endpoint(Vec::new(), 1);
    test.mocks.push(endpoint);

    let client = api_client(&test);
    let result = client.list_orphanages().await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());

    test.assert_mocks();

    Ok(())
}

/// Expect every orphanage to be returned in response order
#[tokio::test]
async fn returns_orphanages() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let endpoint = test.orphanages().create_list_endpoint(
        vec![
            factory::mock_orphanage_summary(1, -23.53, -46.81),
            factory::mock_orphanage_summary(2, -23.54, -46.82),
        ],
        1,
    );
    test.mocks.push(endpoint);

    let client = api_client(&test);
    let orphanages = client.list_orphanages().await.unwrap();

    let ids: Vec<i32> = orphanages.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(orphanages[1].name, "Lar das meninas 2");
    assert_eq!(orphanages[1].latitude, -23.54);
    assert_eq!(orphanages[1].longitude, -46.82);

    test.assert_mocks();

    Ok(())
}

/// Expect the full record payload to be accepted for list entries
#[tokio::test]
async fn ignores_extra_fields() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let endpoint = test
        .orphanages()
        .create_list_endpoint(vec![factory::mock_orphanage(3, &["a.jpg"])], 1);
    test.mocks.push(endpoint);

    let client = api_client(&test);
    let orphanages = client.list_orphanages().await.unwrap();

    assert_eq!(orphanages.len(), 1);
    assert_eq!(orphanages[0].id, 3);

    test.assert_mocks();

    Ok(())
}

/// Expect the API error message to be surfaced on a failed request
#[tokio::test]
async fn surfaces_error_status() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let endpoint =
        test.orphanages()
            .create_error_endpoint("GET", "/orphanages", 500, "Internal server error");
    test.mocks.push(endpoint);

    let client = api_client(&test);
    let result = client.list_orphanages().await;

    assert_eq!(
        result,
        Err(ClientError::Status {
            status: 500,
            message: "Internal server error".to_string(),
        })
    );

    Ok(())
}

/// Expect a body that is not a list to fail parsing
#[tokio::test]
async fn fails_on_malformed_body() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let _endpoint = test
        .server
        .mock("GET", "/orphanages")
        .with_status(200)
        .with_body("not json")
        .create();

    let client = api_client(&test);
    let result = client.list_orphanages().await;

    assert!(matches!(result, Err(ClientError::Parse(_))));

    Ok(())
}

/// Expect a refused connection to be reported as a request error
#[tokio::test]
async fn fails_when_server_unreachable() {
    let client = ApiClient::new("http://127.0.0.1:1", NativeTransport::default());

    let result = client.list_orphanages().await;

    assert!(matches!(result, Err(ClientError::Request(_))));
}
