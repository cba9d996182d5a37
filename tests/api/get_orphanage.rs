use happy::client::error::ClientError;

use super::*;

/// Expect the record with its images in display order
#[tokio::test]
async fn returns_orphanage_with_images() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let orphanage = factory::mock_orphanage(1, &["first.jpg", "second.jpg"]);
    let endpoint = test.orphanages().create_detail_endpoint(1, orphanage, 1);
    test.mocks.push(endpoint);

    let client = api_client(&test);
    let orphanage = client.get_orphanage(1).await.unwrap();

    assert_eq!(orphanage.id, 1);
    assert_eq!(orphanage.opening_hours, "Das 8h até 18h");
    assert!(orphanage.open_on_weekends);
    let paths: Vec<&str> = orphanage.images.iter().map(|i| i.path.as_str()).collect();
    assert_eq!(paths, vec!["first.jpg", "second.jpg"]);

    test.assert_mocks();

    Ok(())
}

/// Expect a record without images to carry an empty image list
#[tokio::test]
async fn accepts_orphanage_without_images() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let mut orphanage = factory::mock_orphanage(2, &[]);
    orphanage
        .as_object_mut()
        .expect("mock orphanage should be an object")
        .remove("images");
    let endpoint = test.orphanages().create_detail_endpoint(2, orphanage, 1);
    test.mocks.push(endpoint);

    let client = api_client(&test);
    let orphanage = client.get_orphanage(2).await.unwrap();

    assert!(orphanage.images.is_empty());

    test.assert_mocks();

    Ok(())
}

/// Expect an unknown id to surface the 404 message
#[tokio::test]
async fn surfaces_not_found() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let endpoint =
        test.orphanages()
            .create_error_endpoint("GET", "/orphanages/99", 404, "Orphanage not found");
    test.mocks.push(endpoint);

    let client = api_client(&test);
    let result = client.get_orphanage(99).await;

    assert_eq!(
        result,
        Err(ClientError::Status {
            status: 404,
            message: "Orphanage not found".to_string(),
        })
    );

    Ok(())
}
