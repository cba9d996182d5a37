use happy::client::{
    api::MultipartForm,
    error::ClientError,
    form::SelectedImage,
};
use happy_test_utils::fixtures::orphanage::mockito::{file_parts_in_order, text_part};

use super::*;

fn image(name: &str) -> SelectedImage {
    SelectedImage::new(name, Some("image/jpeg".to_string()), vec![0xff, 0xd8, 0xff])
}

/// Expect a single multipart POST carrying text fields and images in order
#[tokio::test]
async fn posts_multipart_once() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let endpoint = test.orphanages().create_post_endpoint(
        vec![
            text_part("name", "Lar das meninas"),
            text_part("latitude", "-23.5"),
            text_part("open_on_weekends", "true"),
            file_parts_in_order("images", &["a.jpg", "b.jpg"]),
        ],
        1,
    );
    test.mocks.push(endpoint);

    let mut form = MultipartForm::new();
    form.push_text("name", "Lar das meninas");
    form.push_text("latitude", "-23.5");
    form.push_text("open_on_weekends", "true");
    form.push_file("images", image("a.jpg"));
    form.push_file("images", image("b.jpg"));

    let client = api_client(&test);
    let result = client.create_orphanage(form).await;

    assert!(result.is_ok(), "{:?}", result);

    test.assert_mocks();

    Ok(())
}

/// Expect a validation failure to surface the API message
#[tokio::test]
async fn surfaces_validation_error() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let endpoint =
        test.orphanages()
            .create_error_endpoint("POST", "/orphanages", 400, "Validation fails");
    test.mocks.push(endpoint);

    let mut form = MultipartForm::new();
    form.push_text("name", "");

    let client = api_client(&test);
    let result = client.create_orphanage(form).await;

    assert_eq!(
        result,
        Err(ClientError::Status {
            status: 400,
            message: "Validation fails".to_string(),
        })
    );

    Ok(())
}
