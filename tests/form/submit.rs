use std::rc::Rc;

use happy::client::{
    api::{ApiClient, NativeTransport},
    form::{DataUrlFactory, DraftOrphanage, PreviewUrlFactory, SelectedImage, TextField},
};
use happy_test_utils::{
    fixtures::orphanage::mockito::{file_parts_in_order, text_part},
    prelude::*,
};

fn image(name: &str) -> SelectedImage {
    SelectedImage::new(name, None, name.as_bytes().to_vec())
}

/// Expect a filled draft to reach the API as one request with every field
#[tokio::test]
async fn submits_filled_draft() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let endpoint = test.orphanages().create_post_endpoint(
        vec![
            text_part("name", "Lar das meninas"),
            text_part("latitude", "-23.5"),
            text_part("longitude", "-46.8"),
            text_part("about", "Presta assistência"),
            text_part("instructions", "Venha como se sentir a vontade"),
            text_part("opening_hours", "Das 8h até 18h"),
            text_part("open_on_weekends", "false"),
            file_parts_in_order("images", &["a.jpg", "b.png"]),
        ],
        1,
    );
    test.mocks.push(endpoint);

    let previews: Rc<dyn PreviewUrlFactory> = Rc::new(DataUrlFactory);
    let mut draft = DraftOrphanage::default();
    draft.set_coordinates(-23.5, -46.8);
    draft.set_text(TextField::Name, "Lar das meninas".to_string());
    draft.set_text(TextField::About, "Presta assistência".to_string());
    draft.set_text(
        TextField::Instructions,
        "Venha como se sentir a vontade".to_string(),
    );
    draft.set_text(TextField::OpeningHours, "Das 8h até 18h".to_string());
    draft.set_open_on_weekends(false);
    draft.select_images(vec![image("a.jpg"), image("b.png")], &previews);

    let client = ApiClient::new(&test.url(), NativeTransport::default());
    let result = client.create_orphanage(draft.to_multipart()).await;

    assert!(result.is_ok(), "{:?}", result);

    test.assert_mocks();

    Ok(())
}
