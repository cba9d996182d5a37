use serde_json::{json, Value};

use crate::constant::{TEST_LATITUDE, TEST_LONGITUDE};

/// Create a mock orphanage record as the detail endpoint returns it.
///
/// # Arguments
/// - `id` - The orphanage ID
/// - `image_paths` - Stored paths of the orphanage's images, in display order
///
/// # Returns
/// - `Value` - JSON object with every orphanage field
pub fn mock_orphanage(id: i32, image_paths: &[&str]) -> Value {
    let images: Vec<Value> = image_paths
        .iter()
        .enumerate()
        .map(|(index, path)| json!({ "id": index as i32 + 1, "path": path }))
        .collect();

    json!({
        "id": id,
        "name": format!("Lar das meninas {}", id),
        "latitude": TEST_LATITUDE,
        "longitude": TEST_LONGITUDE,
        "about": "Presta assistência a crianças de 06 a 15 anos que se encontre em situação de risco e/ou vulnerabilidade social.",
        "instructions": "Venha como se sentir a vontade e traga muito amor e paciência para dar.",
        "opening_hours": "Das 8h até 18h",
        "open_on_weekends": true,
        "images": images,
    })
}

/// Create a mock entry of the orphanage collection.
pub fn mock_orphanage_summary(id: i32, latitude: f64, longitude: f64) -> Value {
    json!({
        "id": id,
        "name": format!("Lar das meninas {}", id),
        "latitude": latitude,
        "longitude": longitude,
    })
}
