use std::rc::Rc;

use crate::client::{
    api::MultipartForm,
    form::{
        image::{ImageSelection, SelectedImage},
        preview::PreviewUrlFactory,
    },
    map::LatLng,
};

/// Character cap the form's text areas enforce through `maxlength`.
pub const MAX_TEXT_LENGTH: usize = 300;

/// Location picked on the map, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Coordinates {
    #[default]
    Unset,
    Set(LatLng),
}

impl Coordinates {
    pub fn position(&self) -> Option<LatLng> {
        match self {
            Self::Unset => None,
            Self::Set(position) => Some(*position),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextField {
    Name,
    About,
    Instructions,
    OpeningHours,
}

impl TextField {
    /// Multipart field name the API expects.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::About => "about",
            Self::Instructions => "instructions",
            Self::OpeningHours => "opening_hours",
        }
    }

    pub fn max_length(self) -> Option<usize> {
        match self {
            Self::About | Self::Instructions => Some(MAX_TEXT_LENGTH),
            Self::Name | Self::OpeningHours => None,
        }
    }
}

/// Everything typed or picked into the registration form so far.
pub struct DraftOrphanage {
    coordinates: Coordinates,
    name: String,
    about: String,
    instructions: String,
    opening_hours: String,
    open_on_weekends: bool,
    images: ImageSelection,
}

impl Default for DraftOrphanage {
    fn default() -> Self {
        Self {
            coordinates: Coordinates::Unset,
            name: String::new(),
            about: String::new(),
            instructions: String::new(),
            opening_hours: String::new(),
            open_on_weekends: true,
            images: ImageSelection::default(),
        }
    }
}

impl DraftOrphanage {
    /// Overwrites both coordinates with the clicked position. Any value is
    /// accepted.
    pub fn set_coordinates(&mut self, lat: f64, lng: f64) {
        self.coordinates = Coordinates::Set(LatLng::new(lat, lng));
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    /// Stores `value` as typed. Length caps are left to the input widget.
    pub fn set_text(&mut self, field: TextField, value: String) {
        *self.text_mut(field) = value;
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Name => &self.name,
            TextField::About => &self.about,
            TextField::Instructions => &self.instructions,
            TextField::OpeningHours => &self.opening_hours,
        }
    }

    fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::Name => &mut self.name,
            TextField::About => &mut self.about,
            TextField::Instructions => &mut self.instructions,
            TextField::OpeningHours => &mut self.opening_hours,
        }
    }

    pub fn set_open_on_weekends(&mut self, open: bool) {
        self.open_on_weekends = open;
    }

    pub fn open_on_weekends(&self) -> bool {
        self.open_on_weekends
    }

    /// See [`ImageSelection::replace`].
    pub fn select_images(
        &mut self,
        files: Vec<SelectedImage>,
        factory: &Rc<dyn PreviewUrlFactory>,
    ) -> bool {
        self.images.replace(files, factory)
    }

    pub fn images(&self) -> &ImageSelection {
        &self.images
    }

    /// Serializes the draft for `POST /orphanages`.
    ///
    /// Scalars are sent in their string form. Coordinates are left out while
    /// no location has been picked. Each selected image becomes one `images`
    /// part, in selection order.
    pub fn to_multipart(&self) -> MultipartForm {
        let mut form = MultipartForm::new();

        form.push_text(TextField::Name.key(), self.name.as_str());
        if let Some(position) = self.coordinates.position() {
            form.push_text("latitude", position.lat.to_string());
            form.push_text("longitude", position.lng.to_string());
        }
        form.push_text(TextField::About.key(), self.about.as_str());
        form.push_text(TextField::Instructions.key(), self.instructions.as_str());
        form.push_text(TextField::OpeningHours.key(), self.opening_hours.as_str());
        form.push_text("open_on_weekends", self.open_on_weekends.to_string());

        for image in self.images.files() {
            form.push_file("images", image.clone());
        }

        form
    }
}
