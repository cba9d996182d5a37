/// The Active Image Index of the detail page.
///
/// Starts at the first image and only changes through [`ImageGallery::select`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImageGallery {
    active: usize,
}

impl ImageGallery {
    pub fn active(&self) -> usize {
        self.active
    }

    /// Selects `index` if it is within `len` images.
    pub fn select(&mut self, index: usize, len: usize) -> bool {
        if index >= len {
            return false;
        }

        self.active = index;
        true
    }

    /// Image currently shown full size.
    ///
    /// Falls back to the first image when the index no longer fits, which
    /// happens when a record with fewer images is loaded into the same view.
    pub fn active_image<'a, T>(&self, images: &'a [T]) -> Option<&'a T> {
        images.get(self.active).or_else(|| images.first())
    }

    pub fn is_active(&self, index: usize, len: usize) -> bool {
        let active = if self.active < len { self.active } else { 0 };
        active == index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_first_image() {
        let gallery = ImageGallery::default();

        assert_eq!(gallery.active(), 0);
        assert_eq!(gallery.active_image(&["a", "b", "c"]), Some(&"a"));
    }

    #[test]
    fn thumbnail_click_switches_image() {
        let mut gallery = ImageGallery::default();
        let paths = ["a.jpg", "b.jpg", "c.jpg"];

        assert!(gallery.select(2, paths.len()));

        assert_eq!(gallery.active_image(&paths), Some(&"c.jpg"));
        assert!(gallery.is_active(2, paths.len()));
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut gallery = ImageGallery::default();
        gallery.select(1, 3);

        assert!(!gallery.select(3, 3));
        assert_eq!(gallery.active(), 1);
    }

    #[test]
    fn falls_back_when_images_shrink() {
        let mut gallery = ImageGallery::default();
        gallery.select(2, 3);

        assert_eq!(gallery.active_image(&["x"]), Some(&"x"));
        assert!(gallery.is_active(0, 1));
        assert_eq!(gallery.active_image::<&str>(&[]), None);
    }
}
