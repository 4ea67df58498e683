//! Lightbox State
//!
//! The overlay is either hidden or showing one image.

/// Overlay visibility and the image it shows
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Lightbox {
    image: Option<String>,
}

impl Lightbox {
    pub fn open(&mut self, src: impl Into<String>) {
        self.image = Some(src.into());
    }

    pub fn close(&mut self) {
        self.image = None;
    }

    pub fn is_open(&self) -> bool {
        self.image.is_some()
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Handle a page keydown; Escape closes the overlay
    pub fn on_key(&mut self, key: &str) {
        if key == "Escape" {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_replaces_image() {
        let mut lightbox = Lightbox::default();
        assert!(!lightbox.is_open());

        lightbox.open("images/gallery/hall.jpg");
        lightbox.open("images/gallery/bar.jpg");
        assert!(lightbox.is_open());
        assert_eq!(lightbox.image(), Some("images/gallery/bar.jpg"));
    }

    #[test]
    fn test_escape_and_close_hide_overlay() {
        let mut lightbox = Lightbox::default();
        lightbox.open("images/gallery/hall.jpg");
        lightbox.on_key("Enter");
        assert!(lightbox.is_open());
        lightbox.on_key("Escape");
        assert!(!lightbox.is_open());

        lightbox.open("images/gallery/terrace.jpg");
        lightbox.close();
        assert_eq!(lightbox.image(), None);

        // Closing an already hidden overlay is harmless
        lightbox.on_key("Escape");
        assert!(!lightbox.is_open());
    }
}
