//! Image gallery state for an open project modal.

use crate::content::{ImageRef, Project};

/// Which image of a record's media set is on screen.
///
/// Never empty: a record without gallery images gets a one-image gallery
/// built from its primary image.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryState {
    images: Vec<ImageRef>,
    current: usize,
}

/// A thumbnail in the gallery strip
#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    pub index: usize,
    pub image: ImageRef,
    pub active: bool,
}

/// Everything the gallery panel draws
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryView {
    pub main: ImageRef,
    /// 1-based position of the main image
    pub position: usize,
    pub total: usize,
    pub thumbnails: Vec<Thumbnail>,
}

impl GalleryView {
    /// "current / total" counter text
    pub fn counter(&self) -> String {
        format!("{} / {}", self.position, self.total)
    }
}

impl GalleryState {
    pub fn new(images: Vec<ImageRef>, primary: &ImageRef) -> Self {
        let images = if images.is_empty() {
            vec![primary.clone()]
        } else {
            images
        };
        Self { images, current: 0 }
    }

    pub fn for_project(project: &Project) -> Self {
        Self::new(project.gallery.clone(), &project.image)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_image(&self) -> &ImageRef {
        &self.images[self.current]
    }

    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.images.len();
    }

    pub fn prev(&mut self) {
        let len = self.images.len();
        self.current = (self.current + len - 1) % len;
    }

    /// Jump to a thumbnail position taken from the rendered strip
    pub fn jump(&mut self, index: usize) {
        debug_assert!(index < self.images.len(), "thumbnail index out of range");
        self.current = index.min(self.images.len() - 1);
    }

    pub fn view(&self) -> GalleryView {
        GalleryView {
            main: self.current_image().clone(),
            position: self.current + 1,
            total: self.images.len(),
            thumbnails: self
                .images
                .iter()
                .enumerate()
                .map(|(index, image)| Thumbnail {
                    index,
                    image: image.clone(),
                    active: index == self.current,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(n: usize) -> Vec<ImageRef> {
        (0..n)
            .map(|i| ImageRef::new(format!("{i}.png"), format!("Image {i}")))
            .collect()
    }

    #[test]
    fn test_falls_back_to_primary_image() {
        let primary = ImageRef::new("main.png", "Main");
        let gallery = GalleryState::new(Vec::new(), &primary);
        assert_eq!(gallery.len(), 1);
        assert_eq!(gallery.current_image(), &primary);
        assert_eq!(gallery.view().counter(), "1 / 1");
    }

    #[test]
    fn test_wraps_both_ways() {
        let mut gallery = GalleryState::new(images(3), &ImageRef::new("p", ""));
        gallery.prev();
        assert_eq!(gallery.current_index(), 2);
        gallery.next();
        assert_eq!(gallery.current_index(), 0);
    }

    #[test]
    fn test_single_image_stays_put() {
        let mut gallery = GalleryState::new(images(1), &ImageRef::new("p", ""));
        gallery.next();
        gallery.prev();
        assert_eq!(gallery.current_index(), 0);
    }

    #[test]
    fn test_view_marks_active_thumbnail() {
        let mut gallery = GalleryState::new(images(4), &ImageRef::new("p", ""));
        gallery.jump(2);
        let view = gallery.view();
        assert_eq!(view.counter(), "3 / 4");
        assert_eq!(view.main.src, "2.png");
        let active: Vec<_> = view.thumbnails.iter().filter(|t| t.active).map(|t| t.index).collect();
        assert_eq!(active, vec![2]);
    }
}
