use crate::domain::models::{GalleryView, ThumbnailView};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum GalleryError {
    #[error("no thumbnail at index {index} (gallery has {count})")]
    NoSuchThumbnail { index: usize, count: usize },
}

/// Which image the preview pane shows. Thumbnails map 1:1 onto the images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryState {
    selected: usize,
    count: usize,
}

impl GalleryState {
    pub fn new(count: usize) -> Self {
        GalleryState { selected: 0, count }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn click(&mut self, index: usize) -> Result<(), GalleryError> {
        if index >= self.count {
            return Err(GalleryError::NoSuchThumbnail {
                index,
                count: self.count,
            });
        }
        self.selected = index;
        Ok(())
    }
}

pub fn render(state: &GalleryState, images: &[String]) -> GalleryView {
    let selected = state.selected();
    GalleryView {
        preview: images.get(selected).cloned().unwrap_or_default(),
        selected,
        thumbnails: images
            .iter()
            .enumerate()
            .map(|(index, src)| ThumbnailView {
                index,
                src: src.clone(),
                active: index == selected,
            })
            .collect(),
    }
}
