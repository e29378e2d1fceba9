//! Layered canvas buffers for the annotation editor
//!
//! `base` is the cropped capture and is never written. `overlay` is `base`
//! with every committed annotation drawn on it, and `preview` is `overlay`
//! plus the one annotation currently being dragged out.

use image::RgbaImage;

use crate::annotations::AnnotationModel;
use crate::domain::Annotation;

#[derive(Clone, Debug)]
pub struct Compositor {
    base: RgbaImage,
    overlay: RgbaImage,
    preview: RgbaImage,
    in_progress: Option<Annotation>,
    model: AnnotationModel,
}

impl Compositor {
    pub fn new(base: RgbaImage) -> Self {
        let overlay = base.clone();
        let preview = base.clone();
        Self {
            base,
            overlay,
            preview,
            in_progress: None,
            model: AnnotationModel::new(),
        }
    }

    pub fn base(&self) -> &RgbaImage {
        &self.base
    }

    /// Base plus committed annotations
    pub fn overlay(&self) -> &RgbaImage {
        &self.overlay
    }

    /// Overlay plus the in-progress annotation, if any
    pub fn preview(&self) -> &RgbaImage {
        &self.preview
    }

    /// The buffer a host should show right now
    pub fn display(&self) -> &RgbaImage {
        if self.in_progress.is_some() {
            &self.preview
        } else {
            &self.overlay
        }
    }

    pub fn annotations(&self) -> &AnnotationModel {
        &self.model
    }

    pub fn in_progress(&self) -> Option<&Annotation> {
        self.in_progress.as_ref()
    }

    pub fn is_previewing(&self) -> bool {
        self.in_progress.is_some()
    }

    /// Start previewing `annotation`, replacing any earlier preview
    pub fn begin_preview(&mut self, annotation: Annotation) {
        log::debug!("Preview started: {:?}", annotation.bounds());
        self.update_preview(annotation);
    }

    /// Show `annotation` on top of the overlay without committing it
    ///
    /// Each call replaces the previous preview, so nothing accumulates while
    /// the pointer moves.
    pub fn update_preview(&mut self, annotation: Annotation) {
        self.preview.copy_from_slice(&self.overlay);
        annotation.draw(&mut self.preview);
        self.in_progress = Some(annotation);
    }

    /// Drop the in-progress annotation
    pub fn cancel_preview(&mut self) {
        if self.in_progress.take().is_some() {
            self.preview.copy_from_slice(&self.overlay);
        }
    }

    /// Append `annotation` to the model and redraw the overlay
    pub fn commit(&mut self, annotation: Annotation) {
        self.in_progress = None;
        self.model.push(annotation);
        self.rebuild_overlay();
    }

    /// Commit whatever is being previewed; returns false if nothing was
    pub fn commit_preview(&mut self) -> bool {
        match self.in_progress.take() {
            Some(annotation) => {
                self.commit(annotation);
                true
            }
            None => false,
        }
    }

    /// Redraw the overlay from `base` and the model
    pub fn rebuild_overlay(&mut self) {
        self.overlay.copy_from_slice(&self.base);
        self.model.draw_all(&mut self.overlay);
        self.preview.copy_from_slice(&self.overlay);
    }

    /// The flattened result; a pending preview is discarded, not committed
    pub fn render_final(&mut self) -> &RgbaImage {
        self.cancel_preview();
        &self.overlay
    }

    /// Consume the compositor and return the flattened result
    pub fn into_final(mut self) -> RgbaImage {
        self.cancel_preview();
        self.overlay
    }
}
