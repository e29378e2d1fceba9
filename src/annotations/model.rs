//! Ordered collection of committed annotations

use image::RgbaImage;

use crate::domain::{Annotation, Point};

/// Append-only list of annotations, drawn in insertion order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnnotationModel {
    annotations: Vec<Annotation>,
}

impl AnnotationModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an annotation on top of the existing ones
    pub fn push(&mut self, annotation: Annotation) {
        log::debug!("Annotation committed: {:?}", annotation.bounds());
        self.annotations.push(annotation);
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    pub fn last(&self) -> Option<&Annotation> {
        self.annotations.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Annotation> {
        self.annotations.iter()
    }

    pub fn as_slice(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Topmost annotation whose bounds contain `p`
    pub fn hit_test(&self, p: Point) -> Option<&Annotation> {
        self.annotations.iter().rev().find(|a| a.contains(p))
    }

    /// Draw every annotation onto `img`, oldest first
    pub fn draw_all(&self, img: &mut RgbaImage) {
        crate::render::image::draw_annotations_in_order(img, &self.annotations);
    }
}

impl<'a> IntoIterator for &'a AnnotationModel {
    type Item = &'a Annotation;
    type IntoIter = std::slice::Iter<'a, Annotation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
