//! Common trait for annotation interchange formats.

use crate::error::AnnotationError;
use crate::model::Annotation;

/// Trait for annotation interchange formats.
///
/// Implementations move a single [`Annotation`] tree (with its nested chain)
/// between memory and an external byte representation. Each call is
/// independent: no prefix or counter state survives from one call to the
/// next.
pub trait AnnotationFormat: Send + Sync {
    /// Human-readable name of the format.
    fn name(&self) -> &'static str;

    /// File extension(s) for this format.
    fn extensions(&self) -> &'static [&'static str];

    /// MIME type for this format.
    fn mime_type(&self) -> &'static str;

    /// Read an annotation from bytes.
    fn read(&self, input: &[u8]) -> Result<Annotation, AnnotationError>;

    /// Write an annotation to bytes.
    fn write(&self, annotation: &Annotation) -> Result<Vec<u8>, AnnotationError>;

    /// Validate that the input looks like this format.
    ///
    /// This is a quick check that doesn't fully parse the content.
    fn validate(&self, input: &[u8]) -> Result<(), AnnotationError> {
        let _ = input;
        Ok(())
    }
}
