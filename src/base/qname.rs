//! Namespace-qualified names.

use std::fmt;
use std::sync::Arc;

use smol_str::SmolStr;

use crate::error::AnnotationError;

/// A namespace URI paired with a local name.
///
/// The namespace is the full URI, not a document prefix: prefixes are a
/// serialization detail chosen by the encoder. Equality is structural and no
/// case or whitespace normalization is applied.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualifiedName {
    namespace: Arc<str>,
    local_name: SmolStr,
}

impl QualifiedName {
    /// Create a qualified name. Both parts must be non-empty.
    pub fn new(
        namespace: impl Into<Arc<str>>,
        local_name: impl Into<SmolStr>,
    ) -> Result<Self, AnnotationError> {
        let namespace = namespace.into();
        let local_name = local_name.into();
        if namespace.is_empty() {
            return Err(AnnotationError::invalid_argument(
                "qualified name namespace must not be empty",
            ));
        }
        if local_name.is_empty() {
            return Err(AnnotationError::invalid_argument(
                "qualified name local name must not be empty",
            ));
        }
        Ok(Self {
            namespace,
            local_name,
        })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// The full IRI obtained by concatenating namespace and local name.
    pub fn expand(&self) -> String {
        format!("{}{}", self.namespace, self.local_name)
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.local_name)
    }
}
