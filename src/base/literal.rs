//! Plain and typed literal values.

use std::fmt;
use std::sync::Arc;

use smol_str::SmolStr;

use super::Iri;
use crate::error::AnnotationError;

/// A literal: either plain (optionally language-tagged) or typed.
///
/// A literal never carries both a language tag and a datatype.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Literal {
    Plain(PlainLiteral),
    Typed(TypedLiteral),
}

impl Literal {
    /// A plain literal without a language tag.
    pub fn plain(text: impl Into<Arc<str>>) -> Self {
        Self::Plain(PlainLiteral {
            text: text.into(),
            language: None,
        })
    }

    /// A language-tagged plain literal. See [`PlainLiteral::new`].
    pub fn lang(text: impl Into<Arc<str>>, language: &str) -> Result<Self, AnnotationError> {
        PlainLiteral::new(text, Some(language)).map(Self::Plain)
    }

    /// A typed literal. See [`TypedLiteral::new`].
    pub fn typed(
        text: impl Into<Arc<str>>,
        datatype: impl Into<Arc<str>>,
    ) -> Result<Self, AnnotationError> {
        TypedLiteral::new(text, datatype).map(Self::Typed)
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Plain(p) => p.text(),
            Self::Typed(t) => t.text(),
        }
    }

    /// Language tag of a plain literal.
    pub fn language(&self) -> Option<&str> {
        match self {
            Self::Plain(p) => p.language(),
            Self::Typed(_) => None,
        }
    }

    /// Datatype of a typed literal.
    pub fn datatype(&self) -> Option<&Iri> {
        match self {
            Self::Plain(_) => None,
            Self::Typed(t) => Some(t.datatype()),
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, Self::Plain(_))
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(p) => match p.language() {
                Some(lang) => write!(f, "{:?}@{}", p.text(), lang),
                None => write!(f, "{:?}", p.text()),
            },
            Self::Typed(t) => write!(f, "{:?}^^{}", t.text(), t.datatype()),
        }
    }
}

/// Text with an optional language tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PlainLiteral {
    text: Arc<str>,
    language: Option<SmolStr>,
}

impl PlainLiteral {
    /// Create a plain literal.
    ///
    /// The language tag is upper-cased here. An empty tag is rejected; pass
    /// `None` for an untagged literal.
    pub fn new(text: impl Into<Arc<str>>, language: Option<&str>) -> Result<Self, AnnotationError> {
        let language = match language {
            Some("") => {
                return Err(AnnotationError::invalid_argument(
                    "language tag must not be empty",
                ));
            }
            Some(tag) => Some(SmolStr::new(tag.to_uppercase())),
            None => None,
        };
        Ok(Self {
            text: text.into(),
            language,
        })
    }

    /// Build a literal keeping the language tag exactly as given.
    ///
    /// Used by the decoder, which preserves document casing.
    pub(crate) fn verbatim(text: impl Into<Arc<str>>, language: Option<SmolStr>) -> Self {
        Self {
            text: text.into(),
            language,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

/// Text with an explicit datatype IRI.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypedLiteral {
    text: Arc<str>,
    datatype: Iri,
}

impl TypedLiteral {
    /// Create a typed literal. The datatype IRI must be non-empty.
    pub fn new(
        text: impl Into<Arc<str>>,
        datatype: impl Into<Arc<str>>,
    ) -> Result<Self, AnnotationError> {
        Ok(Self {
            text: text.into(),
            datatype: Iri::new(datatype)?,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn datatype(&self) -> &Iri {
        &self.datatype
    }
}
