//! Namespace prefixes for encoding.
//!
//! [`Prefixes`] is the caller's configuration: an ordered table of known
//! prefixes, declared once on the root `<Annotation>` element.
//! [`NamespaceContext`] lives for exactly one encode call. It answers prefix
//! lookups and mints `q1`, `q2`, ... for namespaces the caller did not
//! register.

use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::{SmolStr, format_smolstr};

use crate::base::namespace::{STANDARD_PREFIXES, is_reserved_prefix};
use crate::error::AnnotationError;

/// Caller-supplied prefix → namespace table.
///
/// Insertion order is preserved and is the order of the `xmlns:` declarations
/// on the root element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Prefixes {
    by_prefix: IndexMap<SmolStr, Arc<str>>,
}

impl Prefixes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with `rdf`, `rdfs`, `owl` and `xsd` registered.
    pub fn standard() -> Self {
        let mut prefixes = Self::new();
        for (prefix, namespace) in STANDARD_PREFIXES {
            prefixes.by_prefix.insert(SmolStr::new(prefix), Arc::from(*namespace));
        }
        prefixes
    }

    /// Register `prefix` for `namespace`, returning the namespace it replaced.
    ///
    /// Re-registering a prefix keeps its original position.
    pub fn insert(
        &mut self,
        prefix: impl Into<SmolStr>,
        namespace: impl Into<Arc<str>>,
    ) -> Result<Option<Arc<str>>, AnnotationError> {
        let prefix = prefix.into();
        let namespace = namespace.into();
        validate_prefix(&prefix)?;
        if namespace.is_empty() {
            return Err(AnnotationError::invalid_argument(format!(
                "namespace for prefix `{prefix}` must not be empty"
            )));
        }
        Ok(self.by_prefix.insert(prefix, namespace))
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(
        mut self,
        prefix: impl Into<SmolStr>,
        namespace: impl Into<Arc<str>>,
    ) -> Result<Self, AnnotationError> {
        self.insert(prefix, namespace)?;
        Ok(self)
    }

    /// Namespace bound to `prefix`.
    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.by_prefix.get(prefix).map(|ns| ns.as_ref())
    }

    /// First registered prefix bound to `namespace`.
    pub fn prefix_for(&self, namespace: &str) -> Option<&str> {
        self.iter()
            .find(|(_, ns)| *ns == namespace)
            .map(|(prefix, _)| prefix)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.by_prefix
            .iter()
            .map(|(prefix, ns)| (prefix.as_str(), ns.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.by_prefix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_prefix.is_empty()
    }
}

/// Prefixes must be usable as `xmlns:{prefix}` and inside `prefix:local`.
fn validate_prefix(prefix: &str) -> Result<(), AnnotationError> {
    let mut chars = prefix.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_');
    let valid_rest = chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if !valid_start || !valid_rest {
        return Err(AnnotationError::invalid_argument(format!(
            "`{prefix}` is not a valid namespace prefix"
        )));
    }
    if is_reserved_prefix(prefix) {
        return Err(AnnotationError::invalid_argument(format!(
            "prefix `{prefix}` is reserved"
        )));
    }
    Ok(())
}

/// How a namespace is referenced from an abbreviated value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PrefixBinding<'a> {
    /// Registered prefix, declared on the root element.
    Known(&'a str),
    /// Freshly minted prefix that must be declared on the element using it.
    Minted(SmolStr),
}

impl PrefixBinding<'_> {
    pub fn prefix(&self) -> &str {
        match self {
            Self::Known(prefix) => prefix,
            Self::Minted(prefix) => prefix,
        }
    }

    pub fn is_minted(&self) -> bool {
        matches!(self, Self::Minted(_))
    }
}

/// Prefix resolution state for a single encode call.
#[derive(Debug)]
pub struct NamespaceContext<'a> {
    known: &'a Prefixes,
    by_namespace: FxHashMap<&'a str, &'a str>,
    minted: u32,
}

impl<'a> NamespaceContext<'a> {
    pub fn new(known: &'a Prefixes) -> Self {
        let mut by_namespace = FxHashMap::default();
        for (prefix, namespace) in known.iter() {
            by_namespace.entry(namespace).or_insert(prefix);
        }
        Self {
            known,
            by_namespace,
            minted: 0,
        }
    }

    /// `(prefix, namespace)` pairs to declare on the root element.
    pub fn root_declarations(&self) -> impl Iterator<Item = (&'a str, &'a str)> + use<'a> {
        self.known.iter()
    }

    /// Prefix for an abbreviated property. Only registered namespaces qualify.
    pub fn resolve_for_property(&self, namespace: &str) -> Result<&'a str, AnnotationError> {
        self.by_namespace
            .get(namespace)
            .copied()
            .ok_or_else(|| AnnotationError::UnboundNamespace(namespace.to_string()))
    }

    /// Prefix for an abbreviated value, minting a new one when unregistered.
    ///
    /// Minting is not deduplicated: every call for an unregistered namespace
    /// produces the next `q{N}`.
    pub fn resolve_for_value(&mut self, namespace: &str) -> PrefixBinding<'a> {
        if let Some(prefix) = self.by_namespace.get(namespace).copied() {
            return PrefixBinding::Known(prefix);
        }
        self.minted += 1;
        let prefix = format_smolstr!("q{}", self.minted);
        tracing::trace!(%prefix, namespace, "minted namespace prefix");
        PrefixBinding::Minted(prefix)
    }

    /// Number of prefixes minted so far.
    pub fn minted_count(&self) -> u32 {
        self.minted
    }
}
