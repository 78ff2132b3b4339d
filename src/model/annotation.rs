//! The recursive annotation entity and its chain iterator.

use std::fmt;
use std::iter::FusedIterator;

use super::{AnnotationProperty, AnnotationValue};

/// A metadata statement: a property, a value, and optionally an annotation
/// about this annotation.
///
/// Property and value are fixed at construction. The nested annotation is an
/// owned child attached through [`annotate`](Self::annotate); since the child
/// is moved in, a chain can never loop back on itself.
///
/// Chains may be arbitrarily deep. Drop, clone and equality walk the chain
/// iteratively and never recurse per level.
pub struct Annotation {
    property: AnnotationProperty,
    value: AnnotationValue,
    nested: Option<Box<Annotation>>,
}

impl Annotation {
    pub fn new(property: AnnotationProperty, value: AnnotationValue) -> Self {
        Self {
            property,
            value,
            nested: None,
        }
    }

    /// Attach `other` as the annotation describing this one.
    ///
    /// Replaces and returns any previously attached annotation.
    pub fn annotate(&mut self, other: Annotation) -> Option<Annotation> {
        self.nested
            .replace(Box::new(other))
            .map(|previous| *previous)
    }

    /// Builder form of [`annotate`](Self::annotate).
    pub fn with_annotation(mut self, other: Annotation) -> Self {
        self.annotate(other);
        self
    }

    pub fn property(&self) -> &AnnotationProperty {
        &self.property
    }

    pub fn value(&self) -> &AnnotationValue {
        &self.value
    }

    pub fn nested(&self) -> Option<&Annotation> {
        self.nested.as_deref()
    }

    pub fn nested_mut(&mut self) -> Option<&mut Annotation> {
        self.nested.as_deref_mut()
    }

    /// Detach and return the nested annotation.
    pub fn take_nested(&mut self) -> Option<Annotation> {
        self.nested.take().map(|nested| *nested)
    }

    /// This annotation followed by every nested annotation, outermost first.
    pub fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    /// Number of annotations in the chain, counting `self`.
    pub fn depth(&self) -> usize {
        self.chain().count()
    }

    /// The deepest annotation of the chain (`self` when nothing is nested).
    pub fn innermost(&self) -> &Annotation {
        let mut current = self;
        while let Some(nested) = current.nested() {
            current = nested;
        }
        current
    }
}

impl Drop for Annotation {
    fn drop(&mut self) {
        let mut next = self.nested.take();
        while let Some(mut node) = next {
            next = node.nested.take();
        }
    }
}

impl Clone for Annotation {
    fn clone(&self) -> Self {
        let innermost = self.innermost();
        let mut built = Annotation::new(innermost.property.clone(), innermost.value.clone());
        let outer: Vec<&Annotation> = self.chain().collect();
        for node in outer.into_iter().rev().skip(1) {
            let mut parent = Annotation::new(node.property.clone(), node.value.clone());
            parent.nested = Some(Box::new(built));
            built = parent;
        }
        built
    }
}

impl PartialEq for Annotation {
    fn eq(&self, other: &Self) -> bool {
        let mut left = self.chain();
        let mut right = other.chain();
        loop {
            match (left.next(), right.next()) {
                (Some(a), Some(b)) => {
                    if a.property != b.property || a.value != b.value {
                        return false;
                    }
                }
                (None, None) => return true,
                _ => return false,
            }
        }
    }
}

impl Eq for Annotation {}

impl fmt::Debug for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Annotation")
            .field("property", &self.property)
            .field("value", &self.value)
            .field("nested", &NestedLevels(self.nested()))
            .finish()
    }
}

/// Nested levels printed as one flat list.
struct NestedLevels<'a>(Option<&'a Annotation>);

impl fmt::Debug for NestedLevels<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(first) = self.0 else {
            return f.write_str("None");
        };
        f.debug_list()
            .entries(first.chain().map(Level))
            .finish()
    }
}

struct Level<'a>(&'a Annotation);

impl fmt::Debug for Level<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Annotation")
            .field("property", &self.0.property)
            .field("value", &self.0.value)
            .finish()
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.chain().enumerate() {
            if i > 0 {
                f.write_str(" { ")?;
            }
            write!(f, "{} {}", node.property, node.value)?;
        }
        for _ in 1..self.depth() {
            f.write_str(" }")?;
        }
        Ok(())
    }
}

/// Iterator over an annotation chain. See [`Annotation::chain`].
#[derive(Clone, Debug)]
pub struct Chain<'a> {
    next: Option<&'a Annotation>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Annotation;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.nested();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}
