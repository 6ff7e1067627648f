//! Sets of checked exception types kept minimal under the subtype order.

use crate::semantic::TypeRelation;
use caret_common::limits::EXCEPTION_SET_INLINE;
use smallvec::SmallVec;

/// A set of pairwise-unrelated exception types.
///
/// No member is a subtype of another: inserting a type already covered by
/// a member is a no-op, and inserting a supertype evicts the members it
/// covers. The result therefore does not depend on insertion order, and
/// inserting the same type twice is the same as inserting it once.
/// Members keep the order in which they were first added.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckedExceptionSet<T> {
    types: SmallVec<[T; EXCEPTION_SET_INLINE]>,
}

impl<T> Default for CheckedExceptionSet<T> {
    fn default() -> Self {
        Self {
            types: SmallVec::new(),
        }
    }
}

impl<T: Clone + PartialEq> CheckedExceptionSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `ty`. Returns false when a member already covers it.
    pub fn insert<R>(&mut self, ty: T, relation: &R) -> bool
    where
        R: TypeRelation<Type = T> + ?Sized,
    {
        if self
            .types
            .iter()
            .any(|member| relation.is_subtype(&ty, member))
        {
            return false;
        }
        self.types.retain(|member| !relation.is_subtype(member, &ty));
        self.types.push(ty);
        true
    }

    pub fn extend<R, I>(&mut self, types: I, relation: &R)
    where
        R: TypeRelation<Type = T> + ?Sized,
        I: IntoIterator<Item = T>,
    {
        for ty in types {
            self.insert(ty, relation);
        }
    }

    /// Drop every member that is a subtype of `handler`.
    pub fn remove_subtypes_of<R>(&mut self, handler: &T, relation: &R)
    where
        R: TypeRelation<Type = T> + ?Sized,
    {
        self.types
            .retain(|member| !relation.is_subtype(member, handler));
    }

    /// Insert every member of `other`.
    pub fn merge<R>(&mut self, other: Self, relation: &R)
    where
        R: TypeRelation<Type = T> + ?Sized,
    {
        self.extend(other.types, relation);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn contains(&self, ty: &T) -> bool {
        self.types.contains(ty)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.types.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.types
    }
}

impl<T> IntoIterator for CheckedExceptionSet<T> {
    type Item = T;
    type IntoIter = smallvec::IntoIter<[T; EXCEPTION_SET_INLINE]>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a CheckedExceptionSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.iter()
    }
}
