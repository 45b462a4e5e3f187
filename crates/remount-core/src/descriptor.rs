//! Shared, reference-counted auxiliary descriptors.
//!
//! Layout output hands the same [`NodeInfo`](crate::NodeInfo) or
//! [`ViewNodeInfo`](crate::ViewNodeInfo) to every mount record that
//! represents it, instead of deep-copying. Each holder owns exactly one
//! [`Descriptor`] handle:
//!
//! - the producer creates the first handle with [`Descriptor::new`],
//! - every other holder gets its own handle via [`RefCounted::acquire_ref`],
//! - a holder gives its handle up with [`RefCounted::release`] (or by
//!   dropping it).
//!
//! Handles are not `Clone`, and `release` consumes the handle, so the same
//! reference cannot be released twice.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// The acquire/release protocol every shared descriptor follows.
pub trait RefCounted: Sized {
    /// Takes another reference to the same value.
    fn acquire_ref(&self) -> Self;

    /// Gives this reference up. The value is freed with the last one.
    fn release(self);

    /// Number of live references, this one included.
    fn ref_count(&self) -> usize;
}

/// One counted reference to a shared, immutable `T`.
pub struct Descriptor<T> {
    inner: Rc<T>,
}

impl<T> Descriptor<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(value),
        }
    }

    /// Whether `self` and `other` reference the same value.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> RefCounted for Descriptor<T> {
    fn acquire_ref(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }

    fn release(self) {
        drop(self);
    }

    fn ref_count(&self) -> usize {
        Rc::strong_count(&self.inner)
    }
}

impl<T> Deref for Descriptor<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T: fmt::Debug> fmt::Debug for Descriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("refs", &Rc::strong_count(&self.inner))
            .field("value", &*self.inner)
            .finish()
    }
}
