use std::fmt;
use std::rc::Rc;

/// Interactive state a view-like content reports about itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewCapabilities {
    pub clickable: bool,
    pub long_clickable: bool,
    pub focusable: bool,
}

/// Opaque reference to a host container. Copying it does not keep the host
/// alive; the mounting side sets and clears it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostId(pub u64);

impl fmt::Debug for HostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostId({})", self.0)
    }
}

/// A native object that can be mounted: a view, a drawable, or a host.
///
/// Content is described by what it can do rather than by what it is.
/// Drawables keep both defaults.
pub trait MountContent {
    /// Interactive state for view-like content, `None` for plain drawables.
    fn capabilities(&self) -> Option<ViewCapabilities> {
        None
    }

    /// `Some` when this content is itself a host container. Hosts are
    /// recycled by the host that holds them, never by the global pool.
    fn as_host(&self) -> Option<HostId> {
        None
    }

    /// Short label for logs and debug output.
    fn describe(&self) -> &str {
        "content"
    }
}

pub type ContentRef = Rc<dyn MountContent>;

/// Whether `a` and `b` are the same native object.
pub fn same_content(a: &ContentRef, b: &ContentRef) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}
