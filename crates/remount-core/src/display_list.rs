use std::fmt;
use std::rc::Rc;

use crate::content::{ContentRef, same_content};
use crate::{Color, Rect};

/// One recorded drawing command.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Fill {
        rect: Rect,
        color: Color,
        radius: f32,
    },
    Stroke {
        rect: Rect,
        color: Color,
        width: f32,
        radius: f32,
    },
    Image {
        rect: Rect,
        handle: u64,
    },
    PushClip {
        rect: Rect,
    },
    PopClip,
}

/// A pre-recorded list of drawing commands. Cloning shares the recording.
#[derive(Clone)]
pub struct DisplayList {
    bounds: Rect,
    ops: Rc<[DrawOp]>,
}

impl DisplayList {
    pub fn new(bounds: Rect, ops: Vec<DrawOp>) -> Self {
        Self {
            bounds,
            ops: ops.into(),
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Whether both handles share one recording.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.ops, &other.ops)
    }
}

impl fmt::Debug for DisplayList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayList")
            .field("bounds", &self.bounds)
            .field("ops", &self.ops.len())
            .finish()
    }
}

/// Wraps mounted drawable content so a cached display list can be replayed
/// in place of drawing the content itself.
///
/// Wrappers are pooled. While one wraps a display list, invalidations coming
/// from the wrapped content are swallowed.
#[derive(Default)]
pub struct DisplayListWrapper {
    content: Option<ContentRef>,
    display_list: Option<DisplayList>,
    suppress_invalidations: bool,
    suppressed: u32,
}

impl DisplayListWrapper {
    pub fn new(content: ContentRef, display_list: Option<DisplayList>) -> Self {
        let mut w = Self::default();
        w.set_wrapped(content, display_list);
        w
    }

    /// Points the wrapper at new content. Passing `None` for the list
    /// detaches the cached recording but keeps the wrapper usable.
    pub fn set_wrapped(&mut self, content: ContentRef, display_list: Option<DisplayList>) {
        self.content = Some(content);
        self.display_list = display_list;
    }

    pub fn suppress_invalidations(&mut self, suppress: bool) {
        self.suppress_invalidations = suppress;
    }

    pub fn is_invalidation_suppressed(&self) -> bool {
        self.suppress_invalidations
    }

    /// Reports an invalidation from the wrapped content. Returns whether it
    /// should propagate to the host.
    pub fn invalidate(&mut self) -> bool {
        if self.suppress_invalidations {
            self.suppressed += 1;
            false
        } else {
            true
        }
    }

    /// Invalidations swallowed since the last [`reset`](Self::reset).
    pub fn suppressed_invalidations(&self) -> u32 {
        self.suppressed
    }

    pub fn wrapped_content(&self) -> Option<&ContentRef> {
        self.content.as_ref()
    }

    pub fn display_list(&self) -> Option<&DisplayList> {
        self.display_list.as_ref()
    }

    pub fn wraps(&self, content: &ContentRef) -> bool {
        self.content
            .as_ref()
            .is_some_and(|c| same_content(c, content))
    }

    /// The recorded ops, if a display list is attached.
    pub fn replay(&self) -> impl Iterator<Item = &DrawOp> {
        self.display_list.iter().flat_map(|dl| dl.ops().iter())
    }

    /// Drops every reference so the wrapper can sit in a pool.
    pub fn reset(&mut self) {
        self.content = None;
        self.display_list = None;
        self.suppress_invalidations = false;
        self.suppressed = 0;
    }
}

impl fmt::Debug for DisplayListWrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayListWrapper")
            .field("content", &self.content.as_ref().map(|c| c.describe()))
            .field("display_list", &self.display_list)
            .field("suppress_invalidations", &self.suppress_invalidations)
            .finish()
    }
}
