//! The mount record: one mounted visual element.
//!
//! A record is either *pooled* (every field cleared, no descriptor
//! references held) or *mounted* (component and content set, flags
//! populated). It cycles `init -> [bind/unbind]* -> release -> init -> ...`
//! for as long as its slot lives. All calls for one record happen on the
//! mount thread; nothing here locks.

use std::fmt;

use crate::component::{Component, MountContext};
use crate::content::{ContentRef, HostId};
use crate::descriptor::{Descriptor, RefCounted};
use crate::display_list::{DisplayList, DisplayListWrapper};
use crate::layout::LayoutOutput;
use crate::node_info::{NodeInfo, ViewNodeInfo};
use crate::pool::MountPool;
use crate::{ImportantForAccessibility, MountFlags};

/// Everything the canonical initializer stores.
///
/// Descriptors are borrowed: the record takes its own reference.
pub struct MountParts<'a> {
    pub component: Component,
    pub host: HostId,
    pub content: ContentRef,
    pub node_info: Option<&'a Descriptor<NodeInfo>>,
    pub view_node_info: Option<&'a Descriptor<ViewNodeInfo>>,
    pub wrapper: Option<DisplayListWrapper>,
    pub flags: MountFlags,
    pub important_for_accessibility: ImportantForAccessibility,
}

#[derive(Default)]
pub struct MountRecord {
    component: Option<Component>,
    host: Option<HostId>,
    content: Option<ContentRef>,
    node_info: Option<Descriptor<NodeInfo>>,
    view_node_info: Option<Descriptor<ViewNodeInfo>>,
    display_list_wrapper: Option<DisplayListWrapper>,
    flags: MountFlags,
    important_for_accessibility: ImportantForAccessibility,
    is_bound: bool,
}

impl MountRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-initializes from another mounted record plus fresh layout output.
    ///
    /// Host, content and display-list wrapper move from `source` into
    /// `self`. `source` ends up pooled; its content is not handed back to the
    /// pool since `self` now owns it.
    pub fn init_from(
        &mut self,
        component: Component,
        source: &mut MountRecord,
        layout: &LayoutOutput,
        pool: &mut dyn MountPool,
    ) {
        let (Some(host), Some(content)) = (source.host, source.content.take()) else {
            debug_assert!(false, "init_from: source record is not mounted");
            log::warn!("init_from: source record is not mounted; ignoring");
            return;
        };
        let wrapper = source.display_list_wrapper.take();
        source.clear();
        self.init(component, host, content, layout, wrapper, pool);
    }

    /// Initializes from layout output, reusing `existing_wrapper` if given.
    ///
    /// A wrapper this record already holds is reused when none is passed in,
    /// and returned to the pool when one is.
    pub fn init(
        &mut self,
        component: Component,
        host: HostId,
        content: ContentRef,
        layout: &LayoutOutput,
        existing_wrapper: Option<DisplayListWrapper>,
        pool: &mut dyn MountPool,
    ) {
        let existing = match (existing_wrapper, self.display_list_wrapper.take()) {
            (Some(passed), Some(own)) => {
                pool.release_wrapper(own);
                Some(passed)
            }
            (passed, own) => passed.or(own),
        };
        let wrapper =
            resolve_display_list_wrapper(pool, &content, layout.display_list().cloned(), existing);

        self.init_with(MountParts {
            component,
            host,
            content,
            node_info: layout.node_info(),
            view_node_info: layout.view_node_info(),
            wrapper,
            flags: layout.flags(),
            important_for_accessibility: layout.important_for_accessibility(),
        });
    }

    /// Re-initializes in place with new layout output, keeping content, host
    /// and cached wrapper.
    pub fn remount(
        &mut self,
        component: Component,
        layout: &LayoutOutput,
        pool: &mut dyn MountPool,
    ) {
        let (Some(host), Some(content)) = (self.host, self.content.clone()) else {
            debug_assert!(false, "remount: record is not mounted");
            log::warn!("remount: record is not mounted; ignoring");
            return;
        };
        self.init(component, host, content, layout, None, pool);
    }

    /// The canonical initializer.
    ///
    /// Descriptor references held from a previous init are released before
    /// the new ones are acquired, so calling this repeatedly never leaks a
    /// reference. View capability bits are recomputed from `content` every
    /// time.
    pub fn init_with(&mut self, parts: MountParts<'_>) {
        if let Some(old) = self.node_info.take() {
            old.release();
        }
        if let Some(old) = self.view_node_info.take() {
            old.release();
        }
        self.node_info = parts.node_info.map(|info| info.acquire_ref());
        self.view_node_info = parts.view_node_info.map(|info| info.acquire_ref());

        if self.display_list_wrapper.is_some() {
            log::debug!("init: dropping a display-list wrapper that was not pooled");
        }

        let mut flags = parts.flags;
        if let Some(caps) = parts.content.capabilities() {
            flags |= MountFlags::from_capabilities(caps);
        }

        self.component = Some(parts.component);
        self.host = Some(parts.host);
        self.content = Some(parts.content);
        self.display_list_wrapper = parts.wrapper;
        self.flags = flags;
        self.important_for_accessibility = parts.important_for_accessibility;
    }

    /// Returns the record to the pooled state.
    ///
    /// Content goes back to `pool` under the component's type unless it is a
    /// host container; hosts are recycled by whichever host holds them. Must
    /// be called once per mount cycle.
    pub fn release(&mut self, ctx: MountContext, pool: &mut dyn MountPool) {
        debug_assert!(self.is_mounted(), "release of a mount record that is not mounted");
        let Some(component) = self.component.take() else {
            log::warn!("release: record is already pooled; ignoring");
            return;
        };

        if let Some(content) = self.content.take() {
            if content.as_host().is_none() {
                pool.release_content(ctx, component.behavior(), content);
            } else {
                log::trace!("release: {:?} is a host, skipping pool", content.as_host());
            }
        }

        if let Some(wrapper) = self.display_list_wrapper.take() {
            pool.release_wrapper(wrapper);
        }

        self.clear();
    }

    /// Releases descriptor references and resets every field.
    fn clear(&mut self) {
        if let Some(info) = self.node_info.take() {
            info.release();
        }
        if let Some(info) = self.view_node_info.take() {
            info.release();
        }
        *self = Self::default();
    }

    /// Whether accessibility services should see this item.
    pub fn is_accessible(&self) -> bool {
        let Some(component) = &self.component else {
            return false;
        };
        if self.important_for_accessibility == ImportantForAccessibility::No {
            return false;
        }
        self.node_info
            .as_ref()
            .is_some_and(|info| info.has_accessibility_handlers())
            || component.behavior().implements_accessibility()
    }

    pub fn is_mounted(&self) -> bool {
        self.component.is_some() && self.content.is_some()
    }

    pub fn component(&self) -> Option<&Component> {
        self.component.as_ref()
    }

    pub fn host(&self) -> Option<HostId> {
        self.host
    }

    pub fn content(&self) -> Option<&ContentRef> {
        self.content.as_ref()
    }

    pub fn flags(&self) -> MountFlags {
        self.flags
    }

    pub fn important_for_accessibility(&self) -> ImportantForAccessibility {
        self.important_for_accessibility
    }

    pub fn node_info(&self) -> Option<&Descriptor<NodeInfo>> {
        self.node_info.as_ref()
    }

    pub fn view_node_info(&self) -> Option<&Descriptor<ViewNodeInfo>> {
        self.view_node_info.as_ref()
    }

    pub fn display_list_wrapper(&self) -> Option<&DisplayListWrapper> {
        self.display_list_wrapper.as_ref()
    }

    pub fn display_list_wrapper_mut(&mut self) -> Option<&mut DisplayListWrapper> {
        self.display_list_wrapper.as_mut()
    }

    /// A bound record is mounted and currently active on screen.
    pub fn is_bound(&self) -> bool {
        self.is_bound
    }

    /// Pairing of bind/unbind calls is up to the caller.
    pub fn set_is_bound(&mut self, bound: bool) {
        self.is_bound = bound;
    }
}

/// Picks the wrapper a freshly initialized record should hold.
///
/// | display list | existing | result                                   |
/// |--------------|----------|------------------------------------------|
/// | some         | some     | existing, rewrapped, invalidations muted |
/// | some         | none     | new from pool, invalidations muted       |
/// | none         | some     | existing, rewrapped with no list         |
/// | none         | none     | none                                     |
fn resolve_display_list_wrapper(
    pool: &mut dyn MountPool,
    content: &ContentRef,
    display_list: Option<DisplayList>,
    existing: Option<DisplayListWrapper>,
) -> Option<DisplayListWrapper> {
    match (display_list, existing) {
        (Some(dl), Some(mut w)) => {
            w.set_wrapped(content.clone(), Some(dl));
            w.suppress_invalidations(true);
            Some(w)
        }
        (Some(dl), None) => {
            let mut w = pool.acquire_wrapper(content.clone(), dl);
            w.suppress_invalidations(true);
            Some(w)
        }
        (None, Some(mut w)) => {
            w.set_wrapped(content.clone(), None);
            Some(w)
        }
        (None, None) => None,
    }
}

impl fmt::Debug for MountRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MountRecord")
            .field("component", &self.component)
            .field("host", &self.host)
            .field("content", &self.content.as_ref().map(|c| c.describe()))
            .field("node_info", &self.node_info.is_some())
            .field("view_node_info", &self.view_node_info.is_some())
            .field("display_list_wrapper", &self.display_list_wrapper)
            .field("flags", &self.flags)
            .field("important_for_accessibility", &self.important_for_accessibility)
            .field("is_bound", &self.is_bound)
            .finish()
    }
}
