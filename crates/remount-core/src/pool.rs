//! Recycling of mount content and display-list wrappers.
//!
//! Mount records never allocate native objects themselves. They borrow them
//! from a [`MountPool`] and hand them back on release. [`RecyclePool`] is the
//! stock implementation: bounded free lists per surface and component type.

use std::collections::HashMap;

use smallvec::SmallVec;

use crate::component::{Behavior, BehaviorKey, MountContext};
use crate::content::ContentRef;
use crate::display_list::{DisplayList, DisplayListWrapper};

/// The pool seam mount records call into.
pub trait MountPool {
    /// Hands out content for `behavior`, reusing a released one if possible.
    fn acquire_content(&mut self, ctx: MountContext, behavior: &dyn Behavior) -> ContentRef;

    /// Takes content back once no record refers to it.
    fn release_content(&mut self, ctx: MountContext, behavior: &dyn Behavior, content: ContentRef);

    /// A wrapper around `(content, display_list)`.
    fn acquire_wrapper(&mut self, content: ContentRef, display_list: DisplayList)
    -> DisplayListWrapper;

    fn release_wrapper(&mut self, wrapper: DisplayListWrapper);
}

#[derive(Clone, Debug)]
pub struct PoolConfig {
    /// Wrappers kept for reuse; extras are dropped.
    pub wrapper_pool_size: usize,
    /// Overrides every behavior's own [`Behavior::pool_size`] when set.
    pub content_pool_size: Option<usize>,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            wrapper_pool_size: 32,
            content_pool_size: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolStats {
    pub content_created: u64,
    pub content_reused: u64,
    pub content_released: u64,
    /// Released content dropped because its free list was full.
    pub content_dropped: u64,
    pub wrappers_created: u64,
    pub wrappers_reused: u64,
    pub wrappers_released: u64,
}

type FreeList = SmallVec<[ContentRef; 4]>;

#[derive(Default)]
pub struct RecyclePool {
    config: PoolConfig,
    content: HashMap<(MountContext, BehaviorKey), FreeList>,
    wrappers: Vec<DisplayListWrapper>,
    stats: PoolStats,
}

impl RecyclePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PoolConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    pub fn stats(&self) -> PoolStats {
        self.stats
    }

    /// Released contents waiting for reuse.
    pub fn pooled_content(&self, ctx: MountContext, key: BehaviorKey) -> usize {
        self.content.get(&(ctx, key)).map_or(0, |l| l.len())
    }

    pub fn pooled_wrappers(&self) -> usize {
        self.wrappers.len()
    }

    /// Forgets every content pooled for a surface that went away.
    pub fn clear_context(&mut self, ctx: MountContext) {
        let before = self.content.len();
        self.content.retain(|(c, _), _| *c != ctx);
        log::debug!(
            "pool: cleared {} free lists for {:?}",
            before - self.content.len(),
            ctx
        );
    }

    fn capacity_for(&self, behavior: &dyn Behavior) -> usize {
        self.config
            .content_pool_size
            .unwrap_or_else(|| behavior.pool_size())
    }
}

impl MountPool for RecyclePool {
    fn acquire_content(&mut self, ctx: MountContext, behavior: &dyn Behavior) -> ContentRef {
        let key = (ctx, behavior.type_key());
        if let Some(content) = self.content.get_mut(&key).and_then(|l| l.pop()) {
            self.stats.content_reused += 1;
            log::trace!("pool: reuse {} for {:?}", behavior.name(), ctx);
            return content;
        }
        self.stats.content_created += 1;
        log::trace!("pool: create {} for {:?}", behavior.name(), ctx);
        behavior.create_content()
    }

    fn release_content(&mut self, ctx: MountContext, behavior: &dyn Behavior, content: ContentRef) {
        self.stats.content_released += 1;
        let cap = self.capacity_for(behavior);
        let list = self.content.entry((ctx, behavior.type_key())).or_default();
        if list.len() < cap {
            list.push(content);
        } else {
            self.stats.content_dropped += 1;
            log::trace!("pool: {} free list full, dropping", behavior.name());
        }
    }

    fn acquire_wrapper(
        &mut self,
        content: ContentRef,
        display_list: DisplayList,
    ) -> DisplayListWrapper {
        match self.wrappers.pop() {
            Some(mut w) => {
                self.stats.wrappers_reused += 1;
                w.set_wrapped(content, Some(display_list));
                w
            }
            None => {
                self.stats.wrappers_created += 1;
                DisplayListWrapper::new(content, Some(display_list))
            }
        }
    }

    fn release_wrapper(&mut self, mut wrapper: DisplayListWrapper) {
        self.stats.wrappers_released += 1;
        wrapper.reset();
        if self.wrappers.len() < self.config.wrapper_pool_size {
            self.wrappers.push(wrapper);
        }
    }
}
