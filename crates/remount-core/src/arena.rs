//! Slot arena of mount records.
//!
//! Records live in a [`SlotMap`]; freed slots are reused by the next
//! `acquire`, so mounting does not allocate once the arena has warmed up.
//! Handles carry a generation, so a handle kept past `release` is reported
//! as [`MountError::StaleHandle`] instead of aliasing the slot's next tenant.

use slotmap::SlotMap;

use crate::component::{Component, MountContext};
use crate::content::{ContentRef, HostId};
use crate::error::MountError;
use crate::layout::LayoutOutput;
use crate::pool::MountPool;
use crate::record::MountRecord;

slotmap::new_key_type! {
    /// Handle to a record in a [`MountArena`].
    pub struct MountHandle;
}

#[derive(Default)]
pub struct MountArena {
    records: SlotMap<MountHandle, MountRecord>,
}

impl MountArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: SlotMap::with_capacity_and_key(capacity),
        }
    }

    /// A pooled record in a fresh or recycled slot.
    pub fn acquire(&mut self) -> MountHandle {
        self.records.insert(MountRecord::default())
    }

    /// Acquires a record and initializes it with `content`.
    pub fn mount(
        &mut self,
        component: Component,
        host: HostId,
        content: ContentRef,
        layout: &LayoutOutput,
        pool: &mut dyn MountPool,
    ) -> MountHandle {
        let handle = self.acquire();
        self.records[handle].init(component, host, content, layout, None, pool);
        log::debug!("arena: mounted {:?} into {:?}", handle, host);
        handle
    }

    /// Like [`mount`](Self::mount), with content taken from `pool`.
    pub fn mount_new(
        &mut self,
        ctx: MountContext,
        component: Component,
        host: HostId,
        layout: &LayoutOutput,
        pool: &mut dyn MountPool,
    ) -> MountHandle {
        let content = pool.acquire_content(ctx, component.behavior());
        self.mount(component, host, content, layout, pool)
    }

    /// Re-initializes a mounted record in place with new layout output.
    pub fn remount(
        &mut self,
        handle: MountHandle,
        component: Component,
        layout: &LayoutOutput,
        pool: &mut dyn MountPool,
    ) -> Result<(), MountError> {
        let record = self.mounted_mut(handle)?;
        record.remount(component, layout, pool);
        Ok(())
    }

    /// Moves the native content of `from` into a new record for
    /// `component`. The old slot is freed; its content stays mounted.
    pub fn transfer(
        &mut self,
        from: MountHandle,
        component: Component,
        layout: &LayoutOutput,
        pool: &mut dyn MountPool,
    ) -> Result<MountHandle, MountError> {
        self.mounted_mut(from)?;
        let Some(mut source) = self.records.remove(from) else {
            return Err(MountError::StaleHandle(from));
        };
        let mut record = MountRecord::default();
        record.init_from(component, &mut source, layout, pool);
        let handle = self.records.insert(record);
        log::debug!("arena: transferred {:?} -> {:?}", from, handle);
        Ok(handle)
    }

    /// Releases the record and frees its slot.
    pub fn release(
        &mut self,
        handle: MountHandle,
        ctx: MountContext,
        pool: &mut dyn MountPool,
    ) -> Result<(), MountError> {
        self.mounted_mut(handle)?.release(ctx, pool);
        self.records.remove(handle);
        log::debug!("arena: released {:?}", handle);
        Ok(())
    }

    /// Releases every mounted record, e.g. when the surface is torn down.
    pub fn release_all(&mut self, ctx: MountContext, pool: &mut dyn MountPool) -> usize {
        let mut released = 0;
        for (_, mut record) in self.records.drain() {
            if record.is_mounted() {
                record.release(ctx, pool);
                released += 1;
            }
        }
        log::debug!("arena: released {} records for {:?}", released, ctx);
        released
    }

    pub fn get(&self, handle: MountHandle) -> Result<&MountRecord, MountError> {
        self.records
            .get(handle)
            .ok_or(MountError::StaleHandle(handle))
    }

    pub fn get_mut(&mut self, handle: MountHandle) -> Result<&mut MountRecord, MountError> {
        self.records
            .get_mut(handle)
            .ok_or(MountError::StaleHandle(handle))
    }

    pub fn set_bound(&mut self, handle: MountHandle, bound: bool) -> Result<(), MountError> {
        self.mounted_mut(handle)?.set_is_bound(bound);
        Ok(())
    }

    pub fn contains(&self, handle: MountHandle) -> bool {
        self.records.contains_key(handle)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (MountHandle, &MountRecord)> {
        self.records.iter()
    }

    fn mounted_mut(&mut self, handle: MountHandle) -> Result<&mut MountRecord, MountError> {
        let record = self.get_mut(handle)?;
        if record.is_mounted() {
            Ok(record)
        } else {
            Err(MountError::NotMounted(handle))
        }
    }
}
