//! # Mount records and recycling
//!
//! Every layout pass re-describes the whole UI, but the native views and
//! drawables behind it are expensive to create. Remount keeps them alive
//! across passes. Four pieces cooperate:
//!
//! - [`MountRecord`] — one mounted element: its component, native content,
//!   host, shared descriptors and behaviour flags.
//! - [`Descriptor<T>`] — reference-counted handle to shared interaction
//!   ([`NodeInfo`]) or view ([`ViewNodeInfo`]) metadata.
//! - [`MountPool`] / [`RecyclePool`] — where content and display-list
//!   wrappers come from and go back to.
//! - [`MountArena`] — slot arena of records addressed by [`MountHandle`].
//!
//! ## Mounting
//!
//! ```rust
//! use std::rc::Rc;
//! use remount_core::*;
//!
//! struct Label;
//! struct LabelDrawable;
//! impl MountContent for LabelDrawable {}
//!
//! impl Behavior for Label {
//!     fn type_key(&self) -> BehaviorKey { BehaviorKey(1) }
//!     fn name(&self) -> &str { "Label" }
//!     fn create_content(&self) -> ContentRef { Rc::new(LabelDrawable) }
//! }
//!
//! let ctx = MountContext(0);
//! let mut pool = RecyclePool::new();
//! let mut arena = MountArena::new();
//!
//! let info = Descriptor::new(NodeInfo::new().content_description("title"));
//! let layout = LayoutOutput::new(1, Rect::new(0.0, 0.0, 100.0, 20.0))
//!     .with_node_info(info.acquire_ref());
//!
//! let label = Component::new(1, Rc::new(Label));
//! let h = arena.mount_new(ctx, label, HostId(0), &layout, &mut pool);
//! assert!(arena.get(h).unwrap().is_mounted());
//! assert_eq!(info.ref_count(), 3); // ours, the layout's, the record's
//!
//! arena.release(h, ctx, &mut pool).unwrap();
//! assert_eq!(info.ref_count(), 2);
//! assert_eq!(pool.pooled_content(ctx, BehaviorKey(1)), 1);
//! ```
//!
//! Everything here runs on the mount thread. Records, descriptors and
//! content are built on `Rc` and are `!Send`.

pub mod accessibility;
pub mod arena;
pub mod component;
pub mod content;
pub mod descriptor;
pub mod display_list;
pub mod error;
pub mod flags;
pub mod geometry;
pub mod layout;
pub mod node_info;
pub mod pool;
pub mod prelude;
pub mod record;

pub use accessibility::*;
pub use arena::*;
pub use component::*;
pub use content::*;
pub use descriptor::*;
pub use display_list::*;
pub use error::*;
pub use flags::*;
pub use geometry::*;
pub use layout::*;
pub use node_info::*;
pub use pool::*;
pub use record::*;
