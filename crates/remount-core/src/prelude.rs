pub use crate::accessibility::ImportantForAccessibility;
pub use crate::arena::{MountArena, MountHandle};
pub use crate::component::{Behavior, BehaviorKey, Component, ComponentId, MountContext};
pub use crate::content::{ContentRef, HostId, MountContent, ViewCapabilities};
pub use crate::descriptor::{Descriptor, RefCounted};
pub use crate::display_list::{DisplayList, DisplayListWrapper, DrawOp};
pub use crate::error::MountError;
pub use crate::flags::MountFlags;
pub use crate::geometry::{Color, Edges, Rect};
pub use crate::layout::LayoutOutput;
pub use crate::node_info::{AccessibilityHook, LayoutDirection, NodeInfo, ViewNodeInfo};
pub use crate::pool::{MountPool, PoolConfig, PoolStats, RecyclePool};
pub use crate::record::{MountParts, MountRecord};
