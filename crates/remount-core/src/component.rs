use std::fmt;
use std::rc::Rc;

use crate::content::ContentRef;

pub type ComponentId = u64;

/// Pool key for a component type. Two components with the same key can
/// share mount content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BehaviorKey(pub u32);

/// Per-type behaviour shared by every instance of a component.
pub trait Behavior {
    fn type_key(&self) -> BehaviorKey;

    fn name(&self) -> &str;

    /// Whether the component provides its own accessibility implementation.
    fn implements_accessibility(&self) -> bool {
        false
    }

    /// How many released contents of this type the pool keeps around.
    fn pool_size(&self) -> usize {
        3
    }

    /// Builds fresh mount content when the pool has none to hand out.
    fn create_content(&self) -> ContentRef;
}

/// The logical element a mount record represents.
#[derive(Clone)]
pub struct Component {
    pub id: ComponentId,
    behavior: Rc<dyn Behavior>,
}

impl Component {
    pub fn new(id: ComponentId, behavior: Rc<dyn Behavior>) -> Self {
        Self { id, behavior }
    }

    pub fn behavior(&self) -> &dyn Behavior {
        &*self.behavior
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("id", &self.id)
            .field("behavior", &self.behavior.name())
            .field("type_key", &self.behavior.type_key())
            .finish()
    }
}

/// Identifies the surface (window, activity) that owns a set of pools.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MountContext(pub u32);
