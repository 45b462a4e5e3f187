use crate::{Descriptor, DisplayList, ImportantForAccessibility, MountFlags, NodeInfo, Rect, ViewNodeInfo};

/// What the layout stage produced for one mountable item.
///
/// Read-only once built. Mount records acquire their own references to the
/// descriptors in here; the output keeps the producer's reference.
#[derive(Debug, Default)]
pub struct LayoutOutput {
    pub id: u64,
    pub bounds: Rect,
    flags: MountFlags,
    node_info: Option<Descriptor<NodeInfo>>,
    view_node_info: Option<Descriptor<ViewNodeInfo>>,
    display_list: Option<DisplayList>,
    important_for_accessibility: ImportantForAccessibility,
}

impl LayoutOutput {
    pub fn new(id: u64, bounds: Rect) -> Self {
        Self {
            id,
            bounds,
            ..Default::default()
        }
    }

    pub fn with_flags(mut self, flags: MountFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_node_info(mut self, info: Descriptor<NodeInfo>) -> Self {
        self.node_info = Some(info);
        self
    }

    pub fn with_view_node_info(mut self, info: Descriptor<ViewNodeInfo>) -> Self {
        self.view_node_info = Some(info);
        self
    }

    pub fn with_display_list(mut self, dl: DisplayList) -> Self {
        self.display_list = Some(dl);
        self
    }

    pub fn with_importance(mut self, i: ImportantForAccessibility) -> Self {
        self.important_for_accessibility = i;
        self
    }

    pub fn flags(&self) -> MountFlags {
        self.flags
    }

    pub fn node_info(&self) -> Option<&Descriptor<NodeInfo>> {
        self.node_info.as_ref()
    }

    pub fn view_node_info(&self) -> Option<&Descriptor<ViewNodeInfo>> {
        self.view_node_info.as_ref()
    }

    pub fn display_list(&self) -> Option<&DisplayList> {
        self.display_list.as_ref()
    }

    pub fn important_for_accessibility(&self) -> ImportantForAccessibility {
        self.important_for_accessibility
    }
}
