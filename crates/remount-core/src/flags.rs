use crate::content::ViewCapabilities;

bitflags::bitflags! {
    /// Behaviour bits of a mounted item.
    ///
    /// The layout stage fills in what it knows (e.g. duplicate parent state);
    /// the `VIEW_*` bits are OR'd in at mount time from the content's own
    /// interactive state. Unnamed bits coming from the layout stage are kept
    /// as-is, so hosts can stash their own markers above bit 3.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MountFlags: u32 {
        const DUPLICATE_PARENT_STATE = 1 << 0;
        const VIEW_CLICKABLE = 1 << 1;
        const VIEW_LONG_CLICKABLE = 1 << 2;
        const VIEW_FOCUSABLE = 1 << 3;
    }
}

impl MountFlags {
    /// Flags from the raw integer a layout stage hands over.
    pub const fn from_raw(raw: u32) -> Self {
        Self::from_bits_retain(raw)
    }

    /// Bits derived from a view's clickable / long-clickable / focusable state.
    pub const fn from_capabilities(caps: ViewCapabilities) -> Self {
        let mut bits = 0;
        if caps.clickable {
            bits |= Self::VIEW_CLICKABLE.bits();
        }
        if caps.long_clickable {
            bits |= Self::VIEW_LONG_CLICKABLE.bits();
        }
        if caps.focusable {
            bits |= Self::VIEW_FOCUSABLE.bits();
        }
        Self::from_bits_retain(bits)
    }

    pub const fn is_duplicate_parent_state(self) -> bool {
        self.contains(Self::DUPLICATE_PARENT_STATE)
    }

    /// Whether the view behind this item is clickable.
    pub const fn is_view_clickable(self) -> bool {
        self.contains(Self::VIEW_CLICKABLE)
    }

    /// Whether the view behind this item is long clickable.
    pub const fn is_view_long_clickable(self) -> bool {
        self.contains(Self::VIEW_LONG_CLICKABLE)
    }

    /// Whether the view behind this item is focusable.
    pub const fn is_view_focusable(self) -> bool {
        self.contains(Self::VIEW_FOCUSABLE)
    }
}
