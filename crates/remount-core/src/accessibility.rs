/// Whether a mounted item should be reported to accessibility services.
///
/// Mirrors the host platform's tri-state: `Auto` lets the platform decide,
/// `Yes`/`No` force it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ImportantForAccessibility {
    #[default]
    Auto,
    Yes,
    No,
}

impl ImportantForAccessibility {
    /// Converts the platform's integer code. Unknown codes fall back to `Auto`.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            1 => Self::Yes,
            2 => Self::No,
            _ => Self::Auto,
        }
    }

    pub fn raw(self) -> i32 {
        match self {
            Self::Auto => 0,
            Self::Yes => 1,
            Self::No => 2,
        }
    }
}
