use thiserror::Error;

use crate::arena::MountHandle;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MountError {
    #[error("mount handle {0:?} does not refer to a live record")]
    StaleHandle(MountHandle),
    #[error("mount record {0:?} is pooled, not mounted")]
    NotMounted(MountHandle),
}
