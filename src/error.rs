use thiserror::Error;

use crate::model::Group;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    PreconditionViolation,
    DegenerateGroup,
    InvalidParameter,
}

/// Failures of the resampling primitives. Nothing here is transient.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResampleError {
    #[error("group sizes {n_obs_a} + {n_obs_b} do not match {len} pooled observations")]
    SizeMismatch {
        n_obs_a: usize,
        n_obs_b: usize,
        len: usize,
    },

    #[error("group {0} has no observations")]
    EmptyGroup(Group),

    #[error("group {group} has {distinct} distinct categories, no category at rank {rank}")]
    MissingCategoryRank {
        group: Group,
        rank: usize,
        distinct: usize,
    },

    #[error("sample {0} has no observations")]
    EmptySample(&'static str),

    #[error("alpha must lie strictly between 0 and 1, got {0}")]
    InvalidAlpha(f64),

    #[error("n_bootstrap must be at least 1, got {0}")]
    InvalidResampleCount(usize),
}

impl ResampleError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SizeMismatch { .. } => ErrorKind::PreconditionViolation,
            Self::EmptyGroup(_) | Self::MissingCategoryRank { .. } | Self::EmptySample(_) => {
                ErrorKind::DegenerateGroup
            }
            Self::InvalidAlpha(_) | Self::InvalidResampleCount(_) => ErrorKind::InvalidParameter,
        }
    }
}
