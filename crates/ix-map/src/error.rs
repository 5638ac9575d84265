use ix_core::LaneId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("lane at position {expected} has id {got}; lane ids must be dense from zero")]
    LaneIdOutOfOrder { expected: usize, got: LaneId },

    #[error("spawn point references unknown lane {0}")]
    UnknownSpawnLane(LaneId),
}

pub type MapResult<T> = Result<T, MapError>;
