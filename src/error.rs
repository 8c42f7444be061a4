use crate::frames::error::FrameError;
use crate::map::error::MapError;
use crate::samples::error::SampleError;
use crate::timestamps::error::TimeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageryError {
    #[error(transparent)]
    Samples(#[from] SampleError),

    #[error(transparent)]
    Frame(#[from] FrameError),

    #[error(transparent)]
    Time(#[from] TimeError),

    #[error(transparent)]
    Map(#[from] MapError),
}
