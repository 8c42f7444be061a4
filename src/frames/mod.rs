pub mod error;
pub mod sample_frame;
pub mod series_frame;
