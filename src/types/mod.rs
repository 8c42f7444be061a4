pub mod envelope;
pub mod lat_lon;
pub mod sample;
pub mod service_config;
pub mod service_options;
pub mod time_range;
