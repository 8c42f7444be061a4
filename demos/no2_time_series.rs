//! demos/no2_time_series.rs
//!
//! Samples hourly tropospheric NO2 columns over Los Angeles, averages them per
//! timestamp and opens the chart in the browser.
//!
//! To run this demo:
//! RUST_LOG=info cargo run --example no2_time_series --features plotting

use imagery_series::{
    Envelope, ImageryError, ImageryService, SeriesChart, ServiceConfig, TimeRange,
    DEFAULT_INPUT_PATTERN,
};

const SERVICE_URL: &str = "https://gis.earthdata.nasa.gov/image/rest/services/C2930763263-LARC_CLOUD/TEMPO_NO2_L3_V03_HOURLY_TROPOSPHERIC_VERTICAL_COLUMN/ImageServer";
const VARIABLE: &str = "NO2_Troposphere";

#[tokio::main]
async fn main() -> Result<(), ImageryError> {
    // Set RUST_LOG=info (or debug) to see requests and dropped samples
    env_logger::init();

    let config = ServiceConfig::builder()
        .service_url(SERVICE_URL)
        .variable(VARIABLE)
        .time_range(TimeRange::parse(
            "2024-05-20 12:00:00",
            "2024-05-21 12:00:00",
            DEFAULT_INPUT_PATTERN,
        )?)
        .build();
    let service = ImageryService::new(config);

    let series = service
        .time_series()
        .envelope(Envelope::wgs84(-118.7, 33.6, -117.6, 34.4))
        .call()
        .await?;

    println!("{}", series.collect()?);

    let points = series.collect_series()?;
    println!("Generating {} chart with {} points...", VARIABLE, points.len());
    SeriesChart::new(VARIABLE, &points)?.show();
    println!("Plot shown in browser.");

    Ok(())
}
