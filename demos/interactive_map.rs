//! demos/interactive_map.rs
//!
//! Assembles the slider-driven NO2 overlay and replays a few UI events,
//! printing what a map renderer would be asked to draw.
//!
//! To run this demo:
//! RUST_LOG=info cargo run --example interactive_map

use imagery_series::{
    from_epoch_millis, ImageryError, InteractiveMap, LatLon, LayerSettings, MapInteraction,
    ObservationCatalog, ServiceConfig, TimeRange,
};

const SERVICE_URL: &str = "https://gis.earthdata.nasa.gov/image/rest/services/C2930763263-LARC_CLOUD/TEMPO_NO2_L3_V03_HOURLY_TROPOSPHERIC_VERTICAL_COLUMN/ImageServer";

// Hours with published imagery, 2024-05-20 12:00Z .. 17:00Z
const OBSERVATION_TIMES: [i64; 6] = [
    1_716_206_400_000,
    1_716_210_000_000,
    1_716_213_600_000,
    1_716_217_200_000,
    1_716_220_800_000,
    1_716_224_400_000,
];

fn main() -> Result<(), ImageryError> {
    env_logger::init();

    let config = ServiceConfig::builder()
        .service_url(SERVICE_URL)
        .variable("NO2_Troposphere")
        .time_range(TimeRange::new(OBSERVATION_TIMES[0], OBSERVATION_TIMES[5]))
        .build();

    let mut map = InteractiveMap::assemble()
        .config(&config)
        .catalog(ObservationCatalog::new(OBSERVATION_TIMES)?)
        .layer(
            LayerSettings::builder()
                .rendering_rule("NO2_Troposphere_Color")
                .opacity(0.7)
                .build(),
        )
        .center(LatLon(34.05, -118.24))
        .zoom(7)
        .call()?;

    map.slider_mut().subscribe(|change| {
        let label = from_epoch_millis(change.new).unwrap_or_default();
        println!("Slider moved to {label}");
    });

    for ms in [OBSERVATION_TIMES[2], OBSERVATION_TIMES[4]] {
        map.select_time(ms)?;
        let window = map.overlay().time_window();
        println!(
            "Overlay window: {} .. {}",
            from_epoch_millis(window.start_ms)?,
            from_epoch_millis(window.end_ms)?
        );
        println!("Export params: {:?}", map.overlay().export_params());
    }

    map.handle_interaction(MapInteraction::MouseMove(LatLon(34.1, -118.3)));
    println!("{}", map.view().coordinate_label().text());
    map.handle_interaction(MapInteraction::Click(LatLon(34.1, -118.3)));

    Ok(())
}
