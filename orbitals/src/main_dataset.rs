//! Generate and persist the avoided-crossing dataset.
//!
//! Usage: crossing_dataset [crossing_data.json]

use orbitals::constants::CROSSING_SAMPLES;
use orbitals::dataset_gen;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "crossing_data.json".to_string());
    let dataset = dataset_gen::synthesize();
    dataset.save(Path::new(&path))?;
    log::info!("wrote {} bond-length samples to {}", CROSSING_SAMPLES, path);
    Ok(())
}
