//! Generates the stimulus ROM and the verification oracle for the noise
//! cancellation block.
//!
//! Usage: `anc_golden [CONFIG_JSON] [OUTPUT_DIR]`. Pass `-` as the config to
//! use the defaults.

use std::env;

use anc_golden::config::GoldenModelConfig;
use anc_golden::golden_model::GoldenModel;
use anc_golden::logging::{debug, info};
use anyhow::Context;

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .format_timestamp_millis()
        .parse_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    let mut args = env::args().skip(1);
    let config = match args.next() {
        Some(path) if path != "-" => GoldenModelConfig::from_json_file(&path)
            .with_context(|| format!("failed to load config {}", path))?,
        _ => GoldenModelConfig::default(),
    };
    let output_dir = args.next().unwrap_or_else(|| ".".into());
    debug!("{:?}", config);

    let model = GoldenModel::new(config).context("invalid config")?;
    info!(
        "sign-error LMS golden model, N = {}, mu = {}, {} samples",
        model.config().taps,
        model.config().mu,
        model.config().num_samples
    );
    let run = model.run()?;

    info!(
        "noise rms {:.5} -> residual rms {:.5} ({:.2} dB reduction)",
        run.primary_noise_rms(),
        run.residual_noise_rms(),
        run.noise_reduction_db()
    );
    info!("final weights {:?}", run.filter.weights);

    run.write_artifacts(&output_dir)
        .with_context(|| format!("failed to write artifacts to {}", output_dir))?;

    Ok(())
}
