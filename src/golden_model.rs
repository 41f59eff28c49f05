//! Runs the full reference model: scenario generation, the floating point
//! filter that serves as the verification oracle, and the fixed point stimulus
//! table. The filter and the table are built independently from the same
//! `x`/`d` sequences.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::common::F64SliceExt;
use crate::config::GoldenModelConfig;
use crate::error::AncResult;
use crate::fixed_point::{pack, PackedWord};
use crate::logging::{debug, info};
use crate::oracle::VerificationOracle;
use crate::rom::{write_hex_image, write_verilog_rom, RomOptions};
use crate::sign_lms::{self, FilterOutput};
use crate::signal::NoiseCancellationSignals;

pub struct GoldenModel {
    config: GoldenModelConfig,
}

/// Everything produced by one run.
#[derive(Debug, Clone, PartialEq)]
pub struct GoldenRun {
    pub signals: NoiseCancellationSignals,
    pub filter: FilterOutput,
    pub table: Vec<PackedWord>,
    pub mu: f64,
    pub scale: f64,
    /// Name of the Verilog module, also the stem of the ROM files.
    pub module_name: String,
}

/// Paths of the files written by [`GoldenRun::write_artifacts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub verilog: PathBuf,
    pub hex: PathBuf,
    pub oracle: PathBuf,
}

impl GoldenModel {
    pub fn new(config: GoldenModelConfig) -> AncResult<Self> {
        config.validate()?;
        Ok(GoldenModel { config })
    }

    pub fn config(&self) -> &GoldenModelConfig {
        &self.config
    }

    pub fn run(&self) -> AncResult<GoldenRun> {
        let config = &self.config;
        let signals =
            NoiseCancellationSignals::from_options(config.num_samples, config.seed, &config.signal)?;

        debug!(
            "running sign-error LMS, N = {}, mu = {}",
            config.taps, config.mu
        );
        let filter = sign_lms::run(&signals.x, &signals.d, config.taps, config.mu)?;

        let scale = config.scale();
        debug!("packing {} words, scale {}", signals.len(), scale);
        let table = pack(&signals.x, &signals.d, scale)?;

        Ok(GoldenRun {
            signals,
            filter,
            table,
            mu: config.mu,
            scale,
            module_name: config.rom_module_name.clone(),
        })
    }
}

impl GoldenRun {
    pub fn oracle(&self) -> VerificationOracle {
        VerificationOracle::new(&self.filter, self.mu, self.scale)
    }

    /// What is left of the noise after cancellation, `e - clean`, over the
    /// samples the filter computed.
    fn residual_noise(&self) -> Vec<f64> {
        let first = self.filter.weights.len();
        self.filter.e[first..]
            .iter()
            .zip(self.signals.clean[first..].iter())
            .map(|(e, s)| e - s)
            .collect()
    }

    pub fn residual_noise_rms(&self) -> f64 {
        self.residual_noise().rms_level()
    }

    /// RMS of the noise in the primary input over the same samples.
    pub fn primary_noise_rms(&self) -> f64 {
        let first = self.filter.weights.len();
        self.signals.primary_noise[first..].rms_level()
    }

    /// Noise reduction in dB, primary noise level minus residual level.
    pub fn noise_reduction_db(&self) -> f64 {
        let first = self.filter.weights.len();
        self.signals.primary_noise[first..].rms_level_db() - self.residual_noise().rms_level_db()
    }

    /// Writes `<module>.v`, `<module>.hex` and `oracle.json` to `dir`,
    /// creating it if needed. Nothing is created if the ROM options are invalid.
    pub fn write_artifacts<P: AsRef<Path>>(&self, dir: P) -> AncResult<Artifacts> {
        let options = RomOptions::for_table(&self.module_name, self.table.len());
        options.validate(self.table.len())?;

        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let artifacts = Artifacts {
            verilog: dir.join(format!("{}.v", self.module_name)),
            hex: dir.join(format!("{}.hex", self.module_name)),
            oracle: dir.join("oracle.json"),
        };

        let mut writer = BufWriter::new(File::create(&artifacts.verilog)?);
        write_verilog_rom(&mut writer, &self.table, &options)?;
        writer.flush()?;
        info!("wrote {}", artifacts.verilog.display());

        let mut writer = BufWriter::new(File::create(&artifacts.hex)?);
        write_hex_image(&mut writer, &self.table)?;
        writer.flush()?;
        info!("wrote {}", artifacts.hex.display());

        let mut writer = BufWriter::new(File::create(&artifacts.oracle)?);
        self.oracle().write_json(&mut writer)?;
        writer.flush()?;
        info!("wrote {}", artifacts.oracle.display());

        Ok(artifacts)
    }
}
