//! Shared plumbing for the driver binaries: command-line options, logging, and
//! configuration loading.

use std::{ fs, path::{ Path, PathBuf } };
use anyhow::Context;
use clap::Args;
use stairpot::{
    config::PipelineConfig,
    discretize::EmptyBin,
    units::EnergyUnit,
};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;

/// Options common to all drivers.
#[derive(Args, Clone, Debug, Default)]
pub struct CommonArgs {
    /// Read the configuration from a TOML file; omitted keys take their values
    /// from the selected preset
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Use the high-precision preset (4000 grid points, 500 steps)
    #[arg(long)]
    pub precise: bool,

    /// Energy unit ("eV" or "J")
    #[arg(short, long, value_name = "UNIT")]
    pub unit: Option<String>,

    /// Number of charges
    #[arg(short = 'N', long, value_name = "NUM")]
    pub charges: Option<usize>,

    /// Lattice spacing
    #[arg(short = 'L', long, value_name = "LEN")]
    pub spacing: Option<f64>,

    /// Softening length
    #[arg(short = 'a', long, value_name = "LEN")]
    pub softening: Option<f64>,

    /// Neighbors on each side of the nearest charge [default: all]
    #[arg(short = 'k', long, value_name = "NUM")]
    pub neighborhood: Option<usize>,

    /// Number of interior steps
    #[arg(short = 'n', long, value_name = "NUM")]
    pub steps: Option<usize>,

    /// Interpolate empty bins instead of failing
    #[arg(long)]
    pub interpolate: bool,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Map a verbosity count to a log level.
pub fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::OFF
    } else {
        match verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// Install a global subscriber printing to stderr.
pub fn setup_logging(verbosity: u8, quiet: bool) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level_filter(verbosity, quiet))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {}", e))
}

/// Read a configuration file, filling omitted keys from `base`.
pub fn load_config(path: &Path, base: &PipelineConfig)
    -> anyhow::Result<PipelineConfig>
{
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    // overlay the file's keys on the serialized base so that omitted keys
    // keep the preset's values rather than the defaults
    let mut table = toml::Table::try_from(base)
        .context("failed to serialize base configuration")?;
    let file: toml::Table = toml::from_str(&text)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    table.extend(file);
    let config: PipelineConfig = table.try_into()
        .with_context(|| format!("invalid configuration in {}", path.display()))?;
    debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}

impl CommonArgs {
    /// Assemble the pipeline configuration: preset, then file, then
    /// command-line overrides.
    pub fn config(&self) -> anyhow::Result<PipelineConfig> {
        let base
            = if self.precise {
                PipelineConfig::high_precision()
            } else {
                PipelineConfig::test()
            };
        let mut config
            = match &self.config {
                Some(path) => load_config(path, &base)?,
                None => base,
            };
        if let Some(unit) = &self.unit {
            config.unit = unit.parse::<EnergyUnit>()?;
        }
        if let Some(charges) = self.charges { config.charges = charges; }
        if let Some(spacing) = self.spacing { config.spacing = spacing; }
        if let Some(softening) = self.softening { config.softening = softening; }
        if self.neighborhood.is_some() {
            config.neighborhood = self.neighborhood;
        }
        if let Some(steps) = self.steps { config.steps = steps; }
        if self.interpolate { config.empty_bin = EmptyBin::Interpolate; }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_filter(0, false), LevelFilter::WARN);
        assert_eq!(level_filter(2, false), LevelFilter::DEBUG);
        assert_eq!(level_filter(7, false), LevelFilter::TRACE);
        assert_eq!(level_filter(3, true), LevelFilter::OFF);
    }

    #[test]
    fn file_keys_overlay_preset() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "charges = 6\nneighborhood = 1").unwrap();
        let args = CommonArgs {
            config: Some(file.path().to_path_buf()),
            precise: true,
            ..Default::default()
        };
        let config = args.config().unwrap();
        assert_eq!(config.charges, 6);
        assert_eq!(config.neighborhood(), 1);
        // not in the file, so taken from the precise preset
        assert_eq!(config.grid_points, 4000);
        assert_eq!(config.steps, 500);
    }

    #[test]
    fn overrides_win_over_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "steps = 20\nunit = \"J\"").unwrap();
        let args = CommonArgs {
            config: Some(file.path().to_path_buf()),
            unit: Some("eV".to_string()),
            steps: Some(30),
            interpolate: true,
            ..Default::default()
        };
        let config = args.config().unwrap();
        assert_eq!(config.unit, EnergyUnit::EV);
        assert_eq!(config.steps, 30);
        assert_eq!(config.empty_bin, EmptyBin::Interpolate);
    }

    #[test]
    fn bad_inputs_are_reported() {
        let args = CommonArgs {
            unit: Some("xyz".to_string()),
            ..Default::default()
        };
        assert!(args.config().is_err());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "softening = 0.0").unwrap();
        let args = CommonArgs {
            config: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        assert!(args.config().is_err());

        let args = CommonArgs {
            config: Some(PathBuf::from("/nonexistent/stairpot.toml")),
            ..Default::default()
        };
        assert!(args.config().is_err());
    }
}
