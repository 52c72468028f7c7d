//! Audit command implementation for the Spotcheck CLI.

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use spotcheck_core::{Asset, AuditPlan, MAX_SAMPLE, SampleSelector, SelectorConfig, plan_audit};
use std::io::Write;

use crate::catalog::{JsonCatalog, file_is_file};
use crate::{ARG_CAPACITY, ARG_CATALOG, ARG_RATIO, ARG_SEED, CliError, ENV_CATALOG, ENV_RATIO};

/// CLI arguments for the `audit` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Draw a random sample of assets from a JSON catalog and plan \
                 a greedy inspection route starting from each sampled asset. \
                 Options can come from CLI flags, configuration files, or \
                 environment variables.",
    about = "Sample assets and plan inspection routes"
)]
#[ortho_config(prefix = "SPOTCHECK")]
pub(crate) struct AuditArgs {
    /// Path to a JSON array of assets with grid positions.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Fraction of the catalog to inspect, between 0.0 and 1.0.
    #[arg(long = ARG_RATIO, value_name = "fraction")]
    #[serde(default)]
    pub(crate) ratio: Option<f64>,
    /// Seed for a reproducible sample; drawn from entropy when omitted.
    #[arg(long = ARG_SEED, value_name = "u64")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Largest sample the audit may draw, at most 20.
    #[arg(long = ARG_CAPACITY, value_name = "count")]
    #[serde(default)]
    pub(crate) capacity: Option<usize>,
}

impl AuditArgs {
    pub(crate) fn into_config(self) -> Result<AuditConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        AuditConfig::try_from(merged)
    }
}

/// Resolved `audit` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AuditConfig {
    /// Path to the JSON catalog.
    pub(crate) catalog: Utf8PathBuf,
    /// Sampling ratio.
    pub(crate) ratio: f64,
    /// Seed used to initialise the sampler.
    pub(crate) seed: u64,
    /// Largest permitted sample.
    pub(crate) capacity: usize,
}

impl AuditConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        match file_is_file(&self.catalog) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field: ARG_CATALOG,
                path: self.catalog.clone(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field: ARG_CATALOG,
                    path: self.catalog.clone(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field: ARG_CATALOG,
                path: self.catalog.clone(),
                source,
            }),
        }
    }

    fn selector(&self) -> SampleSelector {
        SampleSelector::new(SelectorConfig {
            capacity: self.capacity,
            ..SelectorConfig::default()
        })
    }
}

impl TryFrom<AuditArgs> for AuditConfig {
    type Error = CliError;

    fn try_from(args: AuditArgs) -> Result<Self, Self::Error> {
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_CATALOG,
        })?;
        let ratio = args.ratio.ok_or(CliError::MissingArgument {
            field: ARG_RATIO,
            env: ENV_RATIO,
        })?;
        let seed = args.seed.unwrap_or_else(rand::random);
        let capacity = args.capacity.unwrap_or(MAX_SAMPLE);
        if capacity > MAX_SAMPLE {
            return Err(CliError::CapacityAboveLimit {
                field: ARG_CAPACITY,
                requested: capacity,
                limit: MAX_SAMPLE,
            });
        }
        log::debug!("{ARG_SEED}={seed} {ARG_CAPACITY}={capacity}");
        Ok(Self {
            catalog,
            ratio,
            seed,
            capacity,
        })
    }
}

/// Route from one sampled asset, rendered by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct RouteReport {
    /// Asset the route starts from.
    pub(crate) start: String,
    /// Asset names in visiting order.
    pub(crate) stops: Vec<String>,
    /// Visiting order joined as `A→B→C`.
    pub(crate) path: String,
}

/// Printed result of an audit run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct AuditReport {
    /// Seed that reproduces this sample.
    pub(crate) seed: u64,
    /// Assets chosen for inspection.
    pub(crate) selected: Vec<Asset>,
    /// One route per selected asset.
    pub(crate) routes: Vec<RouteReport>,
}

impl AuditReport {
    fn new(seed: u64, plan: &AuditPlan) -> Self {
        let sample = plan.sample();
        let routes = plan
            .routes()
            .iter()
            .map(|route| {
                let stops: Vec<String> = route
                    .names(sample)
                    .into_iter()
                    .map(str::to_owned)
                    .collect();
                RouteReport {
                    start: stops.first().cloned().unwrap_or_default(),
                    path: route.path(sample),
                    stops,
                }
            })
            .collect();
        Self {
            seed,
            selected: sample.assets().to_vec(),
            routes,
        }
    }
}

pub(super) fn run_audit(args: AuditArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_audit_with(args, &mut stdout)
}

pub(super) fn run_audit_with(args: AuditArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let report = execute_audit(&config)?;
    write_report(writer, &report)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<AuditConfig, CliError> {
    let merged = AuditArgs::merge_from_layers(layers).map_err(CliError::from)?;
    AuditConfig::try_from(merged)
}

pub(super) fn execute_audit(config: &AuditConfig) -> Result<AuditReport, CliError> {
    let catalog = JsonCatalog::load(&config.catalog)?;
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let plan = plan_audit(&catalog, config.ratio, &config.selector(), &mut rng)
        .map_err(|source| CliError::Audit { source })?;
    log::info!(
        "selected {} of {} assets from {}",
        plan.sample().len(),
        catalog.len(),
        catalog.path()
    );
    Ok(AuditReport::new(config.seed, &plan))
}

fn write_report(writer: &mut dyn Write, report: &AuditReport) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteReport)?;
    writer.write_all(b"\n").map_err(CliError::WriteReport)?;
    Ok(())
}
