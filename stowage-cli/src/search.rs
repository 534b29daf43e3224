//! Search command implementation for the Stowage CLI.

use std::io::{BufReader, Write};
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use stowage_core::{JsonListingCatalog, LocationQuote, Matcher, SearchRequest, SearchResponse};
use stowage_solver::{ExhaustiveMatcher, SearchConfig};

use crate::fs::{file_is_file, open_utf8_file};
use crate::{
    ARG_MAX_LISTINGS_PER_LOCATION, ARG_SEARCH_CATALOG, ARG_SEARCH_REQUEST, ARG_SEQUENTIAL,
    ARG_TIME_LIMIT_SECS, CliError, ENV_SEARCH_CATALOG, ENV_SEARCH_REQUEST,
};

/// CLI arguments for the `search` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Quote the cheapest combination of listings per location \
                 that can hold every requested vehicle. The request is a \
                 JSON array of {length, quantity, width} objects and the \
                 catalog a JSON array of listings.",
    about = "Search a listing catalog for vehicle storage"
)]
#[ortho_config(prefix = "STOWAGE")]
pub(crate) struct SearchArgs {
    /// Path to a JSON file containing the vehicle request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Path to the JSON listing catalog.
    #[arg(long = ARG_SEARCH_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Refuse locations with more candidate listings than this.
    #[arg(long = ARG_MAX_LISTINGS_PER_LOCATION, value_name = "count")]
    #[serde(default)]
    pub(crate) max_listings_per_location: Option<usize>,
    /// Abort searches that run longer than this many seconds.
    #[arg(long = ARG_TIME_LIMIT_SECS, value_name = "seconds")]
    #[serde(default)]
    pub(crate) time_limit_secs: Option<u64>,
    /// Optimise locations one after another instead of in parallel.
    #[arg(
        long = ARG_SEQUENTIAL,
        num_args = 0..=1,
        default_missing_value = "true",
        value_name = "bool"
    )]
    #[serde(default)]
    pub(crate) sequential: Option<bool>,
}

impl SearchArgs {
    pub(crate) fn into_config(self) -> Result<SearchCommandConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SearchCommandConfig::try_from(merged)
    }
}

/// Resolved `search` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchCommandConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Path to the JSON listing catalog.
    pub(crate) catalog: Utf8PathBuf,
    /// Matcher settings derived from the optional flags.
    pub(crate) matcher: SearchConfig,
}

impl SearchCommandConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request_path, ARG_SEARCH_REQUEST)?;
        Self::require_existing(&self.catalog, ARG_SEARCH_CATALOG)?;
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<SearchArgs> for SearchCommandConfig {
    type Error = CliError;

    fn try_from(args: SearchArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_SEARCH_REQUEST,
            env: ENV_SEARCH_REQUEST,
        })?;
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_SEARCH_CATALOG,
            env: ENV_SEARCH_CATALOG,
        })?;

        let defaults = SearchConfig::default();
        let matcher = SearchConfig {
            max_listings_per_location: args
                .max_listings_per_location
                .or(defaults.max_listings_per_location),
            time_limit: args.time_limit_secs.map(Duration::from_secs),
            parallel: !args.sequential.unwrap_or(false),
        };

        Ok(Self {
            request_path,
            catalog,
            matcher,
        })
    }
}

/// Builds a matcher for the current search invocation.
pub(super) trait SearchMatcherBuilder {
    fn build(&self, config: &SearchCommandConfig) -> Result<Box<dyn Matcher>, CliError>;
}

pub(super) struct DefaultSearchMatcherBuilder;

impl SearchMatcherBuilder for DefaultSearchMatcherBuilder {
    fn build(&self, config: &SearchCommandConfig) -> Result<Box<dyn Matcher>, CliError> {
        let catalog =
            JsonListingCatalog::open(&config.catalog).map_err(|source| CliError::LoadCatalog {
                path: config.catalog.clone(),
                source,
            })?;
        Ok(Box::new(ExhaustiveMatcher::with_config(
            catalog,
            config.matcher.clone(),
        )))
    }
}

pub(super) fn run_search(args: SearchArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultSearchMatcherBuilder;
    run_search_with(args, &builder, &mut stdout)
}

pub(super) fn run_search_with(
    args: SearchArgs,
    builder: &dyn SearchMatcherBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let response = execute_search(args, builder)?;
    let diagnostics = &response.diagnostics;
    info!(
        "{} quotes from {} locations in {:?}",
        response.quotes.len(),
        diagnostics.locations_considered,
        diagnostics.search_time
    );
    write_quotes(writer, &response.quotes)
}

fn execute_search(
    args: SearchArgs,
    builder: &dyn SearchMatcherBuilder,
) -> Result<SearchResponse, CliError> {
    let config = resolve_search_config(args)?;
    let request = load_search_request(&config.request_path)?;
    request
        .validate_detailed()
        .map_err(|source| CliError::InvalidSearchRequest {
            path: config.request_path.clone(),
            source,
        })?;
    let matcher = builder.build(&config)?;
    matcher
        .search(&request)
        .map_err(|source| CliError::Search { source })
}

fn resolve_search_config(args: SearchArgs) -> Result<SearchCommandConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON-encoded [`SearchRequest`] from disk.
pub(super) fn load_search_request(path: &Utf8Path) -> Result<SearchRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenSearchRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseSearchRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_quotes(writer: &mut dyn Write, quotes: &[LocationQuote]) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(quotes).map_err(CliError::SerialiseQuotes)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteSearchOutput)?;
    writer
        .write_all(b"\n")
        .map_err(CliError::WriteSearchOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SearchCommandConfig, CliError> {
    let merged = SearchArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SearchCommandConfig::try_from(merged)
}
