//! Focused unit tests covering search CLI configuration and request parsing.

use std::time::Duration;

use super::helpers::{CATALOG_JSON, REQUEST_JSON, utf8_tempdir, write_utf8};
use super::*;
use crate::search::{
    DefaultSearchMatcherBuilder, SearchCommandConfig, config_from_layers_for_test,
    load_search_request, run_search_with,
};
use camino::Utf8PathBuf;
use rstest::rstest;
use stowage_core::{LocationQuote, SearchRequest, VehicleDemand};
use stowage_solver::SearchConfig;

#[derive(Debug, Copy, Clone)]
enum MissingInput {
    Request,
    Catalog,
}

fn args_for(request_path: &Utf8PathBuf, catalog: &Utf8PathBuf) -> SearchArgs {
    SearchArgs {
        request_path: Some(request_path.clone()),
        catalog: Some(catalog.clone()),
        ..SearchArgs::default()
    }
}

#[rstest]
#[case::request(None, Some("listings.json"), ARG_SEARCH_REQUEST, ENV_SEARCH_REQUEST)]
#[case::catalog(Some("request.json"), None, ARG_SEARCH_CATALOG, ENV_SEARCH_CATALOG)]
fn converting_search_without_inputs_errors(
    #[case] request_path: Option<&str>,
    #[case] catalog: Option<&str>,
    #[case] expected_field: &'static str,
    #[case] expected_env: &'static str,
) {
    let args = SearchArgs {
        request_path: request_path.map(Utf8PathBuf::from),
        catalog: catalog.map(Utf8PathBuf::from),
        ..SearchArgs::default()
    };

    let err = SearchCommandConfig::try_from(args).expect_err("missing input should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, expected_field);
            assert_eq!(env, expected_env);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn search_config_applies_matcher_defaults() {
    let config = SearchCommandConfig::try_from(SearchArgs {
        request_path: Some(Utf8PathBuf::from("request.json")),
        catalog: Some(Utf8PathBuf::from("listings.json")),
        ..SearchArgs::default()
    })
    .expect("config should build");
    assert_eq!(config.matcher, SearchConfig::default());
}

#[rstest]
fn search_config_honours_optional_flags() {
    let config = SearchCommandConfig::try_from(SearchArgs {
        request_path: Some(Utf8PathBuf::from("request.json")),
        catalog: Some(Utf8PathBuf::from("listings.json")),
        max_listings_per_location: Some(12),
        time_limit_secs: Some(5),
        sequential: Some(true),
    })
    .expect("config should build");
    assert_eq!(
        config.matcher,
        SearchConfig {
            max_listings_per_location: Some(12),
            time_limit: Some(Duration::from_secs(5)),
            parallel: false,
        }
    );
}

#[rstest]
#[case::missing_request(ARG_SEARCH_REQUEST, MissingInput::Request)]
#[case::missing_catalog(ARG_SEARCH_CATALOG, MissingInput::Catalog)]
fn validate_sources_reports_missing_inputs(
    #[case] expected_field: &'static str,
    #[case] missing: MissingInput,
) {
    let (_tmp, root) = utf8_tempdir();
    let request_path = root.join("request.json");
    let catalog = root.join("listings.json");
    if !matches!(missing, MissingInput::Request) {
        write_utf8(&request_path, REQUEST_JSON);
    }
    if !matches!(missing, MissingInput::Catalog) {
        write_utf8(&catalog, CATALOG_JSON);
    }

    let config = SearchCommandConfig {
        request_path,
        catalog,
        matcher: SearchConfig::default(),
    };
    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, expected_field),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file() {
    let (_tmp, root) = utf8_tempdir();
    let request_path = root.join("request.json");
    std::fs::create_dir(&request_path).expect("request directory");

    let config = SearchCommandConfig {
        request_path: request_path.clone(),
        catalog: root.join("listings.json"),
        matcher: SearchConfig::default(),
    };
    let err = config
        .validate_sources()
        .expect_err("expected directory path to fail validation");
    match err {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_SEARCH_REQUEST);
            assert_eq!(path, request_path);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn load_search_request_decodes_bare_array_with_default_width() {
    let (_tmp, root) = utf8_tempdir();
    let request_path = root.join("request.json");
    write_utf8(
        &request_path,
        br#"[{"length": 20, "quantity": 2}, {"length": 45, "quantity": 1, "width": 25}]"#,
    );

    let decoded = load_search_request(&request_path).expect("request should decode");
    assert_eq!(
        decoded,
        SearchRequest::new(vec![
            VehicleDemand {
                length: 20,
                quantity: 2,
                width: 10,
            },
            VehicleDemand {
                length: 45,
                quantity: 1,
                width: 25,
            },
        ])
    );
}

#[rstest]
fn load_search_request_rejects_invalid_json() {
    let (_tmp, root) = utf8_tempdir();
    let request_path = root.join("request.json");
    write_utf8(&request_path, b"[ not valid json");

    let err = load_search_request(&request_path).expect_err("invalid json should error");
    match err {
        CliError::ParseSearchRequest { path, .. } => assert_eq!(path, request_path),
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn load_search_request_io_error_returns_open_error() {
    let (_tmp, root) = utf8_tempdir();
    let request_path = root.join("request.json");

    let err = load_search_request(&request_path).expect_err("missing request should error");
    match err {
        CliError::OpenSearchRequest { path, .. } => assert_eq!(path, request_path),
        other => panic!("expected OpenSearchRequest, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "request_path": 42 }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let (_tmp, root) = utf8_tempdir();
    let env_request = root.join("from-env-request.json");
    let file_catalog = root.join("from-file-listings.json");
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "catalog": file_catalog.as_str(),
            "max_listings_per_location": 10,
            "sequential": true,
        }),
        None,
    );
    composer.push_environment(json!({
        "request_path": env_request.as_str(),
        "max_listings_per_location": 14,
    }));
    composer.push_cli(json!({
        "max_listings_per_location": 18,
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.request_path, env_request);
    assert_eq!(config.catalog, file_catalog);
    assert_eq!(config.matcher.max_listings_per_location, Some(18));
    assert!(!config.matcher.parallel);
}

#[rstest]
fn search_writes_ranked_quotes_as_json() {
    let (_tmp, root) = utf8_tempdir();
    let request_path = root.join("request.json");
    let catalog = root.join("listings.json");
    write_utf8(&request_path, REQUEST_JSON);
    write_utf8(&catalog, CATALOG_JSON);

    let mut stdout = Vec::new();
    run_search_with(
        args_for(&request_path, &catalog),
        &DefaultSearchMatcherBuilder,
        &mut stdout,
    )
    .expect("search should succeed");

    let quotes: Vec<LocationQuote> =
        serde_json::from_slice(&stdout).expect("output should be JSON quotes");
    let summary: Vec<(&str, Vec<&str>, u64)> = quotes
        .iter()
        .map(|quote| {
            (
                quote.location_id.as_str(),
                quote.listing_ids.iter().map(|id| id.as_str()).collect(),
                quote.total_price_in_cents,
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![("2", vec!["3"], 200), ("1", vec!["2"], 300)]
    );
}

#[rstest]
fn search_reports_catalog_errors_with_path() {
    let (_tmp, root) = utf8_tempdir();
    let request_path = root.join("request.json");
    let catalog = root.join("listings.json");
    write_utf8(&request_path, REQUEST_JSON);
    write_utf8(&catalog, br#"[{"id": 1, "location_id": 1}]"#);

    let mut stdout = Vec::new();
    let err = run_search_with(
        args_for(&request_path, &catalog),
        &DefaultSearchMatcherBuilder,
        &mut stdout,
    )
    .expect_err("catalog should fail to load");
    match err {
        CliError::LoadCatalog { path, .. } => assert_eq!(path, catalog),
        other => panic!("expected LoadCatalog, found {other:?}"),
    }
    assert!(stdout.is_empty());
}
