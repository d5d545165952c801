//! CLI command implementations
//!
//! Each command loads the dataset, builds one engine, feeds it events and
//! prints the engine's view. The commands add no query semantics of their
//! own.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use serde_json::{json, Value};

use crate::dataset::{load_records, DatasetIndex, Record};
use crate::observability::{log_event_with_fields, Event, Logger};
use crate::query::{DistrictFilter, QueryEngine, QueryEvent, TransitionOutcome, TypeFilter};

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliErrorCode, CliResult};
use super::io::{read_requests, write_error, write_rejected, write_response};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cli: Cli) -> CliResult<()> {
    let config = Config::resolve(cli.config.as_deref())?;
    Logger::set_threshold(config.log_severity()?);

    if let Some(path) = &cli.config {
        let path_str = path.display().to_string();
        log_event_with_fields(Event::ConfigLoaded, &[("path", path_str.as_str())]);
    }

    let mut stdout = io::stdout().lock();

    match cli.command {
        Command::Districts { data } => districts(&config, data, &mut stdout),
        Command::Query {
            data,
            search,
            district,
            office_type,
            page,
        } => {
            let request = QueryRequest {
                search,
                district: DistrictFilter::parse(&district),
                office_type,
                page,
            };
            query(&config, data, &request, &mut stdout)
        }
        Command::Session { data } => {
            let records = load(&config, data)?;
            let mut engine = QueryEngine::with_page_size(records, config.page_size);
            run_session(&mut engine, io::stdin().lock(), &mut stdout)
        }
    }
}

/// Print the sorted district list
pub fn districts<W: Write>(config: &Config, data: Option<PathBuf>, out: &mut W) -> CliResult<()> {
    let records = load(config, data)?;
    let index = DatasetIndex::build(&records);
    write_response(out, serde_json::to_value(&index)?)
}

/// Parameters of a one-shot lookup
#[derive(Debug, Clone)]
pub struct QueryRequest {
    pub search: String,
    pub district: DistrictFilter,
    pub office_type: TypeFilter,
    pub page: usize,
}

/// Run one lookup and print the resulting view
pub fn query<W: Write>(
    config: &Config,
    data: Option<PathBuf>,
    request: &QueryRequest,
    out: &mut W,
) -> CliResult<()> {
    let records = load(config, data)?;
    let mut engine = QueryEngine::with_page_size(records, config.page_size);
    run_query(&mut engine, request, out)
}

/// Applies `request` to `engine` as UI events, in selector order
pub fn run_query<W: Write>(
    engine: &mut QueryEngine,
    request: &QueryRequest,
    out: &mut W,
) -> CliResult<()> {
    engine.set_search_term(request.search.as_str());
    engine.set_district_filter(request.district.clone());
    engine.set_type_filter(request.office_type);

    let outcome = if request.page == 1 {
        None
    } else {
        Some(engine.goto_page(request.page))
    };

    let view = serde_json::to_value(engine.view())?;
    match outcome {
        Some(TransitionOutcome::Rejected(reason)) => {
            write_rejected(out, serde_json::to_value(reason)?, view)
        }
        _ => write_response(out, view),
    }
}

/// Event loop: one JSON event in, one response out.
///
/// Malformed lines produce an error response and the loop continues. A final
/// line carries the engine counters.
pub fn run_session<R: BufRead, W: Write>(
    engine: &mut QueryEngine,
    input: R,
    out: &mut W,
) -> CliResult<()> {
    for request in read_requests(input) {
        let event = match request.and_then(parse_event) {
            Ok(event) => event,
            Err(e) if e.code() == &CliErrorCode::InvalidEvent => {
                write_error(out, e.code_str(), e.message())?;
                continue;
            }
            Err(e) => return Err(e),
        };

        let outcome = engine.dispatch(event);
        let view = serde_json::to_value(engine.view())?;
        match outcome {
            TransitionOutcome::Applied(_) => write_response(out, view)?,
            TransitionOutcome::Rejected(reason) => {
                write_rejected(out, serde_json::to_value(reason)?, view)?
            }
        }
    }

    write_response(out, json!({ "metrics": engine.metrics().snapshot() }))
}

fn parse_event(value: Value) -> CliResult<QueryEvent> {
    serde_json::from_value(value).map_err(|e| CliError::invalid_event(e.to_string()))
}

fn load(config: &Config, data: Option<PathBuf>) -> CliResult<Vec<Record>> {
    let path = config.data_path(data)?;
    Ok(load_records(&path)?)
}
