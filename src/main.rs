// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Walkview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Walkview CLI entrypoint.
//!
//! `walkview normalize` reads wire graph responses (files, or stdin when none are given) and
//! prints one visualization model per input. Logs go to stderr and honor `RUST_LOG`.

use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use walkview::model::VisualizationModel;
use walkview::query::GraphQuery;
use walkview::wire::RandomGraphResponse;
use walkview::ValidationError;

#[derive(Debug, Parser)]
#[command(name = "walkview", version)]
#[command(about = "Normalize random-graph responses into render-ready visualization models")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Normalize wire responses and print the visualization models as JSON.
    Normalize {
        /// Response files; `-` or no files reads a single response from stdin.
        files: Vec<PathBuf>,

        /// Pretty-print each model instead of one JSON document per line.
        #[arg(long, env = "WALKVIEW_PRETTY")]
        pretty: bool,
    },
    /// Print a JSON schema.
    Schema {
        #[arg(value_enum)]
        target: SchemaTarget,
    },
    /// Validate graph-request query parameters and print the seeds.
    Query {
        /// Query string such as `seed1=1&seed2=2`.
        query: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SchemaTarget {
    Wire,
    Model,
}

fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .context("failed to create log filter")?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(io::stderr))
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

fn read_input(path: &PathBuf) -> anyhow::Result<(String, String)> {
    if path.as_os_str() == "-" {
        return read_stdin();
    }
    let text = fs::read_to_string(path).with_context(|| format!("cannot read {path:?}"))?;
    Ok((path.display().to_string(), text))
}

fn read_stdin() -> anyhow::Result<(String, String)> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text).context("cannot read stdin")?;
    Ok(("<stdin>".to_owned(), text))
}

fn reject_repeated_stdin(files: &[PathBuf]) -> anyhow::Result<()> {
    let stdin_args = files.iter().filter(|path| path.as_os_str() == "-").count();
    if stdin_args > 1 {
        anyhow::bail!("stdin (`-`) can only be read once, got it {stdin_args} times");
    }
    Ok(())
}

/// Fails on the first invalid response so nothing is written for a partially valid batch.
fn collect_models(
    names: &[String],
    results: Vec<Result<VisualizationModel, ValidationError>>,
) -> anyhow::Result<Vec<VisualizationModel>> {
    names
        .iter()
        .zip(results)
        .map(|(name, result)| result.with_context(|| format!("{name}: invalid graph response")))
        .collect()
}

fn normalize(files: &[PathBuf], pretty: bool) -> anyhow::Result<()> {
    reject_repeated_stdin(files)?;
    let inputs = if files.is_empty() {
        vec![read_stdin()?]
    } else {
        files.iter().map(read_input).collect::<anyhow::Result<Vec<_>>>()?
    };

    let mut names = Vec::with_capacity(inputs.len());
    let mut responses = Vec::with_capacity(inputs.len());
    for (name, text) in inputs {
        let response: RandomGraphResponse = serde_json::from_str(&text)
            .with_context(|| format!("{name}: not a graph response"))?;
        names.push(name);
        responses.push(response);
    }

    tracing::info!(inputs = responses.len(), "normalizing graph responses");
    let models = collect_models(&names, walkview::normalize_batch(&responses))?;

    let mut out = BufWriter::new(io::stdout().lock());
    for model in &models {
        if pretty {
            serde_json::to_writer_pretty(&mut out, model)?;
        } else {
            serde_json::to_writer(&mut out, model)?;
        }
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

fn print_schema(target: SchemaTarget) -> anyhow::Result<()> {
    let schema = match target {
        SchemaTarget::Wire => schemars::schema_for!(RandomGraphResponse),
        SchemaTarget::Model => schemars::schema_for!(VisualizationModel),
    };
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

fn print_query(raw: &str) -> anyhow::Result<()> {
    let query = GraphQuery::parse(raw).context("invalid graph query")?;
    println!("{}", serde_json::to_string(&query)?);
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Normalize { files, pretty } => normalize(&files, pretty),
        Command::Schema { target } => print_schema(target),
        Command::Query { query } => print_query(&query),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = init_tracing() {
        eprintln!("walkview: {err:#}");
    }

    if let Err(err) = run(cli) {
        eprintln!("walkview: {err:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_stdin_argument_is_rejected() {
        let files = vec![PathBuf::from("-"), PathBuf::from("a.json"), PathBuf::from("-")];
        let err = reject_repeated_stdin(&files).unwrap_err();
        assert!(err.to_string().contains("only be read once"));

        reject_repeated_stdin(&[PathBuf::from("-"), PathBuf::from("a.json")]).expect("single stdin");
        reject_repeated_stdin(&[]).expect("no files");
    }

    #[test]
    fn later_invalid_response_fails_the_whole_batch() {
        let names = vec!["first.json".to_owned(), "second.json".to_owned()];
        let results = vec![
            Ok(VisualizationModel::default()),
            Err(ValidationError::MissingNodeId { index: 2 }),
        ];

        let err = collect_models(&names, results).unwrap_err();
        assert!(format!("{err:#}").starts_with("second.json: invalid graph response"));
    }

    #[test]
    fn valid_batch_keeps_input_order() {
        let names = vec!["a".to_owned(), "b".to_owned()];
        let models = collect_models(
            &names,
            vec![Ok(VisualizationModel::default()), Ok(VisualizationModel::default())],
        )
        .expect("models");
        assert_eq!(models.len(), 2);
    }
}
