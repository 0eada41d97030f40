use log::{error, info};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use muffin_import::pipelines::batch;
use muffin_import::sink::store_all;
use muffin_import::{ImportConfig, ImportError, JsonLinesSink};

const USAGE: &str = "Usage: muffin-import [import|ingredients] [INPUT_DIR]";

enum Command {
    Import,
    Ingredients,
}

fn parse_args(args: &[String]) -> Result<(Command, Option<PathBuf>), String> {
    let mut command = Command::Import;
    let mut input_dir = None;

    for arg in args {
        match arg.as_str() {
            "import" => command = Command::Import,
            "ingredients" => command = Command::Ingredients,
            "-h" | "--help" => return Err(USAGE.to_string()),
            other if other.starts_with('-') => {
                return Err(format!("Unknown option '{other}'\n{USAGE}"))
            }
            other if input_dir.is_none() => input_dir = Some(PathBuf::from(other)),
            other => return Err(format!("Unexpected argument '{other}'\n{USAGE}")),
        }
    }

    Ok((command, input_dir))
}

async fn import(config: &ImportConfig) -> Result<(), ImportError> {
    let paths = batch::discover(&config.input_dir, &config.batch).await?;
    info!(
        "Importing {} documents from {}",
        paths.len(),
        config.input_dir.display()
    );

    let report = batch::run(paths, &config.batch).await;

    let mut sink = JsonLinesSink::create(&config.output).await?;
    store_all(&mut sink, &report.recipes).await?;
    batch::write_failed_list(&config.failed_log, &report.failures).await?;

    println!(
        "{} recipes written to {}, {} failed (see {}), {} degraded ingredients",
        report.recipes.len(),
        config.output.display(),
        report.failures.len(),
        config.failed_log.display(),
        report.degraded
    );
    Ok(())
}

async fn ingredients(config: &ImportConfig) -> Result<(), ImportError> {
    let paths = batch::discover(&config.input_dir, &config.batch).await?;
    let lines = batch::collect_raw_ingredients(&paths).await;
    batch::write_lines(&config.ingredients_out, &lines).await?;

    println!(
        "{} distinct ingredient lines written to {}",
        lines.len(),
        config.ingredients_out.display()
    );
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (command, input_dir) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let mut config = match ImportConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(dir) = input_dir {
        config.input_dir = dir;
    }

    let result = match command {
        Command::Import => import(&config).await,
        Command::Ingredients => ingredients(&config).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
