use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;

use scmdp::config::RegistrySpec;
use scmdp::logging::init_tracing;
use scmdp::ParseFailure;

/// Parse tokens against a registry description and print the bindings.
#[derive(Parser, Debug)]
#[command(name = "scmdp", version)]
struct Cli {
    /// Registry description file (TOML). Defaults to the user config dir.
    #[arg(short = 's', long, value_name = "FILE")]
    spec: Option<PathBuf>,

    /// Print the outcome as JSON; help and diagnostics go to stderr
    #[arg(long)]
    json: bool,

    /// Tokens to parse (use `--` before tokens that start with a dash)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "TOKENS")]
    tokens: Vec<String>,
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let path = cli.spec.clone().unwrap_or_else(RegistrySpec::default_path);
    let spec = RegistrySpec::load_from(&path)
        .with_context(|| format!("cannot use registry description '{}'", path.display()))?;
    let registry = spec.build()?;

    let outcome = if cli.json {
        registry.parse_to(&cli.tokens, &mut io::stderr())
    } else {
        registry.parse(&cli.tokens)
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let code = match &outcome {
        Ok(_) | Err(ParseFailure::HelpRequested) => ExitCode::SUCCESS,
        Err(ParseFailure::Rejected { .. }) => ExitCode::FAILURE,
    };

    if cli.json {
        let body = match &outcome {
            Ok(bindings) => json!({ "status": "ok", "bindings": bindings }),
            Err(ParseFailure::HelpRequested) => json!({ "status": "help" }),
            Err(ParseFailure::Rejected { error, partial }) => json!({
                "status": "rejected",
                "error": error.code(),
                "message": error.to_string(),
                "bindings": partial,
            }),
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
    } else if let Ok(bindings) = &outcome {
        for (key, value) in bindings.iter() {
            writeln!(out, "{}={}", key, value)?;
        }
    }

    Ok(code)
}
