use std::env;
use std::io;
use std::process::ExitCode;

use smoke::{parse_args, run};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();
    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::from(1)
        }
    }
}

fn run_cli() -> Result<(), String> {
    let args = env::args().skip(1).collect::<Vec<_>>();
    if args.is_empty() {
        return Err(usage_text());
    }
    if args[0] == "-h" || args[0] == "--help" {
        println!("{}", usage_text());
        return Ok(());
    }

    let (kind, options) =
        parse_args(&args).map_err(|error| format!("{error}\n\n{}", usage_text()))?;
    run(kind, &options, &mut io::stdout())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn usage_text() -> String {
    [
        "smoke - third-party library smoke checks",
        "",
        "Usage:",
        "  smoke window",
        "  smoke surface",
        "  smoke ui",
        "  smoke physics",
        "  smoke image [--image-path <path>]",
        "  smoke math",
        "  smoke audio        (requires --features audio)",
        "  smoke all [--image-path <path>]",
        "",
        "`all` runs the checks that need no display (ui, physics, image, math).",
    ]
    .join("\n")
}
