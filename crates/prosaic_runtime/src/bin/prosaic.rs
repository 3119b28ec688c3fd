//! Prosaic CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use prosaic_language::{FrontendConfig, Parser};
use prosaic_runtime::logging::{self, LogLevel};
use prosaic_runtime::render::{read_source, render};
use prosaic_runtime::{OutputFormat, Repl};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    format: OutputFormat,
    show_help: bool,
    show_version: bool,
    verbose: u8,
    quiet: u8,
    trace_rules: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    for arg in args.into_iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-q" | "--quiet" => config.quiet = config.quiet.saturating_add(1),
            "--trace-rules" => config.trace_rules = true,
            flag if flag.starts_with("--") => {
                config.format = flag[2..]
                    .parse()
                    .map_err(|_| format!("unknown option: {flag}"))?;
            }
            flag if flag.starts_with("-v") && flag[1..].chars().all(|c| c == 'v') => {
                let count = u8::try_from(flag.len() - 1).unwrap_or(u8::MAX);
                config.verbose = config.verbose.saturating_add(count);
            }
            flag if flag.starts_with('-') => {
                return Err(format!("unknown option: {flag}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(ExitCode::SUCCESS);
    }

    if config.show_version {
        println!("prosaic {}", env!("CARGO_PKG_VERSION"));
        return Ok(ExitCode::SUCCESS);
    }

    let mut level = LogLevel::from_verbosity(config.verbose, config.quiet);
    if config.trace_rules {
        level = LogLevel::Trace;
    }
    logging::init_with_level(level)?;

    if config.files.is_empty() {
        let frontend = FrontendConfig::for_file("<repl>").with_rule_tracing(config.trace_rules);
        let mut repl = Repl::new()?
            .with_format(config.format)
            .with_config(frontend);
        repl.run()?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut failed = false;
    for file in &config.files {
        let source = read_source(file)?;
        let frontend = FrontendConfig::for_file(file.display().to_string())
            .with_rule_tracing(config.trace_rules);
        let parser = Parser::with_config(frontend);

        match render(&parser, &source, config.format) {
            Ok(output) => print!("{output}"),
            Err(e) => {
                eprintln!("\x1b[31mError: {e}\x1b[0m");
                failed = true;
            }
        }
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn print_help() {
    println!(
        "\x1b[1mProsaic\x1b[0m - Front end for a language written as English prose

\x1b[1mUSAGE:\x1b[0m
    prosaic [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Files to parse; without files the REPL starts

\x1b[1mOUTPUT:\x1b[0m
    --canonical        Print the canonical prose (default)
    --tokens           Print the condensed token stream
    --tree             Print the syntax tree
    --json             Print the syntax tree as JSON
    --sort             Print declarations grouped by architecture

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -v, -vv, -vvv      Log more (info, debug, trace)
    -q, --quiet        Log errors only
    --trace-rules      Log every grammar rule attempt

\x1b[1mEXAMPLES:\x1b[0m
    prosaic                          Start interactive REPL
    prosaic main.prose               Print main.prose in canonical form
    prosaic --tokens main.prose      Show what the grammar sees
    prosaic --sort -v lib.prose      Group declarations, with debug logs

\x1b[1mREPL COMMANDS:\x1b[0m
    .tokens .tree .json .sort .canonical   Switch the output format
    .help                                  List commands
    Ctrl+D                                 Exit REPL
    Ctrl+C                                 Cancel current input"
    );
}
