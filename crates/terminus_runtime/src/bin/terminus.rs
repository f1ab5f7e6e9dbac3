//! Terminus CLI entry point.

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use terminus_foundation::{Limits, ScreenId};
use terminus_runtime::{
    GameConfig, Repl, Session, load_adventure, load_from_file, logging, save_to_file,
};
use terminus_storage::ScreenGraph;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    file: Option<PathBuf>,
    show_help: bool,
    show_version: bool,
    log_filter: Option<String>,
    width: Option<usize>,
    state: Option<String>,
    start: Option<String>,
    save: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn option_value(
    args: &[String],
    i: usize,
    flag: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    args.get(i)
        .cloned()
        .ok_or_else(|| format!("{flag} requires a value").into())
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            flag @ ("--log" | "--state" | "--start") => {
                i += 1;
                let value = option_value(&args, i, flag)?;
                match flag {
                    "--log" => config.log_filter = Some(value),
                    "--state" => config.state = Some(value),
                    _ => config.start = Some(value),
                }
            }
            "--width" => {
                i += 1;
                let value = option_value(&args, i, "--width")?;
                config.width = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid --width value: {value}"))?,
                );
            }
            "--save" => {
                i += 1;
                config.save = Some(PathBuf::from(option_value(&args, i, "--save")?));
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path if config.file.is_none() => config.file = Some(PathBuf::from(path)),
            path => return Err(format!("unexpected argument: {path}").into()),
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(());
    }

    if cli.show_version {
        println!("terminus {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut config = GameConfig::from_env();
    if let Some(filter) = cli.log_filter {
        config = config.with_log_filter(filter);
    }
    if let Some(width) = cli.width {
        config = config.with_limits(Limits::default().with_body_line_width(width));
    }
    logging::init(&config.log_filter)?;

    let Some(file) = cli.file else {
        return Err("no adventure file given (try --help)".into());
    };
    let graph = load_graph(&file, &config.limits)?;

    if let Some(path) = cli.save {
        save_to_file(&graph, &path)?;
        println!("Saved {} screens to {}", graph.len(), path.display());
        return Ok(());
    }

    let mut session = Session::new(graph)?;
    if let Some(start) = cli.start {
        session = session.at_screen(ScreenId::new(start))?;
    }
    if let Some(token) = cli.state {
        session = session.with_state(token)?;
    }

    let mut repl = Repl::new(session, config)?;
    repl.run()?;
    Ok(())
}

/// Loads a JSON adventure, or a snapshot for any other extension.
fn load_graph(path: &Path, limits: &Limits) -> terminus_foundation::Result<ScreenGraph> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        load_adventure(path, limits)
    } else {
        Ok(load_from_file(path)?.with_limits(limits.clone()))
    }
}

fn print_help() {
    println!(
        "\x1b[1mTerminus\x1b[0m - Screen-graph text adventures

\x1b[1mUSAGE:\x1b[0m
    terminus [OPTIONS] <ADVENTURE>

\x1b[1mARGUMENTS:\x1b[0m
    <ADVENTURE>    Adventure JSON file, or a snapshot saved with --save

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    --log FILTER       Log filter (default: $TERMINUS_LOG or \"warn\")
    --width N          Maximum body line width when loading JSON
    --state TOKEN      Resume with a previously printed state token
    --start SCREEN     Begin at the given screen id
    --save PATH        Write a snapshot of the adventure and exit

\x1b[1mEXAMPLES:\x1b[0m
    terminus castle.json                    Play castle.json
    terminus --save castle.bin castle.json  Compile to a snapshot
    terminus castle.bin --state <token>     Resume a saved game

\x1b[1mREPL COMMANDS:\x1b[0m
    :look, :inventory, :state, :help, :quit
    Ctrl+D               Exit
    Ctrl+C               Cancel current input"
    );
}
