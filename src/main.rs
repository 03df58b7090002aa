//! Purpose: `jsontags` CLI entry point.
//! Role: Binary crate root; parses args, runs commands, emits JSON on stdout.
//! Invariants: Record output keeps declared key order (serde_json `preserve_order`).
//! Invariants: Non-interactive errors are emitted as JSON on stderr.
//! Invariants: Process exit code is derived from `api::to_exit_code`.
//! Invariants: Logs go to stderr so stdout stays machine-readable.
use std::error::Error as StdError;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum, error::ErrorKind as ClapErrorKind};
use serde_json::{Map, Value, json};
use tracing_subscriber::EnvFilter;

mod color_json;
mod command_dispatch;
mod demo;

use color_json::colorize_json;
use jsontags::api::{Error, ErrorKind, Policy, to_exit_code};

#[derive(Copy, Clone, Debug)]
struct RunOutcome {
    exit_code: i32,
}

impl RunOutcome {
    fn ok() -> Self {
        Self { exit_code: 0 }
    }

    fn with_code(exit_code: i32) -> Self {
        Self { exit_code }
    }
}

fn main() {
    init_tracing();
    let exit_code = match run() {
        Ok(outcome) => outcome.exit_code,
        Err((err, color_mode)) => {
            emit_error(&err, color_mode);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn run() -> Result<RunOutcome, (Error, ColorMode)> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp
            | ClapErrorKind::DisplayVersion
            | ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                err.print().map_err(|io_err| {
                    (
                        Error::new(ErrorKind::Io)
                            .with_message("failed to write help")
                            .with_source(io_err),
                        ColorMode::Auto,
                    )
                })?;
                let exit_code = if matches!(
                    err.kind(),
                    ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) {
                    2
                } else {
                    0
                };
                return Ok(RunOutcome::with_code(exit_code));
            }
            _ => {
                return Err((
                    Error::new(ErrorKind::Usage)
                        .with_message(clap_error_summary(&err))
                        .with_hint("Run `jsontags --help` for usage."),
                    ColorMode::Auto,
                ));
            }
        },
    };

    let color_mode = cli.color;
    command_dispatch::dispatch_command(cli.command, color_mode)
        .map_err(add_decode_hint)
        .map_err(add_internal_hint)
        .map_err(|err| (err, color_mode))
}

#[derive(Parser)]
#[command(
    name = "jsontags",
    version,
    about = "Compare how field tagging policies encode and decode JSON records",
    long_about = None,
    after_help = r#"POLICIES
  tri-state     (A) name/age keep absent vs null; employee/other always written
  omit-empty    (B) zero values and unset references are left out
  always-emit   (C) every key is written; unset references become null
  inline-other  (D) like omit-empty, but `other` is a value and always written

EXAMPLES
  $ jsontags demo
  $ jsontags zero --policy always-emit
  $ echo '{"name":null,"age":3}' | jsontags decode --policy tri-state
  $ jsontags compare '{"age":null,"employee":{"name":"x"}}'"#,
    arg_required_else_help = true
)]
struct Cli {
    #[arg(
        long,
        default_value = "auto",
        value_enum,
        help = "Colorize stderr diagnostics and pretty JSON output: auto|always|never"
    )]
    color: ColorMode,

    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn use_color(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum PolicyCli {
    #[value(alias = "a")]
    TriState,
    #[value(alias = "b")]
    OmitEmpty,
    #[value(alias = "c")]
    AlwaysEmit,
    #[value(alias = "d")]
    InlineOther,
}

impl From<PolicyCli> for Policy {
    fn from(value: PolicyCli) -> Self {
        match value {
            PolicyCli::TriState => Policy::TriState,
            PolicyCli::OmitEmpty => Policy::OmitEmpty,
            PolicyCli::AlwaysEmit => Policy::AlwaysEmit,
            PolicyCli::InlineOther => Policy::InlineOther,
        }
    }
}

#[derive(clap::Args, Debug)]
struct InputArgs {
    #[arg(help = "JSON document (reads stdin when omitted)")]
    input: Option<String>,
    #[arg(long, help = "Read the JSON document from a file", conflicts_with = "input")]
    file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Replay the four-policy walkthrough on the sample records and payload")]
    Demo,
    #[command(about = "Print the encoding of a zero-valued record")]
    Zero {
        #[arg(long, value_enum)]
        policy: PolicyCli,
    },
    #[command(about = "Decode a JSON record and print it re-encoded under the same policy")]
    Decode {
        #[arg(long, value_enum)]
        policy: PolicyCli,
        #[command(flatten)]
        input: InputArgs,
    },
    #[command(about = "Decode a JSON record under every policy and print each re-encoding")]
    Compare {
        #[command(flatten)]
        input: InputArgs,
    },
    #[command(about = "List the policies and their field rules")]
    Policies,
}

/// Raw bytes; UTF-8 is checked by the decoder so bad input reports as a decode error.
fn read_input(args: InputArgs) -> Result<Vec<u8>, Error> {
    if let Some(text) = args.input {
        return Ok(text.into_bytes());
    }
    if let Some(path) = args.file {
        return fs::read(&path).map_err(|err| {
            Error::new(ErrorKind::Io)
                .with_message(format!("failed to read {}", path.display()))
                .with_source(err)
        });
    }
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(Error::new(ErrorKind::Usage)
            .with_message("no input provided")
            .with_hint("Pass a JSON document as an argument, use --file, or pipe it on stdin."));
    }
    let mut bytes = Vec::new();
    stdin.lock().read_to_end(&mut bytes).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message("failed to read stdin")
            .with_source(err)
    })?;
    Ok(bytes)
}

fn emit_json(value: Value, color_mode: ColorMode) {
    let is_tty = io::stdout().is_terminal();
    let use_color = color_mode.use_color(is_tty);
    let pretty = is_tty || use_color;
    let json = if pretty {
        if use_color {
            colorize_json(&value, true)
        } else {
            serde_json::to_string_pretty(&value)
                .unwrap_or_else(|_| "{\"error\":\"json encode failed\"}".to_string())
        }
    } else {
        serde_json::to_string(&value)
            .unwrap_or_else(|_| "{\"error\":\"json encode failed\"}".to_string())
    };
    println!("{json}");
}

fn add_decode_hint(err: Error) -> Error {
    if err.hint().is_some() {
        return err;
    }
    match err.kind() {
        ErrorKind::Syntax => err.with_hint("Input is not valid JSON. Check the reported line and column."),
        ErrorKind::Eof => err.with_hint("Input ended early. Check for a missing closing brace or quote."),
        ErrorKind::DepthLimit => err.with_hint("Flatten the document; records may nest at most 100 levels."),
        ErrorKind::Data if err.path() == Some("$") => {
            err.with_hint("The document must be a JSON object.")
        }
        ErrorKind::Data => err.with_hint(
            "A field has the wrong JSON type: name and tagada take strings, age and salary integers.",
        ),
        _ => err,
    }
}

fn add_internal_hint(err: Error) -> Error {
    if err.kind() != ErrorKind::Internal || err.hint().is_some() {
        return err;
    }
    err.with_hint(
        "Unexpected internal failure. Retry with RUST_LOG=debug and share the input if it persists.",
    )
}

#[derive(Copy, Clone, Debug)]
enum AnsiColor {
    Red,
    Yellow,
}

fn colorize_label(label: &str, enabled: bool, color: AnsiColor) -> String {
    if !enabled {
        return label.to_string();
    }
    let code = match color {
        AnsiColor::Red => "31",
        AnsiColor::Yellow => "33",
    };
    format!("\u{1b}[{code}m{label}\u{1b}[0m")
}

fn emit_error(err: &Error, color_mode: ColorMode) {
    let is_tty = io::stderr().is_terminal();
    if is_tty {
        eprintln!("{}", error_text(err, color_mode.use_color(is_tty)));
        return;
    }

    let value = error_json(err);
    let json = serde_json::to_string(&value).unwrap_or_else(|_| {
        "{\"error\":{\"kind\":\"Internal\",\"message\":\"json encode failed\"}}".to_string()
    });
    eprintln!("{json}");
}

fn error_message(err: &Error) -> String {
    if let Some(message) = err.message() {
        return message.to_string();
    }
    match err.kind() {
        ErrorKind::Internal => "internal error".to_string(),
        ErrorKind::Usage => "usage error".to_string(),
        ErrorKind::Syntax => "malformed JSON".to_string(),
        ErrorKind::Data => "JSON does not match the record shape".to_string(),
        ErrorKind::Eof => "unexpected end of input".to_string(),
        ErrorKind::DepthLimit => "document nests too deeply".to_string(),
        ErrorKind::Io => "i/o error".to_string(),
    }
}

fn error_causes(err: &Error) -> Vec<String> {
    let mut causes = Vec::new();
    let mut cur = err.source();
    while let Some(source) = cur {
        causes.push(source.to_string());
        cur = source.source();
    }
    causes
}

fn error_json(err: &Error) -> Value {
    let mut inner = Map::new();
    inner.insert("kind".to_string(), json!(format!("{:?}", err.kind())));
    inner.insert("message".to_string(), json!(error_message(err)));
    if let Some(hint) = err.hint() {
        inner.insert("hint".to_string(), json!(hint));
    }
    if let Some(path) = err.path() {
        inner.insert("path".to_string(), json!(path));
    }
    if let Some(line) = err.line() {
        inner.insert("line".to_string(), json!(line));
    }
    if let Some(column) = err.column() {
        inner.insert("column".to_string(), json!(column));
    }
    let causes = error_causes(err);
    if !causes.is_empty() {
        inner.insert("causes".to_string(), json!(causes));
    }

    let mut outer = Map::new();
    outer.insert("error".to_string(), Value::Object(inner));
    Value::Object(outer)
}

fn error_text(err: &Error, use_color: bool) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "{} {}",
        colorize_label("error:", use_color, AnsiColor::Red),
        error_message(err)
    ));

    if let Some(hint) = err.hint() {
        lines.push(format!(
            "{} {hint}",
            colorize_label("hint:", use_color, AnsiColor::Yellow)
        ));
    }
    if let Some(path) = err.path() {
        lines.push(format!(
            "{} {path}",
            colorize_label("path:", use_color, AnsiColor::Yellow)
        ));
    }
    if let (Some(line), Some(column)) = (err.line(), err.column()) {
        lines.push(format!(
            "{} {line}:{column}",
            colorize_label("at:", use_color, AnsiColor::Yellow)
        ));
    }

    let causes = error_causes(err);
    if let Some(cause) = causes.first() {
        lines.push(format!(
            "{} {cause}",
            colorize_label("caused by:", use_color, AnsiColor::Yellow)
        ));
    }

    lines.join("\n")
}

fn clap_error_summary(err: &clap::Error) -> String {
    for line in err.to_string().lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix("error:") {
            return rest.trim().to_string();
        }
        return trimmed.to_string();
    }
    "invalid arguments".to_string()
}
