//! Command-line argument parsing for the `rx-agent` binary.

use crate::error::{AgentError, AgentResult};

pub const USAGE: &str =
    "rx-agent <interpret|extract> <input-file> [--config <path>] [--output <path>]";

/// Which half of the engine to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Transcript → intent, parameters, reply.
    Interpret,
    /// Captured document text → fields.
    Extract,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub mode: Mode,
    pub input: String,
    pub config_path: Option<String>,
    /// Report path overriding the configured output location.
    pub output: Option<String>,
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> AgentResult<CliArgs>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();

    let mode = match args.next().as_deref() {
        Some("interpret") => Mode::Interpret,
        Some("extract") => Mode::Extract,
        Some(other) => return Err(AgentError::Usage(format!("unknown mode '{other}'; {USAGE}"))),
        None => return Err(AgentError::Usage(USAGE.into())),
    };

    let mut input = None;
    let mut config_path = None;
    let mut output = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => config_path = Some(flag_value(&arg, args.next())?),
            "--output" | "-o" => output = Some(flag_value(&arg, args.next())?),
            flag if flag.starts_with('-') => {
                return Err(AgentError::Usage(format!("unknown flag '{flag}'; {USAGE}")));
            }
            _ if input.is_none() => input = Some(arg),
            _ => return Err(AgentError::Usage(format!("unexpected argument '{arg}'; {USAGE}"))),
        }
    }

    let input = input.ok_or_else(|| AgentError::Usage(format!("missing input file; {USAGE}")))?;
    Ok(CliArgs {
        mode,
        input,
        config_path,
        output,
    })
}

fn flag_value(flag: &str, value: Option<String>) -> AgentResult<String> {
    value.ok_or_else(|| AgentError::Usage(format!("{flag} requires a value")))
}
