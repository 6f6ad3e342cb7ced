//! Command-line argument parsing.

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Version,
    Help,
    /// Run the TUI, optionally against another backend.
    RunTui { api_url: Option<String> },
    /// Bad invocation; the message goes to stderr.
    Invalid(String),
}

/// Parse `args`, program name included.
///
/// ```
/// use termfolio::cli::{parse_args, CliCommand};
///
/// let args = vec!["termfolio".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut api_url = None;
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--api-url" => match args.next() {
                Some(url) => api_url = Some(url),
                None => return CliCommand::Invalid("--api-url needs a value".to_string()),
            },
            other => match other.strip_prefix("--api-url=") {
                Some(url) => api_url = Some(url.to_string()),
                None => return CliCommand::Invalid(format!("unknown argument: {other}")),
            },
        }
    }
    CliCommand::RunTui { api_url }
}

pub const USAGE: &str = "\
usage: termfolio [--api-url URL]

options:
  --api-url URL   portfolio backend (default from TERMFOLIO_API_URL)
  -V, --version   print the version
  -h, --help      print this help";
