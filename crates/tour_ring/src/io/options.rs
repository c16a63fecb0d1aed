use std::{env, fmt, iter::Peekable, path::Path};

use log::LevelFilter;

use crate::{Error, InsertionHeuristic, Result};

/// Runtime options for the tour driver.
#[derive(Clone, Debug)]
pub struct RunOptions {
    /// Heuristic applied to every incoming point.
    pub heuristic: InsertionHeuristic,
    /// Structured logging level.
    pub log_level: LogLevel,
    /// Logging output format.
    pub log_format: LogFormat,
    /// Include timestamps in log lines.
    pub log_timestamp: bool,
    /// Optional output file path for logs and metrics. Empty means stderr.
    pub log_output: String,
    /// Optional input file path for points. Empty means stdin.
    pub input: String,
    /// Optional output file path for the ordered tour. Empty means stdout.
    pub output: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl LogLevel {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            "off" => Ok(Self::Off),
            _ => Err(Error::invalid_input(format!(
                "Invalid value for --log-level: {raw} (expected error|warn|info|debug|trace|off)"
            ))),
        }
    }

    pub fn to_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
            Self::Off => LevelFilter::Off,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogFormat {
    Compact,
    Pretty,
}

impl LogFormat {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            _ => Err(Error::invalid_input(format!(
                "Invalid value for --log-format: {raw} (expected compact|pretty)"
            ))),
        }
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            heuristic: InsertionHeuristic::Smallest,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Compact,
            log_timestamp: true,
            log_output: String::new(),
            input: String::new(),
            output: String::new(),
        }
    }
}

impl fmt::Display for RunOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "heuristic={} log_level={:?} log_format={:?} log_timestamp={} log_output={} input={} output={}",
            self.heuristic,
            self.log_level,
            self.log_format,
            self.log_timestamp,
            or_dash(&self.log_output),
            or_dash(&self.input),
            or_dash(&self.output),
        )
    }
}

impl RunOptions {
    pub fn from_args() -> Result<Self> {
        Self::parse_from_iter(env::args().skip(1))
    }

    fn parse_from_iter<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        let mut args = args
            .into_iter()
            .map(|arg| arg.as_ref().to_owned())
            .peekable();

        while let Some((name, value)) = next_option(&mut args)? {
            options.apply(&name, value)?;
        }

        Ok(options)
    }

    fn apply(&mut self, name: &str, value: Option<String>) -> Result<()> {
        match name {
            "heuristic" => {
                self.heuristic = InsertionHeuristic::parse(&required(name, value)?)?;
            }
            "log-level" => self.log_level = LogLevel::parse(&required(name, value)?)?,
            "log-format" => self.log_format = LogFormat::parse(&required(name, value)?)?,
            "log-output" => self.log_output = required(name, value)?,
            "input" => self.input = required(name, value)?,
            "output" => self.output = required(name, value)?,
            "log-timestamp" => {
                self.log_timestamp = match value {
                    Some(v) => parse_switch(name, &v)?,
                    None => true,
                };
            }
            "no-log-timestamp" => {
                if value.is_some() {
                    return Err(Error::invalid_input(format!(
                        "Flag --{name} does not take a value"
                    )));
                }
                self.log_timestamp = false;
            }
            _ => {
                return Err(Error::invalid_input(format!(
                    "Unknown option: --{name}\n\n{}",
                    Self::usage()
                )));
            }
        }
        Ok(())
    }

    pub fn usage() -> &'static str {
        concat!(
            "Builds a closed tour by inserting points one at a time.\n\n",
            "Usage: touring [options] [--input points.txt | < points.txt]\n\n",
            "  --heuristic <beginning|nearest|smallest>  placement rule (default: smallest)\n",
            "  --input <path>                            x,y tokens, stdin when omitted\n",
            "  --output <path>                           tour points, stdout when omitted\n",
            "  --log-level <error|warn|info|debug|trace|off>\n",
            "  --log-format <compact|pretty>\n",
            "  --log-timestamp[=<bool>] | --no-log-timestamp\n",
            "  --log-output <path>                       stderr when omitted\n",
            "  -h, --help\n\n",
            "RUST_LOG, when set, refines the --log-level filter, e.g. RUST_LOG=tour_ring::ring=trace\n",
        )
    }

    pub fn log_output_path(&self) -> Option<&Path> {
        optional_path(&self.log_output)
    }

    pub fn output_path(&self) -> Option<&Path> {
        optional_path(&self.output)
    }

    pub fn input_path(&self) -> Option<&Path> {
        optional_path(&self.input)
    }
}

/// Pulls the next `--name[=value]` or `--name value` pair off `args`.
fn next_option(
    args: &mut Peekable<impl Iterator<Item = String>>,
) -> Result<Option<(String, Option<String>)>> {
    let Some(arg) = args.next() else {
        return Ok(None);
    };
    if arg == "--help" || arg == "-h" {
        return Err(Error::invalid_input(RunOptions::usage()));
    }

    let name = match arg.strip_prefix("--") {
        Some("") => {
            return Err(Error::invalid_input(format!("Invalid option name: {arg}")));
        }
        Some(name) => name,
        None => {
            return Err(Error::invalid_input(format!(
                "Unexpected argument: {arg}\n\n{}",
                RunOptions::usage()
            )));
        }
    };

    if let Some((k, v)) = name.split_once('=') {
        return Ok(Some((k.to_string(), Some(v.to_string()))));
    }
    let value = args.next_if(|next| !next.starts_with("--"));
    Ok(Some((name.to_string(), value)))
}

fn required(name: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| Error::invalid_input(format!("Missing value for --{name}")))
}

fn optional_path(raw: &str) -> Option<&Path> {
    match raw.trim() {
        "" | "-" => None,
        raw => Some(Path::new(raw)),
    }
}

fn or_dash(raw: &str) -> &str {
    if raw.is_empty() { "-" } else { raw }
}

fn parse_switch(name: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::invalid_input(format!(
            "Invalid boolean for --{name}: {value} (expected true/false)"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use log::LevelFilter;

    use super::{LogFormat, LogLevel, RunOptions, parse_switch};
    use crate::{Error, InsertionHeuristic};

    fn parse(args: &[&str]) -> RunOptions {
        RunOptions::parse_from_iter(args).expect("options should parse")
    }

    fn reject(args: &[&str]) -> String {
        RunOptions::parse_from_iter(args)
            .expect_err("options should be rejected")
            .to_string()
    }

    #[test]
    fn switches_are_case_insensitive() {
        assert!(parse_switch("x", "Yes").expect("switch"));
        assert!(parse_switch("x", "ON").expect("switch"));
        assert!(!parse_switch("x", "False").expect("switch"));
        assert!(!parse_switch("x", "0").expect("switch"));
        assert!(matches!(
            parse_switch("log-timestamp", "maybe"),
            Err(Error::InvalidInput(msg)) if msg.contains("--log-timestamp: maybe")
        ));
    }

    #[test]
    fn log_levels_parse_and_map_to_filters() {
        assert_eq!(LogLevel::parse("WARNING").expect("level"), LogLevel::Warn);
        assert_eq!(
            LogLevel::parse("trace").expect("level").to_filter(),
            LevelFilter::Trace
        );
        assert_eq!(LogLevel::Off.to_filter(), LevelFilter::Off);
        assert!(LogLevel::parse("verbose").is_err());
    }

    #[test]
    fn values_may_be_attached_or_separate() {
        let options = parse(&[
            "--heuristic=nearest",
            "--log-level",
            "debug",
            "--log-format=pretty",
            "--input",
            "points.txt",
            "--output=tour.txt",
            "--log-output",
            "run.log",
        ]);

        assert_eq!(options.heuristic, InsertionHeuristic::Nearest);
        assert_eq!(options.log_level, LogLevel::Debug);
        assert_eq!(options.log_format, LogFormat::Pretty);
        assert_eq!(options.input_path(), Some(Path::new("points.txt")));
        assert_eq!(options.output_path(), Some(Path::new("tour.txt")));
        assert_eq!(options.log_output_path(), Some(Path::new("run.log")));
    }

    #[test]
    fn no_arguments_keep_defaults() {
        let options = parse(&[]);
        assert_eq!(options.heuristic, InsertionHeuristic::Smallest);
        assert_eq!(options.log_level, LogLevel::Warn);
        assert!(options.log_timestamp);
        assert!(options.input_path().is_none());
        assert!(options.output_path().is_none());
        assert!(options.log_output_path().is_none());
    }

    #[test]
    fn timestamp_flag_forms() {
        assert!(parse(&["--log-timestamp"]).log_timestamp);
        assert!(!parse(&["--log-timestamp=off"]).log_timestamp);
        assert!(!parse(&["--no-log-timestamp"]).log_timestamp);
        assert!(reject(&["--no-log-timestamp=true"]).contains("does not take a value"));
    }

    #[test]
    fn dash_means_standard_stream() {
        let options = parse(&["--input", "-", "--output=-"]);
        assert!(options.input_path().is_none());
        assert!(options.output_path().is_none());
    }

    #[test]
    fn malformed_arguments_are_rejected() {
        assert!(reject(&["--two-opt"]).contains("Unknown option: --two-opt"));
        assert!(reject(&["points.txt"]).contains("Unexpected argument: points.txt"));
        assert!(reject(&["--"]).contains("Invalid option name"));
        assert!(reject(&["--heuristic"]).contains("Missing value for --heuristic"));
        assert!(reject(&["--heuristic", "--input=a"]).contains("Missing value for --heuristic"));
        assert!(reject(&["--heuristic=greedy"]).contains("Invalid value for --heuristic: greedy"));
    }

    #[test]
    fn help_short_circuits_with_usage() {
        assert!(reject(&["-h"]).contains("Usage: touring"));
        assert!(reject(&["--input=a", "--help"]).contains("--heuristic"));
    }

    #[test]
    fn display_lists_every_option() {
        let text = RunOptions::default().to_string();
        assert!(text.contains("heuristic=smallest"));
        assert!(text.contains("input=-"));
        assert!(text.contains("log_timestamp=true"));
    }
}
