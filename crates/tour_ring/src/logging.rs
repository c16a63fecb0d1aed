use std::{
    fmt::Display,
    fs::File,
    io::{self, Write},
};

use env_logger::{Builder, Target, WriteStyle};
use log::{LevelFilter, Record};

use crate::options::{LogFormat, RunOptions};
use crate::{Error, Result};

/// Targets that follow `--log-level` directly. Everything else is capped at
/// `warn` so `--log-level trace` only opens up the ring placement traces.
const OWN_TARGETS: [&str; 2] = ["tour_ring", "touring"];

pub fn init_logger(options: &RunOptions) -> Result<()> {
    let mut builder = Builder::new();
    for (target, level) in directives(options.log_level.to_filter()) {
        builder.filter(target, level);
    }
    // RUST_LOG directives are applied last and win per target
    builder.parse_default_env();
    builder.write_style(WriteStyle::Never);

    let format = options.log_format;
    let timestamp = options.log_timestamp;
    builder.format(move |buf, record| {
        let stamp = timestamp.then(|| buf.timestamp_millis());
        write_record(buf, format, stamp, record)
    });

    builder.target(match options.log_output_path() {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                Error::other(format!("failed to create log file {}: {e}", path.display()))
            })?;
            Target::Pipe(Box::new(file))
        }
        None => Target::Stderr,
    });

    builder
        .try_init()
        .map_err(|e| Error::other(format!("logger init failed: {e}")))
}

fn directives(level: LevelFilter) -> Vec<(Option<&'static str>, LevelFilter)> {
    let mut out = vec![(None, level.min(LevelFilter::Warn))];
    out.extend(OWN_TARGETS.iter().map(|target| (Some(*target), level)));
    out
}

fn write_record(
    out: &mut impl Write,
    format: LogFormat,
    stamp: Option<impl Display>,
    record: &Record<'_>,
) -> io::Result<()> {
    if let Some(stamp) = stamp {
        write!(out, "{stamp} ")?;
    }
    let level = record.level().as_str();
    match format {
        LogFormat::Compact => writeln!(out, "{level} {}", record.args()),
        LogFormat::Pretty => writeln!(out, "{level:<5} [{}] {}", record.target(), record.args()),
    }
}
