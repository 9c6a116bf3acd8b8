use env_logger::{Env, Target};
use log::SetLoggerError;
use std::io::Write;

/// Log to stderr so rendered boards on stdout stay clean. `RUST_LOG` overrides
/// the default filter.
pub fn init(verbose: bool) -> Result<(), SetLoggerError> {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] [{}] {}",
                buf.timestamp_millis(),
                record.level(),
                record.target(),
                record.args().to_string().replace('\n', "\\n")
            )
        })
        .try_init()
}
