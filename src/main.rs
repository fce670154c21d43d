use std::io;
use std::process::exit;

use anyhow::{Context, Result};
use log::debug;
use structopt::StructOpt;

use hello_hostname::greeting::greeting;
use hello_hostname::utils::hostname;

#[derive(Debug, StructOpt)]
#[structopt(setting = structopt::clap::AppSettings::AllowLeadingHyphen)]
struct CliOpt {
    /// Ignored; stray arguments do not abort the run.
    #[structopt(hidden = true)]
    args: Vec<String>,
}

/// Set up the global log sink on stderr.
///
/// Kept at warn so regular runs write nothing but the greeting itself.
/// Best-effort: only a second apply in the same process can fail, and a
/// missing logger does not touch the output contract.
fn init_logger() {
    let _ = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}] {}",
                record.level(),
                record.target(),
                message,
            ))
        })
        .level(log::LevelFilter::Warn)
        .chain(io::stderr())
        .apply();
}

fn run() -> Result<()> {
    let name = hostname().context("could not determine hostname")?;
    debug!("gethostname(2) returned '{}'", name);
    println!("{}", greeting(&name));
    Ok(())
}

/// Maps the run outcome to the process exit code, printing the fixed
/// diagnostic on the failure path.
fn exit_code(outcome: Result<()>) -> i32 {
    match outcome {
        Ok(()) => 0,
        Err(e) => {
            debug!("{:#}", e);
            eprintln!("Error getting hostname");
            1
        }
    }
}

fn main() {
    let _opt = CliOpt::from_args();

    init_logger();

    exit(exit_code(run()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_maps_to_exit_code() {
        assert_eq!(exit_code(Ok(())), 0);
        assert_eq!(exit_code(Err(anyhow::anyhow!("lookup failed"))), 1);
    }
}
