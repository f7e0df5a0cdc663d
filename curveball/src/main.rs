//! `curveball` server: one session over stdin/stdout.
//!
//! The secret is read from the `FLAG` environment variable.

use curveball::{Config, Session};
use rand_core::{OsRng, UnwrapErr};
use std::{io, process::ExitCode};

fn main() -> ExitCode {
    let config = Config::from_env();
    let mut session = Session::new(
        &config,
        io::stdin().lock(),
        io::stdout().lock(),
        UnwrapErr(OsRng),
    );

    let Err(err) = session.run() else {
        return ExitCode::SUCCESS;
    };

    match session.report(&err) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
