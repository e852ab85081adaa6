//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use courier_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn main() {
    match courier_cli::run() {
        Ok(()) => {}
        // Clap renders help, version and usage errors itself.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("courier: {err}");
            std::process::exit(1);
        }
    }
}
