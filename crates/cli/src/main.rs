use std::process::ExitCode;

fn main() -> ExitCode {
    giftery_cli::run()
}
