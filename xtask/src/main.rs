//! Binary entrypoint for workspace developer commands (`cargo xtask`).

fn main() -> std::process::ExitCode {
    xtask::exit_code(xtask::execute_from_env())
}
