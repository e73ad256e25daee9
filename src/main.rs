use fsearch::{
    cli::{self, USAGE},
    config::Config,
    core::OutputMode,
    error::{INTERNAL_EXIT_CODE, SearchError},
    setup_logging,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("f: {e}");
            return ExitCode::from(e.exit_code());
        }
    };

    let request = match cli::parse_args(std::env::args().skip(1), &config) {
        Ok(request) => request,
        Err(SearchError::HelpRequested) => {
            print!("{USAGE}");
            return ExitCode::from(SearchError::HelpRequested.exit_code());
        }
        Err(e) => {
            eprintln!("f: {e}\n");
            eprint!("{USAGE}");
            return ExitCode::from(e.exit_code());
        }
    };

    if let Err(e) = setup_logging(request.output_mode == OutputMode::Debug) {
        eprintln!("f: {e}");
    }

    match cli::execute_command(&config, &request) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("f: {e:#}");
            let code = e
                .downcast_ref::<SearchError>()
                .map_or(INTERNAL_EXIT_CODE, SearchError::exit_code);
            ExitCode::from(code)
        }
    }
}
