use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use snlc_drv::{init_logging, Config, Session};

fn main() -> ExitCode {
    let config = Config::parse();
    init_logging(config.verbose);

    let write_to_stdout = config.output_path.is_none();
    let session = Session::new(config);

    match session.run() {
        Ok(output) => {
            if write_to_stdout {
                print!("{}", output.text);
                let _ = io::stdout().flush();
            }
            if output.ok {
                ExitCode::from(0)
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(1)
        }
    }
}
