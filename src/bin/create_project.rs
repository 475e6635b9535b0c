// create-project: scaffold a new project directory

use clap::Parser;
use std::process;
use projkit::cli::CreateCommand;
use projkit::utils::error::UserError;
use projkit::utils::logging;

fn main() {
    let command = CreateCommand::parse();
    logging::init(command.verbose);

    if let Err(err) = command.run() {
        let user_error = UserError::from_anyhow(&err);
        user_error.print();
        process::exit(user_error.exit_code);
    }
}
