// directory-tree: print a directory as an indented tree

use clap::Parser;
use std::process;
use projkit::cli::TreeCommand;
use projkit::utils::error::UserError;
use projkit::utils::logging;

fn main() {
    let command = TreeCommand::parse();
    logging::init(command.verbose);

    if let Err(err) = command.run() {
        let user_error = UserError::from_anyhow(&err);
        user_error.print();
        process::exit(user_error.exit_code);
    }
}
