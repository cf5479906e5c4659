use std::process;

use clap::error::ErrorKind;
use clap::Parser;

use nsfw_inference::cli::args::Cli;
use nsfw_inference::cli::{classify, logging};
use nsfw_inference::error::NsfwError;
use nsfw_inference::output;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e)
            if matches!(
                e.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) =>
        {
            let _ = e.print();
            return;
        }
        Err(_) => {
            // Argument errors follow the JSON contract: error object on
            // stdout, exit code 1.
            println!("{}", output::error_line(&NsfwError::Usage));
            process::exit(1);
        }
    };

    logging::set_verbose(cli.verbose);

    match classify::run(&cli) {
        Ok(scores) => println!("{}", output::scores_line(&scores)),
        Err(e) => {
            println!("{}", output::error_line(&e));
            process::exit(1);
        }
    }
}
