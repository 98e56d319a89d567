use clap::Parser;

use teek_cli::{Cli, run};

fn main() {
    let cli = Cli::parse();
    teek_observability::init(cli.log_format);

    match run(cli) {
        Ok(output) => print!("{output}"),
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "command failed");
            eprintln!("teek: {err:#}");
            std::process::exit(1);
        }
    }
}
