use clap::Parser;

use mindband_showcase::cli::{self, Cli};
use mindband_showcase::infra::logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::run(&cli, &mut out)
}
