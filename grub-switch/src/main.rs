use clap::Parser;
use grub_switch::{cli::Cli, logging};

fn main() {
    let cli = Cli::parse();
    logging::init_with(cli.log_file.clone());
    log::debug!("CLI args parsed: {:?}", cli);

    if let Err(e) = grub_switch::run(&cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}
