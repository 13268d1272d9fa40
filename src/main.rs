use clap::{Parser, Subcommand};
use log::error;
use qrforge::cli::{self, EncodeArgs};
use qrforge::configuration::config::Config;
use qrforge::controller::controller_handler::Controller;

#[derive(Parser)]
#[command(name = "qrforge")]
#[command(version = "0.1.0")]
#[command(about = "Turns URLs into downloadable QR code artifacts")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the web service
    Serve(Config),
    /// Generate the files once from the command line
    Encode(EncodeArgs),
}

#[tokio::main]
async fn main() {
    // Example how to log
    // https://docs.rs/env_logger/latest/env_logger/
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .init();

    let args = Args::parse();

    match args.command {
        Command::Serve(config) => {
            println!(
                "
 ██████╗ ██████╗ ███████╗ ██████╗ ██████╗  ██████╗ ███████╗
██╔═══██╗██╔══██╗██╔════╝██╔═══██╗██╔══██╗██╔════╝ ██╔════╝
██║   ██║██████╔╝█████╗  ██║   ██║██████╔╝██║  ███╗█████╗
██║▄▄ ██║██╔══██╗██╔══╝  ██║   ██║██╔══██╗██║   ██║██╔══╝
╚██████╔╝██║  ██║██║     ╚██████╔╝██║  ██║╚██████╔╝███████╗
 ╚══▀▀═╝ ╚═╝  ╚═╝╚═╝      ╚═════╝ ╚═╝  ╚═╝ ╚═════╝ ╚══════╝
===========================================================
      Turns URLs into downloadable QR code artifacts
===========================================================
"
            );

            if let Err(e) = Controller::new(config).run().await {
                error!("{}, exiting...", e);
                std::process::exit(1);
            }
        }
        Command::Encode(encode_args) => {
            if let Err(e) = cli::run(encode_args) {
                error!("{}", e);
                std::process::exit(1);
            }
        }
    }
}
