//! One-shot generation from the command line, no server involved.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;
use log::debug;

use crate::encoding::encoder_trait::Encoder;
use crate::encoding::format::QrFormat;
use crate::encoding::qr_encoder::QrEncoder;
use crate::error_handling::types::CliError;
use crate::validation::validate_url;

/// Arguments for `qrforge encode`.
#[derive(Args, Debug, Clone)]
pub struct EncodeArgs {
    /// URL to encode; prompted for interactively when omitted
    pub url: Option<String>,

    /// Directory the files are written to
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
}

/// Write qr_code.<ext> for every format plus url.txt into the output directory.
pub fn run(args: EncodeArgs) -> Result<(), CliError> {
    let url = match args.url {
        Some(url) => url,
        None => prompt_url()?,
    };
    validate_url(&url).map_err(CliError::Validation)?;

    let encoder = QrEncoder::new();
    fs::create_dir_all(&args.out_dir)?;

    for format in QrFormat::ALL {
        let bytes = encoder.encode(&url, format).map_err(CliError::Encode)?;
        let path = args.out_dir.join(format!("qr_code.{}", format.extension()));
        fs::write(&path, bytes)?;
        debug!("Wrote {}", path.display());
    }

    fs::write(args.out_dir.join("url.txt"), &url)?;

    println!("QR Code saved in PNG, SVG, EPS, and PDF formats.");
    println!("URL saved to url.txt");

    Ok(())
}

fn prompt_url() -> Result<String, CliError> {
    print!("Enter the URL to generate its QR Code: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
