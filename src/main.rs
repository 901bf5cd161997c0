use clap::Parser;

use hexflate::OutputFormat;

#[derive(Parser)]
#[command(name = "hexflate")]
#[command(about = "Compress hex-encoded bytes and print the raw DEFLATE payload as hex")]
struct Cli {
    #[arg(help = "Hex-encoded input bytes, with or without a 0x prefix")]
    data: String,
    #[arg(
        long,
        help = "Output framing (length-prefixed, bare)",
        default_value = "length-prefixed"
    )]
    format: String,
}

fn main() {
    let cli = Cli::parse();

    let format = match cli.format.to_lowercase().as_str() {
        "length-prefixed" => OutputFormat::LengthPrefixed,
        "bare" => OutputFormat::Bare,
        _ => {
            eprintln!(
                "Error: Invalid format '{}'. Valid options: length-prefixed, bare",
                cli.format
            );
            std::process::exit(1);
        }
    };

    match hexflate::compress_hex(&cli.data, format) {
        Ok(line) => println!("{}", line),
        Err(e) => {
            eprintln!("Error compressing data: {}", e);
            std::process::exit(1);
        }
    }
}
