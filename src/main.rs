use pio_defines::convert::{self, ConvertConfig};

#[derive(clap::Parser)]
#[command(name = "pio-defines")]
#[command(about = "Convert a config header of #define macros to PlatformIO -D build flags")]
struct Cli {
    /// Filename stem: the header is read from <STEM>.h and the flag list
    /// is written to <STEM>.txt
    stem: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    use clap::Parser as _;
    let cli = Cli::parse();

    let config = ConvertConfig::new(cli.stem);
    convert::convert(&config)?;

    Ok(())
}
