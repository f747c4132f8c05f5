use clap::Parser;
use std::path::PathBuf;

/// One-line error printed after the usage text when the APK is missing.
pub const MISSING_APK: &str = "Cannot take the checksum without an APK.";

#[derive(Parser, Debug)]
#[command(name = "apk-checksum")]
#[command(version)]
#[command(about = "Compute the content checksum of an APK", long_about = None)]
#[command(after_help = "The checksum covers the stored bytes of every *.so and *classes.dex entry.\n\
Output is 256 bytes as hex, 16 per line.")]
pub struct Cli {
    /// Path to the APK file
    #[arg(value_name = "APK")]
    pub apk: PathBuf,

    /// Log archive parsing details to stderr
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,
}
