use clap::Parser;

use crate::envfile::Environment;
use crate::manifest::PackageManager;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "stackenv",
    about = "Run a package.json script and turn its stack outputs into an env file",
    version
)]
pub struct Cli {
    /// The package.json script to run (e.g. "deploy").
    #[arg(value_name = "SCRIPT")]
    pub script: Option<String>,

    /// Package manager to run the script with.
    #[arg(long, value_enum)]
    pub manager: Option<PackageManager>,

    /// Target environment; picks the env file name.
    #[arg(long, value_enum)]
    pub environment: Option<Environment>,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
