use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[clap(name = "onepassword-urlprovider", version)]
#[command(
    after_help = "Without a subcommand the input variables are read from stdin (a JSON object) and
the resolved environment, including `url`, is written to stdout."
)]
/// Provides a download URL for the latest 1Password
pub struct ProviderCli {
    #[clap(subcommand)]
    pub command: Option<ProviderCmd>,
}

#[derive(Subcommand)]
pub enum ProviderCmd {
    /// Resolve the download URL and print the output environment
    Resolve(ResolveArgs),
    /// List the supported major versions and their update check urls
    #[clap(alias = "ls")]
    Versions {},
    /// List the download sources offered by the update check endpoint
    Sources(EndpointArgs),
}

#[derive(Args, Default)]
pub struct EndpointArgs {
    /// The 1Password major version to get, one of 4, 5, 6 or 7
    #[clap(long)]
    pub major_version: Option<String>,
    /// The 1Password update check url
    #[clap(long)]
    pub base_url: Option<String>,
}

#[derive(Args, Default)]
pub struct ResolveArgs {
    #[clap(flatten)]
    pub endpoint: EndpointArgs,
    /// Where to download the disk image, e.g. 'Amazon CloudFront', 'CacheFly' or 'AgileBits'
    #[clap(long)]
    pub source: Option<String>,
    /// Do not read input variables from stdin
    #[clap(long)]
    pub no_stdin: bool,
    /// Additional input variables given as `key=value`
    pub vars: Vec<String>,
}
