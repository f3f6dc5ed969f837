use anyhow::Result;
use clap::Parser;
use log::info;
use onepassword_urlprovider::cli::{ProviderCli, ProviderCmd, ResolveArgs};
use onepassword_urlprovider::command;
use onepassword_urlprovider::version_table::VersionTable;

fn main() -> Result<()> {
    human_panic::setup_panic!(human_panic::Metadata::new(
        "onepassword-urlprovider",
        env!("CARGO_PKG_VERSION")
    ));

    let env = env_logger::Env::new()
        .filter("ONEPASSWORD_URLPROVIDER_LOG")
        .write_style("ONEPASSWORD_URLPROVIDER_LOG_STYLE");
    env_logger::init_from_env(env);

    info!("Parsing command line arguments.");
    let args = ProviderCli::parse();

    let table = VersionTable::new();

    match args.command {
        None => command::resolve(&ResolveArgs::default(), &table),
        Some(ProviderCmd::Resolve(args)) => command::resolve(&args, &table),
        Some(ProviderCmd::Versions {}) => command::versions(&table),
        Some(ProviderCmd::Sources(args)) => command::sources(&args, &table),
    }
}
