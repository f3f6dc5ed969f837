use crate::cli::ResolveArgs;
use crate::processor_env::{
    ProcessorEnv, BASE_URL_KEY, MAJOR_VERSION_KEY, SOURCE_KEY, URL_KEY,
};
use crate::resolver::UrlResolver;
use crate::transport::HttpTransport;
use crate::utils::{print_provider_style, ProviderMessageType};
use crate::version_table::VersionTable;
use anyhow::{Context, Result};

pub fn run(args: &ResolveArgs, table: &VersionTable) -> Result<()> {
    let stdin = std::io::stdin();

    let mut env = if !args.no_stdin && !is_terminal::is_terminal(&stdin) {
        ProcessorEnv::from_reader(stdin.lock())
            .with_context(|| "`resolve` command failed to read the input environment.")?
    } else {
        ProcessorEnv::new()
    };

    env.apply_args(&args.vars)?;

    if let Some(major_version) = &args.endpoint.major_version {
        env.set(MAJOR_VERSION_KEY, major_version);
    }
    if let Some(base_url) = &args.endpoint.base_url {
        env.set(BASE_URL_KEY, base_url);
    }
    if let Some(source) = &args.source {
        env.set(SOURCE_KEY, source);
    }

    let request = env.resolution_request()?;

    let transport = HttpTransport::new()?;
    let resolver = UrlResolver::new(table, transport);

    let resolution = resolver
        .resolve(&request)
        .with_context(|| "Failed to resolve the 1Password download URL.")?;

    print_provider_style(
        "Found",
        &format!(
            "1Password {} on {}: {}",
            resolution.version.as_deref().unwrap_or("(unknown version)"),
            resolution.source,
            resolution.url
        ),
        ProviderMessageType::Success,
    );

    env.set(URL_KEY, &resolution.url);
    env.write_to(std::io::stdout().lock())?;

    Ok(())
}
