use crate::cli::EndpointArgs;
use crate::resolver::{ResolutionRequest, UrlResolver};
use crate::transport::HttpTransport;
use crate::utils::{print_provider_style, ProviderMessageType};
use crate::version_table::VersionTable;
use anyhow::{Context, Result};
use cli_table::{
    format::{Border, HorizontalLine, Separator},
    print_stdout, ColorChoice, Table, WithTitle,
};

#[derive(Table)]
struct SourceRow {
    #[table(title = "Source")]
    name: String,
    #[table(title = "URL")]
    url: String,
}

pub fn run(args: &EndpointArgs, table: &VersionTable) -> Result<()> {
    let request = ResolutionRequest {
        major_version: args.major_version.clone(),
        base_url: args.base_url.clone(),
        source: None,
    };

    let transport = HttpTransport::new()?;
    let resolver = UrlResolver::new(table, transport);

    let update_data = resolver
        .fetch_update_data(&request)
        .with_context(|| "`sources` command failed to download the update data.")?;

    print_provider_style(
        "Version",
        update_data
            .version_string()
            .as_deref()
            .unwrap_or("(unknown)"),
        ProviderMessageType::Progress,
    );

    let rows_in_table: Vec<SourceRow> = update_data
        .source_entries()
        .map(|source| SourceRow {
            name: source.name.to_string(),
            url: source.url.unwrap_or_default().to_string(),
        })
        .collect();

    if rows_in_table.is_empty() {
        print_provider_style(
            "Sources",
            "The update check endpoint did not offer any download sources.",
            ProviderMessageType::Warning,
        );
        return Ok(());
    }

    print_stdout(
        rows_in_table
            .with_title()
            .color_choice(ColorChoice::Never)
            .border(Border::builder().build())
            .separator(
                Separator::builder()
                    .title(Some(HorizontalLine::new('1', '2', '3', '-')))
                    .build(),
            ),
    )?;

    Ok(())
}
