use crate::version_table::{VersionTable, DEFAULT_MAJOR_VERSION};
use anyhow::Result;
use cli_table::{
    format::{Border, HorizontalLine, Separator},
    print_stdout, ColorChoice, Table, WithTitle,
};

#[derive(Table)]
struct VersionRow {
    #[table(title = "Default")]
    default: String,
    #[table(title = "Major Version")]
    major_version: String,
    #[table(title = "Update URL")]
    update_url: String,
}

pub fn run(table: &VersionTable) -> Result<()> {
    let rows_in_table: Vec<VersionRow> = table
        .entries()
        .map(|(major_version, update_url)| VersionRow {
            default: if major_version == DEFAULT_MAJOR_VERSION {
                "*".to_string()
            } else {
                String::new()
            },
            major_version: major_version.to_string(),
            update_url: update_url.to_string(),
        })
        .collect();

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
