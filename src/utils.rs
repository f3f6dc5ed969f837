use console::style;

pub enum ProviderMessageType {
    Progress,
    Success,
    Warning,
}

pub fn print_provider_style(action: &str, message: &str, message_type: ProviderMessageType) {
    let action = format!("{:>12}", action);
    let styled_action = match message_type {
        ProviderMessageType::Progress => style(action).cyan().bold(),
        ProviderMessageType::Success => style(action).green().bold(),
        ProviderMessageType::Warning => style(action).yellow().bold(),
    };

    eprintln!("{} {}", styled_action, message);
}
