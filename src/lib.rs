pub mod assets;
pub mod config;
pub mod email;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod template;

pub use routes::AppState;

/// Build the application state from configuration
///
/// Selects the configured email provider and wires it into the enquiry
/// command.
pub fn create_state(config: config::Config) -> anyhow::Result<AppState> {
    let mailer = email::create_mailer(&config.email)?;
    let enquiry_command = weagle_enquiry::Command::new(
        mailer,
        config.email.from_address.to_owned(),
        config.email.recipients.to_owned(),
    );

    Ok(AppState {
        config,
        enquiry_command,
    })
}
