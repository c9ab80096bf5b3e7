use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// Weagle International - spice export website
#[derive(Parser)]
#[command(name = "weagle")]
#[command(about = "Marketing site and enquiry relay for Weagle International", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Send a sample enquiry through the configured email provider
    SendTest {
        /// Which notification to send
        #[arg(long, value_enum, default_value_t = cli::send_test::Form::Sample)]
        form_type: cli::send_test::Form,

        /// Address the test enquiry claims to come from
        #[arg(long, default_value = "test@example.com")]
        email: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = weagle::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    weagle::observability::init_observability(
        "weagle",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
        Commands::SendTest { form_type, email } => {
            cli::send_test::send(config, form_type, email).await
        }
    }
}
