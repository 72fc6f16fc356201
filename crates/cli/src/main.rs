use anyhow::Context;
use bookshelf_kernel::Settings;
use clap::{Parser, Subcommand};

/// In-memory book catalog service
#[derive(Debug, Parser)]
#[command(name = "bookshelf", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server until Ctrl-C or SIGTERM
    Serve {
        /// Override `server.host`
        #[arg(long)]
        host: Option<String>,
        /// Override `server.port`
        #[arg(long, short)]
        port: Option<u16>,
    },
    /// Print the effective settings as JSON
    Config,
    /// Print the merged OpenAPI document as JSON
    Openapi,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load().with_context(|| "failed to load bookshelf settings")?;

    match cli.command {
        Command::Serve { host, port } => {
            if let Some(host) = host {
                settings.server.host = host;
            }
            if let Some(port) = port {
                settings.server.port = port;
            }

            bookshelf_telemetry::init(&settings.telemetry);
            tracing::info!(
                env = ?settings.environment,
                address = %settings.server.bind_address(),
                "bookshelf CLI serving"
            );

            let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
            runtime.block_on(bookshelf_app::bootstrap::run(settings))
        }
        Command::Config => {
            let rendered = serde_json::to_string_pretty(&settings)
                .context("failed to render settings")?;
            println!("{rendered}");
            Ok(())
        }
        Command::Openapi => {
            let registry = bookshelf_app::bootstrap::registry(&settings);
            let document = bookshelf_http::router::openapi_document(&registry);
            let rendered =
                serde_json::to_string_pretty(&document).context("failed to render OpenAPI document")?;
            println!("{rendered}");
            Ok(())
        }
    }
}
