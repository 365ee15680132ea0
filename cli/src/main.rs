//! miniapp-bootstrap runs the Mini App init-data handshake once.

use anyhow::Context;
use clap::Parser;
use miniapp_acquirer::PageLocation;
use miniapp_bootstrap::{Bootstrap, BootstrapConfig};
use miniapp_render::Renderer;
use miniapp_utils::LogFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "miniapp-bootstrap", about = "Telegram Mini App init-data bootstrap")]
struct Cli {
    /// Base URL of the backend serving `/auth/init`.
    #[arg(long, env = "MINIAPP_ENDPOINT")]
    endpoint: Option<String>,

    /// Wait between host object polls, in milliseconds.
    #[arg(long, env = "MINIAPP_POLL_INTERVAL_MS")]
    poll_interval_ms: Option<u64>,

    /// Bound on host object polling, in milliseconds.
    #[arg(long, env = "MINIAPP_POLL_TIMEOUT_MS")]
    poll_timeout_ms: Option<u64>,

    /// Ignore init data found in the page's query string.
    #[arg(long, env = "MINIAPP_DISABLE_URL_QUERY")]
    disable_url_query: bool,

    /// Abandon the verification request after this many milliseconds.
    #[arg(long, env = "MINIAPP_REQUEST_TIMEOUT_MS")]
    request_timeout_ms: Option<u64>,

    /// Log format: "human" or "json".
    #[arg(long, env = "MINIAPP_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "MINIAPP_LOG_LEVEL")]
    log_level: Option<String>,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Acquire init data, verify it and print the rendered outcome.
    Run {
        /// Full page URL, including query string and fragment.
        #[arg(long, env = "MINIAPP_PAGE_URL")]
        url: Option<String>,

        /// Init data exposed by the host integration object, if any.
        #[arg(long, env = "MINIAPP_HOST_INIT_DATA")]
        host_init_data: Option<String>,

        /// Print the rendered view as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Check that the backend is up.
    Health,
}

impl Cli {
    /// File settings (or defaults), overridden by flags and env vars.
    fn resolve_config(&self) -> anyhow::Result<BootstrapConfig> {
        let mut config = match &self.config {
            Some(path) => BootstrapConfig::from_toml_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => BootstrapConfig::default(),
        };

        if let Some(endpoint) = &self.endpoint {
            config.endpoint_base_url = endpoint.clone();
        }
        if let Some(ms) = self.poll_interval_ms {
            config.poll_interval_ms = ms;
        }
        if let Some(ms) = self.poll_timeout_ms {
            config.poll_timeout_ms = ms;
        }
        if self.disable_url_query {
            config.enable_url_query = false;
        }
        if self.request_timeout_ms.is_some() {
            config.request_timeout_ms = self.request_timeout_ms;
        }
        if let Some(format) = self.log_format {
            config.log_format = format;
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    miniapp_utils::init_logging(config.log_format, &config.log_level);

    if cli.config.is_some() {
        tracing::info!("loaded config, endpoint {}", config.endpoint_base_url);
    }

    match cli.command {
        Command::Run {
            url,
            host_init_data,
            json,
        } => {
            let location = match url.as_deref() {
                Some(url) => PageLocation::parse(url).context("parsing --url")?,
                None => PageLocation::empty(),
            };
            if host_init_data.is_none() {
                tracing::debug!("no host object, page opened outside Telegram");
            }
            let host = move || host_init_data.clone();

            let bootstrap = Bootstrap::from_config(host, &config);
            let outcome = bootstrap.run(&location).await;
            let view = Renderer::local().render(&outcome);

            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                println!("{view}");
            }
        }
        Command::Health => {
            let client = config.verifier_client();
            let healthy = client
                .health()
                .await
                .with_context(|| format!("probing {}", client.base_url()))?;
            if healthy {
                println!("ok");
            } else {
                anyhow::bail!("backend at {} reported unhealthy", client.base_url());
            }
        }
    }

    Ok(())
}
