use clap::Parser;
use name_resolver_domain::CliOverrides;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "name-resolver")]
#[command(version)]
#[command(
    about = "DNS server that resolves container names and labels to IP addresses",
    long_about = "Inspects running Docker containers, applies the given filters and \
                  mappings, and answers DNS queries from them. Names that cannot be \
                  resolved locally are forwarded to the fallback DNS servers."
)]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Containers name filter
    #[arg(short = 'n', long)]
    name: Option<String>,

    /// Containers labels (repeatable)
    #[arg(short = 'l', long = "label", value_name = "LABEL")]
    labels: Vec<String>,

    /// Hostname to container name mapping in format hostname:container_name (repeatable)
    #[arg(short = 'm', long = "map", value_name = "HOSTNAME:CONTAINER")]
    maps: Vec<String>,

    /// Fallback DNS address (repeatable, replaces the default list)
    #[arg(short = 'd', long = "fallback-dns", value_name = "ADDR")]
    fallback_dns: Vec<String>,

    /// Docker daemon address (unix:///path or tcp://host:port)
    #[arg(long)]
    docker_host: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.port,
        bind_address: cli.bind,
        log_level: cli.log_level,
        name: cli.name,
        labels: cli.labels,
        overrides: cli.maps,
        fallback_servers: cli.fallback_dns,
        docker_host: cli.docker_host,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting name-resolver v{}", env!("CARGO_PKG_VERSION"));
    bootstrap::log_config_summary(&config, cli.config.as_deref());

    let dns_services = di::DnsServices::new(&config)?;

    server::start_dns_server(config.server.listen_address(), dns_services.handler()).await?;

    info!("Server shutdown complete");
    Ok(())
}
