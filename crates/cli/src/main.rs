use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use holedns_api::{create_api_routes, AppState};
use holedns_application::ports::BlocklistReloadPort;
use holedns_application::use_cases::{
    ActivationControlUseCase, BlockCacheInspectUseCase, HandleDnsQueryUseCase,
    QuestionCacheControlUseCase, ReloadBlocklistUseCase,
};
use holedns_domain::config::{parse_custom_records, CliOverrides};
use holedns_domain::Config;
use holedns_infrastructure::{
    ActivationMachine, BlockCache, BlocklistBuilder, BlocklistReloader, CustomRecordsStore,
    DnsServerHandler, HttpDrblClient, ListenerPair, QuestionCache, ResolveCache, UpstreamResolver,
};
use holedns_jobs::{BlocklistSyncJob, JobRunner, ResolveCacheScavengeJob};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "holedns")]
#[command(version)]
#[command(about = "DNS blackhole and conditional forwarder")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server bind address, e.g. 0.0.0.0:53
    #[arg(long)]
    bind: Option<String>,

    /// Control API bind address, e.g. 127.0.0.1:8080
    #[arg(long)]
    api_bind: Option<String>,

    /// Force an immediate blocklist rebuild before serving
    #[arg(long)]
    update: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        bind: cli.bind.clone(),
        api_bind: cli.api_bind.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = Config::load(cli.config.as_deref(), overrides)?;
    config.validate()?;

    init_logging(&config.logging);

    info!(version = env!("CARGO_PKG_VERSION"), "starting holedns");
    info!(
        bind = %config.server.bind,
        api = %config.server.api,
        upstreams = config.upstream.servers.len(),
        sources = config.blocking.sources.len(),
        "configuration loaded"
    );

    let block_cache = Arc::new(BlockCache::empty());
    let reloader = Arc::new(BlocklistReloader::new(block_cache.clone(), config.blocking.clone()));

    if cli.update || !config.blocking.sources.is_empty() || !config.blocking.customblock.is_empty() {
        info!("performing initial blocklist build");
        if let Err(e) = reloader.reload().await {
            warn!(error = %e, "initial blocklist build failed, starting with an empty block cache");
        }
    }

    let custom_records = Arc::new(CustomRecordsStore::new(parse_custom_records(
        &config.customdnsrecords,
    )));
    let question_cache = Arc::new(QuestionCache::new(config.questioncachecap));
    let resolve_cache = Arc::new(ResolveCache::new());
    let activation = ActivationMachine::new(Duration::from_secs(config.reactivationdelay));

    let upstreams: Vec<SocketAddr> = config
        .upstream
        .servers
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect();
    let resolver = Arc::new(UpstreamResolver::new(
        upstreams,
        Duration::from_millis(config.upstream.query_timeout_ms),
        Duration::from_millis(config.upstream.resolve_budget_ms),
    ));

    let mut use_case = HandleDnsQueryUseCase::new(
        custom_records,
        activation.clone(),
        block_cache.clone(),
        resolve_cache.clone(),
        resolver,
        question_cache.clone(),
        config.blocking.match_subdomains,
        config.blocking.block_ttl,
    );

    if config.drbl.enabled {
        let peers = load_drbl_peers(&config.drbl.peers_file);
        info!(peers = peers.len(), "drbl peer consultation enabled");
        let drbl_client = Arc::new(HttpDrblClient::new(
            peers,
            Duration::from_millis(config.drbl.timeout_ms),
            config.drbl.debug,
        ));
        use_case = use_case.with_drbl(drbl_client, config.drbl.block_weight);
    }
    let use_case = Arc::new(use_case);

    let api_state = AppState {
        block_cache_inspect: Arc::new(BlockCacheInspectUseCase::new(block_cache.clone())),
        reload_blocklist: Arc::new(ReloadBlocklistUseCase::new(reloader.clone())),
        question_cache_control: Arc::new(QuestionCacheControlUseCase::new(question_cache)),
        activation_control: Arc::new(ActivationControlUseCase::new(activation)),
    };

    let shutdown = CancellationToken::new();

    let jobs = JobRunner::new()
        .with_blocklist_sync(BlocklistSyncJob::new(reloader, 86_400))
        .with_resolve_cache_scavenge(ResolveCacheScavengeJob::new(resolve_cache, 60))
        .with_shutdown_token(shutdown.clone());
    tokio::spawn(jobs.start());

    let dns_bind: SocketAddr = config.server.bind.parse()?;
    let dns_handler = Arc::new(DnsServerHandler::new(use_case));
    let listener = ListenerPair::new(dns_bind, Duration::from_secs(10));
    let dns_shutdown = shutdown.clone();
    let dns_task = tokio::spawn(async move {
        if let Err(e) = listener.run(dns_handler, dns_shutdown).await {
            error!(error = %e, "dns listener failed");
        }
    });

    let api_bind: SocketAddr = config.server.api.parse()?;
    let api_router = create_api_routes(api_state);
    let api_listener = tokio::net::TcpListener::bind(api_bind).await?;
    info!(bind = %api_bind, "control api listening");
    let api_shutdown = shutdown.clone();
    let api_task = tokio::spawn(async move {
        let serve = axum::serve(api_listener, api_router).with_graceful_shutdown(async move {
            api_shutdown.cancelled().await;
        });
        if let Err(e) = serve.await {
            error!(error = %e, "control api server failed");
        }
    });

    wait_for_shutdown_signal().await;
    info!("shutdown signal received, draining");
    shutdown.cancel();

    let _ = dns_task.await;
    let _ = api_task.await;
    info!("shutdown complete");

    Ok(())
}

fn init_logging(config: &holedns_domain::config::LoggingConfig) {
    let level = config.level.parse().unwrap_or(tracing::Level::INFO);
    let subscriber = tracing_subscriber::fmt().with_max_level(level).with_target(true);
    if config.format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

fn load_drbl_peers(path: &str) -> Vec<String> {
    if path.is_empty() {
        return Vec::new();
    }
    match std::fs::read_to_string(path) {
        Ok(contents) => contents
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(str::to_string)
            .collect(),
        Err(e) => {
            warn!(path, error = %e, "failed to read drbl peers file, continuing with no peers");
            Vec::new()
        }
    }
}

#[cfg(unix)]
async fn wait_for_shutdown_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt()).expect("failed to install SIGINT handler");
    let mut sigterm = signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
    let mut sighup = signal(SignalKind::hangup()).expect("failed to install SIGHUP handler");

    loop {
        tokio::select! {
            _ = sigint.recv() => return,
            _ = sigterm.recv() => return,
            _ = sighup.recv() => {
                info!("SIGHUP received (log reopen is a no-op in this build)");
            }
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
