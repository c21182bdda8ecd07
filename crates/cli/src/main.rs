use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use nss_kubernetes::{bootstrap, Dispatcher};
use nss_kubernetes_domain::{AddressFamily, Config, DomainError, NssStatus};
use nss_kubernetes_infrastructure::layout::AlignedBuffer;
use nss_kubernetes_infrastructure::system::ProcessEnvironment;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};

mod render;

/// Largest buffer tried before giving up on TRYAGAIN.
const MAX_BUFFER_SIZE: usize = 1 << 20;

#[derive(Parser)]
#[command(name = "kube-getent")]
#[command(version)]
#[command(about = "Resolve Kubernetes service names the way the nss-kubernetes module does")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,

    /// Initial record buffer size in bytes, doubled while too small
    #[arg(long, default_value_t = 1024)]
    buffer_size: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a service address as gethostbyname does
    Hosts {
        name: String,

        #[arg(long, value_enum, default_value_t = FamilyArg::Any)]
        family: FamilyArg,
    },

    /// Resolve a service address as getaddrinfo does
    Ahosts { name: String },

    /// Resolve a service port as getservbyname does
    Services {
        name: String,

        #[arg(long, default_value = "tcp")]
        protocol: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FamilyArg {
    Any,
    Inet,
    Inet6,
}

impl From<FamilyArg> for AddressFamily {
    fn from(family: FamilyArg) -> Self {
        match family {
            FamilyArg::Any => AddressFamily::Unspecified,
            FamilyArg::Inet => AddressFamily::Inet,
            FamilyArg::Inet6 => AddressFamily::Inet6,
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = match cli.config.as_deref() {
        Some(path) => Config::load(Some(path)),
        None => bootstrap::load_config(),
    }
    .context("Failed to load configuration")?;

    if let Some(level) = cli.log_level.clone() {
        config.logging.level = level;
    }
    bootstrap::init_logging(&config.logging);

    info!("kube-getent v{}", env!("CARGO_PKG_VERSION"));

    let dispatcher = Dispatcher::new(Arc::new(ProcessEnvironment::new()), &config.lookup);

    match run(&dispatcher, &cli) {
        Ok(output) => {
            println!("{}", output);
            Ok(ExitCode::SUCCESS)
        }
        // Same convention as getent: 2 means the key was not found.
        Err(error) if error.status() == NssStatus::NotFound => {
            debug!(error = %error, "Lookup returned NOTFOUND");
            Ok(ExitCode::from(2))
        }
        Err(error) => {
            let status = error.status();
            Err(anyhow::Error::new(error).context(format!("Lookup failed ({})", status.as_str())))
        }
    }
}

fn run(dispatcher: &Dispatcher, cli: &Cli) -> Result<String, DomainError> {
    match &cli.command {
        Command::Hosts { name, family } => with_retry(cli.buffer_size, |buffer| {
            let mut host = render::empty_hostent();
            dispatcher.host_by_name_family(name, (*family).into(), &mut host, buffer)?;
            // SAFETY: `host` was just filled and points into `buffer`.
            Ok(unsafe { render::hostent(&host) })
        }),
        Command::Ahosts { name } => with_retry(cli.buffer_size, |buffer| {
            let node = dispatcher.host_tuple_by_name(name, buffer, None)?;
            // SAFETY: `node` was just written into `buffer`.
            Ok(unsafe { render::addrtuple(&*node) })
        }),
        Command::Services { name, protocol } => with_retry(cli.buffer_size, |buffer| {
            let mut serv = render::empty_servent();
            dispatcher.service_by_name(name, Some(protocol.as_str()), &mut serv, buffer)?;
            // SAFETY: `serv` was just filled and points into `buffer`.
            Ok(unsafe { render::servent(&serv) })
        }),
    }
}

/// Runs `lookup` with a growing buffer, the way glibc drives NSS modules.
fn with_retry<T>(
    initial: usize,
    mut lookup: impl FnMut(&mut [u8]) -> Result<T, DomainError>,
) -> Result<T, DomainError> {
    let mut size = initial.max(1);
    loop {
        let mut buffer = AlignedBuffer::new(size);
        match lookup(buffer.as_mut_slice()) {
            Err(DomainError::BufferTooSmall { required, .. }) if size < MAX_BUFFER_SIZE => {
                debug!(size, required, "Buffer too small, retrying");
                size = (size * 2).min(MAX_BUFFER_SIZE);
            }
            result => return result,
        }
    }
}
