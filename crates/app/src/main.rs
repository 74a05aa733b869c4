use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use content::{BuiltinCatalog, CatalogSource, JsonFileCatalog};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use reader_core::Catalog;
use services::{Clock, ReaderServices, ReaderSession};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidManual { raw: String },
    InvalidCatalogPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidManual { raw } => {
                write!(f, "invalid --manual value: {raw} (expected residents or nursing)")
            }
            ArgsError::InvalidCatalogPath { raw } => write!(f, "invalid --catalog value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: ReaderServices,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<Catalog> {
        self.services.catalog()
    }

    fn start_session(&self) -> ReaderSession {
        self.services.start_session()
    }
}

/// Where the catalog comes from. `--catalog` wins over `--manual`.
#[derive(Debug, Clone, PartialEq, Eq)]
enum CatalogChoice {
    Builtin(BuiltinCatalog),
    File(PathBuf),
}

impl CatalogChoice {
    fn source(&self) -> Box<dyn CatalogSource> {
        match self {
            CatalogChoice::Builtin(manual) => Box::new(*manual),
            CatalogChoice::File(path) => Box::new(JsonFileCatalog::new(path.clone())),
        }
    }
}

struct Args {
    catalog: CatalogChoice,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui    [--manual residents|nursing] [--catalog <file.json>]");
    eprintln!("  cargo run -p app -- check [--manual residents|nursing] [--catalog <file.json>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --manual residents");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  READER_MANUAL, READER_CATALOG, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

fn parse_manual(raw: String) -> Result<BuiltinCatalog, ArgsError> {
    raw.parse().map_err(|_| ArgsError::InvalidManual { raw })
}

fn parse_catalog_path(raw: String) -> Result<PathBuf, ArgsError> {
    if raw.trim().is_empty() {
        return Err(ArgsError::InvalidCatalogPath { raw });
    }
    Ok(PathBuf::from(raw))
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut manual = match env("READER_MANUAL") {
            Some(raw) => parse_manual(raw)?,
            None => BuiltinCatalog::default(),
        };
        let mut file = env("READER_CATALOG")
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--manual" => {
                    manual = parse_manual(require_value(args, "--manual")?)?;
                }
                "--catalog" => {
                    file = Some(parse_catalog_path(require_value(args, "--catalog")?)?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let catalog = file.map_or(CatalogChoice::Builtin(manual), CatalogChoice::File);
        Ok(Self { catalog })
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Print the catalog outline the way the sidebar shows it.
fn print_outline(catalog: &Catalog) {
    println!("{}", catalog.title());
    for group in catalog.groups() {
        println!("  {}", group.name);
        for section in group.sections {
            let payload = section.payload();
            println!(
                "    {:<8} {} ({} blocks, {} panels, {} quizzes)",
                section.id(),
                section.title(),
                payload.blocks().len(),
                payload.panels().len(),
                payload.quizzes().len(),
            );
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();

    // Validation failures stop here, before any window opens.
    let source = parsed.catalog.source();
    let services = ReaderServices::load(source.as_ref(), Clock::system())?;

    match cmd {
        Command::Check => {
            print_outline(&services.catalog());
            info!(source = %source.describe(), "catalog is valid");
            Ok(())
        }
        Command::Ui => {
            let title = services.catalog().title().to_string();
            let context = build_app_context(Arc::new(DesktopApp { services }));

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(title)
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
