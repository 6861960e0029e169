use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use phishguard::{
    config::Config,
    content::{ContentScanner, HttpFetcher},
    features,
    logging::init_logging,
    output::{format_result_to_string, print_result, OutputFormat, ScanOutput},
    report::{write_report, ReportError, DEFAULT_REPORT_NAME},
    ContentVerdict, ForestClassifier, Session, TrustedDomains, UrlScanner,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Exit codes for CI integration
mod exit_codes {
    pub const SUCCESS: u8 = 0;
    pub const ERROR: u8 = 1;
    pub const PHISHING: u8 = 2;
    pub const SUSPICIOUS_CONTENT: u8 = 3;
}

#[derive(Parser)]
#[command(name = "phishguard")]
#[command(
    author,
    version,
    about = "Detect phishing URLs with a pre-trained classifier and page content checks"
)]
struct Cli {
    /// Enable debug logging (overridden by PHISHGUARD_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a URL
    Scan {
        /// URL to analyze
        url: String,

        /// User to scan as (premium users get detailed analysis)
        #[arg(short, long)]
        user: Option<String>,

        /// Output format (table, json)
        #[arg(short, long)]
        format: Option<String>,

        /// Path to the forest model (overrides config)
        #[arg(short, long)]
        model: Option<PathBuf>,

        /// Also fetch the page and check its content
        #[arg(long)]
        content: bool,

        /// Write a plain-text scan report (premium only) [default: phishguard_report.txt]
        #[arg(
            long,
            value_name = "PATH",
            num_args = 0..=1,
            default_missing_value = DEFAULT_REPORT_NAME
        )]
        report: Option<PathBuf>,

        /// Write JSON output to file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Exit non-zero when the URL is classified as phishing
        #[arg(long)]
        fail_on_phishing: bool,
    },

    /// Fetch a page and check its content
    Content {
        /// URL to fetch
        url: String,

        /// Output format (table, json)
        #[arg(short, long)]
        format: Option<String>,

        /// Exit non-zero when the content looks suspicious
        #[arg(long)]
        fail_on_suspicious: bool,
    },

    /// Print the lexical features of a URL
    Features {
        /// URL to analyze
        url: String,
    },

    /// List trusted domains
    Trusted,

    /// Show or create config file
    Config {
        /// Generate default config file
        #[arg(long)]
        init: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

struct ScanArgs {
    url: String,
    user: Option<String>,
    format: OutputFormat,
    model: Option<PathBuf>,
    content: bool,
    report: Option<PathBuf>,
    output: Option<PathBuf>,
    fail_on_phishing: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_codes::ERROR)
        }
    }
}

async fn run() -> Result<u8> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "invalid config file, using defaults");
        Config::default()
    });

    match cli.command {
        Commands::Scan {
            url,
            user,
            format,
            model,
            content,
            report,
            output,
            fail_on_phishing,
        } => {
            let format = parse_format(format.as_deref(), &config)?;
            run_scan(
                ScanArgs {
                    url,
                    user,
                    format,
                    model,
                    content,
                    report,
                    output,
                    fail_on_phishing,
                },
                &config,
            )
            .await
        }
        Commands::Content {
            url,
            format,
            fail_on_suspicious,
        } => {
            let format = parse_format(format.as_deref(), &config)?;
            let session = start_session(None, &config);
            let verdict = scan_content(&url, format, &config).await?;
            let code = if fail_on_suspicious && verdict.is_suspicious() {
                exit_codes::SUSPICIOUS_CONTENT
            } else {
                exit_codes::SUCCESS
            };
            print_result(&ScanOutput::new(&session).with_content(verdict), format)?;
            Ok(code)
        }
        Commands::Features { url } => {
            phishguard::error::validate_url(&url)?;
            let fv = features::extract(&url);
            println!("{}", serde_json::to_string_pretty(&fv)?);
            Ok(exit_codes::SUCCESS)
        }
        Commands::Trusted => {
            let trusted = TrustedDomains::with_extra(&config.extra_trusted_domains);
            println!("Trusted domains ({}):", trusted.len());
            for domain in trusted.iter() {
                println!("  {}", domain);
            }
            Ok(exit_codes::SUCCESS)
        }
        Commands::Config { init, path } => {
            handle_config(init, path)?;
            Ok(exit_codes::SUCCESS)
        }
    }
}

async fn run_scan(args: ScanArgs, config: &Config) -> Result<u8> {
    let is_interactive = args.format == OutputFormat::Table;
    let session = start_session(args.user, config);

    // A missing or corrupt model is fatal; there is no fallback classifier.
    let model_path = args.model.unwrap_or_else(|| config.model_path.clone());
    let classifier = ForestClassifier::load(&model_path)
        .with_context(|| format!("failed to load model from {}", model_path.display()))?;
    let trusted = TrustedDomains::with_extra(&config.extra_trusted_domains);
    let scanner = UrlScanner::new(Arc::new(classifier), trusted);
    tracing::debug!(
        classifier = scanner.classifier_name(),
        trusted_domains = scanner.trusted().len(),
        "scanner ready"
    );

    let pb = spinner(is_interactive, "Analyzing URL...");
    let result = scanner.scan(&args.url);
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
    let result = result?;

    let mut output = ScanOutput::new(&session).with_url_scan(&result, &session);
    let mut code = if args.fail_on_phishing && result.is_phishing() {
        exit_codes::PHISHING
    } else {
        exit_codes::SUCCESS
    };

    if args.content {
        let verdict = scan_content(&args.url, args.format, config).await?;
        if args.fail_on_phishing && code == exit_codes::SUCCESS && verdict.is_suspicious() {
            code = exit_codes::SUSPICIOUS_CONTENT;
        }
        output = output.with_content(verdict);
    }

    if let Some(path) = args.output {
        std::fs::write(&path, format_result_to_string(&output)?)?;
        if is_interactive {
            println!("Results written to: {}", path.display());
        }
    } else {
        print_result(&output, args.format)?;
    }

    if let Some(path) = args.report {
        match write_report(&session, &result, &path) {
            Ok(()) => {
                if is_interactive {
                    println!("Report written to: {}", path.display());
                }
            }
            Err(ReportError::NotPremium(_)) => {
                eprintln!("Upgrade to Premium for detailed analysis & report download");
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(code)
}

async fn scan_content(url: &str, format: OutputFormat, config: &Config) -> Result<ContentVerdict> {
    let fetcher = HttpFetcher::new(config.request_timeout(), &config.user_agent)?;
    let scanner = ContentScanner::new(fetcher);

    let pb = spinner(format == OutputFormat::Table, "Checking website content...");
    let verdict = scanner.scan(url).await;
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    Ok(verdict?)
}

fn start_session(user: Option<String>, config: &Config) -> Session {
    let username = user
        .or_else(|| std::env::var("USER").ok())
        .unwrap_or_else(|| "guest".to_string());
    Session::start(username, &config.premium_users)
}

fn parse_format(format: Option<&str>, config: &Config) -> Result<OutputFormat> {
    let format = format.unwrap_or(&config.default_format);
    OutputFormat::from_str(format).map_err(|e| anyhow::anyhow!(e))
}

fn spinner(enabled: bool, message: &'static str) -> Option<ProgressBar> {
    if !enabled {
        return None;
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(message);
    Some(pb)
}

fn handle_config(init: bool, show_path: bool) -> Result<()> {
    let config_path = Config::config_path();

    if show_path {
        println!("{}", config_path.display());
        return Ok(());
    }

    if init {
        if config_path.exists() {
            println!("Config file already exists at: {}", config_path.display());
            return Ok(());
        }

        let config = Config::default();
        config.save()?;
        println!("Created config file at: {}", config_path.display());
        println!();
        println!("Default configuration:");
        println!("{}", Config::generate_default_config());
        return Ok(());
    }

    if config_path.exists() {
        let content = std::fs::read_to_string(&config_path)?;
        println!("Config file: {}", config_path.display());
        println!();
        println!("{}", content);
    } else {
        println!("No config file found.");
        println!("Run 'phishguard config --init' to create one.");
        println!();
        println!("Config path: {}", config_path.display());
    }

    Ok(())
}
