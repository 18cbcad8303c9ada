//! tldurl: CLI tool for decomposing URLs and hosts with a Public Suffix List.

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tldurl::{Decomposer, LoadOptions, MatchOptions, Origin, RuleSet};

#[derive(Parser)]
#[command(name = "tldurl")]
#[command(author = "Kaitu.io")]
#[command(version = "0.1.0")]
#[command(about = "Split URLs into subdomain, domain, public suffix and port", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse URLs and decompose their hosts
    Parse {
        /// Public Suffix List file (plain or gzipped)
        #[arg(short, long)]
        list: PathBuf,

        /// Print one JSON object per line
        #[arg(long)]
        json: bool,

        /// Ignore rules from the PRIVATE section
        #[arg(long)]
        ignore_private: bool,

        /// URLs to parse
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Decompose bare hosts (an optional `:port` is split off)
    Host {
        /// Public Suffix List file (plain or gzipped)
        #[arg(short, long)]
        list: PathBuf,

        /// Print one JSON object per line
        #[arg(long)]
        json: bool,

        /// Ignore rules from the PRIVATE section
        #[arg(long)]
        ignore_private: bool,

        /// Hosts to decompose
        #[arg(required = true)]
        hosts: Vec<String>,
    },

    /// Validate a Public Suffix List file and print rule counts
    Check {
        /// Public Suffix List file (plain or gzipped)
        #[arg(short, long)]
        list: PathBuf,

        /// Accept exception rules without a matching wildcard
        #[arg(long)]
        lenient: bool,
    },
}

#[derive(Serialize)]
struct HostOutput<'a> {
    host: &'a str,
    port: &'a str,
    #[serde(flatten)]
    parts: tldurl::Decomposition,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            list,
            json,
            ignore_private,
            urls,
        } => parse_urls(&list, json, match_options(ignore_private), &urls),
        Commands::Host {
            list,
            json,
            ignore_private,
            hosts,
        } => decompose_hosts(&list, json, match_options(ignore_private), &hosts),
        Commands::Check { list, lenient } => check_list(&list, lenient),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn match_options(ignore_private: bool) -> MatchOptions {
    MatchOptions {
        ignore_private,
        ..MatchOptions::default()
    }
}

fn load_rules(list: &PathBuf, options: &LoadOptions) -> Result<Arc<RuleSet>, Box<dyn std::error::Error>> {
    let rules = RuleSet::from_path(list, options)?;
    log::debug!("Loaded {} rules from {:?}", rules.len(), list);
    Ok(Arc::new(rules))
}

fn parse_urls(
    list: &PathBuf,
    json: bool,
    options: MatchOptions,
    urls: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let parser = tldurl::Parser::with_options(load_rules(list, &LoadOptions::default())?, options);
    let mut failed = 0;

    for raw in urls {
        match parser.parse(raw) {
            Ok(parsed) => {
                if json {
                    println!("{}", serde_json::to_string(&parsed)?);
                } else {
                    println!(
                        "{}\tsubdomain={} domain={} tld={} port={} icann={}",
                        parsed.url, parsed.subdomain, parsed.domain, parsed.tld, parsed.port, parsed.icann
                    );
                }
            }
            Err(e) => {
                eprintln!("{}: {}", raw, e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(format!("{} of {} URLs failed to parse", failed, urls.len()).into());
    }
    Ok(())
}

fn decompose_hosts(
    list: &PathBuf,
    json: bool,
    options: MatchOptions,
    hosts: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let decomposer = Decomposer::with_options(load_rules(list, &LoadOptions::default())?, options);

    for raw in hosts {
        let (host, port) = tldurl::split_host_port(raw);
        let parts = decomposer.decompose(host);
        if json {
            let output = HostOutput { host, port, parts };
            println!("{}", serde_json::to_string(&output)?);
        } else {
            println!(
                "{}\tsubdomain={} domain={} tld={} port={} icann={}",
                host, parts.subdomain, parts.domain, parts.tld, port, parts.icann
            );
        }
    }
    Ok(())
}

fn check_list(list: &PathBuf, lenient: bool) -> Result<(), Box<dyn std::error::Error>> {
    let options = if lenient {
        LoadOptions::lenient()
    } else {
        LoadOptions::strict()
    };
    let rules = load_rules(list, &options)?;

    println!(
        "{:?}: {} rules ({} ICANN, {} private)",
        list,
        rules.len(),
        rules.count(Origin::Icann),
        rules.count(Origin::Private)
    );
    Ok(())
}
