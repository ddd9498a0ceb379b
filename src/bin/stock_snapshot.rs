use stock_snapshot::config::{Config, DEFAULT_BIND_ADDR, DEFAULT_STATIC_DIR};
use stock_snapshot::scrapers::base::QuoteScraper;
use stock_snapshot::scrapers::fixture::FixtureScraper;
use stock_snapshot::scrapers::yahoo::YahooScraper;
use stock_snapshot::services::quote_service::QuoteService;
use stock_snapshot::{normalize_quote, server, QuoteSummary, RawQuote};

use anyhow::Context;
use clap::{App, Arg, ArgMatches, SubCommand};
use log::info;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    // 创建基本的命令行应用
    let app = App::new("StockSnapshot")
        .version(env!("CARGO_PKG_VERSION"))
        .author("EgoStrategy Team")
        .about("Display-ready stock quote summaries")
        .arg(
            Arg::with_name("timeout")
                .long("timeout")
                .value_name("SECS")
                .help("Upstream request timeout in seconds")
                .takes_value(true)
                .default_value("30")
                .global(true),
        )
        .arg(
            Arg::with_name("fixtures")
                .long("fixtures")
                .value_name("FILE")
                .help("Serve raw quotes from a JSON fixture file instead of Yahoo Finance")
                .takes_value(true)
                .global(true),
        );

    // 添加子命令
    let app = app.subcommand(
        SubCommand::with_name("serve")
            .about("Run the HTTP server")
            .arg(
                Arg::with_name("bind")
                    .short('b')
                    .long("bind")
                    .value_name("ADDR")
                    .help("Address to listen on")
                    .takes_value(true)
                    .default_value(DEFAULT_BIND_ADDR),
            )
            .arg(
                Arg::with_name("static-dir")
                    .long("static-dir")
                    .value_name("DIR")
                    .help("Directory served under /static")
                    .takes_value(true)
                    .default_value(DEFAULT_STATIC_DIR),
            )
            .arg(
                Arg::with_name("allow-origin")
                    .long("allow-origin")
                    .value_name("ORIGIN")
                    .help("Origin allowed by CORS (repeatable)")
                    .takes_value(true)
                    .multiple_occurrences(true),
            ),
    ).subcommand(
        SubCommand::with_name("quote")
            .about("Fetch and summarize a single ticker")
            .arg(
                Arg::with_name("ticker")
                    .short('t')
                    .long("ticker")
                    .value_name("SYMBOL")
                    .help("Ticker symbol, e.g. AAPL")
                    .required(true)
                    .takes_value(true),
            )
            .arg(
                Arg::with_name("pretty")
                    .long("pretty")
                    .help("Pretty-print the JSON output")
                    .takes_value(false),
            ),
    ).subcommand(
        SubCommand::with_name("normalize")
            .about("Summarize a raw quote record read from a file")
            .arg(
                Arg::with_name("input")
                    .short('i')
                    .long("input")
                    .value_name("FILE")
                    .help("Raw quote JSON file, or - for stdin")
                    .required(true)
                    .takes_value(true),
            )
            .arg(
                Arg::with_name("pretty")
                    .long("pretty")
                    .help("Pretty-print the JSON output")
                    .takes_value(false),
            ),
    );

    let matches = app.get_matches();

    let timeout = matches.value_of("timeout")
        .unwrap_or("30")
        .parse::<u64>()
        .context("--timeout must be a whole number of seconds")?;

    if let Some(matches) = matches.subcommand_matches("serve") {
        let mut config = Config::new()
            .with_bind_addr(matches.value_of("bind").unwrap_or(DEFAULT_BIND_ADDR))
            .with_static_dir(matches.value_of("static-dir").unwrap_or(DEFAULT_STATIC_DIR))
            .with_request_timeout_secs(timeout);
        if let Some(origins) = matches.values_of("allow-origin") {
            for origin in origins {
                config = config.with_allowed_origin(origin);
            }
        }

        let service = QuoteService::new(create_scraper(matches, &config)?);
        server::serve(&config, service).await?;
    } else if let Some(matches) = matches.subcommand_matches("quote") {
        let config = Config::new().with_request_timeout_secs(timeout);
        let ticker = matches.value_of("ticker").unwrap_or_default();

        let service = QuoteService::new(create_scraper(matches, &config)?);
        let summary = service.get_summary(ticker).await?;
        print_summary(&summary, matches.is_present("pretty"))?;
    } else if let Some(matches) = matches.subcommand_matches("normalize") {
        let input = matches.value_of("input").unwrap_or("-");
        let raw = read_raw_quote(input)?;
        info!("Read raw quote with {} fields from {}", raw.len(), input);

        print_summary(&normalize_quote(&raw), matches.is_present("pretty"))?;
    } else {
        info!("No command specified. Use --help for usage information.");
    }

    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

fn create_scraper(matches: &ArgMatches, config: &Config) -> anyhow::Result<Arc<dyn QuoteScraper + Send + Sync>> {
    match matches.value_of("fixtures") {
        Some(path) => {
            let scraper = FixtureScraper::load_from_file(Path::new(path))?;
            Ok(Arc::new(scraper))
        }
        None => Ok(Arc::new(YahooScraper::new(config)?)),
    }
}

fn read_raw_quote(input: &str) -> anyhow::Result<RawQuote> {
    let text = if input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))?
    };

    serde_json::from_str(&text).with_context(|| format!("{} is not a JSON object", input))
}

fn print_summary(summary: &QuoteSummary, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        summary.to_json_pretty()?
    } else {
        serde_json::to_string(summary)?
    };
    println!("{}", json);
    Ok(())
}
