//! dash-runner: headless dataset runner for the subscription dashboard.
//!
//! Usage:
//!   dash-runner --seed 12345
//!   dash-runner --seed 12345 --config generator.json --json
//!   dash-runner --seed 12345 --ipc-mode
//!
//! In IPC mode the runner reads newline-delimited JSON commands on
//! stdin and writes one JSON response per line on stdout, so a UI
//! process can issue filter/paginate queries against the generated
//! dataset.

use anyhow::Result;
use chrono::Utc;
use std::env;
use std::io::{self, BufRead, Write};
use subdash_core::{
    config::GeneratorConfig,
    dataset::Dataset,
    query::{
        average_lifetime_value, billing_cycle_breakdown, filter_customers, filter_subscriptions,
        paginate, CustomerFilter, SubscriptionFilter, DEFAULT_PAGE_SIZE,
    },
    series::KpiSummary,
};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetSummary,
    FilterCustomers {
        #[serde(default)]
        criteria: CustomerFilter,
        #[serde(default = "first_page")]
        page: usize,
    },
    FilterSubscriptions {
        #[serde(default)]
        criteria: SubscriptionFilter,
        #[serde(default = "first_page")]
        page: usize,
    },
    Quit,
}

fn first_page() -> usize {
    1
}

#[derive(serde::Serialize)]
struct DashSummary {
    seed: u64,
    customers: usize,
    subscriptions: usize,
    active_mrr: f64,
    average_ltv: f64,
    monthly_subscriptions: usize,
    yearly_subscriptions: usize,
    latest_mrr_total: f64,
    kpis: KpiSummary,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let json_mode = args.iter().any(|a| a == "--json");
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let config = match args.windows(2).find(|w| w[0] == "--config") {
        Some(w) => GeneratorConfig::from_json_file(&w[1])?,
        None => GeneratorConfig::default(),
    };

    let dataset = Dataset::generate(&config, seed, Utc::now());

    if ipc_mode {
        run_ipc_loop(&dataset, seed)?;
    } else if json_mode {
        println!("{}", serde_json::to_string_pretty(&dataset)?);
    } else {
        println!("subdash — dash-runner");
        println!("  seed:      {seed}");
        println!("  customers: {}", config.customer_count);
        println!();
        print_summary(&dataset, seed);
    }

    Ok(())
}

fn run_ipc_loop(dataset: &Dataset, seed: u64) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    log::info!("ipc loop started (seed={seed})");

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("malformed ipc command: {e}");
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
                stdout.flush()?;
                continue;
            }
        };

        match cmd {
            IpcCommand::Quit => break,
            IpcCommand::GetSummary => {
                let summary = build_summary(dataset, seed);
                writeln!(stdout, "{}", serde_json::to_string(&summary)?)?;
            }
            IpcCommand::FilterCustomers { criteria, page } => {
                let filtered = filter_customers(&dataset.customers, &criteria);
                let page = paginate(&filtered, page, DEFAULT_PAGE_SIZE);
                writeln!(stdout, "{}", serde_json::to_string(&page)?)?;
            }
            IpcCommand::FilterSubscriptions { criteria, page } => {
                let filtered = filter_subscriptions(&dataset.subscriptions, &criteria);
                let page = paginate(&filtered, page, DEFAULT_PAGE_SIZE);
                writeln!(stdout, "{}", serde_json::to_string(&page)?)?;
            }
        }
        stdout.flush()?;
    }
    Ok(())
}

fn build_summary(dataset: &Dataset, seed: u64) -> DashSummary {
    let cycles = billing_cycle_breakdown(&dataset.subscriptions);
    DashSummary {
        seed,
        customers: dataset.customers.len(),
        subscriptions: dataset.subscriptions.len(),
        active_mrr: dataset.active_mrr(),
        average_ltv: average_lifetime_value(&dataset.subscriptions),
        monthly_subscriptions: cycles.monthly,
        yearly_subscriptions: cycles.yearly,
        latest_mrr_total: dataset.mrr_series.last().map(|p| p.total).unwrap_or(0.0),
        kpis: dataset.kpis.clone(),
    }
}

fn print_summary(dataset: &Dataset, seed: u64) {
    let summary = build_summary(dataset, seed);
    println!("=== DATASET SUMMARY ===");
    println!("  customers:       {}", summary.customers);
    println!("  subscriptions:   {}", summary.subscriptions);
    println!("  active MRR:      ${:.0}", summary.active_mrr);
    println!("  average LTV:     ${:.0}", summary.average_ltv);
    println!(
        "  billing mix:     {} monthly / {} yearly",
        summary.monthly_subscriptions, summary.yearly_subscriptions
    );
    println!("  MRR (series):    ${:.0}", summary.latest_mrr_total);

    println!();
    println!("=== RECENT SUBSCRIPTIONS ===");
    for sub in &dataset.recent_subscriptions {
        println!(
            "  {} | {} | ${:.0} | {}",
            sub.customer_name,
            sub.plan.label(),
            sub.amount,
            sub.status.label()
        );
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
