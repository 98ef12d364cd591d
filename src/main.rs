use anyhow::{bail, Context};
use clap::Parser;
use clean_code_kata::adapters::employee_file::load_employees;
use clean_code_kata::adapters::{
    CsvReportFormatter, EmailNotifier, EmailReportNotifier, InformeRepository,
    JsonReportFormatter, MemoryAuditLog, MemoryReportPersistence, PdfReportGenerator,
};
use clean_code_kata::config::cli::ItemArg;
use clean_code_kata::config::{Command, ReportFormat};
use clean_code_kata::core::legacy::generate_employee_report;
use clean_code_kata::core::ReportFormatter;
use clean_code_kata::domain::{Cart, Employee, InformeData, Payment, PaymentMethod, Product};
use clean_code_kata::utils::{logger, validation::Validate};
use clean_code_kata::{
    CliConfig, EmployeeReportService, InformeService, KataConfig, KataError, LedgerSide,
    Transfer, TwoAccountLedger,
};
use std::sync::Arc;

fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting clean-kata");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(cli) {
        match e.downcast_ref::<KataError>() {
            Some(kata_error) => {
                tracing::error!("❌ {:#}", e);
                eprintln!("❌ {}", kata_error.user_friendly_message());
                eprintln!("💡 Suggestion: {}", kata_error.recovery_suggestion());
            }
            None => {
                tracing::error!("❌ {:#}", e);
                eprintln!("❌ {:#}", e);
            }
        }
        std::process::exit(1);
    }
}

fn run(cli: CliConfig) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => KataConfig::from_file(path)
            .with_context(|| format!("failed to load config file '{}'", path))?,
        None => KataConfig::default(),
    };
    config.validate()?;

    match cli.command {
        Command::Transfer {
            amount,
            reverse,
            procedural,
        } => run_transfer(&config, amount, reverse, procedural),
        Command::Discount { price, tier } => {
            let policy = config.discount_policy();
            tracing::debug!("Discount tiers: {:?}", policy.tiers().collect::<Vec<_>>());
            let discounted = policy.apply(price, &tier);
            println!("{}", discounted);
            Ok(())
        }
        Command::Report {
            employees,
            format,
            legacy,
        } => {
            let mut staff = config.employees()?;
            if let Some(path) = employees {
                staff.extend(
                    load_employees(&path)
                        .with_context(|| format!("failed to read employees from '{}'", path))?,
                );
            }
            let content = if legacy {
                generate_employee_report(&staff)
            } else {
                match format.unwrap_or_else(|| config.report_format()) {
                    ReportFormat::Csv => run_report(CsvReportFormatter, &staff),
                    ReportFormat::Json => run_report(JsonReportFormatter { pretty: true }, &staff),
                }
            };
            print!("{}", content);
            Ok(())
        }
        Command::Informe { content } => {
            let service = InformeService::new(PdfReportGenerator, EmailNotifier, InformeRepository);
            service.process(&InformeData::new(content));
            println!("✅ Informe processed");
            Ok(())
        }
        Command::Cart {
            customer,
            items,
            method,
            cancel,
        } => run_cart(&customer, &items, method, cancel),
    }
}

fn run_transfer(
    config: &KataConfig,
    amount: f64,
    reverse: bool,
    procedural: bool,
) -> anyhow::Result<()> {
    let mut accounts = config.accounts().into_iter();
    let (Some(mut first), Some(mut second)) = (accounts.next(), accounts.next()) else {
        bail!("a transfer needs at least two configured accounts");
    };

    if procedural {
        let mut ledger = TwoAccountLedger::new(first.balance(), second.balance());
        let side = if reverse { LedgerSide::B } else { LedgerSide::A };
        let outcome = ledger.transfer(side, amount);
        println!(
            "{:?}: {} = {}, {} = {}",
            outcome,
            first.holder(),
            ledger.balance_a,
            second.holder(),
            ledger.balance_b
        );
        return Ok(());
    }

    let transfer = Transfer::new();
    let outcome = if reverse {
        transfer.execute(&mut second, &mut first, amount)
    } else {
        transfer.execute(&mut first, &mut second, amount)
    };
    println!(
        "{:?}: {} = {}, {} = {}",
        outcome,
        first.holder(),
        first.balance(),
        second.holder(),
        second.balance()
    );
    Ok(())
}

fn run_report<F: ReportFormatter>(formatter: F, employees: &[Employee]) -> String {
    let persistence = Arc::new(MemoryReportPersistence::new());
    let audit = Arc::new(MemoryAuditLog::new());
    let service =
        EmployeeReportService::new(formatter, EmailReportNotifier, persistence.clone(), audit.clone());

    let content = service.generate_report(employees);

    tracing::debug!("{} report(s) kept in memory", persistence.saved().len());
    for entry in audit.entries() {
        tracing::info!(
            "📋 Audit {} - {} chars at {}",
            entry.kind,
            entry.length,
            entry.recorded_at.to_rfc3339()
        );
    }
    content
}

fn run_cart(
    customer: &str,
    items: &[ItemArg],
    method: PaymentMethod,
    cancel: bool,
) -> anyhow::Result<()> {
    let mut catalog: Vec<Product> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            Product::new(format!("P{}", i + 1), item.name.clone(), item.price, item.stock)
        })
        .collect();

    let mut cart = Cart::new(customer);
    for (product, item) in catalog.iter().zip(items) {
        cart.add_item(product, item.quantity)?;
    }

    let mut order = cart.checkout(format!("{}-O1", customer), &mut catalog)?;
    println!("🛒 Cart total for {}: {}", cart.customer_id(), cart.total());

    if cancel {
        order.cancel()?;
        cart.release_stock(&mut catalog)?;
    } else {
        order.confirm()?;
        let mut payment = Payment::new(order.id(), order.total(), method);
        let status = payment.process()?;
        println!("💳 Payment via {} is {}", payment.method, status);
    }

    println!("📦 Order {} is {}", order.id(), order.status());
    for product in &catalog {
        println!("   {} stock left: {}", product.name, product.stock);
    }
    Ok(())
}
