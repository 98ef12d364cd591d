use super::toml_config::ReportFormat;
use crate::domain::PaymentMethod;
use clap::{Parser, Subcommand};

/// Stock given to a `--item` product that does not name its own.
pub const DEFAULT_ITEM_STOCK: u32 = 10;

#[derive(Debug, Clone, Parser)]
#[command(name = "clean-kata")]
#[command(about = "Runs the clean code refactoring exercises")]
pub struct CliConfig {
    /// Path to a TOML file with accounts, discount tiers and employees
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Move money from the first configured account to the second
    Transfer {
        #[arg(long)]
        amount: f64,

        /// Pay from the second account instead of the first
        #[arg(long)]
        reverse: bool,

        /// Use the two-balance ledger instead of account objects
        #[arg(long)]
        procedural: bool,
    },

    /// Print the price after the tier discount
    Discount { price: f64, tier: String },

    /// Format, distribute and audit the employee report
    Report {
        /// `id;name;salary` file, added after the configured employees
        #[arg(long)]
        employees: Option<String>,

        #[arg(long, value_enum)]
        format: Option<ReportFormat>,

        /// Run the pre-refactor report function instead
        #[arg(long)]
        legacy: bool,
    },

    /// Generate, notify and store an informe
    Informe { content: String },

    /// Fill a cart, place the order and settle it
    Cart {
        #[arg(long, default_value = "C-1")]
        customer: String,

        /// `name:price:quantity[:stock]`, repeatable
        #[arg(long = "item", value_parser = parse_item)]
        items: Vec<ItemArg>,

        #[arg(long, value_enum, default_value = "card")]
        method: PaymentMethod,

        /// Cancel the order instead of confirming and paying it
        #[arg(long)]
        cancel: bool,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemArg {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub stock: u32,
}

pub fn parse_item(raw: &str) -> Result<ItemArg, String> {
    let parts: Vec<&str> = raw.split(':').collect();
    let (name, price, quantity, stock) = match parts.as_slice() {
        [name, price, quantity] => (*name, *price, *quantity, None),
        [name, price, quantity, stock] => (*name, *price, *quantity, Some(*stock)),
        _ => return Err(format!("expected name:price:quantity[:stock], got '{}'", raw)),
    };

    let name = name.trim();
    if name.is_empty() {
        return Err("item name cannot be empty".to_string());
    }
    let price = price
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid price '{}': {}", price, e))?;
    let quantity = quantity
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid quantity '{}': {}", quantity, e))?;
    if quantity == 0 {
        return Err(format!("quantity for '{}' must be at least 1", name));
    }
    let stock = match stock {
        Some(stock) => stock
            .trim()
            .parse::<u32>()
            .map_err(|e| format!("invalid stock '{}': {}", stock, e))?,
        None => DEFAULT_ITEM_STOCK,
    };

    Ok(ItemArg {
        name: name.to_string(),
        price,
        quantity,
        stock,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_item() {
        assert_eq!(
            parse_item("Keyboard:25.5:2").unwrap(),
            ItemArg {
                name: "Keyboard".to_string(),
                price: 25.5,
                quantity: 2,
                stock: DEFAULT_ITEM_STOCK,
            }
        );
        assert_eq!(parse_item("Lamp:30:2:3").unwrap().stock, 3);
        assert!(parse_item("Keyboard:25.5").is_err());
        assert!(parse_item("Lamp:30:2:3:1").is_err());
        assert!(parse_item("Lamp:30:2:lots").is_err());
        assert!(parse_item(":1:1").is_err());
        assert!(parse_item("Mouse:cheap:1").is_err());
        assert!(parse_item("Mouse:1:-1").is_err());
    }

    #[test]
    fn test_parse_item_rejects_zero_quantity() {
        let err = parse_item("Mouse:1:0").unwrap_err();
        assert!(err.contains("at least 1"), "{}", err);
    }

    #[test]
    fn test_parse_report_command() {
        let cli = CliConfig::try_parse_from([
            "clean-kata",
            "report",
            "--format",
            "json",
            "--employees",
            "staff.csv",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Command::Report {
                employees,
                format,
                legacy,
            } => {
                assert_eq!(employees.as_deref(), Some("staff.csv"));
                assert_eq!(format, Some(ReportFormat::Json));
                assert!(!legacy);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_cart_items() {
        let cli = CliConfig::try_parse_from([
            "clean-kata",
            "cart",
            "--item",
            "Keyboard:25.5:2",
            "--item",
            "Mouse:10:1",
            "--method",
            "bank-transfer",
        ])
        .unwrap();

        match cli.command {
            Command::Cart {
                items,
                customer,
                method,
                ..
            } => {
                assert_eq!(customer, "C-1");
                assert_eq!(items.len(), 2);
                assert_eq!(items[1].name, "Mouse");
                assert_eq!(method, PaymentMethod::BankTransfer);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_cart_method_defaults_to_card() {
        let cli = CliConfig::try_parse_from(["clean-kata", "cart", "--item", "Lamp:30:1"]).unwrap();

        match cli.command {
            Command::Cart { method, .. } => assert_eq!(method, PaymentMethod::Card),
            other => panic!("unexpected command {:?}", other),
        }
        assert!(CliConfig::try_parse_from(["clean-kata", "cart", "--method", "cash"]).is_err());
    }
}
