use thiserror::Error;

#[derive(Error, Debug)]
pub enum KataError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Cannot place an order from the empty cart of customer {customer_id}")]
    EmptyCart { customer_id: String },

    #[error("Order {order_id} is already {from}; cannot move it to {to}")]
    InvalidTransition {
        order_id: String,
        from: String,
        to: String,
    },

    #[error("Quantity {quantity} for product {product_id} must be positive")]
    InvalidQuantity { product_id: String, quantity: u32 },

    #[error("Not enough stock for product {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: String,
        requested: u32,
        available: u32,
    },

    #[error("Product {product_id} is not in the catalog")]
    UnknownProduct { product_id: String },

    #[error("Payment for order {order_id} is already {from}; cannot move it to {to}")]
    InvalidPaymentTransition {
        order_id: String,
        from: String,
        to: String,
    },
}

impl KataError {
    /// Short message suitable for printing to a terminal.
    pub fn user_friendly_message(&self) -> String {
        match self {
            KataError::IoError(e) => format!("Could not read or write a file: {}", e),
            KataError::CsvError(e) => format!("The employee file is malformed: {}", e),
            KataError::ConfigValidationError { field, .. }
            | KataError::InvalidConfigValueError { field, .. } => {
                format!("The configuration field '{}' is not valid", field)
            }
            KataError::EmptyCart { .. }
            | KataError::InvalidTransition { .. }
            | KataError::InvalidQuantity { .. }
            | KataError::InsufficientStock { .. }
            | KataError::UnknownProduct { .. }
            | KataError::InvalidPaymentTransition { .. } => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            KataError::IoError(_) => "Check that the path exists and is readable",
            KataError::CsvError(_) => "Each line must look like `id;name;salary`",
            KataError::ConfigValidationError { .. } => "Make sure the file is valid TOML",
            KataError::InvalidConfigValueError { .. } => {
                "Fix the reported value and run the command again"
            }
            KataError::EmptyCart { .. } => "Add at least one item before placing the order",
            KataError::InvalidTransition { .. } => "Only pending orders can be confirmed or cancelled",
            KataError::InvalidQuantity { .. } => "Use a quantity of at least 1",
            KataError::InsufficientStock { .. } => "Lower the quantity or restock the product first",
            KataError::UnknownProduct { .. } => "Add the product to the catalog before checking out",
            KataError::InvalidPaymentTransition { .. } => {
                "Only pending payments can be processed and only successful ones refunded"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, KataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_message_names_states() {
        let err = KataError::InvalidTransition {
            order_id: "P-1".to_string(),
            from: "CONFIRMED".to_string(),
            to: "CANCELLED".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Order P-1 is already CONFIRMED; cannot move it to CANCELLED"
        );
        assert_eq!(err.user_friendly_message(), err.to_string());
    }

    #[test]
    fn test_config_errors_point_at_field() {
        let err = KataError::InvalidConfigValueError {
            field: "report.employees_file".to_string(),
            value: String::new(),
            reason: "Path cannot be empty".to_string(),
        };

        assert!(err.user_friendly_message().contains("report.employees_file"));
        assert!(!err.recovery_suggestion().is_empty());
    }

    #[test]
    fn test_stock_error_reports_both_counts() {
        let err = KataError::InsufficientStock {
            product_id: "P1".to_string(),
            requested: 5,
            available: 2,
        };

        assert_eq!(
            err.user_friendly_message(),
            "Not enough stock for product P1: requested 5, available 2"
        );
    }
}
