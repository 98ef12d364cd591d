use crate::adapters::employee_file::load_employees;
use crate::core::discount::DiscountPolicy;
use crate::domain::{Account, Employee};
use crate::utils::error::{KataError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_non_negative, validate_path, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fixtures for the demo commands, read from a TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KataConfig {
    #[serde(default)]
    pub accounts: Vec<AccountConfig>,
    pub discounts: Option<DiscountPolicy>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountConfig {
    pub holder: String,
    pub balance: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    pub format: Option<ReportFormat>,
    pub employees_file: Option<String>,
    #[serde(default)]
    pub employees: Vec<Employee>,
}

impl KataConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(KataError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| KataError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| KataError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        for (i, account) in self.accounts.iter().enumerate() {
            validate_non_empty_string(&format!("accounts[{}].holder", i), &account.holder)?;
            validate_non_negative(&format!("accounts[{}].balance", i), account.balance)?;
        }

        if let Some(policy) = &self.discounts {
            policy.validate()?;
        }

        if let Some(report) = &self.report {
            if let Some(path) = &report.employees_file {
                validate_path("report.employees_file", path)?;
            }
            for (i, employee) in report.employees.iter().enumerate() {
                validate_non_empty_string(&format!("report.employees[{}].id", i), &employee.id)?;
                validate_non_negative(&format!("report.employees[{}].salary", i), employee.salary)?;
            }
        }

        Ok(())
    }

    /// Configured accounts, or the classic `A`/`B` pair holding 1000 and 500.
    pub fn accounts(&self) -> Vec<Account> {
        if self.accounts.is_empty() {
            return vec![Account::new("A", 1000.0), Account::new("B", 500.0)];
        }
        self.accounts
            .iter()
            .map(|a| Account::new(a.holder.clone(), a.balance))
            .collect()
    }

    pub fn discount_policy(&self) -> DiscountPolicy {
        self.discounts.clone().unwrap_or_default()
    }

    pub fn report_format(&self) -> ReportFormat {
        self.report
            .as_ref()
            .and_then(|r| r.format)
            .unwrap_or_default()
    }

    /// Inline employees followed by those read from `employees_file`.
    pub fn employees(&self) -> Result<Vec<Employee>> {
        let Some(report) = &self.report else {
            return Ok(Vec::new());
        };

        let mut employees = report.employees.clone();
        if let Some(path) = &report.employees_file {
            employees.extend(load_employees(path)?);
        }
        Ok(employees)
    }
}

impl Validate for KataConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
