use serde::{Deserialize, Serialize};

use crate::errors::{LedgerError, Result};

/// longest tenure a loan may be written for, in months
pub const MAX_TENURE_MONTHS: u32 = 360;

/// ledger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LedgerConfig {
    /// upper bound on tenure accepted at loan creation
    pub max_tenure_months: u32,
    /// ISO currency code amounts are denominated in
    pub currency: String,
    /// months between creation and the first installment
    pub first_due_offset_months: u32,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            max_tenure_months: MAX_TENURE_MONTHS,
            currency: "INR".to_string(),
            first_due_offset_months: 1,
        }
    }
}

impl LedgerConfig {
    /// load from a json document, filling missing keys with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LedgerConfig = serde_json::from_str(json).map_err(|e| {
            LedgerError::InvalidConfiguration {
                message: e.to_string(),
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// set the tenure ceiling
    pub fn with_max_tenure(mut self, months: u32) -> Self {
        self.max_tenure_months = months;
        self
    }

    /// set the currency code
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_tenure_months == 0 || self.max_tenure_months > MAX_TENURE_MONTHS {
            return Err(LedgerError::InvalidConfiguration {
                message: format!(
                    "max_tenure_months must be between 1 and {}, got {}",
                    MAX_TENURE_MONTHS, self.max_tenure_months
                ),
            });
        }

        if self.first_due_offset_months == 0 {
            return Err(LedgerError::InvalidConfiguration {
                message: "first_due_offset_months must be at least 1".to_string(),
            });
        }

        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(LedgerError::InvalidConfiguration {
                message: format!("currency must be a 3-letter ISO code, got {:?}", self.currency),
            });
        }

        Ok(())
    }
}
