// sitepatch-core/src/domain/context.rs

use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

const DATE_STAMP_FORMAT: &str = "%Y%m%d";

/// `YYYYMMDD` stamp shared by every stage of one run, so file names and
/// page content agree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DateStamp(String);

impl DateStamp {
    pub fn today() -> Self {
        Self(Local::now().format(DATE_STAMP_FORMAT).to_string())
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format(DATE_STAMP_FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for DateStamp {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidDateStamp(s.to_string()));
        }
        NaiveDate::parse_from_str(s, DATE_STAMP_FORMAT)
            .map(Self::from_date)
            .map_err(|_| DomainError::InvalidDateStamp(s.to_string()))
    }
}

impl fmt::Display for DateStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Values injected into the index template.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateContext {
    pub input_tables: Vec<String>,
    pub current_date_str: DateStamp,
}

impl TemplateContext {
    pub fn new(input_tables: Vec<String>, current_date_str: DateStamp) -> Self {
        Self {
            input_tables,
            current_date_str,
        }
    }

    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "input_tables": self.input_tables,
            "current_date_str": self.current_date_str.as_str(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_date_stamp_parse() -> Result<()> {
        let stamp: DateStamp = "20240115".parse()?;
        assert_eq!(stamp.as_str(), "20240115");

        assert!("2024-01-15".parse::<DateStamp>().is_err());
        assert!("20241315".parse::<DateStamp>().is_err());
        assert!("2024011".parse::<DateStamp>().is_err());
        Ok(())
    }

    #[test]
    fn test_today_has_stamp_shape() {
        let stamp = DateStamp::today();
        assert_eq!(stamp.as_str().len(), 8);
        assert!(stamp.as_str().parse::<DateStamp>().is_ok());
    }

    #[test]
    fn test_context_value() -> Result<()> {
        let ctx = TemplateContext::new(
            vec!["ORDERS".to_string(), "CUSTOMERS".to_string()],
            "20240115".parse()?,
        );

        let value = ctx.to_value();
        assert_eq!(value["current_date_str"], "20240115");
        assert_eq!(value["input_tables"][1], "CUSTOMERS");
        Ok(())
    }
}
