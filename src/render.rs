//! List view projection of [`OperationState`].
//!
//! Toolkit-neutral: tells a UI which widgets are visible and what each row
//! shows. A row carries trade date, product code and price; product name and
//! diff stay in the model only.

use crate::domain::oil_price::{OperationState, PriceEntry};
use std::fmt;

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub trade_date: String,
    pub product_code: String,
    pub price: String,
}

impl From<&PriceEntry> for RowView {
    fn from(e: &PriceEntry) -> Self {
        Self {
            trade_date: e.trade_date.clone(),
            product_code: e.product_code.clone(),
            price: e.price.clone(),
        }
    }
}

/// Visibility and content of the price screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListView {
    pub busy_visible: bool,
    pub list_visible: bool,
    pub rows: Vec<RowView>,
    pub error: Option<String>,
}

impl ListView {
    pub fn render(state: &OperationState) -> Self {
        match state {
            OperationState::Loading => Self {
                busy_visible: true,
                list_visible: false,
                rows: Vec::new(),
                error: None,
            },
            OperationState::Success(entries) => Self {
                busy_visible: false,
                list_visible: true,
                rows: entries.iter().map(RowView::from).collect(),
                error: None,
            },
            OperationState::Error(failure) => Self {
                busy_visible: false,
                list_visible: false,
                rows: Vec::new(),
                error: Some(failure.message.clone()),
            },
        }
    }
}

impl From<&OperationState> for ListView {
    fn from(state: &OperationState) -> Self {
        Self::render(state)
    }
}

impl fmt::Display for ListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.busy_visible {
            writeln!(f, "Loading...")?;
        }
        if let Some(err) = &self.error {
            writeln!(f, "Error: {}", err)?;
        }
        if self.list_visible {
            for row in &self.rows {
                writeln!(f, "{}  {}  {}", row.trade_date, row.product_code, row.price)?;
            }
        }
        Ok(())
    }
}
