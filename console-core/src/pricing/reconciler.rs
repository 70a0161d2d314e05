//! Unit price / quantity / total reconciliation
//!
//! Keeps the three price fields of an order edit form mutually consistent
//! under single-field edits: `total_price == round(unit_price * qty)`.
//! The field the operator is typing into is held as literal text and only
//! reconciled when it loses focus.

use crate::money::{format_money, parse_money, round_money, to_decimal, to_f64};
use shared::models::{OrderLine, OrderUpdate};

/// In-memory state of an order's price fields during editing.
///
/// Pure and synchronous: no I/O, no panics. Invalid numeric input is
/// coerced to zero and flows through the same formulas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceForm {
    qty: f64,
    unit_price: f64,
    total_price: f64,
    /// Literal text of the total field while it has focus.
    total_text: Option<String>,
}

impl PriceForm {
    pub fn new(qty: f64, unit_price: f64) -> Self {
        let qty = sanitize(qty);
        let unit_price = sanitize(unit_price);
        Self {
            qty,
            unit_price,
            total_price: derive_total(unit_price, qty),
            total_text: None,
        }
    }

    /// Seed the form from an order line.
    pub fn from_line(line: &OrderLine) -> Self {
        let mut form = Self::new(line.qty, line.unit_price);
        if line.total_price > 0.0 {
            form.total_price = line.total_price;
        }
        form
    }

    pub fn qty(&self) -> f64 {
        self.qty
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    /// Quantity changed. The total follows unless the operator is editing
    /// it as free text right now.
    pub fn set_qty(&mut self, qty: f64) {
        self.qty = sanitize(qty);
        if self.total_text.is_none() {
            self.total_price = derive_total(self.unit_price, self.qty);
        }
    }

    /// Unit price is the driving value: the total always follows.
    pub fn set_unit_price(&mut self, unit_price: f64) {
        self.unit_price = sanitize(unit_price);
        self.total_price = derive_total(self.unit_price, self.qty);
        self.total_text = None;
    }

    /// The total field received a keystroke: keep the text verbatim, no
    /// reconciliation until blur.
    pub fn edit_total(&mut self, text: impl Into<String>) {
        self.total_text = Some(text.into());
    }

    /// The total field lost focus: parse the text and derive the unit
    /// price from it. A zero or missing quantity yields a zero unit
    /// price, never a division error.
    pub fn commit_total(&mut self) {
        if let Some(text) = self.total_text.take() {
            self.total_price = parse_money(&text);
        }
        self.unit_price = if self.qty > 0.0 {
            round_money(self.total_price / self.qty)
        } else {
            0.0
        };
    }

    /// Display text for the total: the literal text while editing,
    /// grouped formatting otherwise.
    pub fn total_display(&self) -> String {
        match &self.total_text {
            Some(text) => text.clone(),
            None => format_money(self.total_price),
        }
    }

    /// Display text for the unit price, grouped.
    pub fn unit_price_display(&self) -> String {
        format_money(self.unit_price)
    }

    /// Snapshot of the reconciled fields for a PATCH body.
    pub fn as_update(&self) -> OrderUpdate {
        OrderUpdate {
            qty: Some(self.qty),
            unit_price: Some(self.unit_price),
            total_price: Some(self.total_price),
            ..Default::default()
        }
    }
}

fn derive_total(unit_price: f64, qty: f64) -> f64 {
    to_f64(to_decimal(unit_price) * to_decimal(qty))
}

/// Invalid numeric input coerces to zero (the console never rejects).
fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        0.0
    }
}
