// src/dtos/invoice.rs
use serde::Deserialize;

use crate::models::invoice::{format_amount, Invoice, LineItem};

/// Raw bill form submission. Item rows come in as repeated fields, one
/// entry per row, so the three vectors are parallel.
#[derive(Debug, Deserialize)]
pub struct InvoiceForm {
    pub customer_name: Option<String>,
    pub date: Option<String>,
    pub tax_rate: Option<String>,
    pub discount: Option<String>,
    #[serde(default)]
    pub item_name: Vec<String>,
    #[serde(default)]
    pub item_quantity: Vec<String>,
    #[serde(default)]
    pub item_price: Vec<String>,
}

#[derive(Debug)]
pub struct LineItemView {
    pub name: String,
    pub quantity: i64,
    pub price: String,
    pub line_total: String,
}

/// Display-ready invoice handed to the result template: amounts are
/// preformatted, rate labels have no trailing `.0`, and the zero-rate
/// summary rows carry their own visibility flags.
#[derive(Debug)]
pub struct InvoiceView {
    pub customer_name: String,
    pub date: String,
    pub items: Vec<LineItemView>,
    pub subtotal: String,
    pub show_tax: bool,
    pub tax_rate: String,
    pub tax_amount: String,
    pub show_discount: bool,
    pub discount_rate: String,
    pub discount_amount: String,
    pub total: String,
    /// Ungrouped `1234.56`-style total for the count-up script.
    pub total_plain: String,
}

// Convert from Model to render DTO
impl From<Invoice> for InvoiceView {
    fn from(invoice: Invoice) -> Self {
        Self {
            customer_name: invoice.customer_name,
            date: invoice.date,
            items: invoice.items.into_iter().map(LineItemView::from).collect(),
            subtotal: format_amount(invoice.subtotal),
            show_tax: invoice.tax_rate > 0.0,
            tax_rate: invoice.tax_rate.to_string(),
            tax_amount: format_amount(invoice.tax_amount),
            show_discount: invoice.discount_rate > 0.0,
            discount_rate: invoice.discount_rate.to_string(),
            discount_amount: format_amount(invoice.discount_amount),
            total: format_amount(invoice.total),
            total_plain: format!("{:.2}", invoice.total),
        }
    }
}

impl From<LineItem> for LineItemView {
    fn from(item: LineItem) -> Self {
        Self {
            name: item.name,
            quantity: item.quantity,
            price: format_amount(item.price),
            line_total: format_amount(item.line_total),
        }
    }
}
