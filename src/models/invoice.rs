// src/models/invoice.rs
use chrono::Local;

use crate::dtos::invoice::InvoiceForm;

/// Placeholder used when no customer name was submitted.
pub const DEFAULT_CUSTOMER: &str = "Customer";

#[derive(Debug, Clone)]
pub struct LineItem {
    pub name: String,
    pub quantity: i64,
    pub price: f64,
    pub line_total: f64,
}

/// One bill, built from a single form submission and discarded after
/// the response is rendered.
#[derive(Debug, Clone)]
pub struct Invoice {
    pub customer_name: String,
    pub date: String,
    pub items: Vec<LineItem>,
    pub tax_rate: f64,
    pub discount_rate: f64,
    pub subtotal: f64,
    pub tax_amount: f64,
    pub discount_amount: f64,
    pub total: f64,
}

impl Invoice {
    /// Builds the invoice from raw form fields.
    ///
    /// Item rows arrive as parallel `item_name` / `item_quantity` /
    /// `item_price` vectors zipped by index. A row without a name, or whose
    /// quantity/price field is missing entirely, is dropped. Numeric fields
    /// that are present but unparseable coerce to zero, as do the tax and
    /// discount rates.
    pub fn from_form(form: &InvoiceForm) -> Self {
        let customer_name = form
            .customer_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_CUSTOMER)
            .to_string();

        let date = form
            .date
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string());

        let tax_rate = form.tax_rate.as_deref().map(parse_f64_or_zero).unwrap_or(0.0);
        let discount_rate = form.discount.as_deref().map(parse_f64_or_zero).unwrap_or(0.0);

        let mut items = Vec::new();
        let mut subtotal = 0.0;

        for (idx, name) in form.item_name.iter().enumerate() {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            let (Some(quantity), Some(price)) =
                (form.item_quantity.get(idx), form.item_price.get(idx))
            else {
                // Incomplete row
                continue;
            };

            let quantity = parse_i64_or_zero(quantity);
            let price = parse_f64_or_zero(price);
            let line_total = quantity as f64 * price;

            subtotal += line_total;

            items.push(LineItem {
                name: name.to_string(),
                quantity,
                price,
                line_total,
            });
        }

        let tax_amount = subtotal * tax_rate / 100.0;
        let discount_amount = subtotal * discount_rate / 100.0;
        let total = subtotal + tax_amount - discount_amount;

        Invoice {
            customer_name,
            date,
            items,
            tax_rate,
            discount_rate,
            subtotal,
            tax_amount,
            discount_amount,
            total,
        }
    }
}

fn parse_i64_or_zero(s: &str) -> i64 {
    s.trim().parse().unwrap_or(0)
}

fn parse_f64_or_zero(s: &str) -> f64 {
    s.trim().parse().unwrap_or(0.0)
}

/// Formats a monetary amount with two decimal places and thousands
/// separators, e.g. `1234567.5` -> `1,234,567.50`.
pub fn format_amount(value: f64) -> String {
    let digits = format!("{:.2}", value.abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // Negative sign only if anything survives rounding
    let sign = if value < 0.0 && digits != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}
