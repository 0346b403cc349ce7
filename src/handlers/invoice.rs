// src/handlers/invoice.rs
use askama::Template;
use axum::extract::State;
use axum::response::{Html, Redirect};
use axum_extra::extract::Form;
use tracing::instrument;

use crate::dtos::invoice::{InvoiceForm, InvoiceView};
use crate::error::AppError;
use crate::models::invoice::Invoice;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    currency: String,
}

#[derive(Template)]
#[template(path = "invoice.html")]
struct InvoiceTemplate {
    currency: String,
    invoice: InvoiceView,
}

// GET / - Bill entry form
pub async fn show_form(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let page = IndexTemplate {
        currency: state.settings.currency_symbol.clone(),
    };
    Ok(Html(page.render()?))
}

// POST /calculate - Compute totals and render the invoice
#[instrument(skip(state, form))]
pub async fn calculate(
    State(state): State<AppState>,
    Form(form): Form<InvoiceForm>,
) -> Result<Html<String>, AppError> {
    let invoice = Invoice::from_form(&form);

    tracing::info!(
        customer = %invoice.customer_name,
        items = invoice.items.len(),
        total = invoice.total,
        "Calculated bill"
    );

    let page = InvoiceTemplate {
        currency: state.settings.currency_symbol.clone(),
        invoice: InvoiceView::from(invoice),
    };
    Ok(Html(page.render()?))
}

// GET /calculate - Direct access goes back to the form
pub async fn calculate_redirect() -> Redirect {
    Redirect::to("/")
}
