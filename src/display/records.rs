//! Order and invoice display formatting
//!
//! List views are rendered as tables, with an urgency badge computed for the
//! day the listing is shown.

use chrono::NaiveDate;
use tabled::{settings::Style, Table, Tabled};

use crate::calendar::{classify_within, UrgencyLevel};
use crate::models::{format_date, InvoiceRecord, OrderRecord, SourceStatus};
use crate::services::OrderBilling;

/// Badge text for a record; cancelled and unreadable statuses get no badge
pub fn urgency_badge(
    due_date: NaiveDate,
    raw_status: &str,
    today: NaiveDate,
    window_days: i64,
) -> &'static str {
    let status = match SourceStatus::normalize(raw_status) {
        Ok(SourceStatus::Payable(status)) => status,
        _ => return "",
    };
    match classify_within(due_date, status, today, window_days).level() {
        UrgencyLevel::Overdue => "OVERDUE",
        UrgencyLevel::DueSoon => "due soon",
        UrgencyLevel::Normal => "",
    }
}

#[derive(Tabled)]
struct OrderRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NUMBER")]
    number: String,
    #[tabled(rename = "CLIENT")]
    client: String,
    #[tabled(rename = "AMOUNT")]
    amount: String,
    #[tabled(rename = "DUE")]
    due: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "")]
    badge: &'static str,
}

#[derive(Tabled)]
struct InvoiceRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NUMBER")]
    number: String,
    #[tabled(rename = "ISSUED")]
    issued: String,
    #[tabled(rename = "AMOUNT")]
    amount: String,
    #[tabled(rename = "DUE")]
    due: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "")]
    badge: &'static str,
}

/// Shared rendering settings for record listings
#[derive(Debug, Clone)]
pub struct ListContext<'a> {
    pub today: NaiveDate,
    pub window_days: i64,
    pub currency_symbol: &'a str,
    pub date_format: &'a str,
}

impl ListContext<'_> {
    /// Render a date with the configured pattern, falling back to ISO form
    pub fn date(&self, date: NaiveDate) -> String {
        format_date(date, self.date_format).unwrap_or_else(|| date.to_string())
    }
}

/// Format a list of orders as a table
pub fn format_order_list(orders: &[OrderRecord], ctx: &ListContext<'_>) -> String {
    if orders.is_empty() {
        return "No orders found.".to_string();
    }

    let rows = orders.iter().map(|o| OrderRow {
        id: o.id.short(),
        number: o.order_number.clone(),
        client: o.client_name.clone().unwrap_or_default(),
        amount: o.total_amount.format_with_symbol(ctx.currency_symbol),
        due: ctx.date(o.payment_due_date),
        status: o.payment_status.clone(),
        badge: urgency_badge(o.payment_due_date, &o.payment_status, ctx.today, ctx.window_days),
    });
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format a list of invoices as a table
pub fn format_invoice_list(invoices: &[InvoiceRecord], ctx: &ListContext<'_>) -> String {
    if invoices.is_empty() {
        return "No invoices found.".to_string();
    }

    let rows = invoices.iter().map(|i| InvoiceRow {
        id: i.id.short(),
        number: i.invoice_number.clone(),
        issued: ctx.date(i.issue_date),
        amount: i.amount.format_with_symbol(ctx.currency_symbol),
        due: ctx.date(i.due_date),
        status: i.payment_status.clone(),
        badge: urgency_badge(i.due_date, &i.payment_status, ctx.today, ctx.window_days),
    });
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format a single order for detail view
pub fn format_order_details(order: &OrderRecord, ctx: &ListContext<'_>) -> String {
    let mut output = String::new();
    output.push_str(&format!("Order:       {}\n", order.order_number));
    output.push_str(&format!("ID:          {}\n", order.id));
    output.push_str(&format!(
        "Date:        {}\n",
        ctx.date(order.order_date)
    ));
    if let Some(client) = &order.client_name {
        output.push_str(&format!("Client:      {}\n", client));
    }
    if let Some(project) = &order.project_name {
        output.push_str(&format!("Project:     {}\n", project));
    }
    if !order.description.is_empty() {
        output.push_str(&format!("Description: {}\n", order.description));
    }
    output.push_str(&format!(
        "Amount:      {}\n",
        order.total_amount.format_with_symbol(ctx.currency_symbol)
    ));
    output.push_str(&format!(
        "Due:         {}\n",
        ctx.date(order.payment_due_date)
    ));
    output.push_str(&format!("Status:      {}", order.payment_status));

    let badge = urgency_badge(
        order.payment_due_date,
        &order.payment_status,
        ctx.today,
        ctx.window_days,
    );
    if !badge.is_empty() {
        output.push_str(&format!(" ({})", badge));
    }
    output.push('\n');
    output
}

/// Format the billing lines shown under an order's details
///
/// The remaining line only appears while part of the total is unbilled.
pub fn format_order_billing(billing: &OrderBilling, currency_symbol: &str) -> String {
    let mut output = format!(
        "Invoiced:    {}\n",
        billing.invoiced.format_with_symbol(currency_symbol)
    );
    if billing.has_remaining() {
        output.push_str(&format!(
            "Remaining:   {}\n",
            billing.remaining.format_with_symbol(currency_symbol)
        ));
    }
    output
}

/// Format a single invoice for detail view
pub fn format_invoice_details(
    invoice: &InvoiceRecord,
    order: Option<&OrderRecord>,
    ctx: &ListContext<'_>,
) -> String {
    let mut output = String::new();
    output.push_str(&format!("Invoice:     {}\n", invoice.invoice_number));
    output.push_str(&format!("ID:          {}\n", invoice.id));
    output.push_str(&format!(
        "Issued:      {}\n",
        ctx.date(invoice.issue_date)
    ));
    if let Some(order) = order {
        output.push_str(&format!("Order:       {}\n", order.order_number));
    }
    output.push_str(&format!(
        "Amount:      {}\n",
        invoice.amount.format_with_symbol(ctx.currency_symbol)
    ));
    output.push_str(&format!(
        "Due:         {}\n",
        ctx.date(invoice.due_date)
    ));
    output.push_str(&format!("Status:      {}", invoice.payment_status));

    let badge = urgency_badge(
        invoice.due_date,
        &invoice.payment_status,
        ctx.today,
        ctx.window_days,
    );
    if !badge.is_empty() {
        output.push_str(&format!(" ({})", badge));
    }
    output.push('\n');
    output
}
