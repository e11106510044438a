//! Invoice CLI commands

use clap::Subcommand;

use super::{parse_amount, parse_status, CommandContext};
use crate::display::{format_invoice_details, format_invoice_list};
use crate::error::PayablesResult;
use crate::models::{parse_date, InvoiceRecord};
use crate::services::{InvoiceService, OrderService};

/// Invoice subcommands
#[derive(Subcommand)]
pub enum InvoiceCommands {
    /// Record a new invoice
    Add {
        /// Invoice number (e.g. "FAC-2024-001")
        number: String,
        /// Amount (e.g. "1200" or "1200,50")
        amount: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: String,
        /// Payment status (en attente, payé, PENDING, PAID, ...)
        #[arg(short, long, default_value = "unpaid")]
        status: String,
        /// Issue date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Order number or ID this invoice bills
        #[arg(short, long)]
        order: Option<String>,
    },
    /// List all invoices
    List,
    /// Show invoice details
    Show {
        /// Invoice number or ID
        invoice: String,
    },
    /// Update the payment status of an invoice
    Status {
        /// Invoice number or ID
        invoice: String,
        /// New payment status
        status: String,
    },
    /// Delete an invoice
    Delete {
        /// Invoice number or ID
        invoice: String,
    },
}

/// Handle an invoice command
pub fn handle_invoice_command(
    ctx: &CommandContext<'_>,
    cmd: InvoiceCommands,
) -> PayablesResult<()> {
    let service = InvoiceService::new(ctx.storage);
    let orders = OrderService::new(ctx.storage);

    match cmd {
        InvoiceCommands::Add {
            number,
            amount,
            due,
            status,
            date,
            order,
        } => {
            let mut invoice =
                InvoiceRecord::new(number, parse_amount(&amount)?, parse_date(&due)?);
            invoice.set_payment_status(parse_status(&status)?);
            invoice.issue_date = match date {
                Some(date) => parse_date(&date)?,
                None => ctx.today,
            };
            if let Some(order) = order {
                invoice.order_id = Some(orders.get(&order)?.id);
            }

            let invoice = service.create(invoice)?;

            println!("Created invoice: {}", invoice.invoice_number);
            println!(
                "  Amount: {}",
                invoice.amount.format_with_symbol(&ctx.settings.currency_symbol)
            );
            println!("  Due:    {}", invoice.due_date);
            println!("  ID:     {}", invoice.id);
        }

        InvoiceCommands::List => {
            let invoices = service.list()?;
            println!("{}", format_invoice_list(&invoices, &ctx.list_context()));
        }

        InvoiceCommands::Show { invoice } => {
            let invoice = service.get(&invoice)?;
            let order = match invoice.order_id {
                Some(id) => ctx.storage.orders.get(id)?,
                None => None,
            };
            print!(
                "{}",
                format_invoice_details(&invoice, order.as_ref(), &ctx.list_context())
            );
        }

        InvoiceCommands::Status { invoice, status } => {
            let invoice = service.set_status(&invoice, parse_status(&status)?)?;
            println!(
                "Invoice {} is now {}",
                invoice.invoice_number, invoice.payment_status
            );
        }

        InvoiceCommands::Delete { invoice } => {
            let invoice = service.delete(&invoice)?;
            println!("Deleted invoice: {}", invoice.invoice_number);
        }
    }

    Ok(())
}
