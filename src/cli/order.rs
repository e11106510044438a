//! Order CLI commands

use clap::Subcommand;

use super::{parse_amount, parse_status, CommandContext};
use crate::display::{format_order_billing, format_order_details, format_order_list};
use crate::error::PayablesResult;
use crate::models::{parse_date, OrderRecord};
use crate::services::{InvoiceService, OrderService};

/// Order subcommands
#[derive(Subcommand)]
pub enum OrderCommands {
    /// Record a new order
    Add {
        /// Order number (e.g. "CMD-2024-001")
        number: String,
        /// Total amount including taxes (e.g. "1200" or "1200,50")
        amount: String,
        /// Payment due date (YYYY-MM-DD)
        #[arg(long)]
        due: String,
        /// Payment status (unpaid, partially paid, paid, or the French words)
        #[arg(short, long, default_value = "unpaid")]
        status: String,
        /// Order date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Client or supplier name
        #[arg(short, long)]
        client: Option<String>,
        /// Project name
        #[arg(short, long)]
        project: Option<String>,
        /// Free-form description
        #[arg(long)]
        description: Option<String>,
    },
    /// List all orders
    List,
    /// Show order details
    Show {
        /// Order number or ID
        order: String,
    },
    /// Update the payment status of an order
    Status {
        /// Order number or ID
        order: String,
        /// New payment status
        status: String,
    },
    /// Delete an order
    Delete {
        /// Order number or ID
        order: String,
    },
}

/// Handle an order command
pub fn handle_order_command(ctx: &CommandContext<'_>, cmd: OrderCommands) -> PayablesResult<()> {
    let service = OrderService::new(ctx.storage);

    match cmd {
        OrderCommands::Add {
            number,
            amount,
            due,
            status,
            date,
            client,
            project,
            description,
        } => {
            let mut order = OrderRecord::new(number, parse_amount(&amount)?, parse_date(&due)?);
            order.set_payment_status(parse_status(&status)?);
            order.order_date = match date {
                Some(date) => parse_date(&date)?,
                None => ctx.today,
            };
            order.client_name = client;
            order.project_name = project;
            order.description = description.unwrap_or_default();

            let order = service.create(order)?;

            println!("Created order: {}", order.order_number);
            println!(
                "  Amount: {}",
                order.total_amount.format_with_symbol(&ctx.settings.currency_symbol)
            );
            println!("  Due:    {}", order.payment_due_date);
            println!("  ID:     {}", order.id);
        }

        OrderCommands::List => {
            let orders = service.list()?;
            println!("{}", format_order_list(&orders, &ctx.list_context()));
        }

        OrderCommands::Show { order } => {
            let order = service.get(&order)?;
            print!("{}", format_order_details(&order, &ctx.list_context()));
            let billing = service.billing(&order)?;
            print!(
                "{}",
                format_order_billing(&billing, &ctx.settings.currency_symbol)
            );

            let invoices = InvoiceService::new(ctx.storage).list_for_order(order.id)?;
            if !invoices.is_empty() {
                println!("Invoices:");
                for invoice in invoices {
                    println!(
                        "  {}  {}  due {}  {}",
                        invoice.invoice_number,
                        invoice.amount.format_with_symbol(&ctx.settings.currency_symbol),
                        invoice.due_date,
                        invoice.payment_status
                    );
                }
            }
        }

        OrderCommands::Status { order, status } => {
            let order = service.set_status(&order, parse_status(&status)?)?;
            println!(
                "Order {} is now {}",
                order.order_number, order.payment_status
            );
        }

        OrderCommands::Delete { order } => {
            let order = service.delete(&order)?;
            println!("Deleted order: {}", order.order_number);
        }
    }

    Ok(())
}
