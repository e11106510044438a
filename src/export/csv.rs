//! CSV export of a month view
//!
//! One row per payable item in the month, in calendar order.

use std::io::Write;

use serde::Serialize;

use crate::calendar::{MonthView, UrgencyLevel};
use crate::error::PayablesResult;

const HEADER: [&str; 7] = [
    "due_date",
    "kind",
    "id",
    "title",
    "amount",
    "payment_status",
    "urgency",
];

#[derive(Serialize)]
struct MonthRow<'a> {
    due_date: String,
    kind: String,
    id: String,
    title: &'a str,
    amount: String,
    payment_status: &'static str,
    urgency: UrgencyLevel,
}

/// Write every item of `view` as CSV, header first
///
/// The header is written even when the month has no items.
pub fn export_month_csv<W: Write>(view: &MonthView, writer: W) -> PayablesResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(HEADER)?;

    for entry in view.items() {
        let item = &entry.item;
        csv_writer.serialize(MonthRow {
            due_date: item.due_date().format("%Y-%m-%d").to_string(),
            kind: item.kind().to_string(),
            id: item.id().to_string(),
            title: item.title(),
            amount: item.amount().to_string(),
            payment_status: item.payment_status().as_str(),
            urgency: entry.urgency.level(),
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Classifier;
    use crate::models::{
        InvoiceId, Money, MonthCursor, OrderId, PayableId, PayableItem, PaymentStatus,
    };
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_export_month() {
        let items = vec![
            PayableItem::new(
                PayableId::Order(OrderId::new()),
                "Order CMD-1",
                Money::from_units(600),
                date(2024, 2, 4),
                PaymentStatus::PartiallyPaid,
            )
            .unwrap(),
            PayableItem::new(
                PayableId::Invoice(InvoiceId::new()),
                "Invoice FAC-1, acompte",
                Money::from_cents(120050),
                date(2024, 2, 1),
                PaymentStatus::Unpaid,
            )
            .unwrap(),
        ];
        let view = MonthView::build(
            &items,
            MonthCursor::new(2024, 2).unwrap(),
            &Classifier::new(date(2024, 2, 2)),
        );

        let mut buffer = Vec::new();
        export_month_csv(&view, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines[0],
            "due_date,kind,id,title,amount,payment_status,urgency"
        );
        assert!(lines[1].starts_with("2024-02-01,Invoice,inv-"));
        assert!(lines[1].ends_with(",\"Invoice FAC-1, acompte\",1200.50,unpaid,overdue"));
        assert!(lines[2].ends_with(",Order CMD-1,600.00,partially paid,due_soon"));
    }

    #[test]
    fn test_export_empty_month_writes_header_only() {
        let view = MonthView::build(
            &[],
            MonthCursor::new(2024, 2).unwrap(),
            &Classifier::new(date(2024, 2, 2)),
        );
        let mut buffer = Vec::new();
        export_month_csv(&view, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(
            output,
            "due_date,kind,id,title,amount,payment_status,urgency\n"
        );
    }
}
