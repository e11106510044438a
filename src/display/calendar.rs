//! Month grid rendering
//!
//! Each cell is the day number followed by a marker: `!` when something due
//! that day is overdue, `*` when something is due soon, `+` for other items.

use crate::calendar::{MonthView, UrgencyLevel};

const WEEKDAY_HEADER: &str = " Mo   Tu   We   Th   Fr   Sa   Su";

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English month name, e.g. "February 2024"
pub fn month_title(view: &MonthView) -> String {
    let name = MONTH_NAMES
        .get(view.month.month() as usize - 1)
        .copied()
        .unwrap_or("?");
    format!("{} {}", name, view.month.year())
}

fn day_marker(view: &MonthView, day: u32) -> char {
    view.items_on(day)
        .iter()
        .map(|c| c.urgency.level())
        .min()
        .map(|level| match level {
            UrgencyLevel::Overdue => '!',
            UrgencyLevel::DueSoon => '*',
            UrgencyLevel::Normal => '+',
        })
        .unwrap_or(' ')
}

/// Render the Monday-first grid, one week per line
pub fn format_month_grid(view: &MonthView) -> String {
    let mut output = String::new();
    output.push_str(WEEKDAY_HEADER);
    output.push('\n');

    for week in view.grid.chunks(7) {
        let line: Vec<String> = week
            .iter()
            .map(|cell| match cell {
                Some(day) => format!(" {:>2}{}", day, day_marker(view, *day)),
                None => "    ".to_string(),
            })
            .collect();
        output.push_str(line.join(" ").trim_end());
        output.push('\n');
    }

    output
}
