use chrono::{Datelike, NaiveDate};
use comfy_table::{Attribute, Cell, Color, Row, Table};

/// One upcoming firing as shown by `planner preview`.
#[derive(Debug, Clone)]
pub struct ViewOccurrence {
    pub date: NaiveDate,
    pub days_from_now: i64,
}

impl ViewOccurrence {
    pub fn new(date: NaiveDate, now: NaiveDate) -> Self {
        Self {
            date,
            days_from_now: date.signed_duration_since(now).num_days(),
        }
    }
}

pub fn build_occurrence_table(occurrences: &[ViewOccurrence]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Date", "Weekday", "In"]);

    for (index, occurrence) in occurrences.iter().enumerate() {
        let mut row = Row::new();
        row.add_cell(Cell::new(index + 1));
        row.add_cell(Cell::new(occurrence.date.format("%Y-%m-%d")).add_attribute(Attribute::Bold));

        let weekday = occurrence.date.weekday();
        let mut weekday_cell = Cell::new(weekday);
        if weekday.number_from_monday() >= 6 {
            weekday_cell = weekday_cell.fg(Color::Yellow);
        }
        row.add_cell(weekday_cell);

        let in_text = match occurrence.days_from_now {
            1 => "tomorrow".to_string(),
            days => format!("{days} days"),
        };
        row.add_cell(Cell::new(in_text));
        table.add_row(row);
    }

    table
}

pub fn display_occurrences(occurrences: &[ViewOccurrence]) {
    if occurrences.is_empty() {
        println!("No upcoming dates.");
        return;
    }
    println!("{}", build_occurrence_table(occurrences));
}
