use chrono::{Datelike, NaiveDate, Weekday};
use comfy_table::{Cell, Color, Row, Table};
use haru_core::models::NewEventData;

pub fn display_occurrences(occurrences: &[NewEventData]) {
    if occurrences.is_empty() {
        println!("No occurrences.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "Date", "Day", "Time", "Title", "Location"]);

    for (index, event) in occurrences.iter().enumerate() {
        let mut row = Row::new();
        row.add_cell(Cell::new(index + 1));
        row.add_cell(Cell::new(event.date.to_string()));
        row.add_cell(day_cell(event.date));
        row.add_cell(Cell::new(format!(
            "{}-{}",
            event.start_time.format("%H:%M"),
            event.end_time.format("%H:%M")
        )));

        let display_title = if event.repeat.is_repeating() {
            format!("↻ {}", event.title)
        } else {
            event.title.clone()
        };
        row.add_cell(Cell::new(display_title));

        row.add_cell(Cell::new(if event.location.is_empty() {
            "None"
        } else {
            event.location.as_str()
        }));
        table.add_row(row);
    }

    println!("{table}");
}

pub fn display_dates(dates: &[NaiveDate]) {
    if dates.is_empty() {
        println!("No occurrences.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "Date", "Day"]);

    for (index, date) in dates.iter().enumerate() {
        let mut row = Row::new();
        row.add_cell(Cell::new(index + 1));
        row.add_cell(Cell::new(date.to_string()));
        row.add_cell(day_cell(*date));
        table.add_row(row);
    }

    println!("{table}");
}

fn day_cell(date: NaiveDate) -> Cell {
    let cell = Cell::new(date.format("%a").to_string());
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => cell.fg(Color::DarkGrey),
        _ => cell,
    }
}
