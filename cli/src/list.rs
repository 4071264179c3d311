use safecal_core::{MonthlyView, MONTH_NAMES};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Day")]
    day: String,
    #[tabled(rename = "Incidents")]
    incidents: String,
    #[tabled(rename = "Risks")]
    risks: String,
}

pub fn show_month(view: &MonthlyView) {
    let month_name = MONTH_NAMES[view.month0 as usize];

    if view.points.is_empty() {
        println!("No records for {} {}.", month_name, view.year);
        return;
    }

    let rows: Vec<MonthRow> = view
        .points
        .iter()
        .map(|point| MonthRow {
            date: point.date.format("%Y-%m-%d").to_string(),
            day: point.date.format("%a").to_string(),
            incidents: format!("{:.0}", point.counts.incidents),
            risks: format!("{:.0}", point.counts.risks),
        })
        .collect();

    println!(
        "\n\x1b[1;36m{} {}\x1b[0m (Incidents: {:.0}, Risks: {:.0})",
        month_name, view.year, view.summary.total_incidents, view.summary.total_risks
    );

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));

    println!("{}", table);
}
