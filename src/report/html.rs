// src/report/html.rs
// Static HTML renderer. Consumes finalized RowViews; knows nothing about scoring.
// Every text value goes through html-escape; attributes are double-quoted.

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::config::consts::GAME_URL_PREFIX;
use super::view::{Report, RowView};

const TEMPLATE: &str = include_str!("template.html");
const TITLE: &str = "Best Board Game";

/// (header, numeric?). Numeric columns sort by value client-side.
const COLUMNS: [(&str, bool); 11] = [
    ("Rank", true),
    ("Thumb", false),
    ("Name", false),
    ("Year", true),
    ("Users Rated", true),
    ("Average", true),
    ("BGG Rank", true),
    ("Status", false),
    ("Complexity", true),
    ("Wilson", true),
    ("Weighted", true),
];

/// Page-level facts that are not rows.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderMeta {
    pub snapshot: String,
    pub z: f64,
}

pub fn render(report: &Report, meta: &RenderMeta) -> String {
    let heading = format!("Best Board Game Rankings (Weighted Wilson lower bound, z = {})", meta.z);

    let mut controls = String::new();
    let mut tables = String::new();

    match (&report.recent, report.min_year) {
        (Some(recent), Some(year)) => {
            let _ = write!(
                controls,
                r#"<button id="toggle" data-all-label="Show all years" data-recent-label="{}">Show all years</button>"#,
                attr(&format!("Show {year}+")),
            );
            write_table(&mut tables, "recent", recent, false);
            tables.push('\n');
            write_table(&mut tables, "all", &report.all, true);
        }
        _ => write_table(&mut tables, "all", &report.all, false),
    }

    TEMPLATE
        .replace("{{TITLE}}", TITLE)
        .replace("{{HEADING}}", &text(&heading))
        .replace("{{SNAPSHOT}}", &text(&meta.snapshot))
        .replace("{{CONTROLS}}", &controls)
        .replace("{{TABLES}}", &tables)
}

fn write_table(out: &mut String, id: &str, rows: &[RowView], hidden: bool) {
    let style = if hidden { r#" style="display:none""# } else { "" };
    let _ = writeln!(out, r#"<table id="{id}" class="sortable"{style}>"#);
    out.push_str("<thead>\n<tr>\n");
    for (name, numeric) in COLUMNS {
        let class = match (numeric, name) {
            (true, _) => r#" class="num""#,
            (false, "Status") => r#" class="status""#,
            _ => "",
        };
        let _ = writeln!(out, "  <th{class}>{name}</th>");
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");
    for row in rows {
        write_row(out, row);
    }
    out.push_str("</tbody>\n</table>");
}

fn write_row(out: &mut String, r: &RowView) {
    let name = text(&r.name);
    let link = format!(
        r#"<a href="{GAME_URL_PREFIX}{}" target="_blank" rel="noopener noreferrer">{name}</a>"#,
        r.id
    );
    let img = match &r.thumbnail {
        Some(src) => format!(
            r#"<img src="{}" alt="{} thumbnail">"#,
            attr(src),
            attr(&r.name)
        ),
        None => s!(),
    };
    let status: String = r
        .statuses
        .iter()
        .map(|s| format!(r#"<span title="{}">{}</span>"#, attr(s.label), s.icon))
        .collect();
    let year = r.year.map(|y| y.to_string()).unwrap_or_default();

    let _ = writeln!(
        out,
        r#"<tr><td>{}</td><td class="thumb">{img}</td><td>{link}</td><td>{year}</td><td>{}</td><td>{}</td><td>{}</td><td class="status">{status}</td><td>{:.2}</td><td>{:.3}</td><td>{:.3}</td></tr>"#,
        r.rank, r.users_rated, r.average, r.bgg_rank, r.weight, r.wilson, r.weighted,
    );
}
