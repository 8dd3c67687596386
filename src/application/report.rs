//! Output of CLI commands: JSON reports and plain-text tables

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::position::PositionsDisplay;
use crate::domain::table::{Alignment, CompactBlock, HeaderCell, PagerInfo, RenderableRow, SortDirection, TableView};
use crate::shared::i18n::Translator;

/// Rendered table plus when it was produced
#[derive(Debug, Serialize)]
pub struct TableReport {
    pub table: String,
    pub view: TableView,
    pub timestamp: DateTime<Utc>,
}

impl TableReport {
    pub fn new(table: impl Into<String>, view: TableView) -> Self {
        Self {
            table: table.into(),
            view,
            timestamp: Utc::now(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Positions page state plus the account it was computed for
#[derive(Debug, Serialize)]
pub struct PositionsReport {
    pub account: Option<String>,
    pub display: PositionsDisplay,
    pub timestamp: DateTime<Utc>,
}

impl PositionsReport {
    pub fn new(account: Option<String>, display: PositionsDisplay) -> Self {
        Self {
            account,
            display,
            timestamp: Utc::now(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Plain-text rendering of a table view
pub fn render_table_text(view: &TableView, translator: &dyn Translator) -> String {
    match view {
        TableView::Loading => format!("{}...", translator.translate("loading")),
        TableView::Empty { headers } => {
            let labels: Vec<String> = headers.iter().map(header_label).collect();
            format!("{}\n{}", labels.join(" | "), translator.translate("noData"))
        }
        TableView::Rows { headers, rows, pager, .. } => {
            let mut out = if rows.iter().all(|r| matches!(r, RenderableRow::Compact { .. })) {
                render_compact(rows)
            } else {
                render_grid(headers, rows)
            };
            if let Some(line) = pager_line(pager) {
                out.push('\n');
                out.push_str(&line);
            }
            out
        }
    }
}

fn header_label(header: &HeaderCell) -> String {
    match header.direction {
        Some(SortDirection::Asc) => format!("{} ▲", header.label),
        Some(SortDirection::Desc) => format!("{} ▼", header.label),
        None => header.label.clone(),
    }
}

fn render_grid(headers: &[HeaderCell], rows: &[RenderableRow]) -> String {
    let labels: Vec<String> = headers.iter().map(header_label).collect();
    let body: Vec<Vec<String>> = rows
        .iter()
        .filter_map(|row| match row {
            RenderableRow::Expanded { cells, .. } => Some(cells.iter().map(|c| c.content.display()).collect()),
            RenderableRow::Compact { .. } => None,
        })
        .collect();

    let widths: Vec<usize> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            body.iter()
                .filter_map(|cells| cells.get(i))
                .map(|text| text.chars().count())
                .chain(std::iter::once(label.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |texts: &[String]| -> String {
        texts
            .iter()
            .zip(headers.iter().zip(widths.iter()))
            .map(|(text, (header, width))| pad(text, *width, header.align))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![line(labels.as_slice())];
    lines.push(widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("-+-"));
    lines.extend(body.iter().map(|cells| line(cells.as_slice())));
    lines.join("\n")
}

fn render_compact(rows: &[RenderableRow]) -> String {
    let mut lines = Vec::new();
    for row in rows {
        if let RenderableRow::Compact { block, .. } = row {
            push_block(&mut lines, block);
        }
    }
    lines.join("\n")
}

fn push_block(lines: &mut Vec<String>, block: &CompactBlock) {
    if block.spaced {
        lines.push(String::new());
    }
    lines.push(block.heading.display());
    for line in &block.lines {
        lines.push(format!("  {}: {}", line.label, line.content.display()));
    }
}

fn pager_line(pager: &PagerInfo) -> Option<String> {
    pager.enabled.then(|| {
        format!(
            "Page {} of {} ({} rows)",
            pager.current_page + 1,
            pager.total_pages,
            pager.total_rows
        )
    })
}

fn pad(text: &str, width: usize, align: Alignment) -> String {
    let len = text.chars().count();
    let gap = width.saturating_sub(len);
    match align {
        Alignment::Left => format!("{}{}", text, " ".repeat(gap)),
        Alignment::Right => format!("{}{}", " ".repeat(gap), text),
        Alignment::Center => {
            let left = gap / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(gap - left))
        }
    }
}

/// Text for every positions state except the list itself
pub fn positions_notice(display: &PositionsDisplay, translator: &dyn Translator) -> Option<String> {
    match display {
        PositionsDisplay::ConnectWallet => Some(format!(
            "{}\n[{}]",
            translator.translate("noLiquidityPositions"),
            translator.translate("connectWallet")
        )),
        PositionsDisplay::Loading => Some(format!("{}...", translator.translate("loading"))),
        PositionsDisplay::Empty => Some(translator.translate("noLiquidityPositions")),
        PositionsDisplay::Positions { .. } => None,
    }
}
