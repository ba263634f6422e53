// Report generation from a finished crawl tree

use anyhow::{Result, bail};
use linkweave_scanner::PageNode;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const INDENT: &str = "    ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => bail!("Unknown report format: {}", other),
        }
    }
}

/// Renders the tree one address per line, indented by depth, followed by a
/// page count.
pub fn render_tree(root: &PageNode) -> String {
    let mut report = String::new();
    root.walk(0, &mut |node, depth| {
        report.push_str(&INDENT.repeat(depth));
        report.push_str(&node.url);
        report.push('\n');
    });

    let pages = root.node_count();
    report.push_str(&format!(
        "\n{} page{} crawled\n",
        pages,
        if pages == 1 { "" } else { "s" }
    ));
    report
}

pub fn render_json(root: &PageNode) -> Result<String> {
    Ok(serde_json::to_string_pretty(root)?)
}

pub fn render(root: &PageNode, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_tree(root)),
        ReportFormat::Json => render_json(root),
    }
}
