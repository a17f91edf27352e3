use nodecore::{NodeResult, ResolveOutcome, VisitedNode};
use std::fs;
use std::path::Path;

/// One visited-node entry, matching the report convention: connected
/// nodes show a starred zero cost.
fn visited_label(visited: &VisitedNode) -> String {
    let cost = if visited.connected {
        "*0 CP".to_string()
    } else {
        format!("{} CP", visited.cost)
    };
    format!("{} (ID: {} - CP: {})", visited.name, visited.id, cost)
}

fn visited_line(row: &NodeResult) -> String {
    row.visited
        .iter()
        .map(visited_label)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Plain-text report, one section per yield in query order.
pub fn console_report(outcome: &ResolveOutcome) -> String {
    let mut out = String::new();

    for result in &outcome.yields {
        out.push_str(&format!(
            "Node Processing Results for Yield: {}\n\n",
            result.yield_label
        ));
        for row in &result.nodes {
            out.push_str(&format!("  Node: {} (ID: {})\n", row.node_name, row.node_id));
            out.push_str(&format!("    Visited: {}\n", visited_line(row)));
            if !row.path_complete {
                out.push_str("    Warning: no city/town reached, path is incomplete\n");
            }
            out.push_str(&format!(
                "    Lodging: {} ({} CP)\n",
                row.lodging_name, row.lodging_cost
            ));
            out.push_str(&format!("    Total CP: {}\n\n", row.total_cp));
        }
    }

    out
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const HTML_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
<title>Node Path Report</title>
<style>
body { font-family: Arial, sans-serif; margin: 20px; }
.tab { overflow: hidden; border: 1px solid #ccc; background-color: #f1f1f1; }
.tab button { background-color: inherit; float: left; border: none; cursor: pointer; padding: 14px 16px; }
.tab button:hover { background-color: #ddd; }
.table { width: 100%; border-collapse: collapse; }
.table, .table th, .table td { border: 1px solid black; }
.table th, .table td { text-align: left; padding: 8px; }
.table th { background-color: #f2f2f2; }
.tabcontent { display: none; padding: 6px 12px; border: 1px solid #ccc; border-top: none; }
.highlight { background-color: lightblue; }
</style>
<script>
function openYield(evt, name) {
  var i, content = document.getElementsByClassName('tabcontent');
  for (i = 0; i < content.length; i++) { content[i].style.display = 'none'; }
  document.getElementById(name).style.display = 'block';
}
window.onload = function () {
  var first = document.getElementsByClassName('tabcontent')[0];
  if (first) { first.style.display = 'block'; }
};
</script>
</head>
<body>
"#;

/// Tabbed HTML report: one tab and table per yield, visited nodes as
/// list items with connected (free) hops highlighted.
pub fn html_report(outcome: &ResolveOutcome) -> String {
    let mut out = String::from(HTML_HEAD);

    out.push_str("<div class='tab'>\n");
    for result in &outcome.yields {
        let label = escape(&result.yield_label);
        out.push_str(&format!(
            "<button onclick=\"openYield(event, '{}')\">{}</button>\n",
            label, label
        ));
    }
    out.push_str("</div>\n");

    for result in &outcome.yields {
        let label = escape(&result.yield_label);
        out.push_str(&format!(
            "<div id='{}' class='tabcontent'>\n<h3>{}</h3>\n<table class='table'>\n",
            label, label
        ));
        out.push_str(
            "<tr><th>Node ID</th><th>Node Name</th><th>Visited Nodes</th>\
             <th>Lodging</th><th>Lodging CP</th><th>Total CP</th></tr>\n",
        );
        for row in &result.nodes {
            out.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td><ul>\n",
                row.node_id,
                escape(&row.node_name)
            ));
            for visited in &row.visited {
                let class = if visited.connected { " class='highlight'" } else { "" };
                out.push_str(&format!(
                    "<li{}>{}</li>\n",
                    class,
                    escape(&visited_label(visited))
                ));
            }
            out.push_str(&format!(
                "</ul></td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape(&row.lodging_name),
                row.lodging_cost,
                row.total_cp
            ));
        }
        out.push_str("</table>\n</div>\n");
    }

    out.push_str("</body>\n</html>\n");
    out
}

/// Render and write the HTML report, creating parent directories as
/// needed.
pub fn write_html(outcome: &ResolveOutcome, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, html_report(outcome))
}
