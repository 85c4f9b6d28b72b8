use crate::domain::model::{Aggregation, StateCode};

pub const SEPARATOR: &str = "------------------------------";

/// Renders the aggregation, or `None` when there is nothing to show.
pub fn format_summary(aggregation: &Aggregation, state: &StateCode) -> Option<String> {
    if aggregation.is_empty() {
        return None;
    }

    let mut lines = Vec::with_capacity(aggregation.len() + 3);
    lines.push(format!("{} Flight Status Summary:", state));
    lines.push(SEPARATOR.to_string());

    for (destination, statuses) in aggregation.iter() {
        let parts: Vec<String> = statuses
            .iter()
            .map(|(status, count)| {
                let plural = if *count > 1 { "s" } else { "" };
                format!("{} - {} flight{}", status, count, plural)
            })
            .collect();
        lines.push(format!("{}: {}", destination, parts.join(", ")));
    }

    lines.push(SEPARATOR.to_string());
    Some(lines.join("\n"))
}
