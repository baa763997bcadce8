use crate::text::metrics::TextMetrics;

/// Greedily break `text` into lines no wider than `max_width`, at word boundaries only.
///
/// A word wider than `max_width` gets a line of its own and overflows. Always returns at least
/// one line; blank input yields a single empty line.
pub fn wrap_lines<M>(text: &str, metrics: &mut M, max_width: i32) -> Vec<String>
where
    M: TextMetrics + ?Sized,
{
    let mut lines = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for word in text.split_whitespace() {
        current.push(word);
        if current.len() == 1 || metrics.measure(&current.join(" ")).width <= max_width {
            continue;
        }
        current.pop();
        lines.push(current.join(" "));
        current.clear();
        current.push(word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current.join(" "));
    }
    lines
}

#[cfg(test)]
#[path = "../../tests/unit/text/wrap.rs"]
mod tests;
