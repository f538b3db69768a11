use crate::{DiffOptions, Line};

/// Serializes a diff tree into report strings.
///
/// Every line is written as its indentation followed by its contents and a newline,
/// then its children. Within each group of siblings, the top-level lines included, the
/// lines are sorted by contents when all of them are orderable.
///
/// When no top-level line has children the whole report is returned as a single
/// string, otherwise there is one string per top-level line.
pub fn render(lines: &[Line], options: &DiffOptions) -> Vec<String> {
    if lines.is_empty() {
        return Vec::new();
    }

    let unit = options.indentation.unit();
    let top_level = sibling_order(lines);

    if lines.iter().all(|line| !line.has_children()) {
        trace!(lines = lines.len(), "rendering leaf lines as one message");
        let mut out = String::new();
        for line in top_level {
            write_line(&mut out, line, unit);
        }
        return vec![out];
    }

    trace!(lines = lines.len(), "rendering one message per top-level line");
    top_level
        .into_iter()
        .map(|line| {
            let mut out = String::new();
            write_line(&mut out, line, unit);
            out
        })
        .collect()
}

fn sibling_order(lines: &[Line]) -> Vec<&Line> {
    let mut ordered: Vec<&Line> = lines.iter().collect();
    if ordered.iter().all(|line| line.can_be_ordered()) {
        ordered.sort_by(|a, b| a.contents().cmp(b.contents()));
    }
    ordered
}

fn write_line(out: &mut String, line: &Line, unit: &str) {
    for _ in 0..line.indentation_level() {
        out.push_str(unit);
    }
    out.push_str(line.contents());
    out.push('\n');
    for child in sibling_order(line.children()) {
        write_line(out, child, unit);
    }
}
