//! Console report formatting
//!
//! Pure formatting over already measured samples:
//!
//! ```text
//! [Start] macos aarch64
//! AddFIRST                 1,000         10,000        100,000  ; # Elements
//!       ArrayList         25,179          2,724            246  ; Ops/Milli
//!      LinkedList        227,880        231,088        211,488  ; Ops/Milli
//! [Done]
//! ```

use crate::core_types::Throughput;
use crate::harness::{ContainerRow, OperationReport};

const COLUMN_WIDTH: usize = 15;

pub const DONE_MARKER: &str = "[Done]";

/// Host banner: operating system and architecture
pub fn banner() -> String {
    format!("[Start] {} {}", std::env::consts::OS, std::env::consts::ARCH)
}

/// Operation name followed by the size sweep
pub fn header_line(name: &str, sizes: &[usize]) -> String {
    let mut line = format!("{:<width$}", name, width = COLUMN_WIDTH);
    for &size in sizes {
        line.push_str(&format!(
            "{:>width$}",
            group_thousands(size as u64),
            width = COLUMN_WIDTH
        ));
    }
    line.push_str("  ; # Elements");
    line
}

/// Container name followed by one throughput per size
pub fn row_line(row: &ContainerRow) -> String {
    let mut line = format!("{:>width$}", row.container.name(), width = COLUMN_WIDTH);
    for sample in &row.samples {
        let cell = match sample.throughput() {
            Some(rate) => group_thousands(rate),
            None => "n/a".to_string(),
        };
        line.push_str(&format!("{:>width$}", cell, width = COLUMN_WIDTH));
    }
    line.push_str("  ; Ops/Milli");
    line
}

/// Header plus one row per container strategy
pub fn render(report: &OperationReport) -> Vec<String> {
    let mut lines = Vec::with_capacity(report.rows.len() + 1);
    lines.push(header_line(report.operation.name(), &report.sizes));
    lines.extend(report.rows.iter().map(row_line));
    lines
}

/// `1234567` -> `"1,234,567"`
pub fn group_thousands(value: Throughput) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::ContainerKind;
    use crate::operation::Operation;
    use crate::perf::Sample;
    use std::time::Duration;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(100_000), "100,000");
        assert_eq!(group_thousands(1_569_730), "1,569,730");
    }

    #[test]
    fn test_header_line() {
        let line = header_line("AddFIRST", &[1_000, 10_000, 100_000]);
        assert_eq!(
            line,
            "AddFIRST                 1,000         10,000        100,000  ; # Elements"
        );
    }

    #[test]
    fn test_render_rows() {
        let mut fast = Sample::new(1_000);
        fast.record(Duration::from_millis(1));
        let idle = Sample::new(1_000);

        let report = OperationReport {
            operation: Operation::Get,
            sizes: vec![1_000, 1_000],
            rows: vec![ContainerRow {
                container: ContainerKind::Linked,
                samples: vec![fast, idle],
            }],
        };
        let lines = render(&report);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Get "));
        assert_eq!(
            lines[1],
            "     LinkedList          1,000            n/a  ; Ops/Milli"
        );
    }

    #[test]
    fn test_banner_names_host() {
        let line = banner();
        assert!(line.starts_with("[Start] "));
        assert!(line.ends_with(std::env::consts::ARCH));
    }
}
