//! Tabelas de ocupação dos frames, no formato horizontal: a reference string
//! no cabeçalho e uma linha por frame.

use std::fmt::Write;

use pagesim::{ReferenceString, SimulationResult};

pub fn render_table(reference: &ReferenceString, result: &SimulationResult) -> String {
    let mut out = String::new();

    out.push_str("Frames ↓ |");
    for page in reference.iter() {
        let _ = write!(out, " {:>5} |", page);
    }
    out.push('\n');

    out.push_str("---------");
    out.push_str(&"--------".repeat(reference.len()));
    out.push('\n');

    for (frame, row) in result.history.rows().iter().enumerate() {
        let _ = write!(out, "Frame {:<2} |", frame + 1);
        for &cell in row {
            let label = cell.map(|page| page.to_string()).unwrap_or_default();
            let _ = write!(out, " {:>5} |", label);
        }
        out.push('\n');
    }

    out
}

pub fn render_result(reference: &ReferenceString, result: &SimulationResult) -> String {
    format!(
        "=== {} Simulation ===\n{}Total Page Faults: {}\n",
        result.policy,
        render_table(reference, result),
        result.fault_count
    )
}

/// Uma linha por política, para comparar lado a lado.
pub fn render_summary(results: &[SimulationResult]) -> String {
    let mut out = String::from("Política | Faults | Hits | Taxa de faults\n");

    for result in results {
        let _ = writeln!(
            out,
            "{:<8} | {:>6} | {:>4} | {:>5.1}%",
            result.policy.name(),
            result.fault_count,
            result.hit_count(),
            result.fault_ratio() * 100.0
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagesim::{simulate, PolicyKind};

    #[test]
    fn table_shows_blanks_on_hits() {
        let reference = ReferenceString::from(vec![1, 2, 1]);
        let result = simulate(PolicyKind::Fifo, &reference, 2).unwrap();

        let expected = "Frames ↓ |     1 |     2 |     1 |\n\
                        ---------------------------------\n\
                        Frame 1  |     1 |     1 |       |\n\
                        Frame 2  |       |     2 |       |\n";

        assert_eq!(render_table(&reference, &result), expected);
    }

    #[test]
    fn result_block_ends_with_fault_total() {
        let reference = ReferenceString::from(vec![1, 2, 1, 2]);
        let result = simulate(PolicyKind::Lru, &reference, 1).unwrap();

        let block = render_result(&reference, &result);

        assert!(block.starts_with("=== LRU Simulation ===\n"));
        assert!(block.ends_with("Total Page Faults: 4\n"));
    }

    #[test]
    fn summary_has_a_line_per_policy() {
        let reference = ReferenceString::from(vec![1, 2, 3, 1, 2, 3]);
        let results = pagesim::simulate_all(&reference, 3).unwrap();

        let summary = render_summary(&results);

        assert_eq!(summary.lines().count(), 4);
        assert!(summary.contains("Optimal  |      3 |    3 |  50.0%"));
    }
}
