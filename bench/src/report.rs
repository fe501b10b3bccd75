use std::fmt;
use std::io;

use algos::{TimingRecord, match_index};

const RULE_WIDTH: usize = 48;

/// One comparison run: which text, which pattern, and what each algorithm did.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub text: String,
    pub pattern: String,
    pub records: Vec<TimingRecord>,
}

/// Fixed-width comparison table for one scenario.
pub struct Table<'a> {
    pub title: &'a str,
    pub records: &'a [TimingRecord],
}

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(f, " {}", self.title)?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "{:<15} | {:<15} | {}", "Algorithm", "Elapsed, s", "Match")?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        for record in self.records {
            writeln!(
                f,
                "{:<15} | {:<15.8} | {}",
                record.name,
                record.elapsed_seconds,
                match_index(record.found)
            )?;
        }
        write!(f, "{}", rule)
    }
}

pub fn render_table(title: &str, records: &[TimingRecord]) -> String {
    Table { title, records }.to_string()
}

pub fn write_csv<W: io::Write>(writer: W, scenarios: &[Scenario]) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["text", "pattern", "algorithm", "elapsed_seconds", "match_index"])?;

    for scenario in scenarios {
        for record in &scenario.records {
            let elapsed = format!("{:.8}", record.elapsed_seconds);
            let index = match_index(record.found).to_string();
            wtr.write_record([
                scenario.text.as_str(),
                scenario.pattern.as_str(),
                record.name,
                elapsed.as_str(),
                index.as_str(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<TimingRecord> {
        vec![
            TimingRecord {
                name: "Boyer-Moore",
                elapsed_seconds: 0.00001234,
                found: Some(4),
            },
            TimingRecord {
                name: "KMP",
                elapsed_seconds: 0.5,
                found: Some(4),
            },
            TimingRecord {
                name: "Rabin-Karp",
                elapsed_seconds: 0.0,
                found: None,
            },
        ]
    }

    #[test]
    fn table_layout() {
        let table = render_table("text_1.txt (existing substring)", &records());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], " text_1.txt (existing substring)");
        assert_eq!(lines[1], "=".repeat(RULE_WIDTH));
        assert_eq!(lines[2], "Algorithm       | Elapsed, s      | Match");
        assert_eq!(lines[3], "-".repeat(RULE_WIDTH));
        assert_eq!(lines[4], "Boyer-Moore     | 0.00001234      | 4");
        assert_eq!(lines[5], "KMP             | 0.50000000      | 4");
        assert_eq!(lines[6], "Rabin-Karp      | 0.00000000      | -1");
        assert_eq!(lines[7], "=".repeat(RULE_WIDTH));
    }

    #[test]
    fn table_displays_inline() {
        let records = records();
        let table = Table {
            title: "t",
            records: &records[2..],
        };
        let shown = format!("{}\n", table);
        assert!(shown.starts_with(" t\n"));
        assert!(shown.contains("Rabin-Karp      | 0.00000000      | -1\n"));
        assert_eq!(shown, render_table("t", &records[2..]) + "\n");
    }

    #[test]
    fn csv_rows() {
        let scenarios = vec![Scenario {
            text: "text_1.txt".to_string(),
            pattern: "cad, abra".to_string(),
            records: records(),
        }];

        let mut buf = Vec::new();
        write_csv(&mut buf, &scenarios).unwrap();
        let csv = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "text,pattern,algorithm,elapsed_seconds,match_index");
        assert_eq!(lines[1], "text_1.txt,\"cad, abra\",Boyer-Moore,0.00001234,4");
        assert_eq!(lines[3], "text_1.txt,\"cad, abra\",Rabin-Karp,0.00000000,-1");
        assert_eq!(lines.len(), 4);
    }
}
