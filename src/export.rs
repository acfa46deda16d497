use crate::error::PvResult;
use crate::layout::PlacedDot;
use std::io::Write;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ExportFormat {
    Json,
    Csv,
}

pub fn write_dots<W: Write>(dots: &[PlacedDot], format: ExportFormat, mut out: W) -> PvResult<()> {
    match format {
        ExportFormat::Json => {
            serde_json::to_writer_pretty(&mut out, dots)?;
            writeln!(out)?;
            out.flush()?;
        }
        ExportFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(out);
            for dot in dots {
                wtr.serialize(dot)?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_format_names_the_tail_field() {
        let dot = PlacedDot {
            guesser: 3,
            outcome: 8,
            stack: 1,
            x: 2.85,
            y: -2.79,
            in_tail: true,
        };
        for format in ExportFormat::iter() {
            let mut buf = Vec::new();
            write_dots(&[dot], format, &mut buf).unwrap();
            let text = String::from_utf8(buf).unwrap();
            assert!(text.contains("in_tail"), "{} output lacks in_tail", format);
            assert!(text.contains("true"), "{} output lacks tail flag", format);
        }
    }

    #[test]
    fn csv_has_header_and_one_row_per_dot() {
        let dots = vec![
            PlacedDot {
                guesser: 0,
                outcome: 5,
                stack: 0,
                x: 0.0,
                y: -3.03,
                in_tail: false,
            },
            PlacedDot {
                guesser: 1,
                outcome: 9,
                stack: 0,
                x: 3.8,
                y: -3.03,
                in_tail: true,
            },
        ];
        let mut buf = Vec::new();
        write_dots(&dots, ExportFormat::Csv, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "guesser,outcome,stack,x,y,in_tail");
        assert_eq!(lines.len(), 3);
        assert!(lines[2].ends_with("true"));
    }
}
