use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::rating::TeamStanding;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

/// One line of the final ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingRow {
    pub rank: usize,
    pub name: String,
    pub slug: String,
    pub rating: f64,
    pub matches_played: u32,
}

pub fn ranking_rows(standings: &[TeamStanding]) -> Vec<RankingRow> {
    standings
        .iter()
        .enumerate()
        .map(|(idx, s)| RankingRow {
            rank: idx + 1,
            name: s.name.clone(),
            slug: s.slug.clone(),
            rating: s.rating,
            matches_played: s.matches_played,
        })
        .collect()
}

/// Write standings to `path`, or stdout when no path is given
pub fn write_standings(
    standings: &[TeamStanding],
    format: OutputFormat,
    path: Option<&Path>,
) -> Result<()> {
    let rows = ranking_rows(standings);

    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            render(&rows, format, file, false)
        }
        None => render(&rows, format, io::stdout().lock(), true),
    }
}

fn render<W: Write>(rows: &[RankingRow], format: OutputFormat, out: W, color: bool) -> Result<()> {
    match format {
        OutputFormat::Table => write_table(rows, out, color),
        OutputFormat::Csv => write_csv(rows, out),
        OutputFormat::Json => write_json(rows, out),
    }
}

fn write_table<W: Write>(rows: &[RankingRow], mut out: W, color: bool) -> Result<()> {
    let name_width = rows
        .iter()
        .map(|r| r.name.chars().count())
        .chain(std::iter::once("Team".len()))
        .max()
        .unwrap_or(0);

    let header = format!(
        "{:>4}  {:<name_width$}  {:>7}  {:>7}",
        "#", "Team", "Rating", "Matches"
    );
    if color {
        writeln!(out, "{}", header.bold())?;
    } else {
        writeln!(out, "{}", header)?;
    }

    for row in rows {
        let line = format!(
            "{:>4}  {:<name_width$}  {:>7.1}  {:>7}",
            row.rank, row.name, row.rating, row.matches_played
        );
        if color && row.rank <= 3 {
            writeln!(out, "{}", line.green())?;
        } else {
            writeln!(out, "{}", line)?;
        }
    }

    Ok(())
}

fn write_csv<W: Write>(rows: &[RankingRow], out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for row in rows {
        writer.serialize(row).context("Failed to write CSV row")?;
    }
    writer.flush()?;
    Ok(())
}

fn write_json<W: Write>(rows: &[RankingRow], mut out: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, rows).context("Failed to write JSON")?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standings() -> Vec<TeamStanding> {
        vec![
            TeamStanding {
                name: "Rigor Mortis".to_string(),
                slug: "rigor-mortis".to_string(),
                rating: 1620.25,
                peak_rating: 1650.0,
                matches_played: 12,
            },
            TeamStanding {
                name: "Falco".to_string(),
                slug: "falco".to_string(),
                rating: 1480.0,
                peak_rating: 1500.0,
                matches_played: 9,
            },
        ]
    }

    fn rendered(format: OutputFormat) -> String {
        let mut buffer = Vec::new();
        render(&ranking_rows(&standings()), format, &mut buffer, false).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_rows_are_ranked_in_order() {
        let rows = ranking_rows(&standings());

        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].slug, "rigor-mortis");
        assert_eq!(rows[1].rank, 2);
    }

    #[test]
    fn test_csv_output() {
        assert_eq!(
            rendered(OutputFormat::Csv),
            "rank,name,slug,rating,matches_played\n\
             1,Rigor Mortis,rigor-mortis,1620.25,12\n\
             2,Falco,falco,1480.0,9\n"
        );
    }

    #[test]
    fn test_json_output() {
        let value: serde_json::Value = serde_json::from_str(&rendered(OutputFormat::Json)).unwrap();

        assert_eq!(value[0]["name"], "Rigor Mortis");
        assert_eq!(value[0]["matches_played"], 12);
        assert_eq!(value[1]["rating"], 1480.0);
    }

    #[test]
    fn test_table_output() {
        let table = rendered(OutputFormat::Table);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Team"));
        assert!(lines[1].contains("Rigor Mortis"));
        assert!(lines[1].contains("1620.2") || lines[1].contains("1620.3"));
        assert!(lines[2].trim_end().ends_with('9'));
    }
}
