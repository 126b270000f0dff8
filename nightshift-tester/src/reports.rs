//! Report rendering for batch simulation results.

use colored::Colorize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;

use crate::simulation::ShiftRecord;

/// Aggregate over one (difficulty, policy) batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub difficulty: String,
    pub policy: String,
    pub runs: usize,
    pub survived: usize,
    pub attacked: usize,
    pub captured: usize,
    pub survival_rate: f64,
    pub mean_hours_survived: f64,
}

#[must_use]
pub fn summarize(records: &[ShiftRecord]) -> Vec<BatchSummary> {
    let mut groups: BTreeMap<(String, String), Vec<&ShiftRecord>> = BTreeMap::new();
    for record in records {
        groups
            .entry((record.difficulty.clone(), record.policy.clone()))
            .or_default()
            .push(record);
    }
    groups
        .into_iter()
        .map(|((difficulty, policy), batch)| {
            let runs = batch.len();
            let survived = batch.iter().filter(|r| r.survived).count();
            let attacked = batch.iter().filter(|r| r.outcome == "attacked").count();
            let captured = batch.iter().filter(|r| r.outcome == "captured").count();
            let hours: u32 = batch.iter().map(|r| u32::from(r.hours_survived)).sum();
            BatchSummary {
                difficulty,
                policy,
                runs,
                survived,
                attacked,
                captured,
                survival_rate: ratio(survived, runs),
                mean_hours_survived: f64::from(hours) / nightshift_game::numbers::usize_to_f64(runs.max(1)),
            }
        })
        .collect()
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    nightshift_game::numbers::usize_to_f64(part) / nightshift_game::numbers::usize_to_f64(whole)
}

pub fn print_console_report(summaries: &[BatchSummary], total_duration: Duration) {
    println!();
    println!("{}", "📊 Nightshift Batch Results".bright_cyan().bold());
    println!("{}", "===========================".cyan());
    let total_runs: usize = summaries.iter().map(|s| s.runs).sum();
    println!("Total shifts: {total_runs}");
    println!("Total time: {total_duration:?}");
    println!();

    for summary in summaries {
        let rate = summary.survival_rate * 100.0;
        let rate_label = format!("{rate:.1}%");
        let colored_rate = if summary.survival_rate >= 0.5 {
            rate_label.green()
        } else if summary.survival_rate > 0.0 {
            rate_label.yellow()
        } else {
            rate_label.red()
        };
        println!(
            "{} / {}",
            summary.difficulty.bold(),
            summary.policy.bold()
        );
        println!(
            "   survived {} of {} ({colored_rate}) | attacked {} | captured {} | mean hours {:.2}",
            summary.survived, summary.runs, summary.attacked, summary.captured,
            summary.mean_hours_survived
        );
        println!();
    }
}

/// Serialize summaries and raw records as one JSON document.
///
/// # Errors
///
/// Returns an error when serialization fails.
pub fn json_report(
    summaries: &[BatchSummary],
    records: &[ShiftRecord],
) -> anyhow::Result<String> {
    #[derive(Serialize)]
    struct Document<'a> {
        summaries: &'a [BatchSummary],
        records: &'a [ShiftRecord],
    }
    Ok(serde_json::to_string_pretty(&Document { summaries, records })?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(difficulty: &str, outcome: &str, hours: u8) -> ShiftRecord {
        ShiftRecord {
            difficulty: difficulty.to_string(),
            policy: "idle".to_string(),
            seed: 0,
            outcome: outcome.to_string(),
            survived: outcome == "survived",
            hours_survived: hours,
            final_energy: 50.0,
            ended_at_ms: 90_000,
            taunts: 0,
            attacks_repelled: 0,
        }
    }

    #[test]
    fn summaries_group_by_difficulty_and_policy() {
        let records = vec![
            record("medium", "survived", 6),
            record("medium", "attacked", 3),
            record("hard", "captured", 2),
        ];
        let summaries = summarize(&records);
        assert_eq!(summaries.len(), 2);
        let medium = summaries
            .iter()
            .find(|s| s.difficulty == "medium")
            .expect("medium batch present");
        assert_eq!(medium.runs, 2);
        assert_eq!(medium.survived, 1);
        assert_eq!(medium.attacked, 1);
        assert!((medium.survival_rate - 0.5).abs() < f64::EPSILON);
        assert!((medium.mean_hours_survived - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn json_report_contains_both_sections() {
        let records = vec![record("easy", "survived", 6)];
        let summaries = summarize(&records);
        let json = json_report(&summaries, &records).expect("serializes");
        assert!(json.contains("\"summaries\""));
        assert!(json.contains("\"records\""));
        assert!(json.contains("\"survival_rate\""));
    }
}
