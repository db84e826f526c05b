//! Terminal output: live progress and the final summary

use std::io::{self, IsTerminal, Write};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use serde::Serialize;

use crate::error::Result;
use crate::search::{shortest_n, SearchEvent, SearchOutcome};
use crate::types::{AvailabilityVerdict, ReportConfig, SearchPhase, StopReason};

const RULE: &str = "═══════════════════════════════════";

/// Prints search progress and results according to [`ReportConfig`]
pub struct Reporter {
    config: ReportConfig,
    progress: ProgressBar,
    custom_phase_ran: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    outcome: &'a SearchOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    shortest: Option<Vec<String>>,
}

impl Reporter {
    pub fn new(config: ReportConfig) -> Self {
        let progress = ProgressBar::new_spinner();
        if !config.verbose && !config.json && io::stderr().is_terminal() {
            let style = ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg} [{elapsed}]")
                .unwrap_or_else(|_| ProgressStyle::default_spinner());
            progress.set_style(style);
            progress.enable_steady_tick(Duration::from_millis(120));
        } else {
            progress.set_draw_target(ProgressDrawTarget::hidden());
        }

        Self {
            config,
            progress,
            custom_phase_ran: false,
        }
    }

    /// Handle one progress event from the search loop
    pub fn on_event(&mut self, event: &SearchEvent<'_>) {
        match event {
            SearchEvent::PhaseStarted(SearchPhase::Custom) => {
                self.custom_phase_ran = true;
                self.banner("🎯 Checking custom words first...");
            }
            SearchEvent::PhaseStarted(SearchPhase::Dictionary) => {
                if self.custom_phase_ran {
                    self.banner("📖 Finished custom words. Starting dictionary words...");
                } else {
                    self.banner("📖 Starting dictionary words...");
                }
            }
            SearchEvent::Checked {
                domain,
                verdict,
                available,
                target,
                attempts,
                ..
            } => {
                if self.config.verbose {
                    println!("{}", verdict_line(domain, verdict));
                }
                self.progress.set_message(format!(
                    "🔍 {} checked, {}/{} available (last: {})",
                    attempts, available, target, domain
                ));
            }
            SearchEvent::Skipped { domain, .. } => {
                tracing::debug!(domain = %domain, "Already checked, skipping");
            }
            SearchEvent::Finished(reason) => {
                self.progress.finish_and_clear();
                match reason {
                    StopReason::Cancelled => self.banner("⚠️  Interrupted."),
                    _ => self.banner("🏁 Finished."),
                }
            }
        }
    }

    fn banner(&self, text: &str) {
        if self.config.verbose && !self.config.json {
            println!("{}\n{}\n{}", RULE, text, RULE);
        }
    }

    /// Write the final summary to stdout
    pub fn print_summary(&self, outcome: &SearchOutcome) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_summary(&mut out, outcome)?;
        out.flush()?;
        Ok(())
    }

    /// Write the final summary (text or JSON) to any writer
    pub fn write_summary<W: Write>(&self, out: &mut W, outcome: &SearchOutcome) -> Result<()> {
        let shortest = self
            .config
            .shortest
            .map(|n| shortest_n(&outcome.available, n));

        if self.config.json {
            serde_json::to_writer_pretty(&mut *out, &JsonReport { outcome, shortest })?;
            writeln!(out)?;
            return Ok(());
        }

        writeln!(out, "Attempted {} domains...", outcome.attempts)?;
        writeln!(out, "Found {} available domains.", outcome.available.len())?;
        if outcome.unknown > 0 {
            writeln!(
                out,
                "{} checked domains are taken ({} could not be looked up).",
                outcome.taken.len(),
                outcome.unknown
            )?;
        } else {
            writeln!(out, "{} checked domains are taken.", outcome.taken.len())?;
        }
        if outcome.stop_reason == StopReason::Cancelled {
            writeln!(out, "Search interrupted, results are partial.")?;
        }

        writeln!(out)?;
        writeln!(out, "Available domains:")?;
        for domain in &outcome.available {
            writeln!(out, "{}", domain)?;
        }

        if let Some(shortest) = shortest {
            writeln!(out)?;
            writeln!(out, "Shortest domains:")?;
            for domain in &shortest {
                writeln!(out, "{}", domain)?;
            }
        }

        Ok(())
    }
}

fn verdict_line(domain: &str, verdict: &AvailabilityVerdict) -> String {
    match verdict {
        AvailabilityVerdict::Available => format!("✅ Available: {}", domain),
        AvailabilityVerdict::Taken {
            registrar: Some(registrar),
        } => format!("❌ Taken: {} ({})", domain, registrar),
        AvailabilityVerdict::Taken { registrar: None } => format!("❌ Taken: {}", domain),
        AvailabilityVerdict::Unknown { reason } => {
            tracing::debug!(domain = %domain, reason = %reason, "Lookup failed");
            format!("❌ Taken: {} (lookup failed)", domain)
        }
    }
}
