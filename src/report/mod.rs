//! Client-facing report built from one projection
//!
//! Renders the same figures as text lines (for the console or a document
//! generator) or as a JSON summary.

pub mod format;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::PlanningResult;
use crate::projection::DerivedMetrics;
use format::{format_percent, format_whole, CURRENCY};

/// A finished plan: derived figures plus the advice drawn from them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanReport {
    pub prepared_on: NaiveDate,
    pub metrics: DerivedMetrics,
    pub recommendations: Vec<String>,
}

impl PlanReport {
    /// Build a report dated today
    pub fn new(metrics: DerivedMetrics, recommendations: Vec<String>) -> Self {
        Self::dated(Local::now().date_naive(), metrics, recommendations)
    }

    /// Build a report with an explicit preparation date
    pub fn dated(prepared_on: NaiveDate, metrics: DerivedMetrics, recommendations: Vec<String>) -> Self {
        Self {
            prepared_on,
            metrics,
            recommendations,
        }
    }

    /// Report body, one entry per printed line
    pub fn lines(&self) -> Vec<String> {
        let m = &self.metrics;
        let p = &m.profile;

        let mut lines = vec![
            format!("Financial Report: {}", p.name),
            format!(
                "Age: {} | Income: {} {} | Expenses: {} {}",
                p.age,
                CURRENCY,
                format_whole(p.income),
                CURRENCY,
                format_whole(p.expenses)
            ),
            format!(
                "Savings Rate: {} | Debt: {} {}",
                format_percent(m.savings_rate),
                CURRENCY,
                format_whole(p.debt)
            ),
            format!(
                "Retirement Corpus Needed: {} {}",
                CURRENCY,
                format_whole(m.retirement_corpus_required)
            ),
            format!(
                "Corpus Gap: {} {} | SIP Needed: {} {}/mo",
                CURRENCY,
                format_whole(m.retirement_corpus_gap),
                CURRENCY,
                format_whole(m.sip_needed)
            ),
            format!("Goal Funded: {}", format_percent(m.goal_funded)),
            String::new(),
            "Recommendations:".to_string(),
        ];

        lines.extend(self.recommendations.iter().map(|r| format!("- {}", r)));
        lines
    }

    /// Report body as newline-terminated text
    pub fn to_text(&self) -> String {
        let mut text = self.lines().join("\n");
        text.push('\n');
        text
    }

    /// Full plan, including the preparation date, as pretty-printed JSON
    pub fn to_json(&self) -> PlanningResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
