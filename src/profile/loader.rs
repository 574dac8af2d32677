//! Load a client profile from a spreadsheet export (CSV)

use super::ClientProfile;
use crate::error::{PlanningError, PlanningResult};
use csv::Reader;
use log::{info, warn};
use std::path::Path;

/// Default location of the sample client sheet
pub const DEFAULT_PROFILE_PATH: &str = "data/sample_client.csv";

/// Raw CSV row matching the client sheet columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Age")]
    age: u32,
    #[serde(rename = "Income")]
    income: f64,
    #[serde(rename = "Expenses")]
    expenses: f64,
    #[serde(rename = "Debt", default)]
    debt: f64,
    #[serde(rename = "GoalAmount")]
    goal_amount: f64,
    #[serde(rename = "GoalCurrent", default)]
    goal_current: f64,
}

impl From<CsvRow> for ClientProfile {
    fn from(row: CsvRow) -> Self {
        ClientProfile::new(
            row.name.trim(),
            row.age,
            row.income,
            row.expenses,
            row.debt,
            row.goal_amount,
            row.goal_current,
        )
    }
}

/// Load the client profile from a CSV file
///
/// Only the first data row is used; the planner works on one client at a time.
pub fn load_profile<P: AsRef<Path>>(path: P) -> PlanningResult<ClientProfile> {
    let path = path.as_ref();
    let reader = Reader::from_path(path)?;
    let profile = first_profile(reader, &path.display().to_string())?;
    info!("Loaded profile for {} from {}", profile.name, path.display());
    Ok(profile)
}

/// Load the client profile from any reader (e.g. an uploaded file buffer)
pub fn load_profile_from_reader<R: std::io::Read>(reader: R) -> PlanningResult<ClientProfile> {
    first_profile(Reader::from_reader(reader), "input")
}

fn first_profile<R: std::io::Read>(
    mut reader: Reader<R>,
    source: &str,
) -> PlanningResult<ClientProfile> {
    let row: CsvRow = match reader.deserialize().next() {
        Some(result) => result?,
        None => return Err(PlanningError::EmptyInput(source.to_string())),
    };

    let profile = ClientProfile::from(row);
    if let Err(e) = profile.validate() {
        warn!("Rejected client record from {}: {}", source, e);
        return Err(e);
    }

    Ok(profile)
}
