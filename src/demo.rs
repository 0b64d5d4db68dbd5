//! The setup-and-demo walkthrough.
//!
//! Each step runs only after the previous one returned. A failing step is
//! logged and the walkthrough moves on; only a failed open stops it, since
//! there is no connection to use afterwards.

use tracing::{error, info};

use crate::animal::{sample_animals, Animal};
use crate::error::StoreError;
use crate::sqlite::{AnimalStore, StoreConfig};

/// Life expectancy threshold of the filtered query, in years.
pub const LONG_LIVED_THRESHOLD: i64 = 50;
/// Name of the record that gets updated and then deleted.
pub const TARGET_NAME: &str = "Dog";

/// What each step of a run produced. `None` means the step failed or never ran.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DemoReport {
    pub opened: bool,
    pub schema_ready: bool,
    /// One entry per sample record, `None` where that insert failed.
    pub inserted_ids: Vec<Option<i64>>,
    pub all: Option<Vec<Animal>>,
    pub long_lived: Option<Vec<Animal>>,
    pub updated: Option<usize>,
    pub deleted: Option<usize>,
    pub closed: bool,
}

/// Run the walkthrough against the configured database file.
pub fn run(config: StoreConfig) -> DemoReport {
    let mut report = DemoReport::default();

    let store = match AnimalStore::open(config) {
        Ok(store) => store,
        Err(e) => {
            log_failure(&e);
            return report;
        }
    };
    report.opened = true;
    info!(path = %store.path().display(), "connected to the database");

    match store.ensure_schema() {
        Ok(()) => {
            report.schema_ready = true;
            info!("animals table is ready");
        }
        Err(e) => log_failure(&e),
    }

    for animal in sample_animals() {
        match store.insert(&animal) {
            Ok(id) => {
                info!(id, name = %animal.name, "inserted animal");
                report.inserted_ids.push(Some(id));
            }
            Err(e) => {
                log_failure(&e);
                report.inserted_ids.push(None);
            }
        }
    }

    report.all = ok_or_log(store.all());
    if let Some(animals) = &report.all {
        info!(count = animals.len(), ?animals, "all animals");
    }

    report.long_lived = ok_or_log(store.living_longer_than(LONG_LIVED_THRESHOLD));
    if let Some(animals) = &report.long_lived {
        info!(
            threshold = LONG_LIVED_THRESHOLD,
            count = animals.len(),
            ?animals,
            "animals living longer than threshold"
        );
    }

    report.updated = ok_or_log(store.set_in_danger(TARGET_NAME, true));
    if let Some(rows) = report.updated {
        info!(name = TARGET_NAME, rows, "marked animal as in danger");
    }

    report.deleted = ok_or_log(store.delete_by_name(TARGET_NAME));
    if let Some(rows) = report.deleted {
        info!(name = TARGET_NAME, rows, "deleted animal");
    }

    match store.close() {
        Ok(()) => {
            report.closed = true;
            info!("database connection closed");
        }
        Err(e) => log_failure(&e),
    }

    report
}

fn ok_or_log<T>(result: Result<T, StoreError>) -> Option<T> {
    result.map_err(|e| log_failure(&e)).ok()
}

fn log_failure(e: &StoreError) {
    error!(step = e.step(), error = %e, "step failed");
}
