//! Synthetic customer CSV with deliberate defects.
//!
//! The file has no header and five columns: first name, last name, order date
//! (`MM/DD/YYYY`), order count and city. Name pools contain an empty string so
//! some rows carry blank names. After the base rows, the first
//! [`DUPLICATE_COUNT`] rows are repeated and [`malformed_record`] is appended.
//! Rows end in `\r\n`.

use crate::Result;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tracing::info;

pub const DEFAULT_OUTPUT: &str = "nifi_data/clientes.csv";
pub const DEFAULT_RECORDS: usize = 50;
pub const DUPLICATE_COUNT: usize = 3;

pub const FIRST_NAMES: [&str; 7] = ["Juan", "Maria", "Pedro", "Lucia", "Antonio", "Carmen", ""];
pub const LAST_NAMES: [&str; 6] = ["Garcia", "Lopez", "Martinez", "Sanchez", "Rodriguez", ""];
pub const CITIES: [&str; 6] = ["Almeria", "Granada", "Sevilla", "Madrid", "Barcelona", "Valencia"];

const MAX_ORDERS: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub first_name: String,
    pub last_name: String,
    pub order_date: String,
    pub orders: u32,
    pub city: String,
}

/// The fixed row with an impossible date.
pub fn malformed_record() -> CustomerRecord {
    CustomerRecord {
        first_name: "Error".to_string(),
        last_name: "User".to_string(),
        order_date: "99/99/2022".to_string(),
        orders: 5,
        city: "Madrid".to_string(),
    }
}

pub fn random_record<R: Rng>(rng: &mut R) -> CustomerRecord {
    CustomerRecord {
        first_name: pick(rng, &FIRST_NAMES),
        last_name: pick(rng, &LAST_NAMES),
        order_date: random_date(rng),
        orders: rng.gen_range(0..=MAX_ORDERS),
        city: pick(rng, &CITIES),
    }
}

/// `MM/DD/YYYY` between 2020 and 2023. Days stop at 28 so every month is valid.
pub fn random_date<R: Rng>(rng: &mut R) -> String {
    let month = rng.gen_range(1..=12);
    let day = rng.gen_range(1..=28);
    let year = rng.gen_range(2020..=2023);
    format!("{month:02}/{day:02}/{year}")
}

/// `num_records` random rows, then the duplicates, then the malformed row.
pub fn generate_dataset<R: Rng>(rng: &mut R, num_records: usize) -> Vec<CustomerRecord> {
    let mut records: Vec<CustomerRecord> = (0..num_records).map(|_| random_record(rng)).collect();

    let duplicates = records[..num_records.min(DUPLICATE_COUNT)].to_vec();
    records.extend(duplicates);
    records.push(malformed_record());
    records
}

pub fn write_csv<W: Write>(writer: W, records: &[CustomerRecord]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes `records` to `path`, creating missing parent directories.
pub fn write_file<P: AsRef<Path>>(path: P, records: &[CustomerRecord]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    write_csv(File::create(path)?, records)?;
    info!(
        path = %path.display(),
        rows = records.len(),
        "Generated {} with {} records (including duplicates and errors)",
        path.display(),
        records.len()
    );
    Ok(())
}

fn pick<R: Rng>(rng: &mut R, pool: &[&str]) -> String {
    pool.choose(rng).copied().unwrap_or_default().to_string()
}
