//! Request a CSV export of the last 30 days and wait for its download link,
//! using the blocking client.
//!
//! ```sh
//! T212_API_KEY=... T212_API_SECRET=... cargo run --example history_export
//! ```

use std::thread;
use std::time::Duration;

use chrono::Utc;
use tracing_subscriber::EnvFilter;
use trading212_rs::blocking::Trading212Client;
use trading212_rs::models::{PublicReportRequest, ReportDataIncluded};
use trading212_rs::{ApiErrorKind, Credentials, Environment, Error};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let client = Trading212Client::new(
        Credentials::new(
            std::env::var("T212_API_KEY")?,
            std::env::var("T212_API_SECRET")?,
        ),
        Environment::Demo,
    )?;

    let now = Utc::now();
    let request = PublicReportRequest {
        data_included: Some(ReportDataIncluded::all()),
        time_from: Some(now - chrono::Duration::days(30)),
        time_to: Some(now),
    };
    let queued = client.history().request_report(&request)?;
    let report_id = queued.data.report_id.ok_or("server returned no report id")?;
    println!("Queued report {report_id}");

    for _ in 0..20 {
        thread::sleep(Duration::from_secs(15));

        let reports = match client.history().reports() {
            Ok(reports) => reports,
            // The exports listing is limited to one call per minute
            Err(Error::Api {
                kind: ApiErrorKind::RateLimit,
                ..
            }) => continue,
            Err(e) => return Err(e.into()),
        };

        let Some(report) = reports.data.iter().find(|r| r.report_id == Some(report_id)) else {
            continue;
        };
        println!("Report {report_id}: {:?}", report.status);

        if report.status.is_some_and(|s| s.is_done()) {
            match &report.download_link {
                Some(link) => println!("Download: {link}"),
                None => println!("Report finished without a download link"),
            }
            return Ok(());
        }
    }

    Err("report not ready in time".into())
}
