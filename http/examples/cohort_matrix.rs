//! Run a cohort traversal against a live server.
//!
//! Requires a Grove-compatible graph server:
//!   GROVE_HOST=http://localhost:8000 cargo run --example cohort_matrix

use grove_http::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let host = std::env::var("GROVE_HOST").unwrap_or_else(|_| "http://localhost:8000".into());
    let client = match Client::connect(&host) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Bad endpoint {host}: {e}");
            return;
        }
    };

    let query = client
        .query()
        .has("gid", "cohort:CCLE")
        .outgoing("hasSample")
        .mark("sample")
        .incoming("expressionForSample")
        .mark("expression")
        .select(["sample", "expression"])
        .limit(10);

    match client.execute(&query) {
        Ok(records) => {
            println!("{} records", records.len());
            for record in records {
                println!("  {record}");
            }
        }
        Err(e) => eprintln!("Query failed: {e}"),
    }
}
