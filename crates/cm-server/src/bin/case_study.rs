//! Case Study Runner
//!
//! Prints the full valuation report for the reference scenario, or for a
//! scenario read from the JSON file given as the first argument.

use anyhow::Context;

use cm_server::{config, ServerConfig};
use cm_valuation::CaseStudy;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env();
    config::init_tracing(&config.log_filter);

    let study = match std::env::args().nth(1) {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("reading scenario file {}", path))?;
            serde_json::from_str::<CaseStudy>(&raw)
                .with_context(|| format!("parsing scenario file {}", path))?
        }
        None => CaseStudy::reference(),
    };

    let outcome = study.run().context("evaluating case study")?;
    println!("{}", outcome.render());

    Ok(())
}
