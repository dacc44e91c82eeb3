//! `boletin universe`

use anyhow::Result;
use boletin::filter::{CompanyDirectory, Universe};
use serde_json::json;

use super::print_header;
use crate::Format;

pub(crate) fn run(name: &str, format: Format) -> Result<()> {
    let universe: Universe = name.parse()?;
    let directory = CompanyDirectory::sp100();
    let rows: Vec<(String, &str)> = universe
        .tickers()
        .into_iter()
        .map(|ticker| {
            let company = directory.company_name(&ticker).unwrap_or("-");
            (ticker, company)
        })
        .collect();

    match format {
        Format::Json => {
            let entries: Vec<_> = rows
                .iter()
                .map(|(ticker, company)| json!({ "ticker": ticker, "company": company }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        Format::Text => {
            print_header(&format!("Universe {} ({} tickers)", universe.as_str(), universe.size()));
            for (ticker, company) in &rows {
                println!("  {ticker:<8} {company}");
            }
            println!();
        }
    }
    Ok(())
}
