use anyhow::Result;
use dnasim_sim::provider::{regulatory_cassette, RegulatoryElement};

use crate::printing::print_elements;

pub fn show_reference(name: Option<&str>) -> Result<()> {
    match name {
        None => print_elements(),
        Some(name) if name.eq_ignore_ascii_case("cassette") => {
            println!("{}", regulatory_cassette());
        }
        Some(name) => {
            let element: RegulatoryElement = name.parse()?;
            println!("{}", element.sequence());
        }
    }
    Ok(())
}
