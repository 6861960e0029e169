use super::ScanOutput;
use anyhow::Result;

pub fn print_json(output: &ScanOutput) -> Result<()> {
    let json = serde_json::to_string_pretty(output)?;
    println!("{}", json);
    Ok(())
}
