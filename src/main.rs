use magnitude_namer::{MagnitudeError, MagnitudeTable, batch, decode, encode, parse_quantity};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), MagnitudeError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let table = MagnitudeTable::reference();
    if let Some((first, last)) = table.range() {
        println!("Total entries: {} (10^{} to 10^{})", table.len(), first, last);
    }

    if let Some(row) = table.highlighted() {
        println!("Current level: {}", row);
    }

    for exponent in [3, 33, 36, 132, 303, 306, 384] {
        println!("{}", encode(exponent)?);
    }

    for record in batch(300, 6) {
        println!("{:>8}  {:<6} {}", record.scientific, record.suffix, record.full_name);
    }

    let quantity = parse_quantity("1.5dQDR")?;
    println!("{} = {} x 10^{}", quantity, quantity.mantissa, quantity.exponent);
    println!("aa -> 10^{}", decode("aa")?);

    Ok(())
}
