use randpick::RandomPicker;
use std::collections::HashMap;

/// A feature rolled out to 25% of requests, with a 5% canary on top. The
/// remaining 70% of draws land in the dead zone and are redrawn, so only the
/// relative 25:5 split shows up among activated requests.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rand::rng();
    let mut flag = RandomPicker::new(&mut rng)
        .value("new-search")
        .with_percentage(25)?
        .and_value("new-search-canary")
        .with_percentage(5)?;

    let mut hist: HashMap<&str, u64> = HashMap::default();
    for v in flag.pick(200_000)? {
        *hist.entry(v).or_default() += 1;
    }

    let mut values: Vec<(&str, u64)> = hist.into_iter().collect();
    values.sort_by(|(_, ca), (_, cb)| cb.cmp(ca));

    for (name, count) in values {
        println!("{count: >7} {name}");
    }

    Ok(())
}
