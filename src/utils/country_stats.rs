use crate::utils::geolocation::UNKNOWN;
use std::collections::HashMap;

/// Tally visits per country, dropping events whose country could not be
/// resolved. The "Unknown" sentinel never appears as a key.
pub fn count_countries<I>(countries: I) -> HashMap<String, i64>
where
    I: IntoIterator<Item = Option<String>>,
{
    let mut counts = HashMap::new();
    for country in countries.into_iter().flatten() {
        if country == UNKNOWN {
            continue;
        }
        *counts.entry(country).or_insert(0) += 1;
    }
    counts
}
