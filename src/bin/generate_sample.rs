//! Writes `sample_rentals.csv`: synthetic listings in the source column layout.

use anyhow::{Context, Result};
use serde::Serialize;

/// Deterministic splitmix64 stream; the sample file is identical on every run.
struct ListingRng(u64);

impl ListingRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    fn chance(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Zero-mean normal noise (Box-Muller).
    fn jitter(&mut self, std_dev: f64) -> f64 {
        let u1 = self.chance().max(1e-15);
        let u2 = self.chance();
        std_dev * (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// One output row. The leading unnamed column mimics a dataframe index.
#[derive(Serialize)]
struct SampleRow {
    #[serde(rename = "")]
    index: usize,
    average_rate_per_night: Option<String>,
    bedrooms_count: String,
    city: String,
    date_of_listing: String,
    description: Option<String>,
    latitude: f64,
    longitude: f64,
    title: String,
    url: String,
}

fn main() -> Result<()> {
    let mut rng = ListingRng(42);

    // (city, latitude, longitude, base nightly rate)
    let cities = [
        ("Austin", 30.2672, -97.7431, 160.0),
        ("Houston", 29.7604, -95.3698, 120.0),
        ("Dallas", 32.7767, -96.7970, 130.0),
        ("San Antonio", 29.4241, -98.4936, 110.0),
        ("Corpus Christi", 27.8006, -97.3964, 140.0),
    ];
    let bedrooms = ["Studio", "1", "2", "3", "4"];
    let months = [
        "January", "February", "March", "April", "May", "June", "July", "August",
        "September", "October", "November", "December",
    ];
    let listings_per_city = 40;

    let output_path = "sample_rentals.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    let mut index = 0;
    for &(city, lat, lon, base_rate) in &cities {
        for _ in 0..listings_per_city {
            let bedroom = *rng.pick(&bedrooms);
            let size = if bedroom == "Studio" {
                0.6
            } else {
                bedroom.parse::<f64>().unwrap_or(1.0)
            };
            let rate = (base_rate * size + rng.jitter(25.0)).max(20.0).round();

            // roughly one listing in twenty has no published rate
            let average_rate_per_night = (rng.chance() > 0.05).then(|| format!("${rate}"));
            let description = (rng.chance() > 0.1)
                .then(|| format!("{bedroom} bedroom place close to downtown {city}."));

            writer
                .serialize(SampleRow {
                    index,
                    average_rate_per_night,
                    bedrooms_count: bedroom.to_string(),
                    city: city.to_string(),
                    date_of_listing: format!(
                        "{} {}",
                        rng.pick(&months),
                        2009 + rng.next_u64() % 9
                    ),
                    description,
                    latitude: lat + rng.jitter(0.05),
                    longitude: lon + rng.jitter(0.05),
                    title: format!("{city} {bedroom} #{index}"),
                    url: format!("https://www.airbnb.com/rooms/{}", 1_000_000 + index),
                })
                .context("writing sample row")?;
            index += 1;
        }
    }
    writer.flush().context("flushing sample file")?;

    println!(
        "Wrote {index} listings across {} cities to {output_path}",
        cities.len()
    );
    Ok(())
}
