// src/performance_test.rs
// Measures parse/format throughput of the animal search codec on random query strings.
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Instant;

use search_params::domain::filters::animal;
use search_params::infra::config;
use search_params::SearchParams;

const KEYS: &[&str] = &["q", "sp", "st", "g", "sterilized", "pds", "pde", "sort", "page", "utm_source"];
const VALUES: &[&str] = &[
    "dog", "cat", "bird", "open", "adopted", "f", "m", "true", "false", "name", "pick-up",
    "2024-03-01", "2024-02-30", "3", "-1", "rex", "", "DOG",
];

fn random_query(rng: &mut impl Rng) -> SearchParams {
    let pairs = rng.gen_range(0..12);
    let mut params = SearchParams::new();
    for _ in 0..pairs {
        let key = KEYS.choose(rng).copied().unwrap_or("q");
        let value = VALUES.choose(rng).copied().unwrap_or("");
        params.append(key, value);
    }
    params
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let iterations = config::perf_iterations()?;
    let codec = animal::codec()?;
    println!(
        "--- Search params performance test: {} parse/format cycles ---",
        iterations
    );

    let mut rng = rand::thread_rng();
    let inputs: Vec<SearchParams> = (0..iterations).map(|_| random_query(&mut rng)).collect();

    // --- Time the main loop: parse then format ---
    let start_time = Instant::now();
    let mut written_keys = 0usize;
    for params in &inputs {
        let value = codec.parse(params);
        written_keys += codec.format(&value).len();
    }
    let duration = start_time.elapsed();

    // Canonical output must be a fixed point.
    let mut unstable = 0usize;
    for params in &inputs {
        let once = codec.normalize(params);
        if codec.normalize(&once) != once {
            unstable += 1;
        }
    }

    let avg_time_per_item = duration.as_micros() as f64 / iterations as f64;
    println!("\n--- Results ---");
    println!("Total time: {} ms", duration.as_millis());
    println!("Average time per cycle: {:.2} µs", avg_time_per_item);
    println!("Keys written: {}", written_keys);
    println!("Non-idempotent normalizations: {}", unstable);

    if unstable > 0 {
        return Err(anyhow::anyhow!("{} inputs did not normalize to a fixed point", unstable));
    }
    Ok(())
}
