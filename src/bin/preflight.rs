use search_params::infra::config;
use search_params::CodecRegistry;
use search_params::SearchParams;

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight -- [--strict]\n\
         \n\
         Checks every builtin search-params definition and the environment.\n\
         Optional env vars:\n\
           BIND_ADDR, RUST_LOG, CORS_ALLOW_ANY, PERF_ITERATIONS\n\
         \n\
         --strict  also fail when a codec writes anything for an empty query\n"
    );
    std::process::exit(2);
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }
    let strict = args.iter().any(|a| a == "--strict");

    // Force-read config (nice error messages if malformed)
    let bind_addr = config::bind_addr();
    let cors = config::cors_allow_any()?;
    let perf_iterations = config::perf_iterations()?;

    println!("> Preflight:");
    println!("  BIND_ADDR={}", bind_addr);
    println!("  RUST_LOG={}", config::log_filter());
    println!("  CORS_ALLOW_ANY={}", cors);
    println!("  PERF_ITERATIONS={}", perf_iterations);

    // Building the registry validates every definition (unique, URL-safe keys).
    let registry = CodecRegistry::with_builtin()?;
    println!("  Codecs: {}", registry.list_codecs().join(", "));

    let empty = SearchParams::new();
    for name in registry.list_codecs() {
        let Some(codec) = registry.get(&name) else {
            continue;
        };
        let fields = codec.describe();
        println!("  {} ({} fields):", name, fields.len());
        for field in &fields {
            let default = if field.shape.default.is_empty() {
                "-".to_string()
            } else {
                field.shape.default.join(",")
            };
            println!(
                "    {:<20} key={:<12} kind={:<8} multi={:<5} default={}",
                field.name,
                field.key,
                field.shape.kind.as_str(),
                field.shape.multi,
                default
            );
        }

        // An empty query must format back to nothing (defaults are never written).
        let normalized = codec.normalize(&empty);
        if !normalized.is_empty() {
            let msg = format!(
                "codec '{}' writes '{}' for an all-default value",
                name,
                normalized.to_query()
            );
            if strict {
                return Err(anyhow::anyhow!(msg));
            }
            eprintln!("  Warning: {}", msg);
        }
    }

    println!("> Preflight OK.");
    Ok(())
}
