//! Command-line normalizer for search-params query strings.
//!
//! Prints the typed value and the canonical query string a list page would
//! redirect to, which is handy when checking links from old bookmarks or e-mails.

use search_params::infra::{config, logging};
use search_params::{CodecRegistry, SearchParams};

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: search-params <codec> [query]\n\
         \x20      search-params --list\n\
         \n\
         Example:\n\
           search-params animals 'sp=dog&sp=cat&page=0&sort=pick-up'\n"
    );
    std::process::exit(2);
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init_tracing(&config::log_filter());

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    let registry = CodecRegistry::with_builtin()?;
    if args[0] == "--list" {
        for name in registry.list_codecs() {
            println!("{}", name);
        }
        return Ok(());
    }

    let codec = registry.get(&args[0]).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown codec '{}' (known: {})",
            args[0],
            registry.list_codecs().join(", ")
        )
    })?;

    let params = SearchParams::from_query(args.get(1).map(String::as_str).unwrap_or(""));
    let value = codec.parse_json(&params)?;
    let canonical = codec.normalize(&params);

    println!("{}", serde_json::to_string_pretty(&value)?);
    if canonical.is_empty() {
        println!("?");
    } else {
        println!("?{}", canonical.to_query());
    }
    Ok(())
}
