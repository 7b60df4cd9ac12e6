//! List valid vendor/renderer pairs per OS, most popular first.

use glprint::corpus::CorpusHandle;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let handle = CorpusHandle::from_env();
    let selector = handle.selector()?;

    for (os, pairs) in selector.list_pairs() {
        println!("{} ({} pairs)", os, pairs.len());
        for pair in pairs {
            println!("  {pair}");
        }
    }

    Ok(())
}
