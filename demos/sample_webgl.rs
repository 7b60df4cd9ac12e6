//! Pick a WebGL fingerprint for an OS and print it.
//!
//! ```text
//! GLPRINT_CORPUS_PATH=webgl_data.db cargo run --example sample_webgl -- win
//! GLPRINT_CORPUS_PATH=webgl_data.db cargo run --example sample_webgl -- mac "Apple" "Apple M1"
//! ```

use glprint::corpus::CorpusHandle;
use glprint::launch::LaunchOptions;
use glprint::Os;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let os: Os = args.next().unwrap_or_else(|| "win".to_string()).parse()?;

    let handle = CorpusHandle::from_env();
    let selector = handle.selector()?;

    let mut builder = LaunchOptions::builder(os);
    if let (Some(vendor), Some(renderer)) = (args.next(), args.next()) {
        builder = builder.webgl(vendor, renderer);
    }

    let launch = builder.build().build_config(&selector, &mut handle.rng())?;
    println!("{}", serde_json::to_string_pretty(&launch.config)?);

    handle.close();
    Ok(())
}
