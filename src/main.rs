use anyhow::Result;
use langstring::{Controller, Converter};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("langstring=info".parse()?),
        )
        .init();

    let flags = Controller::init_from_env()?;
    info!("Loaded flags from environment");
    print!("{}", flags.print_flags(None));

    let inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        info!("No inputs given, expected arguments like 'Hello@en'");
        return Ok(());
    }

    let mls = Converter::from_strings_to_multilangstring("parse", &inputs, "", "@")?;
    info!(
        "Parsed {} entries in {} languages",
        mls.count_entries_total(),
        mls.count_langs_total()
    );
    println!("{}", mls);
    Ok(())
}
