use std::io;
use std::sync::Arc;

use waitlist::{
    application::submit_signup::use_case::FormController,
    config::Config,
    infrastructure::sinks::TracingSink,
    presentation::terminal::TerminalForm,
};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Uses RUST_LOG if set, otherwise sensible defaults. Logs go to stderr so
    // they do not interleave with the prompts on stdout.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info,waitlist=debug"))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env()?;
    let sink = Arc::new(TracingSink::new(config.log_json_payload));
    let controller = FormController::new(sink);

    let stdin = io::stdin();
    let mut form = TerminalForm::new(
        stdin.lock(),
        io::stdout(),
        controller,
        config.terminal_options(),
    );
    let accepted = form.run()?;
    tracing::info!(accepted, "Waitlist form closed");
    Ok(())
}
