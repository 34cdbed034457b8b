// This main function is the entry point when running `cargo run -p web-server`.
// It loads settings from `finlens.toml` and the environment, then serves the API.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = configuration::load_settings(None)?;
    settings.validate()?;
    let _guard = configuration::init_tracing(&settings.logging)?;

    web_server::run_server(settings).await
}
