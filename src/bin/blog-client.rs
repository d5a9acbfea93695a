use blog_service::client::{
    api::{ApiClient, Session},
    ui::main_menu,
};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let api = ApiClient::from_env()?;
    let mut session = Session::default();

    println!("Blog Client Started");
    println!("Make sure the server is running on {}", api.base_url());
    main_menu(&api, &mut session)?;
    Ok(())
}
