use vault_app::{
    config::{AppConfig, commands::Command},
    context::AppContext,
};

mod catalog;
mod checkout;
mod related;
mod sign_in;

pub(crate) async fn run(config: AppConfig) -> Result<(), String> {
    let store = AppContext::from_config(&config.store)
        .map_err(|error| format!("failed to start: {error}"))?
        .into_store();

    match config.command {
        Command::Catalog(args) => catalog::run(store, args),
        Command::Checkout(args) => checkout::run(store, args),
        Command::Related(args) => related::run(&store, args),
        Command::SignIn(args) => sign_in::run(store, args).await,
    }
}
