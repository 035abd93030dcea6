use vault_app::{auth::Credentials, config::commands::SignInArgs, store::Store};

pub(crate) async fn run(mut store: Store, args: SignInArgs) -> Result<(), String> {
    let principal = store
        .sign_in(Credentials::new(args.identifier, args.code))
        .await
        .map_err(|error| error.to_string())?;

    println!("signed in as {}", principal.identifier);

    Ok(())
}
