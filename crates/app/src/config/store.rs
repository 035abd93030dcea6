//! Store Config

use std::path::PathBuf;

use clap::Args;
use vault::checkout::DEFAULT_RECIPIENT;

use crate::auth::DEFAULT_ACCESS_CODE;

/// Catalog, hand-off and sign-in settings.
#[derive(Debug, Clone, Args)]
pub struct StoreConfig {
    /// YAML catalog seed; the built-in seed is used when omitted
    #[arg(long, env = "VAULT_CATALOG", global = true)]
    pub catalog: Option<PathBuf>,

    /// Number that receives order messages (international format, digits only)
    #[arg(long, env = "VAULT_ORDER_RECIPIENT", default_value = DEFAULT_RECIPIENT, global = true)]
    pub recipient: String,

    /// Code accepted by the specialist sign-in
    #[arg(
        long,
        env = "VAULT_ACCESS_CODE",
        default_value = DEFAULT_ACCESS_CODE,
        hide_env_values = true,
        hide_default_value = true,
        global = true
    )]
    pub access_code: String,
}
