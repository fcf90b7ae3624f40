use clap::Parser;

#[derive(Parser)]
#[command(
    name = "kvserve",
    version,
    about = "Serve an Azure Key Vault secret over HTTP"
)]
pub struct Cli {
    /// Name of the Key Vault (`<name>.vault.azure.net`).
    pub vault_name: String,
    /// Name of the secret to fetch and serve.
    pub secret_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_positional_args_parse() {
        let cli = Cli::try_parse_from(["kvserve", "myvault", "mysecret"]).unwrap();
        assert_eq!(cli.vault_name, "myvault");
        assert_eq!(cli.secret_name, "mysecret");
    }

    #[test]
    fn wrong_arg_counts_are_rejected() {
        assert!(Cli::try_parse_from(["kvserve"]).is_err());
        assert!(Cli::try_parse_from(["kvserve", "myvault"]).is_err());
        assert!(Cli::try_parse_from(["kvserve", "a", "b", "c"]).is_err());
    }
}
