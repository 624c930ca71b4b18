use clap::Subcommand;

use crate::auth::{self, Claims};

#[derive(Subcommand)]
pub enum TokenCommands {
    #[command(about = "Issue a token the same way POST /api/v1/authentication does")]
    Issue {
        #[arg(long, help = "Email to embed in the token")]
        email: String,
        #[arg(long, help = "Name of the calling application")]
        app_name: String,
    },

    #[command(about = "Verify a token and print its claims")]
    Inspect {
        #[arg(help = "Token to verify")]
        token: String,
    },
}

pub fn handle(cmd: TokenCommands) -> anyhow::Result<()> {
    match cmd {
        TokenCommands::Issue { email, app_name } => {
            println!("{}", issue(email, app_name)?);
        }
        TokenCommands::Inspect { token } => {
            let claims = inspect(&token)?;
            println!("{}", serde_json::to_string_pretty(&claims)?);
        }
    }
    Ok(())
}

fn issue(email: String, app_name: String) -> anyhow::Result<String> {
    let claims = Claims::new(email, app_name);
    Ok(auth::generate_jwt(&claims)?)
}

fn inspect(token: &str) -> anyhow::Result<Claims> {
    Ok(auth::validate_jwt(token.trim())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_tokens_inspect_back_to_their_claims() {
        let token = issue("sam@turing.io".to_string(), "byob".to_string()).unwrap();

        let claims = inspect(&format!("  {}\n", token)).unwrap();
        assert_eq!(claims.email, "sam@turing.io");
        assert_eq!(claims.app_name, "byob");
        assert!(claims.admin);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn non_admin_email_issues_a_read_only_token() {
        let token = issue("sam@ricknmorty.com".to_string(), "byob".to_string()).unwrap();
        assert!(!inspect(&token).unwrap().admin);
    }

    #[test]
    fn inspect_rejects_tampered_tokens() {
        let token = issue("sam@turing.io".to_string(), "byob".to_string()).unwrap();
        let (head, _signature) = token.rsplit_once('.').unwrap();

        assert!(inspect(&format!("{}.bm90LWEtc2lnbmF0dXJl", head)).is_err());
        assert!(inspect("not.a.jwt").is_err());
    }
}
