use anyhow::anyhow;
use rocket::{
    self,
    http::Status,
    request::{FromRequest, Outcome, Request},
};

use super::{api::ApiError, Cfg};
use crate::core::{entities::Secret, usecases::CredentialsGenerator};

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    let x: Vec<_> = auth_header_val.split(' ').collect();
    if x.len() == 2 && x[0] == "Bearer" {
        Some(x[1])
    } else {
        None
    }
}

#[derive(Debug)]
pub struct Auth {
    bearer_tokens: Vec<String>,
}

impl Auth {
    /// Only requests that carry the configured admin token
    /// are permitted to moderate content.
    pub fn admin(&self, cfg: &Cfg) -> Result<(), ApiError> {
        let Some(admin_token) = cfg.admin_token.as_deref() else {
            log::debug!("Rejected admin request: no admin token configured");
            return Err(ApiError::OtherWithStatus(
                anyhow!("Moderation is disabled"),
                Status::Forbidden,
            ));
        };
        if self.bearer_tokens.iter().any(|token| token == admin_token) {
            Ok(())
        } else {
            Err(ApiError::OtherWithStatus(
                anyhow!("Unauthorized"),
                Status::Unauthorized,
            ))
        }
    }

    fn bearer_tokens_from_header(request: &Request) -> Vec<String> {
        request
            .headers()
            .get("Authorization")
            .filter_map(get_bearer_token)
            .map(ToOwned::to_owned)
            .collect()
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let bearer_tokens = Self::bearer_tokens_from_header(request);
        Outcome::Success(Self { bearer_tokens })
    }
}

/// Generates the credentials of new accounts.
pub struct CredentialsSource(pub Box<dyn CredentialsGenerator + Send + Sync>);

impl CredentialsGenerator for CredentialsSource {
    fn handle_suffix(&self) -> u16 {
        self.0.handle_suffix()
    }

    fn secret(&self) -> anyhow::Result<Secret> {
        self.0.secret()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bearer_token() {
        assert_eq!(Some("abc"), get_bearer_token("Bearer abc"));
        assert_eq!(None, get_bearer_token("Bearer"));
        assert_eq!(None, get_bearer_token("Basic abc"));
        assert_eq!(None, get_bearer_token("Bearer a b"));
    }

    #[test]
    fn admin_token_must_match() {
        let cfg = Cfg {
            admin_token: Some("secret".into()),
        };
        let auth = |tokens: &[&str]| Auth {
            bearer_tokens: tokens.iter().map(|t| t.to_string()).collect(),
        };
        assert!(auth(&["secret"]).admin(&cfg).is_ok());
        assert!(matches!(
            auth(&["other"]).admin(&cfg),
            Err(ApiError::OtherWithStatus(_, status)) if status == Status::Unauthorized
        ));
        assert!(matches!(
            auth(&[]).admin(&cfg),
            Err(ApiError::OtherWithStatus(_, status)) if status == Status::Unauthorized
        ));
        assert!(matches!(
            auth(&["secret"]).admin(&Cfg { admin_token: None }),
            Err(ApiError::OtherWithStatus(_, status)) if status == Status::Forbidden
        ));
    }
}
