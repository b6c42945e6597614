use jobhunter_core::types::DbId;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// JWT validation configuration.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HS256 signing secret shared with the token issuer.
    pub secret: String,
}

impl JwtConfig {
    /// Read `JWT_SECRET`; a missing value fails fast at startup.
    pub fn from_env() -> Self {
        Self {
            secret: std::env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
        }
    }
}

/// Claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User database id.
    pub sub: DbId,
    /// Login email; written to the resume audit trail.
    pub email: String,
    /// Role name, e.g. `"HR"` or `"SUPER_ADMIN"`.
    pub role: String,
    /// Owning company for restricted roles.
    pub company_id: Option<DbId>,
    /// Expiry (seconds since epoch).
    pub exp: i64,
}

/// Decode and verify an HS256 access token.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )?;
    Ok(data.claims)
}
