use actix_web::HttpRequest;
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::models::user::User;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub exp: usize,
    pub user_id: i64,
    pub nama_user: String,
}

fn jwt_secret() -> Result<String, actix_web::Error> {
    std::env::var("JWT_SECRET").map_err(|_| {
        log::error!("JWT_SECRET tidak ditemukan di environment");
        actix_web::error::ErrorInternalServerError("Konfigurasi server tidak lengkap")
    })
}

pub fn generate_jwt(user: &User) -> Result<String, actix_web::Error> {
    let secret = jwt_secret()?;
    let now = Utc::now();
    let claims = Claims {
        sub: user.email.clone(),
        role: user.role.clone(),
        user_id: user.id,
        nama_user: user.name.clone(),
        exp: (now + chrono::Duration::days(2)).timestamp() as usize,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| {
        log::error!("Gagal membuat token JWT: {:?}", e);
        actix_web::error::ErrorInternalServerError("Gagal membuat token")
    })
}

pub fn verify_jwt(req: &HttpRequest) -> Result<Claims, actix_web::Error> {
    let token = req
        .cookie("access_token")
        .ok_or_else(|| {
            log::warn!("No access_token cookie found in request to {}", req.path());
            actix_web::error::ErrorUnauthorized("Token tidak ditemukan")
        })?
        .value()
        .to_string();

    let secret = jwt_secret()?;
    let token_data = decode::<Claims>(
        &token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map_err(|e| {
        log::warn!("JWT verification failed: {:?}", e);
        actix_web::error::ErrorUnauthorized("Token tidak valid atau kedaluwarsa")
    })?;

    Ok(token_data.claims)
}
