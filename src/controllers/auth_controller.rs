use actix_web::{
    cookie::{time::Duration, Cookie, SameSite},
    get, post, web, Error, HttpRequest, HttpResponse, Responder,
};
use bcrypt::verify;
use serde_json::json;
use sqlx::MySqlPool;

use crate::auth;
use crate::models::user::{LoginForm, User};

#[post("/api/auth/login")]
pub async fn login(
    pool: web::Data<MySqlPool>,
    payload: web::Json<LoginForm>,
) -> Result<impl Responder, Error> {
    let email = payload.email.trim();
    let password = payload.password.trim();

    if email.is_empty() || password.is_empty() {
        return Ok(HttpResponse::BadRequest().json(json!({
            "status": "error", "message": "Email atau password kosong"
        })));
    }

    let user = sqlx::query_as::<_, User>(
        "SELECT id, name, email, role, password FROM users WHERE email = ? LIMIT 1",
    )
    .bind(email)
    .fetch_optional(pool.get_ref())
    .await
    .map_err(|e| {
        log::error!("DB error get user: {:?}", e);
        actix_web::error::ErrorInternalServerError("Gagal mengambil data user")
    })?
    .ok_or_else(|| actix_web::error::ErrorUnauthorized("Email tidak terdaftar"))?;

    let ok = verify(password, &user.password).map_err(|e| {
        log::error!("bcrypt verify: {:?}", e);
        actix_web::error::ErrorInternalServerError("Gagal memverifikasi password")
    })?;

    if !ok {
        return Err(actix_web::error::ErrorUnauthorized(
            "Kredensial tidak valid",
        ));
    }

    let token = auth::generate_jwt(&user)?;

    let access_cookie = Cookie::build("access_token", token)
        .path("/")
        .http_only(true)
        .secure(false) // false untuk development (HTTP)
        .same_site(SameSite::Lax)
        .max_age(Duration::days(2))
        .finish();

    Ok(HttpResponse::Ok().cookie(access_cookie).json(json!({
        "message": "Berhasil login",
        "role": user.role,
        "name": user.name,
    })))
}

#[post("/api/auth/logout")]
pub async fn logout() -> Result<impl Responder, Error> {
    // Cookie logout harus sama persis dengan cookie login
    let access_cookie = Cookie::build("access_token", "")
        .path("/")
        .http_only(true)
        .secure(false)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(0))
        .finish();

    Ok(HttpResponse::Ok()
        .cookie(access_cookie)
        .json(json!({ "message": "Berhasil logout" })))
}

#[get("/api/auth/me")]
pub async fn me(req: HttpRequest) -> Result<impl Responder, Error> {
    let claims = auth::verify_jwt(&req)?;
    Ok(HttpResponse::Ok().json(json!({
        "user_id": claims.user_id,
        "email": claims.sub,
        "name": claims.nama_user,
        "role": claims.role,
    })))
}
