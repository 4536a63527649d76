use actix_web::{delete, get, post, put, web, Error, HttpRequest, HttpResponse, Responder};
use serde_json::json;
use sqlx::MySqlPool;

use crate::auth;
use crate::models::peserta::{PesertaDidik, PesertaFilter, PesertaForm};

/// Sub kelompok hanya berlaku untuk golongannya: barung untuk Siaga,
/// regu untuk Penggalang. Golongan lain tidak membawa keduanya.
fn normalize_sub_kelompok(form: &PesertaForm) -> (Option<String>, Option<String>) {
    match form.golongan.as_str() {
        "Siaga" => (
            form.barung.clone().filter(|s| !s.is_empty()),
            None,
        ),
        "Penggalang" => (
            None,
            form.regu.clone().filter(|s| !s.is_empty()),
        ),
        _ => (None, None),
    }
}

const GOLONGAN_OPTIONS: &[&str] = &["Siaga", "Penggalang", "Penegak", "Pandega"];

fn validate_form(form: &PesertaForm) -> Result<(), Error> {
    if form.nama_lengkap.trim().is_empty() {
        return Err(actix_web::error::ErrorBadRequest("nama_lengkap wajib diisi"));
    }
    if !GOLONGAN_OPTIONS.contains(&form.golongan.as_str()) {
        return Err(actix_web::error::ErrorBadRequest("golongan tidak valid"));
    }
    Ok(())
}

#[get("/api/peserta")]
pub async fn list_peserta(
    req: HttpRequest,
    pool: web::Data<MySqlPool>,
    filter: web::Query<PesertaFilter>,
) -> Result<impl Responder, Error> {
    auth::verify_jwt(&req)?;

    let mut sql = String::from(
        "SELECT id, nama_lengkap, golongan, kelas, tahun_masuk, no_induk, alamat, \
         tempat_lahir, tanggal_lahir, barung, regu, created_at \
         FROM data_peserta_didik WHERE 1=1",
    );
    if filter.golongan.is_some() {
        sql.push_str(" AND golongan = ?");
    }
    if filter.nama.is_some() {
        sql.push_str(" AND nama_lengkap LIKE ?");
    }
    sql.push_str(" ORDER BY created_at DESC");

    let mut query = sqlx::query_as::<_, PesertaDidik>(&sql);
    if let Some(golongan) = &filter.golongan {
        query = query.bind(golongan);
    }
    if let Some(nama) = &filter.nama {
        query = query.bind(format!("%{}%", nama));
    }

    let rows = query.fetch_all(pool.get_ref()).await.map_err(|e| {
        log::error!("Gagal mengambil data peserta: {:?}", e);
        actix_web::error::ErrorInternalServerError("Gagal mengambil data peserta didik")
    })?;

    Ok(HttpResponse::Ok().json(json!({ "status": "success", "data": rows })))
}

#[get("/api/peserta/{id}")]
pub async fn get_peserta(
    req: HttpRequest,
    pool: web::Data<MySqlPool>,
    path: web::Path<i64>,
) -> Result<impl Responder, Error> {
    auth::verify_jwt(&req)?;
    let id = path.into_inner();

    let peserta = sqlx::query_as::<_, PesertaDidik>(
        "SELECT id, nama_lengkap, golongan, kelas, tahun_masuk, no_induk, alamat, \
         tempat_lahir, tanggal_lahir, barung, regu, created_at \
         FROM data_peserta_didik WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool.get_ref())
    .await
    .map_err(|e| {
        log::error!("Gagal mengambil peserta {}: {:?}", id, e);
        actix_web::error::ErrorInternalServerError("Gagal mengambil data peserta didik")
    })?
    .ok_or_else(|| actix_web::error::ErrorNotFound("Peserta didik tidak ditemukan"))?;

    Ok(HttpResponse::Ok().json(json!({ "status": "success", "data": peserta })))
}

#[post("/api/peserta")]
pub async fn create_peserta(
    req: HttpRequest,
    pool: web::Data<MySqlPool>,
    form: web::Json<PesertaForm>,
) -> Result<impl Responder, Error> {
    auth::verify_jwt(&req)?;
    validate_form(&form)?;
    let (barung, regu) = normalize_sub_kelompok(&form);

    let result = sqlx::query(
        "INSERT INTO data_peserta_didik \
         (nama_lengkap, golongan, kelas, tahun_masuk, no_induk, alamat, \
          tempat_lahir, tanggal_lahir, barung, regu, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, NOW())",
    )
    .bind(form.nama_lengkap.trim())
    .bind(&form.golongan)
    .bind(&form.kelas)
    .bind(form.tahun_masuk)
    .bind(&form.no_induk)
    .bind(&form.alamat)
    .bind(&form.tempat_lahir)
    .bind(form.tanggal_lahir)
    .bind(&barung)
    .bind(&regu)
    .execute(pool.get_ref())
    .await
    .map_err(|e| {
        log::error!("Gagal menambah peserta: {:?}", e);
        actix_web::error::ErrorInternalServerError("Gagal menambah peserta didik")
    })?;

    Ok(HttpResponse::Created().json(json!({
        "status": "success",
        "message": "Peserta didik berhasil ditambahkan",
        "data": { "id": result.last_insert_id() }
    })))
}

#[put("/api/peserta/{id}")]
pub async fn update_peserta(
    req: HttpRequest,
    pool: web::Data<MySqlPool>,
    path: web::Path<i64>,
    form: web::Json<PesertaForm>,
) -> Result<impl Responder, Error> {
    auth::verify_jwt(&req)?;
    let id = path.into_inner();
    validate_form(&form)?;
    let (barung, regu) = normalize_sub_kelompok(&form);

    let result = sqlx::query(
        "UPDATE data_peserta_didik SET nama_lengkap = ?, golongan = ?, kelas = ?, \
         tahun_masuk = ?, no_induk = ?, alamat = ?, tempat_lahir = ?, \
         tanggal_lahir = ?, barung = ?, regu = ? WHERE id = ?",
    )
    .bind(form.nama_lengkap.trim())
    .bind(&form.golongan)
    .bind(&form.kelas)
    .bind(form.tahun_masuk)
    .bind(&form.no_induk)
    .bind(&form.alamat)
    .bind(&form.tempat_lahir)
    .bind(form.tanggal_lahir)
    .bind(&barung)
    .bind(&regu)
    .bind(id)
    .execute(pool.get_ref())
    .await
    .map_err(|e| {
        log::error!("Gagal update peserta {}: {:?}", id, e);
        actix_web::error::ErrorInternalServerError("Gagal memperbarui peserta didik")
    })?;

    if result.rows_affected() == 0 {
        return Err(actix_web::error::ErrorNotFound(
            "Peserta didik tidak ditemukan",
        ));
    }

    Ok(HttpResponse::Ok().json(json!({
        "status": "success",
        "message": "Peserta didik berhasil diperbarui"
    })))
}

#[delete("/api/peserta/{id}")]
pub async fn delete_peserta(
    req: HttpRequest,
    pool: web::Data<MySqlPool>,
    path: web::Path<i64>,
) -> Result<impl Responder, Error> {
    auth::verify_jwt(&req)?;
    let id = path.into_inner();

    let result = sqlx::query("DELETE FROM data_peserta_didik WHERE id = ?")
        .bind(id)
        .execute(pool.get_ref())
        .await
        .map_err(|e| {
            log::error!("Gagal hapus peserta {}: {:?}", id, e);
            actix_web::error::ErrorInternalServerError("Gagal menghapus peserta didik")
        })?;

    if result.rows_affected() == 0 {
        return Err(actix_web::error::ErrorNotFound(
            "Peserta didik tidak ditemukan",
        ));
    }

    Ok(HttpResponse::Ok().json(json!({
        "status": "success",
        "message": "Peserta didik berhasil dihapus"
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(golongan: &str, barung: Option<&str>, regu: Option<&str>) -> PesertaForm {
        PesertaForm {
            nama_lengkap: "Budi".into(),
            golongan: golongan.into(),
            kelas: "4A".into(),
            tahun_masuk: 2023,
            no_induk: "001".into(),
            alamat: "Purbalingga".into(),
            tempat_lahir: None,
            tanggal_lahir: None,
            barung: barung.map(Into::into),
            regu: regu.map(Into::into),
        }
    }

    #[test]
    fn siaga_hanya_membawa_barung() {
        let (barung, regu) = normalize_sub_kelompok(&form("Siaga", Some("Merah"), Some("Elang")));
        assert_eq!(barung.as_deref(), Some("Merah"));
        assert!(regu.is_none());
    }

    #[test]
    fn penggalang_hanya_membawa_regu() {
        let (barung, regu) =
            normalize_sub_kelompok(&form("Penggalang", Some("Merah"), Some("Elang")));
        assert!(barung.is_none());
        assert_eq!(regu.as_deref(), Some("Elang"));
    }

    #[test]
    fn penegak_tanpa_sub_kelompok() {
        let (barung, regu) = normalize_sub_kelompok(&form("Penegak", Some("Merah"), Some("Elang")));
        assert!(barung.is_none());
        assert!(regu.is_none());
    }
}
