use actix_web::{get, post, web, Error, HttpRequest, HttpResponse, Responder};
use serde_json::json;
use sqlx::MySqlPool;

use crate::auth;
use crate::models::progress::{TkkProgress, TkkProgressForm, STATUS_BELUM, STATUS_LULUS};
use crate::sku_data::{tkk_by_id, tkk_is_wajib, TKK_SIAGA_PILIHAN, TKK_SIAGA_WAJIB};

#[get("/api/tkk/catalog")]
pub async fn tkk_catalog(req: HttpRequest) -> Result<impl Responder, Error> {
    auth::verify_jwt(&req)?;
    Ok(HttpResponse::Ok().json(json!({
        "status": "success",
        "data": {
            "wajib": TKK_SIAGA_WAJIB,
            "pilihan": TKK_SIAGA_PILIHAN,
        }
    })))
}

#[get("/api/tkk/progress/{peserta_id}")]
pub async fn get_tkk_progress(
    req: HttpRequest,
    pool: web::Data<MySqlPool>,
    path: web::Path<i64>,
) -> Result<impl Responder, Error> {
    auth::verify_jwt(&req)?;
    let peserta_id = path.into_inner();

    let rows = sqlx::query_as::<_, TkkProgress>(
        "SELECT id, peserta_id, tkk_id, jenis, status, tanggal_uji, pembina_penguji \
         FROM tkk_progress WHERE peserta_id = ? ORDER BY tkk_id",
    )
    .bind(peserta_id)
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        log::error!("Gagal mengambil progres TKK: {:?}", e);
        actix_web::error::ErrorInternalServerError("Gagal mengambil progres TKK")
    })?;

    let lulus = rows.iter().filter(|r| r.status == STATUS_LULUS).count();

    Ok(HttpResponse::Ok().json(json!({
        "status": "success",
        "data": rows,
        "jumlah_lulus": lulus,
    })))
}

/// Simpan progres TKK sekaligus. Kolom jenis (wajib/pilihan) diturunkan
/// dari katalog, bukan dari kiriman klien.
#[post("/api/tkk/progress")]
pub async fn save_tkk_progress(
    req: HttpRequest,
    pool: web::Data<MySqlPool>,
    form: web::Json<TkkProgressForm>,
) -> Result<impl Responder, Error> {
    auth::verify_jwt(&req)?;

    for entry in &form.entries {
        if tkk_by_id(&entry.tkk_id).is_none() {
            return Err(actix_web::error::ErrorBadRequest(format!(
                "TKK tidak dikenal: {}",
                entry.tkk_id
            )));
        }
        if entry.status != STATUS_LULUS && entry.status != STATUS_BELUM {
            return Err(actix_web::error::ErrorBadRequest(format!(
                "Status tidak dikenal: {}",
                entry.status
            )));
        }
    }

    for entry in &form.entries {
        let jenis = if tkk_is_wajib(&entry.tkk_id) {
            "wajib"
        } else {
            "pilihan"
        };
        let (tanggal_uji, pembina_penguji) = if entry.status == STATUS_LULUS {
            (entry.tanggal_uji, entry.pembina_penguji.clone())
        } else {
            (None, None)
        };

        sqlx::query(
            "INSERT INTO tkk_progress \
             (peserta_id, tkk_id, jenis, status, tanggal_uji, pembina_penguji) \
             VALUES (?, ?, ?, ?, ?, ?) \
             ON DUPLICATE KEY UPDATE jenis = VALUES(jenis), status = VALUES(status), \
             tanggal_uji = VALUES(tanggal_uji), pembina_penguji = VALUES(pembina_penguji)",
        )
        .bind(form.peserta_id)
        .bind(&entry.tkk_id)
        .bind(jenis)
        .bind(&entry.status)
        .bind(tanggal_uji)
        .bind(&pembina_penguji)
        .execute(pool.get_ref())
        .await
        .map_err(|e| {
            log::error!("Gagal menyimpan progres TKK {}: {:?}", entry.tkk_id, e);
            actix_web::error::ErrorInternalServerError("Gagal menyimpan progres TKK")
        })?;
    }

    Ok(HttpResponse::Ok().json(json!({
        "status": "success",
        "message": "Progres TKK berhasil disimpan"
    })))
}
