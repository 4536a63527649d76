use actix_web::{get, post, web, Error, HttpRequest, HttpResponse, Responder};
use serde_json::json;
use sqlx::MySqlPool;

use crate::auth;
use crate::models::progress::{SkuProgress, SkuProgressForm, STATUS_BELUM, STATUS_LULUS};
use crate::sku_data::{sku_config, SKU_CONFIGS};

/// Katalog SKU statis: empat jenjang beserta daftar syaratnya.
#[get("/api/sku/catalog")]
pub async fn sku_catalog(req: HttpRequest) -> Result<impl Responder, Error> {
    auth::verify_jwt(&req)?;
    Ok(HttpResponse::Ok().json(json!({ "status": "success", "data": SKU_CONFIGS })))
}

#[get("/api/sku/progress/{peserta_id}/{jenis_sku}")]
pub async fn get_sku_progress(
    req: HttpRequest,
    pool: web::Data<MySqlPool>,
    path: web::Path<(i64, String)>,
) -> Result<impl Responder, Error> {
    auth::verify_jwt(&req)?;
    let (peserta_id, jenis_sku) = path.into_inner();

    let config = sku_config(&jenis_sku)
        .ok_or_else(|| actix_web::error::ErrorBadRequest("jenis_sku tidak dikenal"))?;

    let rows = sqlx::query_as::<_, SkuProgress>(
        "SELECT id, peserta_id, jenis_sku, syarat_nomor, status, tanggal_uji, \
         pembina_penguji, agama_dipilih FROM sku_progress \
         WHERE peserta_id = ? AND jenis_sku = ? ORDER BY syarat_nomor",
    )
    .bind(peserta_id)
    .bind(&jenis_sku)
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        log::error!("Gagal mengambil progres SKU: {:?}", e);
        actix_web::error::ErrorInternalServerError("Gagal mengambil progres SKU")
    })?;

    let lulus = rows.iter().filter(|r| r.status == STATUS_LULUS).count();

    Ok(HttpResponse::Ok().json(json!({
        "status": "success",
        "data": rows,
        "jumlah_syarat": config.jumlah_syarat(),
        "jumlah_lulus": lulus,
    })))
}

/// Simpan progres uji SKU sekaligus, satu upsert per syarat. Baris yang
/// tidak lulus dibersihkan dari tanggal/pembina/agama sebelum disimpan.
#[post("/api/sku/progress")]
pub async fn save_sku_progress(
    req: HttpRequest,
    pool: web::Data<MySqlPool>,
    form: web::Json<SkuProgressForm>,
) -> Result<impl Responder, Error> {
    auth::verify_jwt(&req)?;

    let config = sku_config(&form.jenis_sku)
        .ok_or_else(|| actix_web::error::ErrorBadRequest("jenis_sku tidak dikenal"))?;

    for entry in &form.entries {
        if entry.syarat_nomor < 1 || entry.syarat_nomor as usize > config.jumlah_syarat() {
            return Err(actix_web::error::ErrorBadRequest(format!(
                "Nomor syarat {} di luar jangkauan {}",
                entry.syarat_nomor, config.nama
            )));
        }
        if entry.status != STATUS_LULUS && entry.status != STATUS_BELUM {
            return Err(actix_web::error::ErrorBadRequest(format!(
                "Status tidak dikenal: {}",
                entry.status
            )));
        }
        if let Some(agama) = entry.agama_dipilih.as_deref().filter(|s| !s.is_empty()) {
            let syarat = &config.syarat[(entry.syarat_nomor - 1) as usize];
            if !syarat.has_sub_agama() {
                return Err(actix_web::error::ErrorBadRequest(format!(
                    "Syarat {} tidak memiliki varian agama",
                    entry.syarat_nomor
                )));
            }
            if !syarat.sub_agama.iter().any(|v| v.label == agama) {
                return Err(actix_web::error::ErrorBadRequest(format!(
                    "Agama tidak dikenal: {}",
                    agama
                )));
            }
        }
    }

    for entry in form.entries.iter().cloned().map(|e| e.scrubbed()) {
        sqlx::query(
            "INSERT INTO sku_progress \
             (peserta_id, jenis_sku, syarat_nomor, status, tanggal_uji, \
              pembina_penguji, agama_dipilih) \
             VALUES (?, ?, ?, ?, ?, ?, ?) \
             ON DUPLICATE KEY UPDATE status = VALUES(status), \
             tanggal_uji = VALUES(tanggal_uji), \
             pembina_penguji = VALUES(pembina_penguji), \
             agama_dipilih = VALUES(agama_dipilih)",
        )
        .bind(form.peserta_id)
        .bind(&form.jenis_sku)
        .bind(entry.syarat_nomor)
        .bind(&entry.status)
        .bind(entry.tanggal_uji)
        .bind(&entry.pembina_penguji)
        .bind(&entry.agama_dipilih)
        .execute(pool.get_ref())
        .await
        .map_err(|e| {
            log::error!(
                "Gagal menyimpan progres SKU syarat {}: {:?}",
                entry.syarat_nomor,
                e
            );
            actix_web::error::ErrorInternalServerError("Gagal menyimpan progres SKU")
        })?;
    }

    Ok(HttpResponse::Ok().json(json!({
        "status": "success",
        "message": "Progres SKU berhasil disimpan"
    })))
}
