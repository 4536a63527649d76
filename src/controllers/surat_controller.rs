use actix_web::{get, post, web, Error, HttpRequest, HttpResponse, Responder};
use chrono::NaiveDate;
use serde_json::json;
use sqlx::MySqlPool;

use crate::auth;
use crate::models::peserta::PesertaDidik;
use crate::models::sertifikat::{SertifikatSkk, SertifikatSkkForm, SuratLulusSku, SuratSkuForm};
use crate::sku_data::{sku_config, tkk_by_id};
use crate::templates::{
    extract_kode_gudep, nama_hari,
    piagam_skk::{generate_piagam_skk_html, PiagamSkkParams},
    surat_sku::{generate_surat_sku_html, SuratSkuParams},
};

fn iso(d: Option<NaiveDate>) -> String {
    d.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Gambar latar di template relatif terhadap origin; saat dokumen dibuka
/// dari jendela cetak, path itu ditulis ulang menjadi URL absolut server.
fn absolutize_background(html: String, req: &HttpRequest, asset: &str) -> String {
    let info = req.connection_info();
    let base = format!("{}://{}", info.scheme(), info.host());
    html.replace(
        &format!("url('{}')", asset),
        &format!("url('{}{}')", base, asset),
    )
}

async fn fetch_peserta(pool: &MySqlPool, id: i64) -> Result<PesertaDidik, Error> {
    sqlx::query_as::<_, PesertaDidik>(
        "SELECT id, nama_lengkap, golongan, kelas, tahun_masuk, no_induk, alamat, \
         tempat_lahir, tanggal_lahir, barung, regu, created_at \
         FROM data_peserta_didik WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|e| {
        log::error!("Gagal mengambil peserta {}: {:?}", id, e);
        actix_web::error::ErrorInternalServerError("Gagal mengambil data peserta didik")
    })?
    .ok_or_else(|| actix_web::error::ErrorNotFound("Peserta didik tidak ditemukan"))
}

/// Terbitkan surat lulus SKU: simpan snapshot lalu kembalikan HTML siap
/// cetak. Cetak ulang dengan data sama menghasilkan dokumen yang sama.
#[post("/api/surat/sku")]
pub async fn cetak_surat_sku(
    req: HttpRequest,
    pool: web::Data<MySqlPool>,
    form: web::Json<SuratSkuForm>,
) -> Result<impl Responder, Error> {
    auth::verify_jwt(&req)?;

    if form.nomor_surat.trim().is_empty() {
        return Err(actix_web::error::ErrorBadRequest("nomor_surat wajib diisi"));
    }
    if form.tempat_lahir.trim().is_empty() {
        return Err(actix_web::error::ErrorBadRequest("tempat_lahir wajib diisi"));
    }
    if form.tanggal_lahir.is_none() {
        return Err(actix_web::error::ErrorBadRequest(
            "tanggal_lahir wajib diisi",
        ));
    }

    let config = sku_config(&form.jenis_sku)
        .ok_or_else(|| actix_web::error::ErrorBadRequest("jenis_sku tidak dikenal"))?;
    let peserta = fetch_peserta(pool.get_ref(), form.peserta_id).await?;

    sqlx::query(
        "INSERT INTO surat_lulus_sku \
         (peserta_id, jenis_sku, nomor_surat, tempat_lahir, tanggal_lahir, \
          tanggal_pelantikan, tempat_terbit, tanggal_terbit, nama_pembina, nip_pembina) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
         ON DUPLICATE KEY UPDATE nomor_surat = VALUES(nomor_surat), \
         tempat_lahir = VALUES(tempat_lahir), tanggal_lahir = VALUES(tanggal_lahir), \
         tanggal_pelantikan = VALUES(tanggal_pelantikan), \
         tempat_terbit = VALUES(tempat_terbit), tanggal_terbit = VALUES(tanggal_terbit), \
         nama_pembina = VALUES(nama_pembina), nip_pembina = VALUES(nip_pembina)",
    )
    .bind(form.peserta_id)
    .bind(&form.jenis_sku)
    .bind(form.nomor_surat.trim())
    .bind(&form.tempat_lahir)
    .bind(form.tanggal_lahir)
    .bind(form.tanggal_pelantikan)
    .bind(&form.tempat_terbit)
    .bind(form.tanggal_terbit)
    .bind(&form.nama_pembina)
    .bind(&form.nip_pembina)
    .execute(pool.get_ref())
    .await
    .map_err(|e| {
        log::error!("Gagal menyimpan surat lulus SKU: {:?}", e);
        actix_web::error::ErrorInternalServerError("Gagal menyimpan surat lulus SKU")
    })?;

    let params = SuratSkuParams {
        kode_gudep: extract_kode_gudep(&form.nomor_surat),
        nomor_surat: form.nomor_surat.trim().to_string(),
        nama_peserta: peserta.nama_lengkap.clone(),
        tempat_lahir: form.tempat_lahir.clone(),
        tanggal_lahir: iso(form.tanggal_lahir),
        golongan: config.golongan.to_string(),
        tingkat_sku: config.tingkat().to_string(),
        nama_hari_pelantikan: nama_hari(&iso(form.tanggal_pelantikan)),
        tanggal_pelantikan: iso(form.tanggal_pelantikan),
        tempat_terbit: form.tempat_terbit.clone(),
        tanggal_terbit: iso(form.tanggal_terbit),
        nama_pembina: form.nama_pembina.clone(),
        nip_pembina: form.nip_pembina.clone(),
    };

    let html = absolutize_background(generate_surat_sku_html(&params), &req, "/surat-sku.png");

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}

/// Snapshot surat untuk mengisi ulang form sebelum cetak ulang.
#[get("/api/surat/sku/{peserta_id}/{jenis_sku}")]
pub async fn get_surat_sku(
    req: HttpRequest,
    pool: web::Data<MySqlPool>,
    path: web::Path<(i64, String)>,
) -> Result<impl Responder, Error> {
    auth::verify_jwt(&req)?;
    let (peserta_id, jenis_sku) = path.into_inner();

    let surat = sqlx::query_as::<_, SuratLulusSku>(
        "SELECT id, peserta_id, jenis_sku, nomor_surat, tempat_lahir, tanggal_lahir, \
         tanggal_pelantikan, tempat_terbit, tanggal_terbit, nama_pembina, nip_pembina \
         FROM surat_lulus_sku WHERE peserta_id = ? AND jenis_sku = ?",
    )
    .bind(peserta_id)
    .bind(&jenis_sku)
    .fetch_optional(pool.get_ref())
    .await
    .map_err(|e| {
        log::error!("Gagal mengambil surat lulus SKU: {:?}", e);
        actix_web::error::ErrorInternalServerError("Gagal mengambil surat lulus SKU")
    })?;

    Ok(HttpResponse::Ok().json(json!({ "status": "success", "data": surat })))
}

#[post("/api/surat/skk")]
pub async fn cetak_sertifikat_skk(
    req: HttpRequest,
    pool: web::Data<MySqlPool>,
    form: web::Json<SertifikatSkkForm>,
) -> Result<impl Responder, Error> {
    auth::verify_jwt(&req)?;

    if form.nomor_sertifikat.trim().is_empty() {
        return Err(actix_web::error::ErrorBadRequest(
            "nomor_sertifikat wajib diisi",
        ));
    }
    if form.tempat_lahir.trim().is_empty() {
        return Err(actix_web::error::ErrorBadRequest("tempat_lahir wajib diisi"));
    }
    if form.tanggal_lahir.is_none() {
        return Err(actix_web::error::ErrorBadRequest(
            "tanggal_lahir wajib diisi",
        ));
    }
    if form.penguji.trim().is_empty() {
        return Err(actix_web::error::ErrorBadRequest("penguji wajib diisi"));
    }

    let tkk = tkk_by_id(&form.tkk_id)
        .ok_or_else(|| actix_web::error::ErrorBadRequest("tkk_id tidak dikenal"))?;
    let peserta = fetch_peserta(pool.get_ref(), form.peserta_id).await?;

    sqlx::query(
        "INSERT INTO sertifikat_skk \
         (peserta_id, tkk_id, nomor_sertifikat, nama_peserta, tempat_lahir, \
          tanggal_lahir, nta, golongan, jenis_tkk, bidang_tkk, penguji, nta_penguji, \
          tempat_terbit, tanggal_terbit) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
         ON DUPLICATE KEY UPDATE nomor_sertifikat = VALUES(nomor_sertifikat), \
         nama_peserta = VALUES(nama_peserta), tempat_lahir = VALUES(tempat_lahir), \
         tanggal_lahir = VALUES(tanggal_lahir), nta = VALUES(nta), \
         golongan = VALUES(golongan), jenis_tkk = VALUES(jenis_tkk), \
         bidang_tkk = VALUES(bidang_tkk), penguji = VALUES(penguji), \
         nta_penguji = VALUES(nta_penguji), tempat_terbit = VALUES(tempat_terbit), \
         tanggal_terbit = VALUES(tanggal_terbit)",
    )
    .bind(form.peserta_id)
    .bind(&form.tkk_id)
    .bind(form.nomor_sertifikat.trim())
    .bind(&peserta.nama_lengkap)
    .bind(&form.tempat_lahir)
    .bind(form.tanggal_lahir)
    .bind(&form.nta)
    .bind(&peserta.golongan)
    .bind(tkk.nama)
    .bind(tkk.bidang)
    .bind(&form.penguji)
    .bind(&form.nta_penguji)
    .bind(&form.tempat_terbit)
    .bind(form.tanggal_terbit)
    .execute(pool.get_ref())
    .await
    .map_err(|e| {
        log::error!("Gagal menyimpan sertifikat SKK: {:?}", e);
        actix_web::error::ErrorInternalServerError("Gagal menyimpan sertifikat SKK")
    })?;

    let params = PiagamSkkParams {
        nomor_sertifikat: form.nomor_sertifikat.trim().to_string(),
        nama_peserta: peserta.nama_lengkap.clone(),
        tempat_lahir: form.tempat_lahir.clone(),
        tanggal_lahir: iso(form.tanggal_lahir),
        nta: form.nta.clone(),
        jenis_tkk: tkk.nama.to_string(),
        bidang_tkk: tkk.bidang.to_string(),
        penguji: form.penguji.clone(),
        tempat_terbit: form.tempat_terbit.clone(),
        tanggal_terbit: iso(form.tanggal_terbit),
        nama_penguji: form.penguji.clone(),
        nta_penguji: form.nta_penguji.clone(),
        golongan: peserta.golongan.clone(),
    };

    let html = absolutize_background(generate_piagam_skk_html(&params), &req, "/skk.png");

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}

#[get("/api/surat/skk/{peserta_id}/{tkk_id}")]
pub async fn get_sertifikat_skk(
    req: HttpRequest,
    pool: web::Data<MySqlPool>,
    path: web::Path<(i64, String)>,
) -> Result<impl Responder, Error> {
    auth::verify_jwt(&req)?;
    let (peserta_id, tkk_id) = path.into_inner();

    let sertifikat = sqlx::query_as::<_, SertifikatSkk>(
        "SELECT id, peserta_id, tkk_id, nomor_sertifikat, nama_peserta, tempat_lahir, \
         tanggal_lahir, nta, golongan, jenis_tkk, bidang_tkk, penguji, nta_penguji, \
         tempat_terbit, tanggal_terbit \
         FROM sertifikat_skk WHERE peserta_id = ? AND tkk_id = ?",
    )
    .bind(peserta_id)
    .bind(&tkk_id)
    .fetch_optional(pool.get_ref())
    .await
    .map_err(|e| {
        log::error!("Gagal mengambil sertifikat SKK: {:?}", e);
        actix_web::error::ErrorInternalServerError("Gagal mengambil sertifikat SKK")
    })?;

    Ok(HttpResponse::Ok().json(json!({ "status": "success", "data": sertifikat })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_format() {
        assert_eq!(iso(NaiveDate::from_ymd_opt(2024, 8, 17)), "2024-08-17");
        assert_eq!(iso(None), "");
    }
}
