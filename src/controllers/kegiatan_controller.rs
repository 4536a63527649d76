use actix_multipart::Multipart;
use actix_web::{delete, get, post, put, web, Error, HttpRequest, HttpResponse, Responder};
use chrono::NaiveDate;
use futures::TryStreamExt;
use serde_json::json;
use sqlx::types::Json;
use sqlx::MySqlPool;

use crate::auth;
use crate::models::kegiatan::{jenis_options, Kegiatan, MAX_FOTO_KEGIATAN};
use crate::utils::{delete_upload_file, drain_field, parse_date_opt, read_text_field, save_upload_file};

const UPLOAD_AREA: &str = "kegiatan";

const SELECT_COLS: &str = "id, nama_kegiatan, tanggal, lokasi, kategori, jenis, peserta_hadir, \
     keterangan, file_proposal, file_laporan, foto_kegiatan, created_at";

#[derive(Default)]
struct KegiatanUpload {
    nama_kegiatan: Option<String>,
    tanggal: Option<NaiveDate>,
    lokasi: Option<String>,
    kategori: Option<String>,
    jenis: Option<String>,
    peserta_hadir: Option<String>,
    keterangan: Option<String>,
    file_proposal: Option<String>,
    file_laporan: Option<String>,
    foto_kegiatan: Vec<String>,
}

impl KegiatanUpload {
    fn uploaded_files(&self) -> Vec<String> {
        let mut files = Vec::new();
        files.extend(self.file_proposal.clone());
        files.extend(self.file_laporan.clone());
        files.extend(self.foto_kegiatan.iter().cloned());
        files
    }
}

async fn cleanup_uploads(upload: &KegiatanUpload) {
    for f in upload.uploaded_files() {
        delete_upload_file(&f).await;
    }
}

async fn read_kegiatan_multipart(mut multipart: Multipart) -> Result<KegiatanUpload, Error> {
    let mut upload = KegiatanUpload::default();

    while let Some(field) = multipart
        .try_next()
        .await
        .map_err(actix_web::error::ErrorBadRequest)?
    {
        let cd = field.content_disposition().cloned();
        let field_name = cd
            .as_ref()
            .and_then(|c| c.get_name())
            .unwrap_or_default()
            .to_string();
        let filename = cd
            .as_ref()
            .and_then(|c| c.get_filename())
            .map(|s| s.to_string())
            .filter(|f| !f.trim().is_empty() && f.to_lowercase() != "null");

        match field_name.as_str() {
            "file_proposal" | "file_laporan" => {
                if let Some(orig) = filename {
                    let rel = save_upload_file(field, UPLOAD_AREA, Some(orig)).await?;
                    if field_name == "file_proposal" {
                        upload.file_proposal = Some(rel);
                    } else {
                        upload.file_laporan = Some(rel);
                    }
                } else {
                    drain_field(field).await?;
                }
            }
            "foto_kegiatan" => {
                if let Some(orig) = filename {
                    if upload.foto_kegiatan.len() >= MAX_FOTO_KEGIATAN {
                        cleanup_uploads(&upload).await;
                        return Err(actix_web::error::ErrorBadRequest(format!(
                            "Maksimal {} foto kegiatan",
                            MAX_FOTO_KEGIATAN
                        )));
                    }
                    let rel = save_upload_file(field, UPLOAD_AREA, Some(orig)).await?;
                    upload.foto_kegiatan.push(rel);
                } else {
                    drain_field(field).await?;
                }
            }
            _ => {
                let val = read_text_field(field, &field_name).await?;
                match field_name.as_str() {
                    "nama_kegiatan" => upload.nama_kegiatan = Some(val),
                    "tanggal" => upload.tanggal = parse_date_opt(&val, "tanggal")?,
                    "lokasi" => upload.lokasi = Some(val),
                    "kategori" => upload.kategori = Some(val),
                    "jenis" => upload.jenis = Some(val),
                    "peserta_hadir" => upload.peserta_hadir = Some(val),
                    "keterangan" => upload.keterangan = Some(val),
                    _ => {}
                }
            }
        }
    }

    Ok(upload)
}

/// Jenis kegiatan harus berasal dari daftar tetap kategori terpilih.
fn validate_kategori_jenis(kategori: &str, jenis: &str) -> Result<(), Error> {
    let options = jenis_options(kategori)
        .ok_or_else(|| actix_web::error::ErrorBadRequest("kategori tidak valid"))?;
    if !options.contains(&jenis) {
        return Err(actix_web::error::ErrorBadRequest(format!(
            "Jenis {} tidak berlaku untuk kategori {}",
            jenis, kategori
        )));
    }
    Ok(())
}

#[get("/api/kegiatan")]
pub async fn list_kegiatan(
    req: HttpRequest,
    pool: web::Data<MySqlPool>,
) -> Result<impl Responder, Error> {
    auth::verify_jwt(&req)?;

    let rows = sqlx::query_as::<_, Kegiatan>(&format!(
        "SELECT {} FROM kegiatan_gudep ORDER BY created_at DESC",
        SELECT_COLS
    ))
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        log::error!("Gagal mengambil kegiatan: {:?}", e);
        actix_web::error::ErrorInternalServerError("Gagal mengambil data kegiatan")
    })?;

    Ok(HttpResponse::Ok().json(json!({ "status": "success", "data": rows })))
}

#[get("/api/kegiatan/{id}")]
pub async fn get_kegiatan(
    req: HttpRequest,
    pool: web::Data<MySqlPool>,
    path: web::Path<i64>,
) -> Result<impl Responder, Error> {
    auth::verify_jwt(&req)?;
    let id = path.into_inner();

    let kegiatan = fetch_kegiatan(pool.get_ref(), id).await?;
    Ok(HttpResponse::Ok().json(json!({ "status": "success", "data": kegiatan })))
}

async fn fetch_kegiatan(pool: &MySqlPool, id: i64) -> Result<Kegiatan, Error> {
    sqlx::query_as::<_, Kegiatan>(&format!(
        "SELECT {} FROM kegiatan_gudep WHERE id = ?",
        SELECT_COLS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|e| {
        log::error!("Gagal mengambil kegiatan {}: {:?}", id, e);
        actix_web::error::ErrorInternalServerError("Gagal mengambil data kegiatan")
    })?
    .ok_or_else(|| actix_web::error::ErrorNotFound("Kegiatan tidak ditemukan"))
}

struct KegiatanFields {
    nama_kegiatan: String,
    kategori: String,
    jenis: String,
    peserta_hadir: i32,
}

fn required_fields(upload: &KegiatanUpload) -> Result<KegiatanFields, Error> {
    let nama_kegiatan = upload
        .nama_kegiatan
        .clone()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| actix_web::error::ErrorBadRequest("nama_kegiatan wajib diisi"))?;
    let kategori = upload
        .kategori
        .clone()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| actix_web::error::ErrorBadRequest("kategori wajib diisi"))?;
    let jenis = upload
        .jenis
        .clone()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| actix_web::error::ErrorBadRequest("jenis wajib diisi"))?;
    validate_kategori_jenis(&kategori, &jenis)?;

    let peserta_hadir = match upload.peserta_hadir.as_deref() {
        None | Some("") => 0,
        Some(v) => v
            .parse::<i32>()
            .map_err(|_| actix_web::error::ErrorBadRequest("peserta_hadir harus angka"))?,
    };

    Ok(KegiatanFields {
        nama_kegiatan,
        kategori,
        jenis,
        peserta_hadir,
    })
}

#[post("/api/kegiatan")]
pub async fn create_kegiatan(
    req: HttpRequest,
    pool: web::Data<MySqlPool>,
    multipart: Multipart,
) -> Result<impl Responder, Error> {
    auth::verify_jwt(&req)?;

    let upload = read_kegiatan_multipart(multipart).await?;
    let fields = match required_fields(&upload) {
        Ok(f) => f,
        Err(e) => {
            cleanup_uploads(&upload).await;
            return Err(e);
        }
    };

    let result = sqlx::query(
        "INSERT INTO kegiatan_gudep \
         (nama_kegiatan, tanggal, lokasi, kategori, jenis, peserta_hadir, keterangan, \
          file_proposal, file_laporan, foto_kegiatan, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, NOW())",
    )
    .bind(&fields.nama_kegiatan)
    .bind(upload.tanggal)
    .bind(upload.lokasi.clone().unwrap_or_default())
    .bind(&fields.kategori)
    .bind(&fields.jenis)
    .bind(fields.peserta_hadir)
    .bind(&upload.keterangan)
    .bind(&upload.file_proposal)
    .bind(&upload.file_laporan)
    .bind(Json(&upload.foto_kegiatan))
    .execute(pool.get_ref())
    .await;

    match result {
        Ok(result) => Ok(HttpResponse::Created().json(json!({
            "status": "success",
            "message": "Kegiatan berhasil dibuat",
            "data": { "id": result.last_insert_id() }
        }))),
        Err(e) => {
            log::error!("Gagal create kegiatan: {:?}", e);
            cleanup_uploads(&upload).await;
            Err(actix_web::error::ErrorInternalServerError(
                "Gagal membuat kegiatan",
            ))
        }
    }
}

#[put("/api/kegiatan/{id}")]
pub async fn update_kegiatan(
    req: HttpRequest,
    pool: web::Data<MySqlPool>,
    path: web::Path<i64>,
    multipart: Multipart,
) -> Result<impl Responder, Error> {
    auth::verify_jwt(&req)?;
    let id = path.into_inner();

    let old = fetch_kegiatan(pool.get_ref(), id).await?;
    let upload = read_kegiatan_multipart(multipart).await?;
    let fields = match required_fields(&upload) {
        Ok(f) => f,
        Err(e) => {
            cleanup_uploads(&upload).await;
            return Err(e);
        }
    };

    let file_proposal = upload
        .file_proposal
        .clone()
        .or_else(|| old.file_proposal.clone());
    let file_laporan = upload
        .file_laporan
        .clone()
        .or_else(|| old.file_laporan.clone());

    let mut foto = old
        .foto_kegiatan
        .as_ref()
        .map(|j| j.0.clone())
        .unwrap_or_default();
    foto.extend(upload.foto_kegiatan.iter().cloned());
    if foto.len() > MAX_FOTO_KEGIATAN {
        cleanup_uploads(&upload).await;
        return Err(actix_web::error::ErrorBadRequest(format!(
            "Maksimal {} foto kegiatan",
            MAX_FOTO_KEGIATAN
        )));
    }

    let result = sqlx::query(
        "UPDATE kegiatan_gudep SET nama_kegiatan = ?, tanggal = ?, lokasi = ?, \
         kategori = ?, jenis = ?, peserta_hadir = ?, keterangan = ?, \
         file_proposal = ?, file_laporan = ?, foto_kegiatan = ? WHERE id = ?",
    )
    .bind(&fields.nama_kegiatan)
    .bind(upload.tanggal.or(old.tanggal))
    .bind(upload.lokasi.clone().unwrap_or(old.lokasi.clone()))
    .bind(&fields.kategori)
    .bind(&fields.jenis)
    .bind(fields.peserta_hadir)
    .bind(upload.keterangan.clone().or(old.keterangan.clone()))
    .bind(&file_proposal)
    .bind(&file_laporan)
    .bind(Json(&foto))
    .bind(id)
    .execute(pool.get_ref())
    .await;

    match result {
        Ok(_) => {
            // Dokumen tunggal lama yang tergantikan dibersihkan
            if upload.file_proposal.is_some() {
                if let Some(old_file) = &old.file_proposal {
                    delete_upload_file(old_file).await;
                }
            }
            if upload.file_laporan.is_some() {
                if let Some(old_file) = &old.file_laporan {
                    delete_upload_file(old_file).await;
                }
            }
            Ok(HttpResponse::Ok().json(json!({
                "status": "success",
                "message": "Kegiatan berhasil diperbarui"
            })))
        }
        Err(e) => {
            log::error!("Gagal update kegiatan {}: {:?}", id, e);
            cleanup_uploads(&upload).await;
            Err(actix_web::error::ErrorInternalServerError(
                "Gagal memperbarui kegiatan",
            ))
        }
    }
}

#[delete("/api/kegiatan/{id}")]
pub async fn delete_kegiatan(
    req: HttpRequest,
    pool: web::Data<MySqlPool>,
    path: web::Path<i64>,
) -> Result<impl Responder, Error> {
    auth::verify_jwt(&req)?;
    let id = path.into_inner();

    let kegiatan = fetch_kegiatan(pool.get_ref(), id).await?;

    let result = sqlx::query("DELETE FROM kegiatan_gudep WHERE id = ?")
        .bind(id)
        .execute(pool.get_ref())
        .await
        .map_err(|e| {
            log::error!("Gagal hapus kegiatan {}: {:?}", id, e);
            actix_web::error::ErrorInternalServerError("Gagal menghapus kegiatan")
        })?;

    if result.rows_affected() == 0 {
        return Err(actix_web::error::ErrorNotFound("Kegiatan tidak ditemukan"));
    }

    for f in [&kegiatan.file_proposal, &kegiatan.file_laporan]
        .into_iter()
        .flatten()
    {
        delete_upload_file(f).await;
    }
    if let Some(foto) = &kegiatan.foto_kegiatan {
        for f in &foto.0 {
            delete_upload_file(f).await;
        }
    }

    Ok(HttpResponse::Ok().json(json!({
        "status": "success",
        "message": "Kegiatan berhasil dihapus"
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jenis_siaga_diterima_untuk_kategori_siaga() {
        assert!(validate_kategori_jenis("Siaga", "Pesta Siaga").is_ok());
        assert!(validate_kategori_jenis("Penggalang", "Perkemahan").is_ok());
        assert!(validate_kategori_jenis("Partisipasi", "Jambore").is_ok());
    }

    #[test]
    fn jenis_lintas_kategori_ditolak() {
        assert!(validate_kategori_jenis("Partisipasi", "Pesta Siaga").is_err());
        assert!(validate_kategori_jenis("Siaga", "Jambore").is_err());
    }

    #[test]
    fn kategori_tidak_dikenal_ditolak() {
        assert!(validate_kategori_jenis("Penegak", "Latihan").is_err());
    }
}
