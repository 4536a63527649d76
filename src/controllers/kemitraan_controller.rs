use actix_multipart::Multipart;
use actix_web::{delete, get, post, put, web, Error, HttpRequest, HttpResponse, Responder};
use futures::TryStreamExt;
use serde_json::json;
use sqlx::types::Json;
use sqlx::MySqlPool;

use crate::auth;
use crate::models::kemitraan::{validate_conditional_fields, Kemitraan, MAX_FOTO_KEMITRAAN};
use crate::utils::{delete_upload_file, drain_field, read_text_field, save_upload_file};

const UPLOAD_AREA: &str = "kemitraan";

const SELECT_COLS: &str = "id, nama_mitra, jenis_kemitraan, sub_kategori, jumlah_kegiatan, \
     kontak, email, alamat, keterangan, file_dokumen, foto_kemitraan, created_at";

#[derive(Default)]
struct KemitraanUpload {
    nama_mitra: Option<String>,
    jenis_kemitraan: Option<String>,
    sub_kategori: Option<String>,
    jumlah_kegiatan: Option<String>,
    kontak: Option<String>,
    email: Option<String>,
    alamat: Option<String>,
    keterangan: Option<String>,
    file_dokumen: Option<String>,
    foto_kemitraan: Vec<String>,
}

impl KemitraanUpload {
    fn uploaded_files(&self) -> Vec<String> {
        let mut files = Vec::new();
        files.extend(self.file_dokumen.clone());
        files.extend(self.foto_kemitraan.iter().cloned());
        files
    }
}

async fn cleanup_uploads(upload: &KemitraanUpload) {
    for f in upload.uploaded_files() {
        delete_upload_file(&f).await;
    }
}

async fn read_kemitraan_multipart(mut multipart: Multipart) -> Result<KemitraanUpload, Error> {
    let mut upload = KemitraanUpload::default();

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
            "file_dokumen" => {
                if let Some(orig) = filename {
                    let rel = save_upload_file(field, UPLOAD_AREA, Some(orig)).await?;
                    upload.file_dokumen = Some(rel);
                } else {
                    drain_field(field).await?;
                }
            }
            "foto_kemitraan" => {
                if let Some(orig) = filename {
                    if upload.foto_kemitraan.len() >= MAX_FOTO_KEMITRAAN {
                        cleanup_uploads(&upload).await;
                        return Err(actix_web::error::ErrorBadRequest(format!(
                            "Maksimal {} foto kemitraan",
                            MAX_FOTO_KEMITRAAN
                        )));
                    }
                    let rel = save_upload_file(field, UPLOAD_AREA, Some(orig)).await?;
                    upload.foto_kemitraan.push(rel);
                } else {
                    drain_field(field).await?;
                }
            }
            _ => {
                let val = read_text_field(field, &field_name).await?;
                match field_name.as_str() {
                    "nama_mitra" => upload.nama_mitra = Some(val),
                    "jenis_kemitraan" => upload.jenis_kemitraan = Some(val),
                    "sub_kategori" => upload.sub_kategori = Some(val),
                    "jumlah_kegiatan" => upload.jumlah_kegiatan = Some(val),
                    "kontak" => upload.kontak = Some(val),
                    "email" => upload.email = Some(val),
                    "alamat" => upload.alamat = Some(val),
                    "keterangan" => upload.keterangan = Some(val),
                    _ => {}
                }
            }
        }
    }

    Ok(upload)
}

struct KemitraanFields {
    nama_mitra: String,
    jenis_kemitraan: String,
    sub_kategori: Option<String>,
    jumlah_kegiatan: Option<i32>,
}

fn required_fields(upload: &KemitraanUpload) -> Result<KemitraanFields, Error> {
    let nama_mitra = upload
        .nama_mitra
        .clone()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| actix_web::error::ErrorBadRequest("nama_mitra wajib diisi"))?;
    let jenis_kemitraan = upload
        .jenis_kemitraan
        .clone()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| actix_web::error::ErrorBadRequest("jenis_kemitraan wajib diisi"))?;

    let sub_kategori = upload.sub_kategori.clone().filter(|s| !s.is_empty());
    let jumlah_kegiatan = match upload.jumlah_kegiatan.as_deref() {
        None | Some("") => None,
        Some(v) => Some(
            v.parse::<i32>()
                .map_err(|_| actix_web::error::ErrorBadRequest("jumlah_kegiatan harus angka"))?,
        ),
    };

    validate_conditional_fields(&jenis_kemitraan, sub_kategori.as_deref(), jumlah_kegiatan)
        .map_err(actix_web::error::ErrorBadRequest)?;

    Ok(KemitraanFields {
        nama_mitra,
        jenis_kemitraan,
        sub_kategori,
        jumlah_kegiatan,
    })
}

#[get("/api/kemitraan")]
pub async fn list_kemitraan(
    req: HttpRequest,
    pool: web::Data<MySqlPool>,
) -> Result<impl Responder, Error> {
    auth::verify_jwt(&req)?;

    let rows = sqlx::query_as::<_, Kemitraan>(&format!(
        "SELECT {} FROM kemitraan ORDER BY created_at DESC",
        SELECT_COLS
    ))
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        log::error!("Gagal mengambil kemitraan: {:?}", e);
        actix_web::error::ErrorInternalServerError("Gagal mengambil data kemitraan")
    })?;

    Ok(HttpResponse::Ok().json(json!({ "status": "success", "data": rows })))
}

#[get("/api/kemitraan/{id}")]
pub async fn get_kemitraan(
    req: HttpRequest,
    pool: web::Data<MySqlPool>,
    path: web::Path<i64>,
) -> Result<impl Responder, Error> {
    auth::verify_jwt(&req)?;
    let id = path.into_inner();

    let kemitraan = fetch_kemitraan(pool.get_ref(), id).await?;
    Ok(HttpResponse::Ok().json(json!({ "status": "success", "data": kemitraan })))
}

async fn fetch_kemitraan(pool: &MySqlPool, id: i64) -> Result<Kemitraan, Error> {
    sqlx::query_as::<_, Kemitraan>(&format!(
        "SELECT {} FROM kemitraan WHERE id = ?",
        SELECT_COLS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|e| {
        log::error!("Gagal mengambil kemitraan {}: {:?}", id, e);
        actix_web::error::ErrorInternalServerError("Gagal mengambil data kemitraan")
    })?
    .ok_or_else(|| actix_web::error::ErrorNotFound("Kemitraan tidak ditemukan"))
}

#[post("/api/kemitraan")]
pub async fn create_kemitraan(
    req: HttpRequest,
    pool: web::Data<MySqlPool>,
    multipart: Multipart,
) -> Result<impl Responder, Error> {
    auth::verify_jwt(&req)?;

    let upload = read_kemitraan_multipart(multipart).await?;
    let fields = match required_fields(&upload) {
        Ok(f) => f,
        Err(e) => {
            cleanup_uploads(&upload).await;
            return Err(e);
        }
    };

    let result = sqlx::query(
        "INSERT INTO kemitraan \
         (nama_mitra, jenis_kemitraan, sub_kategori, jumlah_kegiatan, kontak, email, \
          alamat, keterangan, file_dokumen, foto_kemitraan, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, NOW())",
    )
    .bind(&fields.nama_mitra)
    .bind(&fields.jenis_kemitraan)
    .bind(&fields.sub_kategori)
    .bind(fields.jumlah_kegiatan)
    .bind(upload.kontak.clone().unwrap_or_default())
    .bind(upload.email.clone().unwrap_or_default())
    .bind(upload.alamat.clone().unwrap_or_default())
    .bind(&upload.keterangan)
    .bind(&upload.file_dokumen)
    .bind(Json(&upload.foto_kemitraan))
    .execute(pool.get_ref())
    .await;

    match result {
        Ok(result) => Ok(HttpResponse::Created().json(json!({
            "status": "success",
            "message": "Kemitraan berhasil ditambahkan",
            "data": { "id": result.last_insert_id() }
        }))),
        Err(e) => {
            log::error!("Gagal menambah kemitraan: {:?}", e);
            cleanup_uploads(&upload).await;
            Err(actix_web::error::ErrorInternalServerError(
                "Gagal menambah kemitraan",
            ))
        }
    }
}

#[put("/api/kemitraan/{id}")]
pub async fn update_kemitraan(
    req: HttpRequest,
    pool: web::Data<MySqlPool>,
    path: web::Path<i64>,
    multipart: Multipart,
) -> Result<impl Responder, Error> {
    auth::verify_jwt(&req)?;
    let id = path.into_inner();

    let old = fetch_kemitraan(pool.get_ref(), id).await?;
    let upload = read_kemitraan_multipart(multipart).await?;
    let fields = match required_fields(&upload) {
        Ok(f) => f,
        Err(e) => {
            cleanup_uploads(&upload).await;
            return Err(e);
        }
    };

    let file_dokumen = upload
        .file_dokumen
        .clone()
        .or_else(|| old.file_dokumen.clone());

    let mut foto = old
        .foto_kemitraan
        .as_ref()
        .map(|j| j.0.clone())
        .unwrap_or_default();
    foto.extend(upload.foto_kemitraan.iter().cloned());
    if foto.len() > MAX_FOTO_KEMITRAAN {
        cleanup_uploads(&upload).await;
        return Err(actix_web::error::ErrorBadRequest(format!(
            "Maksimal {} foto kemitraan",
            MAX_FOTO_KEMITRAAN
        )));
    }

    let result = sqlx::query(
        "UPDATE kemitraan SET nama_mitra = ?, jenis_kemitraan = ?, sub_kategori = ?, \
         jumlah_kegiatan = ?, kontak = ?, email = ?, alamat = ?, keterangan = ?, \
         file_dokumen = ?, foto_kemitraan = ? WHERE id = ?",
    )
    .bind(&fields.nama_mitra)
    .bind(&fields.jenis_kemitraan)
    .bind(&fields.sub_kategori)
    .bind(fields.jumlah_kegiatan)
    .bind(upload.kontak.clone().unwrap_or(old.kontak.clone()))
    .bind(upload.email.clone().unwrap_or(old.email.clone()))
    .bind(upload.alamat.clone().unwrap_or(old.alamat.clone()))
    .bind(upload.keterangan.clone().or(old.keterangan.clone()))
    .bind(&file_dokumen)
    .bind(Json(&foto))
    .bind(id)
    .execute(pool.get_ref())
    .await;

    match result {
        Ok(_) => {
            if upload.file_dokumen.is_some() {
                if let Some(old_file) = &old.file_dokumen {
                    delete_upload_file(old_file).await;
                }
            }
            Ok(HttpResponse::Ok().json(json!({
                "status": "success",
                "message": "Kemitraan berhasil diperbarui"
            })))
        }
        Err(e) => {
            log::error!("Gagal update kemitraan {}: {:?}", id, e);
            cleanup_uploads(&upload).await;
            Err(actix_web::error::ErrorInternalServerError(
                "Gagal memperbarui kemitraan",
            ))
        }
    }
}

#[delete("/api/kemitraan/{id}")]
pub async fn delete_kemitraan(
    req: HttpRequest,
    pool: web::Data<MySqlPool>,
    path: web::Path<i64>,
) -> Result<impl Responder, Error> {
    auth::verify_jwt(&req)?;
    let id = path.into_inner();

    let kemitraan = fetch_kemitraan(pool.get_ref(), id).await?;

    let result = sqlx::query("DELETE FROM kemitraan WHERE id = ?")
        .bind(id)
        .execute(pool.get_ref())
        .await
        .map_err(|e| {
            log::error!("Gagal hapus kemitraan {}: {:?}", id, e);
            actix_web::error::ErrorInternalServerError("Gagal menghapus kemitraan")
        })?;

    if result.rows_affected() == 0 {
        return Err(actix_web::error::ErrorNotFound("Kemitraan tidak ditemukan"));
    }

    if let Some(f) = &kemitraan.file_dokumen {
        delete_upload_file(f).await;
    }
    if let Some(foto) = &kemitraan.foto_kemitraan {
        for f in &foto.0 {
            delete_upload_file(f).await;
        }
    }

    Ok(HttpResponse::Ok().json(json!({
        "status": "success",
        "message": "Kemitraan berhasil dihapus"
    })))
}
