use actix_multipart::Multipart;
use actix_web::{delete, get, post, put, web, Error, HttpRequest, HttpResponse, Responder};
use futures::TryStreamExt;
use serde_json::json;
use sqlx::types::Json;
use sqlx::MySqlPool;

use crate::auth;
use crate::models::pembina::{
    Pembina, JABATAN_OPTIONS, KURSUS_OPTIONS, MAX_BERKAS_LAIN, MAX_FOTO_PELANTIKAN,
    MAX_IJAZAH_KURSUS,
};
use crate::utils::{delete_upload_file, drain_field, read_text_field, save_upload_file};

const UPLOAD_AREA: &str = "pembina";

const SELECT_COLS: &str = "id, nama_lengkap, jabatan, npa, kursus, no_telepon, email, alamat, \
     file_sk, file_kta, file_ijazah_kursus, foto_pelantikan, berkas_lain, created_at";

/// Hasil pembacaan form multipart pembina: field teks + file yang sudah
/// tersimpan di disk.
#[derive(Default)]
struct PembinaUpload {
    nama_lengkap: Option<String>,
    jabatan: Option<String>,
    npa: Option<String>,
    kursus: Option<String>,
    no_telepon: Option<String>,
    email: Option<String>,
    alamat: Option<String>,
    file_sk: Option<String>,
    file_kta: Option<String>,
    file_ijazah_kursus: Vec<String>,
    foto_pelantikan: Vec<String>,
    berkas_lain: Vec<String>,
}

impl PembinaUpload {
    fn uploaded_files(&self) -> Vec<String> {
        let mut files = Vec::new();
        files.extend(self.file_sk.clone());
        files.extend(self.file_kta.clone());
        files.extend(self.file_ijazah_kursus.iter().cloned());
        files.extend(self.foto_pelantikan.iter().cloned());
        files.extend(self.berkas_lain.iter().cloned());
        files
    }
}

async fn cleanup_uploads(upload: &PembinaUpload) {
    for f in upload.uploaded_files() {
        delete_upload_file(&f).await;
    }
}

async fn read_pembina_multipart(mut multipart: Multipart) -> Result<PembinaUpload, Error> {
    let mut upload = PembinaUpload::default();

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
            "file_sk" | "file_kta" => {
                if let Some(orig) = filename {
                    let rel = save_upload_file(field, UPLOAD_AREA, Some(orig)).await?;
                    if field_name == "file_sk" {
                        upload.file_sk = Some(rel);
                    } else {
                        upload.file_kta = Some(rel);
                    }
                } else {
                    drain_field(field).await?;
                }
            }
            "file_ijazah_kursus" | "foto_pelantikan" | "berkas_lain" => {
                if let Some(orig) = filename {
                    let (list, cap) = match field_name.as_str() {
                        "file_ijazah_kursus" => {
                            (&mut upload.file_ijazah_kursus, MAX_IJAZAH_KURSUS)
                        }
                        "foto_pelantikan" => (&mut upload.foto_pelantikan, MAX_FOTO_PELANTIKAN),
                        _ => (&mut upload.berkas_lain, MAX_BERKAS_LAIN),
                    };
                    if list.len() >= cap {
                        cleanup_uploads(&upload).await;
                        return Err(actix_web::error::ErrorBadRequest(format!(
                            "Maksimal {} file untuk {}",
                            cap, field_name
                        )));
                    }
                    let rel = save_upload_file(field, UPLOAD_AREA, Some(orig)).await?;
                    list.push(rel);
                } else {
                    drain_field(field).await?;
                }
            }
            _ => {
                let val = read_text_field(field, &field_name).await?;
                match field_name.as_str() {
                    "nama_lengkap" => upload.nama_lengkap = Some(val),
                    "jabatan" => upload.jabatan = Some(val),
                    "npa" => upload.npa = Some(val),
                    "kursus" => upload.kursus = Some(val),
                    "no_telepon" => upload.no_telepon = Some(val),
                    "email" => upload.email = Some(val),
                    "alamat" => upload.alamat = Some(val),
                    _ => {}
                }
            }
        }
    }

    Ok(upload)
}

fn validate_options(jabatan: &str, kursus: &str) -> Result<(), Error> {
    if !JABATAN_OPTIONS.contains(&jabatan) {
        return Err(actix_web::error::ErrorBadRequest("jabatan tidak valid"));
    }
    if !KURSUS_OPTIONS.contains(&kursus) {
        return Err(actix_web::error::ErrorBadRequest("kursus tidak valid"));
    }
    Ok(())
}

#[get("/api/pembina")]
pub async fn list_pembina(
    req: HttpRequest,
    pool: web::Data<MySqlPool>,
) -> Result<impl Responder, Error> {
    auth::verify_jwt(&req)?;

    let rows = sqlx::query_as::<_, Pembina>(&format!(
        "SELECT {} FROM data_pembina ORDER BY created_at DESC",
        SELECT_COLS
    ))
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        log::error!("Gagal mengambil data pembina: {:?}", e);
        actix_web::error::ErrorInternalServerError("Gagal mengambil data pembina")
    })?;

    Ok(HttpResponse::Ok().json(json!({ "status": "success", "data": rows })))
}

#[get("/api/pembina/{id}")]
pub async fn get_pembina(
    req: HttpRequest,
    pool: web::Data<MySqlPool>,
    path: web::Path<i64>,
) -> Result<impl Responder, Error> {
    auth::verify_jwt(&req)?;
    let id = path.into_inner();

    let pembina = fetch_pembina(pool.get_ref(), id).await?;
    Ok(HttpResponse::Ok().json(json!({ "status": "success", "data": pembina })))
}

async fn fetch_pembina(pool: &MySqlPool, id: i64) -> Result<Pembina, Error> {
    sqlx::query_as::<_, Pembina>(&format!(
        "SELECT {} FROM data_pembina WHERE id = ?",
        SELECT_COLS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|e| {
        log::error!("Gagal mengambil pembina {}: {:?}", id, e);
        actix_web::error::ErrorInternalServerError("Gagal mengambil data pembina")
    })?
    .ok_or_else(|| actix_web::error::ErrorNotFound("Pembina tidak ditemukan"))
}

#[post("/api/pembina")]
pub async fn create_pembina(
    req: HttpRequest,
    pool: web::Data<MySqlPool>,
    multipart: Multipart,
) -> Result<impl Responder, Error> {
    auth::verify_jwt(&req)?;

    let upload = read_pembina_multipart(multipart).await?;

    let nama_lengkap = match upload.nama_lengkap.clone().filter(|s| !s.is_empty()) {
        Some(v) => v,
        None => {
            cleanup_uploads(&upload).await;
            return Err(actix_web::error::ErrorBadRequest("nama_lengkap wajib diisi"));
        }
    };
    let jabatan = upload.jabatan.clone().unwrap_or_default();
    let kursus = upload.kursus.clone().unwrap_or_else(|| "Belum".to_string());
    if let Err(e) = validate_options(&jabatan, &kursus) {
        cleanup_uploads(&upload).await;
        return Err(e);
    }

    let result = sqlx::query(
        "INSERT INTO data_pembina \
         (nama_lengkap, jabatan, npa, kursus, no_telepon, email, alamat, \
          file_sk, file_kta, file_ijazah_kursus, foto_pelantikan, berkas_lain, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, NOW())",
    )
    .bind(&nama_lengkap)
    .bind(&jabatan)
    .bind(upload.npa.clone().unwrap_or_default())
    .bind(&kursus)
    .bind(upload.no_telepon.clone().unwrap_or_default())
    .bind(upload.email.clone().unwrap_or_default())
    .bind(upload.alamat.clone().unwrap_or_default())
    .bind(&upload.file_sk)
    .bind(&upload.file_kta)
    .bind(Json(&upload.file_ijazah_kursus))
    .bind(Json(&upload.foto_pelantikan))
    .bind(Json(&upload.berkas_lain))
    .execute(pool.get_ref())
    .await;

    match result {
        Ok(result) => Ok(HttpResponse::Created().json(json!({
            "status": "success",
            "message": "Pembina berhasil ditambahkan",
            "data": { "id": result.last_insert_id() }
        }))),
        Err(e) => {
            log::error!("Gagal menambah pembina: {:?}", e);
            cleanup_uploads(&upload).await;
            Err(actix_web::error::ErrorInternalServerError(
                "Gagal menambah pembina",
            ))
        }
    }
}

#[put("/api/pembina/{id}")]
pub async fn update_pembina(
    req: HttpRequest,
    pool: web::Data<MySqlPool>,
    path: web::Path<i64>,
    multipart: Multipart,
) -> Result<impl Responder, Error> {
    auth::verify_jwt(&req)?;
    let id = path.into_inner();

    let old = fetch_pembina(pool.get_ref(), id).await?;
    let upload = read_pembina_multipart(multipart).await?;

    let nama_lengkap = upload
        .nama_lengkap
        .clone()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| old.nama_lengkap.clone());
    let jabatan = upload
        .jabatan
        .clone()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| old.jabatan.clone());
    let kursus = upload
        .kursus
        .clone()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| old.kursus.clone());
    if let Err(e) = validate_options(&jabatan, &kursus) {
        cleanup_uploads(&upload).await;
        return Err(e);
    }

    // File tunggal baru menggantikan yang lama; daftar file baru ditambahkan
    // ke daftar lama sampai batasnya.
    let file_sk = upload.file_sk.clone().or_else(|| old.file_sk.clone());
    let file_kta = upload.file_kta.clone().or_else(|| old.file_kta.clone());

    let merge = |old_list: &Option<Json<Vec<String>>>, new: &[String], cap: usize, label: &str| {
        let mut list = old_list.as_ref().map(|j| j.0.clone()).unwrap_or_default();
        list.extend(new.iter().cloned());
        if list.len() > cap {
            Err(actix_web::error::ErrorBadRequest(format!(
                "Maksimal {} file untuk {}",
                cap, label
            )))
        } else {
            Ok(list)
        }
    };
    let ijazah = merge(
        &old.file_ijazah_kursus,
        &upload.file_ijazah_kursus,
        MAX_IJAZAH_KURSUS,
        "file_ijazah_kursus",
    );
    let foto = merge(
        &old.foto_pelantikan,
        &upload.foto_pelantikan,
        MAX_FOTO_PELANTIKAN,
        "foto_pelantikan",
    );
    let berkas = merge(
        &old.berkas_lain,
        &upload.berkas_lain,
        MAX_BERKAS_LAIN,
        "berkas_lain",
    );
    let (ijazah, foto, berkas) = match (ijazah, foto, berkas) {
        (Ok(a), Ok(b), Ok(c)) => (a, b, c),
        (a, b, c) => {
            cleanup_uploads(&upload).await;
            return Err(a.err().or(b.err()).or(c.err()).unwrap_or_else(|| {
                actix_web::error::ErrorBadRequest("Jumlah file melebihi batas")
            }));
        }
    };

    let result = sqlx::query(
        "UPDATE data_pembina SET nama_lengkap = ?, jabatan = ?, npa = ?, kursus = ?, \
         no_telepon = ?, email = ?, alamat = ?, file_sk = ?, file_kta = ?, \
         file_ijazah_kursus = ?, foto_pelantikan = ?, berkas_lain = ? WHERE id = ?",
    )
    .bind(&nama_lengkap)
    .bind(&jabatan)
    .bind(upload.npa.clone().unwrap_or(old.npa.clone()))
    .bind(&kursus)
    .bind(upload.no_telepon.clone().unwrap_or(old.no_telepon.clone()))
    .bind(upload.email.clone().unwrap_or(old.email.clone()))
    .bind(upload.alamat.clone().unwrap_or(old.alamat.clone()))
    .bind(&file_sk)
    .bind(&file_kta)
    .bind(Json(&ijazah))
    .bind(Json(&foto))
    .bind(Json(&berkas))
    .bind(id)
    .execute(pool.get_ref())
    .await;

    match result {
        Ok(_) => {
            // File tunggal lama yang tergantikan dihapus setelah update sukses
            if upload.file_sk.is_some() {
                if let Some(old_sk) = &old.file_sk {
                    delete_upload_file(old_sk).await;
                }
            }
            if upload.file_kta.is_some() {
                if let Some(old_kta) = &old.file_kta {
                    delete_upload_file(old_kta).await;
                }
            }
            Ok(HttpResponse::Ok().json(json!({
                "status": "success",
                "message": "Pembina berhasil diperbarui"
            })))
        }
        Err(e) => {
            log::error!("Gagal update pembina {}: {:?}", id, e);
            cleanup_uploads(&upload).await;
            Err(actix_web::error::ErrorInternalServerError(
                "Gagal memperbarui pembina",
            ))
        }
    }
}

#[delete("/api/pembina/{id}")]
pub async fn delete_pembina(
    req: HttpRequest,
    pool: web::Data<MySqlPool>,
    path: web::Path<i64>,
) -> Result<impl Responder, Error> {
    auth::verify_jwt(&req)?;
    let id = path.into_inner();

    let pembina = fetch_pembina(pool.get_ref(), id).await?;

    let result = sqlx::query("DELETE FROM data_pembina WHERE id = ?")
        .bind(id)
        .execute(pool.get_ref())
        .await
        .map_err(|e| {
            log::error!("Gagal hapus pembina {}: {:?}", id, e);
            actix_web::error::ErrorInternalServerError("Gagal menghapus pembina")
        })?;

    if result.rows_affected() == 0 {
        return Err(actix_web::error::ErrorNotFound("Pembina tidak ditemukan"));
    }

    for f in pembina.semua_file() {
        delete_upload_file(&f).await;
    }

    Ok(HttpResponse::Ok().json(json!({
        "status": "success",
        "message": "Pembina dan berkasnya berhasil dihapus"
    })))
}
