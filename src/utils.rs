use actix_multipart::Field;
use actix_web::Error;
use bytes::BytesMut;
use chrono::NaiveDate;
use futures::TryStreamExt;
use sanitize_filename::sanitize;
use std::path::Path;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

/// Simpan satu field multipart ke disk di bawah `uploads/<area>/`.
/// Nama file diberi prefix UUID supaya unik dan tidak saling timpa.
pub async fn save_upload_file(
    mut field: Field,
    area: &str,
    original_filename: Option<String>,
) -> Result<String, Error> {
    let dir = Path::new("uploads").join(area);
    if !dir.exists() {
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(actix_web::error::ErrorInternalServerError)?;
    }

    let base = original_filename
        .as_deref()
        .map(sanitize)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "berkas".to_string());
    let filename = format!("{}_{}", Uuid::new_v4(), base.replace(' ', "_"));
    let filepath = dir.join(&filename);

    let mut f = tokio::fs::File::create(&filepath)
        .await
        .map_err(actix_web::error::ErrorInternalServerError)?;

    while let Some(chunk) = field
        .try_next()
        .await
        .map_err(actix_web::error::ErrorBadRequest)?
    {
        f.write_all(&chunk)
            .await
            .map_err(actix_web::error::ErrorInternalServerError)?;
    }

    Ok(format!("uploads/{}/{}", area, filename))
}

/// Baca field teks multipart menjadi String. Nilai "null" dari form
/// dikonversi menjadi string kosong, sama seperti perlakuan form lama.
pub async fn read_text_field(mut field: Field, field_name: &str) -> Result<String, Error> {
    let mut data = BytesMut::new();
    while let Some(chunk) = field
        .try_next()
        .await
        .map_err(actix_web::error::ErrorBadRequest)?
    {
        data.extend_from_slice(&chunk);
    }

    let val = String::from_utf8(data.to_vec()).map_err(|_| {
        actix_web::error::ErrorBadRequest(format!("{} bukan UTF-8 valid", field_name))
    })?;
    let val = val.trim().to_string();
    if val.eq_ignore_ascii_case("null") {
        Ok(String::new())
    } else {
        Ok(val)
    }
}

/// Habiskan sisa field tanpa menyimpan apa pun.
pub async fn drain_field(mut field: Field) -> Result<(), Error> {
    while let Some(_chunk) = field
        .try_next()
        .await
        .map_err(actix_web::error::ErrorBadRequest)?
    {}
    Ok(())
}

/// Hapus file upload lama, best effort. Kegagalan hanya dicatat di log.
pub async fn delete_upload_file(rel_path: &str) {
    if rel_path.is_empty() {
        return;
    }
    let path = Path::new(rel_path);
    if path.exists() {
        if let Err(e) = tokio::fs::remove_file(path).await {
            log::warn!("Gagal menghapus file {}: {}", rel_path, e);
        }
    }
}

/// Parse tanggal format YYYY-MM-DD; string kosong dianggap tidak diisi.
pub fn parse_date_opt(val: &str, field_name: &str) -> Result<Option<NaiveDate>, Error> {
    if val.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(val, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| {
            actix_web::error::ErrorBadRequest(format!(
                "Format {} tidak valid. Gunakan YYYY-MM-DD",
                field_name
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_opt_kosong_jadi_none() {
        assert_eq!(parse_date_opt("", "tanggal").unwrap(), None);
    }

    #[test]
    fn parse_date_opt_valid() {
        let d = parse_date_opt("2024-08-17", "tanggal").unwrap().unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 8, 17).unwrap());
    }

    #[test]
    fn parse_date_opt_format_salah() {
        assert!(parse_date_opt("17/08/2024", "tanggal").is_err());
    }
}
