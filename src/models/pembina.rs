use chrono::DateTime;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

pub const JABATAN_OPTIONS: &[&str] = &["Mabigus", "Pembina Siaga", "Pembina Penggalang"];
pub const KURSUS_OPTIONS: &[&str] = &["Belum", "KMD", "KML", "KPD", "KPL"];

pub const MAX_IJAZAH_KURSUS: usize = 4;
pub const MAX_FOTO_PELANTIKAN: usize = 5;
pub const MAX_BERKAS_LAIN: usize = 5;

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Pembina {
    pub id: i64,
    pub nama_lengkap: String,
    pub jabatan: String,
    pub npa: String,
    pub kursus: String,
    pub no_telepon: String,
    pub email: String,
    pub alamat: String,
    pub file_sk: Option<String>,
    pub file_kta: Option<String>,
    pub file_ijazah_kursus: Option<Json<Vec<String>>>,
    pub foto_pelantikan: Option<Json<Vec<String>>>,
    pub berkas_lain: Option<Json<Vec<String>>>,
    pub created_at: DateTime<chrono::Local>,
}

impl Pembina {
    /// Semua path file milik baris ini, untuk pembersihan saat hapus.
    pub fn semua_file(&self) -> Vec<String> {
        let mut files = Vec::new();
        if let Some(f) = &self.file_sk {
            files.push(f.clone());
        }
        if let Some(f) = &self.file_kta {
            files.push(f.clone());
        }
        for list in [
            &self.file_ijazah_kursus,
            &self.foto_pelantikan,
            &self.berkas_lain,
        ]
        .into_iter()
        .flatten()
        {
            files.extend(list.0.iter().cloned());
        }
        files
    }
}
