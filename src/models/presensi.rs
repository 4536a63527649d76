use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const KEHADIRAN_OPTIONS: &[&str] = &["Hadir", "Izin", "Sakit", "Alpa"];

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Presensi {
    pub id: i64,
    pub nama_lengkap: String,
    pub golongan: String,
    pub kelas: String,
    pub kehadiran: String,
    pub catatan: Option<String>,
    pub tanggal_latihan: Option<NaiveDate>,
    pub created_at: DateTime<chrono::Local>,
}

#[derive(Debug, Deserialize)]
pub struct PresensiForm {
    pub nama_lengkap: String,
    pub golongan: String,
    pub kelas: String,
    pub kehadiran: String,
    pub catatan: Option<String>,
}

/// Satu baris daftar hadir yang dikirim dari layar roster.
#[derive(Debug, Deserialize)]
pub struct RosterEntry {
    pub nama_lengkap: String,
    pub kelas: String,
    /// Label UI: "Hadir" atau "Tidak Hadir".
    pub kehadiran: String,
}

#[derive(Debug, Deserialize)]
pub struct RosterForm {
    pub tanggal_latihan: NaiveDate,
    pub golongan: String,
    pub entries: Vec<RosterEntry>,
}

#[derive(Debug, Deserialize)]
pub struct RosterQuery {
    pub tanggal: NaiveDate,
    pub golongan: String,
}
