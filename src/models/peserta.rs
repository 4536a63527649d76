use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct PesertaDidik {
    pub id: i64,
    pub nama_lengkap: String,
    pub golongan: String,
    pub kelas: String,
    pub tahun_masuk: i32,
    pub no_induk: String,
    pub alamat: String,
    pub tempat_lahir: Option<String>,
    pub tanggal_lahir: Option<NaiveDate>,
    pub barung: Option<String>,
    pub regu: Option<String>,
    pub created_at: DateTime<chrono::Local>,
}

#[derive(Debug, Deserialize)]
pub struct PesertaForm {
    pub nama_lengkap: String,
    pub golongan: String,
    pub kelas: String,
    pub tahun_masuk: i32,
    pub no_induk: String,
    pub alamat: String,
    pub tempat_lahir: Option<String>,
    pub tanggal_lahir: Option<NaiveDate>,
    pub barung: Option<String>,
    pub regu: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PesertaFilter {
    pub golongan: Option<String>,
    pub nama: Option<String>,
}
