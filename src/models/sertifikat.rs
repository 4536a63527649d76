use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Snapshot surat lulus SKU, di-upsert setiap kali surat dicetak supaya
/// cetak ulang menghasilkan dokumen yang sama.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct SuratLulusSku {
    pub id: i64,
    pub peserta_id: i64,
    pub jenis_sku: String,
    pub nomor_surat: String,
    pub tempat_lahir: String,
    pub tanggal_lahir: Option<NaiveDate>,
    pub tanggal_pelantikan: Option<NaiveDate>,
    pub tempat_terbit: String,
    pub tanggal_terbit: Option<NaiveDate>,
    pub nama_pembina: String,
    pub nip_pembina: String,
}

#[derive(Debug, Deserialize)]
pub struct SuratSkuForm {
    pub peserta_id: i64,
    pub jenis_sku: String,
    pub nomor_surat: String,
    pub tempat_lahir: String,
    pub tanggal_lahir: Option<NaiveDate>,
    pub tanggal_pelantikan: Option<NaiveDate>,
    pub tempat_terbit: String,
    pub tanggal_terbit: Option<NaiveDate>,
    pub nama_pembina: String,
    pub nip_pembina: String,
}

/// Snapshot sertifikat SKK per (peserta, tkk).
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct SertifikatSkk {
    pub id: i64,
    pub peserta_id: i64,
    pub tkk_id: String,
    pub nomor_sertifikat: String,
    pub nama_peserta: String,
    pub tempat_lahir: String,
    pub tanggal_lahir: Option<NaiveDate>,
    pub nta: String,
    pub golongan: String,
    pub jenis_tkk: String,
    pub bidang_tkk: String,
    pub penguji: String,
    pub nta_penguji: String,
    pub tempat_terbit: String,
    pub tanggal_terbit: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct SertifikatSkkForm {
    pub peserta_id: i64,
    pub tkk_id: String,
    pub nomor_sertifikat: String,
    pub tempat_lahir: String,
    pub tanggal_lahir: Option<NaiveDate>,
    pub nta: String,
    pub penguji: String,
    pub nta_penguji: String,
    pub tempat_terbit: String,
    pub tanggal_terbit: Option<NaiveDate>,
}
