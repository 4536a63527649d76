use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const STATUS_LULUS: &str = "lulus";
pub const STATUS_BELUM: &str = "belum";

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct SkuProgress {
    pub id: i64,
    pub peserta_id: i64,
    pub jenis_sku: String,
    pub syarat_nomor: i32,
    pub status: String,
    pub tanggal_uji: Option<NaiveDate>,
    pub pembina_penguji: Option<String>,
    pub agama_dipilih: Option<String>,
}

/// Satu baris progres yang dikirim dari layar uji SKU.
#[derive(Debug, Clone, Deserialize)]
pub struct SkuProgressEntry {
    pub syarat_nomor: i32,
    pub status: String,
    pub tanggal_uji: Option<NaiveDate>,
    pub pembina_penguji: Option<String>,
    pub agama_dipilih: Option<String>,
}

impl SkuProgressEntry {
    /// Baris yang tidak lulus tidak boleh membawa tanggal/pembina/agama,
    /// apa pun yang dikirim klien.
    pub fn scrubbed(mut self) -> Self {
        if self.status != STATUS_LULUS {
            self.tanggal_uji = None;
            self.pembina_penguji = None;
            self.agama_dipilih = None;
        }
        self
    }
}

#[derive(Debug, Deserialize)]
pub struct SkuProgressForm {
    pub peserta_id: i64,
    pub jenis_sku: String,
    pub entries: Vec<SkuProgressEntry>,
}

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct TkkProgress {
    pub id: i64,
    pub peserta_id: i64,
    pub tkk_id: String,
    pub jenis: String,
    pub status: String,
    pub tanggal_uji: Option<NaiveDate>,
    pub pembina_penguji: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TkkProgressEntry {
    pub tkk_id: String,
    pub status: String,
    pub tanggal_uji: Option<NaiveDate>,
    pub pembina_penguji: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TkkProgressForm {
    pub peserta_id: i64,
    pub entries: Vec<TkkProgressEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrub_baris_belum_lulus() {
        let entry = SkuProgressEntry {
            syarat_nomor: 5,
            status: STATUS_BELUM.to_string(),
            tanggal_uji: NaiveDate::from_ymd_opt(2024, 8, 17),
            pembina_penguji: Some("Kak Siti".to_string()),
            agama_dipilih: Some("Islam".to_string()),
        }
        .scrubbed();
        assert!(entry.tanggal_uji.is_none());
        assert!(entry.pembina_penguji.is_none());
        assert!(entry.agama_dipilih.is_none());
    }

    #[test]
    fn baris_lulus_tidak_disentuh() {
        let entry = SkuProgressEntry {
            syarat_nomor: 1,
            status: STATUS_LULUS.to_string(),
            tanggal_uji: NaiveDate::from_ymd_opt(2024, 8, 17),
            pembina_penguji: Some("Kak Siti".to_string()),
            agama_dipilih: None,
        }
        .scrubbed();
        assert!(entry.tanggal_uji.is_some());
        assert_eq!(entry.pembina_penguji.as_deref(), Some("Kak Siti"));
    }
}
