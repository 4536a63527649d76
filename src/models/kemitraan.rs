use chrono::DateTime;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

pub const MAX_FOTO_KEMITRAAN: usize = 5;

pub const JENIS_PELIBATAN_ORTU: &str = "Pelibatan Orang Tua dalam Kegiatan";
pub const JENIS_BANTUAN_SARANA: &str = "Bantuan Sarana dan Prasarana";
pub const JENIS_KERJASAMA_INSTANSI: &str = "Kerjasama Kegiatan dengan Instansi Lain";

pub const JENIS_KEMITRAAN_OPTIONS: &[&str] = &[
    JENIS_PELIBATAN_ORTU,
    JENIS_BANTUAN_SARANA,
    JENIS_KERJASAMA_INSTANSI,
];

pub const SUB_KATEGORI_PELIBATAN_ORTU: &[&str] = &[
    "Pendampingan Kegiatan",
    "Narasumber Latihan",
    "Konsumsi Kegiatan",
];

pub const SUB_KATEGORI_BANTUAN_SARANA: &[&str] = &[
    "Peralatan Latihan",
    "Perlengkapan Perkemahan",
    "Dana Kegiatan",
];

/// Validasi pasangan field kondisional sebuah jenis kemitraan.
/// Dua jenis pertama memakai sub kategori, jenis kerjasama instansi
/// memakai jumlah kegiatan; keduanya saling eksklusif.
pub fn validate_conditional_fields(
    jenis_kemitraan: &str,
    sub_kategori: Option<&str>,
    jumlah_kegiatan: Option<i32>,
) -> Result<(), String> {
    match jenis_kemitraan {
        JENIS_PELIBATAN_ORTU | JENIS_BANTUAN_SARANA => {
            if jumlah_kegiatan.is_some() {
                return Err(format!(
                    "Jumlah kegiatan tidak berlaku untuk jenis {}",
                    jenis_kemitraan
                ));
            }
            match sub_kategori {
                Some(s) if !s.is_empty() => Ok(()),
                _ => Err("Sub kategori wajib diisi".to_string()),
            }
        }
        JENIS_KERJASAMA_INSTANSI => {
            if sub_kategori.is_some_and(|s| !s.is_empty()) {
                return Err(format!(
                    "Sub kategori tidak berlaku untuk jenis {}",
                    jenis_kemitraan
                ));
            }
            match jumlah_kegiatan {
                Some(n) if n > 0 => Ok(()),
                _ => Err("Jumlah kegiatan wajib diisi".to_string()),
            }
        }
        _ => Err("Jenis kemitraan tidak dikenal".to_string()),
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Kemitraan {
    pub id: i64,
    pub nama_mitra: String,
    pub jenis_kemitraan: String,
    pub sub_kategori: Option<String>,
    pub jumlah_kegiatan: Option<i32>,
    pub kontak: String,
    pub email: String,
    pub alamat: String,
    pub keterangan: Option<String>,
    pub file_dokumen: Option<String>,
    pub foto_kemitraan: Option<Json<Vec<String>>>,
    pub created_at: DateTime<chrono::Local>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kerjasama_instansi_wajib_jumlah_kegiatan() {
        assert!(validate_conditional_fields(JENIS_KERJASAMA_INSTANSI, None, Some(3)).is_ok());
        assert!(validate_conditional_fields(JENIS_KERJASAMA_INSTANSI, None, None).is_err());
        assert!(
            validate_conditional_fields(JENIS_KERJASAMA_INSTANSI, Some("Dana Kegiatan"), Some(3))
                .is_err()
        );
    }

    #[test]
    fn jenis_lain_wajib_sub_kategori() {
        assert!(
            validate_conditional_fields(JENIS_PELIBATAN_ORTU, Some("Narasumber Latihan"), None)
                .is_ok()
        );
        assert!(validate_conditional_fields(JENIS_BANTUAN_SARANA, None, None).is_err());
        assert!(validate_conditional_fields(
            JENIS_BANTUAN_SARANA,
            Some("Peralatan Latihan"),
            Some(2)
        )
        .is_err());
    }

    #[test]
    fn jenis_tidak_dikenal_ditolak() {
        assert!(validate_conditional_fields("Sponsor", Some("x"), None).is_err());
    }
}
