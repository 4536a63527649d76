use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

pub const MAX_FOTO_KEGIATAN: usize = 5;

pub const JENIS_SIAGA: &[&str] = &[
    "Latihan Rutin",
    "Perkemahan Sehari (Persari)",
    "Pesta Siaga",
    "Hiking",
    "Lomba",
    "Upacara",
    "Permainan Besar",
    "Karnaval",
    "Lainnya",
];

pub const JENIS_PENGGALANG: &[&str] = &[
    "Latihan",
    "Perkemahan",
    "Hiking",
    "Lomba",
    "Upacara",
    "Pertemuan",
    "Lainnya",
];

pub const JENIS_PARTISIPASI: &[&str] = &["Lomba Tingkat", "Jambore", "Kegiatan Kwartir"];

/// Daftar jenis kegiatan yang sah untuk sebuah kategori.
pub fn jenis_options(kategori: &str) -> Option<&'static [&'static str]> {
    match kategori {
        "Siaga" => Some(JENIS_SIAGA),
        "Penggalang" => Some(JENIS_PENGGALANG),
        "Partisipasi" => Some(JENIS_PARTISIPASI),
        _ => None,
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Kegiatan {
    pub id: i64,
    pub nama_kegiatan: String,
    pub tanggal: Option<NaiveDate>,
    pub lokasi: String,
    pub kategori: String,
    pub jenis: String,
    pub peserta_hadir: i32,
    pub keterangan: Option<String>,
    pub file_proposal: Option<String>,
    pub file_laporan: Option<String>,
    pub foto_kegiatan: Option<Json<Vec<String>>>,
    pub created_at: DateTime<chrono::Local>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jenis_per_kategori() {
        assert_eq!(jenis_options("Siaga").unwrap().len(), 9);
        assert_eq!(jenis_options("Penggalang").unwrap().len(), 7);
        assert_eq!(jenis_options("Partisipasi").unwrap().len(), 3);
        assert!(jenis_options("Penegak").is_none());
    }

    #[test]
    fn jenis_siaga_tidak_berlaku_untuk_partisipasi() {
        assert!(jenis_options("Siaga").unwrap().contains(&"Pesta Siaga"));
        assert!(!jenis_options("Partisipasi")
            .unwrap()
            .contains(&"Pesta Siaga"));
    }
}
