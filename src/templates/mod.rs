//! Pembuatan dokumen cetak (surat lulus SKU dan piagam SKK) beserta
//! utilitas format tanggal/nomor yang dipakai keduanya.

pub mod piagam_skk;
pub mod surat_sku;

use regex::Regex;
use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate, Weekday};

const NAMA_BULAN: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Format tanggal ISO (YYYY-MM-DD) menjadi tanggal berbahasa Indonesia,
/// misal "17 Agustus 2024". String kosong menghasilkan string kosong;
/// tanggal yang tidak bisa diparse dikembalikan apa adanya.
pub fn format_tanggal(date_str: &str) -> String {
    if date_str.is_empty() {
        return String::new();
    }
    match NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        Ok(d) => format!(
            "{} {} {}",
            d.day(),
            NAMA_BULAN[d.month0() as usize],
            d.year()
        ),
        Err(_) => date_str.to_string(),
    }
}

/// Nama hari dalam bahasa Indonesia. Default "Jumat" bila tanggal kosong
/// atau tidak valid, mengikuti kebiasaan hari latihan gudep.
pub fn nama_hari(date_str: &str) -> String {
    let hari = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map(|d| match d.weekday() {
            Weekday::Sun => "Minggu",
            Weekday::Mon => "Senin",
            Weekday::Tue => "Selasa",
            Weekday::Wed => "Rabu",
            Weekday::Thu => "Kamis",
            Weekday::Fri => "Jumat",
            Weekday::Sat => "Sabtu",
        })
        .unwrap_or("Jumat");
    hari.to_string()
}

/// Ambil kode gudep dari nomor surat berformat 021/11.02.06.0365/XII/2023.
/// Bila tidak ditemukan, pakai kode gudep sendiri "0365".
pub fn extract_kode_gudep(nomor_surat: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"11\.02\.06\.(\d+)").unwrap());
    re.captures(nomor_surat)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| "0365".to_string())
}

/// Nomor sertifikat SKK: 01/TKK-PSB/11.02.06.0365/2024
pub fn generate_nomor_sertifikat_skk(urutan: u32, kode_gudep: &str, tahun: i32) -> String {
    format!("{:02}/TKK-PSB/11.02.06.{}/{}", urutan, kode_gudep, tahun)
}

/// Escape minimal untuk nilai yang disisipkan ke HTML.
pub(crate) fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_tanggal_indonesia() {
        assert_eq!(format_tanggal("2024-08-17"), "17 Agustus 2024");
        assert_eq!(format_tanggal("2026-01-01"), "1 Januari 2026");
        assert_eq!(format_tanggal(""), "");
    }

    #[test]
    fn nama_hari_default_jumat() {
        assert_eq!(nama_hari("2024-08-17"), "Sabtu");
        assert_eq!(nama_hari(""), "Jumat");
        assert_eq!(nama_hari("bukan-tanggal"), "Jumat");
    }

    #[test]
    fn kode_gudep_dari_nomor_surat() {
        assert_eq!(extract_kode_gudep("021/11.02.06.0365/XII/2023"), "0365");
        assert_eq!(extract_kode_gudep("05/11.02.06.1234/I/2024"), "1234");
        assert_eq!(extract_kode_gudep("nomor tanpa kode"), "0365");
    }

    #[test]
    fn nomor_sertifikat_skk() {
        assert_eq!(
            generate_nomor_sertifikat_skk(1, "0365", 2024),
            "01/TKK-PSB/11.02.06.0365/2024"
        );
        assert_eq!(
            generate_nomor_sertifikat_skk(12, "0365", 2025),
            "12/TKK-PSB/11.02.06.0365/2025"
        );
    }

    #[test]
    fn escape_html() {
        assert_eq!(html_escape("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }
}
