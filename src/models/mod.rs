pub mod kegiatan;
pub mod kemitraan;
pub mod pembina;
pub mod peserta;
pub mod presensi;
pub mod progress;
pub mod sertifikat;
pub mod user;
