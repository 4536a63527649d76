pub mod auth_controller;
pub mod kegiatan_controller;
pub mod kemitraan_controller;
pub mod pembina_controller;
pub mod peserta_controller;
pub mod presensi_controller;
pub mod preview;
pub mod sku_controller;
pub mod surat_controller;
pub mod tkk_controller;
