// main.rs
use actix_cors::Cors;
use actix_files::Files;
use actix_web::http::header;
use actix_web::middleware::Logger;
use actix_web::web::JsonConfig;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;

mod auth;
mod controllers;
mod db;
mod models;
mod sku_data;
mod templates;
mod utils;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("starting up...");

    let pool = match db::establish_connection().await {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Gagal inisialisasi pool database: {:?}", e);
            std::process::exit(1);
        }
    };

    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8000".to_string());
    log::info!("listening on {}", bind_addr);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin("http://localhost:3000")
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
            .supports_credentials()
            .max_age(3600);

        let json_config = JsonConfig::default()
            .limit(10 * 1024 * 1024)
            .error_handler(|err, _req| {
                log::error!("JSON payload error: {}", err);
                actix_web::error::ErrorBadRequest(format!("Payload error: {}", err))
            });

        // Upload multipart (berkas pembina/kegiatan/kemitraan) sampai 50MB
        let payload_config = web::PayloadConfig::new(50 * 1024 * 1024).limit(50 * 1024 * 1024);

        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(json_config)
            .app_data(payload_config)
            .wrap(cors)
            .wrap(Logger::default())
            .service(Files::new("/uploads", "./uploads"))
            .service(controllers::preview::preview)
            //auth
            .service(controllers::auth_controller::login)
            .service(controllers::auth_controller::logout)
            .service(controllers::auth_controller::me)
            //peserta didik
            .service(controllers::peserta_controller::list_peserta)
            .service(controllers::peserta_controller::get_peserta)
            .service(controllers::peserta_controller::create_peserta)
            .service(controllers::peserta_controller::update_peserta)
            .service(controllers::peserta_controller::delete_peserta)
            //pembina
            .service(controllers::pembina_controller::list_pembina)
            .service(controllers::pembina_controller::get_pembina)
            .service(controllers::pembina_controller::create_pembina)
            .service(controllers::pembina_controller::update_pembina)
            .service(controllers::pembina_controller::delete_pembina)
            //presensi + daftar hadir
            .service(controllers::presensi_controller::get_roster)
            .service(controllers::presensi_controller::save_roster)
            .service(controllers::presensi_controller::list_presensi)
            .service(controllers::presensi_controller::create_presensi)
            .service(controllers::presensi_controller::delete_presensi)
            //kegiatan
            .service(controllers::kegiatan_controller::list_kegiatan)
            .service(controllers::kegiatan_controller::get_kegiatan)
            .service(controllers::kegiatan_controller::create_kegiatan)
            .service(controllers::kegiatan_controller::update_kegiatan)
            .service(controllers::kegiatan_controller::delete_kegiatan)
            //kemitraan
            .service(controllers::kemitraan_controller::list_kemitraan)
            .service(controllers::kemitraan_controller::get_kemitraan)
            .service(controllers::kemitraan_controller::create_kemitraan)
            .service(controllers::kemitraan_controller::update_kemitraan)
            .service(controllers::kemitraan_controller::delete_kemitraan)
            //uji SKU & TKK
            .service(controllers::sku_controller::sku_catalog)
            .service(controllers::sku_controller::get_sku_progress)
            .service(controllers::sku_controller::save_sku_progress)
            .service(controllers::tkk_controller::tkk_catalog)
            .service(controllers::tkk_controller::get_tkk_progress)
            .service(controllers::tkk_controller::save_tkk_progress)
            //surat & sertifikat
            .service(controllers::surat_controller::cetak_surat_sku)
            .service(controllers::surat_controller::get_surat_sku)
            .service(controllers::surat_controller::cetak_sertifikat_skk)
            .service(controllers::surat_controller::get_sertifikat_skk)
    })
    .bind(bind_addr)?
    .run()
    .await
}
