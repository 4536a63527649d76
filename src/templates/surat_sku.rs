//! Surat keterangan lulus SKU: satu halaman A4 portrait di atas gambar
//! latar kop surat `surat-sku.png`.

use super::{format_tanggal, html_escape};

pub struct SuratSkuParams {
    pub kode_gudep: String,
    pub nomor_surat: String,
    pub nama_peserta: String,
    pub tempat_lahir: String,
    pub tanggal_lahir: String,
    pub golongan: String,
    pub tingkat_sku: String,
    pub nama_hari_pelantikan: String,
    pub tanggal_pelantikan: String,
    pub tempat_terbit: String,
    pub tanggal_terbit: String,
    pub nama_pembina: String,
    pub nip_pembina: String,
}

pub fn generate_surat_sku_html(p: &SuratSkuParams) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <title>Surat Keterangan Lulus SKU - {nama_peserta}</title>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <style>
      @page {{ size: A4 portrait; margin: 0; }}
      * {{ margin: 0; padding: 0; box-sizing: border-box; }}
      body {{
        font-family: 'Times New Roman', serif;
        background: #ffffff;
        color: #000000;
        margin: 0;
        padding: 0;
      }}
      .page-container {{
        width: 210mm;
        height: 297mm;
        position: relative;
        margin: 0 auto;
        background-color: #ffffff;
        background-image: url('/surat-sku.png');
        background-size: 100% 100%;
        background-position: center;
        background-repeat: no-repeat;
        -webkit-print-color-adjust: exact;
        print-color-adjust: exact;
      }}
      .content-overlay {{ position: absolute; width: 100%; height: 100%; padding: 0; }}
      .judul {{
        position: absolute;
        top: 58mm;
        left: 50%;
        transform: translateX(-50%);
        font-size: 18px;
        font-weight: bold;
        text-align: center;
        text-decoration: underline;
        letter-spacing: 1px;
        white-space: nowrap;
      }}
      .nomor-surat {{
        position: absolute;
        top: 66mm;
        left: 50%;
        transform: translateX(-50%);
        font-size: 14px;
        text-align: center;
      }}
      .pembuka {{
        position: absolute;
        top: 80mm;
        left: 25mm;
        right: 25mm;
        font-size: 14px;
        text-align: justify;
        line-height: 1.6;
      }}
      .data-row {{ position: absolute; left: 35mm; font-size: 14px; display: flex; }}
      .data-label {{ width: 150px; display: inline-block; }}
      .data-colon {{ width: 20px; display: inline-block; }}
      .data-value {{ font-weight: bold; display: inline-block; }}
      .nama-row {{ top: 96mm; }}
      .ttl-row {{ top: 103mm; }}
      .golongan-row {{ top: 110mm; }}
      .isi {{
        position: absolute;
        top: 122mm;
        left: 25mm;
        right: 25mm;
        font-size: 14px;
        text-align: justify;
        line-height: 1.6;
      }}
      .penutup {{
        position: absolute;
        top: 150mm;
        left: 25mm;
        right: 25mm;
        font-size: 14px;
        text-align: justify;
        line-height: 1.6;
      }}
      .tempat-tanggal {{
        position: absolute;
        top: 170mm;
        right: 25mm;
        font-size: 14px;
        text-align: center;
      }}
      .jabatan {{
        position: absolute;
        top: 177mm;
        right: 25mm;
        font-size: 14px;
        text-align: center;
      }}
      .nama-pembina {{
        position: absolute;
        top: 202mm;
        right: 25mm;
        font-size: 14px;
        font-weight: bold;
        text-align: center;
        text-decoration: underline;
      }}
      .nip-pembina {{
        position: absolute;
        top: 208mm;
        right: 25mm;
        font-size: 14px;
        text-align: center;
      }}
      strong {{ font-weight: bold; }}
      @media print {{
        body {{ margin: 0; padding: 0; }}
        .page-container {{ page-break-after: avoid; }}
      }}
    </style>
  </head>
  <body>
    <div class="page-container">
      <div class="content-overlay">
        <div class="judul">SURAT KETERANGAN LULUS SYARAT KECAKAPAN UMUM</div>
        <div class="nomor-surat">Nomor: {nomor_surat}</div>
        <div class="pembuka">
          Yang bertanda tangan di bawah ini Pembina Gugus Depan 11.02.06.{kode_gudep} menerangkan bahwa:
        </div>
        <div class="data-row nama-row">
          <span class="data-label">Nama</span>
          <span class="data-colon">:</span>
          <span class="data-value">{nama_upper}</span>
        </div>
        <div class="data-row ttl-row">
          <span class="data-label">Tempat, Tgl. Lahir</span>
          <span class="data-colon">:</span>
          <span class="data-value">{tempat_lahir}, {tanggal_lahir_fmt}</span>
        </div>
        <div class="data-row golongan-row">
          <span class="data-label">Golongan</span>
          <span class="data-colon">:</span>
          <span class="data-value">{golongan}</span>
        </div>
        <div class="isi">
          telah menyelesaikan seluruh butir Syarat Kecakapan Umum dan dinyatakan <strong>LULUS SKU {golongan} Tingkat {tingkat_sku}</strong>, serta akan dilantik pada hari <strong>{nama_hari_pelantikan}</strong>, tanggal <strong>{tanggal_pelantikan_fmt}</strong>.
        </div>
        <div class="penutup">
          Demikian surat keterangan ini dibuat untuk dapat dipergunakan sebagaimana mestinya.
        </div>
        <div class="tempat-tanggal">{tempat_terbit}, {tanggal_terbit_fmt}</div>
        <div class="jabatan">Pembina Gugus Depan,</div>
        <div class="nama-pembina">{nama_pembina}</div>
        <div class="nip-pembina">NIP. {nip_pembina}</div>
      </div>
    </div>
  </body>
</html>
"#,
        nama_peserta = html_escape(&p.nama_peserta),
        nomor_surat = html_escape(&p.nomor_surat),
        kode_gudep = html_escape(&p.kode_gudep),
        nama_upper = html_escape(&p.nama_peserta.to_uppercase()),
        tempat_lahir = html_escape(&p.tempat_lahir),
        tanggal_lahir_fmt = format_tanggal(&p.tanggal_lahir),
        golongan = html_escape(&p.golongan),
        tingkat_sku = html_escape(&p.tingkat_sku),
        nama_hari_pelantikan = html_escape(&p.nama_hari_pelantikan),
        tanggal_pelantikan_fmt = format_tanggal(&p.tanggal_pelantikan),
        tempat_terbit = html_escape(&p.tempat_terbit),
        tanggal_terbit_fmt = format_tanggal(&p.tanggal_terbit),
        nama_pembina = html_escape(&p.nama_pembina),
        nip_pembina = html_escape(&p.nip_pembina),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contoh() -> SuratSkuParams {
        SuratSkuParams {
            kode_gudep: "0365".into(),
            nomor_surat: "021/11.02.06.0365/XII/2023".into(),
            nama_peserta: "Ani Lestari".into(),
            tempat_lahir: "Purbalingga".into(),
            tanggal_lahir: "2014-01-05".into(),
            golongan: "Siaga".into(),
            tingkat_sku: "Mula".into(),
            nama_hari_pelantikan: "Jumat".into(),
            tanggal_pelantikan: "2023-12-15".into(),
            tempat_terbit: "Purbalingga".into(),
            tanggal_terbit: "2023-12-10".into(),
            nama_pembina: "Rahmat Hidayat, S.Pd.".into(),
            nip_pembina: "19800101 200501 1 001".into(),
        }
    }

    #[test]
    fn surat_memuat_data_inti() {
        let html = generate_surat_sku_html(&contoh());
        assert!(html.contains("SURAT KETERANGAN LULUS SYARAT KECAKAPAN UMUM"));
        assert!(html.contains("Nomor: 021/11.02.06.0365/XII/2023"));
        assert!(html.contains("ANI LESTARI"));
        assert!(html.contains("Gugus Depan 11.02.06.0365"));
        assert!(html.contains("LULUS SKU Siaga Tingkat Mula"));
        assert!(html.contains("hari <strong>Jumat</strong>"));
        assert!(html.contains("Purbalingga, 5 Januari 2014"));
        assert!(html.contains("size: A4 portrait"));
        assert!(html.contains("url('/surat-sku.png')"));
    }
}
