//! Piagam/sertifikat SKK: satu halaman A4 landscape di atas gambar latar
//! `skk.png`, semua elemen diposisikan absolut dalam milimeter.

use super::{format_tanggal, html_escape};

pub struct PiagamSkkParams {
    pub nomor_sertifikat: String,
    pub nama_peserta: String,
    pub tempat_lahir: String,
    pub tanggal_lahir: String,
    pub nta: String,
    pub jenis_tkk: String,
    pub bidang_tkk: String,
    pub penguji: String,
    pub tempat_terbit: String,
    pub tanggal_terbit: String,
    pub nama_penguji: String,
    pub nta_penguji: String,
    pub golongan: String,
}

pub fn generate_piagam_skk_html(p: &PiagamSkkParams) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <title>Sertifikat Kecakapan Khusus - {jenis_tkk}</title>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <style>
      @page {{ size: A4 landscape; margin: 0; }}
      * {{ margin: 0; padding: 0; box-sizing: border-box; }}
      body {{
        font-family: 'Times New Roman', serif;
        background: #ffffff;
        color: #000000;
        margin: 0;
        padding: 0;
      }}
      .page-container {{
        width: 297mm;
        height: 210mm;
        position: relative;
        margin: 0 auto;
        background-color: #ffffff;
        background-image: url('/skk.png');
        background-size: 100% 100%;
        background-position: center;
        background-repeat: no-repeat;
        -webkit-print-color-adjust: exact;
        print-color-adjust: exact;
      }}
      .content-overlay {{ position: absolute; width: 100%; height: 100%; padding: 0; }}
      .title {{
        position: absolute;
        top: 42mm;
        left: 50%;
        transform: translateX(-50%);
        font-size: 24px;
        font-weight: bold;
        text-align: center;
        color: #1e40af;
        letter-spacing: 2px;
      }}
      .nomor-sertifikat {{
        position: absolute;
        top: 52mm;
        left: 50%;
        transform: translateX(-50%);
        font-size: 16px;
        text-align: center;
      }}
      .nomor-value {{ font-weight: bold; }}
      .intro-text {{
        position: absolute;
        top: 62mm;
        left: 40mm;
        right: 40mm;
        font-size: 14px;
        text-align: justify;
        line-height: 1.6;
      }}
      .data-row {{ position: absolute; left: 40mm; font-size: 14px; display: flex; }}
      .data-label {{ width: 120px; display: inline-block; }}
      .data-colon {{ width: 20px; display: inline-block; }}
      .data-value {{ font-weight: bold; display: inline-block; }}
      .nama-row {{ top: 78mm; }}
      .ttl-row {{ top: 84mm; }}
      .nta-row {{ top: 90mm; }}
      .status-lulus {{
        position: absolute;
        top: 100mm;
        left: 50%;
        transform: translateX(-50%);
        font-size: 18px;
        font-weight: bold;
        text-align: center;
      }}
      .tkk-info {{
        position: absolute;
        top: 110mm;
        left: 40mm;
        font-size: 14px;
        line-height: 1.8;
      }}
      .tkk-label {{ display: inline-block; width: 120px; }}
      .tkk-colon {{ display: inline-block; width: 20px; }}
      .tkk-value {{ font-weight: bold; }}
      .kewajiban-text {{
        position: absolute;
        top: 137mm;
        left: 40mm;
        right: 40mm;
        font-size: 13px;
        text-align: justify;
        line-height: 1.6;
      }}
      .penutup-text {{
        position: absolute;
        top: 148mm;
        left: 40mm;
        right: 40mm;
        font-size: 13px;
        text-align: justify;
        line-height: 1.6;
      }}
      .tempat-tanggal {{
        position: absolute;
        top: 160mm;
        left: 50%;
        transform: translateX(-50%);
        font-size: 14px;
        text-align: center;
      }}
      .tanggal-value {{ font-weight: bold; }}
      .penguji-label {{
        position: absolute;
        top: 167mm;
        left: 50%;
        transform: translateX(-50%);
        font-size: 14px;
        text-align: center;
      }}
      .nama-penguji {{
        position: absolute;
        top: 189mm;
        left: 50%;
        transform: translateX(-50%);
        font-size: 14px;
        font-weight: bold;
        text-align: center;
        text-decoration: underline;
      }}
      .nta-penguji {{
        position: absolute;
        top: 195mm;
        left: 50%;
        transform: translateX(-50%);
        font-size: 14px;
        text-align: center;
      }}
      .nta-value {{ font-weight: bold; }}
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
        <div class="title">SERTIFIKAT KECAKAPAN KHUSUS</div>
        <div class="nomor-sertifikat">
          No: <span class="nomor-value">{nomor_sertifikat}</span>
        </div>
        <div class="intro-text">
          Sesuai dengan Keputusan Kwartir Nasional No.134/KN/76 telah diadakan pengujian Syarat Kecakapan Khusus dengan hasil baik, maka Pramuka {golongan_upper}:
        </div>
        <div class="data-row nama-row">
          <span class="data-label">Nama</span>
          <span class="data-colon">:</span>
          <span class="data-value">{nama_upper}</span>
        </div>
        <div class="data-row ttl-row">
          <span class="data-label">Tempat,Tgl.Lahir</span>
          <span class="data-colon">:</span>
          <span class="data-value">{tempat_lahir}, {tanggal_lahir_fmt}</span>
        </div>
        <div class="data-row nta-row">
          <span class="data-label">NTA</span>
          <span class="data-colon">:</span>
          <span class="data-value">{nta}</span>
        </div>
        <div class="status-lulus">Dinyatakan <strong>LULUS</strong></div>
        <div class="tkk-info">
          Dan berhak memakai Tanda Kecakapan Khusus (TKK)<br/>
          <span class="tkk-label">Jenis</span>
          <span class="tkk-colon">:</span><span class="tkk-value">{jenis_tkk}</span><br/>
          <span class="tkk-label">Bidang</span>
          <span class="tkk-colon">:</span>{bidang_tkk}<br/>
          <span class="tkk-label">Penguji</span>
          <span class="tkk-colon">:</span><span class="tkk-value">{penguji}</span>
        </div>
        <div class="kewajiban-text">
          Kepada anggota yang memakai Tanda Kecakapan Khusus (TKK) ini berkewajiban untuk senantiasa melatih diri serta meningkatkan kemampuan dan kemahirannya secara terus menerus.
        </div>
        <div class="penutup-text">
          Demikian surat pengesahan ini ditetapkan untuk dapat dipergunakan sebagaimana mestinya.
        </div>
        <div class="tempat-tanggal">
          {tempat_terbit}, <span class="tanggal-value">{tanggal_terbit_fmt}</span>
        </div>
        <div class="penguji-label">Penguji,</div>
        <div class="nama-penguji">{nama_penguji}</div>
        <div class="nta-penguji">
          NTA. <span class="nta-value">{nta_penguji}</span>
        </div>
      </div>
    </div>
  </body>
</html>
"#,
        jenis_tkk = html_escape(&p.jenis_tkk),
        nomor_sertifikat = html_escape(&p.nomor_sertifikat),
        golongan_upper = html_escape(&p.golongan.to_uppercase()),
        nama_upper = html_escape(&p.nama_peserta.to_uppercase()),
        tempat_lahir = html_escape(&p.tempat_lahir),
        tanggal_lahir_fmt = format_tanggal(&p.tanggal_lahir),
        nta = html_escape(&p.nta),
        bidang_tkk = html_escape(&p.bidang_tkk),
        penguji = html_escape(&p.penguji),
        tempat_terbit = html_escape(&p.tempat_terbit),
        tanggal_terbit_fmt = format_tanggal(&p.tanggal_terbit),
        nama_penguji = html_escape(&p.nama_penguji),
        nta_penguji = html_escape(&p.nta_penguji),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contoh() -> PiagamSkkParams {
        PiagamSkkParams {
            nomor_sertifikat: "01/TKK-PSB/11.02.06.0365/2024".into(),
            nama_peserta: "Budi Santoso".into(),
            tempat_lahir: "Purbalingga".into(),
            tanggal_lahir: "2015-08-17".into(),
            nta: "11.02.06.0365.001".into(),
            jenis_tkk: "Juru Masak".into(),
            bidang_tkk: "Keterampilan dan Teknik Pembangunan".into(),
            penguji: "Kak Siti".into(),
            tempat_terbit: "Purbalingga".into(),
            tanggal_terbit: "2024-09-01".into(),
            nama_penguji: "Siti Aminah, S.Pd.".into(),
            nta_penguji: "11.02.06.0365.P01".into(),
            golongan: "Siaga".into(),
        }
    }

    #[test]
    fn piagam_memuat_data_inti() {
        let html = generate_piagam_skk_html(&contoh());
        assert!(html.contains("SERTIFIKAT KECAKAPAN KHUSUS"));
        assert!(html.contains("01/TKK-PSB/11.02.06.0365/2024"));
        assert!(html.contains("BUDI SANTOSO"));
        assert!(html.contains("Pramuka SIAGA:"));
        assert!(html.contains("Purbalingga, 17 Agustus 2015"));
        assert!(html.contains("Dinyatakan <strong>LULUS</strong>"));
        assert!(html.contains("size: A4 landscape"));
        assert!(html.contains("url('/skk.png')"));
    }

    #[test]
    fn piagam_escape_html() {
        let mut p = contoh();
        p.nama_peserta = "Budi <b>Santoso</b>".into();
        let html = generate_piagam_skk_html(&p);
        assert!(!html.contains("<b>SANTOSO"));
        assert!(html.contains("&lt;B&gt;SANTOSO&lt;/B&gt;"));
    }
}
