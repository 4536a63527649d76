//! Katalog statis syarat SKU dan daftar TKK Siaga.
//!
//! Katalog ini ditulis tangan dan dibundel bersama aplikasi; database hanya
//! menyimpan progres per peserta, bukan teks syaratnya.

use serde::Serialize;

/// Varian keagamaan sebuah syarat. Syarat yang memiliki varian menerima
/// kolom `agama_dipilih` pada baris progres yang lulus.
#[derive(Debug, Serialize)]
pub struct SubAgama {
    pub label: &'static str,
    pub butir: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct Syarat {
    pub teks: &'static str,
    pub sub_agama: &'static [SubAgama],
}

impl Syarat {
    pub fn has_sub_agama(&self) -> bool {
        !self.sub_agama.is_empty()
    }
}

const fn s(teks: &'static str) -> Syarat {
    Syarat {
        teks,
        sub_agama: &[],
    }
}

const fn sa(teks: &'static str, sub_agama: &'static [SubAgama]) -> Syarat {
    Syarat { teks, sub_agama }
}

const TEMPAT_IBADAH: &[SubAgama] = &[
    SubAgama {
        label: "Islam",
        butir: &["Mengenal masjid atau mushola di lingkungannya"],
    },
    SubAgama {
        label: "Kristen Protestan",
        butir: &["Mengenal gereja tempat kebaktian di lingkungannya"],
    },
    SubAgama {
        label: "Katolik",
        butir: &["Mengenal gereja dan kapel di lingkungannya"],
    },
    SubAgama {
        label: "Hindu",
        butir: &["Mengenal pura di lingkungannya"],
    },
    SubAgama {
        label: "Buddha",
        butir: &["Mengenal vihara di lingkungannya"],
    },
];

const IBADAH_RUTIN: &[SubAgama] = &[
    SubAgama {
        label: "Islam",
        butir: &[
            "Dapat melaksanakan sholat lima waktu",
            "Dapat mengucap dua kalimat syahadat dan artinya",
        ],
    },
    SubAgama {
        label: "Kristen Protestan",
        butir: &[
            "Mengikuti kebaktian atau sekolah minggu secara rutin",
            "Hafal doa Bapa Kami",
        ],
    },
    SubAgama {
        label: "Katolik",
        butir: &["Mengikuti misa mingguan", "Hafal doa Salam Maria"],
    },
    SubAgama {
        label: "Hindu",
        butir: &["Dapat melaksanakan persembahyangan Tri Sandhya"],
    },
    SubAgama {
        label: "Buddha",
        butir: &["Dapat melaksanakan kebaktian dan membaca paritta"],
    },
];

const KISAH_TOKOH_AGAMA: &[SubAgama] = &[
    SubAgama {
        label: "Islam",
        butir: &["Dapat menceritakan kisah salah satu nabi atau rasul"],
    },
    SubAgama {
        label: "Kristen Protestan",
        butir: &["Dapat menceritakan salah satu kisah dari Alkitab"],
    },
    SubAgama {
        label: "Katolik",
        butir: &["Dapat menceritakan kisah salah satu santo atau santa"],
    },
    SubAgama {
        label: "Hindu",
        butir: &["Dapat menceritakan kisah dari Ramayana atau Mahabharata"],
    },
    SubAgama {
        label: "Buddha",
        butir: &["Dapat menceritakan kisah hidup Sang Buddha"],
    },
];

/// SKU Siaga Mula (34 syarat)
pub const SKU_SIAGA_MULA: &[Syarat] = &[
    s("Mengenal lambang negara Garuda Pancasila"),
    s("Mengenal bendera Merah Putih"),
    s("Hafal lagu Indonesia Raya (minimal bait pertama)"),
    s("Mengenal Lambang Gerakan Pramuka"),
    s("Hafal Dwisatya dan Dwidarma"),
    s("Dapat menyebutkan nama Presiden dan Wakil Presiden RI"),
    s("Dapat menyebutkan nama Gubernur dan Bupati/Walikota"),
    s("Dapat menyebutkan nama Kepala Sekolah"),
    s("Dapat menyebutkan nama Pembina Pramuka"),
    s("Dapat menyebutkan nama Ketua Barung"),
    s("Dapat menyebutkan alamat rumah sendiri"),
    s("Dapat menyebutkan nama orang tua/wali"),
    s("Dapat menyebutkan tanggal lahir sendiri"),
    s("Dapat mengikat simpul mati"),
    s("Dapat mengikat simpul jangkar"),
    s("Dapat mengikat simpul anyam"),
    s("Dapat membuat hasta karya sederhana"),
    s("Dapat merapikan tempat tidur sendiri"),
    s("Dapat menyapu lantai"),
    s("Dapat mencuci piring/gelas sendiri"),
    s("Dapat menyiram tanaman"),
    s("Dapat membuang sampah pada tempatnya"),
    s("Dapat berdoa sebelum dan sesudah makan"),
    s("Dapat berdoa sebelum dan sesudah tidur"),
    s("Dapat berdoa sebelum dan sesudah belajar"),
    s("Dapat menyebutkan rukun Islam (bagi yang beragama Islam)"),
    s("Dapat menyebutkan rukun Iman (bagi yang beragama Islam)"),
    sa("Mengenal tempat ibadah agamanya", TEMPAT_IBADAH),
    s("Dapat melakukan gerakan senam sederhana"),
    s("Dapat berlari 50 meter"),
    s("Dapat melempar dan menangkap bola"),
    s("Dapat berbaris dengan tertib"),
    s("Dapat menyanyikan lagu Hymne Pramuka"),
    s("Dapat menyanyikan lagu daerah setempat"),
];

/// SKU Siaga Bantu (33 syarat)
pub const SKU_SIAGA_BANTU: &[Syarat] = &[
    s("Mengamalkan Dwisatya dan Dwidarma dalam kehidupan sehari-hari"),
    s("Dapat menceritakan sejarah singkat Gerakan Pramuka"),
    s("Dapat menyebutkan tanggal lahir Gerakan Pramuka"),
    s("Dapat menyebutkan nama pendiri Gerakan Pramuka"),
    s("Hafal lagu Indonesia Raya (lengkap)"),
    s("Dapat menyanyikan lagu wajib nasional (minimal 3 lagu)"),
    s("Dapat mengikat simpul pangkal"),
    s("Dapat mengikat simpul palang"),
    s("Dapat mengikat simpul tambat"),
    s("Dapat membuat dragbar sederhana"),
    s("Dapat membaca dan menulis huruf semaphore A-M"),
    s("Dapat membaca dan menulis huruf morse A-M"),
    s("Dapat menunjukkan arah mata angin"),
    s("Dapat membaca denah sederhana"),
    s("Dapat menyebutkan nama-nama hari dalam seminggu"),
    s("Dapat menyebutkan nama-nama bulan dalam setahun"),
    s("Dapat melakukan P3K luka ringan"),
    s("Dapat membersihkan dan merawat luka lecet"),
    s("Dapat menyebutkan nomor telepon penting (polisi, ambulans, pemadam)"),
    s("Dapat memasak nasi sendiri"),
    s("Dapat membuat minuman sendiri"),
    s("Dapat mencuci pakaian sendiri"),
    s("Dapat menyetrika pakaian sendiri"),
    s("Dapat menabung secara teratur"),
    s("Dapat membantu orang tua di rumah"),
    s("Dapat membantu teman yang kesulitan"),
    sa("Rajin beribadah sesuai agamanya", IBADAH_RUTIN),
    s("Dapat berenang minimal 10 meter"),
    s("Dapat bersepeda dengan baik"),
    s("Dapat melakukan senam kesegaran jasmani"),
    s("Dapat bermain permainan tradisional"),
    s("Dapat mengikuti upacara dengan tertib"),
    s("Dapat memimpin barisan sederhana"),
];

/// SKU Siaga Tata (33 syarat)
pub const SKU_SIAGA_TATA: &[Syarat] = &[
    s("Mengamalkan Dwisatya dan Dwidarma secara konsisten"),
    s("Dapat menjelaskan arti lambang Gerakan Pramuka"),
    s("Dapat menjelaskan arti warna bendera Merah Putih"),
    s("Dapat menceritakan sejarah kemerdekaan Indonesia"),
    s("Dapat menyebutkan nama pahlawan nasional (minimal 5)"),
    s("Dapat menyanyikan lagu wajib nasional (minimal 5 lagu)"),
    s("Dapat mengikat simpul kursi"),
    s("Dapat mengikat simpul tiang"),
    s("Dapat mengikat simpul turki"),
    s("Dapat membuat tandu darurat"),
    s("Dapat membaca dan menulis huruf semaphore lengkap"),
    s("Dapat membaca dan menulis huruf morse lengkap"),
    s("Dapat menggunakan kompas"),
    s("Dapat membuat peta sederhana"),
    s("Dapat memperkirakan jarak dan tinggi"),
    s("Dapat melakukan P3K patah tulang"),
    s("Dapat melakukan P3K pingsan"),
    s("Dapat melakukan P3K luka bakar"),
    s("Dapat memasak lauk sederhana"),
    s("Dapat membuat api unggun"),
    s("Dapat mendirikan tenda sederhana"),
    s("Dapat membuat kerajinan dari bahan alam"),
    s("Dapat memimpin doa bersama"),
    sa("Dapat bercerita tentang kisah nabi/tokoh agama", KISAH_TOKOH_AGAMA),
    s("Dapat berenang minimal 25 meter"),
    s("Dapat melakukan olahraga atletik dasar"),
    s("Dapat memimpin permainan kelompok"),
    s("Dapat memimpin upacara pembukaan latihan"),
    s("Dapat menjadi pemimpin barung"),
    s("Dapat mengajarkan keterampilan kepada adik tingkat"),
    s("Dapat membuat laporan kegiatan sederhana"),
    s("Dapat berbicara di depan umum"),
    s("Dapat bekerja sama dalam tim"),
];

/// SKU Penggalang Ramu (30 syarat)
pub const SKU_PENGGALANG_RAMU: &[Syarat] = &[
    s("Hafal dan mengamalkan Trisatya dan Dasadarma"),
    s("Dapat menjelaskan sejarah Gerakan Pramuka Indonesia"),
    s("Dapat menjelaskan sejarah Kepanduan Dunia"),
    s("Dapat menyebutkan nama pendiri Kepanduan Dunia"),
    s("Dapat menjelaskan struktur organisasi Gerakan Pramuka"),
    s("Hafal lagu Indonesia Raya (3 bait)"),
    s("Dapat menyanyikan lagu wajib nasional (minimal 7 lagu)"),
    s("Dapat mengikat 8 macam simpul dasar"),
    s("Dapat membuat pioneering sederhana"),
    s("Dapat membuat tali dari bahan alam"),
    s("Dapat membaca dan mengirim isyarat semaphore"),
    s("Dapat membaca dan mengirim isyarat morse"),
    s("Dapat menggunakan kompas dan peta"),
    s("Dapat membuat peta perjalanan"),
    s("Dapat memperkirakan jarak, tinggi, dan lebar"),
    s("Dapat melakukan P3K kecelakaan"),
    s("Dapat membuat tandu dan mengangkut korban"),
    s("Dapat melakukan pertolongan tenggelam"),
    s("Dapat memasak di alam terbuka"),
    s("Dapat mendirikan berbagai jenis tenda"),
    s("Dapat membuat bivak darurat"),
    s("Dapat membuat api tanpa korek api"),
    s("Dapat mengenal tanda-tanda alam"),
    s("Dapat mengenal tanaman obat"),
    s("Dapat berenang minimal 50 meter"),
    s("Dapat melakukan hiking minimal 10 km"),
    s("Dapat memimpin regu dalam kegiatan"),
    s("Dapat membuat rencana kegiatan regu"),
    s("Dapat membuat laporan kegiatan"),
    s("Dapat berkomunikasi dengan baik"),
];

#[derive(Debug, Serialize)]
pub struct SkuConfig {
    pub key: &'static str,
    pub nama: &'static str,
    pub golongan: &'static str,
    pub syarat: &'static [Syarat],
}

impl SkuConfig {
    pub fn jumlah_syarat(&self) -> usize {
        self.syarat.len()
    }

    /// Tingkat SKU untuk surat (kata terakhir nama, mis. "Mula").
    pub fn tingkat(&self) -> &'static str {
        self.nama.rsplit(' ').next().unwrap_or(self.nama)
    }
}

pub const SKU_CONFIGS: &[SkuConfig] = &[
    SkuConfig {
        key: "siaga_mula",
        nama: "SKU Siaga Mula",
        golongan: "Siaga",
        syarat: SKU_SIAGA_MULA,
    },
    SkuConfig {
        key: "siaga_bantu",
        nama: "SKU Siaga Bantu",
        golongan: "Siaga",
        syarat: SKU_SIAGA_BANTU,
    },
    SkuConfig {
        key: "siaga_tata",
        nama: "SKU Siaga Tata",
        golongan: "Siaga",
        syarat: SKU_SIAGA_TATA,
    },
    SkuConfig {
        key: "penggalang_ramu",
        nama: "SKU Penggalang Ramu",
        golongan: "Penggalang",
        syarat: SKU_PENGGALANG_RAMU,
    },
];

pub fn sku_config(jenis_sku: &str) -> Option<&'static SkuConfig> {
    SKU_CONFIGS.iter().find(|c| c.key == jenis_sku)
}

// Lima bidang TKK menurut SK Kwarnas 134/KN/76.
pub const BIDANG_AGAMA: &str =
    "Agama, Mental, Moral, Spiritual, Pembentukan Pribadi dan Watak";
pub const BIDANG_PATRIOTISME: &str = "Patriotisme dan Seni Budaya";
pub const BIDANG_KETANGKASAN: &str = "Ketangkasan dan Kesehatan";
pub const BIDANG_KETERAMPILAN: &str = "Keterampilan dan Teknik Pembangunan";
pub const BIDANG_SOSIAL: &str =
    "Sosial, Perikemanusiaan, Gotong Royong, Ketertiban Masyarakat, Perdamaian Dunia dan Lingkungan Hidup";

#[derive(Debug, Serialize)]
pub struct Tkk {
    pub id: &'static str,
    pub nama: &'static str,
    pub icon: &'static str,
    pub bidang: &'static str,
}

/// TKK wajib Siaga (10)
pub const TKK_SIAGA_WAJIB: &[Tkk] = &[
    Tkk { id: "pppk", nama: "PPPK", icon: "🏥", bidang: BIDANG_SOSIAL },
    Tkk { id: "pengatur_ruangan", nama: "Pengatur Ruangan", icon: "🏠", bidang: BIDANG_KETERAMPILAN },
    Tkk { id: "pengamat", nama: "Pengamat", icon: "👁️", bidang: BIDANG_KETANGKASAN },
    Tkk { id: "juru_masak", nama: "Juru Masak", icon: "🍳", bidang: BIDANG_KETERAMPILAN },
    Tkk { id: "berkemah", nama: "Berkemah", icon: "⛺", bidang: BIDANG_KETANGKASAN },
    Tkk { id: "penabung", nama: "Penabung", icon: "💰", bidang: BIDANG_AGAMA },
    Tkk { id: "penjahit", nama: "Penjahit", icon: "🧵", bidang: BIDANG_KETERAMPILAN },
    Tkk { id: "juru_kebun", nama: "Juru Kebun", icon: "🌱", bidang: BIDANG_KETERAMPILAN },
    Tkk { id: "pengaman_kampung", nama: "Pengaman Kampung", icon: "🛡️", bidang: BIDANG_SOSIAL },
    Tkk { id: "gerak_jalan", nama: "Gerak Jalan", icon: "🚶", bidang: BIDANG_KETANGKASAN },
];

/// TKK pilihan Siaga (20)
pub const TKK_SIAGA_PILIHAN: &[Tkk] = &[
    Tkk { id: "qori", nama: "Qori", icon: "📖", bidang: BIDANG_AGAMA },
    Tkk { id: "sholat", nama: "Sholat", icon: "🕌", bidang: BIDANG_AGAMA },
    Tkk { id: "muadzin", nama: "Muadzin", icon: "📢", bidang: BIDANG_AGAMA },
    Tkk { id: "khotib", nama: "Khotib", icon: "🎤", bidang: BIDANG_AGAMA },
    Tkk { id: "penyanyi", nama: "Penyanyi", icon: "🎵", bidang: BIDANG_PATRIOTISME },
    Tkk { id: "pelukis", nama: "Pelukis", icon: "🎨", bidang: BIDANG_PATRIOTISME },
    Tkk { id: "pengatur_meja_makan", nama: "Pengatur Meja Makan", icon: "🍽️", bidang: BIDANG_KETERAMPILAN },
    Tkk { id: "pengarang", nama: "Pengarang", icon: "✍️", bidang: BIDANG_PATRIOTISME },
    Tkk { id: "dirigen", nama: "Dirigen", icon: "🎼", bidang: BIDANG_PATRIOTISME },
    Tkk { id: "juru_isyarat_bendera", nama: "Juru Isyarat Bendera", icon: "🚩", bidang: BIDANG_KETANGKASAN },
    Tkk { id: "pembaca", nama: "Pembaca", icon: "📚", bidang: BIDANG_PATRIOTISME },
    Tkk { id: "pengendara_sepeda", nama: "Pengendara Sepeda", icon: "🚲", bidang: BIDANG_KETANGKASAN },
    Tkk { id: "penghijauan", nama: "Penghijauan", icon: "🌳", bidang: BIDANG_SOSIAL },
    Tkk { id: "penyelidik", nama: "Penyelidik", icon: "🔍", bidang: BIDANG_KETANGKASAN },
    Tkk { id: "juru_anyam", nama: "Juru Anyam", icon: "🧺", bidang: BIDANG_KETERAMPILAN },
    Tkk { id: "pencari_jejak", nama: "Pencari Jejak/Penjelajah", icon: "🧭", bidang: BIDANG_KETANGKASAN },
    Tkk { id: "pembantu_ibu", nama: "Pembantu Ibu", icon: "👩‍👧", bidang: BIDANG_SOSIAL },
    Tkk { id: "pengatur_lalu_lintas", nama: "Pengatur Lalu Lintas", icon: "🚦", bidang: BIDANG_SOSIAL },
    Tkk { id: "penangkap_ikan", nama: "Penangkap Ikan", icon: "🎣", bidang: BIDANG_KETERAMPILAN },
    Tkk { id: "pengumpul", nama: "Pengumpul", icon: "📦", bidang: BIDANG_KETERAMPILAN },
];

pub fn tkk_by_id(tkk_id: &str) -> Option<&'static Tkk> {
    TKK_SIAGA_WAJIB
        .iter()
        .chain(TKK_SIAGA_PILIHAN.iter())
        .find(|t| t.id == tkk_id)
}

pub fn tkk_is_wajib(tkk_id: &str) -> bool {
    TKK_SIAGA_WAJIB.iter().any(|t| t.id == tkk_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jumlah_syarat_per_jenjang() {
        assert_eq!(SKU_SIAGA_MULA.len(), 34);
        assert_eq!(SKU_SIAGA_BANTU.len(), 33);
        assert_eq!(SKU_SIAGA_TATA.len(), 33);
        assert_eq!(SKU_PENGGALANG_RAMU.len(), 30);
    }

    #[test]
    fn jumlah_tkk() {
        assert_eq!(TKK_SIAGA_WAJIB.len(), 10);
        assert_eq!(TKK_SIAGA_PILIHAN.len(), 20);
    }

    #[test]
    fn config_lookup() {
        let cfg = sku_config("siaga_mula").unwrap();
        assert_eq!(cfg.nama, "SKU Siaga Mula");
        assert_eq!(cfg.golongan, "Siaga");
        assert_eq!(cfg.jumlah_syarat(), 34);
        assert_eq!(cfg.tingkat(), "Mula");
        assert!(sku_config("penegak_bantara").is_none());
    }

    #[test]
    fn syarat_keagamaan_punya_sub_item() {
        // Syarat 28 Siaga Mula bercabang per agama, syarat lain tidak.
        assert!(SKU_SIAGA_MULA[27].has_sub_agama());
        assert!(!SKU_SIAGA_MULA[0].has_sub_agama());
        let labels: Vec<&str> = SKU_SIAGA_MULA[27]
            .sub_agama
            .iter()
            .map(|v| v.label)
            .collect();
        assert!(labels.contains(&"Islam"));
        assert!(labels.contains(&"Hindu"));
    }

    #[test]
    fn tkk_lookup() {
        let t = tkk_by_id("juru_masak").unwrap();
        assert_eq!(t.nama, "Juru Masak");
        assert!(tkk_is_wajib("juru_masak"));
        assert!(!tkk_is_wajib("qori"));
        assert!(tkk_by_id("tidak_ada").is_none());
    }

    #[test]
    fn id_tkk_unik() {
        let mut ids: Vec<&str> = TKK_SIAGA_WAJIB
            .iter()
            .chain(TKK_SIAGA_PILIHAN.iter())
            .map(|t| t.id)
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}
