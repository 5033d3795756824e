use clap::ValueEnum;
use std::fmt;

use crate::models::JobType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Language {
    #[default]
    Lo,
    Th,
    En,
    Zh,
    Vi,
    My,
    Km,
    Id,
}

impl Language {
    pub const ALL: [Language; 8] = [
        Language::Lo,
        Language::Th,
        Language::En,
        Language::Zh,
        Language::Vi,
        Language::My,
        Language::Km,
        Language::Id,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::Lo => "lo",
            Language::Th => "th",
            Language::En => "en",
            Language::Zh => "zh",
            Language::Vi => "vi",
            Language::My => "my",
            Language::Km => "km",
            Language::Id => "id",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::Lo => "ພາສາລາວ",
            Language::Th => "ไทย",
            Language::En => "English",
            Language::Zh => "中文",
            Language::Vi => "Tiếng Việt",
            Language::My => "မြန်မာစာ",
            Language::Km => "ខ្មែរ",
            Language::Id => "Bahasa Indonesia",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Language::Lo => "🇱🇦",
            Language::Th => "🇹🇭",
            Language::En => "🇺🇸",
            Language::Zh => "🇨🇳",
            Language::Vi => "🇻🇳",
            Language::My => "🇲🇲",
            Language::Km => "🇰🇭",
            Language::Id => "🇮🇩",
        }
    }

    /// Next language in selector order, wrapping around.
    pub fn next(&self) -> Language {
        let idx = Language::ALL.iter().position(|l| l == self).unwrap_or(0);
        Language::ALL[(idx + 1) % Language::ALL.len()]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug)]
pub struct TranslationSet {
    pub hero_title: &'static str,
    pub hero_sub: &'static str,
    pub search_placeholder: &'static str,
    pub search_btn: &'static str,
    pub find_jobs: &'static str,
    pub contact_us: &'static str,
    pub part_time: &'static str,
    pub hot_jobs: &'static str,
    pub view_all: &'static str,
    pub job_title: &'static str,
    pub location: &'static str,
    pub salary: &'static str,
    pub apply_now: &'static str,
    pub categories: &'static str,
}

static LO: TranslationSet = TranslationSet {
    hero_title: "ຊອກຫາວຽກທີ່ໃຊ່ສຳລັບທ່ານ",
    hero_sub: "ເຊື່ອມຕໍ່ທ່ານກັບບໍລິສັດຊັ້ນນຳທົ່ວລາວ ແລະ ພາກພື້ນ",
    search_placeholder: "ຊື່ວຽກ, ບໍລິສັດ...",
    search_btn: "ຄົ້ນຫາ",
    find_jobs: "ຊອກວຽກ",
    contact_us: "ຕິດຕໍ່ພວກເຮົາ",
    part_time: "ວຽກນອກເວລາ",
    hot_jobs: "ວຽກດ່ວນ",
    view_all: "ເບິ່ງທັງໝົດ",
    job_title: "ຊື່ຕຳແໜ່ງ",
    location: "ສະຖານທີ່",
    salary: "ເງິນເດືອນ",
    apply_now: "ສະໝັກດຽວນີ້",
    categories: "ໝວດໝູ່ວຽກ",
};

static TH: TranslationSet = TranslationSet {
    hero_title: "ค้นหางานที่ใช่สำหรับคุณ",
    hero_sub: "เชื่อมต่อคุณกับบริษัทชั้นนำทั่วลาวและภูมิภาค",
    search_placeholder: "ชื่องาน, บริษัท...",
    search_btn: "ค้นหา",
    find_jobs: "หางาน",
    contact_us: "ติดต่อเรา",
    part_time: "งานพาร์ทไทม์",
    hot_jobs: "งานด่วน",
    view_all: "ดูทั้งหมด",
    job_title: "ตำแหน่งงาน",
    location: "สถานที่",
    salary: "เงินเดือน",
    apply_now: "สมัครเลย",
    categories: "หมวดหมู่งาน",
};

static EN: TranslationSet = TranslationSet {
    hero_title: "Find the Right Job for You",
    hero_sub: "Connecting you with leading companies across Laos and the region",
    search_placeholder: "Job title, company...",
    search_btn: "Search",
    find_jobs: "Find Jobs",
    contact_us: "Contact Us",
    part_time: "Part-time Jobs",
    hot_jobs: "Hot Jobs",
    view_all: "View All",
    job_title: "Job Title",
    location: "Location",
    salary: "Salary",
    apply_now: "Apply Now",
    categories: "Job Categories",
};

static ZH: TranslationSet = TranslationSet {
    hero_title: "找到适合您的工作",
    hero_sub: "连接老挝及周边地区的领先企业",
    search_placeholder: "职位名称、公司...",
    search_btn: "搜索",
    find_jobs: "找工作",
    contact_us: "联系我们",
    part_time: "兼职工作",
    hot_jobs: "热门职位",
    view_all: "查看全部",
    job_title: "职位",
    location: "地点",
    salary: "薪资",
    apply_now: "立即申请",
    categories: "职位类别",
};

static VI: TranslationSet = TranslationSet {
    hero_title: "Tìm công việc phù hợp với bạn",
    hero_sub: "Kết nối bạn với các công ty hàng đầu tại Lào và khu vực",
    search_placeholder: "Chức danh, công ty...",
    search_btn: "Tìm kiếm",
    find_jobs: "Tìm việc",
    contact_us: "Liên hệ",
    part_time: "Việc bán thời gian",
    hot_jobs: "Việc làm nổi bật",
    view_all: "Xem tất cả",
    job_title: "Chức danh",
    location: "Địa điểm",
    salary: "Mức lương",
    apply_now: "Ứng tuyển ngay",
    categories: "Ngành nghề",
};

static MY: TranslationSet = TranslationSet {
    hero_title: "သင့်အတွက် သင့်တော်သော အလုပ်ကို ရှာပါ",
    hero_sub: "လာအိုနှင့် ဒေသတွင်း ထိပ်တန်းကုမ္ပဏီများနှင့် ချိတ်ဆက်ပေးသည်",
    search_placeholder: "အလုပ်အမည်၊ ကုမ္ပဏီ...",
    search_btn: "ရှာဖွေရန်",
    find_jobs: "အလုပ်ရှာရန်",
    contact_us: "ဆက်သွယ်ရန်",
    part_time: "အချိန်ပိုင်းအလုပ်",
    hot_jobs: "လူကြိုက်များသောအလုပ်",
    view_all: "အားလုံးကြည့်ရန်",
    job_title: "ရာထူး",
    location: "တည်နေရာ",
    salary: "လစာ",
    apply_now: "ယခုလျှောက်ထားပါ",
    categories: "အလုပ်အမျိုးအစားများ",
};

static KM: TranslationSet = TranslationSet {
    hero_title: "ស្វែងរកការងារដែលត្រូវនឹងអ្នក",
    hero_sub: "ភ្ជាប់អ្នកជាមួយក្រុមហ៊ុនឈានមុខនៅឡាវ និងតំបន់",
    search_placeholder: "មុខតំណែង, ក្រុមហ៊ុន...",
    search_btn: "ស្វែងរក",
    find_jobs: "ស្វែងរកការងារ",
    contact_us: "ទាក់ទងយើង",
    part_time: "ការងារក្រៅម៉ោង",
    hot_jobs: "ការងារពេញនិយម",
    view_all: "មើលទាំងអស់",
    job_title: "មុខតំណែង",
    location: "ទីតាំង",
    salary: "ប្រាក់ខែ",
    apply_now: "ដាក់ពាក្យឥឡូវ",
    categories: "ប្រភេទការងារ",
};

static ID: TranslationSet = TranslationSet {
    hero_title: "Temukan Pekerjaan yang Tepat untuk Anda",
    hero_sub: "Menghubungkan Anda dengan perusahaan terkemuka di Laos dan kawasan",
    search_placeholder: "Jabatan, perusahaan...",
    search_btn: "Cari",
    find_jobs: "Cari Kerja",
    contact_us: "Hubungi Kami",
    part_time: "Kerja Paruh Waktu",
    hot_jobs: "Lowongan Populer",
    view_all: "Lihat Semua",
    job_title: "Jabatan",
    location: "Lokasi",
    salary: "Gaji",
    apply_now: "Lamar Sekarang",
    categories: "Kategori Pekerjaan",
};

pub fn translations(lang: Language) -> &'static TranslationSet {
    match lang {
        Language::Lo => &LO,
        Language::Th => &TH,
        Language::En => &EN,
        Language::Zh => &ZH,
        Language::Vi => &VI,
        Language::My => &MY,
        Language::Km => &KM,
        Language::Id => &ID,
    }
}

/// Page chrome that only has a Lao rendition; every other language reads English.
#[derive(Debug)]
pub struct Chrome {
    pub home: &'static str,
    pub filters: &'static str,
    pub keywords: &'static str,
    pub job_type: &'static str,
    pub all_types: &'static str,
    pub all_categories: &'static str,
    pub found: &'static str,
    pub opportunities: &'static str,
    pub no_jobs_found: &'static str,
    pub no_jobs_hint: &'static str,
    pub back_to_listings: &'static str,
    pub description: &'static str,
    pub requirements: &'static str,
    pub about: &'static str,
    pub recent_openings: &'static str,
    pub jobs_suffix: &'static str,
    pub hot_badge: &'static str,
    pub expires: &'static str,
    pub tagline: &'static str,
}

static CHROME_LO: Chrome = Chrome {
    home: "ໜ້າຫຼັກ",
    filters: "ການຕັ້ງຄ່າການຄົ້ນຫາ",
    keywords: "ຄຳຄົ້ນຫາ",
    job_type: "ປະເພດວຽກ",
    all_types: "ທຸກປະເພດ",
    all_categories: "ທຸກໝວດໝູ່",
    found: "ພົບ",
    opportunities: "ຕຳແໜ່ງ",
    no_jobs_found: "ບໍ່ພົບວຽກທີ່ຄົ້ນຫາ",
    no_jobs_hint: "ລອງປັບປ່ຽນຄຳຄົ້ນຫາ ຫຼື ປະເພດວຽກຄືນໃໝ່.",
    back_to_listings: "ກັບຄືນສູ່ລາຍການວຽກ",
    description: "ລາຍລະອຽດວຽກ",
    requirements: "ຄຸນສົມບັດຜູ້ສະໝັກ",
    about: "ກ່ຽວກັບ",
    recent_openings: "ວຽກໃໝ່ລ່າສຸດ",
    jobs_suffix: "ຕຳແໜ່ງ",
    hot_badge: "ວຽກເດັ່ນ",
    expires: "ໝົດເຂດໃນ 2 ອາທິດ",
    tagline: "ເວທີຮັບສະໝັກງານອັນດັບ 1 ໃນລາວ ເຊື່ອມຕໍ່ບຸກຄະລາກອນທີ່ມີທັກສະເຂົ້າກັບໂອກາດລະດັບໂລກ.",
};

static CHROME_EN: Chrome = Chrome {
    home: "Home",
    filters: "Filters",
    keywords: "Keywords",
    job_type: "Job Type",
    all_types: "All Types",
    all_categories: "All Categories",
    found: "Found",
    opportunities: "opportunities",
    no_jobs_found: "No jobs found",
    no_jobs_hint: "Try adjusting your filters or search keywords.",
    back_to_listings: "Back to listings",
    description: "Description",
    requirements: "Requirements",
    about: "About",
    recent_openings: "Recent Openings",
    jobs_suffix: "jobs",
    hot_badge: "Hot Job",
    expires: "Expires in 2 weeks",
    tagline: "The No.1 Job Recruitment platform in Laos. Connecting skilled individuals with world-class opportunities.",
};

pub fn chrome(lang: Language) -> &'static Chrome {
    match lang {
        Language::Lo => &CHROME_LO,
        _ => &CHROME_EN,
    }
}

/// Display label for a job type. Separate from filtering, which always
/// compares the enum itself.
pub fn job_type_label(job_type: JobType, lang: Language) -> &'static str {
    if lang != Language::Lo {
        return job_type.as_str();
    }
    match job_type {
        JobType::FullTime => "ວຽກເຕັມເວລາ",
        JobType::PartTime => "ວຽກນອກເວລາ",
        JobType::Contract => "ສັນຍາຈ້າງ",
        JobType::Freelance => "ວຽກອິດສະຫຼະ",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_cycle_visits_all_and_wraps() {
        let mut lang = Language::default();
        assert_eq!(lang, Language::Lo);
        let mut seen = vec![lang];
        for _ in 0..Language::ALL.len() - 1 {
            lang = lang.next();
            seen.push(lang);
        }
        assert_eq!(seen, Language::ALL.to_vec());
        assert_eq!(lang.next(), Language::Lo);
    }

    #[test]
    fn test_codes_match_cli_values() {
        for lang in Language::ALL {
            let value = lang.to_possible_value().unwrap();
            assert_eq!(value.get_name(), lang.code());
        }
    }

    #[test]
    fn test_every_language_has_translations() {
        for lang in Language::ALL {
            let t = translations(lang);
            assert!(!t.hero_title.is_empty(), "{} hero_title", lang);
            assert!(!t.search_btn.is_empty(), "{} search_btn", lang);
            assert!(!t.apply_now.is_empty(), "{} apply_now", lang);
            assert!(!t.categories.is_empty(), "{} categories", lang);
        }
        assert_eq!(translations(Language::En).salary, "Salary");
    }

    #[test]
    fn test_chrome_is_lao_or_english() {
        assert_eq!(chrome(Language::En).no_jobs_found, "No jobs found");
        assert_eq!(chrome(Language::Th).no_jobs_found, "No jobs found");
        assert_ne!(chrome(Language::Lo).no_jobs_found, "No jobs found");
    }

    #[test]
    fn test_job_type_label() {
        assert_eq!(job_type_label(JobType::Contract, Language::En), "Contract");
        assert_eq!(job_type_label(JobType::PartTime, Language::Vi), "Part-time");
        assert_eq!(job_type_label(JobType::Contract, Language::Lo), "ສັນຍາຈ້າງ");
    }
}
