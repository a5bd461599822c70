//! Aid category taxonomy.
//!
//! Record kinds are open strings, but the program issues them from this fixed
//! list of categories and sub-types. Labels are kept verbatim as they appear
//! in the upstream sheet.

/// Top-level aid category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AidCategory {
    /// Cash, bill payments, interest-free loans.
    Financial,
    /// Food parcels, meals, drinking water.
    Food,
    /// Medicine, examinations, surgery costs, assistive devices.
    Health,
    /// Scholarships, stationery, fees, vocational courses.
    Education,
    /// Emergency relief: tents, clothing, hygiene kits.
    Relief,
    /// Building, repairs, rent, furniture.
    Housing,
    /// Small-project funding, vocational training, work tools.
    Livelihood,
}

const FINANCIAL: &[&str] = &[
    "نقد مباشر للعائلات المحتاجة",
    "دفع فواتير (كهرباء، ماء، إيجار)",
    "قروض حسنة أو صناديق دوارة",
];
const FOOD: &[&str] = &[
    "طرود غذائية أساسية",
    "وجبات جاهزة / مطبوخة",
    "توزيع مياه للشرب",
];
const HEALTH: &[&str] = &[
    "أدوية وعلاجات",
    "فحوصات طبية مجانية",
    "تغطية تكاليف العمليات",
    "أدوات مساعدة (نظارات، كراسي متحركة)",
];
const EDUCATION: &[&str] = &[
    "منح دراسية",
    "توفير قرطاسية وحقائب مدرسية",
    "تغطية رسوم جامعية أو مدرسية",
    "دورات تدريبية وتأهيل مهني",
];
const RELIEF: &[&str] = &[
    "خيم وأغطية في حالات النزوح",
    "ملابس وأحذية",
    "أدوات نظافة وتعقيم",
    "تدخل عاجل في الكوارث",
];
const HOUSING: &[&str] = &[
    "بناء أو ترميم منازل",
    "دفع إيجارات",
    "توفير أثاث أو أجهزة كهربائية",
];
const LIVELIHOOD: &[&str] = &[
    "تمويل مشاريع صغيرة",
    "تدريب مهني",
    "أدوات عمل أو معدات إنتاج",
];

impl AidCategory {
    /// All categories in display order.
    pub const ALL: [AidCategory; 7] = [
        AidCategory::Financial,
        AidCategory::Food,
        AidCategory::Health,
        AidCategory::Education,
        AidCategory::Relief,
        AidCategory::Housing,
        AidCategory::Livelihood,
    ];

    /// Category label as used in the upstream sheet.
    pub fn label(self) -> &'static str {
        match self {
            AidCategory::Financial => "مساعدات مالية",
            AidCategory::Food => "مساعدات غذائية",
            AidCategory::Health => "مساعدات صحية",
            AidCategory::Education => "مساعدات تعليمية",
            AidCategory::Relief => "مساعدات إغاثية (طارئة)",
            AidCategory::Housing => "مساعدات سكنية",
            AidCategory::Livelihood => "مساعدات تشغيلية",
        }
    }

    /// Short English name for narrow table columns.
    pub fn short_name(self) -> &'static str {
        match self {
            AidCategory::Financial => "financial",
            AidCategory::Food => "food",
            AidCategory::Health => "health",
            AidCategory::Education => "education",
            AidCategory::Relief => "relief",
            AidCategory::Housing => "housing",
            AidCategory::Livelihood => "livelihood",
        }
    }

    /// Sub-types issued under this category.
    pub fn kinds(self) -> &'static [&'static str] {
        match self {
            AidCategory::Financial => FINANCIAL,
            AidCategory::Food => FOOD,
            AidCategory::Health => HEALTH,
            AidCategory::Education => EDUCATION,
            AidCategory::Relief => RELIEF,
            AidCategory::Housing => HOUSING,
            AidCategory::Livelihood => LIVELIHOOD,
        }
    }
}

/// Category a record kind belongs to.
///
/// Matches either a sub-type or a category label exactly (after trimming).
/// Kinds outside the taxonomy return `None`.
pub fn category_of(kind: &str) -> Option<AidCategory> {
    let kind = kind.trim();
    if kind.is_empty() {
        return None;
    }
    AidCategory::ALL
        .into_iter()
        .find(|c| c.label() == kind || c.kinds().contains(&kind))
}
