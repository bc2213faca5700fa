//! Hard-coded demo catalogs, one store per theme.

use super::{
    AboutContent, AboutValue, Category, ContactDetails, HeroSlide, OptionKind, Product,
    ProductOption, StoreCatalog, StoreProfile,
};
use crate::theme::ThemeKind;
use crate::types::{CategoryId, Price, ProductId, StoreId};

struct ProductSeed {
    id: i32,
    name: &'static str,
    brand: &'static str,
    category: i32,
    price: i64,
    original: Option<i64>,
    rating_tenths: u8,
    reviews: u32,
    stock: u32,
    images: &'static [&'static str],
    options: &'static [(OptionKind, &'static [&'static str])],
    description: &'static str,
    features: &'static [&'static str],
    badge: Option<&'static str>,
}

struct StoreSeed {
    id: &'static str,
    name: &'static str,
    tagline: &'static str,
    theme: ThemeKind,
    categories: &'static [(i32, &'static str, &'static str)],
    products: &'static [ProductSeed],
    slides: &'static [(&'static str, &'static str, &'static str, &'static str)],
    story: &'static str,
    values: &'static [(&'static str, &'static str)],
    founded_year: u16,
    email: &'static str,
    phone: &'static str,
    address: &'static str,
}

const SIZES: &[&str] = &["S", "M", "L", "XL"];
const WARRANTY: &[&str] = &["سنة واحدة", "سنتان", "ثلاث سنوات"];
const AGE_GROUPS: &[&str] = &["3-5 سنوات", "6-8 سنوات", "9-12 سنة"];
const LICENSES: &[&str] = &["شخصي", "فريق (5 مستخدمين)", "مؤسسة"];

const STORES: &[StoreSeed] = &[
    StoreSeed {
        id: "minimal-boutique",
        name: "بوتيك البساطة",
        tagline: "قطع أساسية بتصميم هادئ",
        theme: ThemeKind::Minimal,
        categories: &[
            (1, "قمصان", "قمصان قطنية بخامات طبيعية"),
            (2, "سراويل", "قصات مريحة للاستخدام اليومي"),
            (3, "إكسسوارات", "تفاصيل صغيرة تكمل إطلالتك"),
        ],
        products: &[
            ProductSeed {
                id: 1,
                name: "قميص قطني أساسي",
                brand: "بساطة",
                category: 1,
                price: 149,
                original: Some(199),
                rating_tenths: 46,
                reviews: 128,
                stock: 40,
                images: &["minimal/shirt-1.jpg", "minimal/shirt-2.jpg"],
                options: &[
                    (OptionKind::Size, SIZES),
                    (OptionKind::Color, &["أبيض", "أسود", "بيج"]),
                ],
                description: "قميص من القطن المصري بقصة مستقيمة تناسب كل المناسبات.",
                features: &["قطن 100%", "قابل للغسل في الغسالة", "صنع محلياً"],
                badge: Some("الأكثر مبيعاً"),
            },
            ProductSeed {
                id: 2,
                name: "سروال كتان واسع",
                brand: "بساطة",
                category: 2,
                price: 229,
                original: None,
                rating_tenths: 44,
                reviews: 64,
                stock: 18,
                images: &["minimal/pants-1.jpg"],
                options: &[(OptionKind::Size, SIZES)],
                description: "سروال كتان خفيف مثالي لأيام الصيف.",
                features: &["كتان طبيعي", "خصر مطاطي"],
                badge: None,
            },
            ProductSeed {
                id: 3,
                name: "حقيبة قماشية",
                brand: "بساطة",
                category: 3,
                price: 89,
                original: None,
                rating_tenths: 48,
                reviews: 210,
                stock: 75,
                images: &["minimal/tote-1.jpg"],
                options: &[],
                description: "حقيبة يد متينة بجيب داخلي.",
                features: &["قماش كانفاس سميك", "جيب داخلي بسحاب"],
                badge: None,
            },
            ProductSeed {
                id: 4,
                name: "قميص كتان بأكمام قصيرة",
                brand: "بساطة",
                category: 1,
                price: 169,
                original: None,
                rating_tenths: 42,
                reviews: 37,
                stock: 0,
                images: &["minimal/shirt-3.jpg"],
                options: &[(OptionKind::Size, SIZES)],
                description: "قميص كتان بياقة كوبية.",
                features: &["كتان مغسول", "أزرار من الصدف"],
                badge: None,
            },
        ],
        slides: &[
            ("مجموعة الصيف", "خامات خفيفة وألوان هادئة", "تسوق الآن", "categories/1"),
            ("أساسيات كل يوم", "قطع تدوم معك طويلاً", "اكتشف", "categories/2"),
        ],
        story: "بدأنا من فكرة بسيطة: ملابس أقل بجودة أعلى.",
        values: &[
            ("الجودة", "نختار خاماتنا بعناية من موردين موثوقين."),
            ("الاستدامة", "إنتاج محدود يقلل الهدر."),
        ],
        founded_year: 2019,
        email: "hello@minimal-boutique.sa",
        phone: "+966 11 000 1001",
        address: "الرياض، حي الملقا",
    },
    StoreSeed {
        id: "tech-hub",
        name: "مركز التقنية",
        tagline: "أحدث الأجهزة بأفضل الأسعار",
        theme: ThemeKind::Tech,
        categories: &[
            (1, "هواتف ذكية", "أحدث الهواتف من كبرى العلامات"),
            (2, "حواسيب محمولة", "أداء عالٍ للعمل والألعاب"),
            (3, "سماعات", "صوت نقي وعزل للضوضاء"),
        ],
        products: &[
            ProductSeed {
                id: 1,
                name: "هاتف برو ماكس 256 جيجا",
                brand: "نوفا",
                category: 1,
                price: 4299,
                original: Some(4799),
                rating_tenths: 47,
                reviews: 892,
                stock: 25,
                images: &["tech/phone-1.jpg", "tech/phone-2.jpg", "tech/phone-3.jpg"],
                options: &[
                    (OptionKind::Color, &["أسود", "فضي", "أزرق"]),
                    (OptionKind::Warranty, WARRANTY),
                ],
                description: "شاشة 6.7 بوصة ومعالج بثمانية أنوية وكاميرا ثلاثية.",
                features: &["ذاكرة 256 جيجابايت", "بطارية 5000 مللي أمبير", "شحن سريع 65 واط"],
                badge: Some("جديد"),
            },
            ProductSeed {
                id: 2,
                name: "حاسوب ألترا 14",
                brand: "زينث",
                category: 2,
                price: 5999,
                original: None,
                rating_tenths: 45,
                reviews: 311,
                stock: 8,
                images: &["tech/laptop-1.jpg"],
                options: &[(OptionKind::Warranty, WARRANTY)],
                description: "حاسوب خفيف بوزن 1.2 كجم وبطارية تدوم 18 ساعة.",
                features: &["معالج 12 نواة", "ذاكرة 16 جيجابايت", "تخزين SSD 1 تيرابايت"],
                badge: None,
            },
            ProductSeed {
                id: 3,
                name: "سماعات لاسلكية بعزل ضوضاء",
                brand: "صدى",
                category: 3,
                price: 299,
                original: Some(399),
                rating_tenths: 46,
                reviews: 1204,
                stock: 120,
                images: &["tech/buds-1.jpg"],
                options: &[(OptionKind::Color, &["أبيض", "أسود"])],
                description: "عزل نشط للضوضاء وعلبة شحن لاسلكية.",
                features: &["30 ساعة تشغيل", "مقاومة للماء IPX4"],
                badge: Some("عرض"),
            },
            ProductSeed {
                id: 4,
                name: "سماعة رأس للألعاب",
                brand: "صدى",
                category: 3,
                price: 199,
                original: None,
                rating_tenths: 43,
                reviews: 150,
                stock: 60,
                images: &["tech/headset-1.jpg"],
                options: &[],
                description: "صوت محيطي 7.1 وميكروفون قابل للفصل.",
                features: &["إضاءة RGB", "وسائد مريحة"],
                badge: None,
            },
        ],
        slides: &[
            ("هاتف برو ماكس", "قوة بلا حدود في يدك", "اطلب الآن", "products/1"),
            ("عروض السماعات", "خصم حتى 25%", "تسوق السماعات", "categories/3"),
            ("حواسيب للعمل", "أداء يعتمد عليه", "اكتشف", "categories/2"),
        ],
        story: "نقدم التقنية لكل بيت منذ أكثر من عشر سنوات.",
        values: &[
            ("ضمان حقيقي", "كل منتجاتنا أصلية مع ضمان الوكيل."),
            ("دعم فني", "فريق متخصص يساعدك قبل وبعد الشراء."),
        ],
        founded_year: 2013,
        email: "support@tech-hub.sa",
        phone: "+966 12 000 2002",
        address: "جدة، طريق الملك عبدالعزيز",
    },
    StoreSeed {
        id: "modern-living",
        name: "عصري للأثاث",
        tagline: "مساحات أنيقة لحياة عصرية",
        theme: ThemeKind::Modern,
        categories: &[
            (1, "غرف المعيشة", "كنب وطاولات بتصاميم معاصرة"),
            (2, "الإضاءة", "وحدات إضاءة تضفي دفئاً"),
        ],
        products: &[
            ProductSeed {
                id: 1,
                name: "كنبة ثلاثية مخملية",
                brand: "عصري",
                category: 1,
                price: 3499,
                original: Some(3999),
                rating_tenths: 45,
                reviews: 76,
                stock: 5,
                images: &["modern/sofa-1.jpg", "modern/sofa-2.jpg"],
                options: &[(OptionKind::Color, &["أخضر زيتي", "رمادي", "وردي"])],
                description: "كنبة مخملية بأرجل معدنية ذهبية.",
                features: &["هيكل خشبي صلب", "قماش مقاوم للبقع"],
                badge: Some("حصري"),
            },
            ProductSeed {
                id: 2,
                name: "طاولة قهوة رخامية",
                brand: "عصري",
                category: 1,
                price: 1299,
                original: None,
                rating_tenths: 47,
                reviews: 41,
                stock: 12,
                images: &["modern/table-1.jpg"],
                options: &[],
                description: "سطح رخام طبيعي وقاعدة فولاذية.",
                features: &["رخام كرارا", "قطر 80 سم"],
                badge: None,
            },
            ProductSeed {
                id: 3,
                name: "مصباح أرضي قوسي",
                brand: "نور",
                category: 2,
                price: 649,
                original: None,
                rating_tenths: 44,
                reviews: 58,
                stock: 20,
                images: &["modern/lamp-1.jpg"],
                options: &[(OptionKind::Color, &["أسود", "نحاسي"])],
                description: "مصباح بقوس طويل يضيء ركن القراءة.",
                features: &["قاعدة رخامية", "مفتاح تعتيم"],
                badge: None,
            },
        ],
        slides: &[
            ("مجموعة المخمل", "راحة تليق بمنزلك", "تسوق الكنب", "categories/1"),
            ("أضئ مساحتك", "تصاميم إضاءة جديدة", "اكتشف", "categories/2"),
        ],
        story: "نصمم أثاثاً يجمع بين الجمال والعملية.",
        values: &[
            ("تصميم", "فريق تصميم داخلي يبتكر كل قطعة."),
            ("توصيل وتركيب", "نوصل ونركب مجاناً داخل المدن الرئيسية."),
        ],
        founded_year: 2016,
        email: "care@modern-living.sa",
        phone: "+966 13 000 3003",
        address: "الخبر، حي العليا",
    },
    StoreSeed {
        id: "luxe-maison",
        name: "دار الفخامة",
        tagline: "عطور ومجوهرات بلمسة ملكية",
        theme: ThemeKind::Luxe,
        categories: &[
            (1, "عطور", "عطور شرقية وغربية فاخرة"),
            (2, "مجوهرات", "ذهب وأحجار كريمة"),
        ],
        products: &[
            ProductSeed {
                id: 1,
                name: "عطر العود الملكي",
                brand: "دار الفخامة",
                category: 1,
                price: 890,
                original: None,
                rating_tenths: 49,
                reviews: 342,
                stock: 30,
                images: &["luxe/oud-1.jpg", "luxe/oud-2.jpg"],
                options: &[(OptionKind::Size, &["50 مل", "100 مل"])],
                description: "مزيج من العود الكمبودي والورد الطائفي.",
                features: &["تركيز عالٍ", "ثبات يدوم 12 ساعة"],
                badge: Some("إصدار محدود"),
            },
            ProductSeed {
                id: 2,
                name: "قلادة ذهب عيار 21",
                brand: "دار الفخامة",
                category: 2,
                price: 2450,
                original: Some(2700),
                rating_tenths: 48,
                reviews: 89,
                stock: 4,
                images: &["luxe/necklace-1.jpg"],
                options: &[(OptionKind::Size, &["40 سم", "45 سم"])],
                description: "قلادة مصوغة يدوياً بتصميم الهلال.",
                features: &["ذهب عيار 21", "شهادة أصالة"],
                badge: None,
            },
            ProductSeed {
                id: 3,
                name: "دهن المسك الأبيض",
                brand: "دار الفخامة",
                category: 1,
                price: 320,
                original: None,
                rating_tenths: 47,
                reviews: 510,
                stock: 55,
                images: &["luxe/musk-1.jpg"],
                options: &[],
                description: "مسك أبيض ناعم للاستخدام اليومي.",
                features: &["12 مل", "خالٍ من الكحول"],
                badge: None,
            },
        ],
        slides: &[
            ("العود الملكي", "إرث من العطور الشرقية", "اكتشف العطر", "products/1"),
            ("مجموعة الهلال", "ذهب يروي الحكاية", "تسوق المجوهرات", "categories/2"),
        ],
        story: "منذ ثلاثة أجيال ونحن نصنع العطور في قلب مكة.",
        values: &[
            ("الحرفية", "كل قطعة تصنع بأيدي حرفيين مهرة."),
            ("الأصالة", "مكونات طبيعية من مصادرها الأصلية."),
        ],
        founded_year: 1978,
        email: "concierge@luxe-maison.sa",
        phone: "+966 12 000 4004",
        address: "مكة المكرمة، العزيزية",
    },
    StoreSeed {
        id: "vibrant-market",
        name: "سوق الألوان",
        tagline: "كل ما هو مبهج وملوّن",
        theme: ThemeKind::Vibrant,
        categories: &[
            (1, "أزياء", "ملابس بألوان جريئة"),
            (2, "أحذية رياضية", "خطوات مليئة بالحيوية"),
        ],
        products: &[
            ProductSeed {
                id: 1,
                name: "هودي ملون",
                brand: "ألوان",
                category: 1,
                price: 179,
                original: Some(239),
                rating_tenths: 45,
                reviews: 233,
                stock: 50,
                images: &["vibrant/hoodie-1.jpg"],
                options: &[
                    (OptionKind::Size, SIZES),
                    (OptionKind::Color, &["وردي", "أصفر", "أخضر"]),
                ],
                description: "هودي قطني بطبعات مرحة.",
                features: &["قطن مخلوط", "جيب كنغر"],
                badge: Some("خصم"),
            },
            ProductSeed {
                id: 2,
                name: "حذاء جري خفيف",
                brand: "قفزة",
                category: 2,
                price: 349,
                original: None,
                rating_tenths: 46,
                reviews: 402,
                stock: 35,
                images: &["vibrant/shoe-1.jpg", "vibrant/shoe-2.jpg"],
                options: &[(OptionKind::Size, &["40", "41", "42", "43", "44"])],
                description: "نعل مرن ووزن خفيف للجري اليومي.",
                features: &["شبكي يسمح بالتهوية", "نعل مطاطي مانع للانزلاق"],
                badge: None,
            },
        ],
        slides: &[
            ("موسم الألوان", "خصومات تصل إلى 25%", "تسوق الآن", "categories/1"),
            ("انطلق", "أحذية جري جديدة", "اكتشف", "categories/2"),
        ],
        story: "نؤمن أن الألوان تصنع يوماً أفضل.",
        values: &[
            ("المرح", "تصاميم تبعث البهجة."),
            ("أسعار عادلة", "جودة بسعر في متناول الجميع."),
        ],
        founded_year: 2021,
        email: "hi@vibrant-market.sa",
        phone: "+966 11 000 5005",
        address: "الرياض، البوليفارد",
    },
    StoreSeed {
        id: "home-appliances",
        name: "بيت الأجهزة",
        tagline: "أجهزة منزلية موثوقة مع ضمان ممتد",
        theme: ThemeKind::Appliances,
        categories: &[
            (1, "أجهزة المطبخ", "أفران وخلاطات وقلايات"),
            (2, "التكييف", "مكيفات موفرة للطاقة"),
            (3, "الغسيل", "غسالات ونشافات"),
        ],
        products: &[
            ProductSeed {
                id: 1,
                name: "قلاية هوائية 6 لتر",
                brand: "شيف",
                category: 1,
                price: 399,
                original: Some(549),
                rating_tenths: 46,
                reviews: 1530,
                stock: 80,
                images: &["appliances/airfryer-1.jpg"],
                options: &[(OptionKind::Warranty, WARRANTY)],
                description: "قلاية بشاشة لمس وثمانية برامج طهي.",
                features: &["قدرة 1700 واط", "سلة غير لاصقة"],
                badge: Some("الأكثر مبيعاً"),
            },
            ProductSeed {
                id: 2,
                name: "مكيف سبليت 18000 وحدة",
                brand: "برودة",
                category: 2,
                price: 2899,
                original: None,
                rating_tenths: 44,
                reviews: 267,
                stock: 14,
                images: &["appliances/ac-1.jpg"],
                options: &[(OptionKind::Warranty, WARRANTY)],
                description: "تقنية إنفرتر لتوفير استهلاك الكهرباء.",
                features: &["تصنيف طاقة A++", "تحكم عبر التطبيق"],
                badge: None,
            },
            ProductSeed {
                id: 3,
                name: "غسالة أمامية 9 كجم",
                brand: "نقاء",
                category: 3,
                price: 1899,
                original: Some(2199),
                rating_tenths: 45,
                reviews: 198,
                stock: 9,
                images: &["appliances/washer-1.jpg"],
                options: &[
                    (OptionKind::Color, &["أبيض", "فضي"]),
                    (OptionKind::Warranty, WARRANTY),
                ],
                description: "غسالة بمحرك صامت و14 برنامج غسيل.",
                features: &["1400 دورة في الدقيقة", "خاصية البخار"],
                badge: None,
            },
        ],
        slides: &[
            ("المطبخ الذكي", "قلايات هوائية بخصم 27%", "تسوق المطبخ", "categories/1"),
            ("صيف أبرد", "مكيفات إنفرتر موفرة", "اختر مكيفك", "categories/2"),
        ],
        story: "نخدم البيوت السعودية بأجهزة تعيش طويلاً.",
        values: &[
            ("ضمان ممتد", "حتى ثلاث سنوات على جميع الأجهزة."),
            ("صيانة", "مراكز صيانة في أكثر من 20 مدينة."),
        ],
        founded_year: 2005,
        email: "service@home-appliances.sa",
        phone: "+966 920000606",
        address: "الدمام، طريق الملك فهد",
    },
    StoreSeed {
        id: "toy-land",
        name: "أرض الألعاب",
        tagline: "ألعاب تنمي الخيال والمهارات",
        theme: ThemeKind::Toys,
        categories: &[
            (1, "ألعاب تعليمية", "تعلم من خلال اللعب"),
            (2, "ألعاب خارجية", "مرح في الهواء الطلق"),
        ],
        products: &[
            ProductSeed {
                id: 1,
                name: "مكعبات بناء 500 قطعة",
                brand: "ابتكار",
                category: 1,
                price: 249,
                original: None,
                rating_tenths: 48,
                reviews: 640,
                stock: 45,
                images: &["toys/blocks-1.jpg"],
                options: &[(OptionKind::AgeGroup, AGE_GROUPS)],
                description: "مكعبات ملونة متوافقة مع أشهر العلامات.",
                features: &["بلاستيك آمن خالٍ من BPA", "دليل أفكار مصور"],
                badge: Some("اختيار الأهالي"),
            },
            ProductSeed {
                id: 2,
                name: "روبوت برمجة للأطفال",
                brand: "ابتكار",
                category: 1,
                price: 459,
                original: Some(529),
                rating_tenths: 46,
                reviews: 188,
                stock: 16,
                images: &["toys/robot-1.jpg"],
                options: &[(OptionKind::AgeGroup, &["6-8 سنوات", "9-12 سنة"])],
                description: "روبوت يعلم أساسيات البرمجة عبر بطاقات ملونة.",
                features: &["لا يحتاج شاشة", "بطارية قابلة للشحن"],
                badge: None,
            },
            ProductSeed {
                id: 3,
                name: "دراجة توازن",
                brand: "مرح",
                category: 2,
                price: 329,
                original: None,
                rating_tenths: 47,
                reviews: 97,
                stock: 22,
                images: &["toys/bike-1.jpg"],
                options: &[
                    (OptionKind::Color, &["أحمر", "أزرق"]),
                    (OptionKind::AgeGroup, &["3-5 سنوات"]),
                ],
                description: "دراجة بدون دواسات لتعلم التوازن.",
                features: &["مقعد قابل للتعديل", "إطارات لا تثقب"],
                badge: None,
            },
        ],
        slides: &[
            ("العب وتعلم", "ألعاب تعليمية لكل الأعمار", "تسوق", "categories/1"),
            ("إلى الحديقة", "ألعاب خارجية جديدة", "اكتشف", "categories/2"),
        ],
        story: "نختار كل لعبة بعناية لتكون آمنة وممتعة ومفيدة.",
        values: &[
            ("الأمان", "جميع الألعاب مطابقة لمعايير السلامة."),
            ("التعلم", "ألعاب تنمي مهارات التفكير."),
        ],
        founded_year: 2017,
        email: "fun@toy-land.sa",
        phone: "+966 11 000 7007",
        address: "الرياض، حي النرجس",
    },
    StoreSeed {
        id: "soft-keys",
        name: "مفاتيح البرمجيات",
        tagline: "تراخيص أصلية تصلك فوراً",
        theme: ThemeKind::Software,
        categories: &[
            (1, "أنظمة تشغيل", "تراخيص أنظمة أصلية"),
            (2, "برامج مكتبية", "إنتاجية أعلى لفريقك"),
            (3, "حماية", "مضادات فيروسات وشبكات آمنة"),
        ],
        products: &[
            ProductSeed {
                id: 1,
                name: "حزمة المكتب الاحترافية",
                brand: "إنتاج",
                category: 2,
                price: 599,
                original: Some(799),
                rating_tenths: 46,
                reviews: 720,
                stock: 999,
                images: &["software/office-1.jpg"],
                options: &[(OptionKind::License, LICENSES)],
                description: "معالج نصوص وجداول وعروض تقديمية بالعربية.",
                features: &["تفعيل فوري", "دعم كامل للغة العربية", "تحديثات مجانية لسنة"],
                badge: Some("الأكثر طلباً"),
            },
            ProductSeed {
                id: 2,
                name: "درع الحماية الشامل",
                brand: "حصن",
                category: 3,
                price: 149,
                original: None,
                rating_tenths: 44,
                reviews: 305,
                stock: 999,
                images: &["software/shield-1.jpg"],
                options: &[(OptionKind::License, LICENSES)],
                description: "حماية من الفيروسات وبرامج الفدية.",
                features: &["جدار حماية", "شبكة VPN مدمجة"],
                badge: None,
            },
            ProductSeed {
                id: 3,
                name: "نظام تشغيل برو",
                brand: "نواة",
                category: 1,
                price: 899,
                original: None,
                rating_tenths: 45,
                reviews: 133,
                stock: 999,
                images: &["software/os-1.jpg"],
                options: &[],
                description: "ترخيص دائم لجهاز واحد.",
                features: &["ترخيص دائم", "دعم فني عبر البريد"],
                badge: None,
            },
        ],
        slides: &[
            ("حزمة المكتب", "وفر 25% على الترخيص السنوي", "احصل عليها", "products/1"),
            ("احمِ أجهزتك", "حماية شاملة بسعر واحد", "اكتشف", "categories/3"),
        ],
        story: "نوفر تراخيص برمجيات أصلية للأفراد والشركات.",
        values: &[
            ("أصالة", "تراخيص رسمية من المطورين مباشرة."),
            ("سرعة", "يصلك مفتاح التفعيل خلال دقائق."),
        ],
        founded_year: 2018,
        email: "keys@soft-keys.sa",
        phone: "+966 11 000 8008",
        address: "الرياض، واجهة الرياض",
    },
];

/// Build the demo stores.
pub(super) fn stores() -> Vec<StoreCatalog> {
    STORES.iter().filter_map(build_store).collect()
}

fn build_store(seed: &StoreSeed) -> Option<StoreCatalog> {
    // Seed ids are literals above; a typo surfaces as a missing store in tests.
    let id = StoreId::parse(seed.id).ok()?;
    let theme = seed.theme.slug();

    let categories = seed
        .categories
        .iter()
        .map(|&(cid, name, description)| Category {
            id: CategoryId::new(cid),
            name: name.to_owned(),
            description: description.to_owned(),
            image: format!("/static/images/{theme}/category-{cid}.jpg"),
        })
        .collect();

    let products = seed
        .products
        .iter()
        .map(|p| Product {
            id: ProductId::new(p.id),
            name: p.name.to_owned(),
            brand: p.brand.to_owned(),
            category_id: CategoryId::new(p.category),
            price: Price::sar(p.price),
            original_price: p.original.map(Price::sar),
            images: p
                .images
                .iter()
                .map(|img| format!("/static/images/{img}"))
                .collect(),
            rating_tenths: p.rating_tenths,
            review_count: p.reviews,
            stock: p.stock,
            options: p
                .options
                .iter()
                .map(|&(kind, values)| ProductOption {
                    kind,
                    values: values.iter().map(|v| (*v).to_owned()).collect(),
                })
                .collect(),
            description: p.description.to_owned(),
            features: p.features.iter().map(|f| (*f).to_owned()).collect(),
            badge: p.badge.map(str::to_owned),
        })
        .collect();

    let slides = seed
        .slides
        .iter()
        .enumerate()
        .map(|(i, &(title, subtitle, cta_label, cta_path))| HeroSlide {
            title: title.to_owned(),
            subtitle: subtitle.to_owned(),
            cta_label: cta_label.to_owned(),
            cta_path: cta_path.to_owned(),
            image: format!("/static/images/{theme}/hero-{}.jpg", i + 1),
        })
        .collect();

    Some(StoreCatalog {
        profile: StoreProfile {
            id,
            name: seed.name.to_owned(),
            tagline: seed.tagline.to_owned(),
            theme: seed.theme,
            about: AboutContent {
                story: seed.story.to_owned(),
                values: seed
                    .values
                    .iter()
                    .map(|&(title, body)| AboutValue {
                        title: title.to_owned(),
                        body: body.to_owned(),
                    })
                    .collect(),
                founded_year: seed.founded_year,
            },
            contact: ContactDetails {
                email: seed.email.to_owned(),
                phone: seed.phone.to_owned(),
                whatsapp: seed.phone.replace([' ', '+'], ""),
                address: seed.address.to_owned(),
                hours: "السبت - الخميس، 9 صباحاً - 10 مساءً".to_owned(),
            },
        },
        categories,
        products,
        slides,
    })
}
