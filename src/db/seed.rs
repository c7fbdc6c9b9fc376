//! Default content inserted into empty tables on first start.
//!
//! Each table is seeded in its own transaction and only while it holds zero
//! rows, so restarts never duplicate seed data.

use crate::domain::{encode_list, flag_to_int, FeatureCard, ServiceStatus, Status};
use serde::Serialize;
use sqlx::sqlite::SqlitePool;
use tracing::info;

const CERTIFICATES: &[(&str, &str)] = &[
    ("ISO 9001:2015", "https://picsum.photos/seed/cert1/400/600"),
    (
        "Vergi Məsləhətçisi Sertifikatı",
        "https://picsum.photos/seed/cert2/400/600",
    ),
    (
        "Peşəkar Mühasib Sertifikatı",
        "https://picsum.photos/seed/cert3/400/600",
    ),
];

const TEAM: &[(&str, &str, &str, &str, &str)] = &[
    (
        "Günel Qarabağlı",
        "BAŞ MÜHASİB",
        "Peşəkar mühasibat xidmətləri.",
        "https://picsum.photos/seed/team1/400/400",
        "https://linkedin.com/in/gunel",
    ),
    (
        "Nurlan Babazadə",
        "MÜHASİB",
        "Maliyyə hesabatlılığı üzrə mütəxəssis.",
        "https://picsum.photos/seed/team2/400/400",
        "https://linkedin.com/in/nurlan",
    ),
    (
        "Aysel Allahverdiyeva",
        "KİÇİK MÜHASİB",
        "Mühasibat uçotunun dəstəklənməsi.",
        "https://picsum.photos/seed/team3/400/400",
        "https://linkedin.com/in/aysel",
    ),
    (
        "Musa Piriyev",
        "BAŞ HÜQUQ MÜTƏXƏSSİSİ",
        "Korporativ hüquq dəstəyi.",
        "https://picsum.photos/seed/team4/400/400",
        "https://linkedin.com/in/musa",
    ),
];

const BLOG_POSTS: &[(&str, &str, &str, &str, &str)] = &[
    (
        "2026-cı il Vergi Məcəlləsindəki Dəyişikliklər",
        "Yeni ilin əvvəlindən qüvvəyə minən vergi dəyişiklikləri.",
        "Vergi məcəlləsində edilən son dəyişikliklər biznes sahibləri üçün bir çox yeniliklər gətirir...",
        "https://picsum.photos/seed/blog1/800/600",
        "2026-ci-il-vergi-mecellesindeki-deyisiklikler",
    ),
    (
        "Rəqəmsal Mühasibatlıq: Biznesinizi Necə İnkişaf Etdirir?",
        "Kağız üzərində aparılan mühasibatlıq artıq keçmişdə qaldı.",
        "Bulud texnologiyaları və rəqəmsal həllər mühasibat uçotunu daha sürətli və şəffaf edir...",
        "https://picsum.photos/seed/blog2/800/600",
        "reqemsal-muhasibatliq-biznesinizi-nece-inkisaf-etdirir",
    ),
    (
        "Əmək Qanunvericiliyində Yeni Tələblər",
        "İşəgötürənlər və işçilər üçün yeni qaydalar nələri vəd edir?",
        "Əmək müqavilələrinin qeydiyyatı və sosial sığorta öhdəlikləri haqqında son məlumatlar...",
        "https://picsum.photos/seed/blog3/800/600",
        "emek-qanunvericiliyinde-yeni-telebler",
    ),
];

const CATEGORIES: &[&str] = &[
    "Monitorlar",
    "Rkeeper",
    "Kassa aparatları",
    "Tərəzilər",
    "Proqram təminatı",
];

const BRANDS: &[&str] = &["HP", "Dell", "Samsung", "Epson"];

/// (name, subtitle, description, price, image, category_id, brand_id)
const PRODUCTS: &[(&str, &str, &str, f64, &str, i64, i64)] = &[
    (
        "Professional 4K Business Monitor",
        "Yüksək rəng dəqiqliyi və erqonomik dizayn.",
        "Ofis və dizayn işləri üçün mükəmməl seçim olan 4K monitor.",
        999.0,
        "https://picsum.photos/seed/monitor1/800/600",
        1,
        2,
    ),
    (
        "Smart POS System X-200",
        "İnteqrasiya edilmiş bulud sistemi və sürətli çap.",
        "Restoran və pərakəndə satış nöqtələri üçün müasir POS terminal.",
        1250.0,
        "https://picsum.photos/seed/pos1/800/600",
        3,
        4,
    ),
    (
        "Rkeeper Cloud Management",
        "Restoran və kafelər üçün avtomatlaşdırma.",
        "Bulud əsaslı idarəetmə sistemi ilə biznesinizi hər yerdən izləyin.",
        450.0,
        "https://picsum.photos/seed/rkeeper1/800/600",
        2,
        1,
    ),
    (
        "Elektron Tərəzi T-500",
        "Dəqiq çəki və barkod çapı.",
        "Marketlər üçün nəzərdə tutulmuş yüksək dəqiqlikli tərəzi.",
        750.0,
        "https://picsum.photos/seed/scale1/800/600",
        4,
        3,
    ),
];

/// (title, subtitle, description, icon, status, features)
const SERVICES: &[(&str, &str, &str, &str, ServiceStatus, &[&str])] = &[
    (
        "Vergi Xidmətləri",
        "Vergi öhdəliklərinin optimallaşdırılması",
        "Biznesinizin vergi yükünü qanuni yollarla azaldır və vergi orqanları ilə münasibətlərinizi tənzimləyirik.",
        "Briefcase",
        ServiceStatus::Active,
        &[
            "Vergi planlaması",
            "Vergi bəyannamələri",
            "Vergi risklərinin təhlili",
            "Kamera yoxlamalarında dəstək",
            "Beynəlxalq vergiqoyma",
        ],
    ),
    (
        "Mühasibat Uçotu",
        "Dəqiq və şəffaf hesabatlılıq",
        "Mühasibat uçotunun beynəlxalq standartlara uyğun aparılması.",
        "Calculator",
        ServiceStatus::Active,
        &["Maliyyə hesabatları", "Kadr uçotu"],
    ),
    (
        "Audit Xidmətləri",
        "Maliyyə risklərinin minimallaşdırılması",
        "Daxili və xarici audit xidmətləri.",
        "Search",
        ServiceStatus::Inactive,
        &["Daxili audit", "Vergi auditi"],
    ),
    (
        "Hüquq Xidmətləri",
        "Hüquqi təhlükəsizliyinizin təminatı",
        "Müqavilələrin hazırlanması və hüquqi məsləhət.",
        "Scale",
        ServiceStatus::Active,
        &["Müqavilə hüququ", "Məhkəmə təmsilçiliyi"],
    ),
    (
        "Miqrasiya Xidmətləri",
        "Xarici vətəndaşlar üçün dəstək",
        "İş və yaşayış icazələrinin alınması.",
        "Plane",
        ServiceStatus::Active,
        &["İş icazəsi", "Yaşayış icazəsi"],
    ),
    (
        "Gömrük Rəsmiləşdirilməsi",
        "Sürətli və maneəsiz gömrük keçidi",
        "Malların gömrük bəyannamələrinin hazırlanması.",
        "Truck",
        ServiceStatus::Active,
        &["Bəyannamə tərtibi", "Yük daşıma"],
    ),
    (
        "İT Xidmətləri",
        "Texnoloji həllər və dəstək",
        "Şəbəkə qurulması və proqram təminatı.",
        "Monitor",
        ServiceStatus::Active,
        &["Şəbəkə dəstəyi", "Proqramlaşdırma"],
    ),
    (
        "Ticarət Avadanlıqları",
        "Mağaza və anbar həlləri",
        "Kassa aparatları və barkod sistemləri.",
        "ShoppingBag",
        ServiceStatus::Active,
        &["Kassa sistemləri", "Barkod oxuyucular"],
    ),
    (
        "Gömrük Məsləhətləri",
        "Gömrük qanunvericiliyi üzrə konsultasiya",
        "Gömrük tarifləri və qaydaları haqqında məlumat.",
        "HelpCircle",
        ServiceStatus::Active,
        &["Tarif məsləhəti", "Qanunvericilik"],
    ),
];

const SOCIAL_LINKS: &[(&str, &str, &str, Status)] = &[
    (
        "facebook",
        "Facebook",
        "https://facebook.com/juritax.az",
        Status::Active,
    ),
    (
        "instagram",
        "Instagram",
        "https://instagram.com/juritax_lega",
        Status::Active,
    ),
    (
        "linkedin",
        "LinkedIn",
        "https://linkedin.com/company/juritax",
        Status::Active,
    ),
    (
        "twitter",
        "X / Twitter",
        "https://x.com/juritax_az",
        Status::Inactive,
    ),
    (
        "youtube",
        "YouTube",
        "https://youtube.com/@juritax_tv",
        Status::Active,
    ),
    (
        "whatsapp",
        "WhatsApp",
        "https://wa.me/994501234567",
        Status::Active,
    ),
];

const STATS: &[(&str, &str, i64, &str)] = &[
    ("services", "Ümumi Xidmətlər", 12, "Stethoscope"),
    ("products", "Məhsullar", 156, "ShoppingBag"),
    ("team", "Komanda", 24, "Users"),
    ("blog", "Bloq Yazıları", 124, "History"),
];

const SUBSCRIBERS: &[&str] = &["info@example.com", "test@juritax.az", "client@mail.ru"];

/// Seed every empty table with its default rows.
///
/// # Errors
/// Returns an error if a count or insert fails; the failing table's
/// transaction is rolled back.
pub async fn seed_defaults(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    seed_certificate_settings(pool).await?;
    seed_certificates(pool).await?;
    seed_contact_info(pool).await?;
    seed_corporate_info(pool).await?;
    seed_team_members(pool).await?;
    seed_about_us(pool).await?;
    seed_blog_posts(pool).await?;
    seed_categories(pool).await?;
    seed_brands(pool).await?;
    seed_settings(pool).await?;
    seed_products(pool).await?;
    seed_services(pool).await?;
    seed_social_links(pool).await?;
    seed_client_settings(pool).await?;
    seed_stats(pool).await?;
    seed_subscribers(pool).await?;
    Ok(())
}

async fn table_is_empty(pool: &SqlitePool, table: &str) -> Result<bool, sqlx::Error> {
    let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await?;
    Ok(count == 0)
}

fn encode_seed_list<T: Serialize>(items: &[T]) -> Result<String, sqlx::Error> {
    encode_list(items).map_err(|e| sqlx::Error::Protocol(e.to_string()))
}

fn seeded(table: &str, rows: usize) {
    info!(table, rows, "Seeded default rows");
}

async fn seed_certificate_settings(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    if !table_is_empty(pool, "certificate_settings").await? {
        return Ok(());
    }

    sqlx::query(
        "INSERT INTO certificate_settings (id, title, subtitle, is_enabled) VALUES (1, ?, ?, ?)",
    )
    .bind("SERTİFİKATLARIMIZ")
    .bind("Peşəkar xidmətlərimiz rəsmi lisenziyalar və beynəlxalq sertifikatlarla təmin olunmuşdur.")
    .bind(flag_to_int(true))
    .execute(pool)
    .await?;

    seeded("certificate_settings", 1);
    Ok(())
}

async fn seed_certificates(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    if !table_is_empty(pool, "certificates").await? {
        return Ok(());
    }

    let mut tx = pool.begin().await?;
    for (title, image) in CERTIFICATES {
        sqlx::query("INSERT INTO certificates (title, image, status) VALUES (?, ?, ?)")
            .bind(*title)
            .bind(*image)
            .bind(Status::Active.as_str())
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    seeded("certificates", CERTIFICATES.len());
    Ok(())
}

async fn seed_contact_info(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    if !table_is_empty(pool, "contact_info").await? {
        return Ok(());
    }

    sqlx::query(
        r#"
        INSERT INTO contact_info (id, hero_title, hero_subtitle, button_text, phone, email, address, map_url)
        VALUES (1, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind("Peşəkar Dəstək Üçün Yanınızdayıq")
    .bind("Vergi, mühasibatlıq və biznes həlləri ilə bağlı sualınız var? Bizə müraciət edin.")
    .bind("Məsləhət al")
    .bind("+994 55 263 68 67")
    .bind("info@juritax.az")
    .bind("Babək prospekti 282, Baku 1119")
    .bind("https://maps.google.com/...")
    .execute(pool)
    .await?;

    seeded("contact_info", 1);
    Ok(())
}

async fn seed_corporate_info(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    if !table_is_empty(pool, "corporate_info").await? {
        return Ok(());
    }

    let values = vec![
        FeatureCard::new(
            "Dürüstlük",
            "Hər bir maliyyə əməliyyatında tam şəffaflıq.",
            "Shield",
        ),
        FeatureCard::new(
            "İnnovasiya",
            "Müasir texnologiyalarla ənənəvi həllərin birləşməsi.",
            "Zap",
        ),
    ];

    sqlx::query(
        r#"
        INSERT INTO corporate_info (id, hero_title, hero_subtitle, main_image, values_json)
        VALUES (1, ?, ?, ?, ?)
        "#,
    )
    .bind("Missiyamız və Dəyərlərimiz")
    .bind("Azərbaycanın biznes mühitində şəffaflıq, innovasiya və peşəkarlığın simvolu olmağı hədəfləyirik.")
    .bind("https://picsum.photos/seed/corporate/800/600")
    .bind(encode_seed_list(&values)?)
    .execute(pool)
    .await?;

    seeded("corporate_info", 1);
    Ok(())
}

async fn seed_team_members(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    if !table_is_empty(pool, "team_members").await? {
        return Ok(());
    }

    let mut tx = pool.begin().await?;
    for (name, position, description, image, linkedin_url) in TEAM {
        sqlx::query(
            r#"
            INSERT INTO team_members (name, position, description, image, linkedin_url, show_linkedin, status)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(*name)
        .bind(*position)
        .bind(*description)
        .bind(*image)
        .bind(*linkedin_url)
        .bind(flag_to_int(true))
        .bind(Status::Active.as_str())
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    seeded("team_members", TEAM.len());
    Ok(())
}

async fn seed_about_us(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    if !table_is_empty(pool, "about_us").await? {
        return Ok(());
    }

    let features = vec![
        FeatureCard::new(
            "Peşəkar Komanda",
            "Geniş təcrübəyə malik mütəxəssislər.",
            "Users",
        ),
        FeatureCard::new(
            "Fərdi Yanaşma",
            "Müştəri ehtiyaclarının dərin təhlili.",
            "Target",
        ),
        FeatureCard::new(
            "Yüksək Keyfiyyət",
            "Beynəlxalq standartlara uyğunluq.",
            "ShieldCheck",
        ),
        FeatureCard::new("Şəffaflıq", "Tam şəffaf və hesabatlı proseslər.", "Eye"),
    ];

    sqlx::query(
        r#"
        INSERT INTO about_us (id, hero_title, hero_subtitle, section_title, section_description, main_image, experience_text, features)
        VALUES (1, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind("Juritax: Sizin Etibarlı Biznes Tərəfdaşınız")
    .bind("Biz vergi, mühasibatlıq və biznes həlləri sahəsində premium xidmətlər təklif edirik.")
    .bind("Biz Kimik?")
    .bind("Biznesinizi idarə etmək üçün lazım olan bütün dəstəyi vahid mərkəzdən təmin edirik.")
    .bind("https://picsum.photos/seed/about/800/600")
    .bind("10+ İllik Təcrübə")
    .bind(encode_seed_list(&features)?)
    .execute(pool)
    .await?;

    seeded("about_us", 1);
    Ok(())
}

async fn seed_blog_posts(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    if !table_is_empty(pool, "blog_posts").await? {
        return Ok(());
    }

    let mut tx = pool.begin().await?;
    for (title, subtitle, content, image, slug) in BLOG_POSTS {
        sqlx::query(
            r#"
            INSERT INTO blog_posts (title, subtitle, content, image, slug, status)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(*title)
        .bind(*subtitle)
        .bind(*content)
        .bind(*image)
        .bind(*slug)
        .bind(Status::Active.as_str())
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    seeded("blog_posts", BLOG_POSTS.len());
    Ok(())
}

async fn seed_categories(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    if !table_is_empty(pool, "categories").await? {
        return Ok(());
    }

    let mut tx = pool.begin().await?;
    for name in CATEGORIES {
        sqlx::query("INSERT INTO categories (name) VALUES (?)")
            .bind(*name)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    seeded("categories", CATEGORIES.len());
    Ok(())
}

async fn seed_brands(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    if !table_is_empty(pool, "brands").await? {
        return Ok(());
    }

    let mut tx = pool.begin().await?;
    for name in BRANDS {
        sqlx::query("INSERT INTO brands (name) VALUES (?)")
            .bind(*name)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    seeded("brands", BRANDS.len());
    Ok(())
}

async fn seed_settings(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    if !table_is_empty(pool, "settings").await? {
        return Ok(());
    }

    sqlx::query("INSERT INTO settings (id, value) VALUES (?, ?)")
        .bind("show_prices")
        .bind("true")
        .execute(pool)
        .await?;

    seeded("settings", 1);
    Ok(())
}

async fn seed_products(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    if !table_is_empty(pool, "products").await? {
        return Ok(());
    }

    let mut tx = pool.begin().await?;
    for (name, subtitle, description, price, image, category_id, brand_id) in PRODUCTS {
        sqlx::query(
            r#"
            INSERT INTO products (name, subtitle, description, price, image, category_id, brand_id, status)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(*name)
        .bind(*subtitle)
        .bind(*description)
        .bind(*price)
        .bind(*image)
        .bind(*category_id)
        .bind(*brand_id)
        .bind(Status::Active.as_str())
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    seeded("products", PRODUCTS.len());
    Ok(())
}

async fn seed_services(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    if !table_is_empty(pool, "services").await? {
        return Ok(());
    }

    let mut tx = pool.begin().await?;
    for (title, subtitle, description, icon, status, features) in SERVICES {
        sqlx::query(
            r#"
            INSERT INTO services (title, subtitle, description, icon, status, features)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(*title)
        .bind(*subtitle)
        .bind(*description)
        .bind(*icon)
        .bind(status.as_str())
        .bind(encode_seed_list::<&str>(features)?)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    seeded("services", SERVICES.len());
    Ok(())
}

async fn seed_social_links(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    if !table_is_empty(pool, "social_media").await? {
        return Ok(());
    }

    let mut tx = pool.begin().await?;
    for (id, name, url, status) in SOCIAL_LINKS {
        sqlx::query("INSERT INTO social_media (id, name, url, status) VALUES (?, ?, ?, ?)")
            .bind(*id)
            .bind(*name)
            .bind(*url)
            .bind(status.as_str())
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    seeded("social_media", SOCIAL_LINKS.len());
    Ok(())
}

async fn seed_client_settings(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    if !table_is_empty(pool, "client_settings").await? {
        return Ok(());
    }

    sqlx::query(
        "INSERT INTO client_settings (id, title, subtitle, is_enabled) VALUES (1, ?, ?, ?)",
    )
    .bind("MÜŞTƏRİ PORTFELİMİZ")
    .bind("Azərbaycanın aparıcı şirkətləri öz biznes proseslərini bizə etibar edir.")
    .bind(flag_to_int(true))
    .execute(pool)
    .await?;

    seeded("client_settings", 1);
    Ok(())
}

async fn seed_stats(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    if !table_is_empty(pool, "stats").await? {
        return Ok(());
    }

    let mut tx = pool.begin().await?;
    for (id, label, value, icon) in STATS {
        sqlx::query("INSERT INTO stats (id, label, value, icon) VALUES (?, ?, ?, ?)")
            .bind(*id)
            .bind(*label)
            .bind(*value)
            .bind(*icon)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    seeded("stats", STATS.len());
    Ok(())
}

async fn seed_subscribers(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    if !table_is_empty(pool, "subscribers").await? {
        return Ok(());
    }

    let mut tx = pool.begin().await?;
    for email in SUBSCRIBERS {
        sqlx::query("INSERT INTO subscribers (email) VALUES (?)")
            .bind(*email)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    seeded("subscribers", SUBSCRIBERS.len());
    Ok(())
}
