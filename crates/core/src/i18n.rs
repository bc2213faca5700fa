//! Translation catalog.
//!
//! Arabic is the primary locale; English exists for operators and tests.
//! Lookups fall back to Arabic and then to the key itself, so a missing
//! entry shows up as its key rather than an empty string.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::rtl::Direction;

/// Supported locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ar,
    En,
}

impl Locale {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::En => "en",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "ar" => Some(Self::Ar),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Self::Ar => Direction::Rtl,
            Self::En => Direction::Ltr,
        }
    }
}

/// Lookup handle for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Translations {
    locale: Locale,
}

impl Translations {
    #[must_use]
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.locale.direction()
    }

    /// Translate `key`, falling back to Arabic, then to the key.
    #[must_use]
    pub fn get<'a>(&self, key: &'a str) -> &'a str {
        let Some(&(ar, en)) = CATALOG.get(key) else {
            return key;
        };
        match self.locale {
            Locale::En if !en.is_empty() => en,
            _ => ar,
        }
    }

    /// Translate and substitute `{name}` placeholders.
    #[must_use]
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        args.iter()
            .fold(self.get(key).to_owned(), |text, (name, value)| {
                text.replace(&format!("{{{name}}}"), value)
            })
    }

    /// Whether the key exists in the catalog.
    #[must_use]
    pub fn contains(key: &str) -> bool {
        CATALOG.contains_key(key)
    }
}

static CATALOG: LazyLock<HashMap<&'static str, (&'static str, &'static str)>> =
    LazyLock::new(|| ENTRIES.iter().map(|(k, ar, en)| (*k, (*ar, *en))).collect());

/// `(key, arabic, english)`. An empty English string falls back to Arabic.
const ENTRIES: &[(&str, &str, &str)] = &[
    // Navigation
    ("nav.home", "الرئيسية", "Home"),
    ("nav.categories", "الأقسام", "Categories"),
    ("nav.about", "من نحن", "About"),
    ("nav.contact", "تواصل معنا", "Contact"),
    ("nav.cart", "السلة", "Cart"),
    ("nav.login", "تسجيل الدخول", "Log in"),
    ("nav.signup", "إنشاء حساب", "Sign up"),
    ("nav.logout", "تسجيل الخروج", "Log out"),
    ("nav.stores", "كل المتاجر", "All stores"),
    ("nav.hello", "مرحباً، {name}", "Hello, {name}"),
    ("nav.menu", "القائمة", "Menu"),
    // Common
    ("common.add_to_cart", "أضف إلى السلة", "Add to cart"),
    ("common.shop_now", "تسوق الآن", "Shop now"),
    ("common.view_all", "عرض الكل", "View all"),
    ("common.back", "رجوع", "Back"),
    ("common.next", "التالي", "Next"),
    ("common.previous", "السابق", "Previous"),
    ("common.free", "مجاني", "Free"),
    ("common.in_stock", "متوفر", "In stock"),
    ("common.out_of_stock", "نفد المخزون", "Out of stock"),
    ("common.left_in_stock", "متبقي {n} فقط", "Only {n} left"),
    ("common.reviews", "{n} تقييم", "{n} reviews"),
    ("common.quantity", "الكمية", "Quantity"),
    ("common.remove", "حذف", "Remove"),
    ("common.increase", "زيادة", "Increase"),
    ("common.decrease", "إنقاص", "Decrease"),
    ("common.submit", "إرسال", "Submit"),
    ("common.required", "مطلوب", "Required"),
    // Home
    ("home.categories_title", "تسوق حسب القسم", "Shop by category"),
    ("home.featured_title", "منتجات مميزة", "Featured products"),
    ("home.newsletter_title", "اشترك في نشرتنا", "Join our newsletter"),
    ("home.newsletter_body", "كن أول من يعرف عن العروض والمنتجات الجديدة", "Be the first to hear about offers and new arrivals"),
    ("home.newsletter_placeholder", "بريدك الإلكتروني", "Your email"),
    ("home.newsletter_button", "اشترك", "Subscribe"),
    ("home.newsletter_thanks", "تم اشتراكك في النشرة", "You are subscribed"),
    ("home.slide", "الشريحة {n}", "Slide {n}"),
    // Product
    ("product.description", "الوصف", "Description"),
    ("product.features", "المميزات", "Features"),
    ("product.related", "منتجات ذات صلة", "Related products"),
    ("product.brand", "العلامة التجارية", "Brand"),
    ("product.discount", "خصم {n}%", "{n}% off"),
    ("product.choose", "اختر", "Choose"),
    ("product.wishlist_add", "أضف إلى المفضلة", "Add to wishlist"),
    ("product.wishlist_remove", "إزالة من المفضلة", "Remove from wishlist"),
    ("product.gallery", "صور المنتج", "Product images"),
    ("option.size", "المقاس", "Size"),
    ("option.color", "اللون", "Color"),
    ("option.warranty", "الضمان", "Warranty"),
    ("option.age_group", "الفئة العمرية", "Age group"),
    ("option.license", "نوع الترخيص", "License"),
    // Category
    ("category.products_count", "{n} منتج", "{n} products"),
    ("category.empty", "لا توجد منتجات في هذا القسم حالياً", "No products in this category yet"),
    // Cart
    ("cart.title", "سلة التسوق", "Shopping cart"),
    ("cart.empty", "سلتك فارغة", "Your cart is empty"),
    ("cart.continue_shopping", "متابعة التسوق", "Continue shopping"),
    ("cart.subtotal", "المجموع الفرعي", "Subtotal"),
    ("cart.tax", "ضريبة القيمة المضافة (15%)", "VAT (15%)"),
    ("cart.shipping", "الشحن", "Shipping"),
    ("cart.total", "الإجمالي", "Total"),
    ("cart.checkout", "إتمام الشراء", "Checkout"),
    ("cart.summary", "ملخص الطلب", "Order summary"),
    ("cart.added", "تمت إضافة المنتج إلى السلة", "Added to cart"),
    ("cart.updated", "تم تحديث السلة", "Cart updated"),
    ("cart.removed", "تمت إزالة المنتج من السلة", "Removed from cart"),
    ("wishlist.added", "تمت الإضافة إلى المفضلة", "Added to wishlist"),
    ("wishlist.removed", "تمت الإزالة من المفضلة", "Removed from wishlist"),
    ("cart.free_over", "شحن مجاني للطلبات فوق {amount}", "Free shipping over {amount}"),
    // Checkout
    ("checkout.title", "إتمام الطلب", "Checkout"),
    ("checkout.step_shipping", "الشحن", "Shipping"),
    ("checkout.step_payment", "الدفع", "Payment"),
    ("checkout.step_review", "المراجعة", "Review"),
    ("checkout.full_name", "الاسم الكامل", "Full name"),
    ("checkout.email", "البريد الإلكتروني", "Email"),
    ("checkout.phone", "رقم الجوال", "Phone"),
    ("checkout.city", "المدينة", "City"),
    ("checkout.district", "الحي", "District"),
    ("checkout.street", "الشارع", "Street"),
    ("checkout.postal_code", "الرمز البريدي", "Postal code"),
    ("checkout.notes", "ملاحظات الطلب", "Order notes"),
    ("checkout.create_account", "إنشاء حساب لتسريع طلباتك القادمة", "Create an account for faster checkout"),
    ("checkout.continue_payment", "المتابعة إلى الدفع", "Continue to payment"),
    ("checkout.continue_review", "مراجعة الطلب", "Review order"),
    ("checkout.payment_method", "طريقة الدفع", "Payment method"),
    ("checkout.card_name", "الاسم على البطاقة", "Name on card"),
    ("checkout.card_number", "رقم البطاقة", "Card number"),
    ("checkout.expiry", "تاريخ الانتهاء (MM/YY)", "Expiry (MM/YY)"),
    ("checkout.cvv", "رمز التحقق", "CVV"),
    ("checkout.ship_to", "الشحن إلى", "Ship to"),
    ("checkout.pay_with", "الدفع عبر", "Pay with"),
    ("checkout.card_ending", "بطاقة تنتهي بـ {last4}", "Card ending in {last4}"),
    ("checkout.accept_terms", "أوافق على الشروط والأحكام", "I accept the terms and conditions"),
    ("checkout.place_order", "تأكيد الطلب", "Place order"),
    ("checkout.complete_title", "شكراً لطلبك!", "Thank you for your order!"),
    ("checkout.complete_body", "تم استلام طلبك وسنرسل لك التفاصيل عبر البريد الإلكتروني", "We received your order and will email you the details"),
    ("checkout.order_number", "رقم الطلب", "Order number"),
    ("checkout.account_created", "تم إنشاء حسابك", "Your account was created"),
    ("payment.card", "بطاقة ائتمانية", "Credit card"),
    ("payment.mada", "مدى", "Mada"),
    ("payment.apple_pay", "Apple Pay", "Apple Pay"),
    ("payment.cash_on_delivery", "الدفع عند الاستلام", "Cash on delivery"),
    // Auth
    ("auth.login_title", "تسجيل الدخول", "Log in"),
    ("auth.signup_title", "إنشاء حساب جديد", "Create an account"),
    ("auth.name", "الاسم", "Name"),
    ("auth.email", "البريد الإلكتروني", "Email"),
    ("auth.password", "كلمة المرور", "Password"),
    ("auth.confirm_password", "تأكيد كلمة المرور", "Confirm password"),
    ("auth.password_hint", "8 أحرف على الأقل", "At least 8 characters"),
    ("auth.accept_terms", "أوافق على الشروط والأحكام وسياسة الخصوصية", "I accept the terms and privacy policy"),
    ("auth.login_button", "دخول", "Log in"),
    ("auth.signup_button", "إنشاء الحساب", "Create account"),
    ("auth.no_account", "ليس لديك حساب؟", "No account yet?"),
    ("auth.have_account", "لديك حساب بالفعل؟", "Already have an account?"),
    ("auth.welcome", "أهلاً بك", "Welcome"),
    ("auth.logged_out", "تم تسجيل الخروج", "You are logged out"),
    // About
    ("about.title", "من نحن", "About us"),
    ("about.story", "قصتنا", "Our story"),
    ("about.values", "قيمنا", "Our values"),
    ("about.founded", "منذ عام {year}", "Since {year}"),
    // Contact
    ("contact.title", "تواصل معنا", "Contact us"),
    ("contact.name", "الاسم", "Name"),
    ("contact.email", "البريد الإلكتروني", "Email"),
    ("contact.subject", "الموضوع", "Subject"),
    ("contact.message", "رسالتك", "Message"),
    ("contact.send", "إرسال الرسالة", "Send message"),
    ("contact.success", "شكراً لتواصلك معنا، سنرد عليك قريباً", "Thanks for reaching out, we will reply soon"),
    ("contact.phone", "الهاتف", "Phone"),
    ("contact.whatsapp", "واتساب", "WhatsApp"),
    ("contact.address", "العنوان", "Address"),
    ("contact.hours", "ساعات العمل", "Opening hours"),
    // Footer
    ("footer.rights", "جميع الحقوق محفوظة", "All rights reserved"),
    ("footer.links", "روابط سريعة", "Quick links"),
    ("footer.contact", "معلومات التواصل", "Contact details"),
    // Store directory
    ("stores.title", "متاجر دكّان", "Dukkan stores"),
    ("stores.subtitle", "ثمانية متاجر، ثمانية تصاميم", "Eight stores, eight themes"),
    ("stores.visit", "زيارة المتجر", "Visit store"),
    ("stores.theme", "التصميم", "Theme"),
    // Sections
    ("section.header", "الترويسة", "Header"),
    ("section.hero", "الشرائح الرئيسية", "Hero slider"),
    ("section.categories", "الأقسام", "Categories"),
    ("section.featured", "منتجات مميزة", "Featured products"),
    ("section.newsletter", "النشرة البريدية", "Newsletter"),
    ("section.footer", "التذييل", "Footer"),
    // Errors
    ("error.select_size", "الرجاء اختيار المقاس", "Please select a size"),
    ("error.select_color", "الرجاء اختيار اللون", "Please select a color"),
    ("error.select_warranty", "الرجاء اختيار الضمان", "Please select a warranty"),
    ("error.select_age_group", "الرجاء اختيار الفئة العمرية", "Please select an age group"),
    ("error.select_license", "الرجاء اختيار نوع الترخيص", "Please select a license"),
    ("error.invalid_option", "الخيار المحدد غير متاح", "The selected option is not available"),
    ("error.out_of_stock", "عذراً، هذا المنتج غير متوفر حالياً", "Sorry, this product is out of stock"),
    ("error.exceeds_stock", "الكمية المطلوبة تتجاوز المخزون المتاح", "Requested quantity exceeds available stock"),
    ("error.invalid_quantity", "الكمية غير صالحة", "Invalid quantity"),
    ("error.line_not_found", "المنتج غير موجود في السلة", "Item not found in cart"),
    ("error.name_required", "الرجاء إدخال الاسم", "Please enter your name"),
    ("error.name_too_long", "الاسم طويل جداً", "Name is too long"),
    ("error.invalid_email", "البريد الإلكتروني غير صالح", "Invalid email address"),
    ("error.password_required", "الرجاء إدخال كلمة المرور", "Please enter a password"),
    ("error.password_too_short", "كلمة المرور يجب أن تكون 8 أحرف على الأقل", "Password must be at least 8 characters"),
    ("error.password_too_long", "كلمة المرور طويلة جداً", "Password is too long"),
    ("error.password_mismatch", "كلمتا المرور غير متطابقتين", "Passwords do not match"),
    ("error.terms_required", "يجب الموافقة على الشروط والأحكام", "You must accept the terms and conditions"),
    ("error.required_fields", "الرجاء تعبئة جميع الحقول المطلوبة", "Please fill in all required fields"),
    ("error.invalid_phone", "رقم الجوال غير صالح", "Invalid phone number"),
    ("error.payment_method", "الرجاء اختيار طريقة دفع صالحة", "Please choose a valid payment method"),
    ("error.card_number", "رقم البطاقة غير صالح", "Invalid card number"),
    ("error.card_expiry", "تاريخ انتهاء البطاقة غير صالح", "Invalid card expiry date"),
    ("error.card_expired", "البطاقة منتهية الصلاحية", "The card has expired"),
    ("error.card_cvv", "رمز التحقق غير صالح", "Invalid security code"),
    ("error.cart_empty", "سلتك فارغة", "Your cart is empty"),
    ("error.checkout_step", "الرجاء إكمال الخطوة السابقة أولاً", "Please complete the previous step first"),
    ("error.invalid_credentials", "البريد الإلكتروني أو كلمة المرور غير صحيحة", "Incorrect email or password"),
    ("error.email_taken", "يوجد حساب مسجل بهذا البريد الإلكتروني", "An account with this email already exists"),
    ("error.message_required", "الرجاء كتابة رسالتك", "Please write your message"),
    ("error.message_too_long", "الرسالة طويلة جداً", "Message is too long"),
    ("error.not_found", "الصفحة غير موجودة", "Page not found"),
    ("error.internal", "حدث خطأ غير متوقع، حاول مرة أخرى", "Something went wrong, please try again"),
    ("error.rate_limited", "محاولات كثيرة، حاول لاحقاً", "Too many attempts, try again later"),
    ("error.session", "انتهت الجلسة، حاول مرة أخرى", "Your session expired, please try again"),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_arabic_is_default() {
        let t = Translations::default();
        assert_eq!(t.locale(), Locale::Ar);
        assert_eq!(t.get("cart.title"), "سلة التسوق");
        assert_eq!(t.direction(), Direction::Rtl);
    }

    #[test]
    fn test_english_lookup() {
        let t = Translations::new(Locale::En);
        assert_eq!(t.get("cart.title"), "Shopping cart");
        assert_eq!(t.direction(), Direction::Ltr);
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        let t = Translations::new(Locale::En);
        assert_eq!(t.get("nope.missing"), "nope.missing");
    }

    #[test]
    fn test_format_substitutes_placeholders() {
        let t = Translations::default();
        assert_eq!(
            t.format("product.discount", &[("n", "25")]),
            "خصم 25%"
        );
    }

    #[test]
    fn test_keys_unique_and_arabic_complete() {
        let mut seen = HashSet::new();
        for (key, ar, _) in ENTRIES {
            assert!(seen.insert(*key), "duplicate key {key}");
            assert!(!ar.is_empty(), "{key} has no Arabic text");
        }
    }

    #[test]
    fn test_error_keys_used_by_domain_exist() {
        use crate::account::AccountFormError;
        use crate::cart::CartError;
        use crate::catalog::OptionKind;
        use crate::types::LineId;

        let keys = [
            CartError::MissingOption(OptionKind::AgeGroup).message_key(),
            CartError::OutOfStock.message_key(),
            CartError::QuantityExceedsStock { available: 1 }.message_key(),
            CartError::LineNotFound(LineId::new(1)).message_key(),
            AccountFormError::PasswordMismatch.message_key(),
            AccountFormError::TermsNotAccepted.message_key(),
            OptionKind::License.label_key(),
        ];
        for key in keys {
            assert!(Translations::contains(key), "{key}");
        }
    }

    #[test]
    fn test_locale_codes() {
        assert_eq!(Locale::from_code("EN"), Some(Locale::En));
        assert_eq!(Locale::from_code("fr"), None);
    }
}
