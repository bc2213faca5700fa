//! Home page sections and their renderers.
//!
//! The home page is the store's [`Layout`] rendered in order. Each
//! [`SectionId`] maps to one renderer in [`SECTION_RENDERERS`]; the admin's
//! live preview walks the same table, so preview and storefront always agree.

use askama::Template;

use dukkan_core::ProductId;
use dukkan_core::builder::{Layout, SectionId, ThemeSettings};
use dukkan_core::catalog::StoreCatalog;
use dukkan_core::i18n::Translations;
use dukkan_core::slider::SliderState;

use crate::views::{CategoryCard, NavLink, ProductCard, count};

/// Everything a section needs to render.
pub struct SectionContext<'a> {
    pub t: Translations,
    /// `/stores/{store_id}`
    pub base_path: String,
    pub catalog: &'a StoreCatalog,
    pub settings: &'a ThemeSettings,
    pub cart_count: u32,
    pub customer_name: Option<String>,
    pub wishlist: &'a [ProductId],
}

impl SectionContext<'_> {
    fn nav(&self) -> Vec<NavLink> {
        let mut links = vec![NavLink {
            href: self.base_path.clone(),
            label: self.t.get("nav.home").to_owned(),
        }];
        links.extend(self.catalog.categories.iter().map(|c| NavLink {
            href: format!("{}/categories/{}", self.base_path, c.id),
            label: c.name.clone(),
        }));
        links.push(NavLink {
            href: format!("{}/about", self.base_path),
            label: self.t.get("nav.about").to_owned(),
        });
        links.push(NavLink {
            href: format!("{}/contact", self.base_path),
            label: self.t.get("nav.contact").to_owned(),
        });
        links
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

#[derive(Template)]
#[template(path = "sections/header.html")]
pub struct HeaderSection {
    pub t: Translations,
    pub base_path: String,
    pub store_name: String,
    pub logo_url: Option<String>,
    pub announcement: Option<String>,
    pub nav: Vec<NavLink>,
    pub cart_count: String,
    pub greeting: Option<String>,
}

/// One hero slide for display.
pub struct SlideView {
    pub index: usize,
    pub title: String,
    pub subtitle: String,
    pub cta_label: String,
    pub href: String,
    pub image: String,
    pub label: String,
}

#[derive(Template)]
#[template(path = "sections/hero.html")]
pub struct HeroSection {
    pub t: Translations,
    pub hero_class: &'static str,
    pub slides: Vec<SlideView>,
    pub interval_ms: u32,
    pub autoplay: bool,
    pub prev_chevron: &'static str,
    pub next_chevron: &'static str,
}

#[derive(Template)]
#[template(path = "sections/categories.html")]
pub struct CategoriesSection {
    pub t: Translations,
    pub categories: Vec<CategoryCard>,
}

#[derive(Template)]
#[template(path = "sections/featured.html")]
pub struct FeaturedSection {
    pub t: Translations,
    pub base_path: String,
    /// Store-relative page the wishlist toggle returns to.
    pub back: &'static str,
    pub products: Vec<ProductCard>,
    pub show_ratings: bool,
    pub show_wishlist: bool,
}

#[derive(Template)]
#[template(path = "sections/newsletter.html")]
pub struct NewsletterSection {
    pub t: Translations,
    pub base_path: String,
}

#[derive(Template)]
#[template(path = "sections/footer.html")]
pub struct FooterSection {
    pub t: Translations,
    pub store_name: String,
    pub tagline: String,
    pub nav: Vec<NavLink>,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub whatsapp_href: Option<String>,
    pub rights: String,
}

/// Renders one section to HTML.
pub type SectionRenderer = fn(&SectionContext<'_>) -> askama::Result<String>;

/// Section renderers, keyed by section id.
pub const SECTION_RENDERERS: [(SectionId, SectionRenderer); 6] = [
    (SectionId::Header, render_header as SectionRenderer),
    (SectionId::Hero, render_hero as SectionRenderer),
    (SectionId::Categories, render_categories as SectionRenderer),
    (SectionId::Featured, render_featured as SectionRenderer),
    (SectionId::Newsletter, render_newsletter as SectionRenderer),
    (SectionId::Footer, render_footer as SectionRenderer),
];

/// Look up the renderer for a section.
#[must_use]
pub fn renderer_for(id: SectionId) -> Option<SectionRenderer> {
    SECTION_RENDERERS
        .iter()
        .find(|(section, _)| *section == id)
        .map(|(_, render)| *render)
}

/// A rendered section, ready to place in a page.
pub struct RenderedSection {
    pub key: &'static str,
    pub html: String,
}

/// Render one section.
///
/// # Errors
///
/// Returns an error if the template fails to render or no renderer is
/// registered for the section.
pub fn render_section(id: SectionId, ctx: &SectionContext<'_>) -> askama::Result<String> {
    let render = renderer_for(id).ok_or_else(|| {
        askama::Error::Custom(format!("no renderer for section {}", id.key()).into())
    })?;
    render(ctx)
}

/// Render every section of a layout, in layout order.
///
/// # Errors
///
/// Returns the first rendering error.
pub fn render_layout(
    layout: &Layout,
    ctx: &SectionContext<'_>,
) -> askama::Result<Vec<RenderedSection>> {
    layout
        .ids()
        .map(|id| {
            Ok(RenderedSection {
                key: id.key(),
                html: render_section(id, ctx)?,
            })
        })
        .collect()
}

fn render_header(ctx: &SectionContext<'_>) -> askama::Result<String> {
    let s = ctx.settings;
    HeaderSection {
        t: ctx.t,
        base_path: ctx.base_path.clone(),
        store_name: ctx.catalog.profile.name.clone(),
        logo_url: non_empty(&s.advanced.logo_url),
        announcement: s
            .widgets
            .show_announcement
            .then(|| non_empty(&s.advanced.announcement_text))
            .flatten(),
        nav: ctx.nav(),
        cart_count: count(&ctx.t, ctx.cart_count),
        greeting: ctx
            .customer_name
            .as_ref()
            .map(|name| ctx.t.format("nav.hello", &[("name", name.as_str())])),
    }
    .render()
}

fn render_hero(ctx: &SectionContext<'_>) -> askama::Result<String> {
    let widgets = &ctx.settings.widgets;
    let slides = &ctx.catalog.slides;
    let slider = SliderState::new(slides.len(), widgets.slide_interval_ms);
    let direction = ctx.t.direction();

    HeroSection {
        t: ctx.t,
        hero_class: ctx.settings.effects.hero_style.css_class(),
        slides: slides
            .iter()
            .enumerate()
            .map(|(index, slide)| SlideView {
                index,
                title: slide.title.clone(),
                subtitle: slide.subtitle.clone(),
                cta_label: slide.cta_label.clone(),
                href: format!("{}/{}", ctx.base_path, slide.cta_path),
                image: slide.image.clone(),
                label: ctx.t.format("home.slide", &[("n", &count(&ctx.t, index + 1))]),
            })
            .collect(),
        interval_ms: slider.interval_ms(),
        autoplay: widgets.slider_autoplay && slider.is_auto_playing(),
        prev_chevron: direction.prev_chevron(),
        next_chevron: direction.next_chevron(),
    }
    .render()
}

fn render_categories(ctx: &SectionContext<'_>) -> askama::Result<String> {
    CategoriesSection {
        t: ctx.t,
        categories: ctx
            .catalog
            .categories
            .iter()
            .map(|c| CategoryCard::new(&ctx.t, &ctx.base_path, ctx.catalog, c))
            .collect(),
    }
    .render()
}

fn render_featured(ctx: &SectionContext<'_>) -> askama::Result<String> {
    let widgets = &ctx.settings.widgets;
    let featured = ctx.catalog.featured(usize::from(widgets.featured_count));
    FeaturedSection {
        t: ctx.t,
        base_path: ctx.base_path.clone(),
        back: "/",
        products: ProductCard::list(&ctx.t, &ctx.base_path, featured, ctx.wishlist),
        show_ratings: widgets.show_ratings,
        show_wishlist: widgets.show_wishlist,
    }
    .render()
}

fn render_newsletter(ctx: &SectionContext<'_>) -> askama::Result<String> {
    NewsletterSection {
        t: ctx.t,
        base_path: ctx.base_path.clone(),
    }
    .render()
}

fn render_footer(ctx: &SectionContext<'_>) -> askama::Result<String> {
    use chrono::Datelike;

    let profile = &ctx.catalog.profile;
    let year = count(&ctx.t, chrono::Utc::now().year());
    FooterSection {
        t: ctx.t,
        store_name: profile.name.clone(),
        tagline: profile.tagline.clone(),
        nav: ctx.nav(),
        email: profile.contact.email.clone(),
        phone: profile.contact.phone.clone(),
        address: profile.contact.address.clone(),
        whatsapp_href: ctx
            .settings
            .widgets
            .show_whatsapp
            .then(|| format!("https://wa.me/{}", profile.contact.whatsapp)),
        rights: format!("© {year} {}. {}", profile.name, ctx.t.get("footer.rights")),
    }
    .render()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use dukkan_core::catalog::StoreDirectory;
    use dukkan_core::i18n::Locale;
    use dukkan_core::theme::ThemeKind;

    use super::*;

    fn with_ctx(f: impl FnOnce(&SectionContext<'_>)) {
        let directory = StoreDirectory::demo();
        let catalog = directory.iter().next().unwrap();
        let settings = ThemeSettings::for_theme(catalog.profile.theme);
        let ctx = SectionContext {
            t: Translations::new(Locale::Ar),
            base_path: format!("/stores/{}", catalog.profile.id),
            catalog,
            settings: &settings,
            cart_count: 2,
            customer_name: None,
            wishlist: &[],
        };
        f(&ctx);
    }

    #[test]
    fn test_every_section_has_a_renderer() {
        for id in SectionId::ALL {
            assert!(renderer_for(id).is_some(), "{}", id.key());
        }
    }

    #[test]
    fn test_layout_renders_in_order() {
        with_ctx(|ctx| {
            let mut layout = Layout::default();
            layout.reorder(4, 0).unwrap();
            let rendered = render_layout(&layout, ctx).unwrap();
            let keys: Vec<&str> = rendered.iter().map(|s| s.key).collect();
            assert_eq!(
                keys,
                ["newsletter", "header", "hero", "categories", "featured", "footer"]
            );
            assert!(rendered.iter().all(|s| !s.html.is_empty()));
        });
    }

    #[test]
    fn test_hero_carries_interval() {
        with_ctx(|ctx| {
            let html = render_section(SectionId::Hero, ctx).unwrap();
            let interval = ctx.settings.widgets.slide_interval_ms;
            assert!(html.contains(&format!("data-interval=\"{interval}\"")));
        });
    }

    #[test]
    fn test_whatsapp_toggle() {
        let directory = StoreDirectory::demo();
        let catalog = directory.iter().next().unwrap();
        let mut hidden = ThemeSettings::for_theme(ThemeKind::Minimal);
        hidden.widgets.show_whatsapp = false;
        let mut shown = hidden.clone();
        shown.widgets.show_whatsapp = true;

        let footer = |settings: &ThemeSettings| {
            let ctx = SectionContext {
                t: Translations::new(Locale::Ar),
                base_path: "/stores/minimal-boutique".to_string(),
                catalog,
                settings,
                cart_count: 0,
                customer_name: None,
                wishlist: &[],
            };
            render_section(SectionId::Footer, &ctx).unwrap()
        };
        assert!(!footer(&hidden).contains("wa.me"));
        assert!(footer(&shown).contains("wa.me"));
    }
}
