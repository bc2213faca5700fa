//! About and contact pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use dukkan_core::catalog::AboutValue;
use dukkan_core::contact::ContactRequest;

use crate::context::{PageContext, StoreContext};
use crate::error::Result;
use crate::filters;
use crate::views::count;

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub page: PageContext,
    pub tagline: String,
    pub story: String,
    pub values: Vec<AboutValue>,
    pub founded: String,
}

/// Display the about page.
#[instrument(skip(ctx), fields(store = %ctx.store_id()))]
pub async fn about(ctx: StoreContext) -> Result<AboutTemplate> {
    let t = ctx.t();
    let profile = &ctx.catalog.profile;
    Ok(AboutTemplate {
        tagline: profile.tagline.clone(),
        story: profile.about.story.clone(),
        values: profile.about.values.clone(),
        founded: t.format(
            "about.founded",
            &[("year", &count(&t, profile.about.founded_year))],
        ),
        page: ctx.page(t.get("about.title")).await?,
    })
}

/// Contact form data.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub page: PageContext,
    pub email: String,
    pub phone: String,
    pub whatsapp_href: Option<String>,
    pub address: String,
    pub hours: String,
    /// Echoed form values after a rejected submission.
    pub form: ContactForm,
}

async fn contact_page(ctx: &StoreContext, form: ContactForm) -> Result<ContactTemplate> {
    let contact = &ctx.catalog.profile.contact;
    Ok(ContactTemplate {
        page: ctx.page(ctx.t().get("contact.title")).await?,
        email: contact.email.clone(),
        phone: contact.phone.clone(),
        whatsapp_href: ctx
            .document
            .settings
            .widgets
            .show_whatsapp
            .then(|| format!("https://wa.me/{}", contact.whatsapp)),
        address: contact.address.clone(),
        hours: contact.hours.clone(),
        form,
    })
}

/// Display the contact page.
#[instrument(skip(ctx), fields(store = %ctx.store_id()))]
pub async fn contact(ctx: StoreContext) -> Result<ContactTemplate> {
    contact_page(&ctx, ContactForm::default()).await
}

/// Handle a contact form submission.
///
/// Valid messages are logged and acknowledged; there is no mail backend.
#[instrument(skip(ctx, form), fields(store = %ctx.store_id()))]
pub async fn contact_submit(ctx: StoreContext, Form(form): Form<ContactForm>) -> Result<Response> {
    let request = ContactRequest {
        name: form.name.clone(),
        email: form.email.clone(),
        subject: form.subject.clone(),
        message: form.message.clone(),
    };

    match request.validate() {
        Ok(message) => {
            tracing::info!(
                email = %message.email.masked(),
                subject = message.subject.as_deref().unwrap_or_default(),
                length = message.message.chars().count(),
                "Contact message received"
            );
            Ok(ctx.redirect_notice("/contact", "contact.success").into_response())
        }
        Err(e) => {
            tracing::debug!("Contact form rejected: {e}");
            let mut template = contact_page(&ctx, form).await?;
            template.page.set_error(e.message_key());
            Ok((StatusCode::UNPROCESSABLE_ENTITY, template).into_response())
        }
    }
}
