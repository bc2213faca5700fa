//! Store home page and newsletter signup.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, response::Redirect};
use serde::Deserialize;
use tracing::instrument;

use dukkan_core::Email;

use crate::context::{PageContext, StoreContext};
use crate::error::Result;
use crate::filters;
use crate::sections::{RenderedSection, render_layout};

/// Home page template.
///
/// Header and footer are part of the layout here, so the base template's
/// header and footer blocks are left empty.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub page: PageContext,
    pub sections: Vec<RenderedSection>,
}

/// Display the home page.
#[instrument(skip(ctx), fields(store = %ctx.store_id()))]
pub async fn show(ctx: StoreContext) -> Result<HomeTemplate> {
    let cart_count = ctx.cart().await?.item_count();
    let wishlist = ctx.wishlist().await?;
    let sections = render_layout(&ctx.document.layout, &ctx.sections(cart_count, &wishlist))?;

    Ok(HomeTemplate {
        page: ctx.page_with("", String::new(), String::new()),
        sections,
    })
}

/// Newsletter form data.
#[derive(Debug, Deserialize)]
pub struct NewsletterForm {
    pub email: String,
}

/// Handle a newsletter signup.
///
/// There is no mailing backend; the signup is logged and acknowledged.
#[instrument(skip(ctx, form), fields(store = %ctx.store_id()))]
pub async fn newsletter(ctx: StoreContext, Form(form): Form<NewsletterForm>) -> Redirect {
    match Email::parse(&form.email) {
        Ok(email) => {
            tracing::info!(email = %email.masked(), "Newsletter signup");
            ctx.redirect_notice("", "home.newsletter_thanks")
        }
        Err(e) => {
            tracing::debug!("Rejected newsletter email: {e}");
            ctx.redirect_error("", "error.invalid_email")
        }
    }
}
