use actix_web::{web, HttpResponse, Responder};
use tracing::{info, instrument};
use validator::Validate;

use crate::{
    entities::contact_me::{ContactReply, ContactSubmission},
    errors::AppError,
};

/// Accepts a contact message once every field passes validation. Delivery is
/// left to whatever consumes the logs.
#[instrument(skip(form), fields(email_domain = tracing::field::Empty))]
pub async fn create_contact_me(
    form: web::Json<ContactSubmission>,
) -> Result<impl Responder, AppError> {
    let submission = form.into_inner();
    submission.validate()?;

    let domain = submission.email.rsplit('@').next().unwrap_or_default();
    tracing::Span::current().record("email_domain", domain);
    info!(
        subject = %submission.subject,
        message_chars = submission.message.chars().count(),
        "Contact message accepted"
    );

    Ok(HttpResponse::Ok().json(ContactReply {
        success: Some(true),
        message: Some("Thank you! Your message has been sent.".to_string()),
        error: None,
    }))
}
