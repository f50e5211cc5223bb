//! HTML bodies for transactional mail. Kept deliberately small: a shared
//! shell plus one detail block per message kind.

fn shell(heading: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <body style="font-family: 'Segoe UI', Arial, sans-serif; color: #333;">
    <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
      <div style="background: #DC2626; color: white; padding: 24px; text-align: center; border-radius: 10px 10px 0 0;">
        <h1 style="margin: 0;">{heading}</h1>
      </div>
      <div style="background: #f8f9fa; padding: 24px; border-radius: 0 0 10px 10px;">
        {body}
        <p style="color: #666; font-size: 14px;">— The TurfNow Team</p>
      </div>
    </div>
  </body>
</html>"#
    )
}

fn detail_row(label: &str, value: &str) -> String {
    format!(
        r#"<p style="margin: 6px 0;"><span style="color: #666;">{label}:</span> <strong>{value}</strong></p>"#
    )
}

pub struct BookingConfirmation<'a> {
    pub customer_name: &'a str,
    pub turf_name: &'a str,
    pub date: &'a str,
    pub time: &'a str,
    pub amount: &'a str,
    pub booking_id: &'a str,
}

pub fn booking_confirmation(mail: BookingConfirmation<'_>) -> String {
    let body = format!(
        "<p>Hi <strong>{}</strong>,</p>\
         <p>Your turf booking has been confirmed! Here are the details:</p>{}{}{}{}{}",
        mail.customer_name,
        detail_row("Booking ID", &format!("#{}", mail.booking_id)),
        detail_row("Turf", mail.turf_name),
        detail_row("Date", mail.date),
        detail_row("Time Slot", mail.time),
        detail_row("Amount", &format!("₹{}", mail.amount)),
    );
    shell("🏟️ Booking Confirmed!", &body)
}

pub struct BookingCancellation<'a> {
    pub customer_name: &'a str,
    pub turf_name: &'a str,
    pub date: &'a str,
    pub time: &'a str,
}

pub fn booking_cancellation(mail: BookingCancellation<'_>) -> String {
    let body = format!(
        "<p>Hi <strong>{}</strong>,</p>\
         <p>Your booking has been cancelled.</p>{}{}{}\
         <p>Refund will be processed within 5-7 business days.</p>",
        mail.customer_name,
        detail_row("Turf", mail.turf_name),
        detail_row("Date", mail.date),
        detail_row("Time Slot", mail.time),
    );
    shell("Booking Cancelled", &body)
}

pub struct OwnerRegistrationPending<'a> {
    pub full_name: &'a str,
    pub business_name: &'a str,
}

pub fn owner_registration_pending(mail: OwnerRegistrationPending<'_>) -> String {
    let body = format!(
        "<p>Hi <strong>{}</strong>,</p>\
         <p>We received your registration for <strong>{}</strong>. Our team will \
         review your application and get back to you shortly.</p>",
        mail.full_name, mail.business_name,
    );
    shell("Registration Received", &body)
}

pub struct OwnerApproved<'a> {
    pub full_name: &'a str,
    pub business_name: &'a str,
}

pub fn owner_approved(mail: OwnerApproved<'_>) -> String {
    let body = format!(
        "<p>Hi <strong>{}</strong>,</p>\
         <p>Great news — <strong>{}</strong> is now an approved TurfNow venue. \
         You can start listing turfs from your dashboard.</p>",
        mail.full_name, mail.business_name,
    );
    shell("🎉 Your Owner Account is Approved!", &body)
}

pub struct OwnerRejected<'a> {
    pub full_name: &'a str,
    pub reason: &'a str,
}

pub fn owner_rejected(mail: OwnerRejected<'_>) -> String {
    let body = format!(
        "<p>Hi <strong>{}</strong>,</p>\
         <p>We reviewed your owner application and cannot approve it at this time.</p>{}",
        mail.full_name,
        detail_row("Reason", mail.reason),
    );
    shell("Owner Application Update", &body)
}
