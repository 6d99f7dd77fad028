pub const AGENCY_NAME: &str = "Novapulse";
pub const WHATSAPP_NUMBER: &str = "358401234567";

/// WhatsApp deep link carrying a prefilled, url-encoded message.
pub fn whatsapp_link(message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        WHATSAPP_NUMBER,
        urlencoding::encode(message)
    )
}
