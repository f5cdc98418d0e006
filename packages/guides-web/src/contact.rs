//! Outbound contact links for provider cards

const WHATSAPP_BASE_URL: &str = "https://wa.me/";

/// `tel:` link for a phone number, if there is one.
pub fn tel_href(phone_number: Option<&str>) -> Option<String> {
    let phone = phone_number?.trim();
    if phone.is_empty() {
        return None;
    }
    Some(format!("tel:{phone}"))
}

/// WhatsApp click-to-chat link. Every non-digit is stripped from the number;
/// a number with no digits at all gets no link.
pub fn whatsapp_href(whatsapp_number: Option<&str>) -> Option<String> {
    let digits: String = whatsapp_number?
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    if digits.is_empty() {
        return None;
    }
    Some(format!("{WHATSAPP_BASE_URL}{digits}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tel_link_uses_number_as_given() {
        assert_eq!(
            tel_href(Some("+263 77 123 4567")).as_deref(),
            Some("tel:+263 77 123 4567")
        );
    }

    #[test]
    fn blank_phone_gets_no_link() {
        assert_eq!(tel_href(None), None);
        assert_eq!(tel_href(Some("")), None);
        assert_eq!(tel_href(Some("   ")), None);
    }

    #[test]
    fn whatsapp_link_strips_non_digits() {
        assert_eq!(
            whatsapp_href(Some("+263 (77) 123-4567")).as_deref(),
            Some("https://wa.me/263771234567")
        );
    }

    #[test]
    fn whatsapp_without_digits_gets_no_link() {
        assert_eq!(whatsapp_href(None), None);
        assert_eq!(whatsapp_href(Some("")), None);
        assert_eq!(whatsapp_href(Some("n/a")), None);
    }
}
