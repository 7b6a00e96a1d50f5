//! Electronic communication code sets.

use crate::systems::{HL7_ADDRESS_USE, HL7_URL_SCHEME};

code_set! {
    /// How a telecommunication address is used.
    pub enum TelecomUse {
        Home => ("H", "Home", HL7_ADDRESS_USE),
        WorkPlace => ("WP", "Work Place", HL7_ADDRESS_USE),
        Mobile => ("MC", "Mobile Contact", HL7_ADDRESS_USE),
        Pager => ("PG", "Pager", HL7_ADDRESS_USE),
        Temporary => ("TMP", "Temporary", HL7_ADDRESS_USE),
        EmergencyContact => ("EC", "Emergency Contact", HL7_ADDRESS_USE),
    }
}

code_set! {
    /// Communication channel of a telecommunication address, expressed as a URL scheme.
    pub enum TelecomMedium {
        Telephone => ("tel", "Telephone", HL7_URL_SCHEME),
        Fax => ("fax", "Fax", HL7_URL_SCHEME),
        Email => ("mailto", "Email", HL7_URL_SCHEME),
        Web => ("http", "Web", HL7_URL_SCHEME),
    }
}

impl TelecomMedium {
    /// Render `address` as a URL in this medium, e.g. `tel:0355501234`.
    pub fn to_url(self, address: &str) -> String {
        use crate::CodeSet;
        match self {
            Self::Web => address.to_string(),
            _ => format!("{}:{}", self.code(), address.trim()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_medium_urls() {
        assert_eq!(TelecomMedium::Telephone.to_url("0355501234"), "tel:0355501234");
        assert_eq!(
            TelecomMedium::Email.to_url(" reception@example.org.au "),
            "mailto:reception@example.org.au"
        );
        assert_eq!(
            TelecomMedium::Web.to_url("https://example.org.au"),
            "https://example.org.au"
        );
    }
}
