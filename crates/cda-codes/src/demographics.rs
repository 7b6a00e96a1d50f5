//! Demographic code sets (AS 5017, METeOR and HL7 address use).

use crate::systems::{AS5017_SEX, HL7_ADDRESS_USE, METEOR_INDIGENOUS_STATUS, METEOR_STATE_TERRITORY};

code_set! {
    /// Sex of a person, as recorded on the subject of care.
    pub enum Sex {
        Male => ("M", "Male", AS5017_SEX),
        Female => ("F", "Female", AS5017_SEX),
        IntersexOrIndeterminate => ("I", "Intersex or Indeterminate", AS5017_SEX),
        NotStated => ("N", "Not Stated/Inadequately Described", AS5017_SEX),
    }
}

code_set! {
    /// Whether a person identifies as being of Aboriginal or Torres Strait Islander origin.
    pub enum IndigenousStatus {
        AboriginalNotTorresStrait => ("1", "Aboriginal but not Torres Strait Islander origin", METEOR_INDIGENOUS_STATUS),
        TorresStraitNotAboriginal => ("2", "Torres Strait Islander but not Aboriginal origin", METEOR_INDIGENOUS_STATUS),
        BothAboriginalAndTorresStrait => ("3", "Both Aboriginal and Torres Strait Islander origin", METEOR_INDIGENOUS_STATUS),
        NeitherAboriginalNorTorresStrait => ("4", "Neither Aboriginal nor Torres Strait Islander origin", METEOR_INDIGENOUS_STATUS),
        NotStated => ("9", "Not stated/inadequately described", METEOR_INDIGENOUS_STATUS),
    }
}

code_set! {
    /// Australian state or territory of an address.
    pub enum AustralianState {
        NewSouthWales => ("1", "New South Wales", METEOR_STATE_TERRITORY, alt = "NSW"),
        Victoria => ("2", "Victoria", METEOR_STATE_TERRITORY, alt = "VIC"),
        Queensland => ("3", "Queensland", METEOR_STATE_TERRITORY, alt = "QLD"),
        SouthAustralia => ("4", "South Australia", METEOR_STATE_TERRITORY, alt = "SA"),
        WesternAustralia => ("5", "Western Australia", METEOR_STATE_TERRITORY, alt = "WA"),
        Tasmania => ("6", "Tasmania", METEOR_STATE_TERRITORY, alt = "TAS"),
        NorthernTerritory => ("7", "Northern Territory", METEOR_STATE_TERRITORY, alt = "NT"),
        AustralianCapitalTerritory => ("8", "Australian Capital Territory", METEOR_STATE_TERRITORY, alt = "ACT"),
        OtherTerritories => ("9", "Other Territories", METEOR_STATE_TERRITORY),
    }
}

code_set! {
    /// Purpose of a postal address.
    pub enum AddressPurpose {
        Home => ("H", "Home", HL7_ADDRESS_USE),
        WorkPlace => ("WP", "Work Place", HL7_ADDRESS_USE),
        Temporary => ("TMP", "Temporary", HL7_ADDRESS_USE),
        Postal => ("PST", "Postal Address", HL7_ADDRESS_USE),
    }
}
