/// One row of the state table.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StateRef {
    pub usps: &'static str,
    pub fips: &'static str,
    pub name: &'static str,
}

/// The 50 states, DC, and the territories, in USPS order.
pub const STATES: &[StateRef] = &[
    StateRef { usps: "AL", fips: "01", name: "Alabama" },
    StateRef { usps: "AK", fips: "02", name: "Alaska" },
    StateRef { usps: "AZ", fips: "04", name: "Arizona" },
    StateRef { usps: "AR", fips: "05", name: "Arkansas" },
    StateRef { usps: "AS", fips: "60", name: "American Samoa" },
    StateRef { usps: "CA", fips: "06", name: "California" },
    StateRef { usps: "CO", fips: "08", name: "Colorado" },
    StateRef { usps: "CT", fips: "09", name: "Connecticut" },
    StateRef { usps: "DE", fips: "10", name: "Delaware" },
    StateRef { usps: "DC", fips: "11", name: "District of Columbia" },
    StateRef { usps: "FL", fips: "12", name: "Florida" },
    StateRef { usps: "GA", fips: "13", name: "Georgia" },
    StateRef { usps: "GU", fips: "66", name: "Guam" },
    StateRef { usps: "HI", fips: "15", name: "Hawaii" },
    StateRef { usps: "ID", fips: "16", name: "Idaho" },
    StateRef { usps: "IL", fips: "17", name: "Illinois" },
    StateRef { usps: "IN", fips: "18", name: "Indiana" },
    StateRef { usps: "IA", fips: "19", name: "Iowa" },
    StateRef { usps: "KS", fips: "20", name: "Kansas" },
    StateRef { usps: "KY", fips: "21", name: "Kentucky" },
    StateRef { usps: "LA", fips: "22", name: "Louisiana" },
    StateRef { usps: "ME", fips: "23", name: "Maine" },
    StateRef { usps: "MD", fips: "24", name: "Maryland" },
    StateRef { usps: "MA", fips: "25", name: "Massachusetts" },
    StateRef { usps: "MI", fips: "26", name: "Michigan" },
    StateRef { usps: "MN", fips: "27", name: "Minnesota" },
    StateRef { usps: "MS", fips: "28", name: "Mississippi" },
    StateRef { usps: "MO", fips: "29", name: "Missouri" },
    StateRef { usps: "MP", fips: "69", name: "Northern Mariana Islands" },
    StateRef { usps: "MT", fips: "30", name: "Montana" },
    StateRef { usps: "NE", fips: "31", name: "Nebraska" },
    StateRef { usps: "NV", fips: "32", name: "Nevada" },
    StateRef { usps: "NH", fips: "33", name: "New Hampshire" },
    StateRef { usps: "NJ", fips: "34", name: "New Jersey" },
    StateRef { usps: "NM", fips: "35", name: "New Mexico" },
    StateRef { usps: "NY", fips: "36", name: "New York" },
    StateRef { usps: "NC", fips: "37", name: "North Carolina" },
    StateRef { usps: "ND", fips: "38", name: "North Dakota" },
    StateRef { usps: "OH", fips: "39", name: "Ohio" },
    StateRef { usps: "OK", fips: "40", name: "Oklahoma" },
    StateRef { usps: "OR", fips: "41", name: "Oregon" },
    StateRef { usps: "PA", fips: "42", name: "Pennsylvania" },
    StateRef { usps: "PR", fips: "72", name: "Puerto Rico" },
    StateRef { usps: "RI", fips: "44", name: "Rhode Island" },
    StateRef { usps: "SC", fips: "45", name: "South Carolina" },
    StateRef { usps: "SD", fips: "46", name: "South Dakota" },
    StateRef { usps: "TN", fips: "47", name: "Tennessee" },
    StateRef { usps: "TX", fips: "48", name: "Texas" },
    StateRef { usps: "UT", fips: "49", name: "Utah" },
    StateRef { usps: "VT", fips: "50", name: "Vermont" },
    StateRef { usps: "VA", fips: "51", name: "Virginia" },
    StateRef { usps: "VI", fips: "78", name: "U.S. Virgin Islands" },
    StateRef { usps: "WA", fips: "53", name: "Washington" },
    StateRef { usps: "WV", fips: "54", name: "West Virginia" },
    StateRef { usps: "WI", fips: "55", name: "Wisconsin" },
    StateRef { usps: "WY", fips: "56", name: "Wyoming" },
];

/// Looks up a state row by USPS code, case-insensitively.
pub fn state_ref(usps: &str) -> Option<&'static StateRef> {
    STATES.iter().find(|s| s.usps.eq_ignore_ascii_case(usps))
}

/// FIPS code for a USPS code, e.g. `"NY"` → `"36"`.
pub fn state_fips(usps: &str) -> Option<&'static str> {
    state_ref(usps).map(|s| s.fips)
}

/// GEOID for a district: state FIPS concatenated with the zero-padded
/// district number, e.g. NY district 9 → `"3609"`.
pub fn geo_id(usps: &str, district: u32) -> Option<String> {
    let fips = state_fips(usps)?;
    Some(format!("{fips}{district:02}"))
}
