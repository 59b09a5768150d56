use serde::Serialize;

use crate::error::{unknown_region_error, Error};

/// A state and the districts the place finder offers for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Region {
    pub state: &'static str,
    pub districts: &'static [&'static str],
}

const REGIONS: &[Region] = &[
    Region {
        state: "Tamil Nadu",
        districts: &[
            "Chennai",
            "Coimbatore",
            "Madurai",
            "Trichy",
            "Salem",
            "Tirunelveli",
            "Vellore",
            "Kanyakumari",
        ],
    },
    Region {
        state: "Kerala",
        districts: &[
            "Thiruvananthapuram",
            "Kochi",
            "Kozhikode",
            "Wayanad",
            "Munnar",
            "Alappuzha",
        ],
    },
];

pub fn regions() -> &'static [Region] {
    REGIONS
}

pub fn districts(state: &str) -> Option<&'static [&'static str]> {
    REGIONS
        .iter()
        .find(|region| region.state == state)
        .map(|region| region.districts)
}

pub fn validate(state: &str, district: &str) -> Result<(), Error> {
    match districts(state) {
        Some(districts) if districts.contains(&district) => Ok(()),
        _ => Err(unknown_region_error()),
    }
}

#[test]
fn catalogue_lookup() {
    assert_eq!(regions().len(), 2);
    assert_eq!(regions()[0].state, "Tamil Nadu");
    assert_eq!(districts("Kerala").map(|d| d.len()), Some(6));
    assert_eq!(districts("Goa"), None);
}

#[test]
fn district_must_belong_to_state() {
    assert!(validate("Tamil Nadu", "Madurai").is_ok());
    assert!(validate("Kerala", "Munnar").is_ok());

    assert_eq!(validate("Kerala", "Madurai").unwrap_err().code, 103);
    assert_eq!(validate("Goa", "Panaji").unwrap_err().code, 103);
    assert_eq!(validate("tamil nadu", "Madurai").unwrap_err().code, 103);
}
