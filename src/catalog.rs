//! Reference explosive products
//!
//! Properties from the ENAEX product manual.

use crate::explosive::Explosive;

/// (name, density g/cm³, VOD m/s, RWS %, water resistant)
type CatalogEntry = (&'static str, f64, f64, f64, bool);

const CATALOG: &[CatalogEntry] = &[
    ("ANFO", 0.78, 4000.0, 100.0, false),
    ("Blendex 930", 1.0, 3920.0, 93.0, false),
];

/// Names of all catalogued products
pub fn names() -> Vec<&'static str> {
    CATALOG.iter().map(|entry| entry.0).collect()
}

/// Look up a catalogued product by name, ignoring case.
pub fn lookup(name: &str) -> Option<Explosive> {
    let wanted = name.trim().to_uppercase();
    CATALOG
        .iter()
        .find(|entry| entry.0.to_uppercase() == wanted)
        .and_then(|&(name, density, vod, rws, water_resistant)| {
            Explosive::new(name, density, vod, rws, water_resistant).ok()
        })
}

/// All catalogued products
pub fn all() -> Vec<Explosive> {
    names().into_iter().filter_map(lookup).collect()
}
