//! Algerian administrative divisions used by the registration wizard.
//!
//! A trimmed static tree (wilaya → dayra → baladia) is enough for the mock
//! data set; lookups drive the cascading selects, where changing a parent
//! invalidates every selection below it.

/// Administrative district within a wilaya
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dayra {
    pub name: &'static str,
    pub baladias: &'static [&'static str],
}

/// Province
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wilaya {
    pub code: u8,
    pub name: &'static str,
    pub dayras: &'static [Dayra],
}

pub static WILAYAS: &[Wilaya] = &[
    Wilaya {
        code: 16,
        name: "Alger",
        dayras: &[
            Dayra {
                name: "Bab El Oued",
                baladias: &["Bab El Oued", "Casbah", "Bologhine"],
            },
            Dayra {
                name: "Hussein Dey",
                baladias: &["Hussein Dey", "Kouba", "Bourouba"],
            },
            Dayra {
                name: "Dar El Beida",
                baladias: &["Dar El Beida", "Bab Ezzouar"],
            },
        ],
    },
    Wilaya {
        code: 31,
        name: "Oran",
        dayras: &[
            Dayra {
                name: "Oran",
                baladias: &["Oran", "Es Senia"],
            },
            Dayra {
                name: "Arzew",
                baladias: &["Arzew", "Bethioua"],
            },
        ],
    },
    Wilaya {
        code: 25,
        name: "Constantine",
        dayras: &[
            Dayra {
                name: "Constantine",
                baladias: &["Constantine", "Hamma Bouziane"],
            },
            Dayra {
                name: "El Khroub",
                baladias: &["El Khroub", "Ain Smara"],
            },
        ],
    },
    Wilaya {
        code: 9,
        name: "Blida",
        dayras: &[
            Dayra {
                name: "Blida",
                baladias: &["Blida", "Bouarfa"],
            },
            Dayra {
                name: "Boufarik",
                baladias: &["Boufarik", "Soumaa"],
            },
        ],
    },
    Wilaya {
        code: 23,
        name: "Annaba",
        dayras: &[
            Dayra {
                name: "Annaba",
                baladias: &["Annaba", "Seraidi"],
            },
            Dayra {
                name: "El Hadjar",
                baladias: &["El Hadjar", "Sidi Amar"],
            },
        ],
    },
    Wilaya {
        code: 19,
        name: "Setif",
        dayras: &[
            Dayra {
                name: "Setif",
                baladias: &["Setif", "Ain Arnat"],
            },
            Dayra {
                name: "El Eulma",
                baladias: &["El Eulma", "Guelta Zerka"],
            },
        ],
    },
];

pub fn wilaya_names() -> Vec<&'static str> {
    WILAYAS.iter().map(|w| w.name).collect()
}

pub fn wilaya_by_name(name: &str) -> Option<&'static Wilaya> {
    WILAYAS.iter().find(|w| w.name == name)
}

/// Dayras of a wilaya; empty for an unknown wilaya.
pub fn dayras_of(wilaya: &str) -> &'static [Dayra] {
    wilaya_by_name(wilaya).map(|w| w.dayras).unwrap_or(&[])
}

/// Baladias of a dayra within a wilaya; empty when either level is unknown.
pub fn baladias_of(wilaya: &str, dayra: &str) -> &'static [&'static str] {
    dayras_of(wilaya)
        .iter()
        .find(|d| d.name == dayra)
        .map(|d| d.baladias)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_chain() {
        let dayras = dayras_of("Alger");
        assert!(dayras.iter().any(|d| d.name == "Hussein Dey"));
        let baladias = baladias_of("Alger", "Hussein Dey");
        assert!(baladias.contains(&"Kouba"));
    }

    #[test]
    fn test_unknown_levels_yield_empty() {
        assert!(dayras_of("Atlantis").is_empty());
        assert!(baladias_of("Alger", "Atlantis").is_empty());
        // a dayra name that exists, but under another wilaya
        assert!(baladias_of("Oran", "Hussein Dey").is_empty());
    }

    #[test]
    fn test_tree_has_no_duplicate_wilayas() {
        let mut names: Vec<_> = WILAYAS.iter().map(|w| w.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), WILAYAS.len());
    }
}
