//! String lookup tables backing `spec.md` §6's `get_*_str` operations.
//! Out of scope as "the hard part" per `spec.md` §1, but carried as data,
//! as plain `const` arrays rather than a runtime-built table.

/// RDS (European) Programme Type names, indexed 0..32.
pub const PTY_RDS: [&str; 32] = [
    "None", "News", "Affairs", "Info", "Sport", "Education", "Drama", "Culture", "Science",
    "Varied Speech", "Pop Music", "Rock Music", "Easy Listening", "Light Classics M",
    "Serious Classics", "Other Music", "Weather", "Finance", "Children", "Social Affairs",
    "Religion", "Phone In", "Travel & Touring", "Leisure & Hobby", "Jazz Music", "Country Music",
    "National Music", "Oldies Music", "Folk Music", "Documentary", "Alarm Test", "Alarm!",
];

/// RBDS (North American) Program Type names, indexed 0..32.
pub const PTY_RBDS: [&str; 32] = [
    "None", "News", "Information", "Sports", "Talk", "Rock", "Classic Rock", "Adult Hits",
    "Soft Rock", "Top 40", "Country", "Oldies", "Soft", "Nostalgia", "Jazz", "Classical", "R&B",
    "Soft R&B", "Foreign Language", "Religious Music", "Religious Talk", "Personality", "Public",
    "College", "Spanish Talk", "Spanish Music", "Hip-Hop", "Unassigned", "Unassigned", "Weather",
    "Emergency Test", "Emergency",
];

/// European (ECC region 0x0E) country table, indexed `[sub-id 0..5][country
/// nibble 0..16]`. `spec.md` §1 scopes this crate to ECC region E0–E4 only;
/// a `None` entry means the standard leaves that slot undefined.
pub const COUNTRY_E0_E4: [[Option<&str>; 16]; 5] = [
    [
        None, Some("DE"), Some("DZ"), Some("AD"), Some("IL"), Some("IT"), Some("BE"), Some("RU"),
        Some("PS"), Some("AL"), Some("AT"), Some("HU"), Some("MT"), Some("DE"), None, Some("EG"),
    ],
    [
        None, Some("GR"), Some("CY"), Some("SM"), Some("CH"), Some("JO"), Some("FI"), Some("LU"),
        Some("BG"), Some("DK"), Some("GI"), Some("IQ"), Some("GB"), Some("LY"), Some("RO"),
        Some("FR"),
    ],
    [
        None, Some("MA"), Some("CZ"), Some("PL"), Some("VA"), Some("SK"), Some("SY"), Some("TN"),
        None, Some("LI"), Some("IS"), Some("MC"), Some("LT"), Some("RS"), Some("ES"), Some("NO"),
    ],
    [
        None, Some("ME"), Some("IE"), Some("TR"), Some("MK"), None, None, None, Some("NL"),
        Some("LV"), Some("LB"), Some("AZ"), Some("HR"), Some("KZ"), Some("SE"), Some("BY"),
    ],
    [
        None, Some("MD"), Some("EE"), Some("KG"), None, None, Some("UA"), Some("-"), Some("PT"),
        Some("SI"), Some("AM"), None, Some("GE"), None, None, Some("BA"),
    ],
];

/// Language codes, indexed 0..128. `None` entries are undefined by the
/// standard.
pub const LANGUAGE: [Option<&str>; 128] = [
    Some("Unknown"), Some("Albanian"), Some("Breton"), Some("Catalan"), Some("Croatian"),
    Some("Welsh"), Some("Czech"), Some("Danish"), Some("German"), Some("English"),
    Some("Spanish"), Some("Esperanto"), Some("Estonian"), Some("Basque"), Some("Faroese"),
    Some("French"), Some("Frisian"), Some("Irish"), Some("Gaelic"), Some("Galician"),
    Some("Icelandic"), Some("Italian"), Some("Lappish"), Some("Latin"), Some("Latvian"),
    Some("Luxembourgian"), Some("Lithuanian"), Some("Hungarian"), Some("Maltese"), Some("Dutch"),
    Some("Norwegian"), Some("Occitan"), Some("Polish"), Some("Portuguese"), Some("Romanian"),
    Some("Ramansh"), Some("Serbian"), Some("Slovak"), Some("Slovene"), Some("Finnish"),
    Some("Swedish"), Some("Turkish"), Some("Flemish"), Some("Walloon"), None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, Some("Zulu"), Some("Vietnamese"), Some("Uzbek"),
    Some("Urdu"), Some("Ukrainian"), Some("Thai"), Some("Telugu"), Some("Tatar"), Some("Tamil"),
    Some("Tadzhik"), Some("Swahili"), Some("Sranan Tongo"), Some("Somali"), Some("Sinhalese"),
    Some("Shona"), Some("Serbo-Croat"), Some("Ruthenian"), Some("Russian"), Some("Quechua"),
    Some("Pushtu"), Some("Punjabi"), Some("Persian"), Some("Papamiento"), Some("Oriya"),
    Some("Nepali"), Some("Ndebele"), Some("Marathi"), Some("Moldavian"), Some("Malaysian"),
    Some("Malagasay"), Some("Macedonian"), Some("Laotian"), Some("Korean"), Some("Khmer"),
    Some("Kazahkh"), Some("Kannada"), Some("Japanese"), Some("Indonesian"), Some("Hindi"),
    Some("Hebrew"), Some("Hausa"), Some("Gurani"), Some("Gujurati"), Some("Greek"),
    Some("Georgian"), Some("Fulani"), Some("Dani"), Some("Churash"), Some("Chinese"),
    Some("Burmese"), Some("Bulgarian"), Some("Bengali"), Some("Belorussian"), Some("Bambora"),
    Some("Azerbaijani"), Some("Assamese"), Some("Armenian"), Some("Arabic"), Some("Amharic"),
];

/// Area coverage names, indexed 0..16 by `(pi >> 8) & 0x0F`.
pub const COVERAGE: [&str; 16] = [
    "Local", "International", "National", "Supra-Regional", "Regional 1", "Regional 2",
    "Regional 3", "Regional 4", "Regional 5", "Regional 6", "Regional 7", "Regional 8",
    "Regional 9", "Regional 10", "Regional 11", "Regional 12",
];

/// `spec.md` §4.8.3: length (in bits) of the data field following a TMC
/// additional-information label, indexed by label 0..16. Label 15 is
/// reserved (0-length, still consumes a label).
pub const TMC_ADDITIONAL_LEN: [u8; 16] = [3, 3, 5, 5, 5, 8, 8, 8, 8, 11, 16, 16, 16, 16, 0, 0];

/// PTY name lookup for `spec.md` §6's `get_pty_str`.
pub fn pty_str(pty: u8, is_rbds: bool) -> Option<&'static str> {
    let table = if is_rbds { &PTY_RBDS } else { &PTY_RDS };
    table.get(pty as usize).copied()
}

/// Country lookup for `spec.md` §6's `get_country_str`.
pub fn country_str(ecc: u8, country_code: u8) -> &'static str {
    let ecc_hi = ecc >> 4;
    let ecc_lo = (ecc & 0x0F) as usize;
    if ecc_hi == 0x0E && ecc_lo <= 4 {
        if let Some(name) = COUNTRY_E0_E4[ecc_lo][(country_code & 0x0F) as usize] {
            return name;
        }
    }
    "Unknown"
}

/// Language lookup for `spec.md` §6's `get_language_str`.
pub fn language_str(lc: u8) -> &'static str {
    LANGUAGE
        .get(lc as usize)
        .copied()
        .flatten()
        .unwrap_or("Unknown")
}

/// Coverage lookup for `spec.md` §6's `get_coverage_str`.
pub fn coverage_str(pi: u16) -> &'static str {
    let coverage = ((pi >> 8) & 0x0F) as usize;
    COVERAGE[coverage]
}
