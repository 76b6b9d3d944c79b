//! Predefined Cinema City Hungary sites.
//!
//! The ids are stable upstream identifiers; the listing endpoint is the
//! source of truth for sites that opened after this catalog was written.

use once_cell::sync::Lazy;

use crate::models::Cinema;

pub static ALBA: Lazy<Cinema> = Lazy::new(|| Cinema::new("1124", "Alba - Székesfehérvár"));
pub static ALLE: Lazy<Cinema> = Lazy::new(|| Cinema::new("1133", "Allee - Budapest"));
pub static ARENA: Lazy<Cinema> = Lazy::new(|| Cinema::new("1132", "Aréna - Budapest"));
pub static BALATON: Lazy<Cinema> = Lazy::new(|| Cinema::new("1131", "Balaton - Veszprém"));
pub static CAMPONA: Lazy<Cinema> = Lazy::new(|| Cinema::new("1139", "Campona - Budapest"));
pub static DEBRECEN: Lazy<Cinema> = Lazy::new(|| Cinema::new("1127", "Debrecen"));
pub static DUNA_PLAZA: Lazy<Cinema> = Lazy::new(|| Cinema::new("1141", "Duna Pláza - Budapest"));
pub static GYOR: Lazy<Cinema> = Lazy::new(|| Cinema::new("1125", "Győr"));
pub static MISKOLC: Lazy<Cinema> = Lazy::new(|| Cinema::new("1129", "Miskolc"));
pub static NYIREGYHAZA: Lazy<Cinema> = Lazy::new(|| Cinema::new("1143", "Nyíregyháza"));
pub static PECS: Lazy<Cinema> = Lazy::new(|| Cinema::new("1128", "Pécs"));
pub static SAVARIA: Lazy<Cinema> = Lazy::new(|| Cinema::new("1134", "Savaria - Szombathely"));
pub static SOPRON: Lazy<Cinema> = Lazy::new(|| Cinema::new("1136", "Sopron"));
pub static SZEGED: Lazy<Cinema> = Lazy::new(|| Cinema::new("1126", "Szeged"));
pub static SZOLNOK: Lazy<Cinema> = Lazy::new(|| Cinema::new("1130", "Szolnok"));
pub static WESTEND: Lazy<Cinema> = Lazy::new(|| Cinema::new("1137", "Westend - Budapest"));
pub static ZALAEGERSZEG: Lazy<Cinema> = Lazy::new(|| Cinema::new("1135", "Zalaegerszeg"));

pub static ALL_CINEMAS: Lazy<Vec<Cinema>> = Lazy::new(|| {
    vec![
        ALBA.clone(),
        ALLE.clone(),
        ARENA.clone(),
        BALATON.clone(),
        CAMPONA.clone(),
        DEBRECEN.clone(),
        DUNA_PLAZA.clone(),
        GYOR.clone(),
        MISKOLC.clone(),
        NYIREGYHAZA.clone(),
        PECS.clone(),
        SAVARIA.clone(),
        SOPRON.clone(),
        SZEGED.clone(),
        SZOLNOK.clone(),
        WESTEND.clone(),
        ZALAEGERSZEG.clone(),
    ]
});

/// The five Budapest sites, the usual search scope.
pub static BUDAPEST_CINEMAS: Lazy<Vec<Cinema>> = Lazy::new(|| {
    vec![
        ALLE.clone(),
        ARENA.clone(),
        CAMPONA.clone(),
        DUNA_PLAZA.clone(),
        WESTEND.clone(),
    ]
});
