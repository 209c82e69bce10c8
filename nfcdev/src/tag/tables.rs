// nfcdev/src/tag/tables.rs
//! Static reference data for ST25TB UIDs: IC manufacturer codes and the
//! per-manufacturer product (model) codes.

/// One entry of a manufacturer's product table.
///
/// A product code is either the top `width` bits of UID byte 2 (logical
/// order) or the whole byte when `width == 8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ModelEntry {
    /// Bits of the product code: 6 or 8.
    pub width: u8,
    /// Product code, right aligned.
    pub pattern: u8,
    /// Product name.
    pub name: &'static str,
}

const fn model(width: u8, pattern: u8, name: &'static str) -> ModelEntry {
    ModelEntry {
        width,
        pattern,
        name,
    }
}

/// IC manufacturer codes (ISO/IEC 7816-6).
pub const MANUFACTURERS: &[(u8, &str)] = &[
    (0x01, "Motorola"),
    (0x02, "ST Microelectronics"),
    (0x03, "Hitachi"),
    (0x04, "NXP Semiconductors"),
    (0x05, "Infineon Technologies"),
    (0x06, "Cylinc"),
    (0x07, "Texas Instruments Tag-it"),
    (0x08, "Fujitsu Limited"),
    (0x09, "Matsushita Electric Industrial"),
    (0x0A, "NEC"),
    (0x0B, "Oki Electric"),
    (0x0C, "Toshiba"),
    (0x0D, "Mitsubishi Electric"),
    (0x0E, "Samsung Electronics"),
    (0x0F, "Hyundai Electronics"),
    (0x10, "LG Semiconductors"),
    (0x16, "EM Microelectronic-Marin"),
    (0x1F, "Melexis"),
    (0x2B, "Maxim"),
    (0x33, "AMIC"),
    (0x44, "GenTag, Inc (USA)"),
    (0x45, "Invengo Information Technology Co.Ltd"),
];

/// ST Microelectronics products. Entries are tried in this order and the
/// first match wins. Each full-byte code also reads as one of the 6-bit codes
/// (0x1B >> 2 is SRI512), so the full-byte codes must come first.
pub const ST_MODELS: &[ModelEntry] = &[
    model(8, 0x1B, "ST25TB512-AC"),
    model(8, 0x1F, "ST25TB04K"),
    model(8, 0x33, "ST25TB512-AT"),
    model(8, 0x3F, "ST25TB02K"),
    model(6, 0b000011, "SRIX4K"),
    model(6, 0b000110, "SRI512"),
    model(6, 0b001100, "SRT512"),
    model(6, 0b000111, "SRI4K"),
    model(6, 0b001111, "SRI2K"),
];

/// Product tables by manufacturer code.
pub const MODELS: &[(u8, &[ModelEntry])] = &[(0x02, ST_MODELS)];

/// Name of manufacturer `code`, if listed.
pub fn manufacturer_name(code: u8) -> Option<&'static str> {
    MANUFACTURERS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Product table of `manufacturer`, if it has one.
pub fn models_for(manufacturer: u8) -> Option<&'static [ModelEntry]> {
    MODELS
        .iter()
        .find(|(c, _)| *c == manufacturer)
        .map(|(_, table)| *table)
}
