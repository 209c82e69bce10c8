use nfcdev::tag::st25tb::{identify, match_model};
use nfcdev::tag::St25tb;
use proptest::prelude::*;

use crate::common::fixtures;

fn uid(manufacturer: u8, byte2: u8) -> [u8; 8] {
    [0xD0, manufacturer, byte2, 0xA1, 0xB2, 0xC3, 0xD4, 0xE5]
}

#[test]
fn srix4k_six_bit_code() {
    let id = identify(uid(0x02, 0b0000_1100));
    let model = id.model().unwrap();
    assert_eq!(model.name, "SRIX4K");
    assert_eq!(model.width, 6);
    assert_eq!(model.pattern, 0b000011);
    // matched bits cleared, 6 serial bytes
    assert_eq!(
        id.serial().as_slice(),
        &[0x00, 0xA1, 0xB2, 0xC3, 0xD4, 0xE5]
    );
}

#[test]
fn st25tb512_ac_full_byte_code() {
    let id = identify(uid(0x02, 0x1B));
    assert_eq!(id.model().unwrap().name, "ST25TB512-AC");
    assert_eq!(id.model().unwrap().residual_bits(), 0);
    assert_eq!(id.serial().as_slice(), &[0xA1, 0xB2, 0xC3, 0xD4, 0xE5]);
}

#[test]
fn every_full_byte_model() {
    for (code, name) in [
        (0x1B, "ST25TB512-AC"),
        (0x1F, "ST25TB04K"),
        (0x33, "ST25TB512-AT"),
        (0x3F, "ST25TB02K"),
    ] {
        let (entry, cleared) = match_model(0x02, code).unwrap();
        assert_eq!(entry.name, name);
        assert_eq!(cleared, 0);
    }
}

#[test]
fn six_bit_models_keep_low_bits_after_full_byte_codes() {
    for (byte, name, residual) in [
        (0b0001_1010, "SRI512", 0b10),
        (0b0011_0001, "SRT512", 0b01),
        (0b0001_1111, "ST25TB04K", 0),
        (0b0001_1100, "SRI4K", 0b00),
        (0b0011_1110, "SRI2K", 0b10),
    ] {
        let (entry, cleared) = match_model(0x02, byte).unwrap();
        assert_eq!(entry.name, name, "byte {:#04x}", byte);
        assert_eq!(cleared, residual, "byte {:#04x}", byte);
    }
}

#[test]
fn unknown_manufacturer_skips_models() {
    let id = identify(uid(0xFF, 0x1B));
    assert_eq!(id.manufacturer(), None);
    assert_eq!(id.manufacturer_code(), 0xFF);
    assert!(id.model().is_none());
    assert_eq!(
        id.serial().as_slice(),
        &[0x1B, 0xA1, 0xB2, 0xC3, 0xD4, 0xE5]
    );
}

#[test]
fn known_manufacturer_without_models() {
    let id = identify(uid(0x04, 0x0C));
    assert_eq!(id.manufacturer(), Some("NXP Semiconductors"));
    assert!(id.model().is_none());
    assert_eq!(id.serial().as_slice().len(), 6);
}

#[test]
fn unknown_st_model() {
    let id = identify(uid(0x02, 0xFE));
    assert_eq!(id.manufacturer(), Some("ST Microelectronics"));
    assert!(id.model().is_none());
    assert_eq!(id.model_byte(), 0xFE);
    assert_eq!(id.serial().as_slice()[0], 0xFE);
}

#[test]
fn bad_msb_is_advisory() {
    let mut logical = uid(0x02, 0x1B);
    logical[0] = 0xC0;
    let id = identify(logical);
    assert!(!id.msb_ok());
    assert_eq!(id.model().unwrap().name, "ST25TB512-AC");
}

#[test]
fn identity_from_wire_uid() {
    let tag = St25tb::new(fixtures::st25tb_wire_uid());
    assert_eq!(tag.logical_uid(), fixtures::st25tb_logical_uid());
    let id = tag.identity();
    assert!(id.msb_ok());
    assert_eq!(id.manufacturer(), Some("ST Microelectronics"));
    assert_eq!(id.model().unwrap().name, "ST25TB512-AC");
    assert_eq!(id.serial().to_string(), "11:22:33:44:55");
    assert_eq!(
        St25tb::from_logical_uid(fixtures::st25tb_logical_uid()),
        tag
    );
}

proptest! {
    // Serial is 5 bytes after a full-byte match, 6 otherwise, and always
    // ends with the untouched tail of the UID.
    #[test]
    fn serial_shape(manufacturer in any::<u8>(), byte2 in any::<u8>(), tail in any::<[u8; 5]>()) {
        let mut logical = [0xD0, manufacturer, byte2, 0, 0, 0, 0, 0];
        logical[3..].copy_from_slice(&tail);
        let id = identify(logical);
        let serial = id.serial().as_slice();
        match id.model() {
            Some(m) if m.width == 8 => prop_assert_eq!(serial.len(), 5),
            Some(m) => {
                prop_assert_eq!(serial.len(), 6);
                prop_assert_eq!(serial[0] >> 2, 0);
                prop_assert_eq!(byte2 >> 2, m.pattern);
            }
            None => {
                prop_assert_eq!(serial.len(), 6);
                prop_assert_eq!(serial[0], byte2);
            }
        }
        prop_assert_eq!(&serial[serial.len() - 5..], &tail[..]);
    }
}
