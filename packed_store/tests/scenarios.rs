//! Exact buffer renderings for known configurations.

use num_bigint::{BigInt, BigUint};
use packed_store::{PackedArrayStore, PackedStoreError, StoreConfig};

const VERSION: u32 = 1_563_669_060;
const VERSION_HEADER: &str = "01011101 00110011 10110010 01000100";

fn big(n: u64) -> BigUint {
    BigUint::from(n)
}

#[test]
fn one_byte_header() -> Result<(), PackedStoreError> {
    let store = PackedArrayStore::new(StoreConfig::new(1, 1, 16))?;
    assert_eq!(
        store.render(),
        "00110000 : 0000000000000000 0000000000000000 "
    );
    assert_eq!(store.version(), &big(1));
    assert_eq!(store.header_byte_size(), 1);
    assert_eq!(store.data_bit_width(), 16);
    assert_eq!(store.max_value(), &big(65535));
    Ok(())
}

#[test]
fn two_byte_header() -> Result<(), PackedStoreError> {
    let store = PackedArrayStore::with_values(StoreConfig::new(255, 2, 8), [255u8, 200])?;
    assert_eq!(store.render(), "11111111 00001000 : 11111111 11001000 ");
    Ok(())
}

#[test]
fn three_byte_header() -> Result<(), PackedStoreError> {
    let store = PackedArrayStore::with_values(StoreConfig::new(255, 3, 8), [255u8, 200])?;
    assert_eq!(
        store.render(),
        "00000000 11111111 00001000 : 11111111 11001000 "
    );
    Ok(())
}

#[test]
fn four_byte_header() -> Result<(), PackedStoreError> {
    let store = PackedArrayStore::with_values(StoreConfig::new(255, 4, 8), [255u8, 200])?;
    assert_eq!(
        store.render(),
        "00000000 00000000 11111111 00001000 : 11111111 11001000 "
    );
    Ok(())
}

#[test]
fn five_byte_header_with_values() -> Result<(), PackedStoreError> {
    let store =
        PackedArrayStore::with_values(StoreConfig::new(VERSION, 5, 16), [12000u16, 2413])?;
    assert_eq!(
        store.render(),
        format!("{VERSION_HEADER} 00010000 : 0010111011100000 0000100101101101 ")
    );
    assert_eq!(store.read(0)?, big(12000));
    assert_eq!(store.read(1)?, big(2413));
    Ok(())
}

#[test]
fn ten_bit_elements() -> Result<(), PackedStoreError> {
    let mut store =
        PackedArrayStore::with_values(StoreConfig::new(VERSION, 5, 10), [520u16, 1023])?;
    assert_eq!(
        store.render(),
        format!("{VERSION_HEADER} 00001010 : 1000001000 1111111111 0000")
    );
    assert_eq!(store.read(0)?, big(520));
    assert_eq!(store.read(1)?, big(1023));

    store.write(3, 888u16)?;
    assert_eq!(store.read(3)?, big(888));
    assert_eq!(
        store.render(),
        format!(
            "{VERSION_HEADER} 00001010 : 1000001000 1111111111 0000000000 1101111000 00000000"
        )
    );

    store.write(2, 56u16)?;
    assert_eq!(store.read(3)?, big(888));
    assert_eq!(store.read(2)?, big(56));
    assert_eq!(
        store.render(),
        format!(
            "{VERSION_HEADER} 00001010 : 1000001000 1111111111 0000111000 1101111000 00000000"
        )
    );

    let before = store.as_bytes().to_vec();
    assert!(matches!(
        store.read(4),
        Err(PackedStoreError::IndexOutOfBounds {
            index: 4,
            start: 5,
            end: 7,
            len: 6
        })
    ));
    assert_eq!(store.as_bytes(), before.as_slice());
    Ok(())
}

#[test]
fn overflowing_value() -> Result<(), PackedStoreError> {
    let mut store =
        PackedArrayStore::with_values(StoreConfig::new(VERSION, 5, 10), [520u16, 1023])?;
    let err = store.write(1, 1024u16).unwrap_err();
    assert_eq!(err.to_string(), "value is bigger than 1023");
    assert_eq!(store.read(1)?, big(1023));
    Ok(())
}

#[test]
fn growth_on_write() -> Result<(), PackedStoreError> {
    let mut store =
        PackedArrayStore::with_values(StoreConfig::new(VERSION, 5, 8), [120u8, 200, 80, 55])?;
    assert_eq!(
        store.render(),
        format!("{VERSION_HEADER} 00001000 : 01111000 11001000 01010000 00110111 ")
    );

    store.write(4, 33u8)?;
    assert_eq!(
        store.render(),
        format!(
            "{VERSION_HEADER} 00001000 : 01111000 11001000 01010000 00110111 00100001 00000000 00000000 00000000 "
        )
    );
    Ok(())
}

#[test]
fn thirty_two_bit_elements() -> Result<(), PackedStoreError> {
    let store = PackedArrayStore::with_values(StoreConfig::new(VERSION, 5, 32), [2147483642u32])?;
    assert_eq!(
        store.render(),
        format!(
            "{VERSION_HEADER} 00100000 : 01111111111111111111111111111010 00000000000000000000000000000000 "
        )
    );
    assert_eq!(store.read(0)?, big(2147483642));
    Ok(())
}

#[test]
fn negative_version_is_rejected() {
    let result = PackedArrayStore::with_values(StoreConfig::new(-1, 1, 16), [100u8]);
    assert!(matches!(result, Err(PackedStoreError::InvalidArgument(_))));
}

#[test]
fn default_configuration() -> Result<(), PackedStoreError> {
    let store = PackedArrayStore::new(StoreConfig::default())?;
    assert_eq!(store.render(), "00101000 : 00000000 00000000 ");
    Ok(())
}

#[test]
fn big_integer_version() -> Result<(), PackedStoreError> {
    let version = BigInt::parse_bytes(b"101011111111000000001111111100000000", 2)
        .expect("valid binary literal");
    let store = PackedArrayStore::with_values(StoreConfig::new(version, 6, 8), [255u8, 200])?;
    assert_eq!(
        store.render(),
        "00001010 11111111 00000000 11111111 00000000 00001000 : 11111111 11001000 "
    );
    Ok(())
}

#[test]
fn values_wider_than_a_machine_word() -> Result<(), PackedStoreError> {
    let mut store = PackedArrayStore::new(StoreConfig::new(1, 2, 130))?;
    let a = (BigUint::from(1u8) << 129usize) | big(0xDEAD_BEEF);
    let b = (BigUint::from(1u8) << 130usize) - big(1);

    store.write(0, a.clone())?;
    store.write(1, b.clone())?;
    store.write(2, a.clone())?;

    assert_eq!(store.read(0)?, a);
    assert_eq!(store.read(1)?, b);
    assert_eq!(store.read(2)?, a);
    assert!(store.write(3, b + big(1)).is_err());
    Ok(())
}
