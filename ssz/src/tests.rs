use core::error::Error;

use typenum::{U2, U4};

use crate::{
    BitList, ByteList, ContiguousVector, ReadError, Size, Ssz, SszReadDefault as _, SszSize as _,
    SszWrite as _,
};

#[derive(PartialEq, Eq, Default, Debug, Ssz)]
#[ssz(internal)]
struct Fixed {
    a: u64,
    b: bool,
}

#[derive(PartialEq, Eq, Default, Debug, Ssz)]
#[ssz(internal)]
struct Mixed {
    a: u64,
    list: ByteList<U4>,
    fixed: Fixed,
    bits: BitList<U4>,
}

#[test]
fn container_of_fixed_fields_is_fixed_size() {
    assert_eq!(Fixed::SIZE, Size::Fixed { size: 9 });
}

#[test]
fn container_with_variable_fields_is_variable_size() {
    assert_eq!(Mixed::SIZE, Size::Variable { minimum_size: 26 });
}

#[test]
fn container_places_variable_fields_after_fixed_part() -> Result<(), Box<dyn Error>> {
    let mixed = Mixed {
        a: 1,
        list: ByteList::try_from(vec![0xab, 0xcd])?,
        fixed: Fixed { a: 2, b: true },
        bits: BitList::try_from(vec![0b0000_0101])?,
    };

    let bytes = mixed.to_ssz()?;

    #[rustfmt::skip]
    let expected = [
        1, 0, 0, 0, 0, 0, 0, 0,
        25, 0, 0, 0,
        2, 0, 0, 0, 0, 0, 0, 0, 1,
        27, 0, 0, 0,
        0xab, 0xcd,
        0b0000_0101,
    ];

    assert_eq!(bytes, expected);
    assert_eq!(Mixed::from_ssz_default(bytes)?, mixed);

    Ok(())
}

#[test]
fn container_with_wrong_first_offset_is_rejected() {
    #[rustfmt::skip]
    let bytes = [
        1, 0, 0, 0, 0, 0, 0, 0,
        26, 0, 0, 0,
        2, 0, 0, 0, 0, 0, 0, 0, 1,
        27, 0, 0, 0,
        0xab, 0xcd,
        0b0000_0101,
    ];

    assert_eq!(
        Mixed::from_ssz_default(bytes),
        Err(ReadError::ContainerFirstOffsetMismatch {
            expected: 25,
            actual: 26,
        }),
    );
}

#[test]
fn vector_of_fixed_elements_is_read() -> Result<(), Box<dyn Error>> {
    #[rustfmt::skip]
    let bytes = [
        1, 0, 0, 0, 0, 0, 0, 0,
        2, 0, 0, 0, 0, 0, 0, 0,
    ];

    let vector = ContiguousVector::<u64, U2>::from_ssz_default(bytes)?;

    assert_eq!(vector.to_vec(), [1, 2]);
    assert_eq!(vector.to_ssz()?, bytes);

    Ok(())
}

#[test]
fn vector_of_variable_elements_is_read() -> Result<(), Box<dyn Error>> {
    let vector = ContiguousVector::<ByteList<U4>, U2>::try_from(vec![
        ByteList::try_from(vec![0xab])?,
        ByteList::try_from(vec![0xcd, 0xef])?,
    ])?;

    let bytes = vector.to_ssz()?;

    assert_eq!(bytes, [8, 0, 0, 0, 9, 0, 0, 0, 0xab, 0xcd, 0xef]);
    assert_eq!(
        ContiguousVector::<ByteList<U4>, U2>::from_ssz_default(bytes)?,
        vector,
    );

    Ok(())
}
