//! Integration tests for the memory buffer contract.
//!
//! Exercises ByteMemBuffer through the public surface: strict scalar reads,
//! best-effort bulk copies, endianness dispatch, and trait-object use of the
//! shared MemBuffer capability.

use num_bigint::BigInt;

use membuf::{Address, AddressKind, ByteMemBuffer, Endianness, MemBuffer, MemBufferError};

fn addr() -> Address {
    Address::new(AddressKind::Virtual, 0x401000)
}

#[test]
fn byte_reads_match_construction_bytes() {
    let bytes = [0xDEu8, 0xAD, 0xBE, 0xEF];
    let buf = ByteMemBuffer::new(addr(), bytes.to_vec(), Endianness::Big);

    for (i, &b) in bytes.iter().enumerate() {
        assert_eq!(buf.get_byte(i as u64).unwrap(), b);
    }
    assert!(matches!(
        buf.get_byte(bytes.len() as u64),
        Err(MemBufferError::OutOfRange { .. })
    ));
}

#[test]
fn endianness_round_trip() {
    let be = ByteMemBuffer::new(addr(), vec![0x01, 0x02], Endianness::Big);
    assert_eq!(be.get_i16(0).unwrap(), 258);

    let le = ByteMemBuffer::new(addr(), vec![0x01, 0x02], Endianness::Little);
    assert_eq!(le.get_i16(0).unwrap(), 513);
}

#[test]
fn sign_semantics() {
    let buf = ByteMemBuffer::new(addr(), vec![0xFF, 0xFF], Endianness::Big);
    assert_eq!(buf.get_i16(0).unwrap(), -1);
    assert_eq!(buf.get_big_integer(0, 2, true).unwrap(), BigInt::from(-1));
    assert_eq!(
        buf.get_big_integer(0, 2, false).unwrap(),
        BigInt::from(65535)
    );
}

#[test]
fn width_boundaries_are_all_or_nothing() {
    let buf = ByteMemBuffer::new(addr(), vec![1, 2, 3, 4], Endianness::Big);

    assert_eq!(buf.get_i32(0).unwrap(), 0x0102_0304);
    // One byte past the window: nothing is read.
    assert!(matches!(
        buf.get_i32(1),
        Err(MemBufferError::OutOfRange { .. })
    ));
    assert!(matches!(
        buf.get_i64(0),
        Err(MemBufferError::OutOfRange { .. })
    ));
    assert!(matches!(
        buf.get_big_integer(1, 4, false),
        Err(MemBufferError::OutOfRange { .. })
    ));
}

#[test]
fn bulk_copy_is_best_effort() {
    let buf = ByteMemBuffer::new(addr(), vec![10, 20, 30, 40, 50], Endianness::Little);

    let mut dest = [0u8; 3];
    assert_eq!(buf.get_bytes(&mut dest, 1), 3);
    assert_eq!(dest, [20, 30, 40]);

    let mut dest = [0u8; 10];
    assert_eq!(buf.get_bytes(&mut dest, 2), 3);
    assert_eq!(&dest[..3], &[30, 40, 50]);

    let mut dest = [0x77u8; 4];
    assert_eq!(buf.get_bytes(&mut dest, 5), 0);
    assert_eq!(buf.get_bytes(&mut dest, 1000), 0);
    assert_eq!(dest, [0x77; 4]);
}

#[test]
fn varargs_construction_equivalence() {
    let from_values =
        ByteMemBuffer::from_values(addr(), Endianness::Big, &[1, 2, 255, 256]);
    let direct = ByteMemBuffer::new(addr(), vec![0x01, 0x02, 0xFF, 0x00], Endianness::Big);

    assert_eq!(from_values.len(), direct.len());
    for o in 0..direct.len() as u64 {
        assert_eq!(from_values.get_byte(o).unwrap(), direct.get_byte(o).unwrap());
    }
}

#[test]
fn live_memory_handle_is_never_available() {
    let buf = ByteMemBuffer::new(addr(), vec![1, 2, 3], Endianness::Big);
    assert!(matches!(buf.memory(), Err(MemBufferError::Unsupported(_))));

    let empty = ByteMemBuffer::new(addr(), Vec::new(), Endianness::Little);
    assert!(matches!(
        empty.memory(),
        Err(MemBufferError::Unsupported(_))
    ));
}

#[test]
fn empty_buffer_behavior() {
    let buf = ByteMemBuffer::new(addr(), Vec::new(), Endianness::Big);
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert!(matches!(
        buf.get_byte(0),
        Err(MemBufferError::OutOfRange { .. })
    ));
    let mut dest = [0u8; 4];
    assert_eq!(buf.get_bytes(&mut dest, 0), 0);
}

#[test]
fn decoding_through_trait_object() {
    // A holder of any MemBuffer variant gets the full contract, scalar
    // reads included, without knowing the concrete type.
    let buf = ByteMemBuffer::new(
        addr(),
        vec![0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0],
        Endianness::Big,
    );
    let dyn_buf: &dyn MemBuffer = &buf;

    assert_eq!(dyn_buf.address(), &addr());
    assert!(dyn_buf.is_big_endian());
    assert_eq!(dyn_buf.get_byte(0).unwrap(), 0x12);

    assert_eq!(dyn_buf.get_i16(0).unwrap(), 0x1234);
    assert_eq!(dyn_buf.get_i32(0).unwrap(), 0x1234_5678);
    assert_eq!(dyn_buf.get_i64(0).unwrap(), 0x1234_5678_9ABC_DEF0);
    assert_eq!(
        dyn_buf.get_big_integer(0, 8, false).unwrap(),
        BigInt::from(0x1234_5678_9ABC_DEF0u64)
    );
    assert!(matches!(
        dyn_buf.get_i16(7),
        Err(MemBufferError::OutOfRange { .. })
    ));
    assert!(matches!(
        dyn_buf.memory(),
        Err(MemBufferError::Unsupported(_))
    ));
}

#[test]
fn decoding_through_boxed_trait_object() {
    let boxed: Box<dyn MemBuffer> = Box::new(ByteMemBuffer::new(
        addr(),
        vec![0x01, 0x02],
        Endianness::Little,
    ));
    assert_eq!(boxed.get_i16(0).unwrap(), 0x0201);
}

#[test]
fn wide_big_integer_reads() {
    // 12-byte value, wider than any native scalar.
    let bytes: Vec<u8> = vec![
        0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
    ];
    let be = ByteMemBuffer::new(addr(), bytes.clone(), Endianness::Big);

    let unsigned = be.get_big_integer(0, 12, false).unwrap();
    assert_eq!(unsigned, (BigInt::from(1) << 95) + 1);

    // Top bit set: signed reinterpretation subtracts 2^(12*8).
    let signed = be.get_big_integer(0, 12, true).unwrap();
    assert_eq!(signed, unsigned - (BigInt::from(1) << 96));

    // Little-endian assembles the same bytes in the opposite order.
    let le = ByteMemBuffer::new(addr(), bytes, Endianness::Little);
    assert_eq!(
        le.get_big_integer(0, 12, false).unwrap(),
        (BigInt::from(1) << 88) + 0x80
    );
}

#[test]
fn zero_size_big_integer_reads_zero() {
    let buf = ByteMemBuffer::new(addr(), vec![0xFF], Endianness::Big);
    assert_eq!(buf.get_big_integer(0, 0, true).unwrap(), BigInt::from(0));
    assert_eq!(buf.get_big_integer(42, 0, false).unwrap(), BigInt::from(0));
}

#[test]
fn concurrent_reads_share_one_buffer() {
    use std::sync::Arc;
    use std::thread;

    let buf = Arc::new(ByteMemBuffer::new(
        addr(),
        (0u8..=255).collect::<Vec<u8>>(),
        Endianness::Little,
    ));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let buf = Arc::clone(&buf);
            thread::spawn(move || {
                for o in 0..buf.len() as u64 {
                    assert_eq!(buf.get_byte(o).unwrap(), o as u8);
                }
                // Each thread also does a scalar read somewhere different.
                buf.get_i32(t * 8).unwrap()
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
