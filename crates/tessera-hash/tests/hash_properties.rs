use proptest::{
    prelude::{any, prop},
    test_runner::{Config, TestCaseError, TestRunner},
};
use tessera_hash::{
    Hash, Hashable, combine, combine_iter, hash_bytes, hash_number, hash_of, hashable_by_bytes,
};

fn runner() -> TestRunner {
    TestRunner::new(Config {
        cases: 256,
        ..Config::default()
    })
}

fn packed(hashes: &[Hash]) -> Vec<u8> {
    hashes.iter().flat_map(|h| h.to_le_bytes()).collect()
}

#[test]
fn byte_hash_is_deterministic() {
    runner()
        .run(&prop::collection::vec(any::<u8>(), 0..64), |bytes| {
            let copy = bytes.clone();
            if hash_bytes(&bytes) != hash_bytes(&copy) {
                return Err(TestCaseError::fail("same bytes hashed differently"));
            }
            Ok(())
        })
        .expect("byte hash determinism");
}

#[test]
fn combination_matches_packed_byte_hash() {
    runner()
        .run(&prop::collection::vec(any::<u64>(), 2..16), |words| {
            let hashes: Vec<Hash> = words.into_iter().map(Hash).collect();
            let expected = hash_bytes(&packed(&hashes));
            if combine(&hashes) != expected {
                return Err(TestCaseError::fail("combine diverged from packed bytes"));
            }
            if combine_iter(hashes.iter().copied()) != expected {
                return Err(TestCaseError::fail("streamed combine diverged"));
            }
            Ok(())
        })
        .expect("combination packing");
}

#[test]
fn swapping_distinct_values_changes_the_combination() {
    runner()
        .run(&(any::<u64>(), any::<u64>()), |(a, b)| {
            if hash_number(a) == hash_number(b) {
                return Ok(());
            }
            if hash_of!(a, b) == hash_of!(b, a) {
                return Err(TestCaseError::fail(format!("{a} and {b} commute")));
            }
            Ok(())
        })
        .expect("order sensitivity");
}

#[test]
fn single_value_is_its_own_hash() {
    runner()
        .run(&any::<i64>(), |n| {
            if hash_of!(n) != hash_number(n) || combine(&[hash_number(n)]) != hash_number(n) {
                return Err(TestCaseError::fail("single value was rehashed"));
            }
            Ok(())
        })
        .expect("single value pass-through");
}

#[test]
fn known_combinations() {
    assert_eq!(hash_of!(), Hash::EMPTY);
    assert_eq!(hash_of!(5, 10), Hash(0x07debb9131d7184a));
    assert_eq!(hash_of!(10, 5), Hash(0xebcf3b20b037f911));
    assert_eq!(hash_of!("abc"), hash_of!("abc"));
    assert_eq!(hash_of!("abc"), Hash(0x0061beb719813114));
}

#[test]
fn mixed_arguments_hash_each_by_its_own_rule() {
    let id = Hash(0x1234);
    let mixed = hash_of!(id, "name", 3.5_f64);
    let manual = combine(&[id, hash_bytes(b"name"), hash_number(3.5_f64)]);
    assert_eq!(mixed, manual);
}

#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
struct Extent {
    width: u32,
    height: u32,
}

hashable_by_bytes!(Extent);

#[test]
fn opted_in_pod_types_hash_their_representation() {
    let extent = Extent {
        width: 1,
        height: 2,
    };
    let mut expected = Vec::new();
    expected.extend_from_slice(&1_u32.to_le_bytes());
    expected.extend_from_slice(&2_u32.to_le_bytes());
    if cfg!(target_endian = "little") {
        assert_eq!(extent.fingerprint(), hash_bytes(&expected));
    }
    assert_eq!(hash_of!(extent, extent), combine(&[extent.fingerprint(); 2]));
}
