use bit_array::{BitArray, Block};

fn check<B: Block>() {
    let bit_count = B::BITS + B::BITS / 2;
    let mut array = BitArray::<B>::new(bit_count);
    array.set(0);
    array.set(bit_count - 1);

    let forward: Vec<bool> = array.iter().collect();
    let mut reverse: Vec<bool> = array.iter_rev().collect();
    reverse.reverse();
    assert_eq!(forward, reverse);
    assert_eq!(forward.iter().filter(|bit| **bit).count(), 2);
    assert!(array.at(bit_count).is_err());
}

fn main() {
    check::<u8>();
    check::<u16>();
    check::<u32>();
    check::<u64>();
    check::<u128>();
    check::<usize>();
    check::<i8>();
    check::<i16>();
    check::<i32>();
    check::<i64>();
    check::<i128>();
    check::<isize>();
}
