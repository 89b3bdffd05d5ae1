use bit_array::BitArray;

fn reversed(array: &BitArray<u8>) -> String {
    let mut out = String::new();
    let mut cursor = array.crbegin();
    while cursor != array.crend() {
        out.push(if cursor.get() { '1' } else { '0' });
        cursor.advance();
    }
    out
}

fn main() {
    let mut array = BitArray::<u8>::new(24);
    array.set_all();

    for idx in 0..array.size() {
        array.clear(idx);
        let expected: String = (0..24).rev().map(|i| if i == idx { '0' } else { '1' }).collect();
        assert_eq!(reversed(&array), expected);
        array.set(idx);
    }
}
