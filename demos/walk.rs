use bit_array::BitArray;

fn print(array: &BitArray<u8>) {
    let mut cursor = array.rbegin();
    while cursor != array.rend() {
        print!("{}", u8::from(cursor.get()));
        cursor.advance();
    }
    println!();
}

fn main() {
    let mut array = BitArray::<u8>::new(24);
    array.set_all();

    for idx in 0..array.size() {
        array.clear(idx);
        print(&array);
        array.set(idx);
    }

    for idx in (0..array.size()).rev() {
        array.clear(idx);
        print(&array);
        array.set(idx);
    }
}
