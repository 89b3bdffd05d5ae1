use bit_array::Block;

fn width<B: Block>() -> usize {
    B::BITS
}

fn main() {
    width::<bool>();
}
