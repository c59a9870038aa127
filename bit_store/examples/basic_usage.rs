use bit_store::BitStore;

fn main() {
    println!("=== Bit Store Examples ===\n");

    // Example 1: Construction and rendering
    example_construction();

    // Example 2: Bitwise combination
    let _ = example_combinators();

    // Example 3: Shifting across word boundaries
    example_shifts();
}

fn example_construction() {
    println!("Example 1: Construction and rendering");

    let mut bits = BitStore::with_word(8, 0b1010_1010);
    println!("  with_word(8, 0b10101010) -> {}", bits);

    bits.push(true);
    bits.resize(12, false);
    println!("  after push + resize(12)  -> {}", bits);
    println!("  {} of {} bits set", bits.count(), bits.len());
    println!();
}

fn example_combinators() -> Result<(), bit_store::BitStoreError> {
    println!("Example 2: Bitwise combination");

    let mut readers = BitStore::with_len(8);
    readers.set(0, true);
    readers.set(3, true);

    let mut writers = BitStore::with_len(8);
    writers.set(2, true);
    writers.set(3, true);

    println!("  readers          -> {}", readers);
    println!("  writers          -> {}", writers);
    println!("  both             -> {}", readers.and(&writers)?);
    println!("  either           -> {}", readers.or(&writers)?);
    println!("  exactly one      -> {}", readers.xor(&writers)?);
    println!("  non-readers      -> {}", !&readers);
    println!();

    Ok(())
}

fn example_shifts() {
    println!("Example 3: Shifting across word boundaries");

    let mut bits = BitStore::with_len(70);
    bits.set(0, true);
    bits.set(1, true);

    bits <<= 63;
    println!(
        "  after << 63: bits {:?} set out of {}",
        (0..bits.len()).filter(|&i| bits.get(i) == Ok(true)).collect::<Vec<_>>(),
        bits.len()
    );

    bits >>= 63;
    println!(
        "  after >> 63: bits {:?} set out of {}",
        (0..bits.len()).filter(|&i| bits.get(i) == Ok(true)).collect::<Vec<_>>(),
        bits.len()
    );
}
