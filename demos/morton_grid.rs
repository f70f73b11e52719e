//! Z-order walk over a small grid, plus zig-zag encoded deltas between
//! consecutive keys.

use smol_bits::{MortonKey, num_used_bits, select1, zigzag_encode};

fn main() {
    const SIDE: u32 = 4;

    let mut keys: Vec<MortonKey> = (0..SIDE)
        .flat_map(|y| (0..SIDE).map(move |x| MortonKey::new(x, y)))
        .collect();
    keys.sort();

    println!("Z-order over a {SIDE}x{SIDE} grid:");
    let mut grid = [[0usize; SIDE as usize]; SIDE as usize];
    for (order, key) in keys.iter().enumerate() {
        let (x, y) = key.coords();
        grid[y as usize][x as usize] = order;
    }
    for row in grid.iter().rev() {
        let cells: Vec<String> = row.iter().map(|o| format!("{o:2}")).collect();
        println!("  {}", cells.join(" "));
    }

    println!("\nDeltas of x between consecutive keys:");
    let mut prev_x = 0i64;
    for key in &keys {
        let x = i64::from(key.x());
        let delta = x - prev_x;
        let encoded = zigzag_encode(delta);
        println!(
            "  {key:?}: delta {delta:+} -> {encoded} ({} bits)",
            num_used_bits(encoded)
        );
        prev_x = x;
    }

    let last = keys[keys.len() - 1];
    println!("\nLast key {last} = {last:#b}");
    if let Some(pos) = select1(last.raw(), 1) {
        println!("Lowest set bit of the last key is at position {pos}");
    }
}
