//! Wrap an accumulator factorial and drive it far past native stack depth.

use rebound_runtime::{wrap, Bounce};

fn main() {
    let fact = wrap(|f, (n, acc): (u64, u64)| {
        if n == 0 {
            Ok(Bounce::Land(acc))
        } else {
            f.call((n - 1, acc.wrapping_mul(n)))
        }
    });

    println!("fact(4)  = {}", fact.invoke((4, 1)).unwrap());
    println!("fact(20) = {}", fact.invoke((20, 1)).unwrap());

    // A depth no direct recursion survives; the product wraps mod 2^64 but
    // the stack stays flat.
    let deep = fact.invoke((1_000_000, 1)).unwrap();
    println!("fact(1_000_000) mod 2^64 = {deep}");
    println!("stats: {:?}", fact.stats());
}
