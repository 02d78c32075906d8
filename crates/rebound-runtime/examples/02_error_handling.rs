//! Diagnostics: what happens when a routine is not actually tail recursive,
//! and how a routine's own failures pass through.

use rebound_runtime::{wrap, Bounce, TailCallError};

fn main() {
    // `n * fact(n - 1)` combines the recursive result, so it cannot be
    // trampolined; the wrapper reports it instead of answering wrongly.
    let fact = wrap(|f, n: u64| {
        if n == 0 {
            Ok(Bounce::Land(1u64))
        } else {
            let result = f.call(n - 1)?.into_value()?;
            Ok(Bounce::Land(n * result))
        }
    });
    match fact.invoke(4) {
        Err(err) if err.is_not_tail_recursive() => println!("diagnosed: {err}"),
        other => println!("unexpected: {other:?}"),
    }

    // Failures raised by the routine itself are untouched.
    let checked = wrap(|f, n: i64| {
        if n < 0 {
            return Err(TailCallError::routine(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "input must be non-negative",
            )));
        }
        if n == 0 {
            Ok(Bounce::Land(0i64))
        } else {
            f.call(n - 1)
        }
    });
    println!("checked(5)  = {:?}", checked.invoke(5));
    println!("checked(-1) = {:?}", checked.invoke(-1));
}
