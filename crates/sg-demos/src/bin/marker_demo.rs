//! Shows that two accesses to `Marker` yield one instance.

use sg_core::{same_instance, Singleton};
use sg_demos::{telemetry, Marker};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init_tracing()?;

    let first = Marker::instance();
    let second = Marker::instance();

    println!("are first and second the same object? {}", same_instance(first, second));
    println!("identity of first:  {}", first.id());
    println!("identity of second: {}", second.id());
    Ok(())
}
