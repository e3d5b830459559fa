//! Shows that every access to `GlobalCounter` reaches the same counter.

use sg_core::{same_instance, Singleton};
use sg_demos::{telemetry, GlobalCounter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init_tracing()?;

    println!("Starting Singleton pattern test (global counter)");

    let created = !GlobalCounter::holder().is_initialized();
    let counter1 = GlobalCounter::instance();
    if created {
        println!("GlobalCounter instance created");
    }
    println!("counter incremented to: {}", counter1.increment());
    println!("counter incremented to: {}", counter1.increment());
    println!("{}", counter1.show());

    let counter2 = GlobalCounter::instance();
    println!("counter incremented to: {}", counter2.increment());

    println!(
        "are counter1 and counter2 the same instance? {}",
        same_instance(counter1, counter2)
    );
    println!("{}", counter1.show());

    println!("Test finished");
    Ok(())
}
