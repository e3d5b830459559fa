//! Shows that two accesses to `Logger` yield one instance, logs through both,
//! then waits for Enter.

use std::io;

use sg_core::{same_instance, Singleton};
use sg_demos::{telemetry, Logger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init_tracing()?;

    let logger1 = Logger::instance();
    let logger2 = Logger::instance();
    let same = same_instance(logger1, logger2);

    println!("are logger1 and logger2 the same object? {same}");
    println!("identity of logger1: {}", logger1.id());
    println!("identity of logger2: {}", logger2.id());
    if same {
        println!("both are the same instance {}", logger1.id() == logger2.id());
    } else {
        println!("they are different instances {}", logger1.id() == logger2.id());
    }

    logger1.log("test")?;
    logger2.log("test2")?;

    println!("press Enter to exit");
    io::stdin().read_line(&mut String::new())?;
    Ok(())
}
